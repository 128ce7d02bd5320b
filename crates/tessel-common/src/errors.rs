use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("duplicate item key: {0}")]
    DuplicateKey(String),

    #[error("item at index {0} has an empty key")]
    EmptyKey(usize),

    #[error("unknown item key: {0}")]
    UnknownKey(String),

    #[error("unknown resize handle: {0}")]
    UnknownHandle(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TesselError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("layout json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
