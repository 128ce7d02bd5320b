//! `compact`, `move` and `resize`.

use std::path::Path;

use tessel_common::{LayoutError, ResizeHandle, Result};
use tessel_config::GridConfig;
use tessel_grid::{
    compact as compact_layout, find_item, move_selection, resize_item, Changed, GridItem,
    LayoutUpdate, Selection,
};
use tracing::{info, warn};

use super::layout_io::{print_layout, read_layout};
use super::Outcome;

pub fn compact(path: &Path, config: &GridConfig) -> Result<Outcome> {
    let layout = read_layout(path)?;
    finish(compact_layout(&layout, config))
}

pub fn move_items(
    path: &Path,
    config: &GridConfig,
    select: &[String],
    dx: i32,
    dy: i32,
) -> Result<Outcome> {
    let layout = read_layout(path)?;
    let selection: Selection = select.iter().map(String::as_str).collect();
    warn_unknown(&layout, &selection);
    finish(move_selection(&layout, config, &selection, dx, dy))
}

pub fn resize(
    path: &Path,
    config: &GridConfig,
    key: &str,
    handle: ResizeHandle,
    dx: i32,
    dy: i32,
) -> Result<Outcome> {
    let layout = read_layout(path)?;
    if find_item(&layout, key).is_none() {
        return Err(LayoutError::UnknownKey(key.to_string()).into());
    }
    finish(resize_item(&layout, config, key, handle, dx, dy))
}

fn warn_unknown(layout: &[GridItem], selection: &Selection) {
    for key in selection.iter() {
        if find_item(layout, key.as_str()).is_none() {
            warn!(%key, "selected key not in layout, skipping");
        }
    }
}

fn finish(result: LayoutUpdate<'_>) -> Result<Outcome> {
    if !result.is_changed() {
        info!("layout unchanged");
    }
    print_layout(&result)?;
    Ok(Outcome::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_common::TesselError;

    fn layout_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("layout.json");
        std::fs::write(
            &path,
            r#"[{"key":"a","x":0,"y":2,"w":2,"h":1},{"key":"b","x":2,"y":0,"w":1,"h":1}]"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn compact_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = compact(&layout_file(&dir), &GridConfig::default()).unwrap();
        assert_eq!(outcome, Outcome::Success);
    }

    #[test]
    fn move_skips_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let select = vec!["a".to_string(), "ghost".to_string()];
        let outcome = move_items(&layout_file(&dir), &GridConfig::default(), &select, 1, 0).unwrap();
        assert_eq!(outcome, Outcome::Success);
    }

    #[test]
    fn resize_unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resize(
            &layout_file(&dir),
            &GridConfig::default(),
            "ghost",
            ResizeHandle::E,
            1,
            0,
        )
        .unwrap_err();
        assert!(matches!(err, TesselError::Layout(LayoutError::UnknownKey(_))));
    }
}
