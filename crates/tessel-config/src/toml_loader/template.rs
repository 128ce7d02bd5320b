//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tessel Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[grid]
# columns = 12               # 1-256
# row_height = 30.0          # pixels, > 0
# gap = 0.0                  # pixels, used for both axes
# column_gap = 0.0           # overrides gap horizontally
# row_gap = 0.0              # overrides gap vertically
# resize_handles = ["e", "se", "s", "sw", "w"]   # any of n, ne, e, se, s, sw, w, nw
# resize_threshold = 10.0    # pixels from an edge that grab a handle
# editable = true

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
