// src/mode.rs - File-type modes (the widget's helper registration keys)

use crate::extension::matcher::file_extension;

/// Widget file-type key for a filename, or `None` when the suffix is unknown.
pub fn mode_for_file_name(file_name: &str) -> Option<&'static str> {
    mode_for_extension(&file_extension(file_name))
}

pub fn mode_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "rs" => Some("rust"),
        "py" | "pyi" => Some("python"),
        "js" | "mjs" | "cjs" => Some("javascript"),
        "ts" => Some("typescript"),
        "md" | "markdown" => Some("markdown"),
        "toml" => Some("toml"),
        "json" => Some("json"),
        "txt" => Some("text"),
        _ => None,
    }
}
