// src/config.rs - Extension declarations loaded from TOML

use crate::arrayable::OneOrMany;
use crate::builtin::{hint_builtin, lint_builtin};
use crate::extension::Extension;
use crate::helper::{Helper, HelperOptions};
use log::warn;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "extensions.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config format: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExtensionsConfig {
    pub theme: Option<String>,
    #[serde(default)]
    pub read_only: bool,
    /// Options passed to every lint callback.
    #[serde(default)]
    pub lint: HelperOptions,
    /// Options passed to every hint callback.
    #[serde(default)]
    pub hint: HelperOptions,
    #[serde(default, rename = "extension")]
    pub extensions: Vec<ExtensionDecl>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExtensionDecl {
    pub file_name: Option<OneOrMany<String>>,
    pub extension: Option<OneOrMany<String>>,
    pub gutters: Option<OneOrMany<String>>,
    pub helpers: Option<OneOrMany<HelperDecl>>,
    pub spell_check: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HelperDecl {
    pub kind: DeclaredKind,
    pub file_type: String,
    /// Name of a callback from [`crate::builtin`].
    pub builtin: String,
    #[serde(default)]
    pub options: HelperOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredKind {
    Lint,
    Hint,
    #[serde(other)]
    Unknown,
}

impl FromStr for ExtensionsConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

impl ExtensionsConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Build the extension list in declaration order. Helpers that cannot be
    /// resolved are dropped with a warning.
    pub fn extensions(&self) -> Vec<Extension> {
        self.extensions
            .iter()
            .cloned()
            .map(ExtensionDecl::into_extension)
            .collect()
    }
}

impl ExtensionDecl {
    pub fn into_extension(self) -> Extension {
        let helpers: Vec<Helper> = self
            .helpers
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .into_iter()
            .filter_map(HelperDecl::into_helper)
            .collect();

        Extension {
            file_name: self.file_name,
            extension: self.extension,
            gutters: self.gutters,
            helpers: (!helpers.is_empty()).then_some(OneOrMany::Many(helpers)),
            spell_check: self.spell_check,
        }
    }
}

impl HelperDecl {
    pub fn into_helper(self) -> Option<Helper> {
        match self.kind {
            DeclaredKind::Lint => match lint_builtin(&self.builtin, self.options) {
                Some(callback) => Some(Helper::Lint {
                    file_type: self.file_type,
                    callback,
                }),
                None => {
                    warn!(
                        "unknown lint builtin '{}' for '{}', helper ignored",
                        self.builtin, self.file_type
                    );
                    None
                }
            },
            DeclaredKind::Hint => match hint_builtin(&self.builtin, self.options) {
                Some(callback) => Some(Helper::Hint {
                    file_type: self.file_type,
                    callback,
                }),
                None => {
                    warn!(
                        "unknown hint builtin '{}' for '{}', helper ignored",
                        self.builtin, self.file_type
                    );
                    None
                }
            },
            DeclaredKind::Unknown => {
                warn!(
                    "helper '{}' for '{}' has an unrecognized kind, helper ignored",
                    self.builtin, self.file_type
                );
                None
            }
        }
    }
}

pub fn get_config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join("texty-ext")
}

/// Candidate config locations, most specific first: the user config dir,
/// then `~/.texty-ext`, then the working directory.
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![get_config_dir().join(CONFIG_FILE_NAME)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".texty-ext").join(CONFIG_FILE_NAME));
    }
    paths.push(PathBuf::from(".").join(CONFIG_FILE_NAME));
    paths
}

/// First of `paths` that exists.
pub fn first_existing<I>(paths: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    paths.into_iter().find(|p| p.exists())
}

pub fn find_config_file() -> Option<PathBuf> {
    first_existing(config_search_paths())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::HelperKind;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
theme = "monokai"
read-only = true

[lint]
max_line_length = 88

[[extension]]
extension = ["py", "pyi"]
gutters = "lint-markers"

[[extension.helpers]]
kind = "lint"
file-type = "python"
builtin = "trailing-whitespace"

[[extension.helpers]]
kind = "hint"
file-type = "python"
builtin = "keywords"
options = { words = ["def", "class"] }

[[extension]]
file-name = "README.md"
gutters = ["G1", "G2"]
spell-check = true
"#;

    #[test]
    fn test_parse_sample() {
        let config: ExtensionsConfig = SAMPLE.parse().unwrap();
        assert_eq!(config.theme.as_deref(), Some("monokai"));
        assert!(config.read_only);
        assert_eq!(config.lint.get_u64("max_line_length"), Some(88));
        assert_eq!(config.extensions.len(), 2);

        let extensions = config.extensions();
        let kinds: Vec<_> = extensions[0].helpers().iter().map(Helper::kind).collect();
        assert_eq!(kinds, vec![HelperKind::Lint, HelperKind::Hint]);
        assert!(extensions[0].matches("stub.pyi"));
        assert!(extensions[1].matches("README.md"));
        assert_eq!(extensions[1].gutters(), &["G1".to_string(), "G2".to_string()]);
        assert_eq!(extensions[1].spell_check, Some(true));
    }

    #[test]
    fn test_empty_config() {
        let config: ExtensionsConfig = "".parse().unwrap();
        assert!(config.theme.is_none());
        assert!(!config.read_only);
        assert!(config.extensions().is_empty());
    }

    #[test]
    fn test_single_helper_table() {
        let config: ExtensionsConfig = r#"
[[extension]]
extension = "rs"
helpers = { kind = "lint", file-type = "rust", builtin = "long-lines" }
"#
        .parse()
        .unwrap();
        assert_eq!(config.extensions()[0].helpers().len(), 1);
    }

    #[test]
    fn test_unknown_kind_and_builtin_are_inert() {
        let config: ExtensionsConfig = r#"
[[extension]]
extension = "py"

[[extension.helpers]]
kind = "format"
file-type = "python"
builtin = "black"

[[extension.helpers]]
kind = "lint"
file-type = "python"
builtin = "no-such-lint"

[[extension.helpers]]
kind = "hint"
file-type = "python"
builtin = "buffer-words"
"#
        .parse()
        .unwrap();
        assert_eq!(config.extensions[0].helpers.as_ref().unwrap().len(), 3);

        let extensions = config.extensions();
        assert_eq!(extensions[0].helpers().len(), 1);
        assert_eq!(extensions[0].helpers()[0].kind(), HelperKind::Hint);
    }

    #[test]
    fn test_invalid_toml() {
        let result: Result<ExtensionsConfig, _> = "[[extension]\n".parse();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, SAMPLE).unwrap();

        let config = ExtensionsConfig::from_file(&path).unwrap();
        assert_eq!(config.extensions.len(), 2);

        let missing = ExtensionsConfig::from_file(&dir.path().join("missing.toml"));
        let err = missing.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_config_dir_name() {
        assert!(get_config_dir().ends_with("texty-ext"));
    }

    #[test]
    fn test_search_path_order() {
        let paths = config_search_paths();
        assert_eq!(paths[0], get_config_dir().join(CONFIG_FILE_NAME));
        assert_eq!(paths.last(), Some(&PathBuf::from(".").join(CONFIG_FILE_NAME)));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(paths.len(), 3);
            assert_eq!(paths[1], home.join(".texty-ext").join(CONFIG_FILE_NAME));
        }
    }

    #[test]
    fn test_first_existing_prefers_earlier_locations() {
        let dir = TempDir::new().unwrap();
        let user = dir.path().join("user");
        let home = dir.path().join("home");
        let local = dir.path().join("local");
        for d in [&user, &home, &local] {
            fs::create_dir(d).unwrap();
        }
        let candidates = || {
            [&user, &home, &local]
                .into_iter()
                .map(|d| d.join(CONFIG_FILE_NAME))
                .collect::<Vec<_>>()
        };

        assert_eq!(first_existing(candidates()), None);

        fs::write(local.join(CONFIG_FILE_NAME), "").unwrap();
        assert_eq!(first_existing(candidates()), Some(local.join(CONFIG_FILE_NAME)));

        fs::write(home.join(CONFIG_FILE_NAME), "").unwrap();
        assert_eq!(first_existing(candidates()), Some(home.join(CONFIG_FILE_NAME)));

        fs::write(user.join(CONFIG_FILE_NAME), "").unwrap();
        assert_eq!(first_existing(candidates()), Some(user.join(CONFIG_FILE_NAME)));
    }
}
