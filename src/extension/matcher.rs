// src/extension/matcher.rs - Decide which extensions apply to a filename

use super::Extension;
use crate::arrayable::OneOrMany;

/// Lower-cased text after the last `.`. A name without a dot is its own
/// suffix, so `"Makefile"` yields `"makefile"`.
pub fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// The matching condition of one extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Exact, case-sensitive filenames.
    FileName(OneOrMany<String>),
    /// Suffixes compared against [`file_extension`].
    Extension(OneOrMany<String>),
    /// Neither condition set: never matches.
    Unscoped,
}

impl Scope {
    pub fn of(extension: &Extension) -> Self {
        match (&extension.file_name, &extension.extension) {
            (Some(names), _) => Scope::FileName(names.clone()),
            (None, Some(exts)) => Scope::Extension(exts.clone()),
            (None, None) => Scope::Unscoped,
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.matches_with_extension(file_name, &file_extension(file_name))
    }

    /// Same as [`Scope::matches`] with the suffix computed by the caller, so a
    /// list of extensions can share one computation.
    pub fn matches_with_extension(&self, file_name: &str, ext: &str) -> bool {
        match self {
            Scope::FileName(names) => names.contains_str(file_name),
            Scope::Extension(exts) => exts.contains_str(ext),
            Scope::Unscoped => false,
        }
    }
}

pub fn matches(file_name: &str, extension: &Extension) -> bool {
    Scope::of(extension).matches(file_name)
}
