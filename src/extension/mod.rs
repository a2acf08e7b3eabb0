// src/extension/mod.rs - File-type scoped extension records

pub mod matcher;

pub use matcher::{Scope, file_extension};

use crate::arrayable::OneOrMany;
use crate::helper::Helper;

/// Display options and helpers scoped to a set of filenames or suffixes.
///
/// Set exactly one of `file_name` or `extension`. With both set, `file_name`
/// wins; with neither, the extension never applies.
#[derive(Debug, Clone, Default)]
pub struct Extension {
    pub file_name: Option<OneOrMany<String>>,
    pub extension: Option<OneOrMany<String>>,
    pub gutters: Option<OneOrMany<String>>,
    pub helpers: Option<OneOrMany<Helper>>,
    pub spell_check: Option<bool>,
}

impl Extension {
    pub fn for_file_name(names: impl Into<OneOrMany<String>>) -> Self {
        Self {
            file_name: Some(names.into()),
            ..Self::default()
        }
    }

    pub fn for_extension(exts: impl Into<OneOrMany<String>>) -> Self {
        Self {
            extension: Some(exts.into()),
            ..Self::default()
        }
    }

    pub fn with_gutters(mut self, gutters: impl Into<OneOrMany<String>>) -> Self {
        self.gutters = Some(gutters.into());
        self
    }

    pub fn with_spell_check(mut self, enabled: bool) -> Self {
        self.spell_check = Some(enabled);
        self
    }

    pub fn with_helper(mut self, helper: Helper) -> Self {
        match &mut self.helpers {
            Some(helpers) => helpers.push(helper),
            None => self.helpers = Some(OneOrMany::One(helper)),
        }
        self
    }

    pub fn scope(&self) -> Scope {
        Scope::of(self)
    }

    pub fn matches(&self, file_name: &str) -> bool {
        matcher::matches(file_name, self)
    }

    pub fn gutters(&self) -> &[String] {
        self.gutters.as_ref().map(|g| g.as_slice()).unwrap_or(&[])
    }

    pub fn helpers(&self) -> &[Helper] {
        self.helpers.as_ref().map(|h| h.as_slice()).unwrap_or(&[])
    }
}
