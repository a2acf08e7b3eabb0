// src/applicator.rs - Apply an extension list to a live editor session

use crate::editor::{DisplayOptions, EditorWidget};
use crate::extension::{Extension, file_extension};
use crate::helper::HelperRegistry;
use log::debug;

/// Display options for `file_name`: gutters of every applicable extension in
/// list order (duplicates kept), spellcheck if any applicable extension asks
/// for it, and lint always on.
pub fn display_options(extensions: &[Extension], file_name: &str) -> DisplayOptions {
    let ext = file_extension(file_name);
    let mut display = DisplayOptions {
        gutters: Vec::new(),
        lint: true,
        spell_check: false,
    };

    for extension in extensions {
        if !extension.scope().matches_with_extension(file_name, &ext) {
            continue;
        }
        display.gutters.extend(extension.gutters().iter().cloned());
        display.spell_check |= extension.spell_check.unwrap_or(false);
    }
    display
}

/// Apply the display-affecting settings of `extensions` for `file_name` as a
/// single widget update.
pub fn apply_extensions<W: EditorWidget + ?Sized>(
    widget: &mut W,
    extensions: &[Extension],
    file_name: &str,
) {
    let display = display_options(extensions, file_name);
    debug!(
        "'{}': gutters {:?}, spellcheck {}",
        file_name, display.gutters, display.spell_check
    );
    widget.apply_display(display);
}

/// Register every helper declared across `extensions` with the widget.
pub fn register_helpers<W: EditorWidget + ?Sized>(
    widget: &mut W,
    extensions: &[Extension],
) -> HelperRegistry {
    let registry = HelperRegistry::from_extensions(extensions);
    registry.install(widget);
    registry
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Configured,
    Reconfigured,
}

/// Per-session driver: registers helpers once, then re-applies display
/// options whenever the active file or the theme changes.
#[derive(Debug)]
pub struct ExtensionApplicator {
    extensions: Vec<Extension>,
    registry: Option<HelperRegistry>,
    state: SessionState,
    file_name: Option<String>,
}

impl ExtensionApplicator {
    pub fn new(extensions: Vec<Extension>) -> Self {
        Self {
            extensions,
            registry: None,
            state: SessionState::Uninitialized,
            file_name: None,
        }
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn registry(&self) -> Option<&HelperRegistry> {
        self.registry.as_ref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// The widget's active file is now `file_name`. The first call registers
    /// helpers; every call re-applies display options.
    pub fn file_changed<W: EditorWidget + ?Sized>(&mut self, widget: &mut W, file_name: &str) {
        if self.state == SessionState::Uninitialized {
            let registry = register_helpers(widget, &self.extensions);
            debug!("registered {} helper dispatchers", registry.len());
            self.registry = Some(registry);
        }

        apply_extensions(widget, &self.extensions, file_name);
        self.file_name = Some(file_name.to_string());
        self.state = match self.state {
            SessionState::Uninitialized => SessionState::Configured,
            _ => SessionState::Reconfigured,
        };
    }

    /// Set the theme. Once a file is known, display options are re-applied.
    pub fn theme_changed<W: EditorWidget + ?Sized>(
        &mut self,
        widget: &mut W,
        theme: Option<String>,
    ) {
        widget.set_theme(theme);
        if let Some(file_name) = &self.file_name {
            apply_extensions(widget, &self.extensions, file_name);
            self.state = SessionState::Reconfigured;
        }
    }
}
