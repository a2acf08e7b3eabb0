// lib.rs - Library root for texty-ext, the extension helper layer

pub mod applicator;
pub mod arrayable;
pub mod builtin;
pub mod cli;
pub mod config;
pub mod cursor;
pub mod document;
pub mod editor;
pub mod extension;
pub mod helper;
pub mod mode;

pub use applicator::{ExtensionApplicator, SessionState, apply_extensions, register_helpers};
pub use arrayable::OneOrMany;
pub use cursor::Position;
pub use editor::{Editor, EditorHandle, EditorWidget};
pub use extension::{Extension, file_extension};
pub use helper::{Helper, HelperKind, HelperOptions, HelperRegistry, HintResult, LintFinding};
