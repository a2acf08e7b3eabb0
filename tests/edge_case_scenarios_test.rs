// tests/edge_case_scenarios_test.rs - Unusual extension lists and editor states

mod common;
use common::{recording, session, tagged};

use texty_ext::applicator::{ExtensionApplicator, SessionState, display_options};
use texty_ext::config::ExtensionsConfig;
use texty_ext::cursor::Position;
use texty_ext::editor::{Editor, EditorWidget};
use texty_ext::extension::Extension;
use texty_ext::helper::HelperKind;

/// Helpers never run before the editor has an active filename
#[test]
fn test_unnamed_buffer_runs_no_helpers() {
    let log = recording::new_log();
    let extensions =
        vec![Extension::for_extension("py").with_helper(recording::lint("python", "x", &log))];

    let mut editor = Editor::new();
    let mut applicator = ExtensionApplicator::new(extensions);
    applicator.file_changed(&mut editor, "");
    editor.set_mode(Some("python".to_string()));

    assert!(editor.lint().unwrap().is_empty());
    assert!(recording::calls(&log).is_empty());
}

/// An extension with neither a filename nor a suffix is carried but inert
#[test]
fn test_unscoped_extension_contributes_nothing() {
    let extensions = vec![
        Extension::default()
            .with_gutters("ghost")
            .with_spell_check(true)
            .with_helper(tagged::lint("python", "ghost")),
    ];
    let display = display_options(&extensions, "main.py");
    assert!(display.gutters.is_empty());
    assert!(!display.spell_check);

    let mut applicator = ExtensionApplicator::new(extensions);
    let mut editor = session::editor_with("main.py", "");
    applicator.file_changed(&mut editor, "main.py");

    // The dispatcher exists but its only helper never applies
    assert!(editor.lint_helper("python").is_some());
    assert!(editor.lint().unwrap().is_empty());
}

/// With both fields set the exact filename decides
#[test]
fn test_file_name_wins_over_extension() {
    let extension = Extension {
        extension: Some("py".into()),
        ..Extension::for_file_name("setup.py")
    }
    .with_gutters("setup");
    let extensions = vec![extension];

    assert_eq!(display_options(&extensions, "setup.py").gutters, vec!["setup"]);
    assert!(display_options(&extensions, "main.py").gutters.is_empty());
}

/// Empty filenames match nothing, not even an empty suffix
#[test]
fn test_empty_file_name() {
    let extensions = vec![
        Extension::for_extension("py").with_gutters("py"),
        Extension::for_file_name("x").with_gutters("x"),
    ];
    let display = display_options(&extensions, "");
    assert!(display.gutters.is_empty());
    assert!(display.lint);
}

/// Suffixes declared in upper case are compared as written
#[test]
fn test_declared_suffix_is_not_lowercased() {
    let extensions = vec![Extension::for_extension("PY").with_gutters("upper")];
    assert!(display_options(&extensions, "MAIN.PY").gutters.is_empty());
}

/// A hint dispatcher whose helpers all skip the file yields no hint at all
#[test]
fn test_hint_with_zero_contributors() {
    let extensions = vec![Extension::for_extension("rs").with_helper(tagged::hint(
        "python",
        "never",
        Position::new(0, 0),
        Position::new(0, 0),
    ))];
    let mut applicator = ExtensionApplicator::new(extensions);
    let mut editor = session::editor_with("main.py", "pri");
    applicator.file_changed(&mut editor, "main.py");

    assert!(editor.hint_helper("python").is_some());
    assert_eq!(editor.hint().unwrap(), None);
}

/// An applicable hint with no suggestions still reports its range
#[test]
fn test_hint_with_empty_applicable_result() {
    let config: ExtensionsConfig = r#"
[[extension]]
extension = "py"
helpers = { kind = "hint", file-type = "python", builtin = "keywords" }
"#
    .parse()
    .unwrap();
    let mut applicator = ExtensionApplicator::new(config.extensions());
    let mut editor = session::editor_with("main.py", "x = zz");
    applicator.file_changed(&mut editor, "main.py");
    editor.set_cursor(Position::new(0, 6));

    let hint = editor.hint().unwrap().unwrap();
    assert!(hint.list.is_empty());
    assert_eq!(hint.from, Position::new(0, 4));
    assert_eq!(hint.to, Position::new(0, 6));
}

/// Unknown helper kinds in a config are skipped instead of failing the load
#[test]
fn test_unknown_helper_kind_in_config() {
    let config: ExtensionsConfig = r#"
[[extension]]
extension = "py"

[[extension.helpers]]
kind = "fold"
file-type = "python"
builtin = "indent"

[[extension.helpers]]
kind = "lint"
file-type = "python"
builtin = "trailing-whitespace"
"#
    .parse()
    .unwrap();

    let mut applicator = ExtensionApplicator::new(config.extensions());
    let mut editor = Editor::new();
    applicator.file_changed(&mut editor, "main.py");

    let registry = applicator.registry().unwrap();
    assert_eq!(registry.file_types(HelperKind::Lint), vec!["python"]);
    assert!(registry.file_types(HelperKind::Hint).is_empty());
}

/// A theme change before any file only records the theme
#[test]
fn test_theme_before_first_file() {
    let mut applicator =
        ExtensionApplicator::new(vec![Extension::for_extension("py").with_gutters("g")]);
    let mut editor = Editor::new();

    applicator.theme_changed(&mut editor, None);
    assert_eq!(applicator.state(), SessionState::Uninitialized);
    assert!(applicator.registry().is_none());
    assert!(!editor.options().display.lint);
}

/// An empty extension list still turns lint on
#[test]
fn test_empty_extension_list() {
    let mut applicator = ExtensionApplicator::new(Vec::new());
    let mut editor = Editor::new();
    editor.open("main.py", "x  \n");
    applicator.file_changed(&mut editor, "main.py");

    assert!(editor.options().display.lint);
    assert!(applicator.registry().unwrap().is_empty());
    assert!(editor.lint().unwrap().is_empty());
    assert_eq!(editor.hint().unwrap(), None);
}

/// Files with several dots and no stem use only the last segment
#[test]
fn test_dotted_file_names() {
    let extensions = vec![
        Extension::for_extension("gz").with_gutters("gz"),
        Extension::for_extension("bashrc").with_gutters("rc"),
    ];
    assert_eq!(display_options(&extensions, "logs.tar.gz").gutters, vec!["gz"]);
    assert_eq!(display_options(&extensions, ".bashrc").gutters, vec!["rc"]);
    assert!(display_options(&extensions, "archive.").gutters.is_empty());
}
