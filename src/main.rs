use anyhow::Context;
use log::info;
use texty_ext::applicator::ExtensionApplicator;
use texty_ext::cli::{self, OutputFormat};
use texty_ext::config::{self, ExtensionsConfig};
use texty_ext::editor::{Editor, EditorHandle, EditorWidget};
use texty_ext::helper::{HintResult, LintFinding, Severity};

/// Load the extension config, open the file, attach the extensions to an
/// editor session, and print what the registered helpers report.
///
/// Exits with status 1 when any lint finding is an error.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::parse_args();

    // Set RUST_LOG to control verbosity
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let config = match args.config.clone().or_else(config::find_config_file) {
        Some(path) => {
            info!("loading extensions from {}", path.display());
            ExtensionsConfig::from_file(&path)?
        }
        None => {
            info!("no extension config found, running without extensions");
            ExtensionsConfig::default()
        }
    };

    let mut editor = Editor::new();
    editor
        .open_file(&args.file)
        .with_context(|| format!("failed to open '{}'", args.file.display()))?;
    if let Some(mode) = &args.mode {
        editor.set_mode(Some(mode.clone()));
    }
    editor.set_lint_options(config.lint.clone());
    editor.set_hint_options(config.hint.clone());
    editor.set_read_only(config.read_only);

    let file_name = editor.file_name().unwrap_or_default().to_string();
    let mut applicator = ExtensionApplicator::new(config.extensions());
    applicator.file_changed(&mut editor, &file_name);
    applicator.theme_changed(&mut editor, config.theme.clone());

    if args.show_options {
        println!("{}", serde_json::to_string_pretty(editor.options())?);
    }

    let findings = editor.lint_async().await?;
    print_findings(&file_name, &findings, args.format)?;

    if let Some(pos) = args.hint {
        editor.set_cursor(pos);
        match editor.hint()? {
            Some(hint) => print_hint(&hint, args.format)?,
            None => println!("no completion helper applies to '{}'", file_name),
        }
    }

    if findings
        .iter()
        .any(|f| f.effective_severity() == Severity::Error)
    {
        std::process::exit(1);
    }
    Ok(())
}

fn print_findings(
    file_name: &str,
    findings: &[LintFinding],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Plain => {
            for finding in findings {
                println!(
                    "{}:{}: {}: {}",
                    file_name,
                    finding.from,
                    finding.effective_severity(),
                    finding.message
                );
            }
        }
        OutputFormat::Lsp => {
            let diagnostics: Vec<_> = findings.iter().map(LintFinding::to_diagnostic).collect();
            println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        }
    }
    Ok(())
}

fn print_hint(hint: &HintResult, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Plain => {
            println!("completions for {}..{}:", hint.from, hint.to);
            for item in &hint.list {
                println!("  {}", item);
            }
        }
        OutputFormat::Lsp => {
            println!(
                "{}",
                serde_json::to_string_pretty(&hint.to_completion_items())?
            );
        }
    }
    Ok(())
}
