use crate::cursor::Position;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `file:line:col: severity: message`
    #[default]
    Plain,
    /// LSP diagnostics and completion items as JSON
    Lsp,
}

#[derive(Debug, Default, Parser)]
#[command(name = "texty-ext")]
#[command(version = "0.1.0")]
#[command(about = "Run extension lint and completion helpers against a file")]
pub struct CliArgs {
    /// File to open
    pub file: PathBuf,

    /// Extension config (defaults to the first extensions.toml found)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Override the file-type mode used to pick helpers
    #[arg(long, short = 'm')]
    pub mode: Option<String>,

    /// Request completions at LINE:COLUMN (1-based)
    #[arg(long, value_parser = parse_position)]
    pub hint: Option<Position>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Print the applied editor options as JSON
    #[arg(long)]
    pub show_options: bool,
}

/// Parse a 1-based `LINE:COLUMN` into a zero-based position.
pub fn parse_position(value: &str) -> Result<Position, String> {
    let (line, column) = value
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COLUMN, got '{}'", value))?;
    let line: usize = line
        .trim()
        .parse()
        .map_err(|e| format!("invalid line '{}': {}", line, e))?;
    let column: usize = column
        .trim()
        .parse()
        .map_err(|e| format!("invalid column '{}': {}", column, e))?;
    if line == 0 || column == 0 {
        return Err("line and column start at 1".to_string());
    }
    Ok(Position::new(line - 1, column - 1))
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
