//! Tabula CLI
//!
//! Reads a JSON dataset, builds a table with the director and prints the
//! rendered HTML (or a tree outline).

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use tabula_html::outline;
use tabula_table::{Dataset, TableBuilder, TableDirector, TableTheme};

/// Tabula — render a JSON dataset as an HTML table
#[derive(Parser, Debug)]
#[command(name = "tabula")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"DATASET FORMAT:
    { "headers": ["A", "B"], "rows": [["1", "2"]], "footers": ["Sum", "3"] }
    Every key is optional, but a table needs at least one row.

EXAMPLES:
    # Render a dataset file
    tabula data.json

    # Inline dataset, no decoration
    tabula --plain --json '{"rows": [[1, 2]]}'

    # Custom decoration, written to a file
    tabula data.json --theme theme.json -o table.html

    # Show the element tree instead of HTML
    tabula data.json --outline
"#)]
struct Cli {
    /// Path to a JSON dataset
    #[arg(value_name = "DATASET", required_unless_present = "json")]
    path: Option<PathBuf>,

    /// Read the dataset from this JSON string instead of a file
    #[arg(long, value_name = "JSON", conflicts_with = "path")]
    json: Option<String>,

    /// JSON theme overriding the default decoration
    #[arg(long, value_name = "FILE", conflicts_with = "plain")]
    theme: Option<PathBuf>,

    /// Render without any classes, styles or attributes
    #[arg(long)]
    plain: bool,

    /// Print the element tree outline instead of HTML
    #[arg(long)]
    outline: bool,

    /// Write the output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log builder and renderer activity
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    tabula_common::logger::init(level, io::stderr().is_terminal())
        .context("failed to initialize logger")?;

    let dataset = load_dataset(&cli)?;
    let theme = load_theme(&cli)?;

    let mut director = TableDirector::new(TableBuilder::with_theme(theme));
    let table = director
        .make_from_dataset(&dataset)
        .context("failed to build table")?;

    let output = if cli.outline {
        outline(table.tree(), table.root())
    } else {
        let mut html = table.render().context("failed to render table")?;
        html.push('\n');
        html
    };

    match cli.output {
        Some(ref path) => {
            fs::write(path, &output)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            log::info!(target: "cli", "wrote {}", path.display());
        }
        None => emit(&mut io::stdout().lock(), &output)?,
    }

    Ok(())
}

/// Load the dataset from `--json` or the positional path
fn load_dataset(cli: &Cli) -> Result<Dataset> {
    if let Some(ref json) = cli.json {
        return Dataset::from_json(json).context("invalid --json dataset");
    }
    let Some(ref path) = cli.path else {
        anyhow::bail!("no dataset given: pass a file path or --json");
    };
    let source = read(path)?;
    Dataset::from_json(&source).with_context(|| format!("invalid dataset in '{}'", path.display()))
}

/// Pick the theme from `--plain`, `--theme` or the default
fn load_theme(cli: &Cli) -> Result<TableTheme> {
    if cli.plain {
        return Ok(TableTheme::plain());
    }
    let Some(ref path) = cli.theme else {
        return Ok(TableTheme::default());
    };
    let source = read(path)?;
    serde_json::from_str(&source).with_context(|| format!("invalid theme in '{}'", path.display()))
}

/// Write the output and flush, so a closed pipe surfaces as an error
fn emit(out: &mut impl Write, output: &str) -> Result<()> {
    out.write_all(output.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write to stdout")
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that behaves like a pipe whose reader went away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_writes_output() {
        let mut buf = Vec::new();
        emit(&mut buf, "<table></table>\n").unwrap();
        assert_eq!(buf, b"<table></table>\n");
    }

    #[test]
    fn test_emit_reports_closed_pipe() {
        let err = emit(&mut ClosedPipe, "<table></table>").unwrap_err();
        assert_eq!(err.to_string(), "failed to write to stdout");
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }
}
