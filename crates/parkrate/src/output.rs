//! Output formatting: table, JSON, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! JSON uses serde, plain emits one line per item.

use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Render a list of serde-serializable + tabled items in the chosen format.
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    line_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    Ok(match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::Plain => data.iter().map(line_fn).collect::<Vec<_>>().join("\n"),
    })
}

/// Render a single value; table and plain share the short text form.
pub fn render_single<T>(format: OutputFormat, data: &T, text_fn: impl Fn(&T) -> String) -> Result<String, CliError>
where
    T: serde::Serialize + ?Sized,
{
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::Table | OutputFormat::Plain => text_fn(data),
    })
}

/// Print the rendered output to stdout.
pub fn print_output(output: &str) {
    if output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}
