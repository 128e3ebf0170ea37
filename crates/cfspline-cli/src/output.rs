//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
};

use crate::cli::OutputFormat;

/// A result row that can be rendered in every output format.
pub trait Record: Serialize {
    /// Column titles for table output.
    const HEADERS: &'static [&'static str];

    /// Table cells, numbers rounded to `precision` decimals.
    fn cells(&self, precision: usize) -> Vec<String>;

    /// The single value printed in minimal mode.
    fn minimal(&self) -> String;
}

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Record>(
    data: &[T],
    format: OutputFormat,
    precision: usize,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data, precision),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints rows as a formatted table.
fn print_table<T: Record>(data: &[T], precision: usize) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(T::HEADERS.iter().map(|h| (*h).to_string()));
    for row in data {
        builder.push_record(row.cells(precision));
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()));

    println!("{table}");
    Ok(())
}

/// Prints rows as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints rows as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints one value per line.
fn print_minimal<T: Record>(data: &[T]) -> anyhow::Result<()> {
    for row in data {
        println!("{}", row.minimal());
    }
    Ok(())
}

/// Formats a number with a fixed count of decimals.
pub fn fixed(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize)]
pub struct KeyValue {
    /// Setting name.
    pub key: String,
    /// Rendered value.
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

impl Record for KeyValue {
    const HEADERS: &'static [&'static str] = &["Setting", "Value"];

    fn cells(&self, _precision: usize) -> Vec<String> {
        vec![self.key.clone(), self.value.clone()]
    }

    fn minimal(&self) -> String {
        format!("{}={}", self.key, self.value)
    }
}
