//! Output formatting module

use anyhow::Result;
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use crate::api::models::Timestamps;

/// Layout of timestamps in describe and verbose output (always UTC)
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// How a resource is shown in tables and field listings
pub trait Render {
    /// Table header, in column order
    const COLUMNS: &'static [&'static str];

    /// Heading of each entry in a verbose listing
    const LABEL: &'static str;

    /// One table row, matching `COLUMNS`
    fn row(&self) -> Vec<String>;

    /// Labelled fields for describe and verbose output, excluding the scope
    fn fields(&self) -> Vec<(&'static str, String)>;

    fn timestamps(&self) -> &Timestamps;
}

/// Print as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(out: &mut dyn Write, data: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(data)?)?;
    Ok(())
}

/// Print success message
pub fn success(out: &mut dyn Write, msg: &str) -> Result<()> {
    writeln!(out, "{} {}", "✓".green().bold(), msg)?;
    Ok(())
}

/// Print error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Lay out rows under a header, each column padded to its widest cell plus two spaces
pub fn render_table(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns
        .iter()
        .map(|c| console::measure_text_width(c))
        .collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(console::measure_text_width(cell));
        }
    }

    let header: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    let mut output = String::new();

    for row in std::iter::once(&header).chain(rows) {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            line.push_str(cell);
            if i + 1 < widths.len() {
                let pad = widths[i] - console::measure_text_width(cell) + 2;
                line.push_str(&" ".repeat(pad));
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// Field-by-field view of a single resource
pub fn render_detail<R: Render>(scope: &[(&str, String)], item: &R) -> String {
    let mut output = String::new();
    let fields = scope
        .iter()
        .cloned()
        .chain(item.fields())
        .chain(timestamp_fields(item.timestamps()));

    for (label, value) in fields {
        output.push_str(&format!("{}: {}\n", label, value));
    }

    output
}

/// Verbose listing: scope lines, then one indented block per resource
pub fn render_listing<R: Render>(scope: &[(&str, String)], items: &[R]) -> String {
    let mut output = String::new();

    for (label, value) in scope {
        output.push_str(&format!("{}: {}\n", label, value));
    }

    for (i, item) in items.iter().enumerate() {
        output.push_str(&format!("\t{} {}/{}\n", R::LABEL, i + 1, items.len()));
        for (label, value) in item
            .fields()
            .into_iter()
            .chain(timestamp_fields(item.timestamps()))
        {
            output.push_str(&format!("\t\t{}: {}\n", label, value));
        }
    }

    output.push('\n');
    output
}

/// Timestamp lines; absent timestamps are left out entirely
fn timestamp_fields(ts: &Timestamps) -> Vec<(&'static str, String)> {
    [
        ("Created (UTC)", ts.created_at),
        ("Last edited (UTC)", ts.updated_at),
        ("Deleted (UTC)", ts.deleted_at),
    ]
    .into_iter()
    .filter_map(|(label, at)| at.map(|at| (label, format_time(&at))))
    .collect()
}

pub fn format_time(at: &DateTime<Utc>) -> String {
    at.format(TIME_FORMAT).to_string()
}
