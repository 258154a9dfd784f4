//! CSV export for result rows
//!
//! Fixed five-column layout matching the results table. Fields containing
//! commas, quotes, or newlines are double-quoted with embedded quotes
//! doubled.

use std::io::{self, Write};

use crate::row::IssueRow;

/// Header row for exported results
pub const HEADER: &str = "Key,Summary,Status,Assignee,Created";

/// Escape a CSV field value.
///
/// Wraps in double quotes if the value contains commas, quotes, or
/// newlines. Doubles any existing quotes within the value.
#[must_use]
pub fn escape_field(value: &str) -> String {
    let needs_quoting = value.contains(',')
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r');

    if needs_quoting {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

/// Format a single row as a CSV line
#[must_use]
pub fn format_row(row: &IssueRow) -> String {
    [
        row.key.as_str(),
        row.summary.as_str(),
        row.status.as_str(),
        row.assignee.as_str(),
        &row.created.to_string(),
    ]
    .iter()
    .map(|field| escape_field(field))
    .collect::<Vec<_>>()
    .join(",")
}

/// Write header and rows as CSV to the given writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_csv<W: Write>(writer: &mut W, rows: &[IssueRow]) -> io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for row in rows {
        writeln!(writer, "{}", format_row(row))?;
    }
    Ok(())
}

/// Format rows as a complete CSV string.
///
/// # Panics
///
/// Panics if writing to the in-memory buffer fails (which should not happen).
#[must_use]
pub fn format_csv(rows: &[IssueRow]) -> String {
    let mut output = Vec::new();
    write_csv(&mut output, rows).expect("writing to Vec should not fail");
    String::from_utf8_lossy(&output).into_owned()
}
