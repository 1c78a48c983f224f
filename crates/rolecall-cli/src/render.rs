//! # Record Rendering
//!
//! Pure string builders for command output: an aligned text table for
//! humans, pretty JSON for pipelines, and a key/value block for single
//! records. Handlers print the returned strings; nothing here touches
//! stdout directly.

use anyhow::Result;

use rolecall_core::Record;

const EMPTY_MESSAGE: &str = "No matching records.";

/// Render records as an aligned text table: ID, COMPANY, TITLE, LOCATION.
pub fn render_table(records: &[&Record]) -> String {
    if records.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let headers = ["ID", "COMPANY", "TITLE", "LOCATION"];
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.company.clone(),
                r.title.clone().unwrap_or_default(),
                r.location.clone(),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers.map(String::from), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render records as pretty JSON (always an array, even when empty).
pub fn render_json(records: &[&Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Render one record as a key/value block.
pub fn render_record(record: &Record) -> String {
    let mut out = String::new();
    out.push_str(&format!("id:       {}\n", record.id));
    out.push_str(&format!("company:  {}\n", record.company));
    out.push_str(&format!("location: {}\n", record.location));
    if let Some(title) = &record.title {
        out.push_str(&format!("title:    {title}\n"));
    }
    if let Some(url) = &record.url {
        out.push_str(&format!("url:      {url}\n"));
    }
    if let Some(updated_at) = &record.updated_at {
        out.push_str(&format!("updated:  {updated_at}\n"));
    }
    out
}
