use crate::columns::{OutputMode, Selection};
use crate::update_center::Record;
use serde_json::Value;
use std::io::Write;

/// Rendered for absent or null fields.
pub const PLACEHOLDER: &str = "n/a";

/// Gap between aligned columns, beyond the widest cell.
const GUTTER: usize = 1;

/// Single coercion point from a loosely typed field to display text.
fn coerce(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

/// One cell per active column, in selection order.
pub fn render_row(selection: &Selection, record: &Record) -> Vec<String> {
    selection
        .columns
        .iter()
        .map(|col| coerce(record.get(col.key)))
        .collect()
}

pub fn header_row(selection: &Selection) -> Vec<String> {
    selection
        .columns
        .iter()
        .map(|col| col.display_name.to_string())
        .collect()
}

/// Write all rows at once: delimited rows are joined literally, aligned rows
/// are padded to a shared per-column width. No trailing delimiter or padding
/// after the last field of a line.
pub fn write_rows(out: &mut impl Write, mode: &OutputMode, rows: &[Vec<String>]) -> std::io::Result<()> {
    match mode {
        OutputMode::Delimited(d) => {
            for row in rows {
                writeln!(out, "{}", row.join(d))?;
            }
        }
        OutputMode::Aligned => {
            let mut widths = Vec::new();
            for row in rows {
                widths.resize(widths.len().max(row.len()), 0);
                for (i, cell) in row.iter().enumerate() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
            for row in rows {
                let mut line = String::new();
                for (i, cell) in row.iter().enumerate() {
                    line.push_str(cell);
                    if i + 1 < row.len() {
                        let pad = widths[i] - cell.chars().count() + GUTTER;
                        line.extend(std::iter::repeat(' ').take(pad));
                    }
                }
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}
