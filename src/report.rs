use crate::columns::Selection;
use crate::error::ReportError;
use crate::render::{header_row, render_row, write_rows};
use crate::update_center::{Record, UpdateDocument};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

/// Plugin ids in caller order, with `*` expanded to every plugin in the
/// document by name.
fn requested_ids(document: &UpdateDocument, plugin_ids: &[String]) -> Vec<String> {
    let mut ids = Vec::new();
    for id in plugin_ids {
        if id == "*" {
            ids.extend(document.plugin_names().map(String::from));
        } else {
            ids.push(id.clone());
        }
    }
    ids
}

/// Emit the report: header if enabled, the core row, then one row per
/// requested plugin. The whole report is assembled before anything is
/// written, so a bad plugin name aborts with no partial output.
pub fn run(
    out: &mut impl Write,
    selection: &Selection,
    document: &UpdateDocument,
    plugin_ids: &[String],
) -> Result<(), ReportError> {
    let mut rows = Vec::new();
    if selection.header {
        rows.push(header_row(selection));
    }
    rows.push(render_row(selection, document.locate("")?));
    for id in requested_ids(document, plugin_ids) {
        rows.push(render_row(selection, document.locate(&id)?));
    }
    write_rows(out, &selection.mode, &rows)?;
    out.flush()?;
    Ok(())
}

/// JSON variant: one object of the selected raw field values per record.
pub fn run_json(
    out: &mut impl Write,
    selection: &Selection,
    document: &UpdateDocument,
    plugin_ids: &[String],
) -> Result<(), ReportError> {
    let pick = |record: &Record| -> Value {
        let mut obj = serde_json::Map::new();
        for col in &selection.columns {
            obj.insert(
                col.key.to_string(),
                record.get(col.key).cloned().unwrap_or(Value::Null),
            );
        }
        Value::Object(obj)
    };

    let mut data = vec![pick(document.locate("")?)];
    for id in requested_ids(document, plugin_ids) {
        data.push(pick(document.locate(&id)?));
    }
    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    )?;
    out.flush()?;
    Ok(())
}
