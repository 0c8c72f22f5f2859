// src/export/json_csv.rs

use crate::core::filter::Selection;
use crate::core::view::Report;
use crate::errors::AppResult;
use crate::export::model::{TabularExport, report_records};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// JSON document written by the exporter: the selection plus the view model.
#[derive(Serialize)]
pub(crate) struct JsonDocument<'a> {
    pub title: &'a str,
    pub generated_at: String,
    pub selection: &'a Selection,
    pub report: &'a Report,
}

/// Export JSON pretty-printed.
pub(crate) fn export_json(doc: &JsonDocument<'_>, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV. Detailed-table reports go through serde so the header
/// comes from the record fields; the other views use the flattened table.
pub(crate) fn export_csv(report: &Report, table: &TabularExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    match report_records(report) {
        Some(records) => {
            for item in &records {
                wtr.serialize(item)?;
            }
        }
        None => {
            wtr.write_record(&table.headers)?;
            for row in &table.rows {
                wtr.write_record(row)?;
            }
        }
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
