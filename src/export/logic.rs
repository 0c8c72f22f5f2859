// src/export/logic.rs

use crate::config::Config;
use crate::core::filter::Selection;
use crate::core::logic::Core;
use crate::dataset;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::html::HtmlDashboard;
use crate::export::json_csv::{JsonDocument, export_csv, export_json};
use crate::export::model::report_to_table;
use crate::export::notify_export_success;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::ProgressRecord;
use crate::ui::messages::{info, warning};
use crate::ui::terminal::selection_line;
use crate::utils::path::{expand_tilde, is_absolute};
use std::fs;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Render the selected view and write it to `file`.
    ///
    /// - `format`: html | csv | json | xlsx | pdf
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `force`: overwrite without asking
    ///
    /// A selection with no matching data still produces a file that
    /// carries the no-data state.
    pub fn export(
        records: &[ProgressRecord],
        selection: &Selection,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        if !is_absolute(file) {
            return Err(AppError::RelativePath(file.to_string()));
        }
        let path = expand_tilde(file);

        ensure_writable(&path, force)?;

        let report = Core::render(records, selection);
        if report.is_no_data() {
            warning("No data for the current selection; the export will be empty.");
        }

        let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        match format {
            ExportFormat::Html => {
                info(format!("Exporting to HTML: {}", path.display()));
                let all_topics = dataset::topics(records);
                let page = HtmlDashboard::new(cfg, &all_topics, generated_at).render(&report, selection);
                fs::write(&path, page)?;
                notify_export_success("HTML", &path);
            }
            ExportFormat::Json => {
                let doc = JsonDocument {
                    title: &cfg.page_title,
                    generated_at,
                    selection,
                    report: &report,
                };
                export_json(&doc, &path)?;
            }
            ExportFormat::Csv => {
                let table = report_to_table(&report, &cfg.page_title);
                export_csv(&report, &table, &path)?;
            }
            ExportFormat::Xlsx => {
                let table = report_to_table(&report, &cfg.page_title);
                export_xlsx(&table, selection.view.title(), cfg, &path)?;
            }
            ExportFormat::Pdf => {
                let table = report_to_table(&report, &cfg.page_title);
                let subtitle = format!("{} | Generated {}", selection_line(selection), generated_at);
                export_pdf(&table, &subtitle, cfg, &path)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::ViewMode;
    use crate::dataset::load;

    fn temp(name: &str) -> std::path::PathBuf {
        let p = std::env::temp_dir().join(name);
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn relative_path_is_rejected() {
        let records = load();
        let sel = Selection::all(&records, ViewMode::Overview);
        let err = ExportLogic::export(
            &records,
            &sel,
            &Config::default(),
            ExportFormat::Json,
            "out.json",
            true,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::RelativePath(_)));
    }

    #[test]
    fn json_carries_selection_and_view() {
        let records = load();
        let sel = Selection::all(&records, ViewMode::TopicWiseProgress).with_statuses([crate::models::Status::Ongoing]);
        let path = temp("progressdash_logic_unit.json");

        ExportLogic::export(
            &records,
            &sel,
            &Config::default(),
            ExportFormat::Json,
            path.to_str().unwrap(),
            true,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["selection"]["view"], "topics");
        assert_eq!(value["selection"]["statuses"][0], "Ongoing");
        assert_eq!(value["report"]["view"], "topic_wise");
        assert_eq!(value["report"]["panel"]["data"].as_array().unwrap().len(), 8);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn html_export_writes_page() {
        let records = load();
        let sel = Selection::all(&records, ViewMode::Overview);
        let path = temp("progressdash_logic_unit.html");

        ExportLogic::export(
            &records,
            &sel,
            &Config::default(),
            ExportFormat::Html,
            path.to_str().unwrap(),
            true,
        )
        .unwrap();

        let page = fs::read_to_string(&path).unwrap();
        assert!(page.contains("Overall Overview"));
        fs::remove_file(&path).ok();
    }
}
