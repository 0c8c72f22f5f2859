// src/export/pdf_export.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::model::TabularExport;
use crate::export::notify_export_success;
use crate::export::pdf::{PdfManager, Rgb};
use crate::ui::messages::info;
use crate::utils::colors::hex_to_colour;
use ansi_term::Colour;
use std::path::Path;

/// Export PDF using PdfManager and the flattened table.
pub(crate) fn export_pdf(table: &TabularExport, subtitle: &str, cfg: &Config, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new().with_header_fill(lighten(&cfg.accent_progress));
    pdf.write_table(&table.title, subtitle, &table.headers, &table.rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

/// Mix a `#RRGGBB` accent 60% towards white so dark header text stays readable.
fn lighten(hex: &str) -> Rgb {
    let (r, g, b) = match hex_to_colour(hex) {
        Colour::RGB(r, g, b) => (r, g, b),
        _ => (255, 255, 255),
    };
    let mix = |c: u8| (c as f32 / 255.0) * 0.4 + 0.6;
    (mix(r), mix(g), mix(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighten_stays_in_range() {
        let (r, g, b) = lighten("#2196F3");
        for c in [r, g, b] {
            assert!((0.6..=1.0).contains(&c));
        }
        assert_eq!(lighten("bad"), (1.0, 1.0, 1.0));
    }
}
