//! Export of a [`ResultSet`] to downloadable byte formats
//!
//! Both exports render the same table: a header row
//! `Groupe, Dose (mg/kg), Dosing, Composé (mg), Composé +{margin}% (mg)`
//! followed by one row per group in input order, with no index column.
//! Numeric cells carry the two-decimal rounded values from the result rows.
//!
//! The functions here produce in-memory buffers only; the caller decides where
//! the bytes go. File naming is a presentation concern: [`suggested_filename`]
//! implements the usual convention but nothing in the export itself depends
//! on it.
//!
//! # Example
//!
//! ```rust,ignore
//! let csv_bytes = to_csv(&results)?;
//! let name = suggested_filename("Mon étude", "20250131", ExportFormat::Csv);
//! std::fs::write(name, csv_bytes)?;
//! ```

use rust_xlsxwriter::Workbook;

use crate::dose::{DoseError, ResultSet};

/// Sheet name used in the XLSX export
const SHEET_NAME: &str = "Doses";

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, UTF-8
    Csv,
    /// Single-sheet spreadsheet document
    Xlsx,
}

impl ExportFormat {
    /// File extension for this format, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Serialize a result table to CSV
///
/// # Returns
///
/// * `Result<Vec<u8>, DoseError>` - UTF-8 encoded CSV bytes
pub fn to_csv(results: &ResultSet) -> Result<Vec<u8>, DoseError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(header(results.margin_percent()))
        .map_err(|e| DoseError::Csv(e.to_string()))?;

    for row in results.groups() {
        writer
            .write_record(&[
                row.label().to_string(),
                row.dose_mg_per_kg().to_string(),
                row.dosing().code().to_string(),
                row.total_mg().to_string(),
                row.total_with_margin_mg().to_string(),
            ])
            .map_err(|e| DoseError::Csv(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| DoseError::Csv(e.to_string()))
}

/// Serialize a result table to a single-sheet XLSX document
///
/// The sheet is named `Doses`; the header and rows are identical to the CSV
/// form, with numeric cells written as numbers.
///
/// # Returns
///
/// * `Result<Vec<u8>, DoseError>` - The XLSX document bytes
pub fn to_xlsx(results: &ResultSet) -> Result<Vec<u8>, DoseError> {
    let xlsx_err = |e: rust_xlsxwriter::XlsxError| DoseError::Xlsx(e.to_string());

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).map_err(xlsx_err)?;

    for (col, title) in header(results.margin_percent()).iter().enumerate() {
        sheet
            .write_string(0, col as u16, title)
            .map_err(xlsx_err)?;
    }

    for (i, row) in results.groups().iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, row.label()).map_err(xlsx_err)?;
        sheet
            .write_number(r, 1, row.dose_mg_per_kg())
            .map_err(xlsx_err)?;
        sheet
            .write_string(r, 2, row.dosing().code())
            .map_err(xlsx_err)?;
        sheet.write_number(r, 3, row.total_mg()).map_err(xlsx_err)?;
        sheet
            .write_number(r, 4, row.total_with_margin_mg())
            .map_err(xlsx_err)?;
    }

    workbook.save_to_buffer().map_err(xlsx_err)
}

/// Suggested download filename: `doses_{study}_{date}.{ext}`
///
/// Spaces in the study name become underscores. The date is passed in by the
/// caller (typically today, ISO `YYYYMMDD`) so the export layer stays pure.
pub fn suggested_filename(study_name: &str, iso_date: &str, format: ExportFormat) -> String {
    format!(
        "doses_{}_{}.{}",
        study_name.replace(' ', "_"),
        iso_date,
        format.extension()
    )
}

/// The shared header row; the margin column title embeds the margin used
fn header(margin_percent: f64) -> Vec<String> {
    vec![
        "Groupe".to_string(),
        "Dose (mg/kg)".to_string(),
        "Dosing".to_string(),
        "Composé (mg)".to_string(),
        format!("Composé +{}% (mg)", format_margin(margin_percent)),
    ]
}

/// Format the margin for the header: whole margins print as integers
fn format_margin(margin_percent: f64) -> String {
    if margin_percent.fract() == 0.0 {
        format!("{}", margin_percent as i64)
    } else {
        margin_percent.to_string()
    }
}
