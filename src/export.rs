use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::{info, warn};

use crate::record::{CompanyRecord, Field};

pub const SHEET_NAME: &str = "Companies";

/// `masothue_companies_YYYYmmdd_HHMMSS.xlsx`
pub fn default_output_path<Tz: TimeZone>(now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!(
        "masothue_companies_{}.xlsx",
        now.format("%Y%m%d_%H%M%S")
    ))
}

/// Write one header row and one row per record, in `Field::COLUMNS` order.
///
/// Returns `Ok(false)` without touching the filesystem when there is nothing
/// to write.
pub fn save(records: &[CompanyRecord], path: &Path) -> Result<bool, XlsxError> {
    if records.is_empty() {
        warn!("No data to save");
        return Ok(false);
    }

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, field) in Field::COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, field.header(), &bold)?;
    }
    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, value) in record.row().iter().enumerate() {
            sheet.write_string(row, col as u16, *value)?;
        }
    }
    sheet.autofit();

    workbook.save(path)?;
    info!("Saved {} companies to {}", records.len(), path.display());
    Ok(true)
}
