//! Spreadsheet export of the injury table.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use super::InjuryTable;
use crate::error::Result;

/// Where `injuries` writes the report unless told otherwise.
pub const DEFAULT_EXPORT_PATH: &str = "injurydata.xlsx";

const SHEET_NAME: &str = "Injuries";

/// Header row followed by one row per status entry.
///
/// Fails with `MalformedTable` if the columns have drifted out of lock-step,
/// or `MalformedColumns` if the table lost or gained a column.
pub fn export_rows(table: &InjuryTable) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::with_capacity(table.len() + 1);
    let header: Vec<String> = table
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let data = table.rows()?;
    rows.push(header);
    rows.extend(data);
    Ok(rows)
}

/// Write the table to an `.xlsx` workbook at `path`.
pub fn write_xlsx(table: &InjuryTable, path: &Path) -> Result<()> {
    let rows = export_rows(table)?;
    let bold = Format::new().set_bold();

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;
        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, value) in row.iter().enumerate() {
                if row_idx == 0 {
                    sheet.write_string_with_format(0, col_idx as u16, value, &bold)?;
                } else {
                    sheet.write_string(row_idx as u32, col_idx as u16, value)?;
                }
            }
        }
    }
    workbook.save(path)?;

    info!(path = %path.display(), rows = table.len(), "injury table exported");
    Ok(())
}
