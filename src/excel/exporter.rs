//! Excel exporter implementation - summary table → one-sheet workbook

use crate::core::SUMMARY_SHEET_NAME;
use crate::error::{LedgerError, LedgerResult};
use crate::types::SummaryTable;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Column widths for customer, month and amount
const COLUMN_WIDTHS: [f64; 3] = [24.0, 12.0, 14.0];

/// Writes a [`SummaryTable`] to a workbook with a single "Summary" sheet
pub struct ExcelExporter {
    table: SummaryTable,
}

impl ExcelExporter {
    /// Create a new Excel exporter
    pub fn new(table: SummaryTable) -> Self {
        Self { table }
    }

    /// Export the table to an .xlsx file.
    ///
    /// The first row (caption) is written bold.
    pub fn export(&self, output_path: &Path) -> LedgerResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(SUMMARY_SHEET_NAME)
            .map_err(|e| LedgerError::Export(format!("Failed to set worksheet name: {}", e)))?;

        for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
            worksheet
                .set_column_width(col as u16, *width)
                .map_err(|e| LedgerError::Export(format!("Failed to size column: {}", e)))?;
        }

        let title_format = Format::new().set_bold();

        for (row_idx, row) in self.table.rows.iter().enumerate() {
            for (col_idx, text) in row.iter().enumerate() {
                if text.is_empty() {
                    continue;
                }
                let result = if row_idx == 0 {
                    worksheet.write_string_with_format(
                        row_idx as u32,
                        col_idx as u16,
                        text,
                        &title_format,
                    )
                } else {
                    worksheet.write_string(row_idx as u32, col_idx as u16, text)
                };
                result.map_err(|e| {
                    LedgerError::Export(format!(
                        "Failed to write cell ({}, {}): {}",
                        row_idx, col_idx, e
                    ))
                })?;
            }
        }

        workbook
            .save(output_path)
            .map_err(|e| LedgerError::Export(format!("Failed to save Excel file: {}", e)))?;

        Ok(())
    }
}
