//! Excel importer implementation - workbook → sparse cell map

use crate::core::address::to_a1;
use crate::core::serial_date::datetime_to_serial;
use crate::error::{LedgerError, LedgerResult};
use crate::types::{Cell, CellMap, CellValue};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use tracing::{debug, warn};

/// Reads the first worksheet of a workbook (.xlsx, .xlsm, .xls, .ods)
pub struct ExcelImporter {
    path: std::path::PathBuf,
}

impl ExcelImporter {
    /// Create a new Excel importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Import the first worksheet as a cell map
    pub fn import(&self) -> LedgerResult<CellMap> {
        let mut workbook = open_workbook_auto(&self.path)
            .map_err(|e| LedgerError::Import(format!("Failed to open Excel file: {}", e)))?;

        let sheet_names = workbook.sheet_names().to_vec();
        let first = sheet_names
            .first()
            .ok_or_else(|| LedgerError::Import("Workbook has no worksheets".to_string()))?;
        if sheet_names.len() > 1 {
            warn!(
                sheet = %first,
                ignored = sheet_names.len() - 1,
                "only the first worksheet is read"
            );
        }

        let range = workbook
            .worksheet_range(first)
            .map_err(|e| LedgerError::Import(format!("Failed to read sheet '{}': {}", first, e)))?;

        let cells = Self::range_to_cell_map(&range);
        debug!(sheet = %first, cells = cells.len(), "imported worksheet");
        Ok(cells)
    }

    /// Convert a calamine range into a sparse cell map.
    ///
    /// Empty cells are left out. A `!ref` marker records the used range.
    pub fn range_to_cell_map(range: &Range<Data>) -> CellMap {
        let mut cells = CellMap::new();

        let (Some(start), Some(end)) = (range.start(), range.end()) else {
            return cells; // Empty sheet
        };
        let (row0, col0) = (start.0 as usize, start.1 as usize);

        cells.insert(
            "!ref",
            Cell::text(format!(
                "{}:{}",
                to_a1(row0, col0),
                to_a1(end.0 as usize, end.1 as usize)
            )),
        );

        for (row, col, data) in range.used_cells() {
            if let Some(cell) = Self::convert_cell(data) {
                cells.insert(to_a1(row0 + row, col0 + col), cell);
            }
        }

        cells
    }

    /// Convert a calamine value to a cell; `None` for empty cells
    fn convert_cell(data: &Data) -> Option<Cell> {
        let cell = match data {
            Data::Empty => return None,
            Data::Int(i) => Cell::number(*i as f64),
            Data::Float(f) => Cell::number(*f),
            Data::String(s) => Cell::text(s.clone()),
            Data::Bool(b) => Cell {
                value: CellValue::Boolean(*b),
                formatted: None,
            },
            Data::DateTime(dt) => match dt.as_datetime().filter(|_| dt.is_datetime()) {
                // calamine resolves the workbook's date system (1900 or 1904);
                // the serial is rebuilt in the 1900 system from that date
                Some(datetime) => Cell::formatted_number(
                    datetime_to_serial(datetime),
                    datetime.format("%Y-%m-%d").to_string(),
                ),
                None => Cell::number(dt.as_f64()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s.clone()),
            Data::Error(e) => Cell {
                value: CellValue::Error(e.to_string()),
                formatted: None,
            },
        };
        Some(cell)
    }
}
