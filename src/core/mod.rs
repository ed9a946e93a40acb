//! Core pipeline: cells → movements → monthly totals → summary table

pub mod address;
pub mod aggregate;
pub mod reconstruct;
pub mod serial_date;
pub mod summary;

pub use address::CellAddress;
pub use aggregate::{aggregate, summarize_movements, MonthlyTotals};
pub use reconstruct::{reconstruct_movements, RecordReconstructor};
pub use serial_date::{serial_to_iso_date, SerialDateNormalizer};
pub use summary::{format_amount, format_summary};

use crate::error::LedgerResult;
use crate::types::{CellMap, SummaryRow, SummaryTable};
use tracing::info;

/// Caption used when none is configured
pub const DEFAULT_CAPTION: &str = "Monthly movements by customer";

/// Worksheet name of the generated workbook
pub const SUMMARY_SHEET_NAME: &str = "Summary";

/// Presentation settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOptions {
    pub caption: String,
    /// Free-form generation date shown under the caption
    pub generated_on: String,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            caption: DEFAULT_CAPTION.to_string(),
            generated_on: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Reconstruct and aggregate a sheet into summary rows
pub fn summarize_cells(cells: &CellMap) -> LedgerResult<Vec<SummaryRow>> {
    let movements = reconstruct_movements(cells)?;
    let rows = summarize_movements(&movements)?;
    info!(
        movements = movements.len(),
        rows = rows.len(),
        "aggregated movements"
    );
    Ok(rows)
}

/// Full transform from cell map to output table
pub fn build_summary(cells: &CellMap, options: &SummaryOptions) -> LedgerResult<SummaryTable> {
    let rows = summarize_cells(cells)?;
    Ok(format_summary(&rows, &options.caption, &options.generated_on))
}
