//! Workbook import/export
//!
//! - Import: first worksheet (.xlsx/.xls/.ods) → sparse cell map
//! - Export: summary table → .xlsx with a single "Summary" sheet

mod exporter;
mod importer;

pub use exporter::ExcelExporter;
pub use importer::ExcelImporter;
