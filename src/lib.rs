//! Ledger Summary - monthly per-customer totals from spreadsheet movements
//!
//! This library reads a worksheet of movements (customer, date, amount),
//! rebuilds typed records from its sparse cell map, sums amounts per
//! customer and calendar month, and writes the result as a workbook.
//!
//! # Features
//!
//! - Row-major reconstruction from address-keyed cells, independent of map order
//! - Spreadsheet serial dates converted to calendar dates
//! - Compound (customer, month) grouping keys
//! - Excel import (calamine) and export (rust_xlsxwriter)
//!
//! # Example
//!
//! ```no_run
//! use ledger_summary::core::{build_summary, SummaryOptions};
//! use ledger_summary::excel::{ExcelExporter, ExcelImporter};
//! use std::path::Path;
//!
//! let cells = ExcelImporter::new("movements.xlsx").import()?;
//! let table = build_summary(&cells, &SummaryOptions::default())?;
//!
//! println!("Rows: {}", table.height());
//!
//! ExcelExporter::new(table).export(Path::new("summary.xlsx"))?;
//! # Ok::<(), ledger_summary::error::LedgerError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{LedgerError, LedgerResult};
pub use types::{Cell, CellMap, CellValue, Movement, SummaryRow, SummaryTable};
