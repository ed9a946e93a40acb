//! Rebuild movement records from a sparse cell map
//!
//! Layout is fixed: column A holds the customer, B the registration date and
//! C the amount. Row 1 is a header.

use super::address::{is_metadata_marker, CellAddress};
use super::serial_date::SerialDateNormalizer;
use crate::error::{LedgerError, LedgerResult};
use crate::types::{Cell, CellMap, CellValue, Movement};
use tracing::debug;

pub const CUSTOMER_COLUMN: &str = "A";
pub const DATE_COLUMN: &str = "B";
pub const AMOUNT_COLUMN: &str = "C";

const HEADER_ROW: u32 = 1;

/// Movement currently being filled, with the row it was opened on
struct OpenMovement {
    row: u32,
    movement: Movement,
}

/// Walks a cell map in row-major order and assembles movements
pub struct RecordReconstructor {
    dates: SerialDateNormalizer,
}

impl RecordReconstructor {
    pub fn new() -> LedgerResult<Self> {
        Ok(Self {
            dates: SerialDateNormalizer::new()?,
        })
    }

    /// Reconstruct all movements of a sheet, in row order
    pub fn reconstruct(&self, cells: &CellMap) -> LedgerResult<Vec<Movement>> {
        let mut movements = Vec::new();
        let mut open: Option<OpenMovement> = None;

        for (address, cell) in Self::ordered_cells(cells) {
            if address.row == HEADER_ROW {
                continue;
            }

            match address.column.as_str() {
                CUSTOMER_COLUMN => {
                    if let Some(done) = open.take() {
                        movements.push(done.movement);
                    }
                    open = Some(OpenMovement {
                        row: address.row,
                        movement: Movement::open(cell.value.to_string()),
                    });
                }
                DATE_COLUMN => {
                    let current = Self::open_on_row(&mut open, &address)?;
                    current.registration_date = self.date_text(cell)?;
                }
                AMOUNT_COLUMN => {
                    let current = Self::open_on_row(&mut open, &address)?;
                    current.amount = Self::amount(&address, cell)?;
                }
                _ => {}
            }
        }

        if let Some(done) = open {
            movements.push(done.movement);
        }

        debug!(count = movements.len(), "reconstructed movements");
        Ok(movements)
    }

    /// Cell entries with parseable addresses, sorted by (row, column).
    /// Metadata markers and malformed keys are dropped.
    fn ordered_cells(cells: &CellMap) -> Vec<(CellAddress, &Cell)> {
        let mut entries: Vec<(CellAddress, &Cell)> = cells
            .iter()
            .filter(|(key, _)| !is_metadata_marker(key))
            .filter_map(|(key, cell)| match CellAddress::parse(key) {
                Ok(address) => Some((address, cell)),
                Err(e) => {
                    debug!("skipping cell key: {}", e);
                    None
                }
            })
            .collect();

        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    /// The movement opened on the same row as `address`
    fn open_on_row<'a>(
        open: &'a mut Option<OpenMovement>,
        address: &CellAddress,
    ) -> LedgerResult<&'a mut Movement> {
        match open {
            Some(current) if current.row == address.row => Ok(&mut current.movement),
            _ => Err(LedgerError::OrphanColumn {
                address: address.to_string(),
            }),
        }
    }

    fn date_text(&self, cell: &Cell) -> LedgerResult<String> {
        match self.dates.normalize(cell)? {
            Some(date) => Ok(date),
            None => Ok(cell.value.to_string()),
        }
    }

    fn amount(address: &CellAddress, cell: &Cell) -> LedgerResult<f64> {
        let invalid = || LedgerError::InvalidAmount {
            address: address.to_string(),
            value: cell.value.to_string(),
        };

        let amount = match &cell.value {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => s.trim().parse::<f64>().map_err(|_| invalid())?,
            CellValue::Boolean(_) | CellValue::Error(_) => return Err(invalid()),
        };

        // NaN and infinities would poison every total they touch
        if !amount.is_finite() {
            return Err(invalid());
        }
        Ok(amount)
    }
}

/// Reconstruct movements with a fresh [`RecordReconstructor`]
pub fn reconstruct_movements(cells: &CellMap) -> LedgerResult<Vec<Movement>> {
    RecordReconstructor::new()?.reconstruct(cells)
}
