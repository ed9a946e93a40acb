use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

//==============================================================================
// Cells (input side)
//==============================================================================

/// Raw value carried by a spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Boolean(bool),
    /// Spreadsheet error literal such as `#DIV/0!`
    Error(String),
}

/// Type tag of a cell, derived from its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Numeric,
    Text,
    Boolean,
    Error,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Boolean(b) => write!(f, "{}", b),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

/// A single spreadsheet cell: raw value plus the display string the source
/// workbook would render for it (when known)
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub formatted: Option<String>,
}

impl Cell {
    pub fn number(n: f64) -> Self {
        Self {
            value: CellValue::Number(n),
            formatted: None,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self {
            value: CellValue::Text(s.into()),
            formatted: None,
        }
    }

    /// Numeric cell whose number format renders it as `formatted`
    pub fn formatted_number(n: f64, formatted: impl Into<String>) -> Self {
        Self {
            value: CellValue::Number(n),
            formatted: Some(formatted.into()),
        }
    }

    pub fn kind(&self) -> CellKind {
        match self.value {
            CellValue::Number(_) => CellKind::Numeric,
            CellValue::Text(_) => CellKind::Text,
            CellValue::Boolean(_) => CellKind::Boolean,
            CellValue::Error(_) => CellKind::Error,
        }
    }
}

/// Sparse, address-keyed view of one worksheet.
///
/// Keys are plain A1-style addresses, except for metadata markers which
/// start with `!` (e.g. `!ref` holds the used range).
#[derive(Debug, Clone, Default)]
pub struct CellMap {
    pub cells: HashMap<String, Cell>,
}

impl CellMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, cell: Cell) {
        self.cells.insert(key.into(), cell);
    }

    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.cells.get(key)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Cell)> {
        self.cells.iter()
    }
}

//==============================================================================
// Domain records
//==============================================================================

/// One financial movement reconstructed from a worksheet row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub customer: String,
    /// Calendar date as text, normally `YYYY-MM-DD`
    pub registration_date: String,
    pub amount: f64,
}

impl Movement {
    /// Open a movement for a customer; date and amount are filled later
    pub fn open(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            registration_date: String::new(),
            amount: 0.0,
        }
    }

    pub fn new(customer: impl Into<String>, registration_date: impl Into<String>, amount: f64) -> Self {
        Self {
            customer: customer.into(),
            registration_date: registration_date.into(),
            amount,
        }
    }
}

/// Total of one customer's movements within one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub customer: String,
    /// `YYYY-MM`
    pub year_month: String,
    pub amount: f64,
}

/// Compound grouping key. Ordering is customer first, then month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AggregationKey {
    pub customer: String,
    pub year_month: String,
}

impl AggregationKey {
    pub fn new(customer: impl Into<String>, year_month: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            year_month: year_month.into(),
        }
    }
}

//==============================================================================
// Output
//==============================================================================

/// Rectangular table of text cells ready for a worksheet writer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTable {
    pub rows: Vec<Vec<String>>,
}

impl SummaryTable {
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_kind_follows_value() {
        assert_eq!(Cell::number(1.0).kind(), CellKind::Numeric);
        assert_eq!(Cell::text("x").kind(), CellKind::Text);
        assert_eq!(
            Cell {
                value: CellValue::Boolean(true),
                formatted: None
            }
            .kind(),
            CellKind::Boolean
        );
    }

    #[test]
    fn test_aggregation_keys_with_dashes_stay_distinct() {
        // "A-2023" + "01" vs "A" + "2023-01" would collide as joined strings
        let a = AggregationKey::new("A-2023", "01");
        let b = AggregationKey::new("A", "2023-01");
        assert_ne!(a, b);
    }

    #[test]
    fn test_summary_table_dimensions() {
        let table = SummaryTable {
            rows: vec![vec!["t".to_string()], vec!["a".into(), "b".into(), "c".into()]],
        };
        assert_eq!(table.height(), 2);
        assert_eq!(table.width(), 3);
    }
}
