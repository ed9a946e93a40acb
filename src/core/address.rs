//! A1-style cell address parsing

use crate::error::{LedgerError, LedgerResult};
use std::cmp::Ordering;

/// Prefix that marks sheet-wide metadata keys (`!ref`, `!merges`, ...)
pub const METADATA_PREFIX: char = '!';

/// Widest column label a worksheet can have (`XFD`)
const MAX_COLUMN_LETTERS: usize = 3;

/// True for keys that describe the sheet rather than a cell
pub fn is_metadata_marker(key: &str) -> bool {
    key.starts_with(METADATA_PREFIX)
}

/// A parsed cell address such as `C12`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Column letters, upper-case (`C`)
    pub column: String,
    /// 1-based row number (`12`)
    pub row: u32,
}

impl CellAddress {
    /// Split an address into column letters and row number.
    ///
    /// Accepts one to three ASCII letters followed by one or more digits.
    /// Lowercase letters are upper-cased. Row 0 is rejected.
    pub fn parse(address: &str) -> LedgerResult<Self> {
        let malformed = || LedgerError::MalformedAddress(address.to_string());

        let split = address
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(malformed)?;
        let (letters, digits) = address.split_at(split);

        if letters.is_empty()
            || letters.len() > MAX_COLUMN_LETTERS
            || digits.is_empty()
            || !digits.chars().all(|c| c.is_ascii_digit())
        {
            return Err(malformed());
        }

        let row: u32 = digits.parse().map_err(|_| malformed())?;
        if row == 0 {
            return Err(malformed());
        }

        Ok(Self {
            column: letters.to_ascii_uppercase(),
            row,
        })
    }

    /// Zero-based column index (A → 0)
    pub fn column_index(&self) -> usize {
        column_letter_to_index(&self.column)
    }
}

impl std::fmt::Display for CellAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl Ord for CellAddress {
    /// Row-major: row first, then column index
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then_with(|| self.column_index().cmp(&other.column_index()))
    }
}

impl PartialOrd for CellAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Convert a zero-based column index to letters (0→A, 25→Z, 26→AA)
pub fn column_index_to_letter(index: usize) -> String {
    let mut result = String::new();
    let mut idx = index;

    loop {
        let remainder = idx % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }

    result
}

/// Convert column letters to a zero-based index (A→0, Z→25, AA→26).
/// Expects ASCII letters; case is ignored.
pub fn column_letter_to_index(letters: &str) -> usize {
    letters
        .bytes()
        .fold(0usize, |acc, b| {
            acc * 26 + b.to_ascii_uppercase().saturating_sub(b'A') as usize + 1
        })
        .saturating_sub(1)
}

/// Build an A1-style address from zero-based (row, column) coordinates
pub fn to_a1(row: usize, col: usize) -> String {
    format!("{}{}", column_index_to_letter(col), row + 1)
}
