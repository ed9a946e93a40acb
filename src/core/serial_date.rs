//! Spreadsheet serial date → calendar date conversion
//!
//! Serials count days in the 1900 date system: serial 1 is 1900-01-01.
//! That system also counts a 1900-02-29 that never existed (serial 60),
//! so every serial after it is one day ahead of the real calendar.

use crate::error::{LedgerError, LedgerResult};
use crate::types::{Cell, CellKind, CellValue};
use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

/// Serial of 1970-01-01 in a 1900 system without the phantom leap day
pub const EPOCH_OFFSET_DAYS: f64 = 25568.0;

/// Days to take back for serials past the phantom 1900-02-29
pub const LEAP_YEAR_BUG_DAYS: f64 = 1.0;

/// Serial of the phantom 1900-02-29
const PHANTOM_LEAP_DAY: f64 = 60.0;

const SECONDS_PER_DAY: f64 = 86_400.0;
const MS_PER_SECOND: f64 = 1_000.0;

/// Unix-epoch milliseconds for a serial day count
pub fn serial_to_timestamp_millis(serial: f64) -> LedgerResult<i64> {
    if !serial.is_finite() {
        return Err(LedgerError::InvalidSerial(serial));
    }

    let correction = if serial > PHANTOM_LEAP_DAY {
        -LEAP_YEAR_BUG_DAYS
    } else {
        0.0
    };
    let millis = (serial - EPOCH_OFFSET_DAYS + correction) * SECONDS_PER_DAY * MS_PER_SECOND;

    if millis.abs() >= i64::MAX as f64 {
        return Err(LedgerError::InvalidSerial(serial));
    }
    Ok(millis.floor() as i64)
}

/// Convert a serial to `YYYY-MM-DD` (UTC). Time of day is dropped.
pub fn serial_to_iso_date(serial: f64) -> LedgerResult<String> {
    let millis = serial_to_timestamp_millis(serial)?;
    let datetime: DateTime<Utc> =
        DateTime::from_timestamp_millis(millis).ok_or(LedgerError::InvalidSerial(serial))?;
    Ok(datetime.format("%Y-%m-%d").to_string())
}

/// 1900-system serial for a calendar date-time, phantom leap day included.
///
/// Lets callers that already resolved a cell to a calendar date (a 1904-based
/// workbook, for one) hand it on as a serial that [`serial_to_iso_date`]
/// maps back to the same day.
pub fn datetime_to_serial(datetime: NaiveDateTime) -> f64 {
    let days = datetime.and_utc().timestamp_millis() as f64 / (SECONDS_PER_DAY * MS_PER_SECOND)
        + EPOCH_OFFSET_DAYS;
    if days >= PHANTOM_LEAP_DAY {
        days + LEAP_YEAR_BUG_DAYS
    } else {
        days
    }
}

/// Decides which numeric cells are dates and normalizes them.
///
/// A cell counts as a date only when it is numeric and the workbook already
/// renders it as `YYYY-MM-DD`; column position plays no part.
pub struct SerialDateNormalizer {
    iso_date: Regex,
}

impl SerialDateNormalizer {
    pub fn new() -> LedgerResult<Self> {
        let iso_date = Regex::new(r"^\d{4}-\d{2}-\d{2}$")?;
        Ok(Self { iso_date })
    }

    /// True when `cell` is numeric and formatted like a calendar date
    pub fn qualifies(&self, cell: &Cell) -> bool {
        cell.kind() == CellKind::Numeric
            && cell
                .formatted
                .as_deref()
                .is_some_and(|f| self.iso_date.is_match(f.trim()))
    }

    /// Normalized date text for a qualifying cell, `None` otherwise
    pub fn normalize(&self, cell: &Cell) -> LedgerResult<Option<String>> {
        match cell.value {
            CellValue::Number(serial) if self.qualifies(cell) => {
                serial_to_iso_date(serial).map(Some)
            }
            _ => Ok(None),
        }
    }
}
