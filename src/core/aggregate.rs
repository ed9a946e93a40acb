//! Monthly per-customer totals

use crate::error::{LedgerError, LedgerResult};
use crate::types::{AggregationKey, Movement, SummaryRow};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use std::collections::BTreeMap;

/// Running totals keyed by (customer, year-month).
///
/// Owned by the caller and threaded through [`aggregate`], so a run never
/// touches shared state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyTotals {
    totals: BTreeMap<AggregationKey, f64>,
}

impl MonthlyTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one movement to the total of its (customer, month)
    pub fn add(&mut self, movement: &Movement) -> LedgerResult<()> {
        let year_month = year_month(&movement.customer, &movement.registration_date)?;
        let key = AggregationKey::new(movement.customer.clone(), year_month);
        *self.totals.entry(key).or_insert(0.0) += movement.amount;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// One row per key, ordered by customer then month
    pub fn into_rows(self) -> Vec<SummaryRow> {
        self.totals
            .into_iter()
            .map(|(key, amount)| SummaryRow {
                customer: key.customer,
                year_month: key.year_month,
                amount,
            })
            .collect()
    }
}

/// Fold `movements` into `totals` and hand the accumulator back
pub fn aggregate(mut totals: MonthlyTotals, movements: &[Movement]) -> LedgerResult<MonthlyTotals> {
    for movement in movements {
        totals.add(movement)?;
    }
    Ok(totals)
}

/// Aggregate from scratch into summary rows
pub fn summarize_movements(movements: &[Movement]) -> LedgerResult<Vec<SummaryRow>> {
    Ok(aggregate(MonthlyTotals::new(), movements)?.into_rows())
}

/// Parse a registration date into a UTC calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.f]` and RFC 3339 timestamps
/// with an offset (converted to UTC).
pub fn parse_registration_date(value: &str) -> Option<NaiveDate> {
    let s = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// `YYYY-MM` for a movement's date
fn year_month(customer: &str, registration_date: &str) -> LedgerResult<String> {
    let date = parse_registration_date(registration_date).ok_or_else(|| {
        LedgerError::UnparseableDate {
            customer: customer.to_string(),
            value: registration_date.to_string(),
        }
    })?;
    Ok(format!("{:04}-{:02}", date.year(), date.month()))
}
