//! Summary rows → printable table

use crate::types::{SummaryRow, SummaryTable};

/// Columns in every summary table row
pub const SUMMARY_WIDTH: usize = 3;

/// Magnitude past which `n * 1e6` stops being exact (or overflows)
const ROUNDING_LIMIT: f64 = 1e15;

/// Format a number for display, removing unnecessary decimal places
pub fn format_amount(n: f64) -> String {
    // Six decimals is plenty for currency and hides f64 summation noise
    let rounded = if n.abs() < ROUNDING_LIMIT {
        (n * 1e6).round() / 1e6
    } else {
        n
    };
    let text = format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string();
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

/// Lay out summary rows under a title row and a generation-date row
pub fn format_summary(rows: &[SummaryRow], caption: &str, generated_on: &str) -> SummaryTable {
    let mut table = Vec::with_capacity(rows.len() + 2);

    table.push(pad(vec![caption.to_string()]));
    table.push(pad(vec!["Generated".to_string(), generated_on.to_string()]));

    for row in rows {
        table.push(vec![
            row.customer.clone(),
            row.year_month.clone(),
            format_amount(row.amount),
        ]);
    }

    SummaryTable { rows: table }
}

fn pad(mut cells: Vec<String>) -> Vec<String> {
    cells.resize(SUMMARY_WIDTH, String::new());
    cells
}
