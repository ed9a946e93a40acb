use crate::core::{self, summary::format_amount, SummaryOptions};
use crate::error::LedgerResult;
use crate::excel::{ExcelExporter, ExcelImporter};
use crate::writer;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Default log filter when neither `LEDGER_LOG` nor `RUST_LOG` is set
const DEFAULT_LOG_FILTER: &str = "ledger_summary=warn";

/// Install the global tracing subscriber.
///
/// `LEDGER_LOG` wins over `RUST_LOG`; `verbose` forces debug output for
/// this crate.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("ledger_summary=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_env("LEDGER_LOG")
            .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    // Ignore the error when a subscriber is already installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the summarize command
pub fn summarize(
    input: PathBuf,
    output: PathBuf,
    options: SummaryOptions,
    rows_out: Option<PathBuf>,
    verbose: bool,
) -> LedgerResult<()> {
    println!("{}", "📒 Ledger Summary - Monthly totals".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }

    let cells = ExcelImporter::new(&input).import()?;

    if verbose {
        println!("   Found {} cells\n", cells.len());
        println!("{}", "🧮 Aggregating movements...".cyan());
    }

    // Everything is computed before any output file is touched
    let rows = core::summarize_cells(&cells)?;
    let table = core::format_summary(&rows, &options.caption, &options.generated_on);
    let rows_dump = match rows_out {
        Some(path) => {
            let content = writer::render_summary_rows(&path, &rows)?;
            Some((path, content))
        }
        None => None,
    };

    if verbose {
        for row in &rows {
            println!(
                "   {} {} {}",
                row.customer.bright_blue(),
                row.year_month,
                format_amount(row.amount).bold()
            );
        }
        println!();
        println!("{}", "📊 Writing summary workbook...".cyan());
    }

    // Rows file is written first and removed again if the workbook save fails
    if let Some((path, content)) = &rows_dump {
        fs::write(path, content)?;
    }

    if let Err(e) = ExcelExporter::new(table).export(&output) {
        if let Some((path, _)) = &rows_dump {
            let _ = fs::remove_file(path);
        }
        return Err(e);
    }
    info!(output = %output.display(), rows = rows.len(), "summary written");

    if let Some((path, _)) = &rows_dump {
        println!("   Rows file: {}", path.display());
    }

    println!("{}", "✅ Summary Complete!".bold().green());
    println!(
        "   {} customer-month rows → {}\n",
        rows.len(),
        output.display()
    );

    Ok(())
}

/// Execute the inspect command
pub fn inspect(input: PathBuf, verbose: bool) -> LedgerResult<()> {
    println!("{}", "🔍 Ledger Summary - Inspect".bold().green());
    println!("   Input: {}\n", input.display());

    let cells = ExcelImporter::new(&input).import()?;

    if verbose {
        if let Some(range) = cells.get("!ref") {
            println!("   Used range: {}", range.value);
        }
        println!("   Found {} cells\n", cells.len());
    }

    let movements = core::reconstruct_movements(&cells)?;

    for movement in &movements {
        println!(
            "   {:<16} {:<12} {:>14}",
            movement.customer.bright_blue(),
            movement.registration_date,
            format_amount(movement.amount)
        );
    }

    println!(
        "\n{}",
        format!("✅ {} movements", movements.len()).bold().green()
    );

    Ok(())
}
