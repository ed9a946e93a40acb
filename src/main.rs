use clap::{Parser, Subcommand};
use ledger_summary::cli;
use ledger_summary::core::{SummaryOptions, DEFAULT_CAPTION};
use ledger_summary::error::LedgerResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ledger-summary")]
#[command(about = "Monthly per-customer totals from a spreadsheet of movements.")]
#[command(long_about = "Ledger Summary - monthly per-customer totals

Reads the first worksheet of a workbook laid out as:

  A: customer   B: registration date   C: amount

Row 1 is a header. Dates may be real date cells or YYYY-MM-DD text.
Writes a workbook with a single \"Summary\" sheet: one row per
customer and calendar month with the summed amount.

COMMANDS:
  summarize  - Aggregate a movements workbook into a summary workbook
  inspect    - Print the movements read from a workbook

EXAMPLES:
  ledger-summary summarize movements.xlsx summary.xlsx
  ledger-summary summarize movements.xlsx summary.xlsx --rows-out rows.json
  ledger-summary inspect movements.xlsx

LOGGING:
  LEDGER_LOG (or RUST_LOG) sets the log filter, e.g. LEDGER_LOG=ledger_summary=debug")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a movements workbook into a summary workbook
    Summarize {
        /// Path to the movements workbook (.xlsx, .xls, .ods)
        input: PathBuf,

        /// Output Excel file path (.xlsx)
        output: PathBuf,

        /// Caption written in the first row of the summary
        #[arg(short, long, env = "LEDGER_CAPTION", default_value = DEFAULT_CAPTION)]
        caption: String,

        /// Generation date shown under the caption (defaults to today)
        #[arg(short, long, env = "LEDGER_GENERATED_ON")]
        generated_on: Option<String>,

        /// Also write the summary rows to a .yaml/.yml/.json file
        #[arg(short, long)]
        rows_out: Option<PathBuf>,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the movements read from a workbook
    Inspect {
        /// Path to the movements workbook
        input: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> LedgerResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize {
            input,
            output,
            caption,
            generated_on,
            rows_out,
            verbose,
        } => {
            cli::init_logging(verbose);
            let mut options = SummaryOptions {
                caption,
                ..SummaryOptions::default()
            };
            if let Some(date) = generated_on {
                options.generated_on = date;
            }
            cli::summarize(input, output, options, rows_out, verbose)
        }

        Commands::Inspect { input, verbose } => {
            cli::init_logging(verbose);
            cli::inspect(input, verbose)
        }
    }
}
