use anyhow::Result;
use clap::Parser;

use spendlog::config::Settings;
use spendlog::store::SortDirection;
use spendlog::tui;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Terminal-based expense tracker with per-date spending summaries",
    long_about = "spendlog tracks expenses in memory for the lifetime of the \
                  session and shows what was spent on each date. Pick a date \
                  in the sidebar to filter the table and see its total."
)]
struct Cli {
    /// Currency symbol shown before amounts
    #[arg(long, default_value = "$")]
    currency: String,

    /// Start with the date list sorted newest-first
    #[arg(long)]
    descending: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings {
        currency_symbol: cli.currency,
        initial_sort: if cli.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        },
    };

    tui::run_tui(settings)
}
