use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use rulemine::{mine, Arguments};

/// Association rule mining over transaction data via parallel FP-Growth.
#[derive(Parser, Debug)]
#[command(name = "rulemine", version, about)]
struct Cli {
    /// Input transactions file: one comma-separated transaction per line.
    #[arg(long)]
    input: PathBuf,
    /// Output file for the generated rules.
    #[arg(long)]
    output: PathBuf,
    /// Minimum itemset support, in [0,1].
    #[arg(long)]
    min_support: f64,
    /// Minimum rule confidence, in [0,1].
    #[arg(long)]
    min_confidence: f64,
    /// Minimum rule lift, at least 1; 0 disables the lift filter.
    #[arg(long, default_value_t = 0.0)]
    min_lift: f64,
    /// Optional output file for the frequent itemsets.
    #[arg(long)]
    itemsets: Option<PathBuf>,
    /// Worker threads for the mining phase (default: logical CPU count).
    #[arg(long)]
    workers: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    let args = Arguments {
        input: cli.input,
        output: cli.output,
        min_support: cli.min_support,
        min_confidence: cli.min_confidence,
        min_lift: cli.min_lift,
        itemsets_path: cli.itemsets,
        workers: cli.workers,
    };

    info!("association rule mining via FP-Growth");
    match mine(&args) {
        Ok(result) => {
            info!(
                transactions = result.num_transactions,
                itemsets = result.itemsets.len(),
                rules = result.rules.len(),
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
