use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tillsim::application::register::CashRegister;
use tillsim::application::simulation::{self, DEFAULT_TRANSACTIONS, DayPlan};
use tillsim::config::TillConfig;
use tillsim::error::TillError;
use tillsim::infrastructure::in_memory::InMemoryJournal;
use tillsim::interfaces::csv::purchase_reader::PurchaseReader;
use tillsim::interfaces::csv::till_writer::TillWriter;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Purchases CSV file (cost,twenties,tens,fives,ones). Simulates a day when omitted.
    input: Option<PathBuf>,

    /// JSON file with the morning till load. Defaults to $350 in mixed bills.
    #[arg(long)]
    till_config: Option<PathBuf>,

    /// Number of random purchases to simulate.
    #[arg(long, default_value_t = DEFAULT_TRANSACTIONS)]
    transactions: usize,

    /// Seed for the random purchases, to replay a day.
    #[arg(long)]
    seed: Option<u64>,

    /// Use the fixed sample costs instead of random ones.
    #[arg(long, conflicts_with_all = ["transactions", "seed"])]
    sample: bool,

    /// Output format for the end-of-day report.
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = TillConfig::load(cli.till_config.as_deref()).into_diagnostic()?;
    let register = CashRegister::open(config.starting_cash, Box::new(InMemoryJournal::new()));

    if let Some(input) = cli.input {
        let file = File::open(input).into_diagnostic()?;
        let reader = PurchaseReader::new(file);
        for purchase in reader.purchases() {
            match purchase {
                Ok(purchase) => match register.ring_up(purchase).await {
                    Ok(_) => {}
                    Err(e @ TillError::CountOverflow { .. }) => {
                        error!(error = %e, "Error reading purchase");
                    }
                    Err(e) => return Err(e).into_diagnostic(),
                },
                Err(e) => {
                    error!(error = %e, "Error reading purchase");
                }
            }
        }
    } else {
        let plan = if cli.sample {
            DayPlan::Sample
        } else {
            DayPlan::Random {
                transactions: cli.transactions,
                seed: cli.seed,
            }
        };
        let purchases = simulation::purchases(&plan).into_diagnostic()?;
        simulation::run_day(&register, purchases)
            .await
            .into_diagnostic()?;
    }

    let report = register.close().await.into_diagnostic()?;

    let stdout = io::stdout();
    match cli.format {
        Format::Csv => {
            let mut writer = TillWriter::new(stdout.lock());
            writer.write_snapshot(&report.till).into_diagnostic()?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(stdout.lock(), &report).into_diagnostic()?;
            println!();
        }
    }

    Ok(())
}
