mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::payment::PaymentArgs;

/// Monthly mortgage payment calculations
#[derive(Parser)]
#[command(
    name = "mortcalc",
    version,
    about = "Monthly mortgage payment calculations",
    long_about = "Calculates the monthly payment on a repayment or interest-only \
                  mortgage with decimal precision. Values are taken as typed: \
                  anything missing or malformed is reported as invalid input."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log calculation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the monthly payment with term totals
    Payment(PaymentArgs),
    /// Show the monthly payment as the calculator form displays it
    Display(PaymentArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

/// Log filter used when `RUST_LOG` is unset; covers both workspace crates.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "mortgage_calc_core=debug,mortgage_calc_cli=debug"
    } else {
        "mortgage_calc_core=warn,mortgage_calc_cli=warn"
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::payment::run_payment(args),
        Commands::Display(args) => commands::payment::run_display(args),
        Commands::Version => {
            println!("mortcalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
