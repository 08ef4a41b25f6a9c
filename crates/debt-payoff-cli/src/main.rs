mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::payoff::{PayoffArgs, SimulateArgs};

/// Debt payoff amortization schedules
#[derive(Parser)]
#[command(
    name = "debtsim",
    version,
    about = "Debt payoff amortization schedules with decimal precision",
    long_about = "A CLI for comparing debt payoff strategies with decimal precision. \
                  Simulates month-by-month amortization under snowball and avalanche \
                  prioritization and reports months to debt freedom and total \
                  interest paid."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare snowball and avalanche payoff plans
    Payoff(PayoffArgs),
    /// Run a single payoff strategy
    Simulate(SimulateArgs),
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

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payoff(args) => commands::payoff::run_payoff(args),
        Commands::Simulate(args) => commands::payoff::run_simulate(args),
        Commands::Version => {
            println!("debtsim {}", env!("CARGO_PKG_VERSION"));
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
