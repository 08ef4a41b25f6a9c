use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use debt_payoff_core::payoff::comparison::{compare_strategies, PayoffRequest};
use debt_payoff_core::payoff::simulator::{simulate, Strategy};

use crate::input;

/// Arguments for the snowball-vs-avalanche comparison
#[derive(Args)]
pub struct PayoffArgs {
    /// Path to a JSON request file: {"debts": [...], "extraPayment": n}
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly amount available beyond the minimum payments
    #[arg(long, alias = "extra")]
    pub extra_payment: Option<Decimal>,
}

/// Arguments for a single-strategy simulation
#[derive(Args)]
pub struct SimulateArgs {
    /// Path to a JSON request file
    #[arg(long)]
    pub input: Option<String>,

    /// Payoff strategy to run
    #[arg(long, value_enum)]
    pub strategy: StrategyArg,

    /// Monthly amount available beyond the minimum payments
    #[arg(long, alias = "extra")]
    pub extra_payment: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Snowball,
    Avalanche,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Snowball => Strategy::Snowball,
            StrategyArg::Avalanche => Strategy::Avalanche,
        }
    }
}

pub fn run_payoff(args: PayoffArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut request = read_request(&args.input)?;
    if let Some(extra) = args.extra_payment {
        request.extra_payment = extra;
    }

    let output = compare_strategies(&request)?;
    Ok(serde_json::to_value(&output)?)
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut request = read_request(&args.input)?;
    if let Some(extra) = args.extra_payment {
        request.extra_payment = extra;
    }

    let result = simulate(&request.debts, request.extra_payment, args.strategy.into());
    Ok(serde_json::to_value(&result)?)
}

/// Resolve the request: --input file first, then piped stdin.
fn read_request(path: &Option<String>) -> Result<PayoffRequest, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Err("no input: provide --input <file> or pipe a JSON request on stdin".into())
}
