//! Validated entry point: run both strategies over one request.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::DebtPayoffError;
use crate::payoff::simulator::{simulate, Debt, PayoffResult, Strategy, MAX_MONTHS};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::DebtPayoffResult;

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// A payoff request as submitted by callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffRequest {
    pub debts: Vec<Debt>,
    /// Monthly amount available beyond the minimums. Absent means zero.
    #[serde(default)]
    pub extra_payment: Money,
}

/// Both strategies computed over the same request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub snowball: PayoffResult,
    pub avalanche: PayoffResult,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Validate a request and run the simulator once per strategy.
///
/// Validation is the boundary's job: the simulator itself is total and will
/// happily cap out at 600 months on inputs rejected here.
pub fn compare_strategies(
    request: &PayoffRequest,
) -> DebtPayoffResult<ComputationOutput<StrategyComparison>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_request(request)?;

    let snowball = simulate(&request.debts, request.extra_payment, Strategy::Snowball);
    let avalanche = simulate(&request.debts, request.extra_payment, Strategy::Avalanche);

    for run in [&snowball, &avalanche] {
        if run.hit_safety_cap() {
            warnings.push(format!(
                "{} run reached the {}-month safety cap with balance outstanding",
                run.strategy, MAX_MONTHS
            ));
        }
    }

    let output = StrategyComparison {
        snowball,
        avalanche,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Debt Payoff Comparison — snowball vs avalanche amortization",
        &serde_json::json!({
            "debt_count": request.debts.len(),
            "extra_payment": request.extra_payment.to_string(),
            "safety_cap_months": MAX_MONTHS,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_request(request: &PayoffRequest) -> DebtPayoffResult<()> {
    if request.debts.is_empty() {
        return Err(DebtPayoffError::EmptyDebtList);
    }
    if request.extra_payment < Decimal::ZERO {
        return Err(DebtPayoffError::InvalidInput {
            field: "extra_payment".into(),
            reason: "Extra payment cannot be negative".into(),
        });
    }
    for debt in &request.debts {
        validate_debt(debt)?;
    }
    Ok(())
}

fn validate_debt(debt: &Debt) -> DebtPayoffResult<()> {
    if debt.balance <= Decimal::ZERO {
        return Err(DebtPayoffError::InvalidInput {
            field: format!("{}.balance", debt.name),
            reason: "Balance must be positive".into(),
        });
    }
    if debt.interest_rate < Decimal::ZERO {
        return Err(DebtPayoffError::InvalidInput {
            field: format!("{}.interest_rate", debt.name),
            reason: "Interest rate cannot be negative".into(),
        });
    }
    if debt.minimum_payment <= Decimal::ZERO {
        return Err(DebtPayoffError::InvalidInput {
            field: format!("{}.minimum_payment", debt.name),
            reason: "Minimum payment must be positive".into(),
        });
    }

    let monthly_interest = debt.balance * debt.interest_rate / dec!(100) / dec!(12);
    if debt.minimum_payment < monthly_interest {
        return Err(DebtPayoffError::InsufficientMinimumPayment {
            name: debt.name.clone(),
            minimum_payment: debt.minimum_payment,
            monthly_interest: monthly_interest
                .round_dp_with_strategy(2, RoundingStrategy::AwayFromZero),
            suggested_minimum: suggested_minimum(monthly_interest),
        });
    }
    Ok(())
}

/// Smallest payment that still reduces principal in month one: the
/// first month's interest rounded up to the next cent, plus one cent.
fn suggested_minimum(monthly_interest: Decimal) -> Money {
    monthly_interest.round_dp_with_strategy(2, RoundingStrategy::AwayFromZero) + dec!(0.01)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
