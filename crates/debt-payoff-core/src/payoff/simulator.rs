//! Month-by-month debt payoff simulation.
//!
//! Prioritizes extra payments by strategy (snowball: smallest balance
//! first; avalanche: highest rate first) and reports months to debt
//! freedom plus total interest paid. All math uses
//! `rust_decimal::Decimal` for institutional-grade precision.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{round_cents, Money, Rate};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Hard iteration bound: 50 years of monthly steps.
pub const MAX_MONTHS: u32 = 600;
/// Balances below one cent are treated as repaid.
const BALANCE_EPSILON: Decimal = dec!(0.01);
/// Percent APR to monthly fraction: divide by 100, then by 12.
const PERCENT: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// A single outstanding debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub name: String,
    /// Current principal owed.
    pub balance: Money,
    /// Nominal annual rate as a percentage (22.0 = 22%), compounded monthly.
    pub interest_rate: Rate,
    /// Contractually required monthly payment.
    pub minimum_payment: Money,
}

/// Extra-payment prioritization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Smallest balance first.
    Snowball,
    /// Highest interest rate first.
    Avalanche,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Snowball => write!(f, "snowball"),
            Strategy::Avalanche => write!(f, "avalanche"),
        }
    }
}

/// Summary of a single simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffResult {
    pub strategy: Strategy,
    /// Exact iteration count at termination; `MAX_MONTHS` when the safety
    /// cap was reached with balance still outstanding.
    pub months_to_debt_free: u32,
    /// Total interest accrued, rounded to cents.
    pub total_interest: Money,
    /// Total cash applied to balances (minimums plus extra), rounded to cents.
    pub total_paid: Money,
}

impl PayoffResult {
    /// True when the run ended at the safety cap rather than at zero balance.
    pub fn hit_safety_cap(&self) -> bool {
        self.months_to_debt_free >= MAX_MONTHS
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the payoff simulation for one strategy.
///
/// Pure and total over non-negative inputs: the caller's debts are never
/// mutated, the same input always yields the same result, and the loop is
/// bounded by [`MAX_MONTHS`] even when minimum payments cannot outpace
/// interest accrual. An empty debt slice terminates at month 0.
pub fn simulate(debts: &[Debt], extra_payment: Money, strategy: Strategy) -> PayoffResult {
    // Priority order is fixed at entry; the stable index sort makes ties
    // resolve by input position.
    let priority = priority_order(debts, strategy);

    let mut balances: Vec<Money> = debts.iter().map(|d| d.balance).collect();
    let mut month: u32 = 0;
    let mut total_interest = Decimal::ZERO;
    let mut total_paid = Decimal::ZERO;

    while month < MAX_MONTHS && balances.iter().any(|b| *b > Decimal::ZERO) {
        month += 1;

        // Interest accrual and minimum payments, every open debt.
        for (debt, balance) in debts.iter().zip(balances.iter_mut()) {
            if *balance <= Decimal::ZERO {
                continue;
            }

            let monthly_rate = debt.interest_rate / PERCENT / MONTHS_PER_YEAR;
            let interest = *balance * monthly_rate;
            total_interest += interest;
            *balance += interest;

            let payment = debt.minimum_payment.min(*balance);
            *balance -= payment;
            total_paid += payment;

            if *balance < BALANCE_EPSILON {
                *balance = Decimal::ZERO;
            }
        }

        // Extra payment targets the highest-priority open debt, capped at
        // its balance. Any excess is not rolled to the next debt.
        if extra_payment > Decimal::ZERO {
            if let Some(&target) = priority.iter().find(|&&i| balances[i] > Decimal::ZERO) {
                let payment = extra_payment.min(balances[target]);
                balances[target] -= payment;
                total_paid += payment;

                if balances[target] < BALANCE_EPSILON {
                    balances[target] = Decimal::ZERO;
                }
            }
        }
    }

    PayoffResult {
        strategy,
        months_to_debt_free: month,
        total_interest: round_cents(total_interest),
        total_paid: round_cents(total_paid),
    }
}

/// Indices of `debts` in descending payoff priority for the strategy.
fn priority_order(debts: &[Debt], strategy: Strategy) -> Vec<usize> {
    let mut order: Vec<usize> = (0..debts.len()).collect();
    match strategy {
        Strategy::Snowball => {
            order.sort_by(|&a, &b| debts[a].balance.cmp(&debts[b].balance));
        }
        Strategy::Avalanche => {
            order.sort_by(|&a, &b| debts[b].interest_rate.cmp(&debts[a].interest_rate));
        }
    }
    order
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
