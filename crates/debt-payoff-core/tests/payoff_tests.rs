use debt_payoff_core::payoff::comparison::{compare_strategies, PayoffRequest};
use debt_payoff_core::payoff::simulator::{simulate, Debt, Strategy, MAX_MONTHS};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Strategy property tests
// ===========================================================================

fn sample_household() -> Vec<Debt> {
    // The classic three-debt mix: a hot credit card, a small personal
    // loan, and a large cheap car loan.
    vec![
        Debt {
            name: "credit card".into(),
            balance: dec!(8000),
            interest_rate: dec!(22),
            minimum_payment: dec!(200),
        },
        Debt {
            name: "personal loan".into(),
            balance: dec!(3000),
            interest_rate: dec!(6),
            minimum_payment: dec!(100),
        },
        Debt {
            name: "car loan".into(),
            balance: dec!(12000),
            interest_rate: dec!(5),
            minimum_payment: dec!(300),
        },
    ]
}

#[test]
fn test_avalanche_never_costs_more_interest_than_snowball() {
    let debts = sample_household();

    for extra in [dec!(0), dec!(50), dec!(250), dec!(1000)] {
        let snowball = simulate(&debts, extra, Strategy::Snowball);
        let avalanche = simulate(&debts, extra, Strategy::Avalanche);

        assert!(
            avalanche.total_interest <= snowball.total_interest,
            "With extra {}: avalanche interest {} exceeded snowball interest {}",
            extra,
            avalanche.total_interest,
            snowball.total_interest
        );
    }
}

#[test]
fn test_household_scenario_with_fifty_extra() {
    let request = PayoffRequest {
        debts: sample_household(),
        extra_payment: dec!(50),
    };
    let output = compare_strategies(&request).unwrap();
    let cmp = &output.result;

    assert!(cmp.snowball.total_interest > Decimal::ZERO);
    assert!(cmp.avalanche.total_interest > Decimal::ZERO);
    assert!(cmp.avalanche.total_interest <= cmp.snowball.total_interest);

    // Both converge well inside the cap for this mix.
    assert!(cmp.snowball.months_to_debt_free < MAX_MONTHS);
    assert!(cmp.avalanche.months_to_debt_free < MAX_MONTHS);
}

#[test]
fn test_more_extra_payment_never_slows_payoff() {
    let debts = sample_household();
    let mut last_months = u32::MAX;
    let mut last_interest = Decimal::MAX;

    for extra in [dec!(0), dec!(25), dec!(100), dec!(400), dec!(1600)] {
        let result = simulate(&debts, extra, Strategy::Avalanche);

        assert!(
            result.months_to_debt_free <= last_months,
            "Extra {} took {} months, more than the smaller extra's {}",
            extra,
            result.months_to_debt_free,
            last_months
        );
        assert!(
            result.total_interest <= last_interest,
            "Extra {} accrued {} interest, more than the smaller extra's {}",
            extra,
            result.total_interest,
            last_interest
        );

        last_months = result.months_to_debt_free;
        last_interest = result.total_interest;
    }
}

#[test]
fn test_comparison_is_deterministic() {
    let request = PayoffRequest {
        debts: sample_household(),
        extra_payment: dec!(75),
    };
    let first = compare_strategies(&request).unwrap();
    let second = compare_strategies(&request).unwrap();
    assert_eq!(first.result, second.result);
}

#[test]
fn test_caller_debts_survive_comparison_untouched() {
    let request = PayoffRequest {
        debts: sample_household(),
        extra_payment: dec!(50),
    };
    let before = request.debts.clone();
    let _ = compare_strategies(&request).unwrap();

    for (debt, original) in request.debts.iter().zip(&before) {
        assert_eq!(debt.balance, original.balance);
        assert_eq!(debt.interest_rate, original.interest_rate);
        assert_eq!(debt.minimum_payment, original.minimum_payment);
    }
}

// ===========================================================================
// Termination tests
// ===========================================================================

#[test]
fn test_non_convergent_debt_reports_cap_without_error() {
    let debts = vec![Debt {
        name: "underwater".into(),
        balance: dec!(20000),
        interest_rate: dec!(30),
        minimum_payment: dec!(5),
    }];

    let result = simulate(&debts, dec!(0), Strategy::Snowball);
    assert_eq!(result.months_to_debt_free, MAX_MONTHS);
    assert!(result.hit_safety_cap());
    assert!(result.total_interest > Decimal::ZERO);
}

#[test]
fn test_excess_extra_payment_still_takes_one_debt_per_month() {
    let debts = sample_household();
    // 50k of extra swamps the 23k of principal; only the priority debt
    // takes the extra, so the rest still need their own months.
    let result = simulate(&debts, dec!(50000), Strategy::Avalanche);
    assert!(result.months_to_debt_free > 1);
    assert!(result.months_to_debt_free < 60);
}
