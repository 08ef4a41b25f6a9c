use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Payoff
// ---------------------------------------------------------------------------

/// Validate a payoff request and compare both strategies.
///
/// Input: `{"debts": [...], "extraPayment": n}` as a JSON string.
/// Output: the computation envelope with `{snowball, avalanche}` inside.
#[napi]
pub fn calculate_payoff(input_json: String) -> NapiResult<String> {
    let request: debt_payoff_core::payoff::comparison::PayoffRequest =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = debt_payoff_core::payoff::comparison::compare_strategies(&request)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Run a single strategy without boundary validation.
///
/// Input: `{"debts": [...], "extraPayment": n, "strategy": "snowball"}`.
#[napi]
pub fn simulate_strategy(input_json: String) -> NapiResult<String> {
    #[derive(serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct SimulateRequest {
        debts: Vec<debt_payoff_core::payoff::simulator::Debt>,
        #[serde(default)]
        extra_payment: debt_payoff_core::Money,
        strategy: debt_payoff_core::payoff::simulator::Strategy,
    }

    let request: SimulateRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let result = debt_payoff_core::payoff::simulator::simulate(
        &request.debts,
        request.extra_payment,
        request.strategy,
    );
    serde_json::to_string(&result).map_err(to_napi_error)
}
