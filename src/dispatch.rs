//! Menu dispatch: one tagged request selects one model.
//!
//! Front-ends build a [`ModelRequest`] from whatever the user picked and
//! hand it to [`evaluate`]. There is no shared state between calls.

use serde::{Deserialize, Serialize};

use crate::breakeven::compute_break_even;
use crate::config::SamplingConfig;
use crate::decay::compute_decay;
use crate::error::ModelResult;
use crate::forecast::fit_linear_demand;
use crate::inventory::compute_eoq;
use crate::models::{
    BreakEvenInput, BreakEvenResult, DecayInput, DecayResult, DemandSeries, EOQInput, EOQResult,
    MM1Input, MM1Result, ProductionLPInput, ProductionLPResult, RegressionResult,
};
use crate::production::solve_production_lp;
use crate::queueing::compute_mm1;

/// Raw form fields of the demand forecast screen.
///
/// Years and sales arrive as comma-separated text, e.g. `"2019,2020,2021"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub years: String,
    pub sales: String,
    pub query_year: i64,
}

/// A request for one of the available models.
///
/// Serialized with a `"model"` tag next to the model's own fields:
///
/// ```
/// use opsmodels::dispatch::ModelRequest;
///
/// let request: ModelRequest =
///     serde_json::from_str(r#"{"model": "mm1", "arrival_rate": 5, "service_rate": 8}"#).unwrap();
/// assert!(matches!(request, ModelRequest::Mm1(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ModelRequest {
    Production(ProductionLPInput),
    Eoq(EOQInput),
    Mm1(MM1Input),
    Forecast(ForecastRequest),
    BreakEven(BreakEvenInput),
    Decay(DecayInput),
}

/// The result of whichever model was requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ModelResponse {
    Production(ProductionLPResult),
    Eoq(EOQResult),
    Mm1(MM1Result),
    Forecast(RegressionResult),
    BreakEven(BreakEvenResult),
    Decay(DecayResult),
}

impl ModelRequest {
    /// Short name of the requested model, matching the serialized tag.
    pub fn name(&self) -> &'static str {
        match self {
            ModelRequest::Production(_) => "production",
            ModelRequest::Eoq(_) => "eoq",
            ModelRequest::Mm1(_) => "mm1",
            ModelRequest::Forecast(_) => "forecast",
            ModelRequest::BreakEven(_) => "break_even",
            ModelRequest::Decay(_) => "decay",
        }
    }
}

/// Runs the model selected by `request`.
///
/// `sampling` controls the resolution of any chart curves in the response.
///
/// # Errors
///
/// Whatever the selected model reports; see [`crate::error::ModelError`].
pub fn evaluate(request: &ModelRequest, sampling: &SamplingConfig) -> ModelResult<ModelResponse> {
    let _span = tracing::debug_span!("evaluate", model = request.name()).entered();

    Ok(match request {
        ModelRequest::Production(input) => ModelResponse::Production(solve_production_lp(input)?),
        ModelRequest::Eoq(input) => ModelResponse::Eoq(compute_eoq(input, sampling.eoq_points)?),
        ModelRequest::Mm1(input) => ModelResponse::Mm1(compute_mm1(input, sampling.queue_states)?),
        ModelRequest::Forecast(form) => {
            let series = DemandSeries::parse(&form.years, &form.sales)?;
            ModelResponse::Forecast(fit_linear_demand(&series, form.query_year)?)
        }
        ModelRequest::BreakEven(input) => {
            ModelResponse::BreakEven(compute_break_even(input, sampling.break_even_points)?)
        }
        ModelRequest::Decay(input) => ModelResponse::Decay(compute_decay(input, sampling.decay_points)?),
    })
}
