//! WebAssembly bindings for opsmodels.
//!
//! The web form posts one JSON request per submission and renders the JSON
//! that comes back. Nothing is kept between calls.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::config::SamplingConfig;
use crate::dispatch::{evaluate as evaluate_request, ModelRequest, ModelResponse};
use crate::display::describe_error;
use crate::error::ErrorKind;

/// JavaScript-friendly input: the model request plus optional chart resolutions.
#[derive(Debug, Clone, Deserialize)]
pub struct JsEvaluateInput {
    #[serde(flatten)]
    pub request: ModelRequest,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

/// JavaScript-friendly evaluation result.
#[derive(Debug, Clone, Serialize)]
pub struct JsEvaluateResult {
    pub success: bool,
    pub error: Option<String>,
    pub error_kind: Option<ErrorKind>,
    pub result: Option<ModelResponse>,
}

impl JsEvaluateResult {
    fn failure(kind: ErrorKind, message: String) -> Self {
        warn_console(&message);
        JsEvaluateResult {
            success: false,
            error: Some(message),
            error_kind: Some(kind),
            result: None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn warn_console(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn warn_console(message: &str) {
    tracing::warn!(error = message, "web evaluation failed");
}

/// Evaluate one model.
///
/// Takes a JSON string input and returns a JSON string result, e.g.
/// `{"model": "eoq", "annual_demand": 1000, "ordering_cost": 50, "holding_cost": 5}`.
#[wasm_bindgen]
pub fn evaluate(input_json: &str) -> String {
    let outcome = match serde_json::from_str::<JsEvaluateInput>(input_json) {
        Ok(input) => match evaluate_request(&input.request, &input.sampling) {
            Ok(response) => JsEvaluateResult {
                success: true,
                error: None,
                error_kind: None,
                result: Some(response),
            },
            Err(err) => JsEvaluateResult::failure(err.kind(), describe_error(&err)),
        },
        Err(e) => JsEvaluateResult::failure(ErrorKind::MalformedInput, format!("Invalid input: {}", e)),
    };

    serde_json::to_string(&outcome).unwrap_or_default()
}

/// Get the version of the calculator.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
