//! M/M/1 queue performance.
//!
//! With ρ = λ/μ:
//!
//! ```text
//! L  = ρ / (1 − ρ)          W  = 1 / (μ − λ)
//! Lq = ρ² / (1 − ρ)         Wq = ρ·W = λ / (μ·(μ − λ))
//! P(n) = (1 − ρ)·ρⁿ
//! ```
//!
//! `Wq` is evaluated as `ρ·W`; the product `μ·(μ − λ)` leaves the range of
//! `f64` for very small or very large rates.
//!
//! The queue only has a steady state when λ < μ; at or above that the
//! expected queue length is unbounded and the evaluation is refused.

use tracing::{debug, warn};

use crate::error::{require_positive, ModelError, ModelResult};
use crate::models::{MM1Input, MM1Result};

fn validate(input: &MM1Input, states: usize) -> ModelResult<()> {
    require_positive("arrival_rate", input.arrival_rate)?;
    require_positive("service_rate", input.service_rate)?;
    if input.arrival_rate >= input.service_rate {
        return Err(ModelError::UnstableSystem {
            arrival_rate: input.arrival_rate,
            service_rate: input.service_rate,
        });
    }
    if states == 0 {
        return Err(ModelError::InvalidInput {
            parameter: "queue_states",
            value: 0.0,
        });
    }
    Ok(())
}

/// Evaluates a stable M/M/1 queue.
///
/// `states` is the number of leading terms of the state distribution to
/// return. The cut-off only limits what is charted; see
/// [`MM1Result::captured_mass`].
///
/// Utilization close to one yields large but finite results and is not an
/// error.
///
/// # Errors
///
/// * [`ModelError::InvalidInput`] when a rate is not positive and finite, or
///   `states` is zero.
/// * [`ModelError::UnstableSystem`] when `arrival_rate >= service_rate`.
///
/// # Example
///
/// ```
/// use opsmodels::models::MM1Input;
/// use opsmodels::queueing::compute_mm1;
///
/// let result = compute_mm1(&MM1Input { arrival_rate: 5.0, service_rate: 8.0 }, 20).unwrap();
/// assert_eq!(result.utilization, 0.625);
/// assert!((result.expected_time_in_system - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn compute_mm1(input: &MM1Input, states: usize) -> ModelResult<MM1Result> {
    if let Err(err) = validate(input, states) {
        warn!(%err, "rejected M/M/1 input");
        return Err(err);
    }

    let lambda = input.arrival_rate;
    let mu = input.service_rate;
    let rho = lambda / mu;
    let idle = 1.0 - rho;

    let expected_in_system = rho / idle;
    let expected_in_queue = rho * rho / idle;
    let expected_time_in_system = 1.0 / (mu - lambda);
    let expected_time_in_queue = rho * expected_time_in_system;

    let state_probabilities = (0..states)
        .scan(idle, |p, _| {
            let current = *p;
            *p *= rho;
            Some(current)
        })
        .collect();

    debug!(rho, expected_in_system, expected_time_in_system, "evaluated M/M/1 queue");

    Ok(MM1Result {
        utilization: rho,
        idle_probability: idle,
        expected_in_system,
        expected_in_queue,
        expected_time_in_system,
        expected_time_in_queue,
        state_probabilities,
    })
}
