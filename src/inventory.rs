//! Economic order quantity.

use std::f64::consts::SQRT_2;

use tracing::{debug, warn};

use crate::curve::sample;
use crate::error::{require_positive, ModelError, ModelResult};
use crate::models::{EOQInput, EOQResult};

/// Annual ordering plus holding cost when ordering `quantity` units at a time.
///
/// `TC(Q) = (D/Q)·S + (Q/2)·H`. The caller must pass a positive quantity.
pub fn total_cost(input: &EOQInput, quantity: f64) -> f64 {
    (input.annual_demand / quantity) * input.ordering_cost + (quantity / 2.0) * input.holding_cost
}

fn validate(input: &EOQInput, curve_points: usize) -> ModelResult<()> {
    require_positive("annual_demand", input.annual_demand)?;
    require_positive("ordering_cost", input.ordering_cost)?;
    require_positive("holding_cost", input.holding_cost)?;
    if curve_points < 2 {
        return Err(ModelError::InvalidInput {
            parameter: "curve_points",
            value: curve_points as f64,
        });
    }
    Ok(())
}

/// Computes the economic order quantity `sqrt(2·D·S / H)` and its cost curve.
///
/// The curve holds `curve_points` samples of [`total_cost`] from `Q = 1` up
/// to `Q = 2·EOQ`. When `2·EOQ` does not exceed one the curve starts at
/// `2·EOQ / curve_points` instead, so `Q = 0` is never sampled.
///
/// # Errors
///
/// [`ModelError::InvalidInput`] when demand or either cost is not a positive
/// finite number, or when fewer than two curve points are requested.
///
/// # Example
///
/// ```
/// use opsmodels::inventory::compute_eoq;
/// use opsmodels::models::EOQInput;
///
/// let input = EOQInput { annual_demand: 1000.0, ordering_cost: 50.0, holding_cost: 5.0 };
/// let result = compute_eoq(&input, 100).unwrap();
/// assert!((result.eoq - 141.421356).abs() < 1e-6);
/// ```
pub fn compute_eoq(input: &EOQInput, curve_points: usize) -> ModelResult<EOQResult> {
    if let Err(err) = validate(input, curve_points) {
        warn!(%err, "rejected EOQ input");
        return Err(err);
    }

    // Square roots taken per factor so 2·D·S cannot overflow.
    let eoq = SQRT_2 * input.annual_demand.sqrt() * (input.ordering_cost.sqrt() / input.holding_cost.sqrt());
    let annual_ordering_cost = input.annual_demand / eoq * input.ordering_cost;
    let annual_holding_cost = eoq / 2.0 * input.holding_cost;
    let minimum_cost = eoq * input.holding_cost;

    let upper = 2.0 * eoq;
    let lower = if upper > 1.0 {
        1.0
    } else {
        upper / curve_points as f64
    };
    let cost_curve = sample(lower, upper, curve_points, |q| total_cost(input, q));

    debug!(eoq, total_cost = minimum_cost, "computed EOQ");

    Ok(EOQResult {
        eoq,
        annual_ordering_cost,
        annual_holding_cost,
        total_cost: minimum_cost,
        orders_per_year: input.annual_demand / eoq,
        cost_curve,
    })
}
