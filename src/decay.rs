//! Exponential decay of stock, e.g. goods lost to spoilage or obsolescence.

use std::f64::consts::LN_2;

use tracing::{debug, warn};

use crate::curve::sample;
use crate::error::{require_non_negative, require_positive, ModelError, ModelResult};
use crate::models::{DecayInput, DecayResult};

fn validate(input: &DecayInput, curve_points: usize) -> ModelResult<()> {
    require_non_negative("initial_quantity", input.initial_quantity)?;
    require_non_negative("decay_rate", input.decay_rate)?;
    require_positive("horizon", input.horizon)?;
    if curve_points < 2 {
        return Err(ModelError::InvalidInput {
            parameter: "curve_points",
            value: curve_points as f64,
        });
    }
    Ok(())
}

/// Computes `N(t) = N₀·e^(−k·t)` up to the horizon.
///
/// # Errors
///
/// [`ModelError::InvalidInput`] for a negative quantity or rate, a horizon
/// that is not positive, or fewer than two curve points.
///
/// # Example
///
/// ```
/// use opsmodels::decay::compute_decay;
/// use opsmodels::models::DecayInput;
///
/// let input = DecayInput { initial_quantity: 1000.0, decay_rate: 0.1, horizon: 10.0 };
/// let result = compute_decay(&input, 100).unwrap();
/// assert!((result.remaining - 367.879441).abs() < 1e-6);
/// ```
pub fn compute_decay(input: &DecayInput, curve_points: usize) -> ModelResult<DecayResult> {
    if let Err(err) = validate(input, curve_points) {
        warn!(%err, "rejected decay input");
        return Err(err);
    }

    let quantity_at = |t: f64| input.initial_quantity * (-input.decay_rate * t).exp();
    let remaining = quantity_at(input.horizon);
    let half_life = (input.decay_rate > 0.0).then(|| LN_2 / input.decay_rate);
    let curve = sample(0.0, input.horizon, curve_points, quantity_at);

    debug!(remaining, ?half_life, "computed decay");

    Ok(DecayResult {
        remaining,
        half_life,
        curve,
    })
}
