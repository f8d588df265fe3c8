//! Break-even analysis for a single product.

use tracing::{debug, warn};

use crate::curve::sample;
use crate::error::{require_non_negative, require_positive, ModelError, ModelResult};
use crate::models::{BreakEvenInput, BreakEvenResult};

fn validate(input: &BreakEvenInput, curve_points: usize) -> ModelResult<()> {
    require_non_negative("fixed_cost", input.fixed_cost)?;
    require_positive("price_per_unit", input.price_per_unit)?;
    require_non_negative("variable_cost_per_unit", input.variable_cost_per_unit)?;
    let margin = input.price_per_unit - input.variable_cost_per_unit;
    if margin <= 0.0 {
        return Err(ModelError::InvalidInput {
            parameter: "contribution_margin",
            value: margin,
        });
    }
    if curve_points < 2 {
        return Err(ModelError::InvalidInput {
            parameter: "curve_points",
            value: curve_points as f64,
        });
    }
    Ok(())
}

/// Computes the volume at which revenue equals total cost.
///
/// `BEP = F / (p − v)`. Revenue and cost lines are sampled from zero to
/// twice the break-even volume, or to one unit when there is no fixed cost.
///
/// # Errors
///
/// [`ModelError::InvalidInput`] for a negative cost, a non-positive price, a
/// price that does not exceed the variable cost, or fewer than two curve
/// points.
///
/// # Example
///
/// ```
/// use opsmodels::breakeven::compute_break_even;
/// use opsmodels::models::BreakEvenInput;
///
/// let input = BreakEvenInput {
///     fixed_cost: 10_000.0,
///     price_per_unit: 50.0,
///     variable_cost_per_unit: 30.0,
/// };
/// let result = compute_break_even(&input, 50).unwrap();
/// assert_eq!(result.break_even_units, 500.0);
/// assert_eq!(result.break_even_revenue, 25_000.0);
/// ```
pub fn compute_break_even(input: &BreakEvenInput, curve_points: usize) -> ModelResult<BreakEvenResult> {
    if let Err(err) = validate(input, curve_points) {
        warn!(%err, "rejected break-even input");
        return Err(err);
    }

    let contribution_margin = input.price_per_unit - input.variable_cost_per_unit;
    let break_even_units = input.fixed_cost / contribution_margin;
    let break_even_revenue = break_even_units * input.price_per_unit;

    let upper = if break_even_units > 0.0 {
        2.0 * break_even_units
    } else {
        1.0
    };
    let revenue_curve = sample(0.0, upper, curve_points, |q| q * input.price_per_unit);
    let cost_curve = sample(0.0, upper, curve_points, |q| {
        input.fixed_cost + q * input.variable_cost_per_unit
    });

    debug!(break_even_units, break_even_revenue, "computed break-even point");

    Ok(BreakEvenResult {
        contribution_margin,
        break_even_units,
        break_even_revenue,
        revenue_curve,
        cost_curve,
    })
}
