//! Production planning as a two-variable linear program.
//!
//! The optimization itself is handed to `minilp`'s simplex solver; this
//! module only validates the plan, builds the program and interprets the
//! solver's verdict.

use minilp::{ComparisonOp, OptimizationDirection, Problem};
use tracing::{debug, warn};

use crate::error::{require_finite, require_positive, InfeasibleCause, ModelError, ModelResult};
use crate::models::{ProductionLPInput, ProductionLPResult};

const PROFIT_NAMES: [&str; 2] = ["profit_1", "profit_2"];
const CAPACITY_NAMES: [&str; 2] = ["capacity_1", "capacity_2"];
const COEFFICIENT_NAMES: [[&str; 2]; 2] = [
    ["constraint_1_1", "constraint_1_2"],
    ["constraint_2_1", "constraint_2_2"],
];

fn validate(input: &ProductionLPInput) -> ModelResult<()> {
    for (name, &profit) in PROFIT_NAMES.iter().zip(&input.profits) {
        require_positive(*name, profit)?;
    }
    for (names, row) in COEFFICIENT_NAMES.iter().zip(&input.constraints) {
        for (name, &coefficient) in names.iter().zip(row) {
            require_finite(*name, coefficient)?;
        }
    }
    for (name, &capacity) in CAPACITY_NAMES.iter().zip(&input.capacities) {
        require_finite(*name, capacity)?;
    }
    if input.capacities.iter().any(|&c| c <= 0.0) {
        return Err(ModelError::Infeasible {
            cause: InfeasibleCause::NoCapacity,
        });
    }
    Ok(())
}

fn solver_cause(err: &minilp::Error) -> InfeasibleCause {
    match err {
        minilp::Error::Infeasible => InfeasibleCause::EmptyRegion,
        minilp::Error::Unbounded => InfeasibleCause::Unbounded,
    }
}

/// Finds the production mix that maximizes profit within capacity.
///
/// Solves
///
/// ```text
/// maximize    p1·x1 + p2·x2
/// subject to  A·[x1, x2] ≤ b,  x1, x2 ≥ 0
/// ```
///
/// as the equivalent minimization of the negated objective. Quantities are
/// returned at full precision; ties between equally profitable vertices are
/// resolved by the solver.
///
/// # Errors
///
/// * [`ModelError::InvalidInput`] when a profit is not positive or any
///   coefficient is non-finite.
/// * [`ModelError::Infeasible`] when a capacity is not positive, the feasible
///   region is empty, or the profit is unbounded.
///
/// # Example
///
/// ```
/// use opsmodels::models::ProductionLPInput;
/// use opsmodels::production::solve_production_lp;
///
/// let plan = ProductionLPInput {
///     profits: [20.0, 30.0],
///     constraints: [[1.0, 2.0], [2.0, 1.0]],
///     capacities: [40.0, 50.0],
/// };
/// let result = solve_production_lp(&plan).unwrap();
/// assert!((result.max_profit - 700.0).abs() < 1e-6);
/// ```
pub fn solve_production_lp(input: &ProductionLPInput) -> ModelResult<ProductionLPResult> {
    if let Err(err) = validate(input) {
        warn!(%err, "rejected production plan");
        return Err(err);
    }

    let mut problem = Problem::new(OptimizationDirection::Minimize);
    let x1 = problem.add_var(-input.profits[0], (0.0, f64::INFINITY));
    let x2 = problem.add_var(-input.profits[1], (0.0, f64::INFINITY));
    for (row, &capacity) in input.constraints.iter().zip(&input.capacities) {
        problem.add_constraint(&[(x1, row[0]), (x2, row[1])], ComparisonOp::Le, capacity);
    }

    let solution = problem.solve().map_err(|err| {
        let cause = solver_cause(&err);
        warn!(?cause, "production program has no optimum");
        ModelError::Infeasible { cause }
    })?;

    // Clamp the solver's round-off so quantities stay non-negative.
    let quantities = [solution[x1].max(0.0), solution[x2].max(0.0)];
    let max_profit = -solution.objective();
    debug!(x1 = quantities[0], x2 = quantities[1], max_profit, "solved production plan");

    Ok(ProductionLPResult {
        quantities,
        max_profit,
    })
}
