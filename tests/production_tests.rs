//! Tests for the production linear program.

use approx::assert_abs_diff_eq;
use opsmodels::error::{ErrorKind, InfeasibleCause, ModelError};
use opsmodels::models::ProductionLPInput;
use opsmodels::production::solve_production_lp;

fn textbook_plan() -> ProductionLPInput {
    ProductionLPInput {
        profits: [20.0, 30.0],
        constraints: [[1.0, 2.0], [2.0, 1.0]],
        capacities: [40.0, 50.0],
    }
}

#[test]
fn test_optimum_at_constraint_intersection() {
    // Corners: (0,0) -> 0, (0,20) -> 600, (25,0) -> 500, (20,10) -> 700.
    let result = solve_production_lp(&textbook_plan()).expect("plan should solve");

    assert_abs_diff_eq!(result.max_profit, 700.0, epsilon = 1e-6);
    assert_abs_diff_eq!(result.quantities[0], 20.0, epsilon = 1e-6);
    assert_abs_diff_eq!(result.quantities[1], 10.0, epsilon = 1e-6);
}

#[test]
fn test_optimum_on_axis() {
    // Corners: (0,0) -> 0, (60,0) -> 300, (0,90) -> 270.
    let plan = ProductionLPInput {
        profits: [5.0, 3.0],
        constraints: [[3.0, 2.0], [2.0, 1.0]],
        capacities: [180.0, 300.0],
    };
    let result = solve_production_lp(&plan).expect("plan should solve");

    assert_abs_diff_eq!(result.max_profit, 300.0, epsilon = 1e-6);
    assert_abs_diff_eq!(result.quantities[0], 60.0, epsilon = 1e-6);
    assert_abs_diff_eq!(result.quantities[1], 0.0, epsilon = 1e-6);
}

#[test]
fn test_solution_respects_capacity() {
    let plan = ProductionLPInput {
        profits: [7.5, 4.25],
        constraints: [[2.5, 1.0], [0.5, 3.0]],
        capacities: [100.0, 90.0],
    };
    let result = solve_production_lp(&plan).unwrap();

    for (row, capacity) in plan.constraints.iter().zip(plan.capacities) {
        let used = row[0] * result.quantities[0] + row[1] * result.quantities[1];
        assert!(used <= capacity + 1e-6, "used {} of {}", used, capacity);
    }
    assert!(result.quantities.iter().all(|&q| q >= 0.0));

    let profit = plan.profits[0] * result.quantities[0] + plan.profits[1] * result.quantities[1];
    assert_abs_diff_eq!(profit, result.max_profit, epsilon = 1e-6);
}

#[test]
fn test_tied_optimum_reports_profit() {
    // Objective is parallel to the first constraint, so a whole edge is optimal.
    let plan = ProductionLPInput {
        profits: [1.0, 2.0],
        constraints: [[1.0, 2.0], [2.0, 1.0]],
        capacities: [40.0, 50.0],
    };
    let result = solve_production_lp(&plan).unwrap();
    assert_abs_diff_eq!(result.max_profit, 40.0, epsilon = 1e-6);
}

#[test]
fn test_unbounded_is_infeasible() {
    let plan = ProductionLPInput {
        profits: [1.0, 1.0],
        constraints: [[-1.0, 0.0], [0.0, -1.0]],
        capacities: [10.0, 10.0],
    };
    let err = solve_production_lp(&plan).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Infeasible);
    assert_eq!(
        err,
        ModelError::Infeasible {
            cause: InfeasibleCause::Unbounded
        }
    );
}

#[test]
fn test_zero_capacity_is_infeasible() {
    let mut plan = textbook_plan();
    plan.capacities[1] = 0.0;
    let err = solve_production_lp(&plan).unwrap_err();
    assert_eq!(
        err,
        ModelError::Infeasible {
            cause: InfeasibleCause::NoCapacity
        }
    );
}

#[test]
fn test_non_positive_profit_is_invalid() {
    let mut plan = textbook_plan();
    plan.profits[0] = -20.0;
    let err = solve_production_lp(&plan).unwrap_err();
    assert_eq!(
        err,
        ModelError::InvalidInput {
            parameter: "profit_1",
            value: -20.0
        }
    );
}
