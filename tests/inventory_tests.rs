//! Tests for the economic order quantity model.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use opsmodels::error::{ErrorKind, ModelError};
use opsmodels::inventory::{compute_eoq, total_cost};
use opsmodels::models::EOQInput;

fn input(annual_demand: f64, ordering_cost: f64, holding_cost: f64) -> EOQInput {
    EOQInput {
        annual_demand,
        ordering_cost,
        holding_cost,
    }
}

#[test]
fn test_eoq_formula() {
    let result = compute_eoq(&input(1000.0, 50.0, 5.0), 100).unwrap();

    assert_relative_eq!(result.eoq, 20000.0_f64.sqrt(), max_relative = 1e-12);
    assert_relative_eq!(result.orders_per_year, 1000.0 / result.eoq, max_relative = 1e-12);
}

#[test]
fn test_costs_balance_at_eoq() {
    let result = compute_eoq(&input(2400.0, 75.0, 3.2), 100).unwrap();

    assert_relative_eq!(result.annual_ordering_cost, result.annual_holding_cost, max_relative = 1e-12);
    assert_relative_eq!(
        result.total_cost,
        (2.0 * 2400.0 * 75.0 * 3.2_f64).sqrt(),
        max_relative = 1e-12
    );
}

#[test]
fn test_eoq_minimizes_sampled_cost() {
    let cases = [
        input(1000.0, 50.0, 5.0),
        input(12.0, 400.0, 0.3),
        input(1.0e6, 1.5, 40.0),
        input(365.0, 10.0, 0.25),
    ];

    for case in &cases {
        let result = compute_eoq(case, 100).unwrap();
        assert!(result.eoq > 0.0);

        let at_eoq = total_cost(case, result.eoq);
        assert_relative_eq!(at_eoq, result.total_cost, max_relative = 1e-12);
        for point in &result.cost_curve {
            assert!(
                at_eoq <= point.y * (1.0 + 1e-12),
                "TC({}) = {} below TC(EOQ) = {}",
                point.x,
                point.y,
                at_eoq
            );
        }
    }
}

#[test]
fn test_curve_spans_one_to_twice_eoq() {
    let result = compute_eoq(&input(1000.0, 50.0, 5.0), 100).unwrap();

    assert_eq!(result.cost_curve.len(), 100);
    assert_eq!(result.cost_curve[0].x, 1.0);
    assert_abs_diff_eq!(result.cost_curve[99].x, 2.0 * result.eoq, epsilon = 1e-9);
    assert!(result.cost_curve.windows(2).all(|w| w[0].x < w[1].x));
}

#[test]
fn test_curve_resolution_is_configurable() {
    let result = compute_eoq(&input(1000.0, 50.0, 5.0), 7).unwrap();
    assert_eq!(result.cost_curve.len(), 7);
}

#[test]
fn test_non_positive_inputs_rejected() {
    let cases = [
        (input(0.0, 50.0, 5.0), "annual_demand"),
        (input(1000.0, -1.0, 5.0), "ordering_cost"),
        (input(1000.0, 50.0, 0.0), "holding_cost"),
        (input(1000.0, 50.0, f64::NAN), "holding_cost"),
    ];

    for (case, expected) in &cases {
        match compute_eoq(case, 100) {
            Err(ModelError::InvalidInput { parameter, .. }) => assert_eq!(parameter, *expected),
            other => panic!("expected invalid {}, got {:?}", expected, other),
        }
    }
}

#[test]
fn test_too_few_curve_points_rejected() {
    let err = compute_eoq(&input(1000.0, 50.0, 5.0), 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_huge_inputs_stay_finite() {
    let result = compute_eoq(&input(1e200, 1e200, 1e200), 100).unwrap();

    assert_relative_eq!(result.eoq, 2.0_f64.sqrt() * 1e100, max_relative = 1e-12);
    assert!(result.total_cost.is_finite());
    assert_relative_eq!(result.total_cost, result.eoq * 1e200, max_relative = 1e-12);
    assert!(result.cost_curve.iter().all(|p| p.x.is_finite() && !p.y.is_nan()));
    assert_eq!(result.cost_curve.last().unwrap().x, 2.0 * result.eoq);
}

#[test]
fn test_tiny_inputs_stay_positive() {
    let result = compute_eoq(&input(1e-200, 1e-200, 1e200), 100).unwrap();

    assert!(result.eoq > 0.0 && result.eoq.is_finite());
    assert_relative_eq!(result.eoq, 2.0_f64.sqrt() * 1e-300, max_relative = 1e-12);
}
