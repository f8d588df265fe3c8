//! Tests for demand history loading.

use opsmodels::data::{load_demand_history, read_demand_history};
use opsmodels::forecast::fit_linear_demand;
use std::path::Path;

#[test]
fn test_load_fixture() {
    let series = load_demand_history(Path::new("tests/fixtures/demand_history.csv"))
        .expect("Failed to load fixture");

    assert_eq!(series.years, vec![2019, 2020, 2021, 2022]);
    assert_eq!(series.sales, vec![1000, 1100, 1200, 1300]);

    let fit = fit_linear_demand(&series, 2025).unwrap();
    assert_eq!(fit.prediction, 1600.0);
}

#[test]
fn test_read_keeps_row_order() {
    let csv = "year,sales\n2021,30\n2019,10\n2020,20\n";
    let series = read_demand_history(csv.as_bytes()).unwrap();
    assert_eq!(series.years, vec![2021, 2019, 2020]);
    assert_eq!(series.sales, vec![30, 10, 20]);
}

#[test]
fn test_non_integer_row_is_error() {
    let csv = "year,sales\n2019,10\n2020,lots\n";
    assert!(read_demand_history(csv.as_bytes()).is_err());
}

#[test]
fn test_missing_file_is_error() {
    assert!(load_demand_history(Path::new("tests/fixtures/missing.csv")).is_err());
}
