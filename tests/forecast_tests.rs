//! Tests for the linear demand forecaster.

use approx::assert_relative_eq;
use opsmodels::error::{ErrorKind, ModelError};
use opsmodels::forecast::{fit_linear_demand, parse_series};
use opsmodels::models::DemandSeries;

#[test]
fn test_exact_line_has_zero_residual() {
    let series = DemandSeries {
        years: vec![2019, 2020, 2021],
        sales: vec![1000, 1100, 1200],
    };
    let fit = fit_linear_demand(&series, 2025).unwrap();

    assert_eq!(fit.slope, 100.0);
    assert_eq!(fit.intercept, -200_900.0);
    assert_eq!(fit.prediction, 1600.0);
    for (&year, &sales) in series.years.iter().zip(&series.sales) {
        assert_eq!(fit.predict(year), sales as f64);
    }
}

#[test]
fn test_noisy_series() {
    let series = DemandSeries {
        years: vec![1, 2, 3, 4],
        sales: vec![2, 4, 5, 8],
    };
    let fit = fit_linear_demand(&series, 5).unwrap();

    assert_relative_eq!(fit.slope, 1.9, max_relative = 1e-12);
    assert!(fit.intercept.abs() < 1e-12);
    assert_relative_eq!(fit.prediction, 9.5, max_relative = 1e-12);
}

#[test]
fn test_extrapolates_backwards() {
    let series = DemandSeries {
        years: vec![2010, 2015],
        sales: vec![500, 750],
    };
    let fit = fit_linear_demand(&series, 2000).unwrap();
    assert_relative_eq!(fit.prediction, 0.0, epsilon = 1e-9);
}

#[test]
fn test_trend_covers_history_and_query() {
    let series = DemandSeries {
        years: vec![2019, 2020, 2021],
        sales: vec![1000, 1100, 1200],
    };
    let fit = fit_linear_demand(&series, 2025).unwrap();

    let xs: Vec<f64> = fit.trend.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![2019.0, 2020.0, 2021.0, 2025.0]);
    assert_eq!(fit.trend[3].y, 1600.0);
}

#[test]
fn test_length_mismatch() {
    let series = DemandSeries {
        years: vec![2018, 2019, 2020, 2021, 2022],
        sales: vec![10, 20, 30, 40],
    };
    let err = fit_linear_demand(&series, 2023).unwrap_err();
    assert_eq!(err, ModelError::LengthMismatch { years: 5, sales: 4 });
}

#[test]
fn test_single_point_is_insufficient() {
    let series = DemandSeries {
        years: vec![2020],
        sales: vec![10],
    };
    let err = fit_linear_demand(&series, 2023).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InsufficientData);
}

#[test]
fn test_parse_series_from_form_text() {
    assert_eq!(parse_series("2019,2020, 2021 ").unwrap(), vec![2019, 2020, 2021]);
    assert_eq!(parse_series("-5, 0, 7").unwrap(), vec![-5, 0, 7]);
}

#[test]
fn test_parse_series_rejects_non_integers() {
    for text in ["2019, abc", "1.5, 2", "1;2;3"] {
        let err = parse_series(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput, "{}", text);
    }
}

#[test]
fn test_demand_series_parse() {
    let series = DemandSeries::parse("2019,2020", "1000,1100").unwrap();
    assert_eq!(series.years, vec![2019, 2020]);
    assert_eq!(series.sales, vec![1000, 1100]);

    assert!(matches!(
        DemandSeries::parse("2019,2020", "1000,x"),
        Err(ModelError::MalformedInput { token }) if token == "x"
    ));
}

#[test]
fn test_years_indistinguishable_as_floats_are_insufficient() {
    let series = DemandSeries {
        years: vec![i64::MAX, i64::MAX - 1],
        sales: vec![10, 20],
    };
    let err = fit_linear_demand(&series, 2023).unwrap_err();
    assert_eq!(err, ModelError::InsufficientData { points: 1 });
}
