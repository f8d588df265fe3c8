//! Linear demand forecasting.
//!
//! Fits `sales = intercept + slope·year` by ordinary least squares over the
//! historical series and extrapolates to any year. Whether an extrapolation
//! far outside the history is meaningful is left to the caller.

use tracing::{debug, warn};

use crate::curve::CurvePoint;
use crate::error::{ModelError, ModelResult};
use crate::models::{DemandSeries, RegressionResult};

/// Parses a comma-separated list of integers such as `"2019, 2020, 2021"`.
///
/// Whitespace around each token is ignored. A blank string is an empty
/// sequence; any other token that is not an integer, including an empty one
/// between two commas, is rejected.
///
/// # Errors
///
/// [`ModelError::MalformedInput`] naming the first offending token.
///
/// # Example
///
/// ```
/// use opsmodels::forecast::parse_series;
///
/// assert_eq!(parse_series("1000, 1100,1200").unwrap(), vec![1000, 1100, 1200]);
/// assert!(parse_series("1000, lots").is_err());
/// ```
pub fn parse_series(text: &str) -> ModelResult<Vec<i64>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| ModelError::MalformedInput {
                token: token.to_string(),
            })
        })
        .collect()
}

impl DemandSeries {
    /// Builds a series from the two comma-separated form fields.
    ///
    /// Only parsing happens here; length checks are done by
    /// [`fit_linear_demand`].
    pub fn parse(years: &str, sales: &str) -> ModelResult<Self> {
        Ok(DemandSeries {
            years: parse_series(years)?,
            sales: parse_series(sales)?,
        })
    }
}

fn validate(series: &DemandSeries) -> ModelResult<()> {
    if series.years.len() != series.sales.len() {
        return Err(ModelError::LengthMismatch {
            years: series.years.len(),
            sales: series.sales.len(),
        });
    }
    // Years are fitted as f64, where neighbours near i64::MAX collapse.
    let mut distinct: Vec<f64> = series.years.iter().map(|&year| year as f64).collect();
    distinct.sort_unstable_by(f64::total_cmp);
    distinct.dedup();
    if distinct.len() < 2 {
        return Err(ModelError::InsufficientData {
            points: distinct.len(),
        });
    }
    Ok(())
}

/// Fits the least-squares line through `series` and predicts `query_year`.
///
/// Uses the centred normal equations, which keep full precision for
/// calendar-sized years:
///
/// ```text
/// slope     = Σ(x − x̄)(y − ȳ) / Σ(x − x̄)²
/// intercept = ȳ − slope·x̄
/// ```
///
/// # Errors
///
/// * [`ModelError::LengthMismatch`] when years and sales differ in length.
/// * [`ModelError::InsufficientData`] with fewer than two distinct years,
///   counted after conversion to `f64`.
///
/// # Example
///
/// ```
/// use opsmodels::forecast::fit_linear_demand;
/// use opsmodels::models::DemandSeries;
///
/// let series = DemandSeries {
///     years: vec![2019, 2020, 2021],
///     sales: vec![1000, 1100, 1200],
/// };
/// let fit = fit_linear_demand(&series, 2025).unwrap();
/// assert_eq!(fit.slope, 100.0);
/// assert_eq!(fit.prediction, 1600.0);
/// ```
pub fn fit_linear_demand(series: &DemandSeries, query_year: i64) -> ModelResult<RegressionResult> {
    if let Err(err) = validate(series) {
        warn!(%err, "rejected demand series");
        return Err(err);
    }

    let n = series.years.len() as f64;
    let mean_x = series.years.iter().map(|&x| x as f64).sum::<f64>() / n;
    let mean_y = series.sales.iter().map(|&y| y as f64).sum::<f64>() / n;

    let (sxy, sxx) = series
        .years
        .iter()
        .zip(&series.sales)
        .fold((0.0, 0.0), |(sxy, sxx), (&x, &y)| {
            let dx = x as f64 - mean_x;
            (sxy + dx * (y as f64 - mean_y), sxx + dx * dx)
        });

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let line = |year: i64| intercept + slope * year as f64;
    let trend = series
        .years
        .iter()
        .chain(std::iter::once(&query_year))
        .map(|&year| CurvePoint {
            x: year as f64,
            y: line(year),
        })
        .collect();
    let result = RegressionResult {
        slope,
        intercept,
        query_year,
        prediction: line(query_year),
        trend,
    };

    debug!(slope, intercept, prediction = result.prediction, "fitted demand trend");
    Ok(result)
}
