//! Sampled curves handed to the presentation layer for charting.

use serde::Serialize;

/// A single `(x, y)` sample of a chart curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Returns `count` evenly spaced values from `start` to `end`, both inclusive.
///
/// A `count` of one yields just `start`; zero yields nothing.
///
/// # Example
///
/// ```
/// use opsmodels::curve::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Samples `f` at `count` evenly spaced points over `[start, end]`.
pub fn sample<F>(start: f64, end: f64, count: usize, f: F) -> Vec<CurvePoint>
where
    F: Fn(f64) -> f64,
{
    linspace(start, end, count)
        .into_iter()
        .map(|x| CurvePoint { x, y: f(x) })
        .collect()
}
