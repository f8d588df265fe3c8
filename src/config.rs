//! Chart sampling configuration.
//!
//! Resolutions are presentation choices, so they live here rather than being
//! hard-coded in the models. Every field has a default, and a partial JSON
//! object fills in the rest.

use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Number of samples drawn for each chart-oriented output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SamplingConfig {
    /// Points on the EOQ total-cost curve.
    #[serde(default = "default_curve_points")]
    pub eoq_points: usize,
    /// Length of the truncated M/M/1 state distribution.
    #[serde(default = "default_queue_states")]
    pub queue_states: usize,
    /// Points on the break-even revenue and cost lines.
    #[serde(default = "default_curve_points")]
    pub break_even_points: usize,
    /// Points on the exponential decay curve.
    #[serde(default = "default_curve_points")]
    pub decay_points: usize,
}

fn default_curve_points() -> usize {
    100
}

fn default_queue_states() -> usize {
    20
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            eoq_points: default_curve_points(),
            queue_states: default_queue_states(),
            break_even_points: default_curve_points(),
            decay_points: default_curve_points(),
        }
    }
}

impl SamplingConfig {
    /// Reads a sampling configuration from a JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use opsmodels::config::SamplingConfig;
    ///
    /// let config = SamplingConfig::load(Path::new("sampling.json")).unwrap();
    /// println!("{} EOQ samples", config.eoq_points);
    /// ```
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
