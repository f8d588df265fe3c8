//! Tests for sampling configuration.

use opsmodels::config::SamplingConfig;

#[test]
fn test_defaults() {
    let config = SamplingConfig::default();
    assert_eq!(config.eoq_points, 100);
    assert_eq!(config.queue_states, 20);
    assert_eq!(config.break_even_points, 100);
    assert_eq!(config.decay_points, 100);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config: SamplingConfig = serde_json::from_str(r#"{"queue_states": 40}"#).unwrap();
    assert_eq!(config.queue_states, 40);
    assert_eq!(config.eoq_points, 100);
}

#[test]
fn test_empty_json_is_default() {
    let config: SamplingConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, SamplingConfig::default());
}
