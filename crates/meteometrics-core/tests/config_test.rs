//! Tests for the meteometrics configuration system.

use std::sync::Mutex;

use meteometrics_core::config::{ConfigOverrides, FallbackPolicy, MeteoConfig};
use meteometrics_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Clear all METEO_ env vars to prevent cross-test contamination.
fn clear_meteo_env_vars() {
    for key in ["METEO_UNKNOWN_METRIC_FALLBACK", "METEO_TIE_EPSILON"] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_meteo_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("meteometrics.toml"),
        r#"
[comparison]
unknown_metric_fallback = "observed-range"
tie_epsilon = 1e-6
"#,
    )
    .unwrap();

    // Env overrides the project file for the fallback policy
    std::env::set_var("METEO_UNKNOWN_METRIC_FALLBACK", "skip");

    // Programmatic override wins for the epsilon
    let overrides = ConfigOverrides {
        tie_epsilon: Some(1e-3),
        ..Default::default()
    };

    let config = MeteoConfig::load(dir.path(), Some(&overrides)).unwrap();
    assert_eq!(config.comparison.effective_fallback(), FallbackPolicy::Skip);
    assert_eq!(config.comparison.effective_tie_epsilon(), 1e-3);

    clear_meteo_env_vars();
}

#[test]
fn test_missing_project_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_meteo_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = MeteoConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.comparison.effective_fallback(), FallbackPolicy::Skip);
    assert_eq!(config.comparison.effective_tie_epsilon(), 1e-9);
    assert!(config.metrics.is_empty());
}

#[test]
fn test_metric_overrides_parse() {
    let config = MeteoConfig::from_toml(
        r#"
[metrics.snow_depth]
min = 0.0
max = 200.0
direction = "higher"

[metrics.humidity]
direction = "lower"
"#,
    )
    .unwrap();

    let snow = &config.metrics["snow_depth"];
    assert_eq!(snow.min, Some(0.0));
    assert_eq!(snow.max, Some(200.0));
    assert!(config.metrics["humidity"].min.is_none());
}

#[test]
fn test_invalid_toml_rejected() {
    let err = MeteoConfig::from_toml("comparison = nonsense");
    assert!(matches!(err, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_inverted_override_range_rejected() {
    let err = MeteoConfig::from_toml(
        r#"
[metrics.bogus]
min = 10.0
max = 1.0
"#,
    );
    assert!(matches!(err, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_nonpositive_epsilon_rejected() {
    let err = MeteoConfig::from_toml(
        r#"
[comparison]
tie_epsilon = 0.0
"#,
    );
    assert!(matches!(err, Err(ConfigError::ValidationFailed { .. })));
}
