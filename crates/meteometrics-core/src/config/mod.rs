//! Configuration system for meteometrics.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod comparison_config;
pub mod meteo_config;
pub mod metric_override;

pub use comparison_config::{ComparisonConfig, FallbackPolicy};
pub use meteo_config::{ConfigOverrides, MeteoConfig};
pub use metric_override::MetricOverride;
