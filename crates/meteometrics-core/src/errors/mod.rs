//! Error handling for meteometrics.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod comparison_error;
pub mod config_error;

pub use comparison_error::{ComparisonError, UnknownMetric};
pub use config_error::ConfigError;
