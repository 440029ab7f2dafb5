//! Shared types for the comparison engine.

pub mod bag;
pub mod range;
pub mod result;

pub use bag::MetricBag;
pub use range::{Direction, MetricRange};
pub use result::{ComparisonResult, NormalizedVector, Winner, SCALE_MAX};
