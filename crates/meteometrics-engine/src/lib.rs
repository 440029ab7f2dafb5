//! # meteometrics-engine
//!
//! Pure, synchronous comparison engine: N heterogeneous metric bags in,
//! equal-length normalized vectors plus a winner ranking out.
//!
//! Pipeline: reconcile (sorted key intersection) → normalize (min-max onto
//! 0..10 with clamping) → assemble vectors → score winners. The facade
//! guarantees it never hands a presentation layer vectors of unequal length.

pub mod facade;
pub mod normalize;
pub mod reconcile;
pub mod registry;
pub mod report;
pub mod scoring;
pub mod vectors;

// Re-export the most commonly used types at the crate root.
pub use facade::{ComparisonFacade, PairComparison};
pub use registry::MetricRegistry;
