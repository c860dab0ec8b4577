//! Search observability.
//!
//! - Progress — unified accessors and aligned-column formatting
//! - Metrics — the counters a Solver accumulates across searches

mod metrics;
mod progress;

pub use metrics::*;
pub use progress::*;
