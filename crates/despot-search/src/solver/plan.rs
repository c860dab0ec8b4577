use despot_core::*;
use serde::Serialize;

/// The outcome of one anytime search.
///
/// Carries the committed action together with enough diagnostics for a
/// host to log, persist, or chart a whole episode of decisions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    /// Action to execute in the world.
    pub action: Action,
    /// Trials completed within the budget.
    pub trials: usize,
    /// Root lower bound when search stopped.
    pub lower: Utility,
    /// Root upper bound when search stopped.
    pub upper: Utility,
    /// In-tree node count under the root.
    pub nodes: usize,
    /// Wall-clock seconds the search consumed.
    pub seconds: f64,
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<12}{:<16}{:<14}{:<28}{:<10}",
            format!("a{}", self.action),
            format!("trials {}", self.trials),
            format!("nodes {}", self.nodes),
            format!("bounds [{:.4}, {:.4}]", self.lower, self.upper),
            format!("{:.3}s", self.seconds),
        )
    }
}
