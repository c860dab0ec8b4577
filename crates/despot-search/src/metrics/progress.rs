use std::time::Duration;

/// Unified trait for search progress reporting.
///
/// Provides core accessors for trials, expansions, tree nodes, and elapsed
/// time, with default implementations for formatted stats and summary
/// output.
pub trait Progress {
    /// Completed root-to-fringe trials.
    fn trials(&self) -> usize;
    /// Fringe nodes expanded into action children.
    fn expansions(&self) -> usize;
    /// Belief nodes created across all expansions.
    fn nodes(&self) -> usize;
    /// Bound backups performed along trial paths.
    fn backups(&self) -> usize;
    /// Wall-clock duration since the solver was built.
    fn elapsed(&self) -> Duration;
    /// Formats stats as aligned columns with throughput calculation.
    fn format(&self) -> String {
        let rate = self.trials() as f64 / self.elapsed().as_secs().max(1) as f64;
        format!(
            "{:<20}{:<20}{:<20}{:<20}",
            format!("trials {}", self.trials()),
            format!("expansions {}", self.expansions()),
            format!("nodes {}", self.nodes()),
            format!("T/sec {:.1}", rate),
        )
    }
    fn stats(&self) -> String {
        self.format()
    }
    fn summary(&self) -> String {
        format!("search stopped\n{}", self.format())
    }
}
