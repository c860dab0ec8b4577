use crate::*;
use std::time::Instant;

/// Accumulated counters for a solver's lifetime.
///
/// Plain cells — the trial engine is strictly single-threaded, so there is
/// nothing to contend with. Owns timing for both lifetime stats and the
/// periodic checkpoint gate.
pub struct Metrics {
    trials: usize,
    expansions: usize,
    nodes: usize,
    backups: usize,
    start: Instant,
    prior: (Instant, usize),
}

impl Default for Metrics {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            trials: 0,
            expansions: 0,
            nodes: 0,
            backups: 0,
            start: now,
            prior: (now, 0),
        }
    }
}

impl Metrics {
    pub fn add_trials(&mut self, n: usize) {
        self.trials += n;
    }
    pub fn add_expansions(&mut self, n: usize) {
        self.expansions += n;
    }
    pub fn add_nodes(&mut self, n: usize) {
        self.nodes += n;
    }
    pub fn add_backups(&mut self, n: usize) {
        self.backups += n;
    }
    /// Returns stats only if the checkpoint interval has elapsed.
    /// Reports interval rate (trials/sec since last checkpoint) rather
    /// than cumulative.
    pub fn checkpoint(&mut self) -> Option<String> {
        if self.prior.0.elapsed() >= despot_core::SEARCH_LOG_INTERVAL {
            let secs = self.prior.0.elapsed().as_secs().max(1) as f64;
            let rate = (self.trials - self.prior.1) as f64 / secs;
            self.prior = (Instant::now(), self.trials);
            Some(format!(
                "{:<20}{:<20}{:<20}{:<20}",
                format!("trials {}", self.trials),
                format!("expansions {}", self.expansions),
                format!("nodes {}", self.nodes),
                format!("T/sec {:.1}", rate),
            ))
        } else {
            None
        }
    }
}

impl Progress for Metrics {
    fn trials(&self) -> usize {
        self.trials
    }
    fn expansions(&self) -> usize {
        self.expansions
    }
    fn nodes(&self) -> usize {
        self.nodes
    }
    fn backups(&self) -> usize {
        self.backups
    }
    fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut metrics = Metrics::default();
        metrics.add_trials(3);
        metrics.add_trials(2);
        metrics.add_nodes(10);
        assert_eq!(metrics.trials(), 5);
        assert_eq!(metrics.nodes(), 10);
        assert!(metrics.stats().contains("trials 5"));
    }

    #[test]
    fn checkpoint_waits_for_the_interval() {
        let mut metrics = Metrics::default();
        metrics.add_trials(1);
        assert!(metrics.checkpoint().is_none());
    }
}
