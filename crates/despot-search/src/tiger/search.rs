//! Canonical tiger solver assembly and its test battery.
//!
//! The tests here drive whole searches and check the planner-level
//! properties that the unit tests around the crate cannot see: that the
//! committed action is sensible, that searches are bit-reproducible, that
//! longer budgets only tighten bounds, and that the tree invariants hold
//! after arbitrary amounts of search.

use crate::*;
use despot_core::*;

/// The canonical solver assembly for the tiger problem: random-rollout
/// lower bound, per-state optimistic upper bound, importance resampling
/// filter.
pub type TigerSolver = Solver<Tiger, RandomPolicy, StochasticBound, ParticleFilter>;

impl TigerSolver {
    /// Uniform two-door belief with K scenarios at the given depth and
    /// seed, γ = 0.95, pruning disabled.
    pub fn uniform(particles: usize, depth: usize, seed: Seed) -> Self {
        let config = Config::new(particles, depth, 0.95, 0.0, 0.95).expect("valid config");
        let streams = RandomStreams::new(particles, depth, seed);
        let updater = ParticleFilter::new(streams.belief_seed());
        Solver::new(
            Tiger::default(),
            vec![(TigerState::Left, 0.5), (TigerState::Right, 0.5)],
            RandomPolicy::new(config),
            StochasticBound::new(config),
            updater,
            streams,
            config,
        )
        .expect("valid solver")
    }
}
