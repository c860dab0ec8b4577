//! General-case upper bound.

use super::*;

/// Weighted average of per-state optimistic values.
///
/// The general upper bound: asks the model what each particle's state
/// could possibly be worth within the remaining horizon and averages by
/// weight. Tightness is entirely the model's business via
/// [`Model::optimistic`]; the default there is the discounted max-reward
/// horizon sum, always valid and usually loose.
pub struct StochasticBound {
    config: Config,
}

impl StochasticBound {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl<M: Model> UpperBound<M> for StochasticBound {
    fn upper(
        &self,
        _: &History,
        particles: &[Particle<M::S>],
        depth: usize,
        model: &M,
    ) -> Utility {
        let steps = self.config.depth().saturating_sub(depth);
        particles
            .iter()
            .map(|p| p.weight() * model.optimistic(p.state(), steps, self.config.discount()))
            .sum::<Utility>()
            / mass(particles)
    }
}
