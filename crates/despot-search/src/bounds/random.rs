//! Random rollout lower bound.

use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Rollout lower bound under a uniformly random action sequence.
///
/// Draws one action per lookahead step and applies it to every live
/// particle, so the returned value is that of an actual open-loop policy,
/// realizable by construction. Particles step on their own scenario
/// streams; the action sequence comes from a generator seeded off
/// `model_seed ^ history length`, which keeps the bound deterministic for
/// a given search and distinct across tree levels.
pub struct RandomPolicy {
    config: Config,
}

impl RandomPolicy {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl<M: Model> LowerBound<M> for RandomPolicy {
    fn lower(
        &self,
        history: &History,
        particles: &[Particle<M::S>],
        depth: usize,
        model: &M,
        streams: &RandomStreams,
    ) -> (Utility, Action) {
        let ref mut rng = SmallRng::seed_from_u64(streams.model_seed() ^ history.len() as Seed);
        let mut live = particles
            .iter()
            .filter(|p| !model.is_terminal(p.state()))
            .cloned()
            .collect::<Vec<_>>();
        let first = rng.random_range(0..model.actions());
        let mut action = first;
        let mut value = 0.0;
        let mut scale = 1.0;
        for t in depth..self.config.depth() {
            if live.is_empty() {
                break;
            }
            for particle in live.iter_mut() {
                let draw = streams.entry(particle.stream(), t);
                let (reward, _) = model.step(particle.state_mut(), draw, action);
                value += scale * particle.weight() * reward;
            }
            live.retain(|p| !model.is_terminal(p.state()));
            scale *= self.config.discount();
            action = rng.random_range(0..model.actions());
        }
        (value / mass(particles), first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_give_identical_rollouts() {
        let config = Config::new(8, 6, 0.95, 0.0, 0.5).expect("valid config");
        let streams = RandomStreams::new(8, 6, 3);
        let policy = RandomPolicy::new(config);
        let particles = (0..8)
            .map(|s| {
                let state = if s % 2 == 0 {
                    TigerState::Left
                } else {
                    TigerState::Right
                };
                Particle::new(state, s, 0.125)
            })
            .collect::<Vec<_>>();
        let ref history = History::default();
        let ref model = Tiger::default();
        let once = policy.lower(history, &particles, 0, model, &streams);
        let twice = policy.lower(history, &particles, 0, model, &streams);
        assert_eq!(once, twice);
    }

    #[test]
    fn fully_terminal_beliefs_are_worth_nothing() {
        let config = Config::new(1, 6, 0.95, 0.0, 0.5).expect("valid config");
        let streams = RandomStreams::new(1, 6, 3);
        let policy = RandomPolicy::new(config);
        let particles = vec![Particle::new(TigerState::Done, 0, 1.0)];
        let (value, _) = policy.lower(&History::default(), &particles, 0, &Tiger::default(), &streams);
        assert_eq!(value, 0.0);
    }
}
