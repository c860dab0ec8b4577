//! Reward-floor lower bound.

use super::*;

/// Pessimistic horizon sum over the reward floor.
///
/// Every live step of any policy earns at least `model.min_reward`, and a
/// scenario that terminates early earns zero thereafter, so the per-step
/// floor is clamped at zero to stay realizable either way. The cheapest
/// bound in the crate: no rollout, no streams, just arithmetic. Useful as
/// a baseline and for models whose rollouts are too expensive to run at
/// every fringe node. The fallback action is the model's preferred action
/// for the first particle's state.
pub struct WorstCaseBound {
    config: Config,
}

impl WorstCaseBound {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl<M: Model> LowerBound<M> for WorstCaseBound {
    fn lower(
        &self,
        _: &History,
        particles: &[Particle<M::S>],
        depth: usize,
        model: &M,
        _: &RandomStreams,
    ) -> (Utility, Action) {
        let steps = self.config.depth().saturating_sub(depth);
        let floor = horizon(model.min_reward().min(0.0), self.config.discount(), steps);
        let value = particles
            .iter()
            .map(|p| match model.is_terminal(p.state()) {
                true => 0.0,
                false => p.weight() * floor,
            })
            .sum::<Utility>()
            / mass(particles);
        (value, model.preferred(particles[0].state()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_live_particles_over_the_horizon() {
        let config = Config::new(2, 5, 0.95, 0.0, 0.5).expect("valid config");
        let streams = RandomStreams::new(2, 5, 1);
        let bound = WorstCaseBound::new(config);
        let particles = vec![
            Particle::new(TigerState::Left, 0, 0.5),
            Particle::new(TigerState::Done, 1, 0.5),
        ];
        let (value, action) =
            bound.lower(&History::default(), &particles, 0, &Tiger::default(), &streams);
        let floor = horizon(-100.0, 0.95, 5);
        assert!((value - 0.5 * floor).abs() < 1e-2, "value {}", value);
        assert_eq!(action, Tiger::OPEN_RIGHT);
    }

    #[test]
    fn nonnegative_floors_clamp_to_zero() {
        // a model whose worst step still pays cannot promise the full
        // horizon sum: a scenario may terminate early and earn nothing more
        struct Generous;
        impl Model for Generous {
            type S = ();
            fn actions(&self) -> usize {
                1
            }
            fn terminal_obs(&self) -> Obs {
                1
            }
            fn is_terminal(&self, _: &()) -> bool {
                false
            }
            fn step(&self, _: &mut (), _: Probability, _: Action) -> (Utility, Obs) {
                (2.0, 0)
            }
            fn min_reward(&self) -> Utility {
                2.0
            }
            fn max_reward(&self) -> Utility {
                2.0
            }
            fn preferred(&self, _: &()) -> Action {
                0
            }
        }
        let config = Config::new(1, 5, 0.95, 0.0, 0.5).expect("valid config");
        let streams = RandomStreams::new(1, 5, 1);
        let bound = WorstCaseBound::new(config);
        let particles = vec![Particle::new((), 0, 1.0)];
        let (value, _) =
            bound.lower(&History::default(), &particles, 0, &Generous, &streams);
        assert_eq!(value, 0.0);
    }
}
