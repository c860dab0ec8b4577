//! Single-trajectory upper bound for deterministic models.

use super::*;

/// Per-particle greedy trajectory value.
///
/// For models with deterministic transitions: each particle's state is
/// rolled forward under `model.preferred` to the horizon and the
/// discounted rewards accumulate. When `preferred` is the optimal
/// fully-observed action this is the fully-observed optimal value, which
/// dominates the partially-observed optimum. The transition draw is inert
/// for such models, so a constant 0 is passed.
///
/// Do not use this on stochastic models — a single trajectory through
/// chance outcomes bounds nothing.
pub struct TrajectoryBound {
    config: Config,
}

impl TrajectoryBound {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl<M: Model> UpperBound<M> for TrajectoryBound {
    fn upper(
        &self,
        _: &History,
        particles: &[Particle<M::S>],
        depth: usize,
        model: &M,
    ) -> Utility {
        let mut value = 0.0;
        for particle in particles {
            let mut state = particle.state().clone();
            let mut scale = 1.0;
            for _ in depth..self.config.depth() {
                if model.is_terminal(&state) {
                    break;
                }
                let action = model.preferred(&state);
                let (reward, _) = model.step(&mut state, 0.0, action);
                value += scale * particle.weight() * reward;
                scale *= self.config.discount();
            }
        }
        value / mass(particles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_trajectories_bound_known_states() {
        let config = Config::new(4, 5, 0.95, 0.0, 0.5).expect("valid config");
        let bound = TrajectoryBound::new(config);
        let particles = vec![
            Particle::new(TigerState::Left, 0, 0.25),
            Particle::new(TigerState::Right, 1, 0.25),
            Particle::new(TigerState::Left, 2, 0.25),
            Particle::new(TigerState::Right, 3, 0.25),
        ];
        // every particle walks straight through its safe door
        let value = bound.upper(&History::default(), &particles, 0, &Tiger::default());
        assert!((value - 10.0).abs() < 1e-4);
    }

    #[test]
    fn terminal_particles_contribute_nothing() {
        let config = Config::new(2, 5, 0.95, 0.0, 0.5).expect("valid config");
        let bound = TrajectoryBound::new(config);
        let particles = vec![
            Particle::new(TigerState::Left, 0, 0.5),
            Particle::new(TigerState::Done, 1, 0.5),
        ];
        let value = bound.upper(&History::default(), &particles, 0, &Tiger::default());
        assert!((value - 5.0).abs() < 1e-4);
    }
}
