//! Mode-state rollout lower bound.

use super::*;
use std::collections::BTreeMap;

/// Rollout lower bound following the best action for the modal state.
///
/// Each step finds the heaviest state in the live set and plays
/// `model.preferred` for it — a closed-loop policy that commits the whole
/// belief to the action its most plausible member wants. Stronger than a
/// random rollout whenever the belief is peaked. Ties on the modal weight
/// break toward the smallest state by `Ord`, which keeps the bound
/// deterministic.
pub struct ModePolicy {
    config: Config,
}

impl ModePolicy {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl<M> LowerBound<M> for ModePolicy
where
    M: Model,
    M::S: Ord,
{
    fn lower(
        &self,
        _: &History,
        particles: &[Particle<M::S>],
        depth: usize,
        model: &M,
        streams: &RandomStreams,
    ) -> (Utility, Action) {
        let mut live = particles
            .iter()
            .filter(|p| !model.is_terminal(p.state()))
            .cloned()
            .collect::<Vec<_>>();
        let mut first = None;
        let mut value = 0.0;
        let mut scale = 1.0;
        for t in depth..self.config.depth() {
            if live.is_empty() {
                break;
            }
            let action = model.preferred(&mode(&live));
            first.get_or_insert(action);
            for particle in live.iter_mut() {
                let draw = streams.entry(particle.stream(), t);
                let (reward, _) = model.step(particle.state_mut(), draw, action);
                value += scale * particle.weight() * reward;
            }
            live.retain(|p| !model.is_terminal(p.state()));
            scale *= self.config.discount();
        }
        let first = first.unwrap_or_else(|| model.preferred(particles[0].state()));
        (value / mass(particles), first)
    }
}

/// Heaviest state in the set by accumulated particle weight.
fn mode<S: Ord + Clone>(live: &[Particle<S>]) -> S {
    let mut tally = BTreeMap::<&S, Probability>::new();
    for particle in live {
        *tally.entry(particle.state()).or_insert(0.0) += particle.weight();
    }
    tally
        .into_iter()
        .reduce(|best, next| if next.1 > best.1 + TINY { next } else { best })
        .map(|(state, _)| state.clone())
        .expect("mode of a nonempty set")
}
