use crate::*;
use despot_core::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;

/// Sequential importance resampling filter.
///
/// `update` pushes every live particle through the model under a fresh
/// uniform, keeps the ones that reproduce the committed observation, and
/// resamples the survivors back to full strength with fresh stream ids.
///
/// # Degeneracy
///
/// A posterior can reject every particle — the committed observation was
/// simply never sampled. The episode must still produce actions, so the
/// filter falls back to the unconditioned predictive set and logs the
/// degeneracy rather than aborting. A fully terminal belief is returned
/// unchanged for the same reason.
pub struct ParticleFilter {
    seed: Seed,
    rng: SmallRng,
}

impl ParticleFilter {
    /// Seed with [`RandomStreams::belief_seed`] so searches replay.
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    /// Weighted resampling to `count` uniformly weighted particles, stream
    /// ids dealt as a permutation of `0..count`.
    fn resample<S: Clone>(&mut self, pool: &[Particle<S>], count: usize) -> Vec<Particle<S>> {
        let mut streams = (0..count).collect::<Vec<Stream>>();
        streams.shuffle(&mut self.rng);
        let weight = 1.0 / count as Probability;
        streams
            .into_iter()
            .map(|stream| {
                let sampled = pool
                    .choose_weighted(&mut self.rng, |p| p.weight())
                    .expect("pool holds positive mass");
                Particle::new(sampled.state().clone(), stream, weight)
            })
            .collect()
    }
}

impl<M: Model> BeliefUpdate<M> for ParticleFilter {
    fn sample(&mut self, pool: &[Particle<M::S>], count: usize) -> Vec<Particle<M::S>> {
        self.resample(pool, count)
    }

    fn update(
        &mut self,
        model: &M,
        particles: &[Particle<M::S>],
        count: usize,
        action: Action,
        obs: Obs,
    ) -> Vec<Particle<M::S>> {
        let mut matched = Vec::new();
        let mut predictive = Vec::new();
        for particle in particles.iter().filter(|p| !model.is_terminal(p.state())) {
            let mut copy = particle.clone();
            let draw = self.rng.random::<Probability>();
            let (_, emitted) = model.step(copy.state_mut(), draw, action);
            match emitted == obs {
                true => matched.push(copy),
                false => predictive.push(copy),
            }
        }
        let support = if !matched.is_empty() {
            matched
        } else if !predictive.is_empty() {
            log::warn!(
                "no particle reproduced observation {}; falling back to the predictive belief",
                obs
            );
            predictive
        } else {
            log::warn!("belief is fully terminal; keeping it unchanged");
            particles.to_vec()
        };
        self.resample(&support, count)
    }

    fn reset(&mut self) {
        self.rng = SmallRng::seed_from_u64(self.seed);
    }
}
