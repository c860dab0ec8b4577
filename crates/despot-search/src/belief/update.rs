use crate::*;
use despot_core::*;

/// Belief maintenance contract.
///
/// The updater owns whatever randomness and state it needs; the model stays
/// immutable. Both operations return particles ready to seed a fresh root:
/// uniformly weighted, with scenario stream ids dealt without replacement
/// so every scenario is represented at most once.
pub trait BeliefUpdate<M: Model> {
    /// Importance-resample `count` scenarios from an initial pool.
    fn sample(&mut self, pool: &[Particle<M::S>], count: usize) -> Vec<Particle<M::S>>;
    /// The posterior after committing `(action, obs)` in the real world.
    fn update(
        &mut self,
        model: &M,
        particles: &[Particle<M::S>],
        count: usize,
        action: Action,
        obs: Obs,
    ) -> Vec<Particle<M::S>>;
    /// Return to the state at construction, replaying identically.
    fn reset(&mut self);
}
