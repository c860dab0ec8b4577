//! Deterministic scenario primitives.
//!
//! A scenario is a sampled hidden state paired with a fixed stream of future
//! random draws, so the same stochastic realization can be replayed down
//! every hypothetical action branch:
//! - RandomStreams — the pre-sampled table of draws, one stream per scenario
//! - Particle — a weighted state sample bound to its stream

mod particle;
mod streams;

pub use particle::*;
pub use streams::*;
