use despot_core::*;

/// A weighted hidden-state sample bound to a scenario stream.
///
/// The stream index is assigned when the scenario is first sampled and is
/// preserved by every copy made during expansion, so a particle keeps
/// consuming its own stream of draws as it is simulated deeper. Particles
/// are owned by exactly one belief node at a time; copies made while
/// stepping either become members of a child node or drop.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle<S> {
    state: S,
    stream: Stream,
    weight: Probability,
}

impl<S> Particle<S> {
    pub fn new(state: S, stream: Stream, weight: Probability) -> Self {
        debug_assert!(weight >= 0.0);
        Self {
            state,
            stream,
            weight,
        }
    }
    /// The sampled hidden state.
    pub fn state(&self) -> &S {
        &self.state
    }
    /// Mutable state access for in-place stepping.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }
    /// The scenario stream this particle draws from.
    pub fn stream(&self) -> Stream {
        self.stream
    }
    /// Importance weight.
    pub fn weight(&self) -> Probability {
        self.weight
    }
}

/// Total weight of a particle set.
pub fn mass<S>(particles: &[Particle<S>]) -> Probability {
    particles.iter().map(Particle::weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_keep_their_stream() {
        let particle = Particle::new(3u8, 7, 0.25);
        let copy = particle.clone();
        assert_eq!(copy.stream(), 7);
        assert_eq!(copy.weight(), 0.25);
        assert_eq!(*copy.state(), 3);
    }

    #[test]
    fn mass_sums_weights() {
        let particles = (0..4).map(|s| Particle::new((), s, 0.25)).collect::<Vec<_>>();
        assert!((mass(&particles) - 1.0).abs() < 1e-6);
    }
}
