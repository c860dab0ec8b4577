use despot_core::*;

/// Search-time configuration for the trial engine.
///
/// | Knob | Effect |
/// |------|--------|
/// | `particles` | Scenarios per belief node (K) |
/// | `depth` | Maximum depth of any trial |
/// | `discount` | Reward discount γ, in (0, 1] |
/// | `pruning` | Per-node penalty for the post-search pruning pass; 0 disables |
/// | `xi` | Regularization weight ξ in the excess uncertainty test, in (0, 1) |
///
/// # Validation
///
/// Construction rejects out-of-range values instead of letting them
/// degenerate silently. ξ is the sharp one: the root stopping test reduces
/// to `(1 - ξ)(U - L) > TINY`, so any ξ ≥ 1 would stop every search before
/// its first trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    particles: usize,
    depth: usize,
    discount: Discount,
    pruning: Utility,
    xi: Utility,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particles: SEARCH_PARTICLES,
            depth: SEARCH_DEPTH,
            discount: SEARCH_DISCOUNT,
            pruning: SEARCH_PRUNING,
            xi: SEARCH_XI,
        }
    }
}

impl Config {
    pub fn new(
        particles: usize,
        depth: usize,
        discount: Discount,
        pruning: Utility,
        xi: Utility,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(particles > 0, "at least one scenario per belief node");
        anyhow::ensure!(depth > 0, "zero search depth never expands the root");
        anyhow::ensure!(
            discount > 0.0 && discount <= 1.0,
            "discount must lie in (0, 1], got {}",
            discount
        );
        anyhow::ensure!(
            pruning >= 0.0 && pruning.is_finite(),
            "pruning constant must be finite and nonnegative, got {}",
            pruning
        );
        anyhow::ensure!(
            xi > 0.0 && xi < 1.0,
            "xi must lie in (0, 1), got {}: at 1 or above the stopping test \
             (1 - xi)(U - L) > TINY can never pass and search stops immediately",
            xi
        );
        Ok(Self {
            particles,
            depth,
            discount,
            pruning,
            xi,
        })
    }
    /// Scenarios per belief node (K).
    pub fn particles(&self) -> usize {
        self.particles
    }
    /// Maximum depth of any trial.
    pub fn depth(&self) -> usize {
        self.depth
    }
    /// Reward discount γ.
    pub fn discount(&self) -> Discount {
        self.discount
    }
    /// Per-node pruning penalty; 0 disables the pass.
    pub fn pruning(&self) -> Utility {
        self.pruning
    }
    /// Regularization weight ξ in the excess uncertainty test.
    pub fn xi(&self) -> Utility {
        self.xi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let d = Config::default();
        assert!(Config::new(d.particles, d.depth, d.discount, d.pruning, d.xi).is_ok());
    }

    #[test]
    fn rejects_degenerate_xi() {
        assert!(Config::new(100, 10, 0.95, 0.0, 1.0).is_err());
        assert!(Config::new(100, 10, 0.95, 0.0, 0.0).is_err());
        assert!(Config::new(100, 10, 0.95, 0.0, 1.5).is_err());
    }

    #[test]
    fn rejects_degenerate_discount() {
        assert!(Config::new(100, 10, 0.0, 0.0, 0.5).is_err());
        assert!(Config::new(100, 10, 1.1, 0.0, 0.5).is_err());
        assert!(Config::new(100, 10, 1.0, 0.0, 0.5).is_ok());
    }

    #[test]
    fn rejects_negative_pruning() {
        assert!(Config::new(100, 10, 0.9, -1.0, 0.5).is_err());
    }

    #[test]
    fn rejects_empty_search() {
        assert!(Config::new(0, 10, 0.9, 0.0, 0.5).is_err());
        assert!(Config::new(100, 0, 0.9, 0.0, 0.5).is_err());
    }
}
