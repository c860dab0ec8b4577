use despot_core::*;

/// The problem definition consumed by the planner.
///
/// Implements the simulation core: deterministic transition replay via a
/// pre-drawn uniform, terminality, and the reward hints the generic bound
/// heuristics lean on. The state type is an associated type so the
/// per-particle stepping loop monomorphizes — no dynamic dispatch inside
/// the innermost loop.
///
/// # Required Methods
///
/// - `actions()` — Size of the action set; actions are dense indices
/// - `terminal_obs()` — The distinguished observation for ended scenarios
/// - `is_terminal(state)` — Whether a state has ended
/// - `step(state, u, action)` — Mutate `state` in place, return (reward, obs)
/// - `min_reward()` / `max_reward()` — Per-step reward envelope
/// - `preferred(state)` — Best single action for a fully known state
///
/// # Contract
///
/// `step` must emit `terminal_obs()` if and only if the resulting state is
/// terminal. Expansion treats this as a routing rule when partitioning
/// particles by observation, and asserts it. The model is held by immutable
/// reference at search time and carries no search state of its own.
pub trait Model: Send + Sync {
    /// Hidden world state. Cloned per action branch during expansion.
    type S: Clone + Send + Sync;

    /// Number of actions available. Actions are indices in `[0, actions())`.
    fn actions(&self) -> usize;
    /// The observation emitted exactly by transitions into terminal states.
    fn terminal_obs(&self) -> Obs;
    /// Whether this state has ended.
    fn is_terminal(&self, state: &Self::S) -> bool;
    /// Advance `state` in place under the pre-drawn uniform `u ∈ [0, 1)`.
    /// Returns the immediate reward and the emitted observation.
    fn step(&self, state: &mut Self::S, u: Probability, action: Action) -> (Utility, Obs);

    /// Smallest single-step reward the model can emit. Drives the reward
    /// floor of the worst-case lower bound.
    fn min_reward(&self) -> Utility;
    /// Largest single-step reward the model can emit. Drives the default
    /// [`optimistic`](Self::optimistic) horizon cap.
    fn max_reward(&self) -> Utility;
    /// Best single action for a fully known state. Drives the mode policy
    /// lower bound and the greedy-trajectory upper bound.
    fn preferred(&self, state: &Self::S) -> Action;

    /// Optimistic value achievable from a known state within `steps` more
    /// steps. Averaged per particle by the stochastic upper bound. The
    /// default is the discounted max-reward horizon sum; models with real
    /// per-state knowledge should override it with something tighter.
    fn optimistic(&self, state: &Self::S, steps: usize, discount: Discount) -> Utility {
        match self.is_terminal(state) {
            true => 0.0,
            false => horizon(self.max_reward(), discount, steps),
        }
    }
}

/// Discounted sum of a constant per-step reward over `steps` steps.
pub fn horizon(reward: Utility, discount: Discount, steps: usize) -> Utility {
    if discount == 1.0 {
        reward * steps as Utility
    } else {
        reward * (1.0 - discount.powi(steps as i32)) / (1.0 - discount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_handles_undiscounted_rewards() {
        assert_eq!(horizon(2.0, 1.0, 5), 10.0);
    }

    #[test]
    fn horizon_is_the_geometric_sum() {
        let direct = (0..10).map(|t| 0.9f32.powi(t)).sum::<f32>();
        assert!((horizon(1.0, 0.9, 10) - direct).abs() < 1e-4);
    }

    #[test]
    fn horizon_of_zero_steps_is_zero() {
        assert_eq!(horizon(5.0, 0.5, 0), 0.0);
    }
}
