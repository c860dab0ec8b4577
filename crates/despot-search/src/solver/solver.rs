use crate::*;
use despot_core::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use std::time::Duration;
use std::time::Instant;

/// The anytime trial engine.
///
/// Owns the belief tree through its root and holds the model, the bound
/// pair, and the belief updater as separate capabilities, so bound
/// strategies can vary per experiment while the model stays immutable at
/// search time.
///
/// # Lifecycle
///
/// Construction samples K scenarios from the initial belief and seeds the
/// root. [`search`](Self::search) runs trials until the wall-clock budget
/// is spent or the root's excess uncertainty closes, then commits to an
/// action. [`update_belief`](Self::update_belief) installs the posterior
/// root after the world has actually moved; the old tree drops whole.
/// [`reset`](Self::reset) replays to the exact post-construction state.
///
/// # Action Commitment
///
/// On exit the search returns, in order of preference:
/// 1. with a pruning constant configured, the root's pruned action;
/// 2. the root's `default_action` if the root never entered the tree
///    (or pruning kept nothing) — the documented anytime fallback;
/// 3. otherwise the action maximizing the backed-up lower bound.
pub struct Solver<M, L, U, B>
where
    M: Model,
    L: LowerBound<M>,
    U: UpperBound<M>,
    B: BeliefUpdate<M>,
{
    scope: Scope<M, L, U>,
    belief: B,
    pool: Vec<Particle<M::S>>,
    root: VNode<M::S>,
    history: History,
    metrics: Metrics,
}

impl<M, L, U, B> Solver<M, L, U, B>
where
    M: Model,
    L: LowerBound<M>,
    U: UpperBound<M>,
    B: BeliefUpdate<M>,
{
    /// Build a solver over an initial belief given as weighted states.
    ///
    /// Rejects inputs the engine cannot honor: an empty or massless
    /// belief, fewer streams than scenarios, or streams shorter than the
    /// search depth.
    pub fn new(
        model: M,
        belief: Vec<(M::S, Probability)>,
        lower: L,
        upper: U,
        updater: B,
        streams: RandomStreams,
        config: Config,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(!belief.is_empty(), "initial belief must hold at least one state");
        anyhow::ensure!(
            belief.iter().all(|(_, w)| *w >= 0.0),
            "belief weights must be nonnegative"
        );
        anyhow::ensure!(
            belief.iter().map(|(_, w)| w).sum::<Probability>() > 0.0,
            "initial belief must carry positive mass"
        );
        anyhow::ensure!(
            streams.count() >= config.particles(),
            "need one stream per scenario: {} streams for K = {}",
            streams.count(),
            config.particles()
        );
        anyhow::ensure!(
            streams.length() >= config.depth(),
            "streams must cover the search depth: {} draws for depth {}",
            streams.length(),
            config.depth()
        );
        let pool = belief
            .into_iter()
            .map(|(state, weight)| Particle::new(state, 0, weight))
            .collect::<Vec<_>>();
        let scope = Scope {
            model,
            streams,
            lower,
            upper,
            config,
        };
        let mut updater = updater;
        let history = History::default();
        let root = Self::seed(&scope, &mut updater, &pool, &history);
        Ok(Self {
            scope,
            belief: updater,
            pool,
            root,
            history,
            metrics: Metrics::default(),
        })
    }

    /// Resample K scenarios from the initial pool and install a fresh root.
    pub fn init(&mut self) {
        self.root = Self::seed(&self.scope, &mut self.belief, &self.pool, &self.history);
    }

    /// Replay to the exact post-construction state: updater reset, history
    /// truncated, root resampled.
    pub fn reset(&mut self) {
        self.belief.reset();
        self.history.truncate(0);
        self.init();
    }

    /// Anytime search under a wall-clock budget.
    pub fn search(&mut self, budget: Duration) -> Plan {
        let start = Instant::now();
        let mut trials = 0;
        while start.elapsed() < budget && self.open() {
            self.step();
            trials += 1;
        }
        self.conclude(trials, start.elapsed())
    }

    /// Trial-budgeted variant of [`search`](Self::search): runs exactly
    /// `limit` trials unless the root closes first. Wall-clock plays no
    /// part, which makes this the reproducible way to drive the engine.
    pub fn explore(&mut self, limit: usize) -> Plan {
        let start = Instant::now();
        let mut trials = 0;
        while trials < limit && self.open() {
            self.step();
            trials += 1;
        }
        self.conclude(trials, start.elapsed())
    }

    /// Commit a real (action, observation): posterior belief via the
    /// updater, history append, fresh root. The whole old tree drops here.
    pub fn update_belief(&mut self, action: Action, obs: Obs) {
        let count = self.scope.config.particles();
        let particles =
            self.belief
                .update(&self.scope.model, self.root.particles(), count, action, obs);
        self.history.push(action, obs);
        self.root = Self::sprout(&self.scope, &self.history, particles);
    }

    /// True iff every root particle is terminal: the episode is over.
    pub fn finished(&self) -> bool {
        self.root
            .particles()
            .iter()
            .all(|p| self.scope.model.is_terminal(p.state()))
    }

    /// The committed (action, observation) log so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The current root, for inspection.
    pub fn root(&self) -> &VNode<M::S> {
        &self.root
    }

    /// Lifetime search counters.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    // search internals

    /// The root stopping test: excess uncertainty still above tolerance.
    /// At depth 0 this is `(1 - ξ)(U - L) > TINY`.
    fn open(&self) -> bool {
        let root = (self.root.lower(), self.root.upper());
        excess(root.0, root.1, root, 0, &self.scope.config) > TINY
    }

    /// One trial from the root.
    fn step(&mut self) {
        let root = (self.root.lower(), self.root.upper());
        let Self {
            scope,
            root: node,
            history,
            metrics,
            ..
        } = self;
        trial(node, root, scope, history, metrics);
        metrics.add_trials(1);
        if let Some(stats) = metrics.checkpoint() {
            log::info!("{}", stats);
        }
    }

    /// Commit to an action and report.
    fn conclude(&mut self, trials: usize, elapsed: Duration) -> Plan {
        let config = self.scope.config;
        let action = if config.pruning() > 0.0 {
            self.root.prune(config.pruning(), config.discount());
            self.root.pruned().unwrap_or(self.root.default_action())
        } else if !self.root.in_tree() {
            self.root.default_action()
        } else {
            self.best_lower()
        };
        let plan = Plan {
            action,
            trials,
            lower: self.root.lower(),
            upper: self.root.upper(),
            nodes: self.root.subtree(),
            seconds: elapsed.as_secs_f64(),
        };
        log::debug!("{}", plan);
        plan
    }

    /// Root action maximizing the backed-up lower bound, ties broken
    /// strictly toward earlier actions.
    fn best_lower(&self) -> Action {
        let discount = self.scope.config.discount();
        let mut best = -INF;
        let mut arg = self.root.default_action();
        for qnode in self.root.children() {
            let value = qnode.reward() + discount * qnode.lower();
            if value > best + TINY {
                best = value;
                arg = qnode.action();
            }
        }
        arg
    }

    /// Shuffle the initial pool under the world seed and sample K scenarios.
    fn seed(
        scope: &Scope<M, L, U>,
        belief: &mut B,
        pool: &[Particle<M::S>],
        history: &History,
    ) -> VNode<M::S> {
        let mut shuffled = pool.to_vec();
        let ref mut rng = SmallRng::seed_from_u64(scope.streams.world_seed());
        shuffled.shuffle(rng);
        let particles = belief.sample(&shuffled, scope.config.particles());
        Self::sprout(scope, history, particles)
    }

    /// Seed a root node's bounds from the plug-ins at depth 0.
    fn sprout(
        scope: &Scope<M, L, U>,
        history: &History,
        particles: Vec<Particle<M::S>>,
    ) -> VNode<M::S> {
        let (lower, fallback) =
            scope
                .lower
                .lower(history, &particles, 0, &scope.model, &scope.streams);
        let upper = scope.upper.upper(history, &particles, 0, &scope.model);
        VNode::new(particles, 0, lower, upper, fallback)
    }
}
