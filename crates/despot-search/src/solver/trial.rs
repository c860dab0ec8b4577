use crate::*;
use despot_core::*;
use std::collections::BTreeMap;

/// Immutable search-time context shared by every trial: the model, the
/// scenario streams, the bound plug-ins, and the configuration. Split off
/// from the solver so a trial can borrow it whole while the tree is
/// borrowed mutably.
pub(crate) struct Scope<M, L, U> {
    pub model: M,
    pub streams: RandomStreams,
    pub lower: L,
    pub upper: U,
    pub config: Config,
}

/// Excess uncertainty of a node relative to the root:
/// `(U - L) · γ^(-d) - ξ · (U₀ - L₀)`.
///
/// The discount normalization puts deep gaps on the root's scale; the ξ
/// term measures how much of the root's own gap a node must explain to be
/// worth more search. At the root itself this reduces to
/// `(1 - ξ)(U - L)`, the outer loop's stopping test.
pub(crate) fn excess(
    lower: Utility,
    upper: Utility,
    root: (Utility, Utility),
    depth: usize,
    config: &Config,
) -> Utility {
    (upper - lower) * config.discount().powi(-(depth as i32)) - config.xi() * (root.1 - root.0)
}

/// One trial from `node`: descend best-upper-bound actions and
/// highest-excess-uncertainty observations to a fringe (expanding it) or to
/// an unproductive branch, then back bounds up the visited path. Returns
/// how many nodes newly entered the tree.
pub(crate) fn trial<M, L, U>(
    node: &mut VNode<M::S>,
    root: (Utility, Utility),
    scope: &Scope<M, L, U>,
    history: &mut History,
    metrics: &mut Metrics,
) -> usize
where
    M: Model,
    L: LowerBound<M>,
    U: UpperBound<M>,
{
    // depth cutoff; terminal beliefs are never expanded, and checking one
    // particle suffices since terminal particles all route to the same child
    if node.depth() >= scope.config.depth()
        || scope.model.is_terminal(node.particles()[0].state())
    {
        return 0;
    }
    if node.is_fringe() {
        expand(node, scope, history, metrics);
    }
    let star = node.star();
    let mut added = 0;
    if let Some(obs) = descend(node.child(star), root, &scope.config) {
        history.push(star, obs);
        added += trial(node.child_mut(star).child_mut(obs), root, scope, history, metrics);
        history.pop();
    }
    backup(node, scope);
    metrics.add_backups(1);
    node.grow(added);
    if !node.in_tree() {
        node.enter();
        added += 1;
    }
    added
}

/// Observation branch with the highest weighted excess uncertainty, if any
/// is worth recursing into. A maximum at or below zero means no branch can
/// explain enough of the root's gap to continue.
fn descend<S>(qnode: &QNode<S>, root: (Utility, Utility), config: &Config) -> Option<Obs> {
    let mut best = 0.0;
    let mut chosen = None;
    for (obs, child) in qnode.children() {
        let weuo = child.weight() / qnode.weight()
            * excess(child.lower(), child.upper(), root, child.depth(), config);
        if weuo > best {
            best = weuo;
            chosen = Some(*obs);
        }
    }
    chosen
}

/// Back both bounds up into `node`.
///
/// The lower bound rises monotonically through the descended action. The
/// upper bound is re-maximized across all actions — each particle's best
/// first action may differ, so inheriting the incumbent's value would be
/// wrong — and the argmax becomes the next descent's `star`.
fn backup<M, L, U>(node: &mut VNode<M::S>, scope: &Scope<M, L, U>)
where
    M: Model,
    L: LowerBound<M>,
    U: UpperBound<M>,
{
    let discount = scope.config.discount();
    let through = {
        let qnode = node.child(node.star());
        qnode.reward() + discount * qnode.lower()
    };
    node.raise_lower(through);
    let mut best = -INF;
    let mut arg = 0;
    for qnode in node.children() {
        let value = qnode.reward() + discount * qnode.upper();
        if value > best + TINY {
            best = value;
            arg = qnode.action();
        }
    }
    node.set_upper(best);
    node.set_star(arg);
    assert!(
        node.lower() <= node.upper() + TINY,
        "bounds crossed after backup: {} > {}",
        node.lower(),
        node.upper()
    );
}

/// One-step expansion of a fringe node.
///
/// For every action, copy-and-step every particle on its own stream,
/// partition the copies by emitted observation, and seed each child's
/// bounds at depth + 1 with the pending (action, obs) pushed onto the
/// history. The best `reward + γ·U` action becomes the node's `star`, ties
/// broken strictly toward earlier actions.
fn expand<M, L, U>(
    node: &mut VNode<M::S>,
    scope: &Scope<M, L, U>,
    history: &mut History,
    metrics: &mut Metrics,
) where
    M: Model,
    L: LowerBound<M>,
    U: UpperBound<M>,
{
    let depth = node.depth();
    let weight = node.weight();
    let discount = scope.config.discount();
    let mut qnodes = Vec::with_capacity(scope.model.actions());
    let mut qstar = -INF;
    let mut star = 0;
    for action in 0..scope.model.actions() {
        let mut reward = 0.0;
        let mut partition = BTreeMap::<Obs, Vec<Particle<M::S>>>::new();
        for particle in node.particles() {
            let mut copy = particle.clone();
            let draw = scope.streams.entry(copy.stream(), depth);
            let (immediate, obs) = scope.model.step(copy.state_mut(), draw, action);
            reward += copy.weight() * immediate;
            assert!(
                scope.model.is_terminal(copy.state()) == (obs == scope.model.terminal_obs()),
                "terminal states and the terminal observation must coincide (action {}, obs {})",
                action,
                obs,
            );
            partition.entry(obs).or_default().push(copy);
        }
        let reward = reward / weight;
        let mut children = BTreeMap::new();
        for (obs, particles) in partition {
            history.push(action, obs);
            let (lower, fallback) =
                scope
                    .lower
                    .lower(history, &particles, depth + 1, &scope.model, &scope.streams);
            let upper = scope.upper.upper(history, &particles, depth + 1, &scope.model);
            history.pop();
            children.insert(obs, VNode::new(particles, depth + 1, lower, upper, fallback));
        }
        let qnode = QNode::new(action, depth, reward, weight, children);
        debug_assert!(
            (qnode.mass() - weight).abs() < 1e-3,
            "expansion lost particle mass under action {}",
            action
        );
        let value = reward + discount * qnode.upper();
        if value > qstar + TINY {
            qstar = value;
            star = action;
        }
        metrics.add_nodes(qnode.children().len());
        qnodes.push(qnode);
    }
    node.adopt(qnodes, star);
    metrics.add_expansions(1);
}
