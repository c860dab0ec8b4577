//! The belief tree.
//!
//! An owned tree of alternating node kinds:
//! - VNode — a belief (OR) node owning particles; branches are actions
//! - QNode — an action (AND) node; branches are observations
//!
//! Ownership runs Solver → root VNode → QNodes → child VNodes, so dropping
//! a node reclaims its whole subtree: rerooting after a committed action
//! and freeing pruned branches are both plain drops.

mod qnode;
mod vnode;

pub use qnode::*;
pub use vnode::*;
