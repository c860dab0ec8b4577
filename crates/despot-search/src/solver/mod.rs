//! The anytime trial engine.
//!
//! This module orchestrates everything the rest of the crate defines:
//! - Solver — owns the belief tree and the plug-ins, runs searches
//! - Config — validated tuning knobs
//! - Plan — the report a finished search returns
//! - trial/expand — the recursive engine itself

mod config;
mod plan;
mod solver;
mod trial;

pub use config::*;
pub use plan::*;
pub use solver::*;
pub(crate) use trial::*;
