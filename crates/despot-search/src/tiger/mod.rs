//! The two-door tiger problem as a minimal planning test case.
//!
//! This module implements the classic tiger POMDP using the planner's
//! trait hierarchy, serving as both a validation tool and a reference
//! implementation for new models.
//!
//! # Why Tiger?
//!
//! Tiger is ideal for exercising a belief-space planner because:
//! - **Tiny state space** — two hidden states plus a terminal sink
//! - **Known behavior** — listen until confident, then open the far door
//! - **Real information gathering** — the optimal policy pays an immediate
//!   cost purely to sharpen the belief, which a planner that ignores
//!   observations cannot discover
//! - **Sharp failure modes** — opening the wrong door is catastrophic, so
//!   premature commitment shows up immediately in the returned action
//!
//! # File Structure
//!
//! - [`Tiger`] / [`TigerState`] — the `Model` implementation
//! - [`TigerSolver`] — the canonical solver assembly and its test battery

mod model;
mod search;

pub use model::*;
pub use search::*;
