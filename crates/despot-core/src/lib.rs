//! Core type aliases, traits, and constants for despot.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the despot workspace.
#![allow(dead_code)]

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Index into a model's action set.
pub type Action = usize;
/// Observation identifier emitted by a model step.
pub type Obs = u64;
/// Scenario stream index bound to a particle.
pub type Stream = usize;
/// Construction seed for deterministic stream tables and derived generators.
pub type Seed = u64;
/// Expected values, rewards, and bound estimates.
pub type Utility = f32;
/// Particle weights, sampling distributions, and pre-drawn uniforms.
pub type Probability = f32;
/// Per-step reward discount during lookahead.
pub type Discount = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SEARCH PARAMETERS
// Defaults for the anytime trial engine. Hosts override via Config.
// ============================================================================
/// Scenarios sampled per belief node (K).
pub const SEARCH_PARTICLES: usize = 500;
/// Maximum depth of any trial.
pub const SEARCH_DEPTH: usize = 90;
/// Reward discount per step of lookahead.
pub const SEARCH_DISCOUNT: Discount = 0.95;
/// Regularization weight in the excess uncertainty test. Valid range (0, 1):
/// at 1 or above the root stopping test (1 - xi)(U - L) > TINY can never pass.
pub const SEARCH_XI: Utility = 0.95;
/// Per-node penalty applied by the post-search pruning pass. 0 disables it.
pub const SEARCH_PRUNING: Utility = 0.0;

// ============================================================================
// NUMERIC TOLERANCES
// ============================================================================
/// Strict-improvement margin for bound comparisons and tie-breaks.
pub const TINY: Utility = 1e-6;
/// Sentinel magnitude for uninitialized bounds and argmax scans.
pub const INF: Utility = 1e8;

// ============================================================================
// SEARCH INFRASTRUCTURE
// ============================================================================
/// Interval between periodic progress log messages during long searches.
pub const SEARCH_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
