//! Compound interest projection of a deposit schedule

mod engine;
mod stats;

pub use engine::compound;
pub use stats::{compute_stats, Statistics};
