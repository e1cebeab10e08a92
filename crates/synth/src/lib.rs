//! Synthetic dataset generation.
//!
//! Produces provinces, counties, and per-county yearly indicator series from
//! an injected seedable RNG, then stamps rule matches with event timestamps.
//! Everything is deterministic for a fixed seed.

pub mod events;
pub mod generator;
pub mod provinces;

pub use events::{stamp_events, AlertEvent};
pub use generator::{generate, Dataset};
