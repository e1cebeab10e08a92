//! SQL seed-script rendering.
//!
//! Turns the generated dataset, rule set, and triggered events into one
//! ordered SQL text artifact: truncate + identity resets, then batched
//! inserts per relation with fixed column lists.

pub mod script;
pub mod value;

pub use script::render_script;
