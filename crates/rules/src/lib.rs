//! Alert-rule engine for the seed generator.
//!
//! This crate provides:
//! - YAML-based rule definition with serde deserialization
//! - Filesystem loader with per-file load results
//! - Fail-fast validation (unknown metrics, zero durations, duplicates)
//! - The trailing-window evaluator that turns county series into events

pub mod defaults;
pub mod evaluator;
pub mod loader;
pub mod schema;
pub mod validation;

mod error;

pub use error::{LoadResult, LoadStatus, Result, RuleError};
pub use schema::{AlertRule, Comparator};
