//! Alert rule types parsed from YAML.

use serde::{Deserialize, Serialize};
use std::fmt;

use seedforge_core::MetricKey;

/// A threshold-and-duration predicate over one named metric.
///
/// The rule matches a county when every one of the last `duration` yearly
/// values of `metric` satisfies `comparator` against `threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlertRule {
    pub name: String,
    /// Metric to evaluate. Unknown keys fail deserialization.
    pub metric: MetricKey,
    pub comparator: Comparator,
    pub threshold: f64,
    /// Number of trailing years the condition must hold, >= 1.
    #[serde(rename = "duration")]
    pub duration_years: usize,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Comparison operators for the rule predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    Lt,
    Lte,
    Gt,
    Gte,
}

impl Comparator {
    /// Apply the comparator. An absent value never satisfies any comparator.
    pub fn compare(&self, value: Option<f64>, threshold: f64) -> bool {
        let value = match value {
            Some(v) => v,
            None => return false,
        };
        match self {
            Comparator::Lt => value < threshold,
            Comparator::Lte => value <= threshold,
            Comparator::Gt => value > threshold,
            Comparator::Gte => value >= threshold,
        }
    }

    /// SQL `comparator` column value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Lt => "lt",
            Comparator::Lte => "lte",
            Comparator::Gt => "gt",
            Comparator::Gte => "gte",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tests ───────────────────────────────────────────────────────────
