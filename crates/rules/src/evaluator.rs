//! Trailing-window rule evaluation over county time series.
//!
//! A rule fires for a county when every one of the last `duration` snapshots
//! satisfies the comparator against the threshold. The reported value and
//! year come from the most recent snapshot of the window.

use indexmap::IndexMap;
use tracing::debug;

use seedforge_core::{MetricKey, Snapshot};

use crate::schema::AlertRule;

// ── Types ───────────────────────────────────────────────────────────

/// A single rule firing for one county.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    /// 1-based position of the rule in the full rule list, matching the
    /// identity values assigned by the seed script's `alert_rule` insert.
    pub rule_id: u32,
    pub county_id: u32,
    pub metric: MetricKey,
    /// Year of the most recent snapshot in the matched window.
    pub year: u16,
    /// Metric value at that year.
    pub value: f64,
}

/// Value and year reported when a window matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowHit {
    pub year: u16,
    pub value: f64,
}

// ── Window evaluation ───────────────────────────────────────────────

/// Evaluate one rule against one county's ordered snapshot sequence.
///
/// Returns `None` when the series is shorter than the rule's duration (the
/// county is skipped, not an error), when any value in the trailing window
/// is absent, or when any value fails the comparator.
pub fn evaluate_window(rule: &AlertRule, series: &[Snapshot]) -> Option<WindowHit> {
    if rule.duration_years == 0 || series.len() < rule.duration_years {
        return None;
    }

    let window = &series[series.len() - rule.duration_years..];
    if !window
        .iter()
        .all(|snap| rule.comparator.compare(snap.metric(rule.metric), rule.threshold))
    {
        return None;
    }

    // All checks passed, so the last snapshot's value is present.
    let last = window.last()?;
    let value = last.metric(rule.metric)?;
    Some(WindowHit { year: last.year, value })
}

// ── Dataset scan ────────────────────────────────────────────────────

/// Scan every county's series against every enabled rule.
///
/// Rule ids are assigned by position over the full list, so disabled rules
/// still consume an id (they are inserted into `alert_rule` either way).
/// Scanning for a rule stops once it has produced `max_per_rule` matches;
/// county order follows map insertion order, keeping output deterministic.
pub fn scan_counties(
    rules: &[AlertRule],
    series_by_county: &IndexMap<u32, Vec<Snapshot>>,
    max_per_rule: usize,
) -> Vec<RuleMatch> {
    let mut matches = Vec::new();

    for (idx, rule) in rules.iter().enumerate() {
        if !rule.enabled {
            continue;
        }
        let rule_id = (idx + 1) as u32;
        let mut hits = 0usize;

        for (&county_id, series) in series_by_county {
            if let Some(hit) = evaluate_window(rule, series) {
                matches.push(RuleMatch {
                    rule_id,
                    county_id,
                    metric: rule.metric,
                    year: hit.year,
                    value: hit.value,
                });
                hits += 1;
                if hits >= max_per_rule {
                    break;
                }
            }
        }

        debug!(rule = %rule.name, hits, "rule scan complete");
    }

    matches
}

// ── Tests ───────────────────────────────────────────────────────────
