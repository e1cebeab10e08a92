//! Event timestamping: turn raw rule matches into alert event rows.

use chrono::{Duration, NaiveDateTime};
use rand::Rng;

use seedforge_core::{GeneratorConfig, MetricKey};
use seedforge_rules::evaluator::RuleMatch;

/// A triggered alert event, ready for SQL rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEvent {
    pub rule_id: u32,
    pub county_id: u32,
    pub year: u16,
    pub metric: MetricKey,
    pub value: f64,
    pub triggered_at: NaiveDateTime,
    pub acknowledged_by: Option<u32>,
    pub acknowledged_at: Option<NaiveDateTime>,
}

/// Stamp matches with trigger timestamps.
///
/// Events fire 2 days apart starting from the configured base, each with a
/// random 0..=6 hour jitter. Every 4th event is marked acknowledged by the
/// configured user 3 days 2 hours after triggering, so the seeded dashboard
/// shows a mix of open and handled alerts.
pub fn stamp_events<R: Rng>(
    rng: &mut R,
    matches: Vec<RuleMatch>,
    cfg: &GeneratorConfig,
) -> Vec<AlertEvent> {
    matches
        .into_iter()
        .enumerate()
        .map(|(idx, m)| {
            let triggered_at = cfg.event_base
                + Duration::days(idx as i64 * 2)
                + Duration::hours(rng.gen_range(0..=6));
            let (acknowledged_by, acknowledged_at) = if idx % 4 == 0 {
                (
                    Some(cfg.ack_user_id),
                    Some(triggered_at + Duration::days(3) + Duration::hours(2)),
                )
            } else {
                (None, None)
            };
            AlertEvent {
                rule_id: m.rule_id,
                county_id: m.county_id,
                year: m.year,
                metric: m.metric,
                value: m.value,
                triggered_at,
                acknowledged_by,
                acknowledged_at,
            }
        })
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────
