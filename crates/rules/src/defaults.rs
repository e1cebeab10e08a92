//! Built-in rule set used when no rules directory is given.

use seedforge_core::MetricKey;

use crate::schema::{AlertRule, Comparator};

/// The canonical three rules shipped with the seed dataset.
pub fn builtin_rules() -> Vec<AlertRule> {
    vec![
        AlertRule {
            name: "GDP增速连续下滑预警".to_string(),
            metric: MetricKey::GdpYoy,
            comparator: Comparator::Lt,
            threshold: 0.02,
            duration_years: 2,
            enabled: true,
        },
        AlertRule {
            name: "农村居民收入波动监测".to_string(),
            metric: MetricKey::RuralIncome,
            comparator: Comparator::Lt,
            threshold: 10_000.0,
            duration_years: 1,
            enabled: true,
        },
        AlertRule {
            name: "财政收入连续为负".to_string(),
            metric: MetricKey::FiscalYoy,
            comparator: Comparator::Lt,
            threshold: 0.0,
            duration_years: 2,
            enabled: true,
        },
    ]
}
