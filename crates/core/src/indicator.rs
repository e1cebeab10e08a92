//! Yearly indicator rows and the matchable metric view over them.
//!
//! [`IndicatorRecord`] is the full `economic_indicator` row (column order is
//! load-bearing for the SQL output). [`Snapshot`] is the narrower per-year
//! bundle that alert rules evaluate against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Metric keys ─────────────────────────────────────────────────────

/// Metrics that alert rules may reference.
///
/// Only a subset of the indicator columns is matchable; an unknown key in a
/// rule file fails deserialization at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    GdpYoy,
    RuralIncome,
    FiscalYoy,
}

impl MetricKey {
    /// SQL `metric_key` column value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::GdpYoy => "gdp_yoy",
            MetricKey::RuralIncome => "rural_income",
            MetricKey::FiscalYoy => "fiscal_yoy",
        }
    }

    /// Whether values of this metric are whole numbers (affects SQL rendering).
    pub fn is_integral(&self) -> bool {
        matches!(self, MetricKey::RuralIncome)
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "gdp_yoy" => Ok(MetricKey::GdpYoy),
            "rural_income" => Ok(MetricKey::RuralIncome),
            "fiscal_yoy" => Ok(MetricKey::FiscalYoy),
            other => Err(format!("unknown metric key: '{}'", other)),
        }
    }
}

// ── Snapshot ────────────────────────────────────────────────────────

/// One year's matchable metric bundle for a county.
///
/// Metric lookup returns `Option`; an absent value never satisfies a rule
/// comparator. Generated data always fills every metric, but delisted
/// counties could legitimately stop reporting in a real dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub year: u16,
    pub gdp_yoy: Option<f64>,
    pub rural_income: Option<f64>,
    pub fiscal_yoy: Option<f64>,
}

impl Snapshot {
    /// Look up a metric value by key.
    pub fn metric(&self, key: MetricKey) -> Option<f64> {
        match key {
            MetricKey::GdpYoy => self.gdp_yoy,
            MetricKey::RuralIncome => self.rural_income,
            MetricKey::FiscalYoy => self.fiscal_yoy,
        }
    }
}

// ── Full indicator row ──────────────────────────────────────────────

/// Full `economic_indicator` row. Field order mirrors the table's column
/// order: year, county_id, gdp, gdp_yoy, gdp_per_capita,
/// rural_disposable_income, rural_income_yoy, fiscal_revenue,
/// fiscal_revenue_yoy, poverty_rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    pub year: u16,
    pub county_id: u32,
    pub gdp: f64,
    pub gdp_yoy: f64,
    pub gdp_per_capita: i64,
    pub rural_disposable_income: i64,
    pub rural_income_yoy: f64,
    pub fiscal_revenue: f64,
    pub fiscal_revenue_yoy: f64,
    pub poverty_rate: f64,
}

impl IndicatorRecord {
    /// Project the row down to its matchable metrics.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            year: self.year,
            gdp_yoy: Some(self.gdp_yoy),
            rural_income: Some(self.rural_disposable_income as f64),
            fiscal_yoy: Some(self.fiscal_revenue_yoy),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_key_round_trip() {
        for key in [MetricKey::GdpYoy, MetricKey::RuralIncome, MetricKey::FiscalYoy] {
            assert_eq!(key.as_str().parse::<MetricKey>(), Ok(key));
        }
        assert!("gdp".parse::<MetricKey>().is_err());
    }

    #[test]
    fn snapshot_lookup_by_key() {
        let snap = Snapshot {
            year: 2023,
            gdp_yoy: Some(0.04),
            rural_income: Some(11200.0),
            fiscal_yoy: None,
        };
        assert_eq!(snap.metric(MetricKey::GdpYoy), Some(0.04));
        assert_eq!(snap.metric(MetricKey::RuralIncome), Some(11200.0));
        assert_eq!(snap.metric(MetricKey::FiscalYoy), None);
    }

    #[test]
    fn record_projects_to_snapshot() {
        let rec = IndicatorRecord {
            year: 2021,
            county_id: 7,
            gdp: 45.3,
            gdp_yoy: 0.051,
            gdp_per_capita: 23100,
            rural_disposable_income: 9800,
            rural_income_yoy: 0.062,
            fiscal_revenue: 5.12,
            fiscal_revenue_yoy: 0.033,
            poverty_rate: 4.2,
        };
        let snap = rec.snapshot();
        assert_eq!(snap.year, 2021);
        assert_eq!(snap.metric(MetricKey::RuralIncome), Some(9800.0));
        assert_eq!(snap.metric(MetricKey::FiscalYoy), Some(0.033));
    }
}
