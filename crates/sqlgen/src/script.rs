//! Seed script assembly.
//!
//! Statement order and per-relation column order are fixed; the consuming
//! schema's tables are inserted without explicit ids and rely on the
//! identity resets in the preamble lining up with our 1-based ids.

use seedforge_rules::AlertRule;
use seedforge_synth::{AlertEvent, Dataset};

use crate::value::{float_literal, nullable_int, nullable_timestamp, quote_str, timestamp};

/// Truncate all seeded relations and reset their identity counters.
const PREAMBLE: &str = "\
DELETE FROM alert_event;
DELETE FROM alert_rule;
DELETE FROM economic_indicator;
DELETE FROM poverty_county;
DELETE FROM province;
DELETE FROM sys_user;
DELETE FROM role;
ALTER TABLE role ALTER COLUMN role_id RESTART WITH 1;
ALTER TABLE province ALTER COLUMN province_id RESTART WITH 1;
ALTER TABLE poverty_county ALTER COLUMN county_id RESTART WITH 1;
ALTER TABLE economic_indicator ALTER COLUMN id RESTART WITH 1;
ALTER TABLE alert_rule ALTER COLUMN rule_id RESTART WITH 1;
ALTER TABLE alert_event ALTER COLUMN event_id RESTART WITH 1;
ALTER TABLE sys_user ALTER COLUMN user_id RESTART WITH 1;
";

/// Render the complete seed script.
///
/// `chunk_size` bounds rows per indicator insert statement; everything else
/// goes out as a single statement per relation. Empty relations emit no
/// insert section at all (a `VALUES` list needs at least one tuple).
/// `sys_user` and `role` are cleared and reset but receive no inserts here.
pub fn render_script(
    dataset: &Dataset,
    rules: &[AlertRule],
    events: &[AlertEvent],
    chunk_size: usize,
) -> String {
    let mut out = String::new();
    out.push_str(PREAMBLE);
    out.push('\n');

    if !dataset.provinces.is_empty() {
        push_provinces(&mut out, dataset);
    }
    if !dataset.counties.is_empty() {
        push_counties(&mut out, dataset);
    }
    if !dataset.indicators.is_empty() {
        push_indicators(&mut out, dataset, chunk_size.max(1));
    }
    if !rules.is_empty() {
        push_rules(&mut out, rules);
    }
    if !events.is_empty() {
        push_events(&mut out, events);
    }

    out
}

// ── Sections ────────────────────────────────────────────────────────

fn push_provinces(out: &mut String, dataset: &Dataset) {
    out.push_str("-- provinces\n");
    out.push_str("INSERT INTO province (province_name) VALUES\n");
    let rows: Vec<String> = dataset
        .provinces
        .iter()
        .map(|p| format!("({})", quote_str(&p.name)))
        .collect();
    out.push_str(&rows.join(",\n"));
    out.push_str(";\n\n");
}

fn push_counties(out: &mut String, dataset: &Dataset) {
    out.push_str("-- poverty counties\n");
    out.push_str("INSERT INTO poverty_county (county_name, province_id, delisting_year) VALUES\n");
    let rows: Vec<String> = dataset
        .counties
        .iter()
        .map(|c| {
            format!(
                "({}, {}, {})",
                quote_str(&c.name),
                c.province_id,
                nullable_int(c.delisting_year)
            )
        })
        .collect();
    out.push_str(&rows.join(",\n"));
    out.push_str(";\n\n");
}

fn push_indicators(out: &mut String, dataset: &Dataset, chunk_size: usize) {
    out.push_str("-- economic indicators\n");
    for batch in dataset.indicators.chunks(chunk_size) {
        out.push_str(
            "INSERT INTO economic_indicator (year, county_id, gdp, gdp_yoy, gdp_per_capita, \
             rural_disposable_income, rural_income_yoy, fiscal_revenue, fiscal_revenue_yoy, \
             poverty_rate) VALUES\n",
        );
        let rows: Vec<String> = batch
            .iter()
            .map(|r| {
                format!(
                    "({}, {}, {:.1}, {}, {}, {}, {}, {:.2}, {}, {:.2})",
                    r.year,
                    r.county_id,
                    r.gdp,
                    float_literal(r.gdp_yoy),
                    r.gdp_per_capita,
                    r.rural_disposable_income,
                    float_literal(r.rural_income_yoy),
                    r.fiscal_revenue,
                    float_literal(r.fiscal_revenue_yoy),
                    r.poverty_rate,
                )
            })
            .collect();
        out.push_str(&rows.join(",\n"));
        out.push_str(";\n\n");
    }
}

fn push_rules(out: &mut String, rules: &[AlertRule]) {
    out.push_str("-- alert rules\n");
    out.push_str(
        "INSERT INTO alert_rule (rule_name, metric_key, comparator, threshold, duration_years, \
         enabled) VALUES\n",
    );
    let rows: Vec<String> = rules
        .iter()
        .map(|r| {
            format!(
                "({}, {}, {}, {}, {}, {})",
                quote_str(&r.name),
                quote_str(r.metric.as_str()),
                quote_str(r.comparator.as_str()),
                float_literal(r.threshold),
                r.duration_years,
                r.enabled,
            )
        })
        .collect();
    out.push_str(&rows.join(",\n"));
    out.push_str(";\n\n");
}

fn push_events(out: &mut String, events: &[AlertEvent]) {
    out.push_str("-- alert events\n");
    out.push_str(
        "INSERT INTO alert_event (rule_id, county_id, year, metric_value, triggered_at, \
         acknowledged_by, acknowledged_at) VALUES\n",
    );
    let rows: Vec<String> = events
        .iter()
        .map(|e| {
            // Integral metrics (income levels) read better without decimals.
            let value = if e.metric.is_integral() {
                format!("{:.0}", e.value)
            } else {
                format!("{:.3}", e.value)
            };
            format!(
                "({}, {}, {}, {}, '{}', {}, {})",
                e.rule_id,
                e.county_id,
                e.year,
                value,
                timestamp(e.triggered_at),
                nullable_int(e.acknowledged_by),
                nullable_timestamp(e.acknowledged_at),
            )
        })
        .collect();
    out.push_str(&rows.join(",\n"));
    out.push_str(";\n\n");
}

// ── Tests ───────────────────────────────────────────────────────────
