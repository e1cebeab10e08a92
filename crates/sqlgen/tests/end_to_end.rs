//! Full-pipeline tests: generate → scan → stamp → render.

use rand::rngs::StdRng;
use rand::SeedableRng;

use seedforge_core::GeneratorConfig;
use seedforge_rules::defaults::builtin_rules;
use seedforge_rules::evaluator::scan_counties;
use seedforge_sqlgen::render_script;
use seedforge_synth::{generate, stamp_events};

fn run_pipeline(seed: u64) -> String {
    let cfg = GeneratorConfig {
        seed,
        ..GeneratorConfig::default()
    };
    let rules = builtin_rules();

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let dataset = generate(&mut rng, &cfg);
    let matches = scan_counties(&rules, &dataset.series, cfg.max_events_per_rule);
    let events = stamp_events(&mut rng, matches, &cfg);

    render_script(&dataset, &rules, &events, cfg.chunk_size)
}

#[test]
fn same_seed_is_byte_identical() {
    let a = run_pipeline(20_240_222);
    let b = run_pipeline(20_240_222);
    assert_eq!(a, b);
}

#[test]
fn different_seeds_diverge() {
    assert_ne!(run_pipeline(1), run_pipeline(2));
}

#[test]
fn script_has_every_fixed_section() {
    let script = run_pipeline(20_240_222);

    assert!(script.starts_with("DELETE FROM alert_event;\n"));
    assert!(script.contains("ALTER TABLE alert_event ALTER COLUMN event_id RESTART WITH 1;"));
    assert!(script.contains("INSERT INTO province (province_name) VALUES"));
    assert!(script.contains("INSERT INTO poverty_county (county_name, province_id, delisting_year) VALUES"));
    assert!(script.contains("INSERT INTO economic_indicator"));
    assert!(script.contains("INSERT INTO alert_rule"));

    // 823 counties × 6 years at 200 rows per batch → 25 indicator statements.
    let batches = script.matches("INSERT INTO economic_indicator").count();
    assert_eq!(batches, 25);
}

#[test]
fn matches_respect_the_cap_and_their_rule_predicate() {
    let cfg = GeneratorConfig::default();
    let rules = builtin_rules();

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let dataset = generate(&mut rng, &cfg);
    let matches = scan_counties(&rules, &dataset.series, cfg.max_events_per_rule);

    for rule_id in 1..=3u32 {
        let per_rule = matches.iter().filter(|m| m.rule_id == rule_id).count();
        assert!(per_rule <= cfg.max_events_per_rule);
    }

    // Every match reports the most recent year of its window and a value
    // consistent with its rule's predicate.
    for m in &matches {
        let rule = &rules[(m.rule_id - 1) as usize];
        assert!(rule.comparator.compare(Some(m.value), rule.threshold));
    }
}
