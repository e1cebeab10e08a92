//! seedforge — synthetic seed-data generator.
//!
//! Generates provinces, counties, yearly economic indicators, alert rules,
//! and triggered alert events, then writes them as one ordered SQL seed
//! script. A fixed seed reproduces the script byte for byte.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use seedforge_core::GeneratorConfig;
use seedforge_rules::defaults::builtin_rules;
use seedforge_rules::evaluator::scan_counties;
use seedforge_rules::loader::RuleLoader;
use seedforge_rules::validation::validate_rules;
use seedforge_rules::LoadStatus;
use seedforge_sqlgen::render_script;
use seedforge_synth::{generate, stamp_events};

// ── CLI ─────────────────────────────────────────────────────────────

/// Synthetic SQL seed-data generator with alert-rule evaluation.
#[derive(Parser, Debug)]
#[command(name = "seedforge", version, about)]
struct Cli {
    /// RNG seed; a fixed seed makes output byte-for-byte reproducible.
    #[arg(long, env = "SEEDFORGE_SEED", default_value_t = 20_240_222)]
    seed: u64,

    /// Directory of YAML rule files. Omit to use the built-in rule set.
    #[arg(long, env = "SEEDFORGE_RULES_DIR")]
    rules_dir: Option<PathBuf>,

    /// Output path for the SQL script.
    #[arg(long, env = "SEEDFORGE_OUT", default_value = "data.sql")]
    out: PathBuf,

    /// Rows per economic_indicator insert statement.
    #[arg(long, env = "SEEDFORGE_CHUNK_SIZE", default_value_t = 200)]
    chunk_size: usize,

    /// Stop scanning counties for a rule after this many events.
    #[arg(long, env = "SEEDFORGE_MAX_EVENTS_PER_RULE", default_value_t = 10)]
    max_events_per_rule: usize,
}

// ── main ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let cfg = GeneratorConfig {
        seed: cli.seed,
        chunk_size: cli.chunk_size,
        max_events_per_rule: cli.max_events_per_rule,
        ..GeneratorConfig::default()
    };

    // Rule loading is fail-fast: a broken file halts generation rather than
    // silently seeding a different event set.
    let rules = match &cli.rules_dir {
        Some(dir) => {
            let loader = RuleLoader::new(dir.clone());
            let (rules, results) = loader
                .load_all()
                .with_context(|| format!("loading rules from {}", dir.display()))?;
            for result in &results {
                if let LoadStatus::Failed { error } = &result.status {
                    bail!("rule file {} failed to load: {}", result.path.display(), error);
                }
            }
            if rules.is_empty() {
                bail!("no rules found in {}", dir.display());
            }
            rules
        }
        None => {
            info!("no rules directory given, using built-in rule set");
            builtin_rules()
        }
    };

    let validation = validate_rules(&rules, cfg.years.len());
    for w in &validation.warnings {
        warn!(path = %w.path, "{}", w.message);
    }
    if !validation.valid {
        for e in &validation.errors {
            warn!(path = %e.path, "{}", e.message);
        }
        bail!("rule validation failed with {} error(s)", validation.errors.len());
    }

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let dataset = generate(&mut rng, &cfg);
    let matches = scan_counties(&rules, &dataset.series, cfg.max_events_per_rule);
    let events = stamp_events(&mut rng, matches, &cfg);

    let script = render_script(&dataset, &rules, &events, cfg.chunk_size);
    fs::write(&cli.out, &script)
        .with_context(|| format!("writing {}", cli.out.display()))?;

    info!(
        provinces = dataset.provinces.len(),
        counties = dataset.counties.len(),
        indicators = dataset.indicators.len(),
        rules = rules.len(),
        events = events.len(),
        out = %cli.out.display(),
        "seed script written"
    );

    Ok(())
}
