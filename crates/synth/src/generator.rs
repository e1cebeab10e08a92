//! Deterministic dataset generation from an injected RNG.
//!
//! All sampling goes through the caller-supplied `Rng`, so a fixed seed
//! reproduces the dataset byte for byte. Draw order is part of that
//! contract: per county it is delisting year, base levels, then the yearly
//! loop; reordering draws silently changes every downstream value.

use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use seedforge_core::{County, GeneratorConfig, IndicatorRecord, Province, Snapshot};

use crate::provinces::{is_mountain, PROVINCE_ROSTER};

// ── Output ──────────────────────────────────────────────────────────

/// The generated relational dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub provinces: Vec<Province>,
    pub counties: Vec<County>,
    /// Full indicator rows in emission order (county-major, year ascending).
    pub indicators: Vec<IndicatorRecord>,
    /// Matchable per-county series, keyed by county id in insertion order.
    pub series: IndexMap<u32, Vec<Snapshot>>,
}

// ── Generation ──────────────────────────────────────────────────────

/// Generate the full dataset for the fixed province roster.
pub fn generate<R: Rng>(rng: &mut R, cfg: &GeneratorConfig) -> Dataset {
    let mut provinces = Vec::new();
    let mut counties = Vec::new();
    let mut indicators = Vec::new();
    let mut series: IndexMap<u32, Vec<Snapshot>> = IndexMap::new();

    // Counties can be delisted in one of the first four years, or never;
    // two None slots weight "never" at 1/3.
    let mut delist_choices: Vec<Option<u16>> =
        cfg.years.iter().take(4).map(|&y| Some(y)).collect();
    delist_choices.push(None);
    delist_choices.push(None);

    let mut province_id = 0u32;
    let mut county_id = 0u32;

    for &(province_name, quota) in PROVINCE_ROSTER {
        province_id += 1;
        provinces.push(Province {
            id: province_id,
            name: province_name.to_string(),
        });

        for idx in 0..quota {
            county_id += 1;
            let delisting_year = delist_choices.choose(rng).copied().flatten();
            counties.push(County {
                id: county_id,
                name: format!("{}示例县{:03}", province_name, idx + 1),
                province_id,
                delisting_year,
            });

            let county_series =
                generate_county_series(rng, cfg, county_id, is_mountain(province_name), &mut indicators);
            series.insert(county_id, county_series);
        }
    }

    debug!(
        provinces = provinces.len(),
        counties = counties.len(),
        indicators = indicators.len(),
        "dataset generated"
    );

    Dataset {
        provinces,
        counties,
        indicators,
        series,
    }
}

/// Generate one county's yearly rows, appending full records to `indicators`
/// and returning the matchable snapshot series.
fn generate_county_series<R: Rng>(
    rng: &mut R,
    cfg: &GeneratorConfig,
    county_id: u32,
    mountain: bool,
    indicators: &mut Vec<IndicatorRecord>,
) -> Vec<Snapshot> {
    // Base levels: mountainous counties start from poorer ranges.
    let base_gdp: f64 = if mountain {
        rng.gen_range(12.0..55.0)
    } else {
        rng.gen_range(30.0..120.0)
    };
    let base_income: f64 = if mountain {
        rng.gen_range(7_000.0..9_500.0)
    } else {
        rng.gen_range(9_000.0..14_000.0)
    };
    let base_percap: f64 = if mountain {
        rng.gen_range(16_000.0..30_000.0)
    } else {
        rng.gen_range(28_000.0..52_000.0)
    };
    let base_fiscal: f64 = if mountain {
        rng.gen_range(2.5..8.0)
    } else {
        rng.gen_range(4.0..18.0)
    };
    let mut poverty: f64 = if mountain {
        rng.gen_range(7.0..14.0)
    } else {
        rng.gen_range(3.0..8.0)
    };

    let mut last_gdp = base_gdp;
    let mut last_income = base_income;
    let mut last_percap = base_percap;
    let mut last_fiscal = base_fiscal;

    let mut snapshots = Vec::with_capacity(cfg.years.len());

    for (i, &year) in cfg.years.iter().enumerate() {
        // Growth rates: the downturn year draws from a depressed band.
        let (gdp_yoy, income_yoy, fiscal_yoy) = if year == cfg.downturn_year {
            (
                round3(rng.gen_range(-0.03..0.035)),
                round3(rng.gen_range(-0.02..0.05)),
                round3(rng.gen_range(-0.04..0.04)),
            )
        } else {
            (
                round3(rng.gen_range(0.025..0.095)),
                round3(rng.gen_range(0.03..0.11)),
                round3(rng.gen_range(0.02..0.10)),
            )
        };

        // The first year keeps the base level; later years compound.
        let first = i == 0;
        let gdp_value = if first {
            round1(last_gdp)
        } else {
            (last_gdp * (1.0 + gdp_yoy)).round()
        };
        let income_value = if first {
            last_income.round()
        } else {
            (last_income * (1.0 + income_yoy)).round()
        };
        let percap_value = if first {
            last_percap.round()
        } else {
            (last_percap * (1.0 + rng.gen_range(0.015..0.05))).round()
        };
        let fiscal_value = if first {
            round2(last_fiscal)
        } else {
            round2(last_fiscal * (1.0 + fiscal_yoy))
        };

        last_gdp = gdp_value;
        last_income = income_value;
        last_percap = percap_value;
        last_fiscal = fiscal_value;
        poverty = (poverty - rng.gen_range(0.4..1.5)).max(0.5);

        indicators.push(IndicatorRecord {
            year,
            county_id,
            gdp: round1(gdp_value),
            gdp_yoy,
            gdp_per_capita: percap_value as i64,
            rural_disposable_income: income_value as i64,
            rural_income_yoy: income_yoy,
            fiscal_revenue: fiscal_value,
            fiscal_revenue_yoy: fiscal_yoy,
            poverty_rate: round2(poverty),
        });
        snapshots.push(Snapshot {
            year,
            gdp_yoy: Some(gdp_yoy),
            rural_income: Some(income_value),
            fiscal_yoy: Some(fiscal_yoy),
        });
    }

    snapshots
}

// ── Rounding ────────────────────────────────────────────────────────

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate_with_seed(seed: u64) -> Dataset {
        let cfg = GeneratorConfig {
            seed,
            ..GeneratorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        generate(&mut rng, &cfg)
    }

    #[test]
    fn row_counts_match_the_roster() {
        let ds = generate_with_seed(1);
        assert_eq!(ds.provinces.len(), 23);
        assert_eq!(ds.counties.len(), 823);
        assert_eq!(ds.indicators.len(), 823 * 6);
        assert_eq!(ds.series.len(), 823);
    }

    #[test]
    fn ids_are_one_based_and_dense() {
        let ds = generate_with_seed(1);
        assert_eq!(ds.provinces[0].id, 1);
        assert_eq!(ds.provinces.last().map(|p| p.id), Some(23));
        assert_eq!(ds.counties[0].id, 1);
        assert_eq!(ds.counties.last().map(|c| c.id), Some(823));
    }

    #[test]
    fn series_are_year_ascending_and_gapless() {
        let ds = generate_with_seed(7);
        for series in ds.series.values() {
            assert_eq!(series.len(), 6);
            for pair in series.windows(2) {
                assert_eq!(pair[1].year, pair[0].year + 1);
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_dataset() {
        let a = generate_with_seed(42);
        let b = generate_with_seed(42);
        assert_eq!(a.counties, b.counties);
        assert_eq!(a.indicators, b.indicators);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = generate_with_seed(1);
        let b = generate_with_seed(2);
        assert_ne!(a.indicators, b.indicators);
    }

    #[test]
    fn downturn_year_draws_from_the_depressed_band() {
        let ds = generate_with_seed(3);
        for rec in &ds.indicators {
            if rec.year == 2020 {
                assert!(rec.gdp_yoy < 0.035 + 1e-9);
                assert!(rec.fiscal_revenue_yoy >= -0.04 - 1e-9);
            } else {
                assert!(rec.gdp_yoy >= 0.025 - 1e-9);
            }
        }
    }

    #[test]
    fn poverty_rate_floors_at_half_percent() {
        let ds = generate_with_seed(9);
        for rec in &ds.indicators {
            assert!(rec.poverty_rate >= 0.5);
        }
    }

    #[test]
    fn delisting_years_come_from_the_first_four() {
        let ds = generate_with_seed(11);
        for county in &ds.counties {
            if let Some(y) = county.delisting_year {
                assert!((2018..=2021).contains(&y));
            }
        }
        // With 823 counties, both delisted and never-delisted must occur.
        assert!(ds.counties.iter().any(|c| c.delisting_year.is_some()));
        assert!(ds.counties.iter().any(|c| c.delisting_year.is_none()));
    }

    #[test]
    fn county_names_embed_province_and_index() {
        let ds = generate_with_seed(5);
        assert_eq!(ds.counties[0].name, "云南省示例县001");
        assert_eq!(ds.counties[0].province_id, 1);
    }
}
