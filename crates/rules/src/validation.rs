//! Rule validation with structured errors and advisory warnings.
//!
//! Unknown metric keys and comparators are already rejected by serde at
//! parse time; these checks cover what the schema cannot express.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::schema::AlertRule;

// ── Result types ────────────────────────────────────────────────────

/// Overall validation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// A blocking validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field-path-like location, e.g. `"rules[2].duration"`.
    pub path: String,
    pub message: String,
}

/// A non-blocking advisory warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationResult {
    fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            path: path.into(),
            message: message.into(),
        });
    }
}

// ── Public API ──────────────────────────────────────────────────────

/// Validate a full rule set. `year_count` is the length of every county's
/// series; a rule whose duration exceeds it can never fire.
pub fn validate_rules(rules: &[AlertRule], year_count: usize) -> ValidationResult {
    let mut result = ValidationResult::new();

    let mut seen_names = HashSet::new();
    for (i, rule) in rules.iter().enumerate() {
        validate_rule_at(rule, &format!("rules[{}]", i), year_count, &mut result);
        if !seen_names.insert(rule.name.as_str()) {
            result.error(
                format!("rules[{}].name", i),
                format!("duplicate rule name '{}'", rule.name),
            );
        }
    }

    result
}

fn validate_rule_at(rule: &AlertRule, path: &str, year_count: usize, result: &mut ValidationResult) {
    if rule.name.trim().is_empty() {
        result.error(format!("{}.name", path), "rule name must not be empty");
    }
    if rule.duration_years == 0 {
        result.error(
            format!("{}.duration", path),
            "duration must be at least 1 year",
        );
    }
    if !rule.threshold.is_finite() {
        result.error(
            format!("{}.threshold", path),
            format!("threshold must be finite, got {}", rule.threshold),
        );
    }
    if rule.duration_years > year_count && year_count > 0 {
        result.warn(
            format!("{}.duration", path),
            format!(
                "duration {} exceeds the {}-year series — rule can never fire",
                rule.duration_years, year_count
            ),
        );
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Comparator;
    use seedforge_core::MetricKey;

    fn rule(name: &str, duration: usize) -> AlertRule {
        AlertRule {
            name: name.to_string(),
            metric: MetricKey::GdpYoy,
            comparator: Comparator::Lt,
            threshold: 0.02,
            duration_years: duration,
            enabled: true,
        }
    }

    #[test]
    fn zero_duration_is_an_error() {
        let result = validate_rules(&[rule("r", 0)], 6);
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.path.ends_with(".duration")));
    }

    #[test]
    fn empty_name_is_an_error() {
        let result = validate_rules(&[rule("  ", 1)], 6);
        assert!(!result.valid);
    }

    #[test]
    fn non_finite_threshold_is_an_error() {
        let mut r = rule("r", 1);
        r.threshold = f64::NAN;
        let result = validate_rules(&[r], 6);
        assert!(!result.valid);
    }

    #[test]
    fn duplicate_names_are_errors() {
        let result = validate_rules(&[rule("same", 1), rule("same", 2)], 6);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn oversized_duration_is_only_a_warning() {
        let result = validate_rules(&[rule("r", 9)], 6);
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
    }
}
