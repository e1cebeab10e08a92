//! Filesystem-backed rule loading.
//!
//! Scans a directory (recursively) for `*.yml` / `*.yaml` files, each holding
//! one [`AlertRule`], and reports a per-file [`LoadResult`]. Callers decide
//! whether a failed file aborts the run; the seed generator treats any
//! failure as fatal since a half-loaded rule set would silently change the
//! emitted events.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{LoadResult, LoadStatus, Result, RuleError};
use crate::schema::AlertRule;

/// Filesystem-backed rule loader.
pub struct RuleLoader {
    /// Root directory containing rule YAML files.
    rules_dir: PathBuf,
}

impl RuleLoader {
    /// Create a new loader for the given directory.
    pub fn new(rules_dir: PathBuf) -> Self {
        Self { rules_dir }
    }

    /// Recursively scan the rules directory and load all YAML files.
    ///
    /// Dotfiles (filenames starting with `.`) and non-YAML files are skipped.
    /// Parse errors are reported per-file but do not abort the scan. Rules
    /// come back sorted by file path so the assigned rule ids do not depend
    /// on directory iteration order.
    pub fn load_all(&self) -> Result<(Vec<AlertRule>, Vec<LoadResult>)> {
        let mut loaded: Vec<(PathBuf, AlertRule)> = Vec::new();
        let mut results = Vec::new();
        self.scan_dir_recursive(&self.rules_dir, &mut loaded, &mut results)?;

        loaded.sort_by(|a, b| a.0.cmp(&b.0));
        let rules = loaded.into_iter().map(|(_, r)| r).collect();
        Ok((rules, results))
    }

    /// Recursively scan a directory for YAML rule files.
    fn scan_dir_recursive(
        &self,
        dir: &Path,
        loaded: &mut Vec<(PathBuf, AlertRule)>,
        results: &mut Vec<LoadResult>,
    ) -> Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "failed to read directory");
                return Err(RuleError::Io(e));
            }
        };

        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            // Skip dotfiles/dotdirs
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') {
                    if path.is_file() {
                        results.push(LoadResult {
                            path,
                            status: LoadStatus::Skipped {
                                reason: "dotfile".to_string(),
                            },
                        });
                    }
                    continue;
                }
            }

            // Recurse into subdirectories
            if path.is_dir() {
                self.scan_dir_recursive(&path, loaded, results)?;
                continue;
            }

            // Skip non-YAML extensions
            let is_yaml = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e == "yml" || e == "yaml")
                .unwrap_or(false);

            if !is_yaml {
                results.push(LoadResult {
                    path,
                    status: LoadStatus::Skipped {
                        reason: "not a YAML file".to_string(),
                    },
                });
                continue;
            }

            match Self::load_file(&path) {
                Ok(rule) => {
                    info!(rule = %rule.name, path = %path.display(), "loaded rule");
                    let rule_name = rule.name.clone();
                    loaded.push((path.clone(), rule));
                    results.push(LoadResult {
                        path,
                        status: LoadStatus::Loaded { rule_name },
                    });
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load rule file");
                    results.push(LoadResult {
                        path,
                        status: LoadStatus::Failed {
                            error: e.to_string(),
                        },
                    });
                }
            }
        }

        Ok(())
    }

    /// Parse a single YAML file into an [`AlertRule`].
    pub fn load_file(path: &Path) -> Result<AlertRule> {
        let contents = fs::read_to_string(path)?;
        let rule: AlertRule = serde_yaml::from_str(&contents)?;

        if rule.name.trim().is_empty() {
            return Err(RuleError::Validation(
                "rule name must not be empty".to_string(),
            ));
        }

        Ok(rule)
    }

    /// Get the rules directory path.
    pub fn rules_dir(&self) -> &Path {
        &self.rules_dir
    }
}
