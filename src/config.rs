//! Build configuration module.
//!
//! Handles loading, validating, and merging the root `config.toml`. User
//! config files are sparse: values are merged on top of stock defaults, and
//! unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! categories = ["street", "landscape", "architecture"]
//! extensions = ["jpg", "jpeg", "png", "webp", "gif"]
//! sort_policy = "numeric-suffix"   # or "modified-desc"
//! strict = false
//! # home_cap = 11
//!
//! [prefixes]
//! # street = "strt01"
//! ```
//!
//! `categories` are the folder names under `images/` that get their own
//! manifest file. `extensions` are compared case-insensitively. `home_cap`
//! truncates the home slideshow list; omit it to include every root-level
//! image. `[prefixes]` drives the `rename` subcommand only.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Ordering policy applied uniformly to every category and the home pool.
///
/// Exactly one policy is active per run; the two are never mixed. The
/// default, `numeric-suffix`, matches the renamed-filename convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortPolicy {
    /// Ascending by the trailing digit run of the filename
    /// ([`crate::naming::numeric_suffix`]); files without one sort first.
    #[serde(rename = "numeric-suffix")]
    NumericSuffix,
    /// Descending by filesystem modification time, newest first.
    #[serde(rename = "modified-desc")]
    ModifiedDesc,
}

/// Build configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Category folder names under `images/`, in manifest output order.
    pub categories: Vec<String>,
    /// Recognized image file extensions, compared case-insensitively.
    pub extensions: Vec<String>,
    /// Ordering policy for every category and the home pool.
    pub sort_policy: SortPolicy,
    /// Maximum number of entries in `home.json`. `None` = no cap.
    pub home_cap: Option<usize>,
    /// Treat an unreadable category directory as a fatal error instead of
    /// an empty category with a warning.
    pub strict: bool,
    /// Filename prefixes for the `rename` subcommand, keyed by category
    /// name (or `home` for the root-level pool).
    pub prefixes: BTreeMap<String, String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                "street".to_string(),
                "landscape".to_string(),
                "architecture".to_string(),
            ],
            extensions: vec![
                "jpg".to_string(),
                "jpeg".to_string(),
                "png".to_string(),
                "webp".to_string(),
                "gif".to_string(),
            ],
            sort_policy: SortPolicy::NumericSuffix,
            home_cap: None,
            strict: false,
            prefixes: BTreeMap::new(),
        }
    }
}

impl BuildConfig {
    /// Validate config values.
    ///
    /// `home` is a reserved manifest key, so no category may claim it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::BTreeSet::new();
        for cat in &self.categories {
            if cat.is_empty() {
                return Err(ConfigError::Validation(
                    "categories must not contain empty names".into(),
                ));
            }
            if cat == "home" {
                return Err(ConfigError::Validation(
                    "'home' is reserved for the home selection and cannot be a category".into(),
                ));
            }
            if cat.contains('/') || cat.contains('\\') {
                return Err(ConfigError::Validation(format!(
                    "category '{cat}' must be a plain folder name, not a path"
                )));
            }
            if !seen.insert(cat) {
                return Err(ConfigError::Validation(format!(
                    "duplicate category '{cat}'"
                )));
            }
        }
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        for ext in &self.extensions {
            if ext.is_empty() || ext.contains('.') {
                return Err(ConfigError::Validation(format!(
                    "extension '{ext}' must be given without a leading dot"
                )));
            }
        }
        for key in self.prefixes.keys() {
            if key != "home" && !self.categories.iter().any(|c| c == key) {
                return Err(ConfigError::Validation(format!(
                    "prefixes key '{key}' is not a configured category (or 'home')"
                )));
            }
        }
        Ok(())
    }

    /// Whether a file extension (without dot) is in the recognized set,
    /// compared case-insensitively.
    pub fn allows_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(BuildConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<BuildConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: BuildConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<BuildConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Photo Manifest Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Category folder names under images/, in manifest output order.
# Each category gets its own data/<category>.json.
categories = ["street", "landscape", "architecture"]

# Recognized image file extensions (no leading dot, case does not matter).
extensions = ["jpg", "jpeg", "png", "webp", "gif"]

# Ordering policy, applied uniformly to every category and the home pool:
#   "numeric-suffix" - ascending by the trailing number in the filename
#                      (strt01-03.jpg -> 3); files without one sort first
#   "modified-desc"  - newest modification time first
sort_policy = "numeric-suffix"

# Treat an unreadable category directory as a fatal error.
# A missing directory is always just an empty category.
strict = false

# Maximum number of entries in home.json (the slideshow conventionally
# shows 11). Omit to include every root-level image.
# home_cap = 11

# ---------------------------------------------------------------------------
# Filename prefixes for the `rename` subcommand. Files in each listed
# category folder (or directly under images/ for "home") are renamed to
# <prefix>-NN.<ext>. Categories without a prefix are left untouched.
# ---------------------------------------------------------------------------
[prefixes]
# street = "strt01"
# architecture = "arch01"
# landscape = "lanscp01"
# home = "home01"
"##
}
