//! Configuration: rule severities, the `.keylintrc.json` file and the
//! three-layer merge (defaults < config file < command line).
//!
//! The merge runs once at startup and yields an immutable [`Settings`]
//! which is handed to the linter.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{
    LintError,
    extract::{compile, compose_fragments},
};
use crate::issues::Severity;

pub const CONFIG_FILE_NAME: &str = ".keylintrc.json";

pub const DEFAULT_PROJECT: &str = "./src/app/**/*.{html,ts}";
pub const DEFAULT_LANGUAGES: &str = "./src/assets/i18n/*.json";
pub const DEFAULT_MISPRINT_COEFFICIENT: f64 = 0.9;

// ============================================================
// Rule levels
// ============================================================

/// Configured level of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    Disable,
    Warning,
    Error,
}

impl ErrorType {
    /// Severity of emitted diagnostics, or `None` when the rule is skipped.
    pub fn severity(self) -> Option<Severity> {
        match self {
            ErrorType::Disable => None,
            ErrorType::Warning => Some(Severity::Warning),
            ErrorType::Error => Some(Severity::Error),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ToggleRule {
    #[default]
    Disable,
    Enable,
}

impl ToggleRule {
    pub fn is_enabled(self) -> bool {
        self == ToggleRule::Enable
    }
}

// ============================================================
// RuleConfig
// ============================================================

/// Complete rule configuration consumed by the linter.
///
/// Deserializing requires the four rule levels and `maxWarning`; a config
/// missing any of them is rejected rather than silently defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleConfig {
    pub zombie_keys: ErrorType,
    pub keys_on_views: ErrorType,
    pub misprint_keys: ErrorType,
    pub empty_keys: ErrorType,
    pub max_warning: usize,
    #[serde(default)]
    pub deep_search: ToggleRule,
    #[serde(default = "default_misprint_coefficient")]
    pub misprint_coefficient: f64,
    #[serde(default)]
    pub ignored_keys: Vec<String>,
    #[serde(default)]
    pub ignored_misprint_keys: Vec<String>,
    #[serde(default, rename = "customRegExpToFindKeys")]
    pub custom_regexp_to_find_keys: Vec<String>,
}

fn default_misprint_coefficient() -> f64 {
    DEFAULT_MISPRINT_COEFFICIENT
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            zombie_keys: ErrorType::Warning,
            keys_on_views: ErrorType::Error,
            misprint_keys: ErrorType::Disable,
            empty_keys: ErrorType::Warning,
            max_warning: 0,
            deep_search: ToggleRule::Disable,
            misprint_coefficient: DEFAULT_MISPRINT_COEFFICIENT,
            ignored_keys: Vec::new(),
            ignored_misprint_keys: Vec::new(),
            custom_regexp_to_find_keys: Vec::new(),
        }
    }
}

impl RuleConfig {
    /// Validate configuration values.
    ///
    /// Returns an error if the misprint coefficient is outside `[0, 1]` or an
    /// ignore / custom extraction pattern does not compile.
    pub fn validate(&self) -> Result<(), LintError> {
        if !(0.0..=1.0).contains(&self.misprint_coefficient) {
            return Err(LintError::InvalidConfig(format!(
                "misprintCoefficient must be between 0 and 1, got {}",
                self.misprint_coefficient
            )));
        }

        for pattern in &self.ignored_keys {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| LintError::pattern(pattern, e))?;
        }

        compile(&compose_fragments(&[], &self.custom_regexp_to_find_keys, false))?;
        Ok(())
    }

    /// Whether any of the four rules is enabled.
    pub fn any_enabled(&self) -> bool {
        [
            self.zombie_keys,
            self.keys_on_views,
            self.misprint_keys,
            self.empty_keys,
        ]
        .iter()
        .any(|level| *level != ErrorType::Disable)
    }
}

// ============================================================
// Layers
// ============================================================

/// Partial rule configuration from the config file or the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RulesLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zombie_keys: Option<ErrorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys_on_views: Option<ErrorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misprint_keys: Option<ErrorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_keys: Option<ErrorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_warning: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_search: Option<ToggleRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misprint_coefficient: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored_misprint_keys: Option<Vec<String>>,
    #[serde(
        rename = "customRegExpToFindKeys",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_regexp_to_find_keys: Option<Vec<String>>,
}

impl RulesLayer {
    /// Overlay this layer onto `base`; present values win.
    pub fn apply(&self, base: RuleConfig) -> RuleConfig {
        RuleConfig {
            zombie_keys: self.zombie_keys.unwrap_or(base.zombie_keys),
            keys_on_views: self.keys_on_views.unwrap_or(base.keys_on_views),
            misprint_keys: self.misprint_keys.unwrap_or(base.misprint_keys),
            empty_keys: self.empty_keys.unwrap_or(base.empty_keys),
            max_warning: self.max_warning.unwrap_or(base.max_warning),
            deep_search: self.deep_search.unwrap_or(base.deep_search),
            misprint_coefficient: self
                .misprint_coefficient
                .unwrap_or(base.misprint_coefficient),
            ignored_keys: self.ignored_keys.clone().unwrap_or(base.ignored_keys),
            ignored_misprint_keys: self
                .ignored_misprint_keys
                .clone()
                .unwrap_or(base.ignored_misprint_keys),
            custom_regexp_to_find_keys: self
                .custom_regexp_to_find_keys
                .clone()
                .unwrap_or(base.custom_regexp_to_find_keys),
        }
    }
}

/// One configuration layer (config file or command line).
///
/// In a config file the rule fields sit either under `"rules"` or directly at
/// the top level, never both. Unknown fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct ConfigLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    /// Paths or globs to leave out; a comma-separated string is accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_zombies_keys: Option<bool>,
    pub rules: RulesLayer,
}

const LAYER_FIELDS: [&str; 5] = ["project", "languages", "ignore", "fixZombiesKeys", "rules"];

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct FileLayer {
    project: Option<String>,
    languages: Option<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    ignore: Option<Vec<String>>,
    fix_zombies_keys: Option<bool>,
    rules: Option<RulesLayer>,
}

impl TryFrom<Map<String, Value>> for ConfigLayer {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let (layer, flat): (Map<String, Value>, Map<String, Value>) = map
            .into_iter()
            .partition(|(name, _)| LAYER_FIELDS.contains(&name.as_str()));

        let layer: FileLayer = serde_json::from_value(Value::Object(layer))?;
        let has_flat_rules = !flat.is_empty();
        let flat: RulesLayer = serde_json::from_value(Value::Object(flat))?;

        let rules = match layer.rules {
            Some(_) if has_flat_rules => {
                return Err(serde::de::Error::custom(
                    "rule fields must be nested under \"rules\" or placed at the top level, not both",
                ));
            }
            Some(rules) => rules,
            None => flat,
        };

        Ok(ConfigLayer {
            project: layer.project,
            languages: layer.languages,
            ignore: layer.ignore,
            fix_zombies_keys: layer.fix_zombies_keys,
            rules,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListValue {
    One(String),
    Many(Vec<String>),
}

fn deserialize_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<ListValue> = Option::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        ListValue::One(s) => split_list(&s),
        ListValue::Many(items) => items
            .iter()
            .flat_map(|item| split_list(item))
            .collect(),
    }))
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// ============================================================
// Settings
// ============================================================

/// Fully merged settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub project: String,
    pub languages: String,
    pub ignore: Vec<String>,
    pub fix_zombies_keys: bool,
    pub rules: RuleConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project: DEFAULT_PROJECT.to_string(),
            languages: DEFAULT_LANGUAGES.to_string(),
            ignore: Vec::new(),
            fix_zombies_keys: false,
            rules: RuleConfig::default(),
        }
    }
}

impl Settings {
    /// Merge with precedence command line > config file > defaults.
    pub fn merge(file: &ConfigLayer, cli: &ConfigLayer) -> Self {
        Self::default().with_layer(file).with_layer(cli)
    }

    fn with_layer(self, layer: &ConfigLayer) -> Self {
        Self {
            project: layer.project.clone().unwrap_or(self.project),
            languages: layer.languages.clone().unwrap_or(self.languages),
            ignore: layer.ignore.clone().unwrap_or(self.ignore),
            fix_zombies_keys: layer.fix_zombies_keys.unwrap_or(self.fix_zombies_keys),
            rules: layer.rules.apply(self.rules),
        }
    }

    /// These settings as a fully populated layer (used by `init`).
    pub fn to_layer(&self) -> ConfigLayer {
        let rules = &self.rules;
        ConfigLayer {
            project: Some(self.project.clone()),
            languages: Some(self.languages.clone()),
            ignore: Some(self.ignore.clone()),
            fix_zombies_keys: Some(self.fix_zombies_keys),
            rules: RulesLayer {
                zombie_keys: Some(rules.zombie_keys),
                keys_on_views: Some(rules.keys_on_views),
                misprint_keys: Some(rules.misprint_keys),
                empty_keys: Some(rules.empty_keys),
                max_warning: Some(rules.max_warning),
                deep_search: Some(rules.deep_search),
                misprint_coefficient: Some(rules.misprint_coefficient),
                ignored_keys: Some(rules.ignored_keys.clone()),
                ignored_misprint_keys: Some(rules.ignored_misprint_keys.clone()),
                custom_regexp_to_find_keys: Some(rules.custom_regexp_to_find_keys.clone()),
            },
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let layer = Settings::default().to_layer();
    serde_json::to_string_pretty(&layer).context("Failed to generate default config.")
}

// ============================================================
// Loading
// ============================================================

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub layer: ConfigLayer,
    /// Path of the loaded file, `None` when no config file was found.
    pub path: Option<PathBuf>,
}

pub fn parse_config_file(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load the config file layer: `explicit` when given, otherwise the nearest
/// `.keylintrc.json` above `start_dir`.
pub fn load_config(start_dir: &Path, explicit: Option<&Path>) -> Result<ConfigLoadResult> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(start_dir),
    };

    match path {
        Some(path) => Ok(ConfigLoadResult {
            layer: parse_config_file(&path)?,
            path: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            layer: ConfigLayer::default(),
            path: None,
        }),
    }
}
