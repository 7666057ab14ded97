// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the lint configuration record in the exact shape the commit
//! linter reads from `.commitlintrc.json` or `commitlint.config.mjs`.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Help URL the commit linter shows when a configuration sets none.
pub const DEFAULT_HELP_URL: &str =
    "https://github.com/conventional-changelog/commitlint/#what-is-commitlint";

/// The commit-message lint configuration record.
///
/// The record is immutable once built. Values come from [`LintConfig::load`],
/// from a configuration file, or from the consuming `with_*` constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LintConfig {
    /// Whether the linter applies its built-in ignore patterns.
    pub(crate) default_ignores: bool,

    /// Link to human-readable contribution guidelines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) help_url: Option<String>,

    /// Rules keyed by name.
    pub(crate) rules: BTreeMap<String, RuleSpec>,
}

impl LintConfig {
    /// Create an empty record with the given `defaultIgnores` flag.
    pub fn new(default_ignores: bool) -> Self {
        Self {
            default_ignores,
            help_url: None,
            rules: BTreeMap::new(),
        }
    }

    /// Set the help URL.
    pub fn with_help_url(mut self, url: impl Into<String>) -> Self {
        self.help_url = Some(url.into());
        self
    }

    /// Add a rule, replacing any rule with the same name.
    pub fn with_rule(mut self, name: impl Into<String>, spec: RuleSpec) -> Self {
        self.rules.insert(name.into(), spec);
        self
    }

    /// Load the canonical configuration record.
    pub fn load() -> Self {
        super::default::canonical()
    }

    /// Load configuration from the default file locations, falling back to
    /// the canonical record.
    pub fn discover() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Whether the linter applies its built-in ignore patterns.
    pub fn default_ignores(&self) -> bool {
        self.default_ignores
    }

    /// The configured help URL, if any.
    pub fn help_url(&self) -> Option<&str> {
        self.help_url.as_deref()
    }

    /// The help URL the linter will show.
    pub fn effective_help_url(&self) -> &str {
        self.help_url().unwrap_or(DEFAULT_HELP_URL)
    }

    /// All rules, ordered by name.
    pub fn rules(&self) -> &BTreeMap<String, RuleSpec> {
        &self.rules
    }

    /// Look up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&RuleSpec> {
        self.rules.get(name)
    }

    /// Rule names, ordered.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

/// A rule entry: `[severity, applicability, value]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RuleTuple", into = "RuleTuple")]
pub struct RuleSpec {
    /// How a violation is reported.
    pub severity: Severity,

    /// Whether the condition must or must not hold.
    pub applicability: Applicability,

    /// Rule-specific parameter.
    pub value: RuleValue,
}

/// Wire form of [`RuleSpec`].
#[derive(Serialize, Deserialize)]
struct RuleTuple(Severity, Applicability, RuleValue);

impl From<RuleTuple> for RuleSpec {
    fn from(RuleTuple(severity, applicability, value): RuleTuple) -> Self {
        Self {
            severity,
            applicability,
            value,
        }
    }
}

impl From<RuleSpec> for RuleTuple {
    fn from(spec: RuleSpec) -> Self {
        RuleTuple(spec.severity, spec.applicability, spec.value)
    }
}

impl RuleSpec {
    /// Create a new rule entry.
    pub fn new(
        severity: Severity,
        applicability: Applicability,
        value: impl Into<RuleValue>,
    ) -> Self {
        Self {
            severity,
            applicability,
            value: value.into(),
        }
    }

    /// Create an error-level rule entry.
    pub fn error(applicability: Applicability, value: impl Into<RuleValue>) -> Self {
        Self::new(Severity::Error, applicability, value)
    }

    /// Whether the rule is switched off.
    pub fn is_disabled(&self) -> bool {
        self.severity == Severity::Disabled
    }
}

/// Severity level, written as `0`, `1`, or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    Disabled = 0,
    Warning = 1,
    Error = 2,
}

impl Severity {
    /// Get the string representation of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Disabled => "disabled",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// The integer level used on the wire.
    pub fn level(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Severity {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, ConfigError> {
        match level {
            0 => Ok(Severity::Disabled),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            _ => Err(ConfigError::InvalidValue {
                key: "severity".to_string(),
                message: format!("{} is not one of 0, 1, 2", level),
            }),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.level()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a rule's condition must hold (`always`) or must not (`never`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    Always,
    Never,
}

impl Applicability {
    /// Get the string representation of the applicability.
    pub fn as_str(&self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }
}

impl std::str::FromStr for Applicability {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Applicability::Always),
            "never" => Ok(Applicability::Never),
            _ => Err(ConfigError::InvalidValue {
                key: "applicability".to_string(),
                message: format!("'{}' is not one of always, never", s),
            }),
        }
    }
}

impl std::fmt::Display for Applicability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rule parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Bool(bool),
    Integer(i64),
    Text(String),
    List(Vec<String>),
}

impl RuleValue {
    /// Name of the value's type, for messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            RuleValue::Bool(_) => "boolean",
            RuleValue::Integer(_) => "integer",
            RuleValue::Text(_) => "string",
            RuleValue::List(_) => "list",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RuleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RuleValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RuleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            RuleValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for RuleValue {
    fn from(value: bool) -> Self {
        RuleValue::Bool(value)
    }
}

impl From<i64> for RuleValue {
    fn from(value: i64) -> Self {
        RuleValue::Integer(value)
    }
}

impl From<&str> for RuleValue {
    fn from(value: &str) -> Self {
        RuleValue::Text(value.to_string())
    }
}

impl From<String> for RuleValue {
    fn from(value: String) -> Self {
        RuleValue::Text(value)
    }
}

impl From<Vec<String>> for RuleValue {
    fn from(value: Vec<String>) -> Self {
        RuleValue::List(value)
    }
}

impl std::fmt::Display for RuleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleValue::Bool(b) => write!(f, "{}", b),
            RuleValue::Integer(n) => write!(f, "{}", n),
            RuleValue::Text(s) => write!(f, "{:?}", s),
            RuleValue::List(items) => write!(f, "{:?}", items),
        }
    }
}
