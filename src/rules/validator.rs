// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Shape checks for a configuration record.
//!
//! These checks look at the record only. Nothing here reads a commit message.

use crate::config::{LintConfig, RuleSpec, RuleValue};
use console::{style, Style};
use lazy_static::lazy_static;
use regex::Regex;

use super::catalog::{CaseStyle, KnownRule, ParamKind};

lazy_static! {
    /// Accepted shape of a help URL.
    static ref HELP_URL_REGEX: Regex = Regex::new(r"^https?://[^\s/$.?#][^\s]*$").unwrap();
}

/// A single configuration issue.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    /// Issue code for programmatic handling.
    pub code: String,
    /// Rule the issue belongs to, if any.
    pub rule: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Whether this is an error (true) or warning (false).
    pub is_error: bool,
}

impl ConfigIssue {
    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let prefix = if self.is_error {
            style("✗").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let code_style = if self.is_error {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let mut output = format!("{} {}", prefix, code_style.apply_to(&self.code));
        if let Some(ref rule) = self.rule {
            output.push_str(&format!(" {}", style(rule).cyan()));
        }
        output.push_str(&format!(" {}", self.message));

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code,
            "rule": self.rule,
            "message": self.message,
            "suggestion": self.suggestion,
        })
    }
}

/// Result of checking a configuration record.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Problems the linter would reject.
    pub errors: Vec<ConfigIssue>,
    /// Suspicious but accepted entries.
    pub warnings: Vec<ConfigIssue>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, issue: ConfigIssue) {
        if issue.is_error {
            self.errors.push(issue);
        } else {
            self.warnings.push(issue);
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Iterate over errors, then warnings.
    pub fn issues(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.errors.iter().chain(self.warnings.iter())
    }

    /// Render the report for a terminal, one issue per line.
    pub fn format(&self) -> String {
        self.issues()
            .map(|issue| issue.format())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the report as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "errors": self.errors.iter().map(ConfigIssue::to_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(ConfigIssue::to_json).collect::<Vec<_>>(),
        })
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

/// Check a configuration record.
pub fn validate(config: &LintConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    if let Some(issue) = check_help_url(config) {
        report.push(issue);
    }

    for (name, spec) in config.rules() {
        for issue in check_rule(name, spec) {
            report.push(issue);
        }
    }

    tracing::debug!(
        "Validated {} rules: {}",
        config.rules().len(),
        report.summary()
    );

    report
}

/// Check the help URL, when present.
fn check_help_url(config: &LintConfig) -> Option<ConfigIssue> {
    let url = config.help_url()?;

    if HELP_URL_REGEX.is_match(url) {
        None
    } else {
        Some(ConfigIssue {
            code: "help-url".to_string(),
            rule: None,
            message: format!("Help URL '{}' is not an http(s) URL", url),
            suggestion: Some("Use an absolute https:// link or remove helpUrl".to_string()),
            is_error: true,
        })
    }
}

/// Check one rule entry.
fn check_rule(name: &str, spec: &RuleSpec) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    if spec.is_disabled() {
        issues.push(ConfigIssue {
            code: "disabled-rule".to_string(),
            rule: Some(name.to_string()),
            message: "Rule is configured with severity 0 and has no effect".to_string(),
            suggestion: Some("Remove the entry or raise its severity".to_string()),
            is_error: false,
        });
    }

    let Ok(known) = name.parse::<KnownRule>() else {
        issues.push(ConfigIssue {
            code: "unknown-rule".to_string(),
            rule: Some(name.to_string()),
            message: "Rule is not known to the commit linter".to_string(),
            suggestion: closest_rule(name).map(|r| format!("Did you mean '{}'?", r)),
            is_error: false,
        });
        return issues;
    };

    issues.extend(check_param(name, known.param_kind(), &spec.value));
    issues
}

/// Check a rule's parameter against the kind it expects.
fn check_param(name: &str, kind: ParamKind, value: &RuleValue) -> Option<ConfigIssue> {
    let mismatch = || ConfigIssue {
        code: "parameter-kind".to_string(),
        rule: Some(name.to_string()),
        message: format!(
            "Expected {}, found {} {}",
            kind.description(),
            value.type_name(),
            value
        ),
        suggestion: None,
        is_error: true,
    };

    match (kind, value) {
        (ParamKind::Ignored, _) => None,
        (ParamKind::Integer, RuleValue::Integer(n)) if *n >= 0 => None,
        (ParamKind::Integer, RuleValue::Integer(n)) => Some(ConfigIssue {
            code: "negative-length".to_string(),
            rule: Some(name.to_string()),
            message: format!("Length must not be negative (found {})", n),
            suggestion: Some("Use 0 or a positive length".to_string()),
            is_error: true,
        }),
        (ParamKind::Text, RuleValue::Text(_)) => None,
        (ParamKind::List, RuleValue::List(_)) => None,
        (ParamKind::Case, RuleValue::Text(case)) => check_case(name, std::slice::from_ref(case)),
        (ParamKind::Case, RuleValue::List(cases)) => check_case(name, cases),
        _ => Some(mismatch()),
    }
}

/// Check that every case name is a known case style.
fn check_case(name: &str, cases: &[String]) -> Option<ConfigIssue> {
    let unknown: Vec<&str> = cases
        .iter()
        .map(String::as_str)
        .filter(|case| case.parse::<CaseStyle>().is_err())
        .collect();

    if unknown.is_empty() {
        return None;
    }

    Some(ConfigIssue {
        code: "unknown-case".to_string(),
        rule: Some(name.to_string()),
        message: format!("Unknown case style: {}", unknown.join(", ")),
        suggestion: Some(format!(
            "Use one of: {}",
            CaseStyle::all()
                .iter()
                .map(CaseStyle::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )),
        is_error: true,
    })
}

/// Find a known rule whose name differs by a single edit.
fn closest_rule(name: &str) -> Option<&'static str> {
    KnownRule::all()
        .iter()
        .map(KnownRule::name)
        .find(|known| within_one_edit(name, known))
}

fn within_one_edit(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if long.len() - short.len() > 1 {
        return false;
    }

    let prefix = short
        .iter()
        .zip(long.iter())
        .take_while(|(x, y)| x == y)
        .count();

    if short.len() == long.len() {
        prefix == short.len() || short[prefix + 1..] == long[prefix + 1..]
    } else {
        short[prefix..] == long[prefix + 1..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{canonical, canonical_without_help_url, Applicability, Severity};

    #[test]
    fn test_canonical_is_clean() {
        let report = validate(&canonical());
        assert!(report.is_valid());
        assert_eq!(report.issue_count(), 0);
        assert_eq!(report.summary(), "Valid");

        assert_eq!(validate(&canonical_without_help_url()).issue_count(), 0);
    }

    #[test]
    fn test_parameter_kind_mismatch() {
        let config = LintConfig::new(false).with_rule(
            "header-max-length",
            RuleSpec::error(Applicability::Always, "fifty"),
        );
        let report = validate(&config);
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].code, "parameter-kind");
        assert_eq!(report.errors[0].rule.as_deref(), Some("header-max-length"));
    }

    #[test]
    fn test_negative_length() {
        let config = LintConfig::new(false).with_rule(
            "body-max-line-length",
            RuleSpec::error(Applicability::Always, -1i64),
        );
        let report = validate(&config);
        assert_eq!(report.errors[0].code, "negative-length");
    }

    #[test]
    fn test_unknown_rule_is_warning() {
        let config = LintConfig::new(false).with_rule(
            "header-max-lengt",
            RuleSpec::error(Applicability::Always, 50i64),
        );
        let report = validate(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].code, "unknown-rule");
        assert_eq!(
            report.warnings[0].suggestion.as_deref(),
            Some("Did you mean 'header-max-length'?")
        );
    }

    #[test]
    fn test_unknown_case_style() {
        let config = LintConfig::new(false)
            .with_rule(
                "header-case",
                RuleSpec::error(Applicability::Always, "title-case"),
            )
            .with_rule(
                "subject-case",
                RuleSpec::error(
                    Applicability::Never,
                    vec!["upper-case".to_string(), "pascal-case".to_string()],
                ),
            );
        let report = validate(&config);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].code, "unknown-case");
        assert!(report.errors[0].message.contains("title-case"));
    }

    #[test]
    fn test_disabled_rule_warning() {
        let config = LintConfig::new(false).with_rule(
            "header-full-stop",
            RuleSpec::new(Severity::Disabled, Applicability::Never, "."),
        );
        let report = validate(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings[0].code, "disabled-rule");
        assert!(report.summary().contains("1 warnings"));
    }

    #[test]
    fn test_bad_help_url() {
        let config = canonical_without_help_url().with_help_url("CONTRIBUTING.md");
        let report = validate(&config);
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].code, "help-url");
        assert!(report.errors[0].rule.is_none());
    }

    #[test]
    fn test_report_json() {
        let config = LintConfig::new(false).with_rule(
            "type-enum",
            RuleSpec::error(Applicability::Always, true),
        );
        let json = validate(&config).to_json();
        assert_eq!(json["valid"], serde_json::json!(false));
        assert_eq!(json["errors"][0]["rule"], serde_json::json!("type-enum"));
    }

    #[test]
    fn test_issue_format() {
        let issue = ConfigIssue {
            code: "unknown-rule".to_string(),
            rule: Some("header-lenght".to_string()),
            message: "Rule is not known to the commit linter".to_string(),
            suggestion: Some("Check the name".to_string()),
            is_error: false,
        };
        let formatted = issue.format();
        assert!(formatted.contains("unknown-rule"));
        assert!(formatted.contains("header-lenght"));
        assert!(formatted.contains("Check the name"));
    }

    #[test]
    fn test_within_one_edit() {
        assert!(within_one_edit("header-case", "header-case"));
        assert!(within_one_edit("header-cse", "header-case"));
        assert!(within_one_edit("header-casee", "header-case"));
        assert!(within_one_edit("header-cose", "header-case"));
        assert!(!within_one_edit("header-ca", "header-case"));
        assert!(!within_one_edit("footer-case", "header-case"));
    }
}
