// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The canonical configuration record.

use super::schema::{Applicability, LintConfig, RuleSpec, RuleValue};

/// Contribution guidelines linked from lint failures.
pub const CONTRIBUTING_HELP_URL: &str =
    "https://github.com/RexOps/Rex/blob/master/CONTRIBUTING.md#git-workflow";

/// Get the canonical configuration record.
pub fn canonical() -> LintConfig {
    canonical_without_help_url().with_help_url(CONTRIBUTING_HELP_URL)
}

/// Get the canonical record without a help URL.
///
/// The linter shows its own default help text for this variant.
pub fn canonical_without_help_url() -> LintConfig {
    LintConfig::new(false)
        .with_rule(
            "body-leading-blank",
            RuleSpec::error(Applicability::Always, true),
        )
        .with_rule(
            "header-max-length",
            RuleSpec::error(Applicability::Always, RuleValue::Integer(50)),
        )
        .with_rule(
            "header-case",
            RuleSpec::error(Applicability::Always, "sentence-case"),
        )
        .with_rule("header-full-stop", RuleSpec::error(Applicability::Never, "."))
        .with_rule(
            "body-max-line-length",
            RuleSpec::error(Applicability::Always, RuleValue::Integer(72)),
        )
}

/// Generate an example `.commitlintrc.json` file.
pub fn example_config() -> &'static str {
    r#"{
  "defaultIgnores": false,
  "helpUrl": "https://github.com/RexOps/Rex/blob/master/CONTRIBUTING.md#git-workflow",
  "rules": {
    "body-leading-blank": [2, "always", true],
    "header-max-length": [2, "always", 50],
    "header-case": [2, "always", "sentence-case"],
    "header-full-stop": [2, "never", "."],
    "body-max-line-length": [2, "always", 72]
  }
}
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Severity;

    const RULE_NAMES: [&str; 5] = [
        "body-leading-blank",
        "header-max-length",
        "header-case",
        "header-full-stop",
        "body-max-line-length",
    ];

    #[test]
    fn test_default_ignores_disabled() {
        assert!(!canonical().default_ignores());
        assert!(!canonical_without_help_url().default_ignores());
    }

    #[test]
    fn test_exact_rule_set() {
        let config = canonical();
        let mut expected = RULE_NAMES.to_vec();
        expected.sort_unstable();
        assert_eq!(config.rule_names().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_every_rule_is_error() {
        for spec in canonical().rules().values() {
            assert_eq!(spec.severity, Severity::Error);
            assert_eq!(spec.severity.level(), 2);
        }
    }

    #[test]
    fn test_rule_values() {
        let config = canonical();
        let rule = |name: &str| config.rule(name).unwrap().clone();

        let r = rule("body-leading-blank");
        assert_eq!(r.applicability, Applicability::Always);
        assert_eq!(r.value.as_bool(), Some(true));

        let r = rule("header-max-length");
        assert_eq!(r.applicability, Applicability::Always);
        assert_eq!(r.value.as_integer(), Some(50));

        let r = rule("header-case");
        assert_eq!(r.applicability, Applicability::Always);
        assert_eq!(r.value.as_str(), Some("sentence-case"));

        let r = rule("header-full-stop");
        assert_eq!(r.applicability, Applicability::Never);
        assert_eq!(r.value.as_str(), Some("."));

        let r = rule("body-max-line-length");
        assert_eq!(r.applicability, Applicability::Always);
        assert_eq!(r.value.as_integer(), Some(72));
    }

    #[test]
    fn test_load_is_idempotent() {
        assert_eq!(LintConfig::load(), LintConfig::load());
    }

    #[test]
    fn test_variants_differ_only_in_help_url() {
        let with_url = canonical();
        let without_url = canonical_without_help_url();
        assert_eq!(with_url.help_url(), Some(CONTRIBUTING_HELP_URL));
        assert_eq!(without_url.help_url(), None);
        assert_eq!(with_url.rules(), without_url.rules());
        assert_eq!(with_url.default_ignores(), without_url.default_ignores());
    }

    #[test]
    fn test_example_config_matches_canonical() {
        let parsed: LintConfig =
            serde_json::from_str(example_config()).expect("Example config should parse");
        assert_eq!(parsed, canonical());
    }
}
