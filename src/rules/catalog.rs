// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rules recognised by the commit linter and the parameter each one takes.

/// Kind of parameter a rule expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// The linter does not read the value.
    Ignored,
    /// Non-negative length.
    Integer,
    /// A case style name, or a list of them.
    Case,
    /// Free text, such as a trailing character or a trailer.
    Text,
    /// A list of allowed names.
    List,
}

impl ParamKind {
    /// Get a description of the expected parameter.
    pub fn description(&self) -> &'static str {
        match self {
            ParamKind::Ignored => "any value",
            ParamKind::Integer => "a non-negative integer",
            ParamKind::Case => "a case style or list of case styles",
            ParamKind::Text => "a string",
            ParamKind::List => "a list of strings",
        }
    }
}

/// A rule known to the commit linter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownRule {
    BodyCase,
    BodyEmpty,
    BodyFullStop,
    BodyLeadingBlank,
    BodyMaxLength,
    BodyMaxLineLength,
    BodyMinLength,
    FooterEmpty,
    FooterLeadingBlank,
    FooterMaxLength,
    FooterMaxLineLength,
    FooterMinLength,
    HeaderCase,
    HeaderFullStop,
    HeaderMaxLength,
    HeaderMinLength,
    HeaderTrim,
    ReferencesEmpty,
    ScopeCase,
    ScopeEmpty,
    ScopeEnum,
    ScopeMaxLength,
    ScopeMinLength,
    SignedOffBy,
    SubjectCase,
    SubjectEmpty,
    SubjectExclamationMark,
    SubjectFullStop,
    SubjectMaxLength,
    SubjectMinLength,
    TrailerExists,
    TypeCase,
    TypeEmpty,
    TypeEnum,
    TypeMaxLength,
    TypeMinLength,
}

impl KnownRule {
    /// Get the rule name as written in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            KnownRule::BodyCase => "body-case",
            KnownRule::BodyEmpty => "body-empty",
            KnownRule::BodyFullStop => "body-full-stop",
            KnownRule::BodyLeadingBlank => "body-leading-blank",
            KnownRule::BodyMaxLength => "body-max-length",
            KnownRule::BodyMaxLineLength => "body-max-line-length",
            KnownRule::BodyMinLength => "body-min-length",
            KnownRule::FooterEmpty => "footer-empty",
            KnownRule::FooterLeadingBlank => "footer-leading-blank",
            KnownRule::FooterMaxLength => "footer-max-length",
            KnownRule::FooterMaxLineLength => "footer-max-line-length",
            KnownRule::FooterMinLength => "footer-min-length",
            KnownRule::HeaderCase => "header-case",
            KnownRule::HeaderFullStop => "header-full-stop",
            KnownRule::HeaderMaxLength => "header-max-length",
            KnownRule::HeaderMinLength => "header-min-length",
            KnownRule::HeaderTrim => "header-trim",
            KnownRule::ReferencesEmpty => "references-empty",
            KnownRule::ScopeCase => "scope-case",
            KnownRule::ScopeEmpty => "scope-empty",
            KnownRule::ScopeEnum => "scope-enum",
            KnownRule::ScopeMaxLength => "scope-max-length",
            KnownRule::ScopeMinLength => "scope-min-length",
            KnownRule::SignedOffBy => "signed-off-by",
            KnownRule::SubjectCase => "subject-case",
            KnownRule::SubjectEmpty => "subject-empty",
            KnownRule::SubjectExclamationMark => "subject-exclamation-mark",
            KnownRule::SubjectFullStop => "subject-full-stop",
            KnownRule::SubjectMaxLength => "subject-max-length",
            KnownRule::SubjectMinLength => "subject-min-length",
            KnownRule::TrailerExists => "trailer-exists",
            KnownRule::TypeCase => "type-case",
            KnownRule::TypeEmpty => "type-empty",
            KnownRule::TypeEnum => "type-enum",
            KnownRule::TypeMaxLength => "type-max-length",
            KnownRule::TypeMinLength => "type-min-length",
        }
    }

    /// Get the kind of parameter the rule reads.
    pub fn param_kind(&self) -> ParamKind {
        use KnownRule::*;

        match self {
            BodyCase | HeaderCase | ScopeCase | SubjectCase | TypeCase => ParamKind::Case,
            BodyMaxLength | BodyMaxLineLength | BodyMinLength | FooterMaxLength
            | FooterMaxLineLength | FooterMinLength | HeaderMaxLength | HeaderMinLength
            | ScopeMaxLength | ScopeMinLength | SubjectMaxLength | SubjectMinLength
            | TypeMaxLength | TypeMinLength => ParamKind::Integer,
            BodyFullStop | HeaderFullStop | SubjectFullStop | SignedOffBy | TrailerExists => {
                ParamKind::Text
            }
            ScopeEnum | TypeEnum => ParamKind::List,
            BodyEmpty | BodyLeadingBlank | FooterEmpty | FooterLeadingBlank | HeaderTrim
            | ReferencesEmpty | ScopeEmpty | SubjectEmpty | SubjectExclamationMark | TypeEmpty => {
                ParamKind::Ignored
            }
        }
    }

    /// Get all known rules.
    pub fn all() -> &'static [KnownRule] {
        use KnownRule::*;

        &[
            BodyCase,
            BodyEmpty,
            BodyFullStop,
            BodyLeadingBlank,
            BodyMaxLength,
            BodyMaxLineLength,
            BodyMinLength,
            FooterEmpty,
            FooterLeadingBlank,
            FooterMaxLength,
            FooterMaxLineLength,
            FooterMinLength,
            HeaderCase,
            HeaderFullStop,
            HeaderMaxLength,
            HeaderMinLength,
            HeaderTrim,
            ReferencesEmpty,
            ScopeCase,
            ScopeEmpty,
            ScopeEnum,
            ScopeMaxLength,
            ScopeMinLength,
            SignedOffBy,
            SubjectCase,
            SubjectEmpty,
            SubjectExclamationMark,
            SubjectFullStop,
            SubjectMaxLength,
            SubjectMinLength,
            TrailerExists,
            TypeCase,
            TypeEmpty,
            TypeEnum,
            TypeMaxLength,
            TypeMinLength,
        ]
    }
}

impl std::str::FromStr for KnownRule {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KnownRule::all()
            .iter()
            .copied()
            .find(|rule| rule.name() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for KnownRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Case styles accepted by the `*-case` rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    Lower,
    Upper,
    Camel,
    Kebab,
    Pascal,
    Sentence,
    Snake,
    Start,
}

impl CaseStyle {
    /// Get the case name as written in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Lower => "lower-case",
            CaseStyle::Upper => "upper-case",
            CaseStyle::Camel => "camel-case",
            CaseStyle::Kebab => "kebab-case",
            CaseStyle::Pascal => "pascal-case",
            CaseStyle::Sentence => "sentence-case",
            CaseStyle::Snake => "snake-case",
            CaseStyle::Start => "start-case",
        }
    }

    /// Get all case styles.
    pub fn all() -> &'static [CaseStyle] {
        &[
            CaseStyle::Lower,
            CaseStyle::Upper,
            CaseStyle::Camel,
            CaseStyle::Kebab,
            CaseStyle::Pascal,
            CaseStyle::Sentence,
            CaseStyle::Snake,
            CaseStyle::Start,
        ]
    }
}

impl std::str::FromStr for CaseStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower-case" | "lowercase" => Ok(CaseStyle::Lower),
            "upper-case" | "uppercase" => Ok(CaseStyle::Upper),
            "camel-case" => Ok(CaseStyle::Camel),
            "kebab-case" => Ok(CaseStyle::Kebab),
            "pascal-case" => Ok(CaseStyle::Pascal),
            "sentence-case" | "sentencecase" => Ok(CaseStyle::Sentence),
            "snake-case" => Ok(CaseStyle::Snake),
            "start-case" => Ok(CaseStyle::Start),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_rule_from_str() {
        assert_eq!(
            "header-max-length".parse::<KnownRule>(),
            Ok(KnownRule::HeaderMaxLength)
        );
        assert!("header-max-len".parse::<KnownRule>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for rule in KnownRule::all() {
            assert_eq!(rule.name().parse::<KnownRule>(), Ok(*rule));
        }
        for case in CaseStyle::all() {
            assert_eq!(case.as_str().parse::<CaseStyle>(), Ok(*case));
        }
    }

    #[test]
    fn test_param_kinds() {
        assert_eq!(KnownRule::BodyLeadingBlank.param_kind(), ParamKind::Ignored);
        assert_eq!(KnownRule::HeaderMaxLength.param_kind(), ParamKind::Integer);
        assert_eq!(KnownRule::HeaderCase.param_kind(), ParamKind::Case);
        assert_eq!(KnownRule::HeaderFullStop.param_kind(), ParamKind::Text);
        assert_eq!(KnownRule::BodyMaxLineLength.param_kind(), ParamKind::Integer);
        assert_eq!(KnownRule::TypeEnum.param_kind(), ParamKind::List);
    }

    #[test]
    fn test_case_style_aliases() {
        assert_eq!("lowercase".parse::<CaseStyle>(), Ok(CaseStyle::Lower));
        assert!("title-case".parse::<CaseStyle>().is_err());
    }
}
