//! Error kinds for validation, classification and construction failures
//!
//! Every failure in the core is a value. None of them is worth retrying:
//! validation is pure, so the same input always reproduces the same failure.
//!
//! - [`ValidationFailure`] - a raw value could not be promoted to a
//!   [`Validated`](crate::refined::Validated) value.
//! - [`ClassificationFailure`] - raw discriminant evidence did not map to
//!   exactly one case of a closed enumeration, or the selected evidence was
//!   itself invalid.
//! - [`IncompleteBuilder`] - a terminal build was attempted before every
//!   required mark was supplied.
//! - [`ModelError`] - the union of the three, for callers that mix them.

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::typestate::MarkSet;

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// Failure to validate a raw value against a rule set.
///
/// # Examples
///
/// ```rust,ignore
/// use modelkit_validator::prelude::*;
///
/// let rules = RuleSet::new().with(at_most(120_i64));
/// let err = validate(121_i64, &rules).unwrap_err();
/// assert_eq!(err.rule_name(), Some("<=120"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationFailure {
    /// The rule set had no rules. Empty rule sets reject every input.
    #[error("rule set is empty and rejects every input")]
    EmptyRuleSet,

    /// The named rule returned `false` for the input.
    ///
    /// When several rules fail, this is the first one in declaration order.
    #[error("rule `{0}` violated")]
    RuleViolated(Cow<'static, str>),
}

impl ValidationFailure {
    /// Creates a `RuleViolated` failure for the given rule name.
    pub fn rule_violated(rule: impl Into<Cow<'static, str>>) -> Self {
        Self::RuleViolated(rule.into())
    }

    /// Returns the violated rule name, if this is a rule violation.
    #[must_use]
    pub fn rule_name(&self) -> Option<&str> {
        match self {
            Self::RuleViolated(rule) => Some(rule.as_ref()),
            Self::EmptyRuleSet => None,
        }
    }

    /// Returns `true` for failures caused by the caller rather than the input.
    #[must_use]
    pub fn is_caller_bug(&self) -> bool {
        matches!(self, Self::EmptyRuleSet)
    }
}

// ============================================================================
// CLASSIFICATION FAILURE
// ============================================================================

/// Names of the evidence that was present when classification failed.
pub type Evidence = SmallVec<[&'static str; 4]>;

/// Failure to map raw discriminant data onto exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ClassificationFailure {
    /// Zero, or two and more, pieces of variant evidence were present.
    #[error("{}", describe_evidence(.present))]
    AmbiguousOrMissingVariant {
        /// Evidence found in the input, in declaration order.
        present: Evidence,
    },

    /// A stringly-typed discriminant named no known case.
    #[error("unknown tag `{0}`")]
    UnknownTag(String),

    /// Exactly one piece of evidence was present, but it failed validation.
    #[error("invalid `{evidence}`: {failure}")]
    InvalidEvidence {
        /// Name of the selected evidence.
        evidence: &'static str,
        /// Why the evidence was rejected.
        failure: ValidationFailure,
    },
}

impl ClassificationFailure {
    /// Creates an `AmbiguousOrMissingVariant` failure.
    pub fn ambiguous_or_missing(present: impl IntoIterator<Item = &'static str>) -> Self {
        Self::AmbiguousOrMissingVariant {
            present: present.into_iter().collect(),
        }
    }

    /// Creates an `UnknownTag` failure.
    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        Self::UnknownTag(tag.into())
    }

    /// Creates an `InvalidEvidence` failure.
    pub fn invalid_evidence(evidence: &'static str, failure: ValidationFailure) -> Self {
        Self::InvalidEvidence { evidence, failure }
    }

    /// The validation failure behind an `InvalidEvidence` failure.
    #[must_use]
    pub fn validation(&self) -> Option<&ValidationFailure> {
        match self {
            Self::InvalidEvidence { failure, .. } => Some(failure),
            Self::AmbiguousOrMissingVariant { .. } | Self::UnknownTag(_) => None,
        }
    }

    /// Returns `true` when no evidence at all was present.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        match self {
            Self::AmbiguousOrMissingVariant { present } => present.is_empty(),
            Self::UnknownTag(_) | Self::InvalidEvidence { .. } => false,
        }
    }

    /// Returns `true` when evidence for several variants was present.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        match self {
            Self::AmbiguousOrMissingVariant { present } => present.len() > 1,
            Self::UnknownTag(_) | Self::InvalidEvidence { .. } => false,
        }
    }
}

fn describe_evidence(present: &[&'static str]) -> String {
    if present.is_empty() {
        "no variant evidence present".to_owned()
    } else {
        format!("ambiguous variant evidence: {}", present.join(", "))
    }
}

// ============================================================================
// INCOMPLETE BUILDER
// ============================================================================

/// A terminal build was attempted before all required marks were set.
///
/// Always a sequencing bug in the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("builder is incomplete, missing {missing}")]
pub struct IncompleteBuilder {
    missing: MarkSet,
}

impl IncompleteBuilder {
    /// Creates the error from the set of marks that were not supplied.
    #[must_use]
    pub fn new(missing: MarkSet) -> Self {
        Self { missing }
    }

    /// Marks that were still unset, in declaration order.
    #[must_use]
    pub fn missing(&self) -> &MarkSet {
        &self.missing
    }
}

// ============================================================================
// MODEL ERROR
// ============================================================================

/// Any failure produced by the core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// See [`ValidationFailure`].
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// See [`ClassificationFailure`].
    #[error(transparent)]
    Classification(#[from] ClassificationFailure),

    /// See [`IncompleteBuilder`].
    #[error(transparent)]
    Incomplete(#[from] IncompleteBuilder),
}

impl ModelError {
    /// Short, stable code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(ValidationFailure::EmptyRuleSet) => "empty_rule_set",
            Self::Validation(ValidationFailure::RuleViolated(_)) => "rule_violated",
            Self::Classification(ClassificationFailure::AmbiguousOrMissingVariant { .. }) => {
                "ambiguous_or_missing_variant"
            }
            Self::Classification(ClassificationFailure::UnknownTag(_)) => "unknown_tag",
            Self::Classification(ClassificationFailure::InvalidEvidence { .. }) => {
                "invalid_evidence"
            }
            Self::Incomplete(_) => "incomplete_builder",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_violated_name() {
        let error = ValidationFailure::rule_violated("<=120");
        assert_eq!(error.rule_name(), Some("<=120"));
        assert_eq!(error.to_string(), "rule `<=120` violated");
    }

    #[test]
    fn test_empty_rule_set_is_caller_bug() {
        assert!(ValidationFailure::EmptyRuleSet.is_caller_bug());
        assert!(!ValidationFailure::rule_violated("x").is_caller_bug());
        assert_eq!(ValidationFailure::EmptyRuleSet.rule_name(), None);
    }

    #[test]
    fn test_static_rule_names_do_not_allocate() {
        let error = ValidationFailure::rule_violated("non_empty");
        assert!(matches!(
            error,
            ValidationFailure::RuleViolated(Cow::Borrowed(_))
        ));
    }

    #[test]
    fn test_missing_vs_ambiguous() {
        let missing = ClassificationFailure::ambiguous_or_missing([]);
        assert!(missing.is_missing());
        assert!(!missing.is_ambiguous());
        assert_eq!(missing.to_string(), "no variant evidence present");

        let ambiguous = ClassificationFailure::ambiguous_or_missing(["device_id", "user_id"]);
        assert!(ambiguous.is_ambiguous());
        assert_eq!(
            ambiguous.to_string(),
            "ambiguous variant evidence: device_id, user_id"
        );
    }

    #[test]
    fn test_incomplete_builder_display() {
        let error = IncompleteBuilder::new(MarkSet::from_iter(["NameSet"]));
        assert_eq!(error.to_string(), "builder is incomplete, missing {NameSet}");
        assert!(error.missing().contains("NameSet"));
    }

    #[test]
    fn test_model_error_codes() {
        let error: ModelError = ValidationFailure::EmptyRuleSet.into();
        assert_eq!(error.code(), "empty_rule_set");

        let error: ModelError = ClassificationFailure::unknown_tag("diners").into();
        assert_eq!(error.code(), "unknown_tag");
        assert_eq!(error.to_string(), "unknown tag `diners`");

        let error: ModelError = ClassificationFailure::invalid_evidence(
            "device_id",
            ValidationFailure::rule_violated("non_empty"),
        )
        .into();
        assert_eq!(error.code(), "invalid_evidence");
        assert_eq!(
            error.to_string(),
            "invalid `device_id`: rule `non_empty` violated"
        );

        let error: ModelError = IncompleteBuilder::new(MarkSet::new()).into();
        assert_eq!(error.code(), "incomplete_builder");
    }
}
