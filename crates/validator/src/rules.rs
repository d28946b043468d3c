//! Named rules and rule sets
//!
//! A [`Rule`] is a named, pure predicate over a raw value. A [`RuleSet`] is an
//! ordered conjunction of rules: a value passes when every rule holds, and the
//! first rule to fail (in declaration order) is the one reported.
//!
//! An empty rule set rejects every input with
//! [`ValidationFailure::EmptyRuleSet`] instead of passing vacuously.
//!
//! # Examples
//!
//! ```rust,ignore
//! use modelkit_validator::rules::{RuleSet, at_least, at_most};
//! use modelkit_validator::validate;
//!
//! let age = RuleSet::new().with(at_least(0_i64)).with(at_most(120_i64));
//! let checked = validate(120_i64, &age)?;
//! assert_eq!(*checked, 120);
//! ```

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::foundation::{Validate, ValidationFailure};
use crate::refined::Validated;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

// ============================================================================
// RULE
// ============================================================================

/// A named predicate over `T`.
///
/// Cloning a rule is cheap: the predicate is shared.
pub struct Rule<T: ?Sized> {
    name: Cow<'static, str>,
    predicate: Predicate<T>,
}

impl<T: ?Sized> Rule<T> {
    /// Creates a rule from a name and a predicate.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// The rule's name, as reported in [`ValidationFailure::RuleViolated`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluates the predicate.
    pub fn holds(&self, input: &T) -> bool {
        (self.predicate)(input)
    }
}

impl<T: ?Sized> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<T: ?Sized> Validate for Rule<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationFailure> {
        if self.holds(input) {
            Ok(())
        } else {
            Err(ValidationFailure::RuleViolated(self.name.clone()))
        }
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// An ordered conjunction of rules.
pub struct RuleSet<T: ?Sized> {
    rules: Vec<Rule<T>>,
}

impl<T: ?Sized> RuleSet<T> {
    /// Creates an empty rule set. It rejects everything until rules are added.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a named predicate.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<F>(self, name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.with(Rule::new(name, predicate))
    }

    /// Appends an existing rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, rule: Rule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Rule::name)
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }
}

impl<T: ?Sized> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for RuleSet<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl<T: ?Sized> FromIterator<Rule<T>> for RuleSet<T> {
    fn from_iter<I: IntoIterator<Item = Rule<T>>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> From<Rule<T>> for RuleSet<T> {
    fn from(rule: Rule<T>) -> Self {
        Self { rules: vec![rule] }
    }
}

impl<T: ?Sized> Validate for RuleSet<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationFailure> {
        if self.rules.is_empty() {
            return Err(ValidationFailure::EmptyRuleSet);
        }
        self.rules.iter().try_for_each(|rule| rule.validate(input))
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Promotes `raw` to a [`Validated`] value if it passes `validator`.
///
/// The raw value is returned unchanged inside the wrapper. Usually called with
/// a [`RuleSet`], but any [`Validate`] implementation works.
///
/// # Errors
///
/// * [`ValidationFailure::EmptyRuleSet`] if `validator` is an empty rule set
/// * [`ValidationFailure::RuleViolated`] naming the first failing rule
pub fn validate<T, V>(raw: T, validator: &V) -> Result<Validated<T>, ValidationFailure>
where
    V: Validate + ?Sized,
    T: Borrow<V::Input>,
{
    validator.validate(raw.borrow())?;
    Ok(Validated::from_checked(raw))
}

// ============================================================================
// COMMON RULES
// ============================================================================

/// `input >= min`, named `>=min`.
pub fn at_least<T>(min: T) -> Rule<T>
where
    T: PartialOrd + fmt::Display + Send + Sync + 'static,
{
    Rule::new(format!(">={min}"), move |input: &T| *input >= min)
}

/// `input <= max`, named `<=max`.
pub fn at_most<T>(max: T) -> Rule<T>
where
    T: PartialOrd + fmt::Display + Send + Sync + 'static,
{
    Rule::new(format!("<={max}"), move |input: &T| *input <= max)
}

/// The string is not empty after trimming whitespace.
pub fn non_empty() -> Rule<str> {
    Rule::new("non_empty", |input: &str| !input.trim().is_empty())
}

/// The string has at most `max` characters (not bytes).
pub fn max_chars(max: usize) -> Rule<str> {
    Rule::new(format!("max_chars({max})"), move |input: &str| {
        input.chars().count() <= max
    })
}

/// The string matches `pattern`.
pub fn matches(name: impl Into<Cow<'static, str>>, pattern: Regex) -> Rule<str> {
    Rule::new(name, move |input: &str| pattern.is_match(input))
}

/// Every character is an ASCII digit and there is at least one.
pub fn ascii_digits() -> Rule<str> {
    Rule::new("ascii_digits", |input: &str| {
        !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
    })
}

// ============================================================================
// TESTS
// ============================================================================
