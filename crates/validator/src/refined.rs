//! Validated values - raw values carrying proof that they passed validation
//!
//! [`Validated<T, Tag>`] wraps a raw value of type `T` and proves that it
//! passed the rule set associated with `Tag`. The wrapper is opaque: its only
//! constructors run validation, and it exposes no mutable access. "Changing" a
//! validated value means building a new one, which re-runs the rules.
//!
//! # Examples
//!
//! ```rust,ignore
//! use modelkit_validator::prelude::*;
//!
//! refinement! {
//!     /// Ages between 0 and 120.
//!     pub AgeRules for i64 => [at_least(0), at_most(120)]
//! }
//!
//! type Age = Validated<i64, AgeRules>;
//!
//! let age = Age::new(42)?;
//! assert_eq!(*age, 42);
//! assert!(Age::new(121).is_err());
//!
//! // Only validated ages can reach this function.
//! fn greet(age: &Age) -> String { format!("you are {age}") }
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use crate::foundation::{Validate, ValidationFailure};
use crate::rules::RuleSet;

// ============================================================================
// REFINEMENT TAG
// ============================================================================

/// A validation tag: a type-level name bound to a rule set.
///
/// Tags are usually zero-sized marker types declared with
/// [`refinement!`](crate::refinement).
pub trait Refinement {
    /// The type the rules inspect. A `Validated<T, Self>` requires
    /// `T: Borrow<Self::Raw>`, so `String` values can use `str` rules.
    type Raw: ?Sized;

    /// Human-readable tag name, e.g. `"Email"`.
    const NAME: &'static str;

    /// The rules a raw value must pass to carry this tag.
    fn rules() -> RuleSet<Self::Raw>;
}

/// Tag for values validated against an ad-hoc rule set through
/// [`validate`](crate::rules::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Adhoc;

// ============================================================================
// VALIDATED VALUE
// ============================================================================

/// A value that has passed validation and carries that guarantee in its type.
///
/// # Type Parameters
///
/// * `T` - The underlying value type
/// * `Tag` - The validation tag (a type-level marker, no runtime data)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Validated<T, Tag = Adhoc> {
    value: T,
    _tag: PhantomData<fn() -> Tag>,
}

impl<T, Tag> Validated<T, Tag> {
    pub(crate) fn from_checked(value: T) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Returns a reference to the raw value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Extracts the raw value, giving up the guarantee.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Validates the raw value against another tag's rules.
    ///
    /// Useful to refine further: an `Email` that must also be a company
    /// address, for instance.
    #[must_use = "refined value must be used"]
    pub fn refine<Tag2>(self) -> Result<Validated<T, Tag2>, ValidationFailure>
    where
        Tag2: Refinement,
        T: Borrow<Tag2::Raw>,
    {
        Validated::new(self.value)
    }
}

impl<T, Tag> Validated<T, Tag>
where
    Tag: Refinement,
    T: Borrow<Tag::Raw>,
{
    /// The smart constructor: validates `value` against `Tag`'s rules.
    ///
    /// # Errors
    ///
    /// * [`ValidationFailure::EmptyRuleSet`] if the tag declares no rules
    /// * [`ValidationFailure::RuleViolated`] naming the first failing rule
    #[must_use = "validation result must be checked"]
    pub fn new(value: T) -> Result<Self, ValidationFailure> {
        Tag::rules().validate(value.borrow())?;
        Ok(Self::from_checked(value))
    }

    /// Transforms the raw value and validates the result under the same tag.
    #[must_use = "mapped value must be used"]
    pub fn try_map<U, F>(self, f: F) -> Result<Validated<U, Tag>, ValidationFailure>
    where
        F: FnOnce(T) -> U,
        U: Borrow<Tag::Raw>,
    {
        Validated::new(f(self.value))
    }

    /// The tag's name.
    pub fn tag_name(&self) -> &'static str {
        Tag::NAME
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl<T, Tag> Deref for Validated<T, Tag> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T, Tag> AsRef<T> for Validated<T, Tag> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, Tag> Borrow<T> for Validated<T, Tag> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display, Tag> fmt::Display for Validated<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T: serde::Serialize, Tag> serde::Serialize for Validated<T, Tag> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T, Tag> serde::Deserialize<'de> for Validated<T, Tag>
where
    T: serde::Deserialize<'de> + Borrow<Tag::Raw>,
    Tag: Refinement,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// TESTS
// ============================================================================
