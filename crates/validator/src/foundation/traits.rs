//! Core traits for the validation system
//!
//! This module defines the trait every validator implements, plus the
//! extension trait that provides fluent composition.

use crate::foundation::ValidationFailure;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Validators are pure: the same input always yields the same result, and
/// validating never mutates the input.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust,ignore
/// use modelkit_validator::foundation::{Validate, ValidationFailure};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationFailure> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationFailure::rule_violated("even"))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationFailure)` naming the first failed rule otherwise
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationFailure>;

    /// Returns `true` if the input passes.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationFailure> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for all types that implement [`Validate`].
///
/// # Examples
///
/// ```rust,ignore
/// use modelkit_validator::prelude::*;
///
/// let age = at_least(0_i64).and(at_most(120_i64));
/// assert!(age.validate(&42).is_ok());
/// assert!(age.validate(&121).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass. Short-circuits on the first failure, so the
    /// reported failure is always the leftmost one.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;

// ============================================================================
// TESTS
// ============================================================================
