//! AND combinator - logical conjunction of validators
//!
//! [`And`] combines two validators with logical AND semantics: both must pass
//! for the combined validator to succeed. Evaluation short-circuits, so the
//! failure reported is always the leftmost one.
//!
//! # Examples
//!
//! ```rust,ignore
//! use modelkit_validator::combinators::And;
//! use modelkit_validator::foundation::Validate;
//!
//! let validator = And::new(at_least(0_i64), at_most(120_i64));
//! assert!(validator.validate(&42).is_ok());
//! assert!(validator.validate(&-1).is_err()); // fails `>=0`
//! ```

use crate::foundation::{Validate, ValidationFailure};

/// Combines two validators with logical AND.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationFailure> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::rules::{at_least, at_most};

    #[test]
    fn test_and_both_pass() {
        let validator = And::new(at_least(5_i64), at_most(10_i64));
        assert!(validator.validate(&7).is_ok());
    }

    #[test]
    fn test_and_left_fails() {
        let validator = at_least(5_i64).and(at_most(10_i64));
        assert_eq!(validator.validate(&1).unwrap_err().rule_name(), Some(">=5"));
    }

    #[test]
    fn test_and_right_fails() {
        let validator = at_least(5_i64).and(at_most(10_i64));
        assert_eq!(validator.validate(&11).unwrap_err().rule_name(), Some("<=10"));
    }

    #[test]
    fn test_and_chain() {
        let validator = at_least(3_i64).and(at_most(10_i64)).and(at_least(5_i64));
        assert!(validator.validate(&5).is_ok());
        assert_eq!(validator.validate(&4).unwrap_err().rule_name(), Some(">=5"));
    }
}
