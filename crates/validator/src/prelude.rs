//! Prelude module for convenient imports.
//!
//! Provides a single `use modelkit_validator::prelude::*;` import that brings
//! in the commonly needed traits, types, rules and macros.
//!
//! # Examples
//!
//! ```rust,ignore
//! use modelkit_validator::prelude::*;
//!
//! let name: RuleSet<str> = RuleSet::new().with(non_empty()).with(max_chars(64));
//! let checked = validate("Ada".to_owned(), &name)?;
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    ClassificationFailure, Evidence, IncompleteBuilder, ModelError, ModelResult, Validate,
    ValidateExt, ValidationFailure, ValidationResult,
};

// ============================================================================
// RULES AND VALIDATED VALUES
// ============================================================================

pub use crate::refined::{Adhoc, Refinement, Validated};
pub use crate::rules::{
    Rule, RuleSet, ascii_digits, at_least, at_most, matches, max_chars, non_empty, validate,
};

// ============================================================================
// BUILDERS AND VARIANTS
// ============================================================================

pub use crate::typestate::{FieldState, Mark, MarkSet, Unset};
pub use crate::variant::{Classify, Discriminant, exactly_one};

// ============================================================================
// COMBINATORS AND MACROS
// ============================================================================

pub use crate::combinators::And;
pub use crate::{discriminant, marks, refinement};
