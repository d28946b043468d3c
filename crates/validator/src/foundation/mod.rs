//! Foundation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationFailure`], [`ClassificationFailure`],
//!   [`IncompleteBuilder`], [`ModelError`]
//!
//! Validators are generic over their input type and compose with
//! [`ValidateExt::and`]:
//!
//! ```rust,ignore
//! use modelkit_validator::prelude::*;
//!
//! let name = non_empty().and(max_chars(64));
//! assert!(name.validate("Ada").is_ok());
//! ```

pub mod error;
pub mod traits;

pub use error::{ClassificationFailure, Evidence, IncompleteBuilder, ModelError, ValidationFailure};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A result carrying a [`ValidationFailure`].
pub type ValidationResult<T> = Result<T, ValidationFailure>;

/// A result carrying any [`ModelError`].
pub type ModelResult<T> = Result<T, ModelError>;
