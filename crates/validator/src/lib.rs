//! # modelkit-validator
//!
//! Parse, don't validate: turn loosely-typed raw data into values whose types
//! prove they are valid.
//!
//! ## Quick Start
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
//! assert!(Age::new(-1).is_err());
//! ```
//!
//! ## Building Blocks
//!
//! - **Rules**: [`Rule`](rules::Rule) and [`RuleSet`](rules::RuleSet), named
//!   predicates checked in declaration order, plus [`validate`]
//! - **Smart constructors**: [`Validated<T, Tag>`](refined::Validated), an
//!   opaque wrapper only reachable through validation
//! - **Type-state builders**: [`FieldState`](typestate::FieldState) and the
//!   [`marks!`] macro, where `build` exists only once every field is set
//! - **Discriminated variants**: [`Discriminant`](variant::Discriminant),
//!   [`Classify`](variant::Classify) and [`exactly_one`](variant::exactly_one)
//!
//! Every failure is a [`ModelError`](foundation::ModelError) variant, so
//! callers can match on a closed set of outcomes.

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod refined;
pub mod rules;
pub mod typestate;
pub mod variant;

pub use rules::validate;
