//! Configuration types
//!
//! - `base`: the [`Config`] struct and output [`Format`]
//! - `presets`: pre-configured setups (development, production, test) and
//!   environment parsing

mod base;
mod presets;

pub use base::{Config, Format};
