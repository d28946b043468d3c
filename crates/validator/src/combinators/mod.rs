//! Combinators for composing validators

pub mod and;

pub use and::And;
