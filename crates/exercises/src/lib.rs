//! # modelkit-exercises
//!
//! Data-modeling exercises solved with `modelkit-validator`:
//!
//! - [`person`]: smart-constructed `Age` and `Name`, a type-state
//!   `PersonBuilder`
//! - [`contact`]: an `Email` smart constructor
//! - [`account`]: balances that cannot go negative
//! - [`event`]: splitting an optional-field record into a product and a sum
//! - [`payment`]: card numbers validated per network
//! - [`document`]: a closed `Owner` enum with exhaustive access checks
//! - [`adventure`]: a small text adventure driving a command model

pub mod account;
pub mod adventure;
pub mod contact;
pub mod document;
pub mod event;
pub mod ids;
pub mod payment;
pub mod person;
