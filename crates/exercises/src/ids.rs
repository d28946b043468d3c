//! Identifier types
//!
//! Each identifier has its own tag, so a [`UserId`] cannot be passed where a
//! [`GroupId`] is expected even though both wrap a `String`.

use modelkit_validator::prelude::*;

refinement! {
    /// A user identifier.
    pub UserIdRules for str => [non_empty(), max_chars(64)]
}

refinement! {
    /// A group identifier.
    pub GroupIdRules for str => [non_empty(), max_chars(64)]
}

refinement! {
    /// A device identifier.
    pub DeviceIdRules for str => [non_empty(), max_chars(64)]
}

/// A validated user identifier.
pub type UserId = Validated<String, UserIdRules>;

/// A validated group identifier.
pub type GroupId = Validated<String, GroupIdRules>;

/// A validated device identifier.
pub type DeviceId = Validated<String, DeviceIdRules>;
