//! Documents with a closed set of ownership cases
//!
//! Instead of a family of document types (unowned, user-owned, group-owned)
//! told apart by type checks, there is one [`Document`] with an [`Owner`]
//! enum, and every access check is an exhaustive match.

use std::fmt;

use modelkit_validator::prelude::*;
use serde::Serialize;

use crate::ids::{GroupId, UserId};

refinement! {
    /// Non-blank titles of at most 200 characters.
    pub TitleRules for str => [non_empty(), max_chars(200)]
}

/// A document title.
pub type Title = Validated<String, TitleRules>;

/// Who owns a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Owner {
    /// Nobody; anyone may edit.
    Unowned,
    /// A single user.
    User(UserId),
    /// Every member of a group.
    Group(GroupId),
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unowned => f.write_str("nobody"),
            Self::User(user) => write!(f, "user {user}"),
            Self::Group(group) => write!(f, "group {group}"),
        }
    }
}

/// The identity attempting an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    user: UserId,
    groups: Vec<GroupId>,
}

impl Principal {
    /// A user with group memberships.
    pub fn new(user: UserId, groups: impl IntoIterator<Item = GroupId>) -> Self {
        Self {
            user,
            groups: groups.into_iter().collect(),
        }
    }

    /// Returns `true` if the principal belongs to `group`.
    pub fn is_member_of(&self, group: &GroupId) -> bool {
        self.groups.contains(group)
    }
}

/// A titled document and its owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Document {
    title: Title,
    owner: Owner,
}

impl Document {
    /// Creates a document.
    pub fn new(title: Title, owner: Owner) -> Self {
        Self { title, owner }
    }

    /// The title.
    pub fn title(&self) -> &Title {
        &self.title
    }

    /// The owner.
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Returns `true` if `who` may edit this document.
    pub fn can_edit(&self, who: &Principal) -> bool {
        match &self.owner {
            Owner::Unowned => true,
            Owner::User(user) => *user == who.user,
            Owner::Group(group) => who.is_member_of(group),
        }
    }

    /// Returns a copy owned by `owner`, if `who` may edit this one.
    pub fn transfer(&self, who: &Principal, owner: Owner) -> Option<Self> {
        if !self.can_edit(who) {
            tracing::debug!(title = %self.title, owner = %self.owner, "transfer refused");
            return None;
        }
        Some(Self {
            title: self.title.clone(),
            owner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user(id: &str) -> UserId {
        UserId::new(id.to_owned()).unwrap()
    }

    fn group(id: &str) -> GroupId {
        GroupId::new(id.to_owned()).unwrap()
    }

    fn doc(owner: Owner) -> Document {
        Document::new(Title::new("Plan".to_owned()).unwrap(), owner)
    }

    #[rstest]
    #[case(Owner::Unowned, true)]
    #[case(Owner::User(user("ada")), true)]
    #[case(Owner::User(user("bob")), false)]
    #[case(Owner::Group(group("eng")), true)]
    #[case(Owner::Group(group("ops")), false)]
    fn test_can_edit(#[case] owner: Owner, #[case] expected: bool) {
        let ada = Principal::new(user("ada"), [group("eng")]);
        assert_eq!(doc(owner).can_edit(&ada), expected);
    }

    #[test]
    fn test_transfer() {
        let ada = Principal::new(user("ada"), []);
        let bob = Principal::new(user("bob"), []);
        let original = doc(Owner::User(user("ada")));

        assert!(original.transfer(&bob, Owner::Unowned).is_none());

        let moved = original.transfer(&ada, Owner::User(user("bob"))).unwrap();
        assert!(moved.can_edit(&bob));
        assert!(!moved.can_edit(&ada));
        assert_eq!(moved.owner().to_string(), "user bob");
        assert_eq!(original.owner(), &Owner::User(user("ada")));
    }
}
