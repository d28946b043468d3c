//! People: validated ages and names, assembled by a type-state builder
//!
//! ```rust,ignore
//! use modelkit_exercises::person::{Age, Name, PersonBuilder};
//!
//! let ada = PersonBuilder::empty()
//!     .with_age(Age::parse("42")?)
//!     .with_name(Name::new("Ada")?)
//!     .build();
//! ```

use std::fmt;

use modelkit_validator::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// AGE
// ============================================================================

refinement! {
    /// Whole years between 0 and 120.
    pub AgeRules for i64 => [at_least(0), at_most(120)]
}

/// A person's age in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(Validated<i64, AgeRules>);

impl Age {
    /// Validates a numeric age.
    pub fn new(years: i64) -> ValidationResult<Self> {
        Validated::new(years).map(Self)
    }

    /// Parses and validates an age from text.
    ///
    /// Text that is not an integer fails the `integer` rule.
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let years = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationFailure::rule_violated("integer"))?;
        Self::new(years)
    }

    /// The age in years.
    pub fn years(self) -> i64 {
        *self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ============================================================================
// NAME
// ============================================================================

refinement! {
    /// Non-blank names of at most 64 characters.
    pub NameRules for str => [non_empty(), max_chars(64)]
}

/// A person's display name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(Validated<String, NameRules>);

impl Name {
    /// Validates a name.
    pub fn new(raw: impl Into<String>) -> ValidationResult<Self> {
        Validated::new(raw.into()).map(Self)
    }

    /// The name as text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PERSON
// ============================================================================

/// A person with a valid name and age.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    age: Age,
}

impl Person {
    /// The person's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The person's age.
    pub fn age(&self) -> Age {
        self.age
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

marks!(
    /// `age` was supplied.
    pub AgeSet,
    /// `name` was supplied.
    pub NameSet,
);

/// Type-state builder for [`Person`].
///
/// `build` only exists once both [`AgeSet`] and [`NameSet`] are marked;
/// `try_build` works on any state.
#[derive(Debug, Clone)]
pub struct PersonBuilder<A: FieldState = Unset, N: FieldState = Unset> {
    age: A::Slot<Age>,
    name: N::Slot<Name>,
}

impl PersonBuilder {
    /// A builder with no fields supplied.
    pub fn empty() -> Self {
        Self { age: (), name: () }
    }
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: FieldState, N: FieldState> PersonBuilder<A, N> {
    /// Sets the age. Setting it again replaces the previous value.
    pub fn with_age(&self, age: Age) -> PersonBuilder<AgeSet, N> {
        PersonBuilder {
            age,
            name: self.name.clone(),
        }
    }

    /// Sets the name. Setting it again replaces the previous value.
    pub fn with_name(&self, name: Name) -> PersonBuilder<A, NameSet> {
        PersonBuilder {
            age: self.age.clone(),
            name,
        }
    }

    /// Marks already supplied, in declaration order.
    pub fn marks(&self) -> MarkSet {
        [(AgeSet::NAME, A::SUPPLIED), (NameSet::NAME, N::SUPPLIED)]
            .into_iter()
            .filter(|(_, supplied)| *supplied)
            .map(|(name, _)| name)
            .collect()
    }

    /// Builds the person if every field was supplied.
    ///
    /// # Errors
    ///
    /// [`IncompleteBuilder`] listing the missing marks.
    pub fn try_build(&self) -> Result<Person, IncompleteBuilder> {
        if let (Some(age), Some(name)) = (A::peek::<Age>(&self.age), N::peek::<Name>(&self.name)) {
            return Ok(Person { name, age });
        }
        let missing = MarkSet::missing([(AgeSet::NAME, A::SUPPLIED), (NameSet::NAME, N::SUPPLIED)]);
        tracing::debug!(%missing, "person builder is incomplete");
        Err(IncompleteBuilder::new(missing))
    }
}

impl PersonBuilder<AgeSet, NameSet> {
    /// Builds the person.
    pub fn build(&self) -> Person {
        Person {
            name: self.name.clone(),
            age: self.age,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("0", 0)]
    #[case("120", 120)]
    #[case(" 42 ", 42)]
    fn test_age_parse_valid(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(Age::parse(raw).unwrap().years(), expected);
    }

    #[rstest]
    #[case("121", "<=120")]
    #[case("-1", ">=0")]
    #[case("forty", "integer")]
    #[case("", "integer")]
    fn test_age_parse_invalid(#[case] raw: &str, #[case] rule: &str) {
        assert_eq!(Age::parse(raw).unwrap_err().rule_name(), Some(rule));
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(Name::new("Ada").unwrap().as_str(), "Ada");
        assert_eq!(Name::new(" ").unwrap_err().rule_name(), Some("non_empty"));
        assert_eq!(
            Name::new("x".repeat(65)).unwrap_err().rule_name(),
            Some("max_chars(64)")
        );
    }

    #[test]
    fn test_build_person() {
        let person = PersonBuilder::empty()
            .with_age(Age::new(42).unwrap())
            .with_name(Name::new("Ada").unwrap())
            .build();
        assert_eq!(person.to_string(), "Ada (42)");
        assert_eq!(person.age().years(), 42);
    }

    #[test]
    fn test_marks_track_supplied_fields() {
        let builder = PersonBuilder::empty().with_name(Name::new("Ada").unwrap());
        assert_eq!(builder.marks().to_string(), "{NameSet}");
        assert!(PersonBuilder::default().marks().is_empty());
    }

    #[test]
    fn test_serde_revalidates_age() {
        let person = PersonBuilder::empty()
            .with_age(Age::new(7).unwrap())
            .with_name(Name::new("Tom").unwrap())
            .build();
        let json = serde_json::to_string(&person).unwrap();
        assert_eq!(json, r#"{"name":"Tom","age":7}"#);
        assert!(serde_json::from_str::<Person>(r#"{"name":"Tom","age":700}"#).is_err());
    }
}
