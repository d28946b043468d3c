//! Discriminated variants - closed enumerations built from loose raw data
//!
//! Two shapes of loosely-typed input show up again and again:
//!
//! - **Optional-field soup**: a record with several optional fields of which
//!   exactly one should be present (`device_id` *or* `user_id`). [`exactly_one`]
//!   selects the single present piece of evidence and rejects zero or several.
//! - **Stringly-typed discriminants**: a `"visa"` / `"amex"` tag.
//!   [`Discriminant::from_tag`] maps it onto a closed enum.
//!
//! Types that classify a whole raw record implement [`Classify`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use modelkit_validator::variant::exactly_one;
//!
//! enum Source { Device(String), User(String) }
//!
//! let source = exactly_one([
//!     ("device_id", Some("d1".to_owned()).map(Source::Device)),
//!     ("user_id", None::<String>.map(Source::User)),
//! ])?;
//! ```

use crate::foundation::{ClassificationFailure, Evidence};

// ============================================================================
// CLASSIFY
// ============================================================================

/// A closed sum type that can be built from a loosely-typed raw record.
///
/// The produced variant keeps only the fields relevant to its case; evidence
/// for other cases is dropped, not carried along as `None`.
pub trait Classify: Sized {
    /// The raw, loosely-typed input.
    type Raw;

    /// Selects the single case `raw` describes.
    ///
    /// # Errors
    ///
    /// [`ClassificationFailure::AmbiguousOrMissingVariant`] when the raw data
    /// holds evidence for no case or for several, and
    /// [`ClassificationFailure::InvalidEvidence`] when the single piece of
    /// evidence fails validation.
    fn classify(raw: Self::Raw) -> Result<Self, ClassificationFailure>;
}

/// Returns the only candidate that is `Some`.
///
/// Each candidate is named after the evidence it represents; the names of all
/// present candidates are reported when more than one is present.
///
/// # Errors
///
/// [`ClassificationFailure::AmbiguousOrMissingVariant`] if zero or more than
/// one candidate is `Some`.
pub fn exactly_one<V>(
    candidates: impl IntoIterator<Item = (&'static str, Option<V>)>,
) -> Result<V, ClassificationFailure> {
    let mut present = Evidence::new();
    let mut selected = None;

    for (name, candidate) in candidates {
        if let Some(value) = candidate {
            present.push(name);
            selected = Some(value);
        }
    }

    match selected {
        Some(value) if present.len() == 1 => Ok(value),
        Some(_) | None => Err(ClassificationFailure::AmbiguousOrMissingVariant { present }),
    }
}

// ============================================================================
// DISCRIMINANT
// ============================================================================

/// A closed, finite set of case identities with stable text tags.
///
/// Usually declared with [`discriminant!`](crate::discriminant).
pub trait Discriminant: Sized + Copy + 'static {
    /// Every case, in declaration order.
    const ALL: &'static [Self];

    /// The case's canonical tag.
    fn tag(self) -> &'static str;

    /// Maps a raw tag onto a case.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// [`ClassificationFailure::UnknownTag`] if no case has this tag.
    fn from_tag(raw: &str) -> Result<Self, ClassificationFailure> {
        let needle = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|case| case.tag().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ClassificationFailure::unknown_tag(needle))
    }

    /// All tags, in declaration order.
    fn tags() -> Vec<&'static str> {
        Self::ALL.iter().map(|case| case.tag()).collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    crate::discriminant! {
        /// Test shapes.
        enum Shape {
            Circle => "circle",
            Square => "square",
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    enum Contact {
        Phone(String),
        Mail(String),
    }

    fn contact(phone: Option<&str>, mail: Option<&str>) -> Result<Contact, ClassificationFailure> {
        exactly_one([
            ("phone", phone.map(|p| Contact::Phone(p.to_owned()))),
            ("mail", mail.map(|m| Contact::Mail(m.to_owned()))),
        ])
    }

    #[test]
    fn test_exactly_one_selects_the_present_case() {
        assert_eq!(contact(Some("555"), None), Ok(Contact::Phone("555".to_owned())));
        assert_eq!(contact(None, Some("a@b.c")), Ok(Contact::Mail("a@b.c".to_owned())));
    }

    #[test]
    fn test_exactly_one_rejects_both() {
        let err = contact(Some("555"), Some("a@b.c")).unwrap_err();
        assert!(err.is_ambiguous());
        assert_eq!(
            err,
            ClassificationFailure::ambiguous_or_missing(["phone", "mail"])
        );
    }

    #[test]
    fn test_exactly_one_rejects_neither() {
        let err = contact(None, None).unwrap_err();
        assert!(err.is_missing());
    }

    #[rstest]
    #[case("circle", Shape::Circle)]
    #[case("SQUARE", Shape::Square)]
    #[case("  Circle ", Shape::Circle)]
    fn test_from_tag(#[case] raw: &str, #[case] expected: Shape) {
        assert_eq!(Shape::from_tag(raw), Ok(expected));
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            Shape::from_tag(" hexagon "),
            Err(ClassificationFailure::unknown_tag("hexagon"))
        );
    }

    #[test]
    fn test_tags_and_display() {
        assert_eq!(Shape::tags(), vec!["circle", "square"]);
        assert_eq!(Shape::Square.to_string(), "square");
        assert_eq!("circle".parse::<Shape>(), Ok(Shape::Circle));
    }
}
