//! Macros for declaring tags, marks and discriminants with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`refinement!`] - Declare a validation tag bound to a rule set
//! - [`marks!`] - Declare type-state builder marks
//! - [`discriminant!`] - Declare a closed enum with text tags
//!
//! # Examples
//!
//! ```rust,ignore
//! use modelkit_validator::prelude::*;
//!
//! refinement! {
//!     /// A display name.
//!     pub NameRules for str => [non_empty(), max_chars(64)]
//! }
//!
//! marks!(pub NameSet, pub AgeSet);
//!
//! discriminant! {
//!     pub enum CardNetwork {
//!         Visa => "visa",
//!         Amex => "amex",
//!     }
//! }
//! ```

// ============================================================================
// REFINEMENT MACRO
// ============================================================================

/// Declares a zero-sized validation tag and its [`Refinement`] impl.
///
/// The tag's `NAME` is the identifier itself. Rules are applied in the order
/// listed. An empty list compiles but every value is then rejected with
/// `EmptyRuleSet`.
///
/// ```rust,ignore
/// refinement! {
///     /// Ages between 0 and 120.
///     pub AgeRules for i64 => [at_least(0), at_most(120)]
/// }
///
/// type Age = Validated<i64, AgeRules>;
/// ```
///
/// [`Refinement`]: crate::refined::Refinement
#[macro_export]
macro_rules! refinement {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $raw:ty => [ $($rule:expr),* $(,)? ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        $vis struct $name;

        impl $crate::refined::Refinement for $name {
            type Raw = $raw;
            const NAME: &'static str = stringify!($name);

            fn rules() -> $crate::rules::RuleSet<$raw> {
                $crate::rules::RuleSet::new()
                    $(.with($rule))*
            }
        }
    };
}

// ============================================================================
// MARKS MACRO
// ============================================================================

/// Declares type-state builder marks.
///
/// Each mark is a zero-sized type implementing
/// [`FieldState`](crate::typestate::FieldState) (its slot holds the field
/// value) and [`Mark`](crate::typestate::Mark) (its name is the identifier).
///
/// ```rust,ignore
/// marks!(
///     /// `name` was supplied.
///     pub NameSet,
///     /// `age` was supplied.
///     pub AgeSet,
/// );
/// ```
#[macro_export]
macro_rules! marks {
    ($( $(#[$meta:meta])* $vis:vis $name:ident ),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct $name;

            impl $crate::typestate::FieldState for $name {
                const SUPPLIED: bool = true;

                type Slot<T: ::core::clone::Clone + ::core::fmt::Debug> = T;

                fn peek<T: ::core::clone::Clone + ::core::fmt::Debug>(
                    slot: &Self::Slot<T>,
                ) -> ::core::option::Option<T> {
                    ::core::option::Option::Some(slot.clone())
                }
            }

            impl $crate::typestate::Mark for $name {
                const NAME: &'static str = stringify!($name);
            }
        )+
    };
}

// ============================================================================
// DISCRIMINANT MACRO
// ============================================================================

/// Declares a closed enum whose cases carry stable text tags.
///
/// Generates the enum, its [`Discriminant`](crate::variant::Discriminant)
/// impl, `Display` (the tag) and `FromStr` (via `from_tag`).
///
/// ```rust,ignore
/// discriminant! {
///     /// Supported card networks.
///     pub enum CardNetwork {
///         /// 16 digits, leading 4.
///         Visa => "visa",
///         Amex => "amex",
///     }
/// }
///
/// assert_eq!("VISA".parse::<CardNetwork>()?, CardNetwork::Visa);
/// ```
#[macro_export]
macro_rules! discriminant {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::variant::Discriminant for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn tag(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::variant::Discriminant::tag(*self))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::foundation::ClassificationFailure;

            fn from_str(raw: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::variant::Discriminant>::from_tag(raw)
            }
        }
    };
}
