//! Type-state builder support
//!
//! A type-state builder carries one generic parameter per required field.
//! Each parameter is either [`Unset`] or that field's *mark* type (declared
//! with [`marks!`](crate::marks)), and each field is stored in the slot the
//! parameter selects: `()` while unset, the value itself once set.
//!
//! Setters return a new builder with the field's parameter switched to its
//! mark. The terminal `build` is only implemented for the state where every
//! parameter is a mark, so building early does not compile. For callers that
//! hold a builder whose state is not statically known, `try_build` is
//! available on every state and reports the missing marks through
//! [`IncompleteBuilder`](crate::foundation::IncompleteBuilder).
//!
//! # Examples
//!
//! ```rust,ignore
//! use modelkit_validator::prelude::*;
//!
//! marks!(
//!     /// `width` was supplied.
//!     pub WidthSet,
//!     /// `height` was supplied.
//!     pub HeightSet,
//! );
//!
//! #[derive(Debug, Clone)]
//! pub struct SizeBuilder<W: FieldState = Unset, H: FieldState = Unset> {
//!     width: W::Slot<u32>,
//!     height: H::Slot<u32>,
//! }
//!
//! impl SizeBuilder {
//!     pub fn empty() -> Self { Self { width: (), height: () } }
//! }
//!
//! impl<W: FieldState, H: FieldState> SizeBuilder<W, H> {
//!     pub fn with_width(&self, width: u32) -> SizeBuilder<WidthSet, H> {
//!         SizeBuilder { width, height: self.height.clone() }
//!     }
//!
//!     pub fn try_build(&self) -> Result<Size, IncompleteBuilder> {
//!         if let (Some(width), Some(height)) = (W::peek(&self.width), H::peek(&self.height)) {
//!             return Ok(Size { width, height });
//!         }
//!         Err(IncompleteBuilder::new(MarkSet::missing([
//!             (WidthSet::NAME, W::SUPPLIED),
//!             (HeightSet::NAME, H::SUPPLIED),
//!         ])))
//!     }
//! }
//!
//! impl SizeBuilder<WidthSet, HeightSet> {
//!     pub fn build(&self) -> Size {
//!         Size { width: self.width, height: self.height }
//!     }
//! }
//! ```

use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// FIELD STATES
// ============================================================================

/// The state of one builder field: [`Unset`] or a mark type.
///
/// Implemented by [`Unset`] and by every type declared with
/// [`marks!`](crate::marks).
pub trait FieldState: Copy + fmt::Debug + Default {
    /// `true` for mark types, `false` for [`Unset`].
    const SUPPLIED: bool;

    /// Storage for a field of type `T` in this state.
    type Slot<T: Clone + fmt::Debug>: Clone + fmt::Debug;

    /// Reads the stored value, if any.
    fn peek<T: Clone + fmt::Debug>(slot: &Self::Slot<T>) -> Option<T>;
}

/// A field mark: the type-level proof that one field was supplied.
pub trait Mark: FieldState {
    /// The mark's name, e.g. `"NameSet"`.
    const NAME: &'static str;
}

/// The state of a field that has not been supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unset;

impl FieldState for Unset {
    const SUPPLIED: bool = false;

    type Slot<T: Clone + fmt::Debug> = ();

    fn peek<T: Clone + fmt::Debug>(_slot: &Self::Slot<T>) -> Option<T> {
        None
    }
}

// ============================================================================
// MARK SET
// ============================================================================

/// An ordered set of mark names.
///
/// Used to report which marks an incomplete builder is still missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MarkSet {
    marks: SmallVec<[&'static str; 4]>,
}

impl MarkSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the names of the marks whose `supplied` flag is `false`.
    ///
    /// Pass the builder's marks in declaration order; the result keeps it.
    pub fn missing(marks: impl IntoIterator<Item = (&'static str, bool)>) -> Self {
        marks
            .into_iter()
            .filter(|(_, supplied)| !supplied)
            .map(|(name, _)| name)
            .collect()
    }

    /// Adds a mark, keeping the set free of duplicates.
    pub fn insert(&mut self, mark: &'static str) {
        if !self.contains(mark) {
            self.marks.push(mark);
        }
    }

    /// Returns `true` if the mark is in the set.
    pub fn contains(&self, mark: &str) -> bool {
        self.marks.iter().any(|m| *m == mark)
    }

    /// Returns `true` if every mark of `other` is in `self`.
    pub fn is_superset(&self, other: &MarkSet) -> bool {
        other.iter().all(|mark| self.contains(mark))
    }

    /// Number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` when the set holds no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Marks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.marks.iter().copied()
    }
}

impl FromIterator<&'static str> for MarkSet {
    fn from_iter<I: IntoIterator<Item = &'static str>>(iter: I) -> Self {
        let mut set = Self::new();
        for mark in iter {
            set.insert(mark);
        }
        set
    }
}

impl fmt::Display for MarkSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.marks.join(", "))
    }
}

// ============================================================================
// TESTS
// ============================================================================
