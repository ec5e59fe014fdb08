//! The measure abstraction: how elements announce their annotation.

use std::fmt;

use crate::typeclass::{Monoid, Semigroup};

/// A value that can report its measure in some monoid.
///
/// Every element stored in a [`FingerTree`](super::FingerTree) implements
/// this trait; the tree combines child measures in left-to-right order and
/// caches the result on every interior node, which is what makes
/// measure-guided search (such as indexed access under [`Size`]) O(log n).
///
/// Measures are computed once at construction, so `measure` should be cheap
/// for wrapped values and is only ever a cache read for interior nodes.
///
/// # Examples
///
/// ```rust
/// use fingerseq::fingertree::{FingerTree, Measured};
/// use fingerseq::typeclass::Max;
///
/// struct Job {
///     priority: i32,
/// }
///
/// impl Measured for Job {
///     type Measure = Max<i32>;
///
///     fn measure(&self) -> Max<i32> {
///         Max::new(self.priority)
///     }
/// }
///
/// let jobs = FingerTree::new()
///     .snoc(Job { priority: 3 })
///     .snoc(Job { priority: 7 })
///     .snoc(Job { priority: 5 });
/// assert_eq!(jobs.measure(), Max::new(7));
/// ```
pub trait Measured {
    /// The monoid the measure lives in.
    type Measure: Monoid + Clone;

    /// Returns this value's measure.
    fn measure(&self) -> Self::Measure;
}

// =============================================================================
// Size Measure
// =============================================================================

/// The element-count measure: the monoid of natural numbers under addition.
///
/// Instantiating the tree with `Size`-measured elements turns the cached
/// annotations into subtree element counts, which is what routes indexed
/// access and makes `len` O(1).
///
/// # Examples
///
/// ```rust
/// use fingerseq::fingertree::Size;
/// use fingerseq::typeclass::{Monoid, Semigroup};
///
/// assert_eq!(Size::empty(), Size::ZERO);
/// assert_eq!(Size::ONE.combine(Size::ONE), Size(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Size(pub usize);

impl Size {
    /// The identity measure: the size of an empty tree.
    pub const ZERO: Self = Self(0);

    /// The measure of a single element.
    pub const ONE: Self = Self(1);

    /// Returns the underlying count.
    #[inline]
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Semigroup for Size {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Monoid for Size {
    fn empty() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static_assertions::assert_impl_all!(Size: Copy, Send, Sync, Ord);

// =============================================================================
// Elem Leaf Wrapper
// =============================================================================

/// Wraps a raw value as a size-one measured unit.
///
/// This is the leaf wrapper the sequence specialization stores in the tree:
/// any `T` becomes measurable, and its measure is always [`Size::ONE`].
///
/// # Examples
///
/// ```rust
/// use fingerseq::fingertree::{Elem, Measured, Size};
///
/// let elem = Elem::new("payload");
/// assert_eq!(elem.measure(), Size::ONE);
/// assert_eq!(elem.0, "payload");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Elem<T>(pub T);

impl<T> Elem<T> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Consumes the wrapper and returns the value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Measured for Elem<T> {
    type Measure = Size;

    fn measure(&self) -> Size {
        Size::ONE
    }
}

// =============================================================================
// Tests
// =============================================================================
