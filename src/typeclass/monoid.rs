//! Monoid type class - semigroups with an identity element.
//!
//! A type `T` is a monoid if it has:
//!
//! 1. An associative binary operation `combine: (T, T) -> T` (from Semigroup)
//! 2. An identity element `empty: T` such that for all `a`:
//!    - `empty.combine(a) == a` (left identity)
//!    - `a.combine(empty) == a` (right identity)
//!
//! The finger tree annotates every node with a monoid value; the identity
//! element is the measure of the empty tree.
//!
//! # Examples
//!
//! ```rust
//! use fingerseq::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// In addition to Semigroup associativity, for all `a`:
///
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use fingerseq::typeclass::{Monoid, Semigroup};
///
/// let value = String::from("hello");
/// assert_eq!(String::empty().combine(value.clone()), value);
/// assert_eq!(value.clone().combine(String::empty()), value);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity
    /// element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingerseq::typeclass::{Monoid, Sum};
    ///
    /// let values = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
    /// assert_eq!(Sum::combine_all(values), Sum::new(6));
    ///
    /// // Empty iterator returns the identity element
    /// let empty: Vec<Sum<i32>> = vec![];
    /// assert_eq!(Sum::combine_all(empty), Sum::empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

/// Option forms a monoid when its inner type is a semigroup.
/// The identity element is `None`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

/// The unit type forms a trivial monoid with `()` as the identity.
impl Monoid for () {
    fn empty() -> Self {}
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

/// Sum forms a monoid under addition with 0 as the identity.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

/// Product forms a monoid under multiplication with 1 as the identity.
///
/// Implemented per integer type since `Default` would give 0, not 1.
macro_rules! impl_product_monoid {
    ($($type:ty)*) => {
        $(
            impl Monoid for Product<$type> {
                fn empty() -> Self {
                    Self(1)
                }
            }
        )*
    };
}

impl_product_monoid!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

/// Max forms a monoid with the minimum bound as the identity.
impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

/// Min forms a monoid with the maximum bound as the identity.
impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property-Based Tests
// =============================================================================
