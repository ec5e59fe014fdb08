//! Numeric wrapper types for different algebraic operations.
//!
//! This module provides newtype wrappers that allow the same underlying type
//! to have different `Semigroup` and `Monoid` implementations. For example,
//! integers can be combined using addition (`Sum`) or multiplication
//! (`Product`).
//!
//! # Available Wrappers
//!
//! - [`Sum`]: Addition-based semigroup/monoid (identity: 0)
//! - [`Product`]: Multiplication-based semigroup/monoid (identity: 1)
//! - [`Max`]: Maximum-based semigroup (identity: type minimum)
//! - [`Min`]: Minimum-based semigroup (identity: type maximum)
//!
//! # The Bounded Trait
//!
//! The [`Bounded`] trait provides minimum and maximum values for types,
//! which is necessary for `Max` and `Min` to have monoid instances.

// =============================================================================
// Sum Wrapper
// =============================================================================

/// A newtype wrapper that represents the additive semigroup/monoid.
///
/// When used with `Semigroup`, `Sum(a).combine(Sum(b))` equals `Sum(a + b)`.
/// When used with `Monoid`, the identity element is `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use fingerseq::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// A newtype wrapper that represents the multiplicative semigroup/monoid.
///
/// When used with `Semigroup`, `Product(a).combine(Product(b))` equals
/// `Product(a * b)`. When used with `Monoid`, the identity element is
/// `Product(1)`.
///
/// # Examples
///
/// ```rust
/// use fingerseq::typeclass::{Product, Semigroup};
///
/// assert_eq!(Product::new(3).combine(Product::new(5)), Product(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Max Wrapper
// =============================================================================

/// A newtype wrapper that combines by keeping the maximum value.
///
/// When used with `Monoid` (requires `Bounded`), the identity element is
/// the type's minimum value.
///
/// # Examples
///
/// ```rust
/// use fingerseq::typeclass::{Max, Semigroup};
///
/// assert_eq!(Max::new(3).combine(Max::new(5)), Max(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<A>(pub A);

impl<A> Max<A> {
    /// Creates a new `Max` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Max` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Max<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Min Wrapper
// =============================================================================

/// A newtype wrapper that combines by keeping the minimum value.
///
/// When used with `Monoid` (requires `Bounded`), the identity element is
/// the type's maximum value.
///
/// # Examples
///
/// ```rust
/// use fingerseq::typeclass::{Min, Semigroup};
///
/// assert_eq!(Min::new(3).combine(Min::new(5)), Min(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<A>(pub A);

impl<A> Min<A> {
    /// Creates a new `Min` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Min` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Min<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Bounded Trait
// =============================================================================

/// Types with a minimum and a maximum value.
///
/// # Implementing Bounded
///
/// For custom types, implement `Bounded` by providing the extreme values:
///
/// ```rust
/// use fingerseq::typeclass::Bounded;
///
/// #[derive(PartialEq, Eq, PartialOrd, Ord)]
/// struct Score(u8);
///
/// impl Bounded for Score {
///     const MIN_VALUE: Self = Score(0);
///     const MAX_VALUE: Self = Score(100);
/// }
/// ```
pub trait Bounded {
    /// The smallest value of this type.
    const MIN_VALUE: Self;
    /// The largest value of this type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded {
    ($($type:ty)*) => {
        $(
            impl Bounded for $type {
                const MIN_VALUE: Self = <$type>::MIN;
                const MAX_VALUE: Self = <$type>::MAX;
            }
        )*
    };
}

impl_bounded!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize char);

// =============================================================================
// Tests
// =============================================================================
