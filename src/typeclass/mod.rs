//! Type classes for the annotation algebra.
//!
//! The finger tree core is generic over the monoid used to annotate its
//! nodes; this module provides the algebra itself:
//!
//! - [`Semigroup`]: types with an associative binary operation.
//! - [`Monoid`]: semigroups with an identity element.
//! - [`Sum`], [`Product`], [`Max`], [`Min`]: newtype wrappers giving the
//!   same underlying type different algebraic readings.
//! - [`Bounded`]: extreme values, required for `Max`/`Min` monoids.

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::Bounded;
pub use wrappers::Max;
pub use wrappers::Min;
pub use wrappers::Product;
pub use wrappers::Sum;
