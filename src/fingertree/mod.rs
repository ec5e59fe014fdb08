//! The monoid-annotated 2-3 finger tree core.
//!
//! This module implements the data structure described in Hinze & Paterson's
//! "Finger Trees: A Simple General-purpose Data Structure" (2006): a purely
//! functional sequence representation with amortized O(1) push/pop at both
//! ends, O(log n) indexed access, and O(log(min(m,n))) concatenation.
//!
//! # Structure
//!
//! A finger tree level is one of:
//!
//! - `Empty`: no fragments, measure is the monoid identity
//! - `Single`: exactly one fragment
//! - `Deep`: a left [`Digit`] (1-4 fragments), a middle tree whose fragments
//!   are 2-3 [`Node`] groupings one level deeper, and a right `Digit`
//!
//! The boundary digits are the "fingers" that give O(1) access to both ends;
//! digit overflow packs three fragments into a `Node3` pushed into the
//! middle, and digit underflow borrows a node back out, which is what keeps
//! every level balanced without rotation logic.
//!
//! # Measures
//!
//! Every fragment carries a cached annotation in an arbitrary [`Monoid`],
//! computed once at construction by combining child annotations in
//! left-to-right order. Plugging in the element-count [`Size`] monoid yields
//! a random-access sequence; other monoids (for example [`Max`] over a
//! priority field) turn the same tree skeleton into other indexes.
//!
//! # Sharing
//!
//! Every node is immutable once constructed and shared between tree versions
//! through reference counting; a mutation allocates only along the touched
//! path.
//!
//! [`Digit`]: digit::Digit
//! [`Node`]: node::Node
//! [`Monoid`]: crate::typeclass::Monoid
//! [`Max`]: crate::typeclass::Max

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod concat;
mod digit;
mod measured;
mod node;
mod tree;

pub use measured::Elem;
pub use measured::Measured;
pub use measured::Size;
pub use tree::FingerTree;

// =============================================================================
// Tests
// =============================================================================
