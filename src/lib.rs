//! # fingerseq
//!
//! Persistent (immutable) sequences built on a monoid-annotated 2-3 finger
//! tree, as described in Hinze & Paterson's "Finger Trees: A Simple
//! General-purpose Data Structure" (2006).
//!
//! ## Overview
//!
//! Every mutating operation returns a new version of the structure and
//! leaves all prior versions intact. Unmodified subtrees are shared between
//! versions, so an update allocates only along the path it touches.
//!
//! The crate is layered:
//!
//! - **Type Classes**: `Semigroup` and `Monoid` — the annotation algebra —
//!   plus the `Sum`/`Product`/`Max`/`Min` newtype wrappers.
//! - **Finger Tree Core**: the generic [`fingertree::FingerTree`],
//!   parameterized over any [`fingertree::Measured`] element type, with
//!   amortized O(1) access at both ends, O(log n) indexed access, and
//!   O(log(min(m,n))) concatenation.
//! - **Persistent Sequences**: [`persistent::PersistentSequence`], the tree
//!   instantiated with the element-count [`fingertree::Size`] monoid.
//!
//! ## Example
//!
//! ```rust
//! use fingerseq::persistent::{PersistentSequence, Seq};
//!
//! let seq = PersistentSequence::new().cons(2).cons(1).cons(0);
//! assert_eq!(seq.size(), 3);
//! assert_eq!(seq.head(), Ok(&0));
//!
//! // Structural sharing: the original sequence is preserved
//! let extended = seq.snoc(3);
//! assert_eq!(seq.size(), 3);      // Original unchanged
//! assert_eq!(extended.size(), 4); // New sequence
//! ```
//!
//! ## Feature Flags
//!
//! - `arc`: share subtrees through `Arc` instead of `Rc`, making trees
//!   `Send + Sync` at the cost of atomic reference counting.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fingerseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::fingertree::*;
    pub use crate::persistent::*;
    pub use crate::typeclass::*;
}

pub mod fingertree;
pub mod persistent;
pub mod typeclass;
