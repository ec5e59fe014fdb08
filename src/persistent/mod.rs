//! Persistent sequence abstractions and the finger-tree-backed sequence.
//!
//! [`Seq`] is the operation set every persistent sequence offers: end
//! access, indexed access, and visitor traversal, with fallible operations
//! reporting [`SeqError`]. [`PersistentSequence`] is the production
//! implementation, backed by a [`FingerTree`](crate::fingertree::FingerTree)
//! measured in element counts.

mod seq;
mod sequence;

pub use seq::Seq;
pub use seq::SeqError;
pub use seq::SeqVisitor;
pub use sequence::IntoIter;
pub use sequence::Iter;
pub use sequence::PersistentSequence;
