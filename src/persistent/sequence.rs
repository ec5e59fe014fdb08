//! The finger-tree-backed persistent sequence.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use super::seq::{Seq, SeqError, SeqVisitor};
use crate::fingertree::{Elem, FingerTree};
use crate::typeclass::{Monoid, Semigroup};

// =============================================================================
// PersistentSequence
// =============================================================================

/// A persistent random-access sequence.
///
/// Backed by a [`FingerTree`] whose elements are measured by count, so the
/// cached annotations double as subtree sizes:
///
/// - [`cons`](Seq::cons) / [`snoc`](Seq::snoc) / [`head`](Seq::head) /
///   [`tail`](Seq::tail): amortized O(1)
/// - [`get`](Seq::get) / [`set`](Seq::set): O(log n)
/// - [`concat`](Seq::concat): O(log(min(m, n)))
/// - [`size`](Seq::size): O(1)
///
/// Every mutator returns a new sequence sharing structure with the old one;
/// no operation invalidates an existing version.
///
/// # Examples
///
/// ```rust
/// use fingerseq::persistent::{PersistentSequence, Seq};
///
/// let sequence = PersistentSequence::new().cons(2).cons(1).cons(0);
/// assert_eq!(sequence.size(), 3);
/// assert_eq!(sequence.head(), Ok(&0));
///
/// let updated = sequence.set(1, 9)?;
/// assert_eq!(updated.get(1), Ok(&9));
/// assert_eq!(sequence.get(1), Ok(&1));
/// # Ok::<(), fingerseq::persistent::SeqError>(())
/// ```
pub struct PersistentSequence<T> {
    tree: FingerTree<Elem<T>>,
}

impl<T> PersistentSequence<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: FingerTree::new(),
        }
    }

    /// Creates a sequence holding a single element.
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self {
            tree: FingerTree::singleton(Elem::new(value)),
        }
    }

    /// Returns the number of elements. O(1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` when the sequence holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the last element, or `None` when empty. O(1).
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tree.last().map(|elem| &elem.0)
    }

    /// Splits off the first element, returning it with the rest of the
    /// sequence. Amortized O(1); `None` when empty.
    #[must_use]
    pub fn pop_front(&self) -> Option<(&T, Self)> {
        let (elem, rest) = self.tree.view_left()?;
        Some((&elem.0, Self { tree: rest }))
    }

    /// Splits off the last element, returning it with the rest of the
    /// sequence. Amortized O(1); `None` when empty.
    #[must_use]
    pub fn pop_back(&self) -> Option<(&T, Self)> {
        let (elem, rest) = self.tree.view_right()?;
        Some((&elem.0, Self { tree: rest }))
    }

    /// Returns an iterator over the elements in left-to-right order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            sequence: self,
            front: 0,
            back: self.len(),
        }
    }
}

impl<T: Clone> PersistentSequence<T> {
    /// Builds a sequence from a slice, cloning the elements.
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self {
        elements.iter().cloned().collect()
    }
}

impl<T> Seq<T> for PersistentSequence<T> {
    fn size(&self) -> usize {
        self.len()
    }

    fn head(&self) -> Result<&T, SeqError> {
        self.tree
            .head()
            .map(|elem| &elem.0)
            .ok_or(SeqError::OutOfRange { index: 0, size: 0 })
    }

    fn tail(&self) -> Result<Self, SeqError> {
        self.tree
            .tail()
            .map(|tree| Self { tree })
            .ok_or(SeqError::OutOfRange { index: 0, size: 0 })
    }

    fn cons(&self, value: T) -> Self {
        Self {
            tree: self.tree.cons(Elem::new(value)),
        }
    }

    fn snoc(&self, value: T) -> Self {
        Self {
            tree: self.tree.snoc(Elem::new(value)),
        }
    }

    fn get(&self, index: usize) -> Result<&T, SeqError> {
        self.tree
            .get(index)
            .map(|elem| &elem.0)
            .ok_or(SeqError::OutOfRange {
                index,
                size: self.len(),
            })
    }

    fn set(&self, index: usize, value: T) -> Result<Self, SeqError> {
        self.tree
            .set(index, Elem::new(value))
            .map(|tree| Self { tree })
            .ok_or(SeqError::OutOfRange {
                index,
                size: self.len(),
            })
    }

    fn concat(&self, other: &Self) -> Result<Self, SeqError> {
        Ok(Self {
            tree: self.tree.concat(&other.tree),
        })
    }

    fn accept<V: SeqVisitor<T>>(&self, visitor: &mut V) {
        visitor.before(self.len());
        self.tree.for_each(|elem| visitor.visit(&elem.0));
        visitor.after();
    }
}

// =============================================================================
// Algebra
// =============================================================================

/// Sequences form a semigroup under concatenation.
impl<T> Semigroup for PersistentSequence<T> {
    fn combine(self, other: Self) -> Self {
        Self {
            tree: self.tree.concat(&other.tree),
        }
    }
}

/// The empty sequence is the identity of concatenation.
impl<T> Monoid for PersistentSequence<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

// Manual impl to avoid requiring T: Clone; versions share structure.
impl<T> Clone for PersistentSequence<T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<T> Default for PersistentSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for PersistentSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentSequence<T> {}

impl<T: Hash> Hash for PersistentSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> FromIterator<T> for PersistentSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .fold(Self::new(), |sequence, value| sequence.snoc(value))
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`PersistentSequence`].
///
/// Walks by index, so each step is O(log n); the ends converge, which makes
/// the reverse direction available through [`DoubleEndedIterator`].
pub struct Iter<'a, T> {
    sequence: &'a PersistentSequence<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.sequence.tree.get(self.front).map(|elem| &elem.0);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.sequence.tree.get(self.back).map(|elem| &elem.0)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a PersistentSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`PersistentSequence`].
///
/// Elements live behind shared counters, so yielding by value clones them.
pub struct IntoIter<T> {
    sequence: PersistentSequence<T>,
    front: usize,
    back: usize,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.sequence.tree.get(self.front).map(|elem| elem.0.clone());
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.sequence.tree.get(self.back).map(|elem| elem.0.clone())
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}
impl<T: Clone> FusedIterator for IntoIter<T> {}

impl<T: Clone> IntoIterator for PersistentSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let back = self.len();
        IntoIter {
            sequence: self,
            front: 0,
            back,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
