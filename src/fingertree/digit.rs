//! Boundary digits: the 1-4 fragment buffers at each end of a `Deep` level.
//!
//! Digits are what make end access O(1): the first and last fragments of the
//! sequence always live in a digit, never behind a recursive descent. A digit
//! holds at most four fragments; pushing onto a full digit overflows three of
//! them into a `Node3` for the middle tree, and popping the only fragment of
//! a digit triggers a borrow from the middle.

use std::fmt;

use smallvec::SmallVec;

use super::ReferenceCounter;
use super::measured::{Measured, Size};
use super::node::Node;
use super::tree::Tree;
use crate::typeclass::Semigroup;

pub(crate) enum Digit<T: Measured> {
    One(ReferenceCounter<Node<T>>),
    Two(ReferenceCounter<Node<T>>, ReferenceCounter<Node<T>>),
    Three(
        ReferenceCounter<Node<T>>,
        ReferenceCounter<Node<T>>,
        ReferenceCounter<Node<T>>,
    ),
    Four(
        ReferenceCounter<Node<T>>,
        ReferenceCounter<Node<T>>,
        ReferenceCounter<Node<T>>,
        ReferenceCounter<Node<T>>,
    ),
}

impl<T: Measured> Digit<T> {
    /// Combines the fragments' measures in left-to-right order.
    ///
    /// Digits are small enough that the combine is done on demand rather
    /// than cached.
    pub(crate) fn measure(&self) -> T::Measure {
        match self {
            Self::One(a) => a.measure(),
            Self::Two(a, b) => a.measure().combine(b.measure()),
            Self::Three(a, b, c) => a.measure().combine(b.measure()).combine(c.measure()),
            Self::Four(a, b, c, d) => a
                .measure()
                .combine(b.measure())
                .combine(c.measure())
                .combine(d.measure()),
        }
    }

    pub(crate) fn head(&self) -> &ReferenceCounter<Node<T>> {
        match self {
            Self::One(a) | Self::Two(a, ..) | Self::Three(a, ..) | Self::Four(a, ..) => a,
        }
    }

    pub(crate) fn last(&self) -> &ReferenceCounter<Node<T>> {
        match self {
            Self::One(a)
            | Self::Two(_, a)
            | Self::Three(_, _, a)
            | Self::Four(_, _, _, a) => a,
        }
    }

    /// Adds a fragment at the left end, or `None` when the digit is full.
    pub(crate) fn prepend(&self, fragment: ReferenceCounter<Node<T>>) -> Option<Self> {
        match self {
            Self::One(a) => Some(Self::Two(fragment, a.clone())),
            Self::Two(a, b) => Some(Self::Three(fragment, a.clone(), b.clone())),
            Self::Three(a, b, c) => {
                Some(Self::Four(fragment, a.clone(), b.clone(), c.clone()))
            }
            Self::Four(..) => None,
        }
    }

    /// Adds a fragment at the right end, or `None` when the digit is full.
    pub(crate) fn append(&self, fragment: ReferenceCounter<Node<T>>) -> Option<Self> {
        match self {
            Self::One(a) => Some(Self::Two(a.clone(), fragment)),
            Self::Two(a, b) => Some(Self::Three(a.clone(), b.clone(), fragment)),
            Self::Three(a, b, c) => {
                Some(Self::Four(a.clone(), b.clone(), c.clone(), fragment))
            }
            Self::Four(..) => None,
        }
    }

    /// Removes the leftmost fragment, returning it with the remainder.
    pub(crate) fn pop_front(&self) -> (ReferenceCounter<Node<T>>, Option<Self>) {
        match self {
            Self::One(a) => (a.clone(), None),
            Self::Two(a, b) => (a.clone(), Some(Self::One(b.clone()))),
            Self::Three(a, b, c) => (a.clone(), Some(Self::Two(b.clone(), c.clone()))),
            Self::Four(a, b, c, d) => {
                (a.clone(), Some(Self::Three(b.clone(), c.clone(), d.clone())))
            }
        }
    }

    /// Removes the rightmost fragment, returning it with the remainder.
    pub(crate) fn pop_back(&self) -> (ReferenceCounter<Node<T>>, Option<Self>) {
        match self {
            Self::One(a) => (a.clone(), None),
            Self::Two(a, b) => (b.clone(), Some(Self::One(a.clone()))),
            Self::Three(a, b, c) => (c.clone(), Some(Self::Two(a.clone(), b.clone()))),
            Self::Four(a, b, c, d) => {
                (d.clone(), Some(Self::Three(a.clone(), b.clone(), c.clone())))
            }
        }
    }

    /// Rebuilds a digit as a standalone tree.
    ///
    /// Used when a `Deep` level runs out of middle and the surviving digit
    /// must carry the whole level on its own.
    pub(crate) fn to_tree(&self) -> Tree<T> {
        match self {
            Self::One(a) => Tree::Single(a.clone()),
            Self::Two(a, b) => {
                Tree::deep(Self::One(a.clone()), Tree::empty(), Self::One(b.clone()))
            }
            Self::Three(a, b, c) => Tree::deep(
                Self::Two(a.clone(), b.clone()),
                Tree::empty(),
                Self::One(c.clone()),
            ),
            Self::Four(a, b, c, d) => Tree::deep(
                Self::Two(a.clone(), b.clone()),
                Tree::empty(),
                Self::Two(c.clone(), d.clone()),
            ),
        }
    }

    /// Returns the fragments as a flat buffer, left to right.
    pub(crate) fn fragments(&self) -> SmallVec<[ReferenceCounter<Node<T>>; 4]> {
        match self {
            Self::One(a) => SmallVec::from_iter([a.clone()]),
            Self::Two(a, b) => SmallVec::from_iter([a.clone(), b.clone()]),
            Self::Three(a, b, c) => SmallVec::from_iter([a.clone(), b.clone(), c.clone()]),
            Self::Four(a, b, c, d) => {
                SmallVec::from_iter([a.clone(), b.clone(), c.clone(), d.clone()])
            }
        }
    }

    pub(crate) fn for_each<F: FnMut(&T)>(&self, visit: &mut F) {
        match self {
            Self::One(a) => a.for_each(visit),
            Self::Two(a, b) => {
                a.for_each(visit);
                b.for_each(visit);
            }
            Self::Three(a, b, c) => {
                a.for_each(visit);
                b.for_each(visit);
                c.for_each(visit);
            }
            Self::Four(a, b, c, d) => {
                a.for_each(visit);
                b.for_each(visit);
                c.for_each(visit);
                d.for_each(visit);
            }
        }
    }
}

// Indexed access, available when the annotation is the element count.
impl<T: Measured<Measure = Size>> Digit<T> {
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        let mut index = index;
        for fragment in self.fragment_refs() {
            let size = fragment.size();
            if index < size {
                return fragment.get(index);
            }
            index -= size;
        }
        None
    }

    pub(crate) fn set(&self, index: usize, value: T) -> Option<Self> {
        let fragments = self.fragments();
        let mut index = index;
        for (position, fragment) in fragments.iter().enumerate() {
            let size = fragment.size();
            if index < size {
                let updated = fragment.set(index, value)?;
                let mut fragments = fragments.clone();
                fragments[position] = ReferenceCounter::new(updated);
                return Some(Self::from_slice(&fragments));
            }
            index -= size;
        }
        None
    }

    fn fragment_refs(&self) -> SmallVec<[&ReferenceCounter<Node<T>>; 4]> {
        match self {
            Self::One(a) => SmallVec::from_iter([a]),
            Self::Two(a, b) => SmallVec::from_iter([a, b]),
            Self::Three(a, b, c) => SmallVec::from_iter([a, b, c]),
            Self::Four(a, b, c, d) => SmallVec::from_iter([a, b, c, d]),
        }
    }

    fn from_slice(fragments: &[ReferenceCounter<Node<T>>]) -> Self {
        match fragments {
            [a] => Self::One(a.clone()),
            [a, b] => Self::Two(a.clone(), b.clone()),
            [a, b, c] => Self::Three(a.clone(), b.clone(), c.clone()),
            [a, b, c, d] => Self::Four(a.clone(), b.clone(), c.clone(), d.clone()),
            _ => unreachable!("a digit holds between one and four fragments"),
        }
    }
}

// Manual impl to avoid requiring T: Clone; only the counters are cloned.
impl<T: Measured> Clone for Digit<T> {
    fn clone(&self) -> Self {
        match self {
            Self::One(a) => Self::One(a.clone()),
            Self::Two(a, b) => Self::Two(a.clone(), b.clone()),
            Self::Three(a, b, c) => Self::Three(a.clone(), b.clone(), c.clone()),
            Self::Four(a, b, c, d) => {
                Self::Four(a.clone(), b.clone(), c.clone(), d.clone())
            }
        }
    }
}

impl<T: Measured + fmt::Debug> fmt::Debug for Digit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(a) => f.debug_tuple("One").field(a).finish(),
            Self::Two(a, b) => f.debug_tuple("Two").field(a).field(b).finish(),
            Self::Three(a, b, c) => {
                f.debug_tuple("Three").field(a).field(b).field(c).finish()
            }
            Self::Four(a, b, c, d) => f
                .debug_tuple("Four")
                .field(a)
                .field(b)
                .field(c)
                .field(d)
                .finish(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
