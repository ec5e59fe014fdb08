//! Tree fragments: leaves and the 2-3 grouping nodes.
//!
//! A fragment is what a tree level stores: either a `Leaf` holding one user
//! value (level zero) or a `Node2`/`Node3` grouping of fragments from the
//! level above. Grouping nodes cache their combined measure at construction.
//!
//! The tree's type does not track nesting depth; the invariant that every
//! fragment of a `Deep` middle is exactly one grouping level deeper is
//! maintained by construction (overflow always packs a `Node3`, borrowing
//! always unpacks through `to_digit`).

use std::fmt;

use super::ReferenceCounter;
use super::digit::Digit;
use super::measured::{Measured, Size};
use crate::typeclass::Semigroup;

pub(crate) enum Node<T: Measured> {
    Leaf(T),
    Node2 {
        measure: T::Measure,
        first: ReferenceCounter<Node<T>>,
        second: ReferenceCounter<Node<T>>,
    },
    Node3 {
        measure: T::Measure,
        first: ReferenceCounter<Node<T>>,
        second: ReferenceCounter<Node<T>>,
        third: ReferenceCounter<Node<T>>,
    },
}

impl<T: Measured> Node<T> {
    /// Groups two fragments, caching the combined measure.
    pub(crate) fn node2(
        first: ReferenceCounter<Self>,
        second: ReferenceCounter<Self>,
    ) -> Self {
        let measure = first.measure().combine(second.measure());
        Self::Node2 {
            measure,
            first,
            second,
        }
    }

    /// Groups three fragments, caching the combined measure.
    pub(crate) fn node3(
        first: ReferenceCounter<Self>,
        second: ReferenceCounter<Self>,
        third: ReferenceCounter<Self>,
    ) -> Self {
        let measure = first
            .measure()
            .combine(second.measure())
            .combine(third.measure());
        Self::Node3 {
            measure,
            first,
            second,
            third,
        }
    }

    pub(crate) fn measure(&self) -> T::Measure {
        match self {
            Self::Leaf(value) => value.measure(),
            Self::Node2 { measure, .. } | Self::Node3 { measure, .. } => measure.clone(),
        }
    }

    /// Re-exposes a grouping node's fragments as a digit.
    ///
    /// Used when a view borrows a node from the middle tree to refill an
    /// exhausted boundary digit. Leaves are never borrowed this way: the
    /// middle of a `Deep` holds grouping nodes only.
    pub(crate) fn to_digit(&self) -> Digit<T> {
        match self {
            Self::Node2 { first, second, .. } => Digit::Two(first.clone(), second.clone()),
            Self::Node3 {
                first,
                second,
                third,
                ..
            } => Digit::Three(first.clone(), second.clone(), third.clone()),
            Self::Leaf(_) => unreachable!("a leaf is never borrowed from a middle tree"),
        }
    }

    /// Returns the leftmost leaf value under this fragment.
    pub(crate) fn first_value(&self) -> &T {
        match self {
            Self::Leaf(value) => value,
            Self::Node2 { first, .. } | Self::Node3 { first, .. } => first.first_value(),
        }
    }

    /// Returns the rightmost leaf value under this fragment.
    pub(crate) fn last_value(&self) -> &T {
        match self {
            Self::Leaf(value) => value,
            Self::Node2 { second: last, .. } | Self::Node3 { third: last, .. } => {
                last.last_value()
            }
        }
    }

    /// Visits every leaf value under this fragment in left-to-right order.
    pub(crate) fn for_each<F: FnMut(&T)>(&self, visit: &mut F) {
        match self {
            Self::Leaf(value) => visit(value),
            Self::Node2 { first, second, .. } => {
                first.for_each(visit);
                second.for_each(visit);
            }
            Self::Node3 {
                first,
                second,
                third,
                ..
            } => {
                first.for_each(visit);
                second.for_each(visit);
                third.for_each(visit);
            }
        }
    }
}

// Indexed access, available when the annotation is the element count.
impl<T: Measured<Measure = Size>> Node<T> {
    pub(crate) fn size(&self) -> usize {
        self.measure().value()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        match self {
            Self::Leaf(value) => (index < value.measure().value()).then_some(value),
            Self::Node2 { first, second, .. } => {
                let first_size = first.size();
                if index < first_size {
                    first.get(index)
                } else {
                    second.get(index - first_size)
                }
            }
            Self::Node3 {
                first,
                second,
                third,
                ..
            } => {
                let first_size = first.size();
                if index < first_size {
                    return first.get(index);
                }
                let index = index - first_size;
                let second_size = second.size();
                if index < second_size {
                    second.get(index)
                } else {
                    third.get(index - second_size)
                }
            }
        }
    }

    pub(crate) fn set(&self, index: usize, value: T) -> Option<Self> {
        match self {
            Self::Leaf(existing) => {
                (index < existing.measure().value()).then(|| Self::Leaf(value))
            }
            Self::Node2 { first, second, .. } => {
                let first_size = first.size();
                if index < first_size {
                    first
                        .set(index, value)
                        .map(|updated| Self::node2(ReferenceCounter::new(updated), second.clone()))
                } else {
                    second
                        .set(index - first_size, value)
                        .map(|updated| Self::node2(first.clone(), ReferenceCounter::new(updated)))
                }
            }
            Self::Node3 {
                first,
                second,
                third,
                ..
            } => {
                let first_size = first.size();
                if index < first_size {
                    return first.set(index, value).map(|updated| {
                        Self::node3(
                            ReferenceCounter::new(updated),
                            second.clone(),
                            third.clone(),
                        )
                    });
                }
                let index = index - first_size;
                let second_size = second.size();
                if index < second_size {
                    second.set(index, value).map(|updated| {
                        Self::node3(
                            first.clone(),
                            ReferenceCounter::new(updated),
                            third.clone(),
                        )
                    })
                } else {
                    third.set(index - second_size, value).map(|updated| {
                        Self::node3(
                            first.clone(),
                            second.clone(),
                            ReferenceCounter::new(updated),
                        )
                    })
                }
            }
        }
    }
}

impl<T: Measured + fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(value) => f.debug_tuple("Leaf").field(value).finish(),
            Self::Node2 { first, second, .. } => f
                .debug_struct("Node2")
                .field("first", first)
                .field("second", second)
                .finish(),
            Self::Node3 {
                first,
                second,
                third,
                ..
            } => f
                .debug_struct("Node3")
                .field("first", first)
                .field("second", second)
                .field("third", third)
                .finish(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
