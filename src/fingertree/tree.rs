//! The tree spine and the public [`FingerTree`] handle.

use std::fmt;

use super::ReferenceCounter;
use super::concat;
use super::digit::Digit;
use super::measured::{Measured, Size};
use super::node::Node;
use crate::typeclass::{Monoid, Semigroup};

// =============================================================================
// Tree Spine
// =============================================================================

/// One level of the spine.
///
/// The `Deep` middle holds fragments one grouping level deeper than its
/// digits; its cached measure is the combine of left digit, middle, and
/// right digit, in that order.
pub(crate) enum Tree<T: Measured> {
    Empty,
    Single(ReferenceCounter<Node<T>>),
    Deep {
        measure: T::Measure,
        left: Digit<T>,
        middle: ReferenceCounter<Tree<T>>,
        right: Digit<T>,
    },
}

impl<T: Measured> Tree<T> {
    pub(crate) fn empty() -> Self {
        Self::Empty
    }

    /// Builds a `Deep` level, caching the combined measure.
    pub(crate) fn deep(left: Digit<T>, middle: Self, right: Digit<T>) -> Self {
        Self::deep_shared(left, ReferenceCounter::new(middle), right)
    }

    /// `deep` for a middle that is already shared.
    pub(crate) fn deep_shared(
        left: Digit<T>,
        middle: ReferenceCounter<Self>,
        right: Digit<T>,
    ) -> Self {
        let measure = left
            .measure()
            .combine(middle.measure())
            .combine(right.measure());
        Self::Deep {
            measure,
            left,
            middle,
            right,
        }
    }

    pub(crate) fn measure(&self) -> T::Measure {
        match self {
            Self::Empty => T::Measure::empty(),
            Self::Single(fragment) => fragment.measure(),
            Self::Deep { measure, .. } => measure.clone(),
        }
    }

    pub(crate) const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Pushes a fragment onto the left end.
    ///
    /// A full left digit overflows: its three rightmost fragments are packed
    /// into a `Node3` and pushed one level down, so the recursion fires at
    /// most once per level and O(1) amortized overall.
    pub(crate) fn cons_fragment(&self, fragment: ReferenceCounter<Node<T>>) -> Self {
        match self {
            Self::Empty => Self::Single(fragment),
            Self::Single(existing) => Self::deep(
                Digit::One(fragment),
                Self::Empty,
                Digit::One(existing.clone()),
            ),
            Self::Deep {
                left,
                middle,
                right,
                ..
            } => {
                if let Some(grown) = left.prepend(fragment.clone()) {
                    return Self::deep_shared(grown, middle.clone(), right.clone());
                }
                let Digit::Four(a, b, c, d) = left else {
                    unreachable!("prepend only fails on a Four digit")
                };
                let overflow = ReferenceCounter::new(Node::node3(b.clone(), c.clone(), d.clone()));
                Self::deep(
                    Digit::Two(fragment, a.clone()),
                    middle.cons_fragment(overflow),
                    right.clone(),
                )
            }
        }
    }

    /// Pushes a fragment onto the right end. Mirror of [`Self::cons_fragment`].
    pub(crate) fn snoc_fragment(&self, fragment: ReferenceCounter<Node<T>>) -> Self {
        match self {
            Self::Empty => Self::Single(fragment),
            Self::Single(existing) => Self::deep(
                Digit::One(existing.clone()),
                Self::Empty,
                Digit::One(fragment),
            ),
            Self::Deep {
                left,
                middle,
                right,
                ..
            } => {
                if let Some(grown) = right.append(fragment.clone()) {
                    return Self::deep_shared(left.clone(), middle.clone(), grown);
                }
                let Digit::Four(a, b, c, d) = right else {
                    unreachable!("append only fails on a Four digit")
                };
                let overflow = ReferenceCounter::new(Node::node3(a.clone(), b.clone(), c.clone()));
                Self::deep(
                    left.clone(),
                    middle.snoc_fragment(overflow),
                    Digit::Two(d.clone(), fragment),
                )
            }
        }
    }

    /// Splits off the leftmost fragment, returning it with the remainder.
    ///
    /// When the left digit empties, a node is borrowed from the middle and
    /// unpacked into a fresh digit; when the middle is empty too, the right
    /// digit carries the level on its own.
    pub(crate) fn view_left(&self) -> Option<(ReferenceCounter<Node<T>>, Self)> {
        match self {
            Self::Empty => None,
            Self::Single(fragment) => Some((fragment.clone(), Self::Empty)),
            Self::Deep {
                left,
                middle,
                right,
                ..
            } => {
                let (head, remainder) = left.pop_front();
                let rest = if let Some(remainder) = remainder {
                    Self::deep_shared(remainder, middle.clone(), right.clone())
                } else if let Some((borrowed, deeper)) = middle.view_left() {
                    Self::deep(borrowed.to_digit(), deeper, right.clone())
                } else {
                    right.to_tree()
                };
                Some((head, rest))
            }
        }
    }

    /// Splits off the rightmost fragment. Mirror of [`Self::view_left`].
    pub(crate) fn view_right(&self) -> Option<(ReferenceCounter<Node<T>>, Self)> {
        match self {
            Self::Empty => None,
            Self::Single(fragment) => Some((fragment.clone(), Self::Empty)),
            Self::Deep {
                left,
                middle,
                right,
                ..
            } => {
                let (last, remainder) = right.pop_back();
                let rest = if let Some(remainder) = remainder {
                    Self::deep_shared(left.clone(), middle.clone(), remainder)
                } else if let Some((borrowed, deeper)) = middle.view_right() {
                    Self::deep(left.clone(), deeper, borrowed.to_digit())
                } else {
                    left.to_tree()
                };
                Some((last, rest))
            }
        }
    }

    pub(crate) fn first_value(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Single(fragment) => Some(fragment.first_value()),
            Self::Deep { left, .. } => Some(left.head().first_value()),
        }
    }

    pub(crate) fn last_value(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Single(fragment) => Some(fragment.last_value()),
            Self::Deep { right, .. } => Some(right.last().last_value()),
        }
    }

    pub(crate) fn for_each<F: FnMut(&T)>(&self, visit: &mut F) {
        match self {
            Self::Empty => {}
            Self::Single(fragment) => fragment.for_each(visit),
            Self::Deep {
                left,
                middle,
                right,
                ..
            } => {
                left.for_each(visit);
                middle.for_each(visit);
                right.for_each(visit);
            }
        }
    }
}

// Indexed access, available when the annotation is the element count.
impl<T: Measured<Measure = Size>> Tree<T> {
    pub(crate) fn size(&self) -> usize {
        self.measure().value()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Single(fragment) => fragment.get(index),
            Self::Deep {
                left,
                middle,
                right,
                ..
            } => {
                let left_size = left.measure().value();
                if index < left_size {
                    return left.get(index);
                }
                let index = index - left_size;
                let middle_size = middle.size();
                if index < middle_size {
                    middle.get(index)
                } else {
                    right.get(index - middle_size)
                }
            }
        }
    }

    pub(crate) fn set(&self, index: usize, value: T) -> Option<Self> {
        match self {
            Self::Empty => None,
            Self::Single(fragment) => fragment
                .set(index, value)
                .map(|updated| Self::Single(ReferenceCounter::new(updated))),
            Self::Deep {
                left,
                middle,
                right,
                ..
            } => {
                let left_size = left.measure().value();
                if index < left_size {
                    return left.set(index, value).map(|updated| {
                        Self::deep_shared(updated, middle.clone(), right.clone())
                    });
                }
                let index = index - left_size;
                let middle_size = middle.size();
                if index < middle_size {
                    middle.set(index, value).map(|updated| {
                        Self::deep_shared(
                            left.clone(),
                            ReferenceCounter::new(updated),
                            right.clone(),
                        )
                    })
                } else {
                    right.set(index - middle_size, value).map(|updated| {
                        Self::deep_shared(left.clone(), middle.clone(), updated)
                    })
                }
            }
        }
    }
}

// Manual impl to avoid requiring T: Clone; only counters and measures clone.
impl<T: Measured> Clone for Tree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Single(fragment) => Self::Single(fragment.clone()),
            Self::Deep {
                measure,
                left,
                middle,
                right,
            } => Self::Deep {
                measure: measure.clone(),
                left: left.clone(),
                middle: middle.clone(),
                right: right.clone(),
            },
        }
    }
}

impl<T: Measured + fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Single(fragment) => f.debug_tuple("Single").field(fragment).finish(),
            Self::Deep {
                left,
                middle,
                right,
                ..
            } => f
                .debug_struct("Deep")
                .field("left", left)
                .field("middle", middle)
                .field("right", right)
                .finish(),
        }
    }
}

// =============================================================================
// Public Handle
// =============================================================================

/// A persistent, monoid-annotated 2-3 finger tree.
///
/// `FingerTree` is an immutable sequence of [`Measured`] values with
/// amortized O(1) access at both ends, O(log(min(m, n))) concatenation, and
/// a cached measure in the element type's monoid. Every operation returns a
/// new tree; the old one stays valid and shares structure with the new one.
///
/// When the elements are measured by [`Size`] (as with [`Elem`]), the tree
/// additionally offers O(1) [`len`](Self::len) and O(log n)
/// [`get`](Self::get)/[`set`](Self::set).
///
/// # Examples
///
/// ```rust
/// use fingerseq::fingertree::{Elem, FingerTree};
///
/// let tree = FingerTree::new()
///     .snoc(Elem::new("a"))
///     .snoc(Elem::new("b"))
///     .cons(Elem::new("z"));
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.head().map(|e| e.0), Some("z"));
/// assert_eq!(tree.last().map(|e| e.0), Some("b"));
/// ```
///
/// [`Elem`]: super::Elem
pub struct FingerTree<T: Measured> {
    root: Tree<T>,
}

impl<T: Measured> FingerTree<T> {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self { root: Tree::Empty }
    }

    /// Creates a tree holding a single value.
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self {
            root: Tree::Single(ReferenceCounter::new(Node::Leaf(value))),
        }
    }

    /// Returns `true` when the tree holds no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the combined measure of every value, in left-to-right order.
    ///
    /// O(1): the measure is cached at construction. An empty tree measures
    /// the monoid identity.
    #[must_use]
    pub fn measure(&self) -> T::Measure {
        self.root.measure()
    }

    /// Returns a tree with `value` added at the front. Amortized O(1).
    #[must_use]
    pub fn cons(&self, value: T) -> Self {
        Self {
            root: self
                .root
                .cons_fragment(ReferenceCounter::new(Node::Leaf(value))),
        }
    }

    /// Returns a tree with `value` added at the back. Amortized O(1).
    #[must_use]
    pub fn snoc(&self, value: T) -> Self {
        Self {
            root: self
                .root
                .snoc_fragment(ReferenceCounter::new(Node::Leaf(value))),
        }
    }

    /// Returns the first value, or `None` when empty. O(1).
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.root.first_value()
    }

    /// Returns the last value, or `None` when empty. O(1).
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.root.last_value()
    }

    /// Splits the tree into its first value and the rest.
    ///
    /// Amortized O(1). Returns `None` when the tree is empty.
    #[must_use]
    pub fn view_left(&self) -> Option<(&T, Self)> {
        let (_, rest) = self.root.view_left()?;
        let head = self.root.first_value()?;
        Some((head, Self { root: rest }))
    }

    /// Splits the tree into its last value and the rest.
    ///
    /// Amortized O(1). Returns `None` when the tree is empty.
    #[must_use]
    pub fn view_right(&self) -> Option<(&T, Self)> {
        let (_, rest) = self.root.view_right()?;
        let last = self.root.last_value()?;
        Some((last, Self { root: rest }))
    }

    /// Returns the tree without its first value, or `None` when empty.
    #[must_use]
    pub fn tail(&self) -> Option<Self> {
        self.root.view_left().map(|(_, rest)| Self { root: rest })
    }

    /// Returns the tree without its last value, or `None` when empty.
    #[must_use]
    pub fn init(&self) -> Option<Self> {
        self.root.view_right().map(|(_, rest)| Self { root: rest })
    }

    /// Concatenates two trees, preserving order: every value of `self`
    /// precedes every value of `other`.
    ///
    /// O(log(min(m, n))): the recursion only descends the shallower spine,
    /// regrouping the boundary fragments into 2-3 nodes along the way.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self {
            root: concat::concat(&self.root, &other.root),
        }
    }

    /// Visits every value in left-to-right order.
    pub fn for_each<F: FnMut(&T)>(&self, mut visit: F) {
        self.root.for_each(&mut visit);
    }
}

impl<T: Measured<Measure = Size>> FingerTree<T> {
    /// Returns the number of values. O(1): the count is the cached measure.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.size()
    }

    /// Returns the value at `index`, or `None` when out of range. O(log n).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.root.get(index)
    }

    /// Returns a tree with the value at `index` replaced, or `None` when out
    /// of range.
    ///
    /// O(log n): only the path from the root to the addressed leaf is
    /// rebuilt; everything else is shared with `self`.
    #[must_use]
    pub fn set(&self, index: usize, value: T) -> Option<Self> {
        self.root.set(index, value).map(|root| Self { root })
    }
}

impl<T: Measured> Clone for FingerTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<T: Measured> Default for FingerTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Measured + fmt::Debug> fmt::Debug for FingerTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FingerTree").field(&self.root).finish()
    }
}

impl<T: Measured> FromIterator<T> for FingerTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .fold(Self::new(), |tree, value| tree.snoc(value))
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::fingertree::measured::Elem;
    use proptest::prelude::*;

    fn values(tree: &FingerTree<Elem<i32>>) -> Vec<i32> {
        let mut seen = Vec::new();
        tree.for_each(|elem| seen.push(elem.0));
        seen
    }

    proptest! {
        #[test]
        fn prop_snoc_preserves_order(input in prop::collection::vec(any::<i32>(), 0..200)) {
            let tree: FingerTree<Elem<i32>> =
                input.iter().copied().map(Elem::new).collect();
            prop_assert_eq!(tree.len(), input.len());
            prop_assert_eq!(values(&tree), input);
        }

        #[test]
        fn prop_get_matches_vec(input in prop::collection::vec(any::<i32>(), 1..200)) {
            let tree: FingerTree<Elem<i32>> =
                input.iter().copied().map(Elem::new).collect();
            for (index, expected) in input.iter().enumerate() {
                prop_assert_eq!(tree.get(index).map(|e| e.0), Some(*expected));
            }
            prop_assert!(tree.get(input.len()).is_none());
        }

        #[test]
        fn prop_set_matches_vec(
            input in prop::collection::vec(any::<i32>(), 1..100),
            replacement: i32,
            position_seed: usize,
        ) {
            let position = position_seed % input.len();
            let tree: FingerTree<Elem<i32>> =
                input.iter().copied().map(Elem::new).collect();
            let updated = tree.set(position, Elem::new(replacement)).unwrap();

            let mut expected = input.clone();
            expected[position] = replacement;
            prop_assert_eq!(values(&updated), expected);
            prop_assert_eq!(values(&tree), input);
        }

        #[test]
        fn prop_drain_left_matches_vec(input in prop::collection::vec(any::<i32>(), 0..200)) {
            let tree: FingerTree<Elem<i32>> =
                input.iter().copied().map(Elem::new).collect();
            let mut drained = Vec::new();
            let mut current = tree;
            while let Some((head, rest)) = current.view_left() {
                drained.push(head.0);
                current = rest;
            }
            prop_assert_eq!(drained, input);
        }
    }
}
