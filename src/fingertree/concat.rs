//! Concatenation of two spines.
//!
//! The recursion carries a small buffer of loose fragments between the two
//! trees (the exhausted boundary digits of the levels already merged). At
//! each level the buffer is regrouped into 2-3 nodes for the level below, so
//! it never exceeds twelve fragments: at most four from each boundary digit
//! plus at most four regrouped nodes carried down.

use smallvec::SmallVec;

use super::ReferenceCounter;
use super::measured::Measured;
use super::node::Node;
use super::tree::Tree;

/// Scratch space for boundary fragments; twelve is the proven upper bound,
/// so the buffer never spills to the heap.
type FragmentBuffer<T> = SmallVec<[ReferenceCounter<Node<T>>; 12]>;

pub(crate) fn concat<T: Measured>(left: &Tree<T>, right: &Tree<T>) -> Tree<T> {
    app3(left, &[], right)
}

/// Three-way append: `left`, then the loose `between` fragments, then
/// `right`. Descends only while both sides are `Deep`, so the cost is the
/// depth of the shallower tree.
fn app3<T: Measured>(
    left: &Tree<T>,
    between: &[ReferenceCounter<Node<T>>],
    right: &Tree<T>,
) -> Tree<T> {
    match (left, right) {
        (Tree::Empty, _) => prepend_all(between, right),
        (_, Tree::Empty) => append_all(left, between),
        (Tree::Single(fragment), _) => {
            prepend_all(between, right).cons_fragment(fragment.clone())
        }
        (_, Tree::Single(fragment)) => {
            append_all(left, between).snoc_fragment(fragment.clone())
        }
        (
            Tree::Deep {
                left: left_digit,
                middle: left_middle,
                right: left_boundary,
                ..
            },
            Tree::Deep {
                left: right_boundary,
                middle: right_middle,
                right: right_digit,
                ..
            },
        ) => {
            let mut boundary = FragmentBuffer::new();
            boundary.extend(left_boundary.fragments());
            boundary.extend(between.iter().cloned());
            boundary.extend(right_boundary.fragments());
            let regrouped = regroup(&boundary);
            Tree::deep(
                left_digit.clone(),
                app3(left_middle, &regrouped, right_middle),
                right_digit.clone(),
            )
        }
    }
}

fn prepend_all<T: Measured>(
    fragments: &[ReferenceCounter<Node<T>>],
    tree: &Tree<T>,
) -> Tree<T> {
    fragments
        .iter()
        .rev()
        .fold(tree.clone(), |tree, fragment| {
            tree.cons_fragment(fragment.clone())
        })
}

fn append_all<T: Measured>(
    tree: &Tree<T>,
    fragments: &[ReferenceCounter<Node<T>>],
) -> Tree<T> {
    fragments.iter().fold(tree.clone(), |tree, fragment| {
        tree.snoc_fragment(fragment.clone())
    })
}

/// Packs 2 to 12 boundary fragments into at most four 2-3 nodes for the
/// level below, preserving order.
///
/// Two boundary digits always contribute at least one fragment each, so the
/// zero- and one-fragment cases cannot arise.
fn regroup<T: Measured>(
    fragments: &[ReferenceCounter<Node<T>>],
) -> FragmentBuffer<T> {
    let mut grouped = FragmentBuffer::new();
    let mut rest = fragments;
    loop {
        match rest {
            [a, b] => {
                grouped.push(ReferenceCounter::new(Node::node2(a.clone(), b.clone())));
                return grouped;
            }
            [a, b, c] => {
                grouped.push(ReferenceCounter::new(Node::node3(
                    a.clone(),
                    b.clone(),
                    c.clone(),
                )));
                return grouped;
            }
            [a, b, c, d] => {
                grouped.push(ReferenceCounter::new(Node::node2(a.clone(), b.clone())));
                grouped.push(ReferenceCounter::new(Node::node2(c.clone(), d.clone())));
                return grouped;
            }
            [a, b, c, remainder @ ..] => {
                grouped.push(ReferenceCounter::new(Node::node3(
                    a.clone(),
                    b.clone(),
                    c.clone(),
                )));
                rest = remainder;
            }
            _ => unreachable!("boundary regrouping always sees at least two fragments"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
