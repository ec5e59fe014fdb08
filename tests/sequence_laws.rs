//! Property-based tests for PersistentSequence.
//!
//! These tests verify the sequence against a `Vec` model and check the
//! algebraic laws of its Semigroup and Monoid instances.

use fingerseq::persistent::{PersistentSequence, Seq, SeqError, SeqVisitor};
use fingerseq::typeclass::{Monoid, Semigroup};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating PersistentSequence
// =============================================================================

/// Generates a `PersistentSequence<i32>` with up to `max_size` elements,
/// paired with the `Vec` it was built from.
fn sequence_with_model(
    max_size: usize,
) -> impl Strategy<Value = (PersistentSequence<i32>, Vec<i32>)> {
    prop::collection::vec(any::<i32>(), 0..max_size)
        .prop_map(|model| (model.iter().copied().collect(), model))
}

fn small_sequence() -> impl Strategy<Value = (PersistentSequence<i32>, Vec<i32>)> {
    sequence_with_model(40)
}

proptest! {
    // =========================================================================
    // Basic Properties
    // =========================================================================

    #[test]
    fn prop_size_matches_model((sequence, model) in small_sequence()) {
        prop_assert_eq!(sequence.size(), model.len());
        prop_assert_eq!(sequence.is_empty(), model.is_empty());
    }

    #[test]
    fn prop_head_matches_model((sequence, model) in small_sequence()) {
        match model.first() {
            Some(expected) => prop_assert_eq!(sequence.head(), Ok(expected)),
            None => prop_assert!(sequence.head().is_err()),
        }
    }

    #[test]
    fn prop_cons_puts_element_at_head((sequence, _) in small_sequence(), element: i32) {
        let extended = sequence.cons(element);
        prop_assert_eq!(extended.size(), sequence.size() + 1);
        prop_assert_eq!(extended.head(), Ok(&element));
    }

    #[test]
    fn prop_snoc_puts_element_at_back((sequence, _) in small_sequence(), element: i32) {
        let extended = sequence.snoc(element);
        prop_assert_eq!(extended.size(), sequence.size() + 1);
        prop_assert_eq!(extended.last(), Some(&element));
    }

    #[test]
    fn prop_tail_drops_exactly_the_head(
        (sequence, model) in sequence_with_model(40)
            .prop_filter("non-empty", |(sequence, _)| !sequence.is_empty()),
    ) {
        let tail = sequence.tail().unwrap();
        prop_assert_eq!(tail.size(), model.len() - 1);
        let collected: Vec<i32> = tail.iter().copied().collect();
        prop_assert_eq!(collected, model[1..].to_vec());
    }

    #[test]
    fn prop_get_matches_model((sequence, model) in small_sequence()) {
        for (index, expected) in model.iter().enumerate() {
            prop_assert_eq!(sequence.get(index), Ok(expected));
        }
        prop_assert_eq!(
            sequence.get(model.len()),
            Err(SeqError::OutOfRange { index: model.len(), size: model.len() }),
        );
    }

    // =========================================================================
    // Structural Sharing Properties
    // =========================================================================

    #[test]
    fn prop_cons_then_tail_restores_the_original(
        (sequence, _) in small_sequence(),
        element: i32,
    ) {
        let restored = sequence.cons(element).tail().unwrap();
        prop_assert_eq!(restored, sequence);
    }

    #[test]
    fn prop_set_leaves_the_original_readable(
        (sequence, model) in sequence_with_model(40)
            .prop_filter("non-empty", |(sequence, _)| !sequence.is_empty()),
        replacement: i32,
        position_seed: usize,
    ) {
        let position = position_seed % model.len();
        let updated = sequence.set(position, replacement).unwrap();
        prop_assert_eq!(updated.get(position), Ok(&replacement));
        prop_assert_eq!(sequence.get(position), Ok(&model[position]));
    }

    // =========================================================================
    // Concatenation Properties (Semigroup/Monoid Laws)
    // =========================================================================

    #[test]
    fn prop_concat_matches_model_append(
        (left, left_model) in small_sequence(),
        (right, right_model) in small_sequence(),
    ) {
        let joined = left.concat(&right).unwrap();
        let mut expected = left_model;
        expected.extend(right_model);
        prop_assert_eq!(joined.size(), expected.len());
        let collected: Vec<i32> = joined.iter().copied().collect();
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn prop_combine_is_associative(
        (a, _) in small_sequence(),
        (b, _) in small_sequence(),
        (c, _) in small_sequence(),
    ) {
        let left_first = a.clone().combine(b.clone()).combine(c.clone());
        let right_first = a.combine(b.combine(c));
        prop_assert_eq!(left_first, right_first);
    }

    #[test]
    fn prop_empty_is_the_combine_identity((sequence, _) in small_sequence()) {
        prop_assert_eq!(
            PersistentSequence::empty().combine(sequence.clone()),
            sequence.clone(),
        );
        prop_assert_eq!(sequence.clone().combine(PersistentSequence::empty()), sequence);
    }

    // =========================================================================
    // Visitor Properties
    // =========================================================================

    #[test]
    fn prop_visitor_sees_every_element_in_order((sequence, model) in small_sequence()) {
        #[derive(Default)]
        struct Collector {
            announced: usize,
            seen: Vec<i32>,
            finished: bool,
        }

        impl SeqVisitor<i32> for Collector {
            fn before(&mut self, size: usize) {
                self.announced = size;
            }

            fn visit(&mut self, value: &i32) {
                self.seen.push(*value);
            }

            fn after(&mut self) {
                self.finished = true;
            }
        }

        let mut collector = Collector::default();
        sequence.accept(&mut collector);
        prop_assert_eq!(collector.announced, model.len());
        prop_assert_eq!(collector.seen, model);
        prop_assert!(collector.finished);
    }
}

// =============================================================================
// Deterministic Scenarios
// =============================================================================

#[test]
fn cons_head_set_and_self_concat() {
    let sequence = PersistentSequence::new().cons(2).cons(1).cons(0);
    assert_eq!(sequence.size(), 3);
    assert_eq!(sequence.head(), Ok(&0));

    let updated = sequence.set(1, 9).unwrap();
    assert_eq!(updated.get(1), Ok(&9));

    let doubled = sequence.concat(&sequence).unwrap();
    assert_eq!(doubled.size(), 6);
    assert_eq!(doubled.get(3), Ok(&0));
}

#[test]
fn thousand_cons_visit_in_descending_order() {
    struct Collector(Vec<i32>);

    impl SeqVisitor<i32> for Collector {
        fn visit(&mut self, value: &i32) {
            self.0.push(*value);
        }
    }

    let sequence = (0..1000).fold(PersistentSequence::new(), |sequence, value| {
        sequence.cons(value)
    });
    let mut collector = Collector(Vec::new());
    sequence.accept(&mut collector);
    let expected: Vec<i32> = (0..1000).rev().collect();
    assert_eq!(collector.0, expected);
}

#[test]
fn thousand_element_order_survives_growth() {
    let sequence: PersistentSequence<usize> = (0..1000).collect();
    assert_eq!(sequence.size(), 1000);
    for index in 0..1000 {
        assert_eq!(sequence.get(index), Ok(&index));
    }
}

#[test]
fn concat_of_many_chunks_matches_flat_build() {
    let flat: PersistentSequence<i32> = (0..300).collect();
    let chunked = (0..10)
        .map(|chunk| (chunk * 30..(chunk + 1) * 30).collect::<PersistentSequence<i32>>())
        .fold(PersistentSequence::new(), Semigroup::combine);
    assert_eq!(chunked, flat);
}
