//! The persistent sequence interface.

use std::error::Error;
use std::fmt;

// =============================================================================
// Errors
// =============================================================================

/// Failure modes of [`Seq`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeqError {
    /// An index fell outside `0..size`, or an end was read on an empty
    /// sequence.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The sequence size at the time of the call.
        size: usize,
    },
    /// The implementation does not provide this operation.
    Unsupported(&'static str),
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "index {index} out of range for sequence of size {size}")
            }
            Self::Unsupported(operation) => {
                write!(f, "operation `{operation}` is not supported")
            }
        }
    }
}

impl Error for SeqError {}

// =============================================================================
// Visitor
// =============================================================================

/// Receives the elements of a sequence in left-to-right order.
///
/// [`before`](Self::before) is called once with the sequence size, then
/// [`visit`](Self::visit) once per element, then [`after`](Self::after)
/// once. The bracketing hooks default to doing nothing.
///
/// # Examples
///
/// ```rust
/// use fingerseq::persistent::{PersistentSequence, Seq, SeqVisitor};
///
/// #[derive(Default)]
/// struct Collector {
///     expected: usize,
///     seen: Vec<i32>,
/// }
///
/// impl SeqVisitor<i32> for Collector {
///     fn before(&mut self, size: usize) {
///         self.expected = size;
///     }
///
///     fn visit(&mut self, value: &i32) {
///         self.seen.push(*value);
///     }
/// }
///
/// let sequence: PersistentSequence<i32> = [1, 2, 3].into_iter().collect();
/// let mut collector = Collector::default();
/// sequence.accept(&mut collector);
/// assert_eq!(collector.expected, 3);
/// assert_eq!(collector.seen, vec![1, 2, 3]);
/// ```
pub trait SeqVisitor<T> {
    /// Called once before traversal with the number of elements.
    fn before(&mut self, size: usize) {
        let _ = size;
    }

    /// Called once per element, in left-to-right order.
    fn visit(&mut self, value: &T);

    /// Called once after the last element.
    fn after(&mut self) {}
}

// =============================================================================
// Seq Trait
// =============================================================================

/// A persistent sequence: every mutator returns a new sequence and leaves
/// the receiver untouched.
///
/// Indexed operations report [`SeqError::OutOfRange`] instead of panicking.
/// [`concat`](Self::concat) has a default that reports
/// [`SeqError::Unsupported`], for implementations whose representation
/// cannot join two sequences efficiently;
/// [`PersistentSequence`](super::PersistentSequence) overrides it.
pub trait Seq<T>: Sized {
    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` when the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// [`SeqError::OutOfRange`] when the sequence is empty.
    fn head(&self) -> Result<&T, SeqError>;

    /// Returns the sequence without its first element.
    ///
    /// # Errors
    ///
    /// [`SeqError::OutOfRange`] when the sequence is empty.
    fn tail(&self) -> Result<Self, SeqError>;

    /// Returns the sequence with `value` prepended.
    #[must_use]
    fn cons(&self, value: T) -> Self;

    /// Returns the sequence with `value` appended.
    #[must_use]
    fn snoc(&self, value: T) -> Self;

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`SeqError::OutOfRange`] when `index >= self.size()`.
    fn get(&self, index: usize) -> Result<&T, SeqError>;

    /// Returns the sequence with the element at `index` replaced by `value`.
    ///
    /// # Errors
    ///
    /// [`SeqError::OutOfRange`] when `index >= self.size()`.
    fn set(&self, index: usize, value: T) -> Result<Self, SeqError>;

    /// Returns the elements of `self` followed by the elements of `other`.
    ///
    /// # Errors
    ///
    /// [`SeqError::Unsupported`] unless the implementation overrides this.
    fn concat(&self, other: &Self) -> Result<Self, SeqError> {
        let _ = other;
        Err(SeqError::Unsupported("concat"))
    }

    /// Walks the sequence through `visitor` in left-to-right order.
    fn accept<V: SeqVisitor<T>>(&self, visitor: &mut V);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // A sequence that leaves the concat default in place.
    struct Fixed(Vec<i32>);

    impl Seq<i32> for Fixed {
        fn size(&self) -> usize {
            self.0.len()
        }

        fn head(&self) -> Result<&i32, SeqError> {
            self.0.first().ok_or(SeqError::OutOfRange { index: 0, size: 0 })
        }

        fn tail(&self) -> Result<Self, SeqError> {
            if self.0.is_empty() {
                return Err(SeqError::OutOfRange { index: 0, size: 0 });
            }
            Ok(Self(self.0[1..].to_vec()))
        }

        fn cons(&self, value: i32) -> Self {
            let mut elements = vec![value];
            elements.extend_from_slice(&self.0);
            Self(elements)
        }

        fn snoc(&self, value: i32) -> Self {
            let mut elements = self.0.clone();
            elements.push(value);
            Self(elements)
        }

        fn get(&self, index: usize) -> Result<&i32, SeqError> {
            self.0.get(index).ok_or(SeqError::OutOfRange {
                index,
                size: self.0.len(),
            })
        }

        fn set(&self, index: usize, value: i32) -> Result<Self, SeqError> {
            let mut elements = self.0.clone();
            *elements.get_mut(index).ok_or(SeqError::OutOfRange {
                index,
                size: self.0.len(),
            })? = value;
            Ok(Self(elements))
        }

        fn accept<V: SeqVisitor<i32>>(&self, visitor: &mut V) {
            visitor.before(self.0.len());
            for value in &self.0 {
                visitor.visit(value);
            }
            visitor.after();
        }
    }

    #[rstest]
    fn concat_defaults_to_unsupported() {
        let left = Fixed(vec![1, 2]);
        let right = Fixed(vec![3]);
        assert_eq!(
            left.concat(&right).err(),
            Some(SeqError::Unsupported("concat")),
        );
    }

    #[rstest]
    fn is_empty_defaults_to_size_check() {
        assert!(Fixed(vec![]).is_empty());
        assert!(!Fixed(vec![1]).is_empty());
    }

    #[rstest]
    fn visitor_hooks_bracket_the_elements() {
        #[derive(Default)]
        struct Recorder {
            events: Vec<String>,
        }

        impl SeqVisitor<i32> for Recorder {
            fn before(&mut self, size: usize) {
                self.events.push(format!("before({size})"));
            }

            fn visit(&mut self, value: &i32) {
                self.events.push(format!("visit({value})"));
            }

            fn after(&mut self) {
                self.events.push("after".to_string());
            }
        }

        let mut recorder = Recorder::default();
        Fixed(vec![1, 2]).accept(&mut recorder);
        assert_eq!(
            recorder.events,
            vec!["before(2)", "visit(1)", "visit(2)", "after"],
        );
    }

    #[rstest]
    fn out_of_range_display_names_both_numbers() {
        let error = SeqError::OutOfRange { index: 7, size: 3 };
        assert_eq!(
            error.to_string(),
            "index 7 out of range for sequence of size 3",
        );
    }

    #[rstest]
    fn unsupported_display_names_the_operation() {
        assert_eq!(
            SeqError::Unsupported("concat").to_string(),
            "operation `concat` is not supported",
        );
    }
}
