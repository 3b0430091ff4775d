//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait, the logical
//! combinators for composing predicates, and the input-adapting [`Over`]
//! combinator that runs a transform before the check.

use crate::transform::Transform;

/// A composable predicate over values of type T.
///
/// Predicates can be combined with logical operators:
/// - `and`: Both predicates must be true
/// - `not`: Inverts the predicate
/// - `over`: Adapts the input through a transform first
///
/// # Example
///
/// ```rust
/// use millrace::predicate::*;
///
/// let is_valid_tag = (|s: &str| s.len() <= 8).and(starts_with("#"));
/// assert!(is_valid_tag.check("#water"));
/// assert!(!is_valid_tag.check("water"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates. All methods return
/// concrete types for zero-cost abstraction.
///
/// Chaining needs the input type pinned down, so it works best led by a
/// closure. Predicates that check several input types (most of the built-in
/// ones) compose through the free functions [`not`], [`over`], and
/// [`all_of`] instead, which defer type selection to the `check` call.
///
/// # Example
///
/// ```rust
/// use millrace::predicate::*;
///
/// let p = (|s: &str| !s.is_empty()).and(contains("@"));
/// assert!(p.check("mill@race.dev"));
/// assert!(!p.check(""));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// Returns a predicate that is true only when both predicates are true.
    /// The second predicate is skipped when the first already failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millrace::predicate::*;
    ///
    /// let p = (|n: &i32| *n > 0).and(|n: &i32| n % 2 == 0);
    /// assert!(p.check(&4));
    /// assert!(!p.check(&3));
    /// assert!(!p.check(&-4));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Invert the predicate.
    ///
    /// Returns a predicate that is true when the original predicate is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millrace::predicate::*;
    ///
    /// let odd = (|n: &i32| n % 2 == 0).not();
    /// assert!(odd.check(&3));
    /// assert!(!odd.check(&4));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Check the output of `modifier` instead of the raw input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millrace::predicate::*;
    ///
    /// let long_name = (|len: &usize| *len >= 8).over(|s: &str| s.len());
    /// assert!(long_name.check("workbench"));
    /// assert!(!long_name.check("axle"));
    /// ```
    fn over<M>(self, modifier: M) -> Over<Self, M> {
        Over(self, modifier)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

// Send + Sync are auto-derived when P1 and P2 are Send + Sync

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

// Send + Sync are auto-derived when P is Send + Sync

/// Invert a predicate.
///
/// The free-function form of [`PredicateExt::not`]. Use it to wrap
/// predicates that check several input types, where method chaining cannot
/// pick one.
///
/// # Example
///
/// ```rust
/// use millrace::predicate::*;
///
/// let missing = not(contains(7));
/// assert!(missing.check(&vec![1, 2, 3]));
/// assert!(!missing.check(&vec![5, 6, 7]));
/// ```
pub fn not<P>(predicate: P) -> Not<P> {
    Not(predicate)
}

/// Check if all predicates are satisfied (const generic, zero-allocation).
///
/// Uses a fixed-size array to avoid heap allocation. Predicates run in
/// array order and stop at the first failure.
/// Note: all_of requires homogeneous predicate types.
/// For mixed predicates, use .and() chaining instead.
///
/// # Example
///
/// ```rust
/// use millrace::predicate::*;
///
/// let vowel_rich = all_of([contains("a"), contains("e"), contains("i")]);
/// assert!(vowel_rich.check("aeration site"));
/// assert!(!vowel_rich.check("dry"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AllOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Create a predicate that checks if all given predicates are satisfied.
///
/// This uses const generics for zero-allocation predicate arrays.
/// Note: all_of requires homogeneous predicate types.
/// For mixed predicates, use .and() chaining instead.
///
/// # Example
///
/// ```rust
/// use millrace::predicate::*;
///
/// let vowel_rich = all_of([contains("a"), contains("e"), contains("i")]);
/// assert!(vowel_rich.check("aeration site"));
/// assert!(!vowel_rich.check("dry"));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}

/// Input-adapting combinator - the transform runs first, the predicate
/// checks its output.
#[derive(Clone, Copy, Debug)]
pub struct Over<P, M>(pub P, pub M);

impl<T: ?Sized, P, M> Predicate<T> for Over<P, M>
where
    M: Transform<T>,
    P: Predicate<M::Output>,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(&self.1.apply(value))
    }
}

// Send + Sync are auto-derived when P and M are Send + Sync

/// Check `predicate` against the output of `modifier`.
///
/// This is how a predicate over one type becomes a predicate over another:
/// adapt the input instead of rewriting the check. Field-presence tests
/// compose this way from [`is_defined`](crate::predicate::is_defined) and
/// [`pluck_from`](crate::transform::pluck_from).
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use millrace::predicate::*;
/// use millrace::transform::pluck_from;
///
/// let mut form = HashMap::new();
/// form.insert("email", "mill@race.dev");
///
/// let filled = over(is_defined(), pluck_from(&form));
/// assert!(filled.check("email"));
/// assert!(!filled.check("phone"));
/// ```
pub fn over<P, M>(predicate: P, modifier: M) -> Over<P, M> {
    Over(predicate, modifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{contains, is_defined, starts_with};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_and() {
        let p = (|n: &i32| *n > 0).and(|n: &i32| *n < 10);
        assert!(p.check(&5));
        assert!(!p.check(&0));
        assert!(!p.check(&10));
    }

    #[test]
    fn test_and_short_circuits() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn rejects(_: &i32) -> bool {
            false
        }
        fn counts(_: &i32) -> bool {
            CALLS.fetch_add(1, Ordering::SeqCst);
            true
        }

        let p = (rejects as fn(&i32) -> bool).and(counts as fn(&i32) -> bool);
        assert!(!p.check(&1));
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_not() {
        let p = not(starts_with("mill"));
        assert!(p.check("racecourse"));
        assert!(!p.check("millstone"));
    }

    #[test]
    fn test_double_negation() {
        let p = not(not(contains(3)));
        assert!(p.check(&vec![1, 2, 3]));
        assert!(!p.check(&vec![4, 5]));
    }

    #[test]
    fn test_all_of() {
        let all_present = all_of([contains(1), contains(2), contains(3)]);
        assert!(all_present.check(&vec![3, 2, 1]));
        assert!(!all_present.check(&vec![1, 2]));
    }

    #[test]
    fn test_all_of_empty_accepts_everything() {
        let p = all_of::<fn(&i32) -> bool, 0>([]);
        assert!(p.check(&0));
    }

    #[test]
    fn test_all_of_runs_in_order_and_stops_at_first_failure() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn rejects(_: &i32) -> bool {
            false
        }
        fn counts(_: &i32) -> bool {
            CALLS.fetch_add(1, Ordering::SeqCst);
            true
        }

        let gate = all_of([rejects as fn(&i32) -> bool, counts as fn(&i32) -> bool]);
        assert!(!gate.check(&1));
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_over() {
        let nonzero_len = over(|len: &usize| *len > 0, |s: &str| s.len());
        assert!(nonzero_len.check("mill"));
        assert!(!nonzero_len.check(""));
    }

    #[test]
    fn test_over_with_field_access() {
        use crate::transform::pluck_from;
        use std::collections::HashMap;

        let mut record = HashMap::new();
        record.insert("present", 1);

        let defined = over(is_defined(), pluck_from(&record));
        assert!(defined.check("present"));
        assert!(!defined.check("absent"));
    }

    #[test]
    fn test_closure_as_predicate() {
        let is_even = |x: &i32| x % 2 == 0;
        assert!(is_even.check(&4));
        assert!(!is_even.check(&3));

        // Can be combined
        let even_and_small = is_even.and(|x: &i32| x.abs() < 100);
        assert!(even_and_small.check(&4));
        assert!(!even_and_small.check(&400));
    }

    #[test]
    fn test_complex_chain() {
        // short tagged strings, then inverted
        let p = (|s: &str| s.len() < 10).and(starts_with("#")).not();
        assert!(p.check("plain"));
        assert!(p.check("#very-long-tag"));
        assert!(!p.check("#rust"));
    }
}
