//! Pass-through observation of pipeline values
//!
//! [`tap`] hands each value to an observer and passes it along unchanged,
//! so a stage can be watched without disturbing the stages around it. With
//! the `tracing` feature, [`traced`] does the same through a `tracing`
//! debug event instead of a callback.

use super::combinators::Transform;

/// Pass-through transform that shows each value to an observer.
#[derive(Clone, Copy, Debug)]
pub struct Tap<F>(pub F);

impl<T, F> Transform<T> for Tap<F>
where
    T: Clone,
    F: Fn(&T) + Send + Sync,
{
    type Output = T;

    #[inline]
    fn apply(&self, value: &T) -> T {
        (self.0)(value);
        value.clone()
    }
}

/// Create a pass-through transform that lets `observer` look at each value.
///
/// The observer cannot change what flows through; the input is cloned to
/// the output after the observer returns.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use millrace::transform::*;
///
/// let seen = AtomicUsize::new(0);
/// let counted = tap(|_: &i32| {
///     seen.fetch_add(1, Ordering::SeqCst);
/// });
///
/// let through = pipe(counted, |n: &i32| n * 2);
/// assert_eq!(through.apply(&21), 42);
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// ```
pub fn tap<F>(observer: F) -> Tap<F> {
    Tap(observer)
}

/// Pass-through transform that records each value as a `tracing` event.
#[cfg(feature = "tracing")]
#[derive(Clone, Debug)]
pub struct Traced {
    label: String,
}

#[cfg(feature = "tracing")]
impl<T> Transform<T> for Traced
where
    T: Clone + std::fmt::Debug,
{
    type Output = T;

    fn apply(&self, value: &T) -> T {
        tracing::debug!(label = %self.label, value = ?value, "pipeline value");
        value.clone()
    }
}

/// Create a pass-through transform that emits a debug event for each value
/// under `label`.
///
/// This is [`tap`] wired to `tracing` rather than a callback, for watching
/// a stage of a composed pipeline without threading an observer through.
/// Only available with the `tracing` feature.
///
/// # Example
///
/// ```rust
/// use millrace::transform::*;
///
/// let watched = pipe(traced("pre-double"), |n: &i32| n * 2);
/// assert_eq!(watched.apply(&21), 42);
/// ```
#[cfg(feature = "tracing")]
pub fn traced(label: impl Into<String>) -> Traced {
    Traced {
        label: label.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_tap_passes_the_value_through() {
        let quiet = tap(|_: &String| {});
        assert_eq!(quiet.apply(&String::from("steady")), "steady");
    }

    #[test]
    fn test_tap_observes_every_application() {
        static SEEN: AtomicUsize = AtomicUsize::new(0);
        let counted = tap(|_: &i32| {
            SEEN.fetch_add(1, Ordering::SeqCst);
        });
        for n in 0..3 {
            counted.apply(&n);
        }
        assert_eq!(SEEN.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_tap_inside_a_pipeline() {
        use crate::transform::{map, pipe};

        static TOTAL: AtomicUsize = AtomicUsize::new(0);
        let audit = tap(|n: &usize| {
            TOTAL.fetch_add(*n, Ordering::SeqCst);
        });

        let lengths = map(pipe(|s: &String| s.len(), audit));
        let out = lengths.apply(&vec!["ab".to_string(), "cde".to_string()]);
        assert_eq!(out, vec![2, 3]);
        assert_eq!(TOTAL.load(Ordering::SeqCst), 5);
    }
}

#[cfg(all(test, feature = "tracing"))]
mod traced_tests {
    use super::*;
    use crate::transform::pipe;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_traced_passes_through_and_emits() {
        let watched = pipe(traced("input"), |n: &i32| n + 1);
        assert_eq!(watched.apply(&9), 10);
        assert!(logs_contain("pipeline value"));
    }
}
