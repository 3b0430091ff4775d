//! The constant transform

use super::combinators::Transform;

/// Transform ignoring its input and producing a captured value.
#[derive(Clone, Copy, Debug)]
pub struct Squirt<V>(pub V);

impl<T: ?Sized, V: Clone + Send + Sync> Transform<T> for Squirt<V> {
    type Output = V;

    #[inline]
    fn apply(&self, _value: &T) -> V {
        self.0.clone()
    }
}

/// Create a transform that always produces `value`, whatever it is applied
/// to.
///
/// This is the fixed-result stand-in wherever a transform is expected: a
/// placeholder stage while wiring a pipeline, or a constant branch next to
/// real lookups.
///
/// # Example
///
/// ```rust
/// use millrace::transform::*;
///
/// let fallback = squirt("n/a");
/// assert_eq!(fallback.apply(&123), "n/a");
/// assert_eq!(fallback.apply("anything"), "n/a");
/// ```
pub fn squirt<V>(value: V) -> Squirt<V> {
    Squirt(value)
}
