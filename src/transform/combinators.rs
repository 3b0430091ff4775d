//! Core transform trait and composition combinators
//!
//! This module provides the foundational `Transform` trait, left-to-right
//! composition via [`Pipe`], and the do-nothing [`Identity`] transform.

/// A composable transformation from input values to derived values.
///
/// Transforms are pure functions from `&T` to an owned output. They are the
/// mapping half of a pipeline: predicates decide, transforms derive. A
/// transform never mutates its input.
///
/// # Example
///
/// ```rust
/// use millrace::transform::*;
///
/// let shout = pipe(|s: &str| s.to_uppercase(), |s: &String| format!("{}!", s));
/// assert_eq!(shout.apply("flow"), "FLOW!");
/// ```
pub trait Transform<T: ?Sized>: Send + Sync {
    /// The derived value's type.
    type Output;

    /// Derive the output value from the input.
    fn apply(&self, value: &T) -> Self::Output;
}

// Blanket impl for closures
impl<T: ?Sized, U, F> Transform<T> for F
where
    F: Fn(&T) -> U + Send + Sync,
{
    type Output = U;

    #[inline]
    fn apply(&self, value: &T) -> U {
        self(value)
    }
}

/// Extension trait for transform composition.
///
/// As with predicates, chaining needs the input type pinned down, so it
/// works best led by a closure. Transforms that accept several input types
/// compose through the free [`pipe`] function instead.
///
/// # Example
///
/// ```rust
/// use millrace::transform::*;
///
/// let trimmed_len = (|s: &str| s.trim().to_string()).pipe(|s: &String| s.len());
/// assert_eq!(trimmed_len.apply("  four  "), 4);
/// ```
pub trait TransformExt<T: ?Sized>: Transform<T> + Sized {
    /// Feed this transform's output into `next`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use millrace::transform::*;
    ///
    /// let parse_len = (|s: &str| s.len()).pipe(|n: &usize| *n as i64);
    /// assert_eq!(parse_len.apply("gate"), 4);
    /// ```
    fn pipe<B>(self, next: B) -> Pipe<Self, B> {
        Pipe(self, next)
    }
}

impl<T: ?Sized, M: Transform<T>> TransformExt<T> for M {}

/// Left-to-right composition - the first transform's output feeds the
/// second.
#[derive(Clone, Copy, Debug)]
pub struct Pipe<A, B>(pub A, pub B);

impl<T: ?Sized, A, B> Transform<T> for Pipe<A, B>
where
    A: Transform<T>,
    B: Transform<A::Output>,
{
    type Output = B::Output;

    #[inline]
    fn apply(&self, value: &T) -> Self::Output {
        self.1.apply(&self.0.apply(value))
    }
}

// Send + Sync are auto-derived when A and B are Send + Sync

/// Thread one input through `first`, then `second`.
///
/// Reads in application order: `pipe(a, b)` runs `a` before `b`. Longer
/// chains nest, or use [`TransformExt::pipe`] when the leading transform
/// has a single input type.
///
/// # Example
///
/// ```rust
/// use millrace::transform::*;
///
/// let slug = pipe(
///     pipe(|s: &str| s.trim().to_lowercase(), |s: &String| s.replace(' ', "-")),
///     |s: &String| format!("post-{}", s),
/// );
/// assert_eq!(slug.apply("  Tail Race  "), "post-tail-race");
/// ```
pub fn pipe<A, B>(first: A, second: B) -> Pipe<A, B> {
    Pipe(first, second)
}

/// The do-nothing transform.
///
/// Clones the input through unchanged. The explicit stand-in where a
/// transform is expected but no adaptation is wanted.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<T: Clone> Transform<T> for Identity {
    type Output = T;

    #[inline]
    fn apply(&self, value: &T) -> T {
        value.clone()
    }
}

/// Create the identity transform.
///
/// # Example
///
/// ```rust
/// use millrace::transform::*;
///
/// let same = identity();
/// assert_eq!(same.apply(&42), 42);
/// assert_eq!(same.apply(&String::from("as-is")), "as-is");
/// ```
pub fn identity() -> Identity {
    Identity
}
