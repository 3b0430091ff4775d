//! Invocation transforms
//!
//! Transforms whose inputs are callable: [`call_with`] maps a fixed
//! argument tuple over a collection of functions, and [`call_method`]
//! dispatches a method by name on receivers implementing [`Dispatch`].

use super::combinators::Transform;
use crate::error::CombinatorError;

/// Transform invoking each function it is applied to with fixed arguments.
#[derive(Clone, Copy, Debug)]
pub struct CallWith<A> {
    args: A,
}

/// Create a transform that calls functions with the given argument tuple.
///
/// This turns a collection of handlers into a collection of results: the
/// arguments are fixed, the function varies. Tuple elements spread into
/// positional arguments (arities 0 through 4 are provided); each call
/// clones them, so one `CallWith` can drive a whole list of functions.
///
/// # Example
///
/// ```rust
/// use millrace::transform::*;
///
/// let arithmetic: Vec<fn(i32, i32) -> i32> = vec![|a, b| a + b, |a, b| a * b];
/// let with_2_3 = call_with((2, 3));
/// let results: Vec<i32> = arithmetic.iter().map(|f| with_2_3.apply(f)).collect();
/// assert_eq!(results, vec![5, 6]);
/// ```
pub fn call_with<A>(args: A) -> CallWith<A> {
    CallWith { args }
}

impl<F, R> Transform<F> for CallWith<()>
where
    F: Fn() -> R + Send + Sync,
{
    type Output = R;

    #[inline]
    fn apply(&self, function: &F) -> R {
        function()
    }
}

// Macro for generating argument-spreading implementations
macro_rules! impl_call_with_tuple {
    ($($idx:tt $A:ident),+) => {
        impl<$($A,)+ F, R> Transform<F> for CallWith<($($A,)+)>
        where
            $($A: Clone + Send + Sync,)+
            F: Fn($($A),+) -> R + Send + Sync,
        {
            type Output = R;

            #[inline]
            fn apply(&self, function: &F) -> R {
                function($(self.args.$idx.clone()),+)
            }
        }
    };
}

// Generate implementations for argument tuples of size 1 through 4
impl_call_with_tuple!(0 A1);
impl_call_with_tuple!(0 A1, 1 A2);
impl_call_with_tuple!(0 A1, 1 A2, 2 A3);
impl_call_with_tuple!(0 A1, 1 A2, 2 A3, 3 A4);

/// Receiver-side seam for dispatching methods by name.
///
/// Implement this for types whose operations should be reachable through a
/// runtime string, such as operation names read from configuration. All
/// dispatched methods share one argument payload type and one output type;
/// `None` reports that the receiver has no method of that name.
///
/// Methods wanting several arguments declare a tuple `Args` and
/// destructure it; methods wanting the payload whole take it as one value.
/// The caller cannot tell the difference, so pick per receiver.
pub trait Dispatch {
    /// The argument payload each dispatched method receives.
    type Args;
    /// The common result type of the dispatched methods.
    type Output;

    /// Invoke the named method with `args`.
    fn dispatch(&self, method: &str, args: &Self::Args) -> Option<Self::Output>;
}

/// Transform invoking a named method on each receiver.
#[derive(Clone, Debug)]
pub struct CallMethod<A> {
    method: String,
    args: A,
}

impl<A: Send + Sync, D: Dispatch<Args = A>> Transform<D> for CallMethod<A> {
    type Output = Result<D::Output, CombinatorError>;

    fn apply(&self, receiver: &D) -> Self::Output {
        receiver
            .dispatch(&self.method, &self.args)
            .ok_or_else(|| CombinatorError::UnknownMethod(self.method.clone()))
    }
}

/// Create a transform that calls `method` on each receiver, handing every
/// call the same argument payload.
///
/// A name the receiver does not answer to surfaces as
/// [`CombinatorError::UnknownMethod`] rather than a panic or a silent
/// default.
///
/// # Example
///
/// ```rust
/// use millrace::transform::*;
/// use millrace::CombinatorError;
///
/// struct Counter(i32);
///
/// impl Dispatch for Counter {
///     type Args = i32;
///     type Output = i32;
///
///     fn dispatch(&self, method: &str, args: &i32) -> Option<i32> {
///         match method {
///             "add" => Some(self.0 + args),
///             "mul" => Some(self.0 * args),
///             _ => None,
///         }
///     }
/// }
///
/// let add_five = call_method("add", 5);
/// assert_eq!(add_five.apply(&Counter(2)), Ok(7));
/// assert_eq!(add_five.apply(&Counter(40)), Ok(45));
///
/// let unknown = call_method("frobnicate", 5);
/// assert_eq!(
///     unknown.apply(&Counter(2)),
///     Err(CombinatorError::UnknownMethod("frobnicate".to_string()))
/// );
/// ```
pub fn call_method<A>(method: impl Into<String>, args: A) -> CallMethod<A> {
    CallMethod {
        method: method.into(),
        args,
    }
}
