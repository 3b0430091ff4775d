//! Value predicates
//!
//! Predicates over single values: truthiness and definedness. These are the
//! usual leaf checks at the end of a pipeline built with
//! [`over`](super::over).

use super::combinators::Predicate;
use crate::truthy::Truthy;

/// Predicate accepting truthy values.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsTruthy;

impl<T: Truthy + ?Sized> Predicate<T> for IsTruthy {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.is_truthy()
    }
}

/// Create a predicate that accepts truthy values.
///
/// Truthiness follows [`Truthy`]: `false`, zero, `NaN`, empty strings, and
/// `None` are rejected, everything else passes. One instance checks any
/// `Truthy` type.
///
/// # Example
///
/// ```rust
/// use millrace::predicate::*;
///
/// let kept: Vec<i32> = [0, 3, 0, 7]
///     .into_iter()
///     .filter(|n| is_truthy().check(n))
///     .collect();
/// assert_eq!(kept, vec![3, 7]);
///
/// assert!(is_truthy().check("filled"));
/// assert!(!is_truthy().check(""));
/// ```
pub fn is_truthy() -> IsTruthy {
    IsTruthy
}

/// Predicate accepting present optional values.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsDefined;

impl<T> Predicate<Option<T>> for IsDefined {
    #[inline]
    fn check(&self, value: &Option<T>) -> bool {
        value.is_some()
    }
}

/// Create a predicate that accepts values which are present at all.
///
/// `None` stands for an absent slot and is the only rejected value.
/// `Some(falsy)` still passes, which is what separates this check from
/// [`is_truthy`]: a form field holding `""` is defined but not truthy.
///
/// # Example
///
/// ```rust
/// use millrace::predicate::*;
///
/// assert!(is_defined().check(&Some(0)));
/// assert!(is_defined().check(&Some("")));
/// assert!(!is_defined().check(&None::<i32>));
/// ```
pub fn is_defined() -> IsDefined {
    IsDefined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_truthy_rejects_the_falsy_values() {
        assert!(!is_truthy().check(&false));
        assert!(!is_truthy().check(&0));
        assert!(!is_truthy().check(&0.0f64));
        assert!(!is_truthy().check(&f64::NAN));
        assert!(!is_truthy().check(""));
        assert!(!is_truthy().check(&None::<i32>));
    }

    #[test]
    fn test_is_truthy_accepts_everything_else() {
        assert!(is_truthy().check(&true));
        assert!(is_truthy().check(&-1));
        assert!(is_truthy().check(&0.25));
        assert!(is_truthy().check("0"));
        assert!(is_truthy().check(&Some(3)));
    }

    #[test]
    fn test_is_defined_considers_only_presence() {
        assert!(is_defined().check(&Some(0)));
        assert!(is_defined().check(&Some(false)));
        assert!(!is_defined().check(&None::<bool>));
    }

    #[test]
    fn test_defined_but_not_truthy() {
        let empty: Option<&str> = Some("");
        assert!(is_defined().check(&empty));
        assert!(!is_truthy().check(&empty));
    }
}
