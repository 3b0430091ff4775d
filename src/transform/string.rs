//! String transforms

use super::combinators::Transform;
use crate::error::CombinatorError;

/// Transform upper-casing the first character of a string.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ucfirst;

impl Ucfirst {
    fn capitalize(input: &str) -> Result<String, CombinatorError> {
        let mut chars = input.chars();
        let first = chars.next().ok_or(CombinatorError::EmptyString)?;
        Ok(first.to_uppercase().chain(chars).collect())
    }
}

impl Transform<str> for Ucfirst {
    type Output = Result<String, CombinatorError>;

    #[inline]
    fn apply(&self, value: &str) -> Self::Output {
        Self::capitalize(value)
    }
}

impl Transform<String> for Ucfirst {
    type Output = Result<String, CombinatorError>;

    #[inline]
    fn apply(&self, value: &String) -> Self::Output {
        Self::capitalize(value)
    }
}

/// Create a transform that upper-cases a string's first character, leaving
/// the rest untouched.
///
/// The first character is upper-cased per Unicode, which can expand it to
/// several characters. An empty input has no first character and is
/// reported as [`CombinatorError::EmptyString`] instead of being passed
/// through.
///
/// # Example
///
/// ```rust
/// use millrace::transform::*;
///
/// assert_eq!(ucfirst().apply("fooBar").unwrap(), "FooBar");
/// assert_eq!(ucfirst().apply("über").unwrap(), "Über");
/// assert!(ucfirst().apply("").is_err());
/// ```
pub fn ucfirst() -> Ucfirst {
    Ucfirst
}
