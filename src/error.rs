//! Error types for combinator operations
//!
//! Most misuse of this crate is unrepresentable: a predicate cannot be
//! checked against a value it was not written for, and a transform's output
//! type is fixed at compile time. Two operations remain that can be handed
//! an input they cannot service, and both report it through
//! [`CombinatorError`] instead of guessing at a result.

use thiserror::Error;

/// Errors produced when a combinator's input cannot support the requested
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinatorError {
    /// The string has no first character to upper-case.
    #[error("cannot upper-case the first character of an empty string")]
    EmptyString,

    /// The receiver does not answer to the requested method name.
    #[error("receiver has no method named `{0}`")]
    UnknownMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CombinatorError::EmptyString.to_string(),
            "cannot upper-case the first character of an empty string"
        );
        assert_eq!(
            CombinatorError::UnknownMethod("launch".to_string()).to_string(),
            "receiver has no method named `launch`"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(
            CombinatorError::UnknownMethod("a".to_string()),
            CombinatorError::UnknownMethod("a".to_string())
        );
        assert_ne!(
            CombinatorError::EmptyString,
            CombinatorError::UnknownMethod("a".to_string())
        );
    }
}
