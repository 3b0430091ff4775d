//! Predicate combinators for composable filtering logic
//!
//! This module provides composable predicates for use in filter pipelines.
//! Predicates can be combined with logical operators (`and`, `not`,
//! `all_of`) and moved to new input types with [`over`], building reusable
//! filter rules from small pieces.
//!
//! # Philosophy
//!
//! Instead of writing ad-hoc boolean helpers at every filter call site,
//! predicate combinators let you:
//!
//! - Name a check once and reuse it across collections
//! - Fix one side of a two-sided test (`contains` vs `contained_in`) and
//!   let the other side vary over your data
//! - Carry a predicate to a new input type by adapting the input, not by
//!   rewriting the check
//!
//! # Example
//!
//! ```rust
//! use millrace::predicate::*;
//!
//! let allowed = contained_in(vec!["read", "write"]);
//! let requested = vec!["read", "delete", "write"];
//! let granted: Vec<&str> = requested
//!     .into_iter()
//!     .filter(|action| allowed.check(action))
//!     .collect();
//! assert_eq!(granted, vec!["read", "write"]);
//! ```
//!
//! # Checking derived values
//!
//! ```rust
//! use std::collections::HashMap;
//! use millrace::predicate::*;
//! use millrace::transform::pluck_from;
//!
//! let mut submitted = HashMap::new();
//! submitted.insert("name", "Greta");
//! submitted.insert("email", "");
//!
//! // name is present and non-empty, email is present but blank
//! let filled = over(is_truthy(), pluck_from(&submitted));
//! assert!(filled.check("name"));
//! assert!(!filled.check("email"));
//! assert!(!filled.check("phone"));
//! ```

mod combinators;
mod sequence;
mod value;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{all_of, not, over, AllOf, And, Not, Over};

// Re-export sequence predicates
pub use sequence::{
    contained_in, contains, distinct, starts_with, unique, ContainedIn, Contains, StartsWith,
};

// Re-export value predicates
pub use value::{is_defined, is_truthy, IsDefined, IsTruthy};
