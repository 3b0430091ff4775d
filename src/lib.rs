//! # Millrace
//!
//! > *"The race carries the stream to the wheel"*
//!
//! A Rust library of composable predicate and transform combinators for
//! filter/map pipelines.
//!
//! ## Philosophy
//!
//! **Millrace** channels data the way a race channels water to a wheel:
//! - **Predicates** decide which values flow on (the `filter` half)
//! - **Transforms** derive new values as they pass (the `map` half)
//!
//! Each combinator fixes one side of a two-sided operation and lets the
//! other side vary over your data: [`contains`](predicate::contains) fixes
//! the needle, [`contained_in`](predicate::contained_in) fixes the
//! haystack; [`pluck`](transform::pluck) fixes the key,
//! [`pluck_from`](transform::pluck_from) fixes the record;
//! [`call_with`](transform::call_with) fixes the arguments. The fixed side
//! is captured once, the varying side arrives by reference at each call,
//! and nothing is ever mutated in place.
//!
//! ## Quick Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use millrace::predicate::*;
//! use millrace::transform::pluck_from;
//!
//! let mut submission = HashMap::new();
//! submission.insert("name", "Greta");
//! submission.insert("email", "");
//!
//! // Which required fields are missing or blank?
//! let filled = over(is_truthy(), pluck_from(&submission));
//! let missing: Vec<&str> = ["name", "email", "phone"]
//!     .into_iter()
//!     .filter(|field| !filled.check(*field))
//!     .collect();
//! assert_eq!(missing, vec!["email", "phone"]);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod keyed;
pub mod predicate;
pub mod transform;
pub mod truthy;

// Re-exports
pub use error::CombinatorError;
pub use keyed::Keyed;
pub use predicate::{Predicate, PredicateExt};
pub use transform::{Transform, TransformExt};
pub use truthy::Truthy;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::CombinatorError;
    pub use crate::keyed::Keyed;
    pub use crate::predicate::{
        all_of, contained_in, contains, distinct, is_defined, is_truthy, not, over, starts_with,
        unique, Predicate, PredicateExt,
    };
    pub use crate::transform::{
        call_method, call_with, concat, identity, map, pipe, pluck, pluck_from, squirt, tap,
        ucfirst, Dispatch, Transform, TransformExt,
    };
    pub use crate::truthy::Truthy;

    #[cfg(feature = "tracing")]
    pub use crate::transform::traced;
}
