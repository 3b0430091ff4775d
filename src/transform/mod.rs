//! Transform combinators for composable value derivation
//!
//! This module provides composable transforms, the mapping half of a
//! pipeline: where predicates decide, transforms derive. A transform takes
//! its input by reference and produces an owned output, so mapping never
//! disturbs the source data.
//!
//! The same fix-one-side convention as the predicate module runs through
//! here: [`pluck`] fixes a key and maps over records, [`pluck_from`] fixes
//! a record and maps over keys, [`call_with`] fixes arguments and maps over
//! functions.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use millrace::transform::*;
//!
//! let records = vec![
//!     HashMap::from([("name", "alice"), ("role", "admin")]),
//!     HashMap::from([("name", "bo")]),
//! ];
//!
//! let roles: Vec<_> = records.iter().map(|r| pluck("role").apply(r)).collect();
//! assert_eq!(roles, vec![Some("admin"), None]);
//! ```
//!
//! # Composition
//!
//! Transforms chain left to right with [`pipe`], and lift over sequences
//! with [`map`]:
//!
//! ```rust
//! use millrace::transform::*;
//!
//! let presentable = map(pipe(|s: &String| s.trim().to_string(), |s: &String| s.to_uppercase()));
//! let cleaned = presentable.apply(&vec!["  ok  ".to_string(), "go".to_string()]);
//! assert_eq!(cleaned, vec!["OK", "GO"]);
//! ```

mod access;
mod call;
mod combinators;
mod constant;
mod inspect;
mod sequence;
mod string;

// Re-export core trait
pub use combinators::{Transform, TransformExt};

// Re-export composition combinators
pub use combinators::{identity, pipe, Identity, Pipe};

// Re-export field access transforms
pub use access::{pluck, pluck_from, Pluck, PluckFrom};

// Re-export invocation transforms
pub use call::{call_method, call_with, CallMethod, CallWith, Dispatch};

// Re-export sequence transforms
pub use sequence::{concat, map, Concat, Map};

// Re-export string transforms
pub use string::{ucfirst, Ucfirst};

// Re-export constant and observation transforms
pub use constant::{squirt, Squirt};
pub use inspect::{tap, Tap};

#[cfg(feature = "tracing")]
pub use inspect::{traced, Traced};
