//! Field access transforms
//!
//! Lookup by string key over anything [`Keyed`]. The two transforms here
//! are the same lookup with opposite sides fixed: [`pluck`] fixes the key
//! and maps over records, [`pluck_from`] fixes one record and maps over
//! keys.

use super::combinators::Transform;
use crate::keyed::Keyed;

/// Transform fetching a fixed key from varying records.
#[derive(Clone, Debug)]
pub struct Pluck {
    key: String,
}

impl<C: Keyed> Transform<C> for Pluck {
    type Output = Option<C::Value>;

    #[inline]
    fn apply(&self, record: &C) -> Self::Output {
        record.lookup(&self.key)
    }
}

/// Create a transform that fetches `key` from each record it is applied to.
///
/// Absent keys come back as `None` rather than failing, so the result can
/// be classified by [`is_defined`](crate::predicate::is_defined) or
/// defaulted downstream.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use millrace::transform::*;
///
/// let mut wheel = HashMap::new();
/// wheel.insert("diameter", 12);
/// let mut gear = HashMap::new();
/// gear.insert("teeth", 48);
///
/// let diameter = pluck("diameter");
/// assert_eq!(diameter.apply(&wheel), Some(12));
/// assert_eq!(diameter.apply(&gear), None);
/// ```
pub fn pluck(key: impl Into<String>) -> Pluck {
    Pluck { key: key.into() }
}

/// Transform fetching varying keys from one fixed record.
#[derive(Clone, Debug)]
pub struct PluckFrom<C>(pub C);

impl<C: Keyed + Send + Sync> Transform<str> for PluckFrom<C> {
    type Output = Option<C::Value>;

    #[inline]
    fn apply(&self, key: &str) -> Self::Output {
        self.0.lookup(key)
    }
}

impl<C: Keyed + Send + Sync> Transform<String> for PluckFrom<C> {
    type Output = Option<C::Value>;

    #[inline]
    fn apply(&self, key: &String) -> Self::Output {
        self.0.lookup(key)
    }
}

/// Create a transform that fetches keys from `record`.
///
/// The argument-reversed sibling of [`pluck`]: fix the record once, then
/// map over field names. Borrow the record (`pluck_from(&record)`) to keep
/// using it afterwards.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use millrace::transform::*;
///
/// let mut settings = HashMap::new();
/// settings.insert("theme", "dark");
/// settings.insert("lang", "en");
///
/// let setting = pluck_from(&settings);
/// let values: Vec<_> = ["theme", "lang", "font"]
///     .into_iter()
///     .map(|key| setting.apply(key))
///     .collect();
/// assert_eq!(values, vec![Some("dark"), Some("en"), None]);
/// ```
pub fn pluck_from<C>(record: C) -> PluckFrom<C> {
    PluckFrom(record)
}
