//! String-keyed lookup over record-like values
//!
//! [`Keyed`] is the seam between field-access transforms and whatever shape
//! a "record" takes at the call site. The standard maps implement it out of
//! the box, `serde_json::Value` joins them behind the `json` feature, and
//! domain types can implement it directly when a struct wants to expose
//! fields by name.
//!
//! Lookups clone the stored value. The transforms built on this trait hand
//! out owned data precisely so that one fixed source can serve a whole
//! stream of keys without borrow juggling; keep stored values cheap to
//! clone, or store references.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A record whose values can be fetched by string key.
pub trait Keyed {
    /// The value type produced by a successful lookup.
    type Value;

    /// Fetch the value stored under `key`.
    ///
    /// Absence is ordinary data here, not an error: a missing key comes back
    /// as `None` so that predicates such as
    /// [`is_defined`](crate::predicate::is_defined) can classify it.
    fn lookup(&self, key: &str) -> Option<Self::Value>;
}

impl<V: Clone, S: BuildHasher> Keyed for HashMap<String, V, S> {
    type Value = V;

    #[inline]
    fn lookup(&self, key: &str) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<V: Clone, S: BuildHasher> Keyed for HashMap<&str, V, S> {
    type Value = V;

    #[inline]
    fn lookup(&self, key: &str) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<V: Clone> Keyed for BTreeMap<String, V> {
    type Value = V;

    #[inline]
    fn lookup(&self, key: &str) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<V: Clone> Keyed for BTreeMap<&str, V> {
    type Value = V;

    #[inline]
    fn lookup(&self, key: &str) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<C: Keyed + ?Sized> Keyed for &C {
    type Value = C::Value;

    #[inline]
    fn lookup(&self, key: &str) -> Option<Self::Value> {
        (**self).lookup(key)
    }
}

/// JSON objects look up their fields; every other JSON shape has no keys.
#[cfg(feature = "json")]
impl Keyed for serde_json::Value {
    type Value = serde_json::Value;

    #[inline]
    fn lookup(&self, key: &str) -> Option<serde_json::Value> {
        self.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_lookup() {
        let mut record = HashMap::new();
        record.insert("name".to_string(), "miller");
        assert_eq!(record.lookup("name"), Some("miller"));
        assert_eq!(record.lookup("age"), None);
    }

    #[test]
    fn test_str_keyed_map_lookup() {
        let mut record = HashMap::new();
        record.insert("wheel", 12);
        assert_eq!(record.lookup("wheel"), Some(12));
        assert_eq!(record.lookup("axle"), None);
    }

    #[test]
    fn test_btree_map_lookup() {
        let mut record = BTreeMap::new();
        record.insert("a".to_string(), 1);
        record.insert("b".to_string(), 2);
        assert_eq!(record.lookup("b"), Some(2));
        assert_eq!(record.lookup("c"), None);
    }

    #[test]
    fn test_reference_forwards() {
        let mut record = BTreeMap::new();
        record.insert("k", 9);
        let borrowed = &record;
        assert_eq!(borrowed.lookup("k"), Some(9));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_object_lookup() {
        let record = serde_json::json!({"name": "miller", "age": 40});
        assert_eq!(record.lookup("age"), Some(serde_json::json!(40)));
        assert_eq!(record.lookup("height"), None);

        let not_an_object = serde_json::json!([1, 2, 3]);
        assert_eq!(not_an_object.lookup("0"), None);
    }
}
