//! Sequence predicates
//!
//! Membership, prefix, and first-occurrence checks. Each predicate here
//! works on element sequences (`Vec<T>`, slices) and on strings, where the
//! same question is asked of characters: `contains` becomes substring
//! search, `starts_with` becomes prefix match.
//!
//! [`contains`] and [`contained_in`] run the same scan with their ends
//! swapped; which to reach for depends on which side of the test is fixed
//! at the call site.

use super::combinators::Predicate;

/// Predicate testing haystacks for a fixed needle.
#[derive(Clone, Copy, Debug)]
pub struct Contains<N>(pub N);

impl<T: PartialEq + Send + Sync> Predicate<Vec<T>> for Contains<T> {
    #[inline]
    fn check(&self, haystack: &Vec<T>) -> bool {
        haystack.contains(&self.0)
    }
}

impl<T: PartialEq + Send + Sync> Predicate<[T]> for Contains<T> {
    #[inline]
    fn check(&self, haystack: &[T]) -> bool {
        haystack.contains(&self.0)
    }
}

impl<N: AsRef<str> + Send + Sync> Predicate<str> for Contains<N> {
    #[inline]
    fn check(&self, haystack: &str) -> bool {
        haystack.contains(self.0.as_ref())
    }
}

impl<N: AsRef<str> + Send + Sync> Predicate<String> for Contains<N> {
    #[inline]
    fn check(&self, haystack: &String) -> bool {
        haystack.contains(self.0.as_ref())
    }
}

/// Create a predicate that tests haystacks for `needle`.
///
/// The needle is fixed, the haystack varies: this is the shape for scanning
/// many collections for one value. For the opposite shape use
/// [`contained_in`].
///
/// # Example
///
/// ```rust
/// use millrace::predicate::*;
///
/// let has_seven = contains(7);
/// assert!(has_seven.check(&vec![5, 6, 7]));
/// assert!(!has_seven.check(&vec![1, 2, 3]));
///
/// let mentions_flow = contains("flow");
/// assert!(mentions_flow.check("overflow gate"));
/// ```
pub fn contains<N>(needle: N) -> Contains<N> {
    Contains(needle)
}

/// Predicate testing needles against a fixed haystack.
#[derive(Clone, Debug)]
pub struct ContainedIn<H>(pub H);

impl<T: PartialEq + Send + Sync> Predicate<T> for ContainedIn<Vec<T>> {
    #[inline]
    fn check(&self, needle: &T) -> bool {
        self.0.contains(needle)
    }
}

impl<T: PartialEq + Send + Sync, const N: usize> Predicate<T> for ContainedIn<[T; N]> {
    #[inline]
    fn check(&self, needle: &T) -> bool {
        self.0.contains(needle)
    }
}

impl<T: PartialEq + Sync> Predicate<T> for ContainedIn<&[T]> {
    #[inline]
    fn check(&self, needle: &T) -> bool {
        self.0.contains(needle)
    }
}

impl Predicate<str> for ContainedIn<String> {
    #[inline]
    fn check(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl Predicate<String> for ContainedIn<String> {
    #[inline]
    fn check(&self, needle: &String) -> bool {
        self.0.contains(needle.as_str())
    }
}

impl Predicate<str> for ContainedIn<&str> {
    #[inline]
    fn check(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl Predicate<String> for ContainedIn<&str> {
    #[inline]
    fn check(&self, needle: &String) -> bool {
        self.0.contains(needle.as_str())
    }
}

/// Create a predicate that tests needles against `haystack`.
///
/// The haystack is fixed, the needle varies: this is the shape for
/// filtering values by membership in a known set. On string haystacks the
/// test is substring containment.
///
/// # Example
///
/// ```rust
/// use millrace::predicate::*;
///
/// let allowed = contained_in(vec!["read", "write"]);
/// assert!(allowed.check(&"read"));
/// assert!(!allowed.check(&"delete"));
///
/// let in_greeting = contained_in("hello there");
/// assert!(in_greeting.check("there"));
/// assert!(!in_greeting.check("missing"));
/// ```
pub fn contained_in<H>(haystack: H) -> ContainedIn<H> {
    ContainedIn(haystack)
}

/// Predicate testing whether haystacks start with a fixed needle.
#[derive(Clone, Copy, Debug)]
pub struct StartsWith<N>(pub N);

impl<T: PartialEq + Send + Sync> Predicate<Vec<T>> for StartsWith<T> {
    #[inline]
    fn check(&self, haystack: &Vec<T>) -> bool {
        haystack.first() == Some(&self.0)
    }
}

impl<T: PartialEq + Send + Sync> Predicate<[T]> for StartsWith<T> {
    #[inline]
    fn check(&self, haystack: &[T]) -> bool {
        haystack.first() == Some(&self.0)
    }
}

impl<S: AsRef<str> + Send + Sync> Predicate<str> for StartsWith<S> {
    #[inline]
    fn check(&self, haystack: &str) -> bool {
        haystack.starts_with(self.0.as_ref())
    }
}

impl<S: AsRef<str> + Send + Sync> Predicate<String> for StartsWith<S> {
    #[inline]
    fn check(&self, haystack: &String) -> bool {
        haystack.starts_with(self.0.as_ref())
    }
}

/// Create a predicate that tests whether a haystack starts with `needle`.
///
/// On sequences this is first-element equality; on strings it is a prefix
/// match, so multi-character needles work. Empty haystacks never pass an
/// element check, and every string starts with the empty prefix.
///
/// # Example
///
/// ```rust
/// use millrace::predicate::*;
///
/// let leads_with_one = starts_with(1);
/// assert!(leads_with_one.check(&vec![1, 2, 3]));
/// assert!(!leads_with_one.check(&vec![2, 1]));
///
/// let testish = starts_with("test");
/// assert!(testish.check("testing"));
/// assert!(!testish.check("attest"));
/// ```
pub fn starts_with<N>(needle: N) -> StartsWith<N> {
    StartsWith(needle)
}

/// Check whether `index` is the first position at which `value` occurs in
/// `items`.
///
/// Shaped for filters that see each element together with its position:
/// keeping exactly the elements this accepts drops duplicates while
/// preserving first-occurrence order. [`distinct`] packages that loop.
///
/// # Example
///
/// ```rust
/// use millrace::predicate::unique;
///
/// let items = ["a", "b", "a"];
/// assert!(unique(&"a", 0, &items));
/// assert!(unique(&"b", 1, &items));
/// assert!(!unique(&"a", 2, &items));
/// ```
pub fn unique<T: PartialEq>(value: &T, index: usize, items: &[T]) -> bool {
    items.iter().position(|candidate| candidate == value) == Some(index)
}

/// Copy a sequence without its duplicates, keeping first occurrences in
/// their original order.
///
/// # Example
///
/// ```rust
/// use millrace::predicate::distinct;
///
/// assert_eq!(distinct(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
pub fn distinct<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(index, value)| unique(*value, *index, items))
        .map(|(_, value)| value.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_elements() {
        let p = contains(2);
        assert!(p.check(&vec![1, 2, 3]));
        assert!(!p.check(&vec![4, 5, 6]));
        assert!(!p.check(&Vec::<i32>::new()));
    }

    #[test]
    fn test_contains_on_slices() {
        let p = contains("b");
        let items = ["a", "b", "c"];
        assert!(p.check(&items[..]));
    }

    #[test]
    fn test_contains_substring() {
        let p = contains("race");
        assert!(p.check("millrace"));
        assert!(p.check(&String::from("racecourse")));
        assert!(!p.check("mill"));
    }

    #[test]
    fn test_contained_in_elements() {
        let p = contained_in(vec![1, 2, 3]);
        assert!(p.check(&2));
        assert!(!p.check(&9));
    }

    #[test]
    fn test_contained_in_fixed_array_and_slice() {
        let p = contained_in(["on", "off"]);
        assert!(p.check(&"on"));
        assert!(!p.check(&"standby"));

        let window: &[i32] = &[4, 5];
        let q = contained_in(window);
        assert!(q.check(&5));
        assert!(!q.check(&6));
    }

    #[test]
    fn test_contained_in_substring() {
        let p = contained_in("the quick brown fox");
        assert!(p.check("quick"));
        assert!(p.check(&String::from("fox")));
        assert!(!p.check("slow"));
    }

    #[test]
    fn test_empty_needle_is_contained_in_every_string() {
        let p = contained_in("anything");
        assert!(p.check(""));
        let q = contained_in(String::new());
        assert!(!q.check("a"));
        assert!(q.check(""));
    }

    #[test]
    fn test_starts_with_first_element() {
        let p = starts_with(1);
        assert!(p.check(&vec![1, 2, 3]));
        assert!(!p.check(&vec![2, 1]));
        assert!(!p.check(&Vec::<i32>::new()));
    }

    #[test]
    fn test_starts_with_prefix() {
        let p = starts_with("test");
        assert!(p.check("testing"));
        assert!(!p.check("swordfish"));
        assert!(p.check(&String::from("test")));
    }

    #[test]
    fn test_every_string_starts_with_the_empty_prefix() {
        let p = starts_with("");
        assert!(p.check(""));
        assert!(p.check("anything"));
    }

    #[test]
    fn test_unique_finds_first_occurrences() {
        let items = [1, 2, 2, 3, 1];
        assert!(unique(&1, 0, &items));
        assert!(unique(&2, 1, &items));
        assert!(!unique(&2, 2, &items));
        assert!(!unique(&1, 4, &items));
    }

    #[test]
    fn test_unique_rejects_absent_values() {
        let items = [1, 2, 3];
        assert!(!unique(&9, 0, &items));
    }

    #[test]
    fn test_unique_as_positional_filter() {
        let items = vec!["a", "b", "a", "c", "b"];
        let deduped: Vec<&str> = items
            .iter()
            .enumerate()
            .filter(|(i, v)| unique(*v, *i, &items))
            .map(|(_, v)| *v)
            .collect();
        assert_eq!(deduped, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_distinct() {
        assert_eq!(distinct(&["x", "y", "x"]), vec!["x", "y"]);
        assert_eq!(distinct(&Vec::<i32>::new()), Vec::<i32>::new());
    }
}
