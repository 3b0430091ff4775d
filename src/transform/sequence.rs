//! Sequence transforms
//!
//! Element-wise mapping and one-level flattening. Both leave their input
//! untouched and build a fresh `Vec`.

use super::combinators::Transform;

/// Transform applying an inner transform to every element.
#[derive(Clone, Copy, Debug)]
pub struct Map<M>(pub M);

impl<T, M: Transform<T>> Transform<Vec<T>> for Map<M> {
    type Output = Vec<M::Output>;

    #[inline]
    fn apply(&self, items: &Vec<T>) -> Self::Output {
        items.iter().map(|item| self.0.apply(item)).collect()
    }
}

impl<T, M: Transform<T>> Transform<[T]> for Map<M> {
    type Output = Vec<M::Output>;

    #[inline]
    fn apply(&self, items: &[T]) -> Self::Output {
        items.iter().map(|item| self.0.apply(item)).collect()
    }
}

/// Create a transform that applies `modifier` to each element of a
/// sequence, yielding a new `Vec` in the same order.
///
/// An empty input gives an empty output. The inner transform can itself be
/// a composed pipeline.
///
/// # Example
///
/// ```rust
/// use millrace::transform::*;
///
/// let doubled = map(|n: &i32| n * 2);
/// assert_eq!(doubled.apply(&vec![1, 2, 3]), vec![2, 4, 6]);
/// ```
pub fn map<M>(modifier: M) -> Map<M> {
    Map(modifier)
}

/// Transform joining nested sequences into one flat sequence.
///
/// Two input shapes are accepted. A sequence of sequences flattens one
/// level, in order. A pair of sequences joins its two halves, which is the
/// step shape a left fold wants. The shapes agree: flattening `[a, b]`
/// gives the same sequence as joining `(a, b)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Concat;

impl<T: Clone> Transform<Vec<Vec<T>>> for Concat {
    type Output = Vec<T>;

    #[inline]
    fn apply(&self, nested: &Vec<Vec<T>>) -> Vec<T> {
        nested.iter().flatten().cloned().collect()
    }
}

impl<T: Clone> Transform<[Vec<T>]> for Concat {
    type Output = Vec<T>;

    #[inline]
    fn apply(&self, nested: &[Vec<T>]) -> Vec<T> {
        nested.iter().flatten().cloned().collect()
    }
}

impl<T: Clone> Transform<(Vec<T>, Vec<T>)> for Concat {
    type Output = Vec<T>;

    #[inline]
    fn apply(&self, (left, right): &(Vec<T>, Vec<T>)) -> Vec<T> {
        left.iter().chain(right).cloned().collect()
    }
}

/// Create the flattening transform.
///
/// # Example
///
/// ```rust
/// use millrace::transform::*;
///
/// let flat = concat().apply(&vec![vec![1, 2, 3], vec![4, 5, 6]]);
/// assert_eq!(flat, vec![1, 2, 3, 4, 5, 6]);
/// ```
///
/// The pair shape slots into folds over many sequences:
///
/// ```rust
/// use millrace::transform::*;
///
/// let lists = vec![vec![1, 2], vec![3], vec![4, 5]];
/// let joined = lists
///     .into_iter()
///     .reduce(|acc, next| concat().apply(&(acc, next)))
///     .unwrap_or_default();
/// assert_eq!(joined, vec![1, 2, 3, 4, 5]);
/// ```
pub fn concat() -> Concat {
    Concat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_length_and_order() {
        let stringify = map(|n: &i32| n.to_string());
        assert_eq!(
            stringify.apply(&vec![3, 1, 2]),
            vec!["3".to_string(), "1".to_string(), "2".to_string()]
        );
    }

    #[test]
    fn test_map_leaves_input_untouched() {
        let source = vec![1, 2, 3];
        let doubled = map(|n: &i32| n * 2);
        assert_eq!(doubled.apply(&source), vec![2, 4, 6]);
        assert_eq!(source, vec![1, 2, 3]);
    }

    #[test]
    fn test_map_on_empty_input() {
        let doubled = map(|n: &i32| n * 2);
        assert_eq!(doubled.apply(&Vec::<i32>::new()), Vec::<i32>::new());
    }

    #[test]
    fn test_map_over_slices() {
        let lengths = map(|s: &&str| s.len());
        let words = ["mill", "race"];
        assert_eq!(lengths.apply(&words[..]), vec![4, 4]);
    }

    #[test]
    fn test_concat_flattens_one_level() {
        let flat = concat().apply(&vec![vec![1], vec![], vec![2, 3]]);
        assert_eq!(flat, vec![1, 2, 3]);
    }

    #[test]
    fn test_concat_joins_pairs() {
        let joined = concat().apply(&(vec!["a"], vec!["b", "c"]));
        assert_eq!(joined, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_concat_modes_agree() {
        let left = vec![1, 2];
        let right = vec![3];
        let via_pair = concat().apply(&(left.clone(), right.clone()));
        let via_nested = concat().apply(&vec![left, right]);
        assert_eq!(via_pair, via_nested);
    }

    #[test]
    fn test_concat_of_nothing_is_empty() {
        assert_eq!(
            concat().apply(&Vec::<Vec<i32>>::new()),
            Vec::<i32>::new()
        );
        assert_eq!(
            concat().apply(&(Vec::<i32>::new(), Vec::new())),
            Vec::<i32>::new()
        );
    }
}
