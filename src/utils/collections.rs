//! Collection utilities for genutils
//!
//! Membership tests, order-preserving deduplication and duplicate detection
//! over slices. None of these functions mutate their input.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::hash::Hash;

/// Check whether `array` contains `item`
///
/// # Example
/// ```rust
/// use genutils::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains::<i32>(&[], &2));
/// ```
pub fn contains<T: PartialEq>(array: &[T], item: &T) -> bool {
    array.iter().any(|candidate| candidate == item)
}

/// Return the distinct items of `list` in first-occurrence order
///
/// Only equality is required of `T`, so this is quadratic in the number of
/// distinct items. Fails with [`Error::InvalidArgument`] when `list` is `None`.
///
/// # Example
/// ```rust
/// use genutils::get_unique_items;
///
/// let unique = get_unique_items(Some(&[1, 2, 2, 3, 3, 3, 4][..])).unwrap();
/// assert_eq!(unique, vec![1, 2, 3, 4]);
/// ```
pub fn get_unique_items<T: PartialEq + Clone>(list: Option<&[T]>) -> Result<Vec<T>> {
    let list = list.ok_or_else(|| {
        log::debug!("get_unique_items called without a list");
        Error::invalid_argument("List is absent")
    })?;

    let mut unique: Vec<T> = Vec::new();
    for item in list {
        if !contains(&unique, item) {
            unique.push(item.clone());
        }
    }

    Ok(unique)
}

/// Return every item that appears more than once in `array`
///
/// Each duplicated item is reported once, in the order of its first occurrence.
///
/// # Example
/// ```rust
/// use genutils::duplicates;
///
/// assert_eq!(duplicates(&[1, 2, 2, 3, 3, 3, 4]), vec![2, 3]);
/// ```
pub fn duplicates<T: Eq + Hash + Clone>(array: &[T]) -> Vec<T> {
    let mut counts: IndexMap<&T, usize> = IndexMap::new();

    for item in array {
        *counts.entry(item).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(item, _)| item.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        assert!(contains(&[1, 2, 3], &3));
        assert!(!contains(&[1, 2, 3], &4));
        assert!(!contains::<i32>(&[], &1));
        assert!(contains(&["a", "b"], &"b"));
    }

    #[test]
    fn test_contains_uses_value_equality() {
        let words = vec!["alpha".to_string(), "beta".to_string()];
        assert!(contains(&words, &String::from("beta")));
        assert!(!contains(&words, &String::from("Beta")));
    }

    #[test]
    fn test_get_unique_items() {
        let input = vec![1, 2, 2, 3, 3, 3, 4];
        let unique = get_unique_items(Some(&input[..])).unwrap();

        assert_eq!(unique, vec![1, 2, 3, 4]);
        // Input untouched
        assert_eq!(input, vec![1, 2, 2, 3, 3, 3, 4]);
    }

    #[test]
    fn test_get_unique_items_keeps_first_occurrence_order() {
        let input = ["b", "a", "b", "c", "a"];
        assert_eq!(
            get_unique_items(Some(&input[..])).unwrap(),
            vec!["b", "a", "c"]
        );
    }

    #[test]
    fn test_get_unique_items_empty_and_absent() {
        let empty: Vec<i32> = Vec::new();
        assert!(get_unique_items(Some(&empty[..])).unwrap().is_empty());

        let err = get_unique_items::<i32>(None).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_get_unique_items_floats() {
        // PartialEq only: NaN never equals itself, so each NaN is kept
        let input = [1.0, f64::NAN, 1.0, f64::NAN];
        let unique = get_unique_items(Some(&input[..])).unwrap();
        assert_eq!(unique.len(), 3);
        assert_eq!(unique[0], 1.0);
    }

    #[test]
    fn test_duplicates() {
        let dups = duplicates(&[1, 2, 2, 3, 3, 3, 4]);
        assert_eq!(dups.len(), 2);
        assert!(dups.contains(&2));
        assert!(dups.contains(&3));
        assert!(!dups.contains(&1));
        assert!(!dups.contains(&4));
    }

    #[test]
    fn test_duplicates_edge_cases() {
        assert!(duplicates::<i32>(&[]).is_empty());
        assert_eq!(duplicates(&[5, 5, 5, 5]), vec![5]);
        assert!(duplicates(&["x", "y", "z"]).is_empty());
    }

    #[test]
    fn test_duplicates_order() {
        assert_eq!(duplicates(&['c', 'a', 'b', 'a', 'c']), vec!['c', 'a']);
    }
}
