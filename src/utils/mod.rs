//! Global utilities module for genutils
//!
//! The helpers live in focused submodules and are also reachable through
//! the `U` namespace.
//!
//! # Usage
//! ```rust
//! use genutils::U;
//!
//! let indent = U::get_indentation(1);
//! let camel = U::String::to_camel_case("hello world");
//! let dups = U::duplicates(&[1, 1, 2]);
//! ```

pub mod collections;
pub mod numeric;
pub mod string;
pub mod validation;

/// Global utilities module - the main entry point for all utility functions
#[allow(non_snake_case)]
pub mod U {
    use super::*;
    use crate::error::Result;
    use std::hash::Hash;
    use std::string::String as StdString;

    /// String utilities namespace
    pub mod String {
        pub use super::super::string::*;
    }

    /// Collection utilities namespace
    pub mod Collections {
        pub use super::super::collections::*;
    }

    /// Validation utilities namespace
    pub mod Validation {
        pub use super::super::validation::*;
    }

    /// Numeric utilities namespace
    pub mod Numeric {
        pub use super::super::numeric::*;
    }

    // Collection utilities

    /// Check whether a slice contains an item
    ///
    /// # Example
    /// ```rust,ignore
    /// assert!(U::contains(&["a", "b"], &"a"));
    /// ```
    pub fn contains<T: PartialEq>(array: &[T], item: &T) -> bool {
        collections::contains(array, item)
    }

    /// Distinct items in first-occurrence order; fails when `list` is absent
    ///
    /// # Example
    /// ```rust,ignore
    /// let unique = U::get_unique_items(Some(&[1, 1, 2][..]))?;
    /// assert_eq!(unique, vec![1, 2]);
    /// ```
    pub fn get_unique_items<T: PartialEq + Clone>(list: Option<&[T]>) -> Result<Vec<T>> {
        collections::get_unique_items(list)
    }

    /// Items appearing more than once
    ///
    /// # Example
    /// ```rust,ignore
    /// assert_eq!(U::duplicates(&[5, 5, 5, 5]), vec![5]);
    /// ```
    pub fn duplicates<T: Eq + Hash + Clone>(array: &[T]) -> Vec<T> {
        collections::duplicates(array)
    }

    // String utilities

    /// Four spaces per indentation level
    pub fn get_indentation(level: i32) -> StdString {
        string::get_indentation(level)
    }

    /// Count occurrences of a character
    pub fn count_occurrences(s: &str, c: char) -> usize {
        string::count_occurrences(s, c)
    }

    /// Convert space-separated words to camelCase
    ///
    /// # Example
    /// ```rust,ignore
    /// assert_eq!(U::to_camel_case("HELLO WORLD"), "helloWorld");
    /// ```
    pub fn to_camel_case(s: &str) -> StdString {
        string::to_camel_case(s)
    }

    // Validation utilities

    pub fn is_valid_variable(name: &str) -> bool {
        validation::is_valid_variable(name)
    }

    pub fn is_valid_operator(op: &str) -> bool {
        validation::is_valid_operator(op)
    }

    pub fn is_password_strong(pwd: &str) -> bool {
        validation::is_password_strong(pwd)
    }

    // Numeric utilities

    /// Arithmetic mean; fails when `numbers` is absent or empty
    pub fn calculate_average(numbers: Option<&[i32]>) -> Result<f64> {
        numeric::calculate_average(numbers)
    }
}

/// Alias for the global utilities module (for compatibility)
pub use U as Utils;
