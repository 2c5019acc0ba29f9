//! Numeric utilities

use crate::error::{Error, Result};

/// Calculate the arithmetic mean of `numbers`
///
/// The sum is accumulated in an `i64`, so large inputs do not overflow.
/// Fails with [`Error::InvalidArgument`] when `numbers` is `None` or empty.
///
/// # Example
/// ```rust
/// use genutils::calculate_average;
///
/// assert_eq!(calculate_average(Some(&[1, 2][..])).unwrap(), 1.5);
/// assert!(calculate_average(None).is_err());
/// ```
pub fn calculate_average(numbers: Option<&[i32]>) -> Result<f64> {
    let numbers = match numbers {
        Some(numbers) if !numbers.is_empty() => numbers,
        _ => {
            log::debug!("calculate_average called with an absent or empty array");
            return Err(Error::invalid_argument("Array is absent or empty"));
        }
    };

    let sum: i64 = numbers.iter().map(|&n| i64::from(n)).sum();
    Ok(sum as f64 / numbers.len() as f64)
}
