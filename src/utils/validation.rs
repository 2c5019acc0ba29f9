//! Input validators
//!
//! Checks for variable names, arithmetic operators and password strength.

use crate::config::PasswordPolicy;

/// Operators accepted by [`is_valid_operator`]
pub const VALID_OPERATORS: [&str; 7] = ["+", "-", "*", "/", "//", "%", "**"];

/// Check that `name` consists only of lowercase letters
///
/// The empty string is valid.
///
/// # Example
/// ```rust
/// use genutils::is_valid_variable;
///
/// assert!(is_valid_variable("counter"));
/// assert!(!is_valid_variable("myVar"));
/// ```
pub fn is_valid_variable(name: &str) -> bool {
    name.chars().all(char::is_lowercase)
}

/// Check that `op` is exactly one of [`VALID_OPERATORS`]
///
/// No trimming is done, so `" +"` is rejected.
pub fn is_valid_operator(op: &str) -> bool {
    VALID_OPERATORS.contains(&op)
}

/// Check a password against the default [`PasswordPolicy`]
///
/// A strong password is at least 8 characters long and contains a lowercase
/// letter, an uppercase letter, an ASCII digit and a special character
/// (anything that is none of the previous three).
///
/// # Example
/// ```rust
/// use genutils::is_password_strong;
///
/// assert!(is_password_strong("Pass1234!"));
/// assert!(!is_password_strong("Password1"));
/// ```
pub fn is_password_strong(pwd: &str) -> bool {
    PasswordPolicy::default().is_strong(pwd)
}
