//! genutils - small, pure helpers for strings, collections and numbers
//!
//! genutils provides:
//! - Collection helpers (membership, deduplication, duplicate detection)
//! - String helpers (indentation, character counting, camelCase conversion)
//! - Validators (variable names, operators, password strength)
//! - Numeric helpers (integer averages)
//!
//! Every function is also reachable through the [`U`] namespace:
//!
//! ```rust
//! use genutils::U;
//!
//! assert_eq!(U::to_camel_case("hello world"), "helloWorld");
//! assert!(U::is_valid_operator("**"));
//! ```

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

pub mod config;
pub mod error;
pub mod utils;

// Re-export main types for public API
pub use config::{IndentationConfig, PasswordPolicy, PasswordReport, UtilsConfig};
pub use error::{Error, Result};
pub use utils::{Utils, U};

pub use utils::collections::{contains, duplicates, get_unique_items};
pub use utils::numeric::calculate_average;
pub use utils::string::{count_occurrences, get_indentation, to_camel_case};
pub use utils::validation::{
    is_password_strong, is_valid_operator, is_valid_variable, VALID_OPERATORS,
};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::*;
    pub use crate::utils::{Utils, U};
}
