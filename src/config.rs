use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable overriding `indentation.width`
pub const ENV_INDENT_WIDTH: &str = "GENUTILS_INDENT_WIDTH";
/// Environment variable overriding `password.min_length`
pub const ENV_PASSWORD_MIN_LENGTH: &str = "GENUTILS_PASSWORD_MIN_LENGTH";

const MAX_INDENT_WIDTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UtilsConfig {
    #[serde(default)]
    pub indentation: IndentationConfig,

    #[serde(default)]
    pub password: PasswordPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndentationConfig {
    /// Spaces per indentation level
    #[serde(default = "default_indent_width")]
    pub width: usize,
}

/// Requirements a password has to meet to count as strong
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde(default = "default_true")]
    pub require_lowercase: bool,

    #[serde(default = "default_true")]
    pub require_uppercase: bool,

    #[serde(default = "default_true")]
    pub require_digit: bool,

    /// Any character that is not a lowercase letter, uppercase letter or ASCII digit
    #[serde(default = "default_true")]
    pub require_special: bool,
}

/// Character classes found in a password by [`PasswordPolicy::check`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordReport {
    /// Length in characters, not bytes
    pub length: usize,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

fn default_indent_width() -> usize {
    4
}
fn default_min_length() -> usize {
    8
}
fn default_true() -> bool {
    true
}

impl Default for IndentationConfig {
    fn default() -> Self {
        Self {
            width: default_indent_width(),
        }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            require_lowercase: true,
            require_uppercase: true,
            require_digit: true,
            require_special: true,
        }
    }
}

impl IndentationConfig {
    /// Build the indentation string for `level`
    ///
    /// Negative levels are treated as zero.
    ///
    /// # Example
    /// ```rust
    /// use genutils::IndentationConfig;
    ///
    /// let two = IndentationConfig { width: 2 };
    /// assert_eq!(two.indent(3), "      ");
    /// assert_eq!(two.indent(-1), "");
    /// ```
    pub fn indent(&self, level: i32) -> String {
        if level < 0 {
            log::debug!("Negative indentation level {} treated as zero", level);
            return String::new();
        }
        match (level as usize).checked_mul(self.width) {
            Some(count) => " ".repeat(count),
            None => {
                log::warn!(
                    "Indentation of {} levels at width {} overflows, returning empty string",
                    level,
                    self.width
                );
                String::new()
            }
        }
    }
}

impl PasswordPolicy {
    /// Scan `pwd` once and record which character classes it contains
    pub fn check(&self, pwd: &str) -> PasswordReport {
        let mut report = PasswordReport::default();

        for c in pwd.chars() {
            report.length += 1;
            if c.is_lowercase() {
                report.has_lower = true;
            } else if c.is_uppercase() {
                report.has_upper = true;
            } else if c.is_ascii_digit() {
                report.has_digit = true;
            } else {
                report.has_special = true;
            }
        }

        report
    }

    /// Check whether `pwd` satisfies every requirement of this policy
    pub fn is_strong(&self, pwd: &str) -> bool {
        let report = self.check(pwd);
        if report.length < self.min_length {
            return false;
        }

        (!self.require_lowercase || report.has_lower)
            && (!self.require_uppercase || report.has_upper)
            && (!self.require_digit || report.has_digit)
            && (!self.require_special || report.has_special)
    }
}

impl PasswordReport {
    /// Names of the character classes the password lacks
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.has_lower {
            missing.push("lowercase");
        }
        if !self.has_upper {
            missing.push("uppercase");
        }
        if !self.has_digit {
            missing.push("digit");
        }
        if !self.has_special {
            missing.push("special");
        }
        missing
    }
}

impl UtilsConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let content = fs::read_to_string(path_ref).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path_ref.display(),
                e
            ))
        })?;

        let config: UtilsConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}. Check TOML syntax.",
                path_ref.display(),
                e
            ))
        })?;

        config.validate()?;

        log::debug!(
            "Successfully loaded configuration from: {}",
            path_ref.display()
        );
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: UtilsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Create configuration with environment variable overrides
    pub fn from_env() -> Result<Self> {
        let mut config = UtilsConfig::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.indentation.width == 0 || self.indentation.width > MAX_INDENT_WIDTH {
            return Err(Error::config(format!(
                "indentation.width must be between 1 and {}, got {}",
                MAX_INDENT_WIDTH, self.indentation.width
            )));
        }

        if self.password.min_length == 0 {
            return Err(Error::config("password.min_length cannot be 0"));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(width) = read_env_usize(ENV_INDENT_WIDTH)? {
            self.indentation.width = width;
        }

        if let Some(min_length) = read_env_usize(ENV_PASSWORD_MIN_LENGTH)? {
            self.password.min_length = min_length;
        }

        Ok(())
    }
}

fn read_env_usize(key: &str) -> Result<Option<usize>> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map(Some).map_err(|e| {
            log::warn!("Ignoring invalid value for {}: {:?}", key, raw);
            Error::config(format!("{} must be a non-negative integer: {}", key, e))
        }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(Error::config(format!("{}: {}", key, e))),
    }
}
