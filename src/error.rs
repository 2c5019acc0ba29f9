use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for genutils
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if the error was caused by a caller-supplied argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Get a stable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidArgument(_) => "E_INVALID_ARGUMENT",
            Error::Config(_) => "E_CONFIG",
            Error::Io(_) => "E_IO",
            Error::Toml(_) => "E_TOML",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::invalid_argument("x").error_code(),
            "E_INVALID_ARGUMENT"
        );
        assert_eq!(Error::config("x").error_code(), "E_CONFIG");

        let io = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.error_code(), "E_IO");
        assert!(!io.is_invalid_argument());
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("List is absent");
        assert_eq!(err.to_string(), "Invalid argument: List is absent");
        assert!(err.is_invalid_argument());
    }
}
