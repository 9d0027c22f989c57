//! Configuration errors
//!
//! Every [`ConfigError`] is raised before any step is recorded, so a
//! rejected configuration never replaces the active session. None of them
//! are fatal: the front-end shows the message and asks again.

use crate::recorder::Category;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown category '{0}' (expected sorting or searching)")]
    UnknownCategory(String),

    #[error("Unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("'{algorithm}' is not a {category} algorithm")]
    CategoryMismatch {
        algorithm: String,
        category: Category,
    },

    #[error("Please enter a search target")]
    MissingTarget,

    #[error("Please enter a valid target: '{0}' is not an integer")]
    InvalidTarget(String),
}

/// Parse a user-entered search target
pub fn parse_target(input: Option<&str>) -> Result<i32, ConfigError> {
    let text = input.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ConfigError::MissingTarget);
    }
    text.parse::<i32>()
        .map_err(|_| ConfigError::InvalidTarget(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(Some(" 42 ")), Ok(42));
        assert_eq!(parse_target(Some("-3")), Ok(-3));
        assert_eq!(parse_target(None), Err(ConfigError::MissingTarget));
        assert_eq!(parse_target(Some("  ")), Err(ConfigError::MissingTarget));
        assert_eq!(
            parse_target(Some("4x")),
            Err(ConfigError::InvalidTarget("4x".to_string()))
        );
    }

    #[test]
    fn test_messages() {
        let err = ConfigError::CategoryMismatch {
            algorithm: "bubble".to_string(),
            category: Category::Searching,
        };
        assert_eq!(err.to_string(), "'bubble' is not a searching algorithm");
        assert!(ConfigError::InvalidTarget("x".into())
            .to_string()
            .starts_with("Please enter a valid target"));
    }
}
