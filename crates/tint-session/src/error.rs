#![forbid(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;
use tint_core::TintError;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Core(#[from] TintError),

    #[error("{operation} is not valid while the selector is {state}")]
    InvalidTransition {
        operation: &'static str,
        state: &'static str,
    },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("gallery record JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SessionError {
    /// The wrapped core error, if any.
    #[must_use]
    pub fn as_core(&self) -> Option<&TintError> {
        match self {
            Self::Core(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_core::IndexKind;

    #[test]
    fn core_errors_stay_transparent() {
        let err: SessionError = TintError::out_of_range(IndexKind::Hue, 9, 8).into();
        assert_eq!(err.to_string(), "hue index 9 out of range (len 8)");
        assert!(err.as_core().is_some());
    }

    #[test]
    fn validation_errors_are_joined() {
        let err = ConfigError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "invalid config: a; b");
    }

    #[test]
    fn transition_message_names_state() {
        let err = SessionError::InvalidTransition {
            operation: "dismiss_shade_selector",
            state: "closed",
        };
        assert_eq!(
            err.to_string(),
            "dismiss_shade_selector is not valid while the selector is closed"
        );
        assert!(err.as_core().is_none());
    }
}
