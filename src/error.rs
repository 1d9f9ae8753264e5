use std::fmt;

use crate::{EventType, TemplateKey};

/// Errors that can occur in the access log crate.
///
/// Formatting and the resume guard are total; only building a template
/// table from caller-supplied strings can fail.
#[derive(Debug)]
pub enum Error {
    /// The supplied configuration was rejected
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

/// A rejected template configuration with details about what failed.
#[derive(Debug)]
pub struct ConfigError {
    /// The kind of problem found
    pub kind: ConfigErrorKind,
    /// Human-readable message explaining the problem
    pub message: String,
}

impl ConfigError {
    /// Creates a new configuration error.
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// The kind of configuration problem.
#[derive(Debug, PartialEq)]
pub enum ConfigErrorKind {
    /// A verb was configured as an empty string
    EmptyVerb(EventType),
    /// A template references an argument its bucket never supplies
    UnexpectedArgument {
        /// The template containing the placeholder
        key: TemplateKey,
        /// The argument position referenced
        index: usize,
    },
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErrorKind::EmptyVerb(event_type) => {
                write!(f, "Empty verb for '{}'", event_type)
            }
            ConfigErrorKind::UnexpectedArgument { key, index } => {
                write!(f, "Template '{}' references argument {{{}}}", key, index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let error = ConfigError::new(
            ConfigErrorKind::UnexpectedArgument {
                key: TemplateKey::Seconds,
                index: 1,
            },
            "seconds template only receives the verb",
        );

        assert_eq!(
            error.to_string(),
            "Template 'seconds' references argument {1}: seconds template only receives the verb"
        );
    }

    #[test]
    fn error_wraps_config_error() {
        let error: Error =
            ConfigError::new(ConfigErrorKind::EmptyVerb(EventType::Viewed), "blank").into();

        assert!(error.to_string().starts_with("Invalid configuration: "));
        assert!(error.to_string().contains("viewed"));
    }
}
