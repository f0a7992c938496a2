use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the pattern implementations.
///
/// None of these are retried; a driver prints the error and ends the demo.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("Unsupported {kind} type: '{tag}'")]
    UnsupportedType { kind: &'static str, tag: String },

    #[error("No builder set: call set_builder() before assembling")]
    NoBuilderConfigured,

    #[error("Unable to locate global object for {type_name}")]
    GlobalObjectUnavailable { type_name: &'static str },

    #[error("Global object for {type_name} is already installed")]
    AlreadyInstalled { type_name: &'static str },

    #[error("{} listener(s) failed while handling '{event_type}'", .failures.len())]
    ListenersFailed {
        event_type: String,
        failures: Vec<ListenerFailure>,
    },
}

impl PatternError {
    pub fn unsupported(kind: &'static str, tag: impl Into<String>) -> Self {
        Self::UnsupportedType {
            kind,
            tag: tag.into(),
        }
    }
}

/// One listener's failure, recorded by position in the dispatch order.
#[derive(Debug, Clone, PartialEq)]
pub struct ListenerFailure {
    pub position: usize,
    pub message: String,
}

/// Returned by a listener that could not handle an event.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct ListenerError(pub String);

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    Parse { message: String },

    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}
