//! Error types for style registry mutations.
//!
//! This module provides [`StyleError`], the single error type returned by every
//! fallible operation in the crate. Errors are raised at the point of mutation;
//! the offending value is never stored, so a failed call leaves the registry
//! exactly as it was.

use thiserror::Error;

/// Error type for style registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A style value contained renderable text.
    ///
    /// Carries the plain-text rendering of the rejected value (control
    /// sequences removed) so the user can see what leaked through.
    #[error("style value must only contain terminal control sequences, found text: '{plain_text}'")]
    ContentViolation {
        /// The visible part of the rejected value.
        plain_text: String,
    },

    /// An extension key did not start with a period.
    #[error("extension '{extension}' must start with a period")]
    InvalidExtension {
        /// The rejected extension key.
        extension: String,
    },

    /// The progress bar width is below the minimum the bar can render in.
    #[error("progress bar width {width} is too small, it must be at least {min}")]
    WidthOutOfRange {
        /// The rejected width.
        width: usize,
        /// The smallest accepted width.
        min: usize,
    },

    /// An explicit add targeted an extension that is already mapped.
    #[error("extension '{extension}' is already mapped")]
    DuplicateExtension {
        /// The extension that already exists (as given by the caller).
        extension: String,
    },

    /// A name could not be parsed into one of the crate's enums.
    #[error("unknown {kind}: '{name}'")]
    UnknownName {
        /// What was being parsed (e.g. "output rendering").
        kind: &'static str,
        /// The unrecognized input.
        name: String,
    },

    /// Configuration text could not be parsed.
    #[error("invalid style configuration: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for StyleError {
    fn from(err: serde_yaml::Error) -> Self {
        StyleError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_violation_display() {
        let err = StyleError::ContentViolation {
            plain_text: "BOOM".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("BOOM"));
        assert!(msg.contains("control sequences"));
    }

    #[test]
    fn test_invalid_extension_display() {
        let err = StyleError::InvalidExtension {
            extension: "txt".to_string(),
        };
        assert!(err.to_string().contains("'txt'"));
        assert!(err.to_string().contains("period"));
    }

    #[test]
    fn test_width_out_of_range_display() {
        let err = StyleError::WidthOutOfRange { width: 17, min: 18 };
        let msg = err.to_string();
        assert!(msg.contains("17"));
        assert!(msg.contains("18"));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<Vec<u8>>("{ not: a list }").unwrap_err();
        let err: StyleError = yaml_err.into();
        assert!(matches!(err, StyleError::Config(_)));
    }
}
