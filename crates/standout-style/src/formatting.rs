//! Semantic styles for host output streams and formatted objects.

use crate::style::{style_accessors, StyleString};

/// Styles for semantic output categories.
///
/// | Field | Default |
/// |-------|---------|
/// | `format_accent` | `ESC[32;1m` |
/// | `table_header` | `ESC[32;1m` |
/// | `error_accent` | `ESC[36;1m` |
/// | `error` | `ESC[31;1m` |
/// | `warning` | `ESC[33;1m` |
/// | `verbose` | `ESC[33;1m` |
/// | `debug` | `ESC[33;1m` |
///
/// # Example
///
/// ```rust
/// use standout_style::FormattingData;
///
/// let mut formatting = FormattingData::default();
/// formatting.set_error("\x1b[31m").unwrap();
/// assert_eq!(formatting.error(), "\x1b[31m");
///
/// assert!(formatting.set_error("\x1b[31mBOOM").is_err());
/// assert_eq!(formatting.error(), "\x1b[31m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingData {
    format_accent: StyleString,
    table_header: StyleString,
    error_accent: StyleString,
    error: StyleString,
    warning: StyleString,
    verbose: StyleString,
    debug: StyleString,
}

impl Default for FormattingData {
    fn default() -> Self {
        Self {
            format_accent: StyleString::from_static("\x1b[32;1m"),
            table_header: StyleString::from_static("\x1b[32;1m"),
            error_accent: StyleString::from_static("\x1b[36;1m"),
            error: StyleString::from_static("\x1b[31;1m"),
            warning: StyleString::from_static("\x1b[33;1m"),
            verbose: StyleString::from_static("\x1b[33;1m"),
            debug: StyleString::from_static("\x1b[33;1m"),
        }
    }
}

impl FormattingData {
    style_accessors! {
        /// Accent style used when formatting objects, e.g. list labels.
        format_accent / set_format_accent,
        /// Style for table headers.
        table_header / set_table_header,
        /// Accent style within error records.
        error_accent / set_error_accent,
        /// Style for error messages.
        error / set_error,
        /// Style for warning messages.
        warning / set_warning,
        /// Style for verbose messages.
        verbose / set_verbose,
        /// Style for debug messages.
        debug / set_debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;

    #[test]
    fn test_defaults() {
        let f = FormattingData::default();
        assert_eq!(f.format_accent(), "\x1b[32;1m");
        assert_eq!(f.table_header(), "\x1b[32;1m");
        assert_eq!(f.error_accent(), "\x1b[36;1m");
        assert_eq!(f.error(), "\x1b[31;1m");
        assert_eq!(f.warning(), "\x1b[33;1m");
        assert_eq!(f.verbose(), "\x1b[33;1m");
        assert_eq!(f.debug(), "\x1b[33;1m");
    }

    #[test]
    fn test_set_error_accepts_decoration() {
        let mut f = FormattingData::default();
        f.set_error("\x1b[31m").unwrap();
        assert_eq!(f.error(), "\x1b[31m");
    }

    #[test]
    fn test_set_error_rejects_text() {
        let mut f = FormattingData::default();
        let err = f.set_error("\x1b[31mBOOM").unwrap_err();
        assert_eq!(
            err,
            StyleError::ContentViolation {
                plain_text: "BOOM".to_string()
            }
        );
        assert_eq!(f.error(), "\x1b[31;1m");
    }

    #[test]
    fn test_empty_value_is_accepted() {
        let mut f = FormattingData::default();
        f.set_table_header("").unwrap();
        assert!(f.table_header().is_empty());
    }

    #[test]
    fn test_setters_are_independent() {
        let mut f = FormattingData::default();
        f.set_warning("\x1b[93m").unwrap();
        assert_eq!(f.warning(), "\x1b[93m");
        assert_eq!(f.verbose(), "\x1b[33;1m");
        assert_eq!(f.debug(), "\x1b[33;1m");
    }

    #[test]
    fn test_every_setter_rejects_text() {
        let mut f = FormattingData::default();
        let before = f.clone();
        assert!(f.set_format_accent("a").is_err());
        assert!(f.set_table_header("b").is_err());
        assert!(f.set_error_accent("c").is_err());
        assert!(f.set_error("d").is_err());
        assert!(f.set_warning("e").is_err());
        assert!(f.set_verbose("f").is_err());
        assert!(f.set_debug("g").is_err());
        assert_eq!(f, before);
    }
}
