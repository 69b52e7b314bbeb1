//! Validated style values.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::content::{ensure_no_content, AnsiContentMeasure, ContentMeasure};
use crate::error::StyleError;

/// A string of terminal control sequences with no renderable content.
///
/// The only public constructors run the content check, so a `StyleString`
/// in hand is always pure decoration. Values are stored verbatim: no
/// normalization, escaping or length cap.
///
/// # Example
///
/// ```rust
/// use standout_style::{StyleError, StyleString};
///
/// let red = StyleString::new("\x1b[31m").unwrap();
/// assert_eq!(red, "\x1b[31m");
///
/// let err = StyleString::new("\x1b[31mBOOM").unwrap_err();
/// assert!(matches!(err, StyleError::ContentViolation { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleString(Cow<'static, str>);

impl StyleString {
    /// Validates `value` with the default [`AnsiContentMeasure`].
    pub fn new(value: impl Into<String>) -> Result<Self, StyleError> {
        Self::parse_with(value, &AnsiContentMeasure)
    }

    /// Validates `value` with a caller-supplied content measure.
    pub fn parse_with<M>(value: impl Into<String>, measure: &M) -> Result<Self, StyleError>
    where
        M: ContentMeasure + ?Sized,
    {
        let value = value.into();
        ensure_no_content(&value, measure)?;
        Ok(StyleString(Cow::Owned(value)))
    }

    /// The empty decoration.
    pub const fn empty() -> Self {
        StyleString(Cow::Borrowed(""))
    }

    /// Wraps a compile-time sequence without validation.
    pub(crate) const fn from_static(value: &'static str) -> Self {
        StyleString(Cow::Borrowed(value))
    }

    /// Wraps a sequence the crate generated itself without validation.
    pub(crate) fn trusted(value: String) -> Self {
        StyleString(Cow::Owned(value))
    }

    /// Returns the raw sequence.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the raw sequence.
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }
}

impl Default for StyleString {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for StyleString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StyleString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for StyleString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StyleString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<StyleString> for String {
    fn from(value: StyleString) -> Self {
        value.into_string()
    }
}

impl TryFrom<String> for StyleString {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StyleString::new(value)
    }
}

impl TryFrom<&str> for StyleString {
    type Error = StyleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        StyleString::new(value)
    }
}

impl FromStr for StyleString {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleString::new(s)
    }
}

/// Conversion accepted by every style setter.
///
/// Raw strings are validated with the default measure; an existing
/// [`StyleString`] passes through unchanged.
pub trait IntoStyleString {
    /// Performs the conversion, validating raw input.
    fn into_style_string(self) -> Result<StyleString, StyleError>;
}

impl IntoStyleString for StyleString {
    fn into_style_string(self) -> Result<StyleString, StyleError> {
        Ok(self)
    }
}

impl IntoStyleString for &StyleString {
    fn into_style_string(self) -> Result<StyleString, StyleError> {
        Ok(self.clone())
    }
}

impl IntoStyleString for &str {
    fn into_style_string(self) -> Result<StyleString, StyleError> {
        StyleString::new(self)
    }
}

impl IntoStyleString for String {
    fn into_style_string(self) -> Result<StyleString, StyleError> {
        StyleString::new(self)
    }
}

impl IntoStyleString for &String {
    fn into_style_string(self) -> Result<StyleString, StyleError> {
        StyleString::new(self.as_str())
    }
}
