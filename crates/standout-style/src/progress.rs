//! Progress bar configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StyleError;
use crate::style::{style_accessors, StyleString};

/// Narrowest width the progress bar can render in.
///
/// The bar's fixed decorations take up this many columns.
pub const MIN_PROGRESS_WIDTH: usize = 18;

/// Default maximum width of the progress bar.
pub const DEFAULT_PROGRESS_WIDTH: usize = 120;

/// How progress is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProgressView {
    /// A single compact line.
    #[default]
    Minimal,
    /// The traditional multi-line block.
    Classic,
}

impl ProgressView {
    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            ProgressView::Minimal => "Minimal",
            ProgressView::Classic => "Classic",
        }
    }
}

impl fmt::Display for ProgressView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProgressView {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(ProgressView::Minimal),
            "classic" => Ok(ProgressView::Classic),
            _ => Err(StyleError::UnknownName {
                kind: "progress view",
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ProgressView {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProgressView> for String {
    fn from(view: ProgressView) -> Self {
        view.name().to_string()
    }
}

/// Progress bar settings.
///
/// # Example
///
/// ```rust
/// use standout_style::{ProgressConfiguration, ProgressView};
///
/// let mut progress = ProgressConfiguration::default();
/// assert_eq!(progress.max_width(), 120);
///
/// assert!(progress.set_max_width(17).is_err());
/// progress.set_max_width(18).unwrap();
/// assert_eq!(progress.max_width(), 18);
///
/// progress.set_view(ProgressView::Classic);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressConfiguration {
    style: StyleString,
    max_width: usize,
    view: ProgressView,
    use_osc_indicator: bool,
}

impl Default for ProgressConfiguration {
    fn default() -> Self {
        Self {
            style: StyleString::from_static("\x1b[33;1m"),
            max_width: DEFAULT_PROGRESS_WIDTH,
            view: ProgressView::default(),
            use_osc_indicator: false,
        }
    }
}

impl ProgressConfiguration {
    style_accessors! {
        /// Style of the bar itself.
        style / set_style,
    }

    /// Maximum width of the bar, in columns.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Sets the maximum width.
    ///
    /// Widths below [`MIN_PROGRESS_WIDTH`] fail with
    /// [`StyleError::WidthOutOfRange`] and leave the current width in place.
    pub fn set_max_width(&mut self, width: usize) -> Result<(), StyleError> {
        check_width(width)?;
        self.max_width = width;
        Ok(())
    }

    /// How the bar is drawn.
    pub fn view(&self) -> ProgressView {
        self.view
    }

    /// Switches between the minimal and classic bar.
    pub fn set_view(&mut self, view: ProgressView) {
        self.view = view;
    }

    /// Whether the terminal's progress indicator (`ESC ]9;4;`) is driven too.
    pub fn use_osc_indicator(&self) -> bool {
        self.use_osc_indicator
    }

    /// Enables or disables the terminal progress indicator.
    pub fn set_use_osc_indicator(&mut self, enabled: bool) {
        self.use_osc_indicator = enabled;
    }
}

pub(crate) fn check_width(width: usize) -> Result<(), StyleError> {
    if width < MIN_PROGRESS_WIDTH {
        debug!(width, "rejected progress width");
        return Err(StyleError::WidthOutOfRange {
            width,
            min: MIN_PROGRESS_WIDTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = ProgressConfiguration::default();
        assert_eq!(p.style(), "\x1b[33;1m");
        assert_eq!(p.max_width(), 120);
        assert_eq!(p.view(), ProgressView::Minimal);
        assert!(!p.use_osc_indicator());
    }

    #[test]
    fn test_max_width_below_minimum_fails() {
        let mut p = ProgressConfiguration::default();
        let err = p.set_max_width(17).unwrap_err();
        assert_eq!(err, StyleError::WidthOutOfRange { width: 17, min: 18 });
        assert_eq!(p.max_width(), 120);
    }

    #[test]
    fn test_max_width_at_minimum_succeeds() {
        let mut p = ProgressConfiguration::default();
        p.set_max_width(18).unwrap();
        assert_eq!(p.max_width(), 18);
    }

    #[test]
    fn test_max_width_zero_fails() {
        let mut p = ProgressConfiguration::default();
        assert!(p.set_max_width(0).is_err());
    }

    #[test]
    fn test_max_width_large_value() {
        let mut p = ProgressConfiguration::default();
        p.set_max_width(10_000).unwrap();
        assert_eq!(p.max_width(), 10_000);
    }

    #[test]
    fn test_style_validation() {
        let mut p = ProgressConfiguration::default();
        assert!(p.set_style("[####]").is_err());
        assert_eq!(p.style(), "\x1b[33;1m");
        p.set_style("\x1b[36m").unwrap();
        assert_eq!(p.style(), "\x1b[36m");
    }

    #[test]
    fn test_view_and_flag() {
        let mut p = ProgressConfiguration::default();
        p.set_view(ProgressView::Classic);
        p.set_use_osc_indicator(true);
        assert_eq!(p.view(), ProgressView::Classic);
        assert!(p.use_osc_indicator());
    }

    #[test]
    fn test_progress_view_from_str() {
        assert_eq!("classic".parse::<ProgressView>().unwrap(), ProgressView::Classic);
        assert_eq!("MINIMAL".parse::<ProgressView>().unwrap(), ProgressView::Minimal);
        assert!(matches!(
            "fancy".parse::<ProgressView>(),
            Err(StyleError::UnknownName { kind: "progress view", .. })
        ));
    }

    #[test]
    fn test_progress_view_serde() {
        let view: ProgressView = serde_yaml::from_str("Classic").unwrap();
        assert_eq!(view, ProgressView::Classic);
        assert!(serde_yaml::from_str::<ProgressView>("sideways").is_err());
    }
}
