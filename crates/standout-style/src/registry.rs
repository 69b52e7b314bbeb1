//! The style registry.
//!
//! [`StyleRegistry`] composes every style setting a host needs to render
//! output: the fixed attribute sequences, both color palettes, semantic
//! formatting styles, progress bar settings and file listing decorations.
//!
//! # Lifetime
//!
//! Settings live for the whole process once changed; there is no reset.
//! The registry is a plain value, so it can be built with
//! [`StyleRegistry::new`] and handed to the code that needs it. For hosts that
//! want a single shared instance, [`StyleRegistry::global`] returns one that
//! is created lazily on first access.
//!
//! ```rust
//! use standout_style::StyleRegistry;
//!
//! {
//!     let mut registry = StyleRegistry::global().lock().unwrap();
//!     registry.formatting_mut().set_warning("\x1b[93m").unwrap();
//! }
//!
//! let registry = StyleRegistry::global().lock().unwrap();
//! assert_eq!(registry.formatting().warning(), "\x1b[93m");
//! ```
//!
//! # Concurrency
//!
//! The shared instance sits behind a [`Mutex`]: every access is serialized and
//! the last writer wins. Holding the guard across several reads gives a
//! consistent view of multiple fields.

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::file_info::FileInfoFormatting;
use crate::formatting::FormattingData;
use crate::palette::{ColorPalette, Layer};
use crate::progress::ProgressConfiguration;
use crate::style::{sgr, StyleString};

static GLOBAL: Lazy<Mutex<StyleRegistry>> = Lazy::new(|| Mutex::new(StyleRegistry::new()));

/// How the host renders decorated output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputRendering {
    /// Let the host decide.
    #[default]
    Automatic,
    /// Strip all decoration.
    PlainText,
    /// Always emit escape sequences.
    Ansi,
    /// Emit escape sequences only to the interactive host.
    Host,
}

impl OutputRendering {
    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            OutputRendering::Automatic => "Automatic",
            OutputRendering::PlainText => "PlainText",
            OutputRendering::Ansi => "Ansi",
            OutputRendering::Host => "Host",
        }
    }
}

impl fmt::Display for OutputRendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputRendering {
    type Err = StyleError;

    /// Case-insensitive; `plain_text` and `plain-text` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match folded.as_str() {
            "automatic" => Ok(OutputRendering::Automatic),
            "plaintext" => Ok(OutputRendering::PlainText),
            "ansi" => Ok(OutputRendering::Ansi),
            "host" => Ok(OutputRendering::Host),
            _ => Err(StyleError::UnknownName {
                kind: "output rendering",
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OutputRendering {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OutputRendering> for String {
    fn from(mode: OutputRendering) -> Self {
        mode.name().to_string()
    }
}

/// Every terminal style setting of a host.
///
/// Each group is owned exclusively by the registry and mutated in place
/// through the `*_mut` accessors; the groups validate their own fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistry {
    output_rendering: OutputRendering,
    foreground: ColorPalette,
    background: ColorPalette,
    formatting: FormattingData,
    progress: ProgressConfiguration,
    file_info: FileInfoFormatting,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self {
            output_rendering: OutputRendering::default(),
            foreground: ColorPalette::new(Layer::Foreground),
            background: ColorPalette::new(Layer::Background),
            formatting: FormattingData::default(),
            progress: ProgressConfiguration::default(),
            file_info: FileInfoFormatting::default(),
        }
    }
}

impl StyleRegistry {
    /// Creates a registry holding the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, created on first access.
    ///
    /// Every call returns the same instance.
    pub fn global() -> &'static Mutex<StyleRegistry> {
        &GLOBAL
    }

    /// How decorated output is rendered.
    pub fn output_rendering(&self) -> OutputRendering {
        self.output_rendering
    }

    /// Sets the output rendering mode.
    pub fn set_output_rendering(&mut self, mode: OutputRendering) {
        self.output_rendering = mode;
    }

    /// Foreground colors.
    pub fn foreground(&self) -> &ColorPalette {
        &self.foreground
    }

    /// Background colors.
    pub fn background(&self) -> &ColorPalette {
        &self.background
    }

    /// Styles for output categories (errors, warnings, table headers, ...).
    pub fn formatting(&self) -> &FormattingData {
        &self.formatting
    }

    /// Mutable access to the formatting styles.
    pub fn formatting_mut(&mut self) -> &mut FormattingData {
        &mut self.formatting
    }

    /// Progress bar settings.
    pub fn progress(&self) -> &ProgressConfiguration {
        &self.progress
    }

    /// Mutable access to the progress bar settings.
    pub fn progress_mut(&mut self) -> &mut ProgressConfiguration {
        &mut self.progress
    }

    /// File listing decorations.
    pub fn file_info(&self) -> &FileInfoFormatting {
        &self.file_info
    }

    /// Mutable access to the file listing decorations.
    pub fn file_info_mut(&mut self) -> &mut FileInfoFormatting {
        &mut self.file_info
    }

    /// Turns off all attributes.
    pub fn reset(&self) -> &'static StyleString {
        &sgr::RESET
    }

    /// Turns bold on.
    pub fn bold(&self) -> &'static StyleString {
        &sgr::BOLD
    }

    /// Turns bold off.
    pub fn bold_off(&self) -> &'static StyleString {
        &sgr::BOLD_OFF
    }

    /// Turns italic on.
    pub fn italic(&self) -> &'static StyleString {
        &sgr::ITALIC
    }

    /// Turns italic off.
    pub fn italic_off(&self) -> &'static StyleString {
        &sgr::ITALIC_OFF
    }

    /// Turns underline on.
    pub fn underline(&self) -> &'static StyleString {
        &sgr::UNDERLINE
    }

    /// Turns underline off.
    pub fn underline_off(&self) -> &'static StyleString {
        &sgr::UNDERLINE_OFF
    }

    /// Turns blink on.
    pub fn blink(&self) -> &'static StyleString {
        &sgr::BLINK
    }

    /// Turns blink off.
    pub fn blink_off(&self) -> &'static StyleString {
        &sgr::BLINK_OFF
    }

    /// Hides text.
    pub fn hidden(&self) -> &'static StyleString {
        &sgr::HIDDEN
    }

    /// Shows hidden text again.
    pub fn hidden_off(&self) -> &'static StyleString {
        &sgr::HIDDEN_OFF
    }

    /// Swaps foreground and background.
    pub fn reverse(&self) -> &'static StyleString {
        &sgr::REVERSE
    }

    /// Undoes [`reverse`](Self::reverse).
    pub fn reverse_off(&self) -> &'static StyleString {
        &sgr::REVERSE_OFF
    }

    /// Turns strikethrough on.
    pub fn strikethrough(&self) -> &'static StyleString {
        &sgr::STRIKETHROUGH
    }

    /// Turns strikethrough off.
    pub fn strikethrough_off(&self) -> &'static StyleString {
        &sgr::STRIKETHROUGH_OFF
    }

    /// Wraps `text` in an OSC 8 hyperlink to `uri`.
    ///
    /// The result embeds visible text, so it is computed per call and never
    /// validated or stored.
    ///
    /// ```rust
    /// use standout_style::StyleRegistry;
    ///
    /// let link = StyleRegistry::new().format_hyperlink("docs", "https://example.com");
    /// assert_eq!(link, "\x1b]8;;https://example.com\x1b\\docs\x1b]8;;\x1b\\");
    /// ```
    pub fn format_hyperlink(&self, text: &str, uri: &str) -> String {
        format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", uri, text)
    }
}
