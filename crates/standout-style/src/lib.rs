//! # Standout Style - Validated Terminal Style Registry
//!
//! `standout-style` holds the terminal style settings a CLI host renders with:
//! fixed attribute sequences, foreground and background palettes, semantic
//! styles for errors and warnings, progress bar settings and per-extension
//! decorations for file listings.
//!
//! ## Core Concepts
//!
//! - [`StyleString`]: a control sequence proven to carry no visible text
//! - [`StyleRegistry`]: every setting in one place, with an optional
//!   process-wide instance via [`StyleRegistry::global`]
//! - [`ColorPalette`]: named colors plus a direct RGB encoder per [`Layer`]
//! - [`ExtensionMap`]: case-insensitive extension to decoration map
//! - [`ContentMeasure`]: the seam that decides what counts as visible text
//! - [`StyleConfig`]: optional overrides loaded from YAML and applied atomically
//!
//! ## Pure Decoration
//!
//! Every settable style must be pure decoration. Writing a value with visible
//! text fails and the previous value is kept:
//!
//! ```rust
//! use standout_style::{StyleError, StyleRegistry};
//!
//! let mut registry = StyleRegistry::new();
//!
//! registry.formatting_mut().set_error("\x1b[31m").unwrap();
//! assert_eq!(registry.formatting().error(), "\x1b[31m");
//!
//! let err = registry.formatting_mut().set_error("\x1b[31mBOOM").unwrap_err();
//! assert_eq!(err, StyleError::ContentViolation { plain_text: "BOOM".into() });
//! assert_eq!(registry.formatting().error(), "\x1b[31m");
//! ```
//!
//! ## Colors
//!
//! ```rust
//! use standout_style::StyleRegistry;
//!
//! let registry = StyleRegistry::new();
//! let orange = registry.foreground().from_rgb_packed(0xFF8800);
//! let line = format!("{}warm{}", orange, registry.reset());
//! assert_eq!(line, "\x1b[38;2;255;136;0mwarm\x1b[0m");
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use standout_style::{StyleConfig, StyleRegistry};
//!
//! let config = StyleConfig::from_yaml(r#"
//! formatting:
//!   warning: "\e[93m"
//! file_info:
//!   extensions:
//!     .rs: "\e[33m"
//! "#).unwrap();
//!
//! let mut registry = StyleRegistry::new();
//! registry.apply(&config).unwrap();
//! assert!(registry.file_info().extension().contains_key(".rs").unwrap());
//! ```

pub mod config;
pub mod content;
mod error;
pub mod extension;
mod file_info;
mod formatting;
pub mod palette;
pub mod progress;
mod registry;
pub mod style;

pub use config::StyleConfig;
pub use content::{content_length, plain_text, AnsiContentMeasure, ContentMeasure};
pub use error::StyleError;
pub use extension::ExtensionMap;
pub use file_info::{EntryKind, FileInfoFormatting};
pub use formatting::FormattingData;
pub use palette::{ColorPalette, Layer, NamedColor};
pub use progress::{ProgressConfiguration, ProgressView, MIN_PROGRESS_WIDTH};
pub use registry::{OutputRendering, StyleRegistry};
pub use style::{sgr, IntoStyleString, StyleString};
