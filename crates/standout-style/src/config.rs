//! Style overrides loaded from configuration.
//!
//! A [`StyleConfig`] mirrors the mutable surface of [`StyleRegistry`] with
//! every field optional. Hosts deserialize it from their own configuration
//! (or from YAML via [`StyleConfig::from_yaml`]) and apply it in one step.
//!
//! ```yaml
//! output_rendering: ansi
//! formatting:
//!   error: "\e[91m"
//!   table_header: "\e[1;4m"
//! progress:
//!   max_width: 80
//!   view: classic
//! file_info:
//!   directory: "\e[34;1m"
//!   extensions:
//!     .rs: "\e[33m"
//! ```
//!
//! # Atomicity
//!
//! [`StyleRegistry::apply`] validates every override before the registry is
//! touched. If any value is rejected the registry is left exactly as it was.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StyleError;
use crate::progress::ProgressView;
use crate::registry::{OutputRendering, StyleRegistry};

/// Overrides for [`FormattingData`](crate::FormattingData).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormattingConfig {
    pub format_accent: Option<String>,
    pub table_header: Option<String>,
    pub error_accent: Option<String>,
    pub error: Option<String>,
    pub warning: Option<String>,
    pub verbose: Option<String>,
    pub debug: Option<String>,
}

/// Overrides for [`ProgressConfiguration`](crate::ProgressConfiguration).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgressConfig {
    pub style: Option<String>,
    pub max_width: Option<usize>,
    pub view: Option<ProgressView>,
    pub use_osc_indicator: Option<bool>,
}

/// Overrides for [`FileInfoFormatting`](crate::FileInfoFormatting).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileInfoConfig {
    pub directory: Option<String>,
    pub symbolic_link: Option<String>,
    pub executable: Option<String>,
    /// Drop the built-in extension decorations before adding `extensions`.
    pub replace_extensions: bool,
    /// Extension decorations, upserted into the map.
    pub extensions: BTreeMap<String, String>,
}

/// Optional overrides for every mutable registry setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub output_rendering: Option<OutputRendering>,
    pub formatting: FormattingConfig,
    pub progress: ProgressConfig,
    pub file_info: FileInfoConfig,
}

impl StyleConfig {
    /// Parses overrides from YAML.
    ///
    /// Only the syntax and shape are checked here; style values are
    /// validated when the config is applied.
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Returns true if applying this config would change nothing.
    pub fn is_empty(&self) -> bool {
        self == &StyleConfig::default()
    }
}

impl StyleRegistry {
    /// Applies every override in `config`, or none of them.
    ///
    /// ```rust
    /// use standout_style::{StyleConfig, StyleRegistry};
    ///
    /// let mut registry = StyleRegistry::new();
    /// let config = StyleConfig::from_yaml("progress: { max_width: 60 }").unwrap();
    /// registry.apply(&config).unwrap();
    /// assert_eq!(registry.progress().max_width(), 60);
    /// ```
    pub fn apply(&mut self, config: &StyleConfig) -> Result<(), StyleError> {
        let mut staged = self.clone();
        let touched = staged.apply_in_place(config)?;
        *self = staged;
        debug!(touched, "applied style configuration");
        Ok(())
    }

    fn apply_in_place(&mut self, config: &StyleConfig) -> Result<usize, StyleError> {
        let mut touched = 0;

        if let Some(mode) = config.output_rendering {
            self.set_output_rendering(mode);
            touched += 1;
        }

        let f = &config.formatting;
        let formatting = self.formatting_mut();
        if let Some(v) = &f.format_accent {
            formatting.set_format_accent(v)?;
            touched += 1;
        }
        if let Some(v) = &f.table_header {
            formatting.set_table_header(v)?;
            touched += 1;
        }
        if let Some(v) = &f.error_accent {
            formatting.set_error_accent(v)?;
            touched += 1;
        }
        if let Some(v) = &f.error {
            formatting.set_error(v)?;
            touched += 1;
        }
        if let Some(v) = &f.warning {
            formatting.set_warning(v)?;
            touched += 1;
        }
        if let Some(v) = &f.verbose {
            formatting.set_verbose(v)?;
            touched += 1;
        }
        if let Some(v) = &f.debug {
            formatting.set_debug(v)?;
            touched += 1;
        }

        let p = &config.progress;
        let progress = self.progress_mut();
        if let Some(v) = &p.style {
            progress.set_style(v)?;
            touched += 1;
        }
        if let Some(width) = p.max_width {
            progress.set_max_width(width)?;
            touched += 1;
        }
        if let Some(view) = p.view {
            progress.set_view(view);
            touched += 1;
        }
        if let Some(enabled) = p.use_osc_indicator {
            progress.set_use_osc_indicator(enabled);
            touched += 1;
        }

        let fi = &config.file_info;
        let file_info = self.file_info_mut();
        if let Some(v) = &fi.directory {
            file_info.set_directory(v)?;
            touched += 1;
        }
        if let Some(v) = &fi.symbolic_link {
            file_info.set_symbolic_link(v)?;
            touched += 1;
        }
        if let Some(v) = &fi.executable {
            file_info.set_executable(v)?;
            touched += 1;
        }
        let extensions = file_info.extension_mut();
        if fi.replace_extensions {
            extensions.clear();
            touched += 1;
        }
        for (ext, decoration) in &fi.extensions {
            extensions.set(ext, decoration)?;
            touched += 1;
        }

        Ok(touched)
    }
}
