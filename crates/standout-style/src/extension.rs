//! File-extension decorations for file listings.
//!
//! [`ExtensionMap`] maps extensions such as `.zip` to the decoration used when
//! listing matching files. Keys must start with a period and compare
//! case-insensitively (`.ZIP` and `.zip` are the same key); the spelling used
//! when an entry was first inserted is the one reported by [`keys`].
//!
//! Case folding is ordinal and per character: each character is compared by
//! its simple uppercase form, so `.ä` matches `.Ä` while the Kelvin sign
//! `\u{212A}` stays distinct from `K`.
//!
//! # Insert Semantics
//!
//! Two insert operations exist on purpose:
//!
//! | Operation | Existing key |
//! |-----------|--------------|
//! | [`add`] | fails with [`StyleError::DuplicateExtension`] |
//! | [`set`] | silently replaces the decoration |
//!
//! Iteration follows insertion order.
//!
//! [`keys`]: ExtensionMap::keys
//! [`add`]: ExtensionMap::add
//! [`set`]: ExtensionMap::set

use std::path::Path;

use tracing::{debug, trace};

use crate::error::StyleError;
use crate::style::{IntoStyleString, StyleString};

/// Decoration applied to archive files by default.
pub const ARCHIVE_DECORATION: StyleString = StyleString::from_static("\x1b[31;1m");

/// Decoration applied to script files by default.
pub const SCRIPT_DECORATION: StyleString = StyleString::from_static("\x1b[33;1m");

/// Extensions mapped to [`ARCHIVE_DECORATION`] by default.
pub const ARCHIVE_EXTENSIONS: &[&str] = &[
    ".zip", ".tgz", ".gz", ".tar", ".nupkg", ".cab", ".7z",
];

/// Extensions mapped to [`SCRIPT_DECORATION`] by default.
pub const SCRIPT_EXTENSIONS: &[&str] = &[".ps1", ".psd1", ".psm1", ".ps1xml"];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    folded: String,
    extension: String,
    decoration: StyleString,
}

/// Validated, case-insensitive map from file extension to decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionMap {
    entries: Vec<Entry>,
}

impl Default for ExtensionMap {
    /// The built-in archive and script decorations.
    fn default() -> Self {
        let mut map = Self::empty();
        let defaults = ARCHIVE_EXTENSIONS
            .iter()
            .map(|ext| (ext, ARCHIVE_DECORATION))
            .chain(SCRIPT_EXTENSIONS.iter().map(|ext| (ext, SCRIPT_DECORATION)));
        for (ext, decoration) in defaults {
            map.insert(ext, decoration);
        }
        map
    }
}

impl ExtensionMap {
    /// Creates a map holding the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a new extension.
    ///
    /// Fails if the extension does not start with `.`, if the decoration has
    /// visible content, or if the extension is already mapped. Nothing is
    /// stored on failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use standout_style::{ExtensionMap, StyleError};
    ///
    /// let mut map = ExtensionMap::empty();
    /// map.add(".txt", "\x1b[36m").unwrap();
    /// assert!(map.contains_key(".TXT").unwrap());
    ///
    /// let err = map.add(".TXT", "\x1b[35m").unwrap_err();
    /// assert!(matches!(err, StyleError::DuplicateExtension { .. }));
    /// ```
    pub fn add<D: IntoStyleString>(
        &mut self,
        extension: &str,
        decoration: D,
    ) -> Result<(), StyleError> {
        validate_extension(extension)?;
        let decoration = decoration.into_style_string().inspect_err(|err| {
            debug!(extension, %err, "rejected extension decoration");
        })?;
        if self.position(extension).is_some() {
            return Err(StyleError::DuplicateExtension {
                extension: extension.to_string(),
            });
        }
        self.insert(extension, decoration);
        Ok(())
    }

    /// Inserts or replaces the decoration for an extension.
    ///
    /// Validates like [`add`](Self::add) but overwrites an existing entry
    /// instead of failing. The originally inserted key spelling is kept.
    pub fn set<D: IntoStyleString>(
        &mut self,
        extension: &str,
        decoration: D,
    ) -> Result<(), StyleError> {
        validate_extension(extension)?;
        let decoration = decoration.into_style_string().inspect_err(|err| {
            debug!(extension, %err, "rejected extension decoration");
        })?;
        match self.position(extension) {
            Some(index) => {
                trace!(extension, "replacing extension decoration");
                self.entries[index].decoration = decoration;
            }
            None => self.insert(extension, decoration),
        }
        Ok(())
    }

    /// Gets the decoration for an extension.
    ///
    /// Fails on a malformed extension; returns `Ok(None)` when it is absent.
    pub fn get(&self, extension: &str) -> Result<Option<&StyleString>, StyleError> {
        validate_extension(extension)?;
        Ok(self
            .position(extension)
            .map(|index| &self.entries[index].decoration))
    }

    /// Removes an extension. Removing an absent extension is not an error.
    pub fn remove(&mut self, extension: &str) -> Result<(), StyleError> {
        validate_extension(extension)?;
        if let Some(index) = self.position(extension) {
            trace!(extension, "removing extension decoration");
            self.entries.remove(index);
        }
        Ok(())
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Checks whether an extension is mapped.
    ///
    /// An empty extension is simply not present. Any other extension must
    /// start with `.`.
    pub fn contains_key(&self, extension: &str) -> Result<bool, StyleError> {
        if extension.is_empty() {
            return Ok(false);
        }
        validate_extension(extension)?;
        Ok(self.position(extension).is_some())
    }

    /// Iterates the stored extensions in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.extension.as_str())
    }

    /// Iterates `(extension, decoration)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleString)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.extension.as_str(), &entry.decoration))
    }

    /// Number of mapped extensions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no extension is mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the decoration for a path by its final extension.
    ///
    /// ```rust
    /// use standout_style::ExtensionMap;
    /// use std::path::Path;
    ///
    /// let map = ExtensionMap::new();
    /// assert!(map.decoration_for_path(Path::new("backup.TAR")).is_some());
    /// assert!(map.decoration_for_path(Path::new("README")).is_none());
    /// ```
    pub fn decoration_for_path(&self, path: &Path) -> Option<&StyleString> {
        let ext = path.extension()?.to_str()?;
        let key = format!(".{}", ext);
        self.position(&key).map(|index| &self.entries[index].decoration)
    }

    fn position(&self, extension: &str) -> Option<usize> {
        let folded = fold(extension);
        self.entries.iter().position(|entry| entry.folded == folded)
    }

    // Callers have validated the key and checked it is absent.
    fn insert(&mut self, extension: &str, decoration: StyleString) {
        trace!(extension, "adding extension decoration");
        self.entries.push(Entry {
            folded: fold(extension),
            extension: extension.to_string(),
            decoration,
        });
    }
}

impl<'a> IntoIterator for &'a ExtensionMap {
    type Item = (&'a str, &'a StyleString);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a StyleString)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

fn validate_extension(extension: &str) -> Result<(), StyleError> {
    if !extension.starts_with('.') {
        debug!(extension, "rejected extension key");
        return Err(StyleError::InvalidExtension {
            extension: extension.to_string(),
        });
    }
    Ok(())
}

/// Per-character simple uppercase mapping. Characters whose uppercase form
/// is longer than one character are kept as-is.
fn fold(extension: &str) -> String {
    extension
        .chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}
