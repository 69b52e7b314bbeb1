//! Decorations for file listings.

use std::path::Path;

use crate::extension::ExtensionMap;
use crate::style::{style_accessors, StyleString};

/// The kind of file system entry being listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file, decorated by extension.
    File,
    /// A directory.
    Directory,
    /// A symbolic link, whatever it points to.
    SymbolicLink,
    /// A regular file with an executable bit.
    Executable,
}

/// Styles applied when listing files.
///
/// Directories, symbolic links and executables have their own styles;
/// regular files are decorated by extension through [`ExtensionMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfoFormatting {
    directory: StyleString,
    symbolic_link: StyleString,
    executable: StyleString,
    extension: ExtensionMap,
}

impl Default for FileInfoFormatting {
    fn default() -> Self {
        Self {
            directory: StyleString::from_static("\x1b[44;1m"),
            symbolic_link: StyleString::from_static("\x1b[36;1m"),
            executable: StyleString::from_static("\x1b[32;1m"),
            extension: ExtensionMap::new(),
        }
    }
}

impl FileInfoFormatting {
    style_accessors! {
        /// Style for directories.
        directory / set_directory,
        /// Style for symbolic links.
        symbolic_link / set_symbolic_link,
        /// Style for executables.
        executable / set_executable,
    }

    /// Per-extension decorations.
    pub fn extension(&self) -> &ExtensionMap {
        &self.extension
    }

    /// Mutable access to the per-extension decorations.
    ///
    /// The map validates its own entries, so handing it out keeps every
    /// stored decoration free of visible content.
    pub fn extension_mut(&mut self) -> &mut ExtensionMap {
        &mut self.extension
    }

    /// Picks the decoration for a listed entry.
    ///
    /// Entry kinds with a dedicated style win over extensions. Regular files
    /// fall back to [`ExtensionMap::decoration_for_path`].
    ///
    /// ```rust
    /// use standout_style::{EntryKind, FileInfoFormatting};
    /// use std::path::Path;
    ///
    /// let info = FileInfoFormatting::default();
    /// let deco = info.decoration_for(Path::new("src"), EntryKind::Directory);
    /// assert_eq!(deco, Some(info.directory()));
    /// assert!(info.decoration_for(Path::new("a.zip"), EntryKind::File).is_some());
    /// assert!(info.decoration_for(Path::new("a.rs"), EntryKind::File).is_none());
    /// ```
    pub fn decoration_for(&self, path: &Path, kind: EntryKind) -> Option<&StyleString> {
        match kind {
            EntryKind::Directory => Some(&self.directory),
            EntryKind::SymbolicLink => Some(&self.symbolic_link),
            EntryKind::Executable => Some(&self.executable),
            EntryKind::File => self.extension.decoration_for_path(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;
    use crate::extension::ARCHIVE_DECORATION;

    #[test]
    fn test_defaults() {
        let info = FileInfoFormatting::default();
        assert_eq!(info.directory(), "\x1b[44;1m");
        assert_eq!(info.symbolic_link(), "\x1b[36;1m");
        assert_eq!(info.executable(), "\x1b[32;1m");
        assert_eq!(info.extension().len(), 11);
    }

    #[test]
    fn test_setters_validate() {
        let mut info = FileInfoFormatting::default();
        assert!(matches!(
            info.set_directory("dir/"),
            Err(StyleError::ContentViolation { .. })
        ));
        assert_eq!(info.directory(), "\x1b[44;1m");

        info.set_symbolic_link("\x1b[35m").unwrap();
        assert_eq!(info.symbolic_link(), "\x1b[35m");
    }

    #[test]
    fn test_extension_map_is_mutable_in_place() {
        let mut info = FileInfoFormatting::default();
        info.extension_mut().add(".rs", "\x1b[91m").unwrap();
        assert!(info.extension().contains_key(".RS").unwrap());
    }

    #[test]
    fn test_decoration_for_kinds() {
        let mut info = FileInfoFormatting::default();
        info.set_executable("\x1b[92m").unwrap();
        assert_eq!(
            info.decoration_for(Path::new("run.zip"), EntryKind::Executable),
            Some(&StyleString::from_static("\x1b[92m"))
        );
        assert_eq!(
            info.decoration_for(Path::new("run.zip"), EntryKind::File),
            Some(&ARCHIVE_DECORATION)
        );
        assert_eq!(
            info.decoration_for(Path::new("link"), EntryKind::SymbolicLink),
            Some(info.symbolic_link())
        );
    }
}
