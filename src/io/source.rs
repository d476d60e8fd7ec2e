//! Component image discovery in the source directory

use crate::io::configuration::SOURCE_EXTENSION;
use crate::io::error::{Result, file_system_error};
use std::path::{Path, PathBuf};

/// Which directory entries count as component images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFilter {
    /// File extension is `png`, ignoring ASCII case
    #[default]
    Extension,
    /// File name is at least one character followed by `png`, so `xpng` also matches
    LegacySuffix,
}

impl FileFilter {
    /// Check whether a directory entry with this path is selected
    pub fn matches(self, path: &Path) -> bool {
        match self {
            Self::Extension => path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION)),
            Self::LegacySuffix => path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| {
                    name.len() > SOURCE_EXTENSION.len() && name.ends_with(SOURCE_EXTENSION)
                }),
        }
    }
}

/// List the component images of `dir`, sorted by path
///
/// Subdirectories and entries rejected by `filter` are skipped silently.
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read
pub fn collect_source_files(dir: &Path, filter: FileFilter) -> Result<Vec<PathBuf>> {
    let read_error = || file_system_error(dir, "read directory");

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error())? {
        let path = entry.map_err(read_error())?.path();
        if path.is_file() && filter.matches(&path) {
            files.push(path);
        }
    }

    // Directory listing order is platform dependent
    files.sort();
    Ok(files)
}
