//! Selected upload file entity.

use std::path::{Path, PathBuf};

/// One file chosen for upload, plus the metadata shown in the UI.
///
/// A new selection replaces the previous one; nothing else owns this state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    name: String,
    size_bytes: u64,
}

impl SelectedFile {
    /// Creates a selection from a path and its on-disk size.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Self {
            path,
            name,
            size_bytes,
        }
    }

    /// Full path of the selected file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name used for the multipart part and the status line.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes.
    #[must_use]
    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Status-line summary, e.g. `Selected: app.csv — 12 KB`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Selected: {} — {} KB", self.name, self.size_bytes.div_ceil(1024))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_path() {
        let f = SelectedFile::new("/tmp/logs/app.csv", 2048);
        assert_eq!(f.name(), "app.csv");
        assert_eq!(f.size_bytes(), 2048);
    }

    #[test]
    fn test_summary_rounds_kilobytes_up() {
        let f = SelectedFile::new("a.csv", 1500);
        assert_eq!(f.summary(), "Selected: a.csv — 2 KB");
    }
}
