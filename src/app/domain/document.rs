use std::path::{Path, PathBuf};

/// A note known to the host, identified by its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    pub path: PathBuf,
    /// File name without its final extension
    pub basename: String,
    /// Final extension without the dot, empty if there is none
    pub extension: String,
}

impl NoteFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let basename = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            basename,
            extension,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name the note is uploaded under: `basename.extension`.
    pub fn gist_file_name(&self) -> String {
        if self.extension.is_empty() {
            self.basename.clone()
        } else {
            format!("{}.{}", self.basename, self.extension)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_splits_name() {
        let note = NoteFile::from_path("/vault/daily/notes.md");
        assert_eq!(note.basename, "notes");
        assert_eq!(note.extension, "md");
        assert_eq!(note.gist_file_name(), "notes.md");
    }

    #[test]
    fn test_only_last_extension_is_split() {
        let note = NoteFile::from_path("backup.tar.gz");
        assert_eq!(note.basename, "backup.tar");
        assert_eq!(note.extension, "gz");
        assert_eq!(note.gist_file_name(), "backup.tar.gz");
    }

    #[test]
    fn test_no_extension() {
        let note = NoteFile::from_path("/vault/README");
        assert_eq!(note.extension, "");
        assert_eq!(note.gist_file_name(), "README");
    }

    #[test]
    fn test_dotfile() {
        // Rust treats a leading dot as part of the stem
        let note = NoteFile::from_path(".scratch");
        assert_eq!(note.gist_file_name(), ".scratch");
    }

    #[test]
    fn test_unicode_name() {
        let note = NoteFile::from_path("Räume und Zeit.md");
        assert_eq!(note.gist_file_name(), "Räume und Zeit.md");
    }
}
