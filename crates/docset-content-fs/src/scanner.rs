//! Directory probing for content files.
//!
//! Only the immediate children of a directory are inspected: a docs directory
//! counts as populated when it directly holds a `.md` or `.mdx` file.

use std::fs;
use std::io;
use std::path::Path;

/// File extensions that count as documentation content.
const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Result of probing one directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DirState {
    /// Directory does not exist.
    Missing,
    /// Directory exists but has no content file at its top level.
    Empty,
    /// Directory has at least one content file at its top level.
    Populated,
}

/// Probe a directory for content files.
///
/// Hidden entries are skipped. Read errors other than "not found" are logged
/// and reported as [`DirState::Empty`].
pub(crate) fn probe(dir: &Path) -> DirState {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return DirState::Missing,
        Err(e) if e.kind() == io::ErrorKind::NotADirectory => return DirState::Missing,
        Err(e) => {
            tracing::warn!(path = %dir.display(), error = %e, "Failed to read directory, treating as empty");
            return DirState::Empty;
        }
    };

    let populated = entries.filter_map(Result::ok).any(|entry| {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        !name.starts_with('.') && is_content_file(&entry.path())
    });

    if populated {
        DirState::Populated
    } else {
        DirState::Empty
    }
}

fn is_content_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| CONTENT_EXTENSIONS.iter().any(|c| ext == *c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_probe_missing_dir() {
        assert_eq!(probe(Path::new("/nonexistent/docs")), DirState::Missing);
    }

    #[test]
    fn test_probe_file_is_missing() {
        let temp_dir = create_test_dir();
        let file = temp_dir.path().join("core");
        fs::write(&file, "not a directory").unwrap();

        assert_eq!(probe(&file), DirState::Missing);
    }

    #[test]
    fn test_probe_empty_dir() {
        let temp_dir = create_test_dir();

        assert_eq!(probe(temp_dir.path()), DirState::Empty);
    }

    #[test]
    fn test_probe_finds_md() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("index.md"), "# Core").unwrap();

        assert_eq!(probe(temp_dir.path()), DirState::Populated);
    }

    #[test]
    fn test_probe_finds_mdx() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("intro.mdx"), "# Intro").unwrap();

        assert_eq!(probe(temp_dir.path()), DirState::Populated);
    }

    #[test]
    fn test_probe_ignores_other_files() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("sidebars.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "notes").unwrap();

        assert_eq!(probe(temp_dir.path()), DirState::Empty);
    }

    #[test]
    fn test_probe_skips_hidden_files() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join(".draft.md"), "# Draft").unwrap();

        assert_eq!(probe(temp_dir.path()), DirState::Empty);
    }

    #[test]
    fn test_probe_is_not_recursive() {
        let temp_dir = create_test_dir();
        let nested = temp_dir.path().join("api");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("index.md"), "# API").unwrap();

        assert_eq!(probe(temp_dir.path()), DirState::Empty);
    }

    #[test]
    fn test_probe_ignores_directory_named_like_content() {
        let temp_dir = create_test_dir();
        fs::create_dir(temp_dir.path().join("guide.md")).unwrap();

        assert_eq!(probe(temp_dir.path()), DirState::Empty);
    }
}
