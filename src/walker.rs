use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk `root` recursively, yielding every regular file.
///
/// The iterator is lazy and finite; unreadable entries are skipped.
/// Traversal order is whatever walkdir produces, so callers must not
/// depend on it.
pub fn walk_files(root: &Path) -> impl Iterator<Item = PathBuf> + use<> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
}

/// Derive the storage key for `file`: its path relative to `root`, with
/// backslashes normalized to forward slashes.
pub fn storage_key(root: &Path, file: &Path) -> Result<String> {
    let relative = file
        .strip_prefix(root)
        .with_context(|| format!("{} is not under {}", file.display(), root.display()))?;

    Ok(relative.to_string_lossy().replace('\\', "/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_walk_finds_every_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        touch(&root.join("a/app.js"));
        touch(&root.join("a/style.css"));
        touch(&root.join("b.png"));
        fs::create_dir_all(root.join("empty/nested")).unwrap();

        let keys: HashSet<String> = walk_files(root)
            .map(|f| storage_key(root, &f).unwrap())
            .collect();

        let expected: HashSet<String> = ["a/app.js", "a/style.css", "b.png"]
            .into_iter()
            .map(String::from)
            .collect();

        // Directories themselves never produce a key
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_keys_are_distinct_per_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        touch(&root.join("x/file.txt"));
        touch(&root.join("y/file.txt"));
        touch(&root.join("file.txt"));

        let files: Vec<PathBuf> = walk_files(root).collect();
        let keys: HashSet<String> = files
            .iter()
            .map(|f| storage_key(root, f).unwrap())
            .collect();

        assert_eq!(files.len(), 3);
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_storage_key_is_relative() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("sub/inner/asset.svg"));

        let key = storage_key(root, &root.join("sub/inner/asset.svg")).unwrap();
        assert_eq!(key, "sub/inner/asset.svg");
        assert!(!key.contains('\\'));
    }

    #[test]
    fn test_storage_key_outside_root_fails() {
        assert!(storage_key(Path::new("/a/b"), Path::new("/c/d.txt")).is_err());
    }

    #[test]
    fn test_walk_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(walk_files(dir.path()).count(), 0);
    }
}
