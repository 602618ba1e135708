//! File-system collaborator used by the coordinator.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The file primitives storage needs. `LocalFs` is the real implementation;
/// tests substitute their own to inject failures.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Regular files directly inside `dir` whose name ends with `suffix`.
    fn list_files(&self, dir: &Path, suffix: &str) -> io::Result<Vec<PathBuf>>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create or fully replace `path`.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Remove a file. `Ok(false)` when it did not exist.
    fn remove_file(&self, path: &Path) -> io::Result<bool>;
}

/// `std::fs`-backed file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn list_files(&self, dir: &Path, suffix: &str) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let matches = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(suffix));
            if matches && entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn remove_file(&self, path: &Path) -> io::Result<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn list_files_filters_by_suffix_and_skips_dirs() {
        let tmp = TempDir::new().expect("tempdir should create");
        fs::write(tmp.path().join("b.json"), "{}").unwrap();
        fs::write(tmp.path().join("a.json"), "{}").unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("dir.json")).unwrap();

        let names: Vec<_> = LocalFs
            .list_files(tmp.path(), ".json")
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn remove_missing_file_is_not_an_error() {
        let tmp = TempDir::new().expect("tempdir should create");
        let path = tmp.path().join("gone.json");
        assert!(!LocalFs.remove_file(&path).unwrap());

        fs::write(&path, "{}").unwrap();
        assert!(LocalFs.exists(&path));
        assert!(LocalFs.remove_file(&path).unwrap());
        assert!(!LocalFs.exists(&path));
    }
}
