//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use olympus_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{OlympusError, OlympusResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the code under test owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn is_read_only(&self, path: &Path) -> bool {
        self.read_only.iter().any(|ro| path.starts_with(ro))
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.lock_read().ok()?.files.get(path).cloned()
    }

    /// Seed a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            let _ = self.create_dir_all(parent);
        }
        if let Ok(mut inner) = self.lock_write() {
            inner.files.insert(path.to_path_buf(), content.into());
        }
    }

    /// Refuse every mutation at or below `path`.
    pub fn set_read_only(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.lock_write() {
            inner.read_only.insert(path.as_ref().to_path_buf());
        }
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.lock_read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// List all directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.lock_read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn lock_read(&self) -> OlympusResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| lock_poisoned())
    }

    fn lock_write(&self) -> OlympusResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| lock_poisoned())
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.lock_read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.lock_read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir(&self, path: &Path) -> OlympusResult<()> {
        let mut inner = self.lock_write()?;

        if inner.directories.contains(path) {
            return Ok(());
        }
        if inner.files.contains_key(path) {
            return Err(directory_error(path, "a file exists at this path"));
        }
        if !inner.parent_exists(path) {
            return Err(directory_error(path, "parent directory does not exist"));
        }
        if inner.is_read_only(path) {
            return Err(directory_error(path, "permission denied"));
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> OlympusResult<()> {
        let mut inner = self.lock_write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.directories.contains(&current) {
                continue;
            }
            if inner.files.contains_key(&current) {
                return Err(directory_error(&current, "a file exists at this path"));
            }
            if inner.is_read_only(&current) {
                return Err(directory_error(&current, "permission denied"));
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn remove_dir_contents(&self, path: &Path) -> OlympusResult<()> {
        let mut inner = self.lock_write()?;

        if !inner.directories.contains(path) {
            return Err(fs_error(path, "directory does not exist"));
        }
        if inner.is_read_only(path) {
            return Err(fs_error(path, "permission denied"));
        }

        inner.files.retain(|p, _| !p.starts_with(path));
        inner
            .directories
            .retain(|p| p == path || !p.starts_with(path));
        Ok(())
    }

    fn overwrite(&self, path: &Path, content: &str) -> OlympusResult<()> {
        let mut inner = self.lock_write()?;

        if !inner.parent_exists(path) {
            return Err(fs_error(path, "parent directory does not exist"));
        }
        if inner.directories.contains(path) {
            return Err(fs_error(path, "is a directory"));
        }
        if inner.is_read_only(path) {
            return Err(fs_error(path, "permission denied"));
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> OlympusResult<String> {
        self.lock_read()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| fs_error(path, "file does not exist"))
    }
}

fn lock_poisoned() -> OlympusError {
    OlympusError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

fn directory_error(path: &Path, reason: &str) -> OlympusError {
    ApplicationError::DirectoryCreation {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

fn fs_error(path: &Path, reason: &str) -> OlympusError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a/b/c")).unwrap();

        assert!(fs.is_dir(Path::new("/a")));
        assert!(fs.is_dir(Path::new("/a/b")));
        assert!(fs.is_dir(Path::new("/a/b/c")));
    }

    #[test]
    fn create_dir_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.create_dir(Path::new("/missing/olympus")).is_err());
        assert!(!fs.exists(Path::new("/missing")));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.add_file("/p/file.txt", "hi");
        assert_eq!(
            handle.read_file(Path::new("/p/file.txt")).as_deref(),
            Some("hi")
        );
    }

    #[test]
    fn remove_dir_contents_keeps_root() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/h/.tmp/a", "a");
        fs.add_file("/h/.tmp/nested/b", "b");
        fs.add_file("/h/keep", "k");

        fs.remove_dir_contents(Path::new("/h/.tmp")).unwrap();

        assert!(fs.is_dir(Path::new("/h/.tmp")));
        assert!(!fs.exists(Path::new("/h/.tmp/nested")));
        assert_eq!(fs.list_files(), vec![PathBuf::from("/h/keep")]);
    }

    #[test]
    fn read_only_blocks_mutation() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/locked")).unwrap();
        fs.set_read_only("/locked");

        assert!(fs.create_dir(Path::new("/locked/olympus")).is_err());
        assert!(fs.overwrite(Path::new("/locked/f"), "x").is_err());
        assert!(fs.remove_dir_contents(Path::new("/locked")).is_err());
    }

    #[test]
    fn overwrite_needs_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.overwrite(Path::new("/nowhere/f"), "x").is_err());
    }
}
