//! Local filesystem adapter using std::fs.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use olympus_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{OlympusError, OlympusResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> OlympusResult<()> {
        match fs::create_dir(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            Err(e) => Err(directory_error(path, e)),
        }
    }

    fn create_dir_all(&self, path: &Path) -> OlympusResult<()> {
        fs::create_dir_all(path).map_err(|e| directory_error(path, e))
    }

    fn remove_dir_contents(&self, path: &Path) -> OlympusResult<()> {
        let entries = fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let entry_path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| map_io_error(&entry_path, e, "get file type"))?;

            let removed = if file_type.is_dir() {
                fs::remove_dir_all(&entry_path)
            } else {
                fs::remove_file(&entry_path)
            };
            removed.map_err(|e| map_io_error(&entry_path, e, "remove"))?;
        }

        Ok(())
    }

    /// Write to a sibling temp file, sync, then rename over `path`.
    ///
    /// An interrupted write leaves the previous content in place. When `path`
    /// is a symlink the link is kept and its final target is replaced.
    fn overwrite(&self, path: &Path, content: &str) -> OlympusResult<()> {
        let target = resolve_symlinks(path).map_err(|e| map_io_error(path, e, "resolve link"))?;
        let tmp_path = sibling_tmp_path(&target);

        let written = fs::File::create(&tmp_path).and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(map_io_error(path, e, "write file"));
        }

        fs::rename(&tmp_path, &target).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            map_io_error(path, e, "replace file")
        })
    }

    fn read_to_string(&self, path: &Path) -> OlympusResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }
}

/// Links allowed in one chain before giving up, matching Linux `MAXSYMLINKS`.
const MAX_LINK_DEPTH: usize = 40;

/// Follow `path` through any symlinks. A dangling final target is returned
/// as-is so the write creates it.
fn resolve_symlinks(path: &Path) -> io::Result<PathBuf> {
    let mut current = path.to_path_buf();

    for _ in 0..MAX_LINK_DEPTH {
        match fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&current)?;
                current = match current.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                };
            }
            _ => return Ok(current),
        }
    }

    Err(io::Error::other("too many levels of symbolic links"))
}

fn sibling_tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn directory_error(path: &Path, e: io::Error) -> OlympusError {
    ApplicationError::DirectoryCreation {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> OlympusError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("olympus");

        LocalFilesystem.create_dir(&dir).unwrap();
        LocalFilesystem.create_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn create_dir_needs_parent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("missing").join("olympus");

        let err = LocalFilesystem.create_dir(&dir).unwrap_err();
        assert!(matches!(
            err,
            OlympusError::Application(ApplicationError::DirectoryCreation { .. })
        ));
        assert!(!temp.path().join("missing").exists());
    }

    #[test]
    fn create_dir_over_file_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("olympus");
        fs::write(&file, "x").unwrap();

        assert!(LocalFilesystem.create_dir(&file).is_err());
    }

    #[test]
    fn overwrite_replaces_content_and_leaves_no_tmp() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join(".olympus_global");

        LocalFilesystem.overwrite(&file, "first").unwrap();
        LocalFilesystem.overwrite(&file, "second").unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "second");
        assert!(!temp.path().join(".olympus_global.tmp").exists());
    }

    #[test]
    fn remove_dir_contents_keeps_directory() {
        let temp = TempDir::new().unwrap();
        let tmp = temp.path().join(".tmp");
        fs::create_dir_all(tmp.join("nested/deeper")).unwrap();
        fs::write(tmp.join("a.txt"), "a").unwrap();
        fs::write(tmp.join("nested/b.txt"), "b").unwrap();

        LocalFilesystem.remove_dir_contents(&tmp).unwrap();

        assert!(tmp.is_dir());
        assert_eq!(fs::read_dir(&tmp).unwrap().count(), 0);

        // Already empty: still fine.
        LocalFilesystem.remove_dir_contents(&tmp).unwrap();
    }

    #[test]
    fn remove_dir_contents_of_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        assert!(
            LocalFilesystem
                .remove_dir_contents(&temp.path().join("nope"))
                .is_err()
        );
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_writes_through_symlink() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let dotfiles = temp.path().join("dotfiles");
        fs::create_dir(&dotfiles).unwrap();
        let real = dotfiles.join("olympus_global");
        fs::write(&real, "old").unwrap();

        let link = temp.path().join(".olympus_global");
        symlink(&real, &link).unwrap();

        LocalFilesystem.overwrite(&link, "new").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
        assert!(!dotfiles.join("olympus_global.tmp").exists());
        assert!(!temp.path().join(".olympus_global.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_follows_relative_link_chain() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("real"), "old").unwrap();
        symlink("real", temp.path().join("middle")).unwrap();
        symlink("middle", temp.path().join("outer")).unwrap();

        LocalFilesystem
            .overwrite(&temp.path().join("outer"), "new")
            .unwrap();

        assert_eq!(fs::read_to_string(temp.path().join("real")).unwrap(), "new");
        assert!(
            fs::symlink_metadata(temp.path().join("middle"))
                .unwrap()
                .file_type()
                .is_symlink()
        );
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_rejects_link_loop() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        symlink("b", temp.path().join("a")).unwrap();
        symlink("a", temp.path().join("b")).unwrap();

        assert!(LocalFilesystem.overwrite(&temp.path().join("a"), "x").is_err());
    }

    #[test]
    fn sibling_tmp_path_keeps_directory() {
        assert_eq!(
            sibling_tmp_path(Path::new("/h/.olympus/.olympus_global")),
            PathBuf::from("/h/.olympus/.olympus_global.tmp")
        );
    }
}
