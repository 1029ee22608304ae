//! Filesystem locations owned by Olympus.
//!
//! Every location is derived once from the user's home directory and the
//! fixed names below. [`ConfigPaths`] is immutable after construction, so
//! a process never observes two different config locations.

use std::path::{Path, PathBuf};

/// Global cache root, relative to the home directory.
pub const CACHE_DIRECTORY_NAME: &str = ".olympus";

/// Global config file name, inside the cache root.
pub const CONFIG_FILE_NAME: &str = ".olympus_global";

/// Scratch directory name, inside the cache root.
pub const TMP_DIRECTORY_NAME: &str = ".tmp";

/// Per-project cache directory name, resolved against a project path.
pub const PROJECT_CACHE_DIRECTORY_NAME: &str = "olympus";

/// Derived locations of every persistent Olympus artifact.
///
/// | Accessor | Location |
/// |---|---|
/// | [`config_file`](Self::config_file) | `~/.olympus/.olympus_global` |
/// | [`cache_directory`](Self::cache_directory) | `~/.olympus` |
/// | [`tmp_directory`](Self::tmp_directory) | `~/.olympus/.tmp` |
/// | [`project_cache_for`](Self::project_cache_for) | `<project>/olympus` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    home: PathBuf,
    config_file: PathBuf,
    cache_directory: PathBuf,
    tmp_directory: PathBuf,
}

impl ConfigPaths {
    /// Compute all locations from a home directory.
    pub fn from_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let cache_directory = home.join(CACHE_DIRECTORY_NAME);

        Self {
            config_file: cache_directory.join(CONFIG_FILE_NAME),
            tmp_directory: cache_directory.join(TMP_DIRECTORY_NAME),
            cache_directory,
            home,
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn cache_directory(&self) -> &Path {
        &self.cache_directory
    }

    pub fn tmp_directory(&self) -> &Path {
        &self.tmp_directory
    }

    /// The relative name of the per-project cache directory.
    pub fn project_cache_directory_name(&self) -> &'static str {
        PROJECT_CACHE_DIRECTORY_NAME
    }

    /// Resolve the per-project cache directory for `project`.
    pub fn project_cache_for(&self, project: &Path) -> PathBuf {
        project.join(PROJECT_CACHE_DIRECTORY_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_hang_off_home() {
        let paths = ConfigPaths::from_home("/home/zeus");

        assert_eq!(paths.home(), Path::new("/home/zeus"));
        assert_eq!(paths.cache_directory(), Path::new("/home/zeus/.olympus"));
        assert_eq!(
            paths.config_file(),
            Path::new("/home/zeus/.olympus/.olympus_global")
        );
        assert_eq!(paths.tmp_directory(), Path::new("/home/zeus/.olympus/.tmp"));
    }

    #[test]
    fn tmp_directory_is_inside_cache() {
        let paths = ConfigPaths::from_home("/h");
        assert!(paths.tmp_directory().starts_with(paths.cache_directory()));
        assert!(paths.config_file().starts_with(paths.cache_directory()));
    }

    #[test]
    fn project_cache_is_relative_to_project() {
        let paths = ConfigPaths::from_home("/h");
        assert_eq!(
            paths.project_cache_for(Path::new("/tmp/demo")),
            PathBuf::from("/tmp/demo/olympus")
        );
        assert_eq!(paths.project_cache_directory_name(), "olympus");
    }
}
