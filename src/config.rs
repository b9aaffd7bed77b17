use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FindexError, Result};

/// Index artifact filename at the project root.
const INDEX_FILE: &str = ".findex.txt";
/// Ignore file consulted during the walk.
const IGNORE_FILE: &str = ".gitignore";
/// Settings filename.
const CONFIG_FILE: &str = ".findex.toml";

/// Project-level configuration resolved from the working directory.
///
/// Passed explicitly into indexing calls; there is no ambient global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of the project being indexed.
    pub project_root: PathBuf,
    /// Path to the index artifact.
    pub index_path: PathBuf,
    /// Path to the ignore file.
    pub ignore_path: PathBuf,
    /// Path to the settings file.
    pub config_path: PathBuf,
    /// User settings loaded from .findex.toml.
    pub settings: UserSettings,
}

/// User-configurable settings from .findex.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Indexing configuration.
    pub indexing: IndexingSettings,
}

/// Indexing-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexingSettings {
    /// Maximum file size in MB to index (0 = unlimited).
    pub max_file_size_mb: u32,
}

impl Default for IndexingSettings {
    fn default() -> Self {
        Self {
            max_file_size_mb: 10,
        }
    }
}

impl Config {
    /// Create config for a given project root.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let index_path = project_root.join(INDEX_FILE);
        let ignore_path = project_root.join(IGNORE_FILE);
        let config_path = project_root.join(CONFIG_FILE);

        let settings = Self::load_settings(&config_path).unwrap_or_default();

        Self {
            project_root,
            index_path,
            ignore_path,
            config_path,
            settings,
        }
    }

    /// Create config from the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| FindexError::Config(format!("cannot get cwd: {e}")))?;
        Ok(Self::new(cwd))
    }

    /// Load settings from .findex.toml if it exists; invalid content falls
    /// back to defaults.
    fn load_settings(config_path: &Path) -> Option<UserSettings> {
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(config_path).ok()?;
        toml::from_str(&content).ok()
    }

    /// Check whether the index artifact exists.
    #[must_use]
    pub fn index_exists(&self) -> bool {
        self.index_path.exists()
    }

    /// Maximum indexable file size in bytes (0 = unlimited).
    #[must_use]
    pub fn max_file_size_bytes(&self) -> u64 {
        u64::from(self.settings.indexing.max_file_size_mb) * 1024 * 1024
    }

    /// Relative paths of the tool's own artifacts, which are never indexed.
    #[must_use]
    pub fn own_artifacts(&self) -> [&'static str; 2] {
        [INDEX_FILE, CONFIG_FILE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn config_new_sets_paths() {
        let cfg = Config::new("/tmp/project");
        assert_eq!(cfg.project_root, PathBuf::from("/tmp/project"));
        assert_eq!(cfg.index_path, PathBuf::from("/tmp/project/.findex.txt"));
        assert_eq!(cfg.ignore_path, PathBuf::from("/tmp/project/.gitignore"));
        assert_eq!(cfg.config_path, PathBuf::from("/tmp/project/.findex.toml"));
    }

    #[test]
    fn index_exists_returns_false_when_missing() {
        let tmp = TempDir::new().unwrap();
        let cfg = Config::new(tmp.path());
        assert!(!cfg.index_exists());
    }

    #[test]
    fn default_settings() {
        let settings = UserSettings::default();
        assert_eq!(settings.indexing.max_file_size_mb, 10);
    }

    #[test]
    fn load_settings_from_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(".findex.toml"),
            "[indexing]\nmax_file_size_mb = 25\n",
        )
        .unwrap();
        let cfg = Config::new(tmp.path());
        assert_eq!(cfg.settings.indexing.max_file_size_mb, 25);
        assert_eq!(cfg.max_file_size_bytes(), 25 * 1024 * 1024);
    }

    #[test]
    fn load_invalid_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(".findex.toml"), "invalid toml {{{{").unwrap();
        let cfg = Config::new(tmp.path());
        assert_eq!(cfg.settings.indexing.max_file_size_mb, 10);
    }
}
