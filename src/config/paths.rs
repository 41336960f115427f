//! Path resolution for pomoclock configuration files.
//!
//! All pomoclock files live in `~/.pomoclock/` unless `POMOCLOCK_HOME`
//! points somewhere else:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::ClockError;

/// Environment variable overriding the root directory.
pub const HOME_ENV: &str = "POMOCLOCK_HOME";

/// Paths to pomoclock configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomoclock/`
    pub root: PathBuf,
    /// Config file: `~/.pomoclock/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `POMOCLOCK_HOME`, falling back to the user's home
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, ClockError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            ClockError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomoclock")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), ClockError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                ClockError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".pomoclock"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-pomoclock");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join("pomoclock"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
        // Idempotent
        paths.ensure_dirs().unwrap();
    }
}
