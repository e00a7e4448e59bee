//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Standard config locations, checked in order relative to the working directory.
const CANDIDATES: [&str; 3] = [
    ".memeboard.toml",
    "memeboard.toml",
    ".config/memeboard.toml",
];

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from an explicit path, a standard location, or defaults.
    ///
    /// An explicit path that does not exist is an error; a missing standard
    /// location just means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(Path::new(".")),
        };

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        schema
            .validate()
            .context(config_path.as_ref().map_or_else(
                || "In default configuration".to_string(),
                |p| format!("In {}", p.display()),
            ))?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations under `root`
fn find_config_file(root: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|path| path.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {}", path.display(), e)).with_source(e)
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::from(e).with_context(format!("Failed to parse config file {}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::fs;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.search.threshold, 0.65);
    }

    #[test]
    fn test_config_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memeboard.toml");
        fs::write(&path, "[search]\nthreshold = 0.8\ndebounce_ms = 100\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.schema.search.threshold, 0.8);
        assert_eq!(config.schema.search.debounce_ms, 100);
        assert_eq!(config.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_config_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memeboard.toml");
        fs::write(&path, "[search\nthreshold = ").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }

    #[test]
    fn test_config_load_rejects_invalid_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memeboard.toml");
        fs::write(&path, "[search]\ndebounce_ms = 999999\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);
        assert!(err.context.is_some());
    }

    #[test]
    fn test_find_config_file_order() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_file(dir.path()).is_none());

        fs::create_dir(dir.path().join(".config")).unwrap();
        fs::write(dir.path().join(".config/memeboard.toml"), "").unwrap();
        fs::write(dir.path().join("memeboard.toml"), "").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert!(found.ends_with("memeboard.toml"));
        assert!(!found.to_string_lossy().contains(".config"));
    }
}
