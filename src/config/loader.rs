//! Configuration loading

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::Configuration;
use crate::error::{ContainmentError, ContainmentResult};

/// File looked for in the working directory when nothing else is given
pub const DEFAULT_CONFIG_FILE: &str = "containment.yml";

/// Environment variable overriding the configuration path
pub const CONFIG_ENV: &str = "CONTAINMENT_CONFIG";

/// Pick the configuration path: explicit flag, then `CONTAINMENT_CONFIG`,
/// then `./containment.yml`.
pub fn config_path(flag: Option<&Path>) -> PathBuf {
    config_path_with(flag, std::env::var_os(CONFIG_ENV))
}

fn config_path_with(flag: Option<&Path>, env: Option<OsString>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    match env {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

impl Configuration {
    /// Load and parse a YAML configuration file
    pub fn load(path: &Path) -> ContainmentResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ContainmentError::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => ContainmentError::Io(e),
        })?;
        parse(&content, path)
    }

    /// Parse YAML configuration text
    pub fn from_yaml_str(content: &str) -> ContainmentResult<Self> {
        parse(content, Path::new(DEFAULT_CONFIG_FILE))
    }
}

fn parse(content: &str, path: &Path) -> ContainmentResult<Configuration> {
    // An empty file is an empty configuration, not a decode error.
    if content.trim().is_empty() {
        return Ok(Configuration::default());
    }
    serde_yaml_ng::from_str(content).map_err(|e| ContainmentError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
