//! Configuration file discovery for the CLI.
//!
//! A configuration file is looked up in a fixed order of [`ConfigSource`]s.
//! The first file that exists wins; when none does, the built-in defaults are
//! used.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use strata::{StrataError, config::AppConfig};

/// Project-relative location checked before the platform directory.
const LOCAL_CONFIG: &str = "strata/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for StrataError {
    fn from(err: ConfigError) -> Self {
        StrataError::Config(err.to_string())
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed with `--config`.
    Explicit,
    /// `strata/config.toml` under the working directory.
    Local,
    /// `config.toml` in the platform config directory.
    System,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Explicit => "explicit",
            Self::Local => "local",
            Self::System => "system",
        };
        f.write_str(name)
    }
}

/// Implicit locations in lookup order. The explicit path is handled by the
/// caller because a missing explicit file is an error, not a fallthrough.
fn implicit_candidates() -> Vec<(ConfigSource, PathBuf)> {
    let mut candidates = vec![(ConfigSource::Local, PathBuf::from(LOCAL_CONFIG))];

    match ProjectDirs::from("com", "strata", "strata") {
        Some(proj_dirs) => candidates.push((
            ConfigSource::System,
            proj_dirs.config_dir().join("config.toml"),
        )),
        None => debug!("Could not determine platform-specific config directory"),
    }

    candidates
}

/// Find and load the CLI configuration.
///
/// Lookup order: `explicit_path`, then `strata/config.toml`, then the
/// platform config directory, then [`AppConfig::default`].
///
/// # Errors
///
/// Returns `StrataError::Config` if `explicit_path` does not exist or a found
/// file is not a valid configuration, and `StrataError::Io` if it cannot be
/// read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, StrataError> {
    // An explicit path must exist; no fallback
    if let Some(path) = explicit_path {
        return load_config_file(ConfigSource::Explicit, path.as_ref());
    }

    for (source, path) in implicit_candidates() {
        if path.exists() {
            return load_config_file(source, &path);
        }
        debug!(source:%, path = path.display().to_string(); "Configuration file not found");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(source: ConfigSource, path: &Path) -> Result<AppConfig, StrataError> {
    info!(source:%, path = path.display().to_string(); "Loading configuration");

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })?;

    Ok(config)
}
