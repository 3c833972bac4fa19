//! Locating and reading the configuration file.
//!
//! A file named with `--config` is always used. Otherwise a [`ConfigSearch`]
//! walks its candidate paths and loads the first one that exists; when none
//! do, the built-in [`AppConfig::default`] applies.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use motif::{
    MotifError,
    config::{AppConfig, ConfigFile},
};

/// Name of the file looked up in each candidate directory.
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for MotifError {
    fn from(err: ConfigError) -> Self {
        MotifError::Config(err.to_string())
    }
}

/// An ordered list of places a configuration file may live.
#[derive(Debug, Clone, Default)]
pub struct ConfigSearch {
    candidates: Vec<PathBuf>,
}

impl ConfigSearch {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// `motif/config.toml` under the working directory, then the
    /// platform configuration directory.
    pub fn standard() -> Self {
        let mut candidates = vec![Path::new("motif").join(CONFIG_FILE_NAME)];
        match ProjectDirs::from("com", "motif", "motif") {
            Some(dirs) => candidates.push(dirs.config_dir().join(CONFIG_FILE_NAME)),
            None => debug!("No platform configuration directory"),
        }
        Self::new(candidates)
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Returns the first candidate that is an existing file.
    pub fn find(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|path| path.is_file())
    }

    /// Loads `explicit` if given, else the first file found by the search,
    /// else the default configuration.
    ///
    /// # Errors
    ///
    /// - `MotifError::Config` if an explicit path is missing or a file is
    ///   not valid TOML.
    /// - `MotifError::Range` if a file contains an inverted range.
    /// - `MotifError::Io` if a file exists but cannot be read.
    pub fn load(&self, explicit: Option<&Path>) -> Result<AppConfig, MotifError> {
        if let Some(path) = explicit {
            info!(path = path.display().to_string(); "Loading configuration from explicit path");
            return load_config_file(path);
        }

        match self.find() {
            Some(path) => {
                info!(path = path.display().to_string(); "Loading configuration");
                load_config_file(path)
            }
            None => {
                debug!(searched = self.candidates.len(); "No configuration file found, using defaults");
                Ok(AppConfig::default())
            }
        }
    }
}

/// Loads configuration using [`ConfigSearch::standard`].
pub fn load_config(explicit: Option<impl AsRef<Path>>) -> Result<AppConfig, MotifError> {
    let explicit = explicit.as_ref().map(AsRef::as_ref);
    ConfigSearch::standard().load(explicit)
}

fn load_config_file(path: &Path) -> Result<AppConfig, MotifError> {
    if !path.is_file() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses configuration text and validates its ranges.
pub fn parse_config(content: &str) -> Result<AppConfig, MotifError> {
    let file: ConfigFile =
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
    Ok(AppConfig::try_from(file)?)
}
