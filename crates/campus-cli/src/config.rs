//! Project configuration stored in `.campus/config.json`.

use campus_graph::DEFAULT_HIT_RADIUS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory holding the project configuration.
pub const CONFIG_DIR: &str = ".campus";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";

/// Graph file used when neither the command line nor a config names one.
pub const DEFAULT_GRAPH_FILE: &str = "campus_graph.txt";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: String,
    /// Graph source file, relative to the project directory.
    pub graph: PathBuf,
    /// Half-width of a vertex hit box for `campus at`.
    pub hit_radius: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            graph: PathBuf::from(DEFAULT_GRAPH_FILE),
            hit_radius: DEFAULT_HIT_RADIUS,
        }
    }
}

impl Config {
    /// Path of the config file for a project directory.
    pub fn path_in(project: &Path) -> PathBuf {
        project.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Loads the config for a project directory, if one exists.
    pub fn load(project: &Path) -> Result<Option<Self>, ConfigError> {
        let path = Self::path_in(project);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Loads the config, falling back to defaults when none exists.
    pub fn load_or_default(project: &Path) -> Result<Self, ConfigError> {
        Ok(Self::load(project)?.unwrap_or_default())
    }

    /// Writes the config, creating the config directory as needed.
    pub fn save(&self, project: &Path) -> Result<(), ConfigError> {
        fs::create_dir_all(project.join(CONFIG_DIR))?;
        fs::write(Self::path_in(project), serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The graph file to load: the explicit one if given, otherwise the
    /// configured one resolved against the project directory.
    pub fn graph_path(&self, project: &Path, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => project.join(&self.graph),
        }
    }
}
