use std::path::{Path, PathBuf};

use almanac_core::AssemblerOptions;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "almanac.toml";

/// Top-level almanac configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// SQLite database file.
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Directory holding `<Month_Day>.txt` pages.
    #[serde(default = "default_pages_dir")]
    pub pages_dir: PathBuf,

    /// Log directory; relative paths resolve against the working directory.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    #[serde(default)]
    pub log_level: Option<String>,

    /// Assembly policies.
    #[serde(default)]
    pub assembler: AssemblerOptions,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            pages_dir: default_pages_dir(),
            log_dir: default_log_dir(),
            log_level: None,
            assembler: AssemblerOptions::default(),
        }
    }
}

fn default_database() -> PathBuf {
    PathBuf::from("almanac.sqlite3")
}
fn default_pages_dir() -> PathBuf {
    PathBuf::from("pages")
}
fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl AlmanacConfig {
    /// Loads `path`, or `almanac.toml` if it exists, or the defaults.
    ///
    /// An explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Path::new(DEFAULT_CONFIG_FILE),
            None => return Ok(Self::default()),
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }

    /// Absolute log directory.
    pub fn resolved_log_dir(&self) -> Result<PathBuf> {
        if self.log_dir.is_absolute() {
            return Ok(self.log_dir.clone());
        }
        let cwd = std::env::current_dir().context("failed to read working directory")?;
        Ok(cwd.join(&self.log_dir))
    }
}
