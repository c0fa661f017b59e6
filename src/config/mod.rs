use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// Keys every configuration file is expected to carry.
pub const CONFIG_KEYS: &[&str] = &[
    "data_dir",
    "roster_file",
    "school_days",
    "host",
    "port",
    "log_level",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_roster_file")]
    pub roster_file: String,
    #[serde(default = "default_school_days")]
    pub school_days: Vec<String>,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> String {
    Config::config_dir()
        .join("data")
        .to_string_lossy()
        .to_string()
}
fn default_roster_file() -> String {
    "ClassData.csv".to_string()
}
fn default_school_days() -> Vec<String> {
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        .iter()
        .map(|d| d.to_string())
        .collect()
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            roster_file: default_roster_file(),
            school_days: default_school_days(),
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rtimetable")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimetable.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content =
            fs::read_to_string(path).map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.school_days.is_empty() {
            return Err(AppError::Config(
                "school_days must list at least one day".to_string(),
            ));
        }
        if self.roster_file.trim().is_empty() {
            return Err(AppError::Config("roster_file must not be empty".to_string()));
        }
        Ok(())
    }

    /// Data directory with `~/` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Address the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Write a default configuration file and create the data directory.
    /// Returns false when a config file already exists and `force` is not set;
    /// the existing file is then left untouched.
    pub fn init_all(path: &Path, data_dir: Option<&str>, force: bool) -> AppResult<bool> {
        let keep_existing = path.exists() && !force;
        let mut cfg = if keep_existing {
            Config::load(path)?
        } else {
            Config::default()
        };
        if let Some(dir) = data_dir {
            cfg.data_dir = dir.to_string();
        }

        fs::create_dir_all(cfg.data_path())?;

        if keep_existing {
            return Ok(false);
        }

        cfg.save(path)?;
        Ok(true)
    }
}
