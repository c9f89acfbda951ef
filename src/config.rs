//! Configuration handling for the TUI

use anyhow::Result;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Directory exported PDFs are written to
    pub output_dir: Option<PathBuf>,
    /// Directory holding the `icons/` folder
    pub asset_dir: Option<PathBuf>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "resume", "resume-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory the log file is written to
    pub fn log_dir() -> PathBuf {
        ProjectDirs::from("io", "resume", "resume-tui")
            .map(|dirs| dirs.data_local_dir().join("logs"))
            .unwrap_or_else(|| std::env::temp_dir().join("resume-tui"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Where exported files go: configured directory, then the user's
    /// download folder, then the working directory
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(|| {
                UserDirs::new().and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()))
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn resolved_asset_dir(&self) -> PathBuf {
        self.asset_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("public"))
    }
}
