use crate::constants::{DEFAULT_DOWNLOAD_BUFFER_SIZE, DEFAULT_PORT, DEFAULT_UPLOAD_BUFFER_SIZE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Verb used by `put`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UploadCommand {
    Appe,
    Stor,
}

impl UploadCommand {
    pub fn verb(&self) -> &'static str {
        match self {
            UploadCommand::Appe => "APPE",
            UploadCommand::Stor => "STOR",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    pub port: u16,
    pub passive: bool,
    pub debug: bool,
    pub read_timeout_secs: Option<u64>, // None waits forever
    pub download_buffer_size: Option<usize>,
    pub upload_buffer_size: Option<usize>,
    pub active_data_port: Option<u16>, // Server data port dialled in active mode
    pub upload_command: UploadCommand,
    pub download_dir: Option<PathBuf>, // None is the working directory
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            passive: false,
            debug: false,
            read_timeout_secs: None,
            download_buffer_size: Some(DEFAULT_DOWNLOAD_BUFFER_SIZE),
            upload_buffer_size: Some(DEFAULT_UPLOAD_BUFFER_SIZE),
            active_data_port: None,
            upload_command: UploadCommand::Appe,
            download_dir: None,
        }
    }
}

impl ClientConfig {
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn download_buffer_size(&self) -> usize {
        self.download_buffer_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_DOWNLOAD_BUFFER_SIZE)
    }

    pub fn upload_buffer_size(&self) -> usize {
        self.upload_buffer_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_UPLOAD_BUFFER_SIZE)
    }

    /// Where `get` stores `file_name`.
    pub fn download_path(&self, file_name: &Path) -> PathBuf {
        match &self.download_dir {
            Some(dir) => dir.join(file_name),
            None => file_name.to_path_buf(),
        }
    }

    /// Port the client dials for active-mode data, defaulting to the
    /// conventional control port minus one.
    pub fn active_data_port(&self, control_port: u16) -> u16 {
        self.active_data_port
            .unwrap_or_else(|| control_port.saturating_sub(1))
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse configuration")?;
        Ok(config)
    }
}

pub fn load_config(path: &str) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path))?;
    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse configuration file: {}", path))?;
    Ok(config)
}
