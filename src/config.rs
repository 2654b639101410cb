//! On-disk device configuration (`.rowsync.json` in the working directory).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEVICE_FILE: &str = ".rowsync.json";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeviceFile {
    #[serde(default)]
    pub device: Option<DeviceConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub base_url: String,
}

pub fn device_file_path(dir: &Path) -> PathBuf {
    dir.join(DEVICE_FILE)
}

/// Missing file reads as an empty config.
pub fn read_device_file(dir: &Path) -> Result<DeviceFile> {
    let path = device_file_path(dir);
    if !path.exists() {
        return Ok(DeviceFile::default());
    }
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}

pub fn write_device_file(dir: &Path, cfg: &DeviceFile) -> Result<()> {
    let path = device_file_path(dir);
    let raw = serde_json::to_string_pretty(cfg).context("serialize device config")?;
    std::fs::write(&path, raw).with_context(|| format!("write {}", path.display()))
}
