//! Formatter configuration shared by the dashboard helpers, persisted as YAML.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::entry::Entry;
use crate::data::formatter::{ByteFormatter, ChargeFormatter};
use crate::error::{HistorianError, Result};

/// Settings for the presentation helpers.
///
/// Missing fields fall back to their defaults when loading, so a partial
/// YAML file such as `charge: { unit: mAh }` is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorianConfig {
    pub bytes: ByteFormatter,
    pub charge: ChargeFormatter,
}

impl HistorianConfig {
    pub fn reset_defaults(&mut self) {
        *self = HistorianConfig::default();
    }

    /// Format a byte count with the configured [`ByteFormatter`].
    pub fn describe_bytes(&self, bytes: f64) -> String {
        self.bytes.format(bytes)
    }

    /// Total charge of `data` rendered with the configured [`ChargeFormatter`].
    pub fn total_charge(&self, data: &[Entry]) -> Result<String> {
        crate::data::charge::calculate_total_charge_with(data, &self.charge)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_yaml(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let s = self.to_yaml()?;
        let mut f = fs::File::create(path)?;
        f.write_all(s.as_bytes())?;
        log::debug!("HistorianConfig::save_to_path(): wrote {:?}", path);
        Ok(())
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)?;
        let cfg = Self::from_yaml(&s)?;
        log::debug!("HistorianConfig::load_from_path(): loaded {:?}", path);
        Ok(cfg)
    }

    /// Default location: `~/.historian/config.yaml`.
    pub fn default_path() -> Result<PathBuf> {
        let home = std::env::var_os("HOME").ok_or(HistorianError::MissingHome)?;
        Ok(PathBuf::from(home).join(".historian").join("config.yaml"))
    }

    /// Save to [`default_path`](Self::default_path), creating the directory if needed.
    pub fn save_to_default_path(&self) -> Result<()> {
        let path = Self::default_path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        self.save_to_path(&path)
    }

    /// Load from [`default_path`](Self::default_path), or defaults if the file does not exist.
    pub fn load_from_default_path() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("HistorianConfig: {:?} does not exist, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }
}
