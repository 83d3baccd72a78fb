//! World-size configuration, loaded from a small TOML file next to the
//! executable. The core clamps undersized values itself rather than trust
//! whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::game::world::MIN_WORLD_SIZE;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            width: MIN_WORLD_SIZE,
            height: MIN_WORLD_SIZE,
        }
    }
}

impl WorldConfig {
    /// Load the config, creating it with defaults on first run. Values
    /// below the minimum playable size are clamped up.
    pub fn load(path: &Path) -> Result<WorldConfig, ConfigError> {
        if !path.exists() {
            let cfg = WorldConfig::default();
            // Best effort, matching a read-only install gracefully.
            let _ = fs::write(path, cfg.to_toml());
            return Ok(cfg);
        }
        let text = fs::read_to_string(path)?;
        let cfg: WorldConfig = toml::from_str(&text)?;
        Ok(cfg.clamped())
    }

    /// Default path: next to the executable, falling back to the working
    /// directory.
    pub fn default_path() -> PathBuf {
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                return dir.join(CONFIG_FILE);
            }
        }
        PathBuf::from(CONFIG_FILE)
    }

    pub fn clamped(self) -> WorldConfig {
        WorldConfig {
            width: self.width.max(MIN_WORLD_SIZE),
            height: self.height.max(MIN_WORLD_SIZE),
        }
    }

    fn to_toml(&self) -> String {
        format!("width = {}\nheight = {}\n", self.width, self.height)
    }
}
