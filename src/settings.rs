use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Directory holding one sprite sheet per mode (`walking.png`, ...).
    #[serde(default = "default_sprite_dir")]
    pub sprite_dir: Option<String>,
    /// Where the pet first appears. Defaults to near the bottom-right corner
    /// of the primary screen.
    #[serde(default)]
    pub start_position: Option<(i32, i32)>,
}

fn default_sprite_dir() -> Option<String> {
    Some("assets".into())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            sprite_dir: default_sprite_dir(),
            start_position: None,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.as_ref().map(PathBuf::from)
    }

    pub fn sprite_dir(&self) -> PathBuf {
        PathBuf::from(self.sprite_dir.as_deref().unwrap_or("assets"))
    }

    /// Initial window origin for a screen of the given size.
    pub fn start_position(&self, screen: (u32, u32)) -> (i32, i32) {
        self.start_position
            .unwrap_or((screen.0 as i32 - 100, screen.1 as i32 - 100))
    }
}
