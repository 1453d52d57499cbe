// config.rs - Run configuration, loaded from JSON with defaults for every field
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::page::PageConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub page: PageConfig,
    /// Pixels scrolled per wheel line or arrow key press
    pub scroll_step: f32,
    /// Frame rate of headless runs
    pub fps: f32,
    /// Headless frame count when none is given on the command line
    pub frames: u64,
    /// Write a snapshot every N headless frames; 0 only writes the last one
    pub snapshot_every: u64,
    /// Seconds between FPS log lines
    pub fps_interval: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            page: PageConfig::default(),
            scroll_step: 40.0,
            fps: 60.0,
            frames: 300,
            snapshot_every: 60,
            fps_interval: 1.0,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        let config = Self::from_json(&text).with_context(|| format!("invalid config file {:?}", path))?;
        log::info!("loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        anyhow::ensure!(config.fps > 0.0, "fps must be positive, got {}", config.fps);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_all_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = Config::from_json(r#"{ "width": 640, "page": { "section_heights": [1.5, 1.5] } }"#).unwrap();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 720);
        assert_eq!(config.page.section_heights, vec![1.5, 1.5]);
        assert_eq!(config.page.nav_height, Some(70.0));
    }

    #[test]
    fn rejects_zero_fps() {
        assert!(Config::from_json(r#"{ "fps": 0 }"#).is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Config::load("/definitely/not/here.json").unwrap_err();
        assert!(format!("{:#}", err).contains("not/here.json"));
    }
}
