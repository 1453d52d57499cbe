// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug, Clone)]
#[command(name = "studio-scene")]
#[command(about = "Scroll-driven film set rendered in software", long_about = None)]
pub struct Cli {
    /// Run a scripted scroll sweep without opening a window
    #[arg(long)]
    pub headless: bool,

    /// Number of headless frames (defaults to the config value)
    #[arg(long)]
    pub frames: Option<u64>,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for headless PNG snapshots
    #[arg(long, default_value = "snapshots")]
    pub snapshot_dir: PathBuf,

    /// Write the final hero scene as JSON
    #[arg(long)]
    pub dump_scene: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["studio-scene", "--headless", "--frames", "12", "--width", "320"]);
        assert!(cli.headless);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.frames, 12);
        assert_eq!(config.width, 320);
        assert_eq!(config.height, Config::default().height);
    }

    #[test]
    fn snapshot_dir_has_a_default() {
        let cli = Cli::parse_from(["studio-scene"]);
        assert_eq!(cli.snapshot_dir, PathBuf::from("snapshots"));
        assert!(cli.dump_scene.is_none());
    }
}
