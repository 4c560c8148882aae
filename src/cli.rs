// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::ViewerConfig;
use crate::error::Result;

#[derive(Parser, Debug, Clone)]
#[command(name = "polyhedra")]
#[command(about = "Spinning polyhedra rendered with wgpu", long_about = None)]
pub struct Cli {
    /// JSON scene file; the built-in scene is used when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Window width in pixels (overrides the scene file)
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels (overrides the scene file)
    #[arg(long)]
    pub height: Option<u32>,

    /// Exit after this many frames have been presented
    #[arg(long)]
    pub frames: Option<u64>,

    /// Log filter in env_logger syntax, e.g. "debug" or "polyhedra=trace,wgpu=warn"
    #[arg(long = "log-level")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Scene file (or defaults) with command-line overrides applied
    pub fn viewer_config(&self) -> Result<ViewerConfig> {
        let mut config = match &self.scene {
            Some(path) => ViewerConfig::load(path)?,
            None => ViewerConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }

        config.validate()?;
        Ok(config)
    }
}
