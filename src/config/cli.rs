use std::path::{Path, PathBuf};

use super::Config;

#[derive(clap::Parser, Debug, Default)]
#[command(name = "orrery", version, about = "Orbital animation on an OpenGL vector canvas", long_about = None)]
pub struct Arguments {
    /// Window title
    title: Option<String>,

    /// Config file (defaults to ./orrery.toml when present)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Scene shown first: orrery or showcase
    #[arg(long)]
    scene: Option<String>,

    /// Window width in logical pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long)]
    height: Option<u32>,

    /// Starting animation rate (scene seconds per second)
    #[arg(long)]
    rate: Option<f64>,

    /// Start with the animation paused
    #[arg(long, action = clap::ArgAction::SetTrue)]
    paused: bool,

    /// Directory images are loaded from
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    assets: Option<PathBuf>,
}

impl Arguments {
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    /// Overrides the loaded config with everything given on the command line.
    pub fn apply(self, config: &mut Config) {
        if let Some(title) = self.title {
            config.window.title = title;
        }
        if let Some(scene) = self.scene {
            config.scene.initial = scene;
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if let Some(rate) = self.rate {
            config.animation.rate = rate;
        }
        if self.paused {
            config.animation.start_paused = true;
        }
        if let Some(assets) = self.assets {
            config.scene.assets = assets;
        }
    }
}
