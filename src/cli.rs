// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "path-camera")]
#[command(about = "Scroll-driven camera navigation along a 3D curve", long_about = None)]
pub struct Cli {
    /// Curve document: JSON list of {x, y, z} control points
    pub curve: PathBuf,

    /// JSON settings file; command-line flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Progress gained per pixel of scroll
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Apply scroll input immediately instead of easing toward it
    #[arg(long = "no-smoothing", default_value = "false")]
    pub no_smoothing: bool,

    /// Run without a window, replaying --scroll deltas
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Headless scroll deltas in pixels, one per frame (positive = forward)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub scroll: Vec<f32>,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 120)]
    pub frames: u32,
}
