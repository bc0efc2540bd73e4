pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod loaders;
pub mod math;
pub mod traits;
pub mod types;

pub use camera::Camera;
pub use config::Settings;
pub use crate::core::{NavigationPhase, NavigationSession};
pub use error::CurveLoadError;
pub use loaders::load_curve_path;
pub use math::{CameraPose, CurvePath};
