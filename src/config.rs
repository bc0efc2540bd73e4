use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::core::navigation::{NavigationConfig, Smoothing};
use crate::core::position_updater::DEFAULT_LOOK_AHEAD;
use crate::math::CurveOptions;
use crate::traits::InputUnits;

/// Camera framing and look-ahead
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Fraction of path length between the camera and the point it looks at
    pub look_ahead: f32,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            look_ahead: DEFAULT_LOOK_AHEAD,
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Everything tunable about a session. Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub curve: CurveOptions,
    pub input: InputUnits,
    pub navigation: NavigationConfig,
    pub view: ViewConfig,
}

impl Settings {
    /// Reads settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read settings file: {:?}", path))?;
        let settings: Settings = serde_json::from_str(&text)
            .context(format!("Failed to parse settings file: {:?}", path))?;
        Ok(settings)
    }

    /// Builds settings from an optional file plus command-line overrides
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(sensitivity) = cli.sensitivity {
            settings.navigation.sensitivity = sensitivity;
        }
        if cli.no_smoothing {
            settings.navigation.smoothing = Smoothing::Immediate;
        }

        settings.validate()?;
        log::debug!("Settings: {:?}", settings);
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let nav = &self.navigation;
        ensure!(
            nav.sensitivity.is_finite() && nav.sensitivity > 0.0,
            "sensitivity must be a positive number, got {}",
            nav.sensitivity
        );
        if let Smoothing::Damped { rate } = nav.smoothing {
            ensure!(
                rate.is_finite() && rate > 0.0,
                "damping rate must be a positive number, got {}",
                rate
            );
        }
        ensure!(
            self.input.line_height_px.is_finite() && self.input.line_height_px > 0.0,
            "line height must be a positive number, got {}",
            self.input.line_height_px
        );
        ensure!(
            self.view.look_ahead > 0.0 && self.view.look_ahead <= 0.5,
            "look-ahead must be in (0, 0.5], got {}",
            self.view.look_ahead
        );
        ensure!(
            self.view.near > 0.0 && self.view.far > self.view.near,
            "clip planes must satisfy 0 < near < far, got {} and {}",
            self.view.near,
            self.view.far
        );
        ensure!(
            self.curve.arc_length_divisions > 0,
            "arc length divisions must be at least 1"
        );
        Ok(())
    }
}
