use serde::{Deserialize, Serialize};

use crate::traits::{normalize_input, InputUnits, ScrollSource};

/// Distance below which damped progress snaps onto its target
const SNAP_DISTANCE: f32 = 1e-5;

/// How scroll input reaches `progress`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Smoothing {
    /// Each event moves progress directly
    Immediate,
    /// Events move a target; progress eases toward it at `rate` per second
    Damped { rate: f32 },
}

impl Default for Smoothing {
    fn default() -> Self {
        Smoothing::Damped { rate: 6.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Progress gained per normalized pixel of scroll
    pub sensitivity: f32,
    pub smoothing: Smoothing,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.0005,
            smoothing: Smoothing::default(),
        }
    }
}

/// Where the camera sits relative to the ends of the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationPhase {
    AtStart,
    InTransit,
    AtEnd,
}

impl NavigationPhase {
    pub fn of(progress: f32) -> Self {
        if progress <= 0.0 {
            NavigationPhase::AtStart
        } else if progress >= 1.0 {
            NavigationPhase::AtEnd
        } else {
            NavigationPhase::InTransit
        }
    }
}

/// Progress along the path plus the not yet applied scroll target.
/// Both always lie in `[0, 1]`; only [`Navigator`] writes them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationState {
    progress: f32,
    target: f32,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress the camera is easing toward
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn phase(&self) -> NavigationPhase {
        NavigationPhase::of(self.progress)
    }

    /// True when no scroll momentum is pending
    pub fn is_settled(&self) -> bool {
        self.progress == self.target
    }
}

/// Turns scroll deltas into progress changes
#[derive(Debug, Clone)]
pub struct Navigator {
    config: NavigationConfig,
}

impl Navigator {
    pub fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Normalizes a device event and applies it
    pub fn handle_input(
        &self,
        state: &mut NavigationState,
        event: &impl ScrollSource,
        units: &InputUnits,
    ) {
        self.apply_delta(state, normalize_input(event, units));
    }

    /// Applies one normalized scroll delta. Zero or non-finite deltas do nothing.
    pub fn apply_delta(&self, state: &mut NavigationState, delta: f32) {
        if delta == 0.0 || !delta.is_finite() {
            log::debug!("Ignoring scroll delta {}", delta);
            return;
        }

        let amount = delta * self.config.sensitivity;
        if !amount.is_finite() {
            log::debug!("Ignoring scroll delta {} (sensitivity overflow)", delta);
            return;
        }

        match self.config.smoothing {
            Smoothing::Damped { rate } if rate.is_finite() && rate > 0.0 => {
                state.target = (state.target + amount).clamp(0.0, 1.0);
            }
            _ => {
                let progress = (state.progress + amount).clamp(0.0, 1.0);
                set_progress(state, progress);
                state.target = progress;
            }
        }
    }

    /// Advances damped motion by `dt` seconds. Exponential easing keeps the
    /// result independent of how `dt` is split across frames.
    pub fn step(&self, state: &mut NavigationState, dt: f32) {
        if state.is_settled() || !dt.is_finite() || dt <= 0.0 {
            return;
        }

        let next = match self.config.smoothing {
            Smoothing::Damped { rate } if rate.is_finite() && rate > 0.0 => {
                let remaining = state.target - state.progress;
                let alpha = 1.0 - (-rate * dt).exp();
                let eased = state.progress + remaining * alpha;
                if (state.target - eased).abs() <= SNAP_DISTANCE {
                    state.target
                } else {
                    eased
                }
            }
            _ => state.target,
        };

        set_progress(state, next.clamp(0.0, 1.0));
    }

    /// Moves straight to `progress` (clamped), dropping any pending motion
    pub fn jump_to(&self, state: &mut NavigationState, progress: f32) {
        if progress.is_nan() {
            return;
        }
        let progress = progress.clamp(0.0, 1.0);
        set_progress(state, progress);
        state.target = progress;
    }

    pub fn reset(&self, state: &mut NavigationState) {
        self.jump_to(state, 0.0);
    }
}

fn set_progress(state: &mut NavigationState, progress: f32) {
    let before = state.phase();
    state.progress = progress;
    let after = state.phase();
    if before != after {
        log::debug!("Navigation phase {:?} -> {:?}", before, after);
    }
}
