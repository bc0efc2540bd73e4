use crate::config::Settings;
use crate::core::navigation::{NavigationPhase, NavigationState, Navigator};
use crate::core::position_updater::PositionUpdater;
use crate::math::{CameraPose, CurvePath};
use crate::traits::{CameraTransform, InputUnits, ScrollSource};

/// One navigation session: the loaded curve, the progress along it, and the
/// logic that drives both. The host feeds input events and calls
/// [`NavigationSession::advance_frame`] once per displayed frame.
#[derive(Debug, Clone)]
pub struct NavigationSession {
    curve: CurvePath,
    state: NavigationState,
    navigator: Navigator,
    updater: PositionUpdater,
    units: InputUnits,
    frame_count: u64,
}

impl NavigationSession {
    pub fn new(curve: CurvePath, settings: &Settings) -> Self {
        Self {
            curve,
            state: NavigationState::new(),
            navigator: Navigator::new(settings.navigation),
            updater: PositionUpdater::new(settings.view.look_ahead),
            units: settings.input,
            frame_count: 0,
        }
    }

    pub fn curve(&self) -> &CurvePath {
        &self.curve
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn progress(&self) -> f32 {
        self.state.progress()
    }

    pub fn phase(&self) -> NavigationPhase {
        self.state.phase()
    }

    /// Number of frames advanced so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Applies one scroll or touch event
    pub fn handle_input(&mut self, event: &impl ScrollSource) {
        self.navigator.handle_input(&mut self.state, event, &self.units);
    }

    /// Repositions the camera immediately, e.g. for a deep link into the path
    pub fn jump_to(&mut self, progress: f32) {
        self.navigator.jump_to(&mut self.state, progress);
    }

    /// Pose for the current progress without touching any camera
    pub fn current_pose(&self) -> CameraPose {
        self.updater.pose_at(&self.curve, self.state.progress())
    }

    /// Runs one tick: eases pending motion by `dt` seconds, then writes the
    /// resulting pose into `camera`.
    pub fn advance_frame(&mut self, dt: f32, camera: &mut impl CameraTransform) -> CameraPose {
        self.navigator.step(&mut self.state, dt);
        self.frame_count += 1;
        self.updater.update(&self.curve, &self.state, camera)
    }
}
