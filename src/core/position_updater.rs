use crate::core::navigation::NavigationState;
use crate::math::{CameraPose, CurvePath};
use crate::traits::CameraTransform;

/// Default look-ahead distance as a fraction of path length
pub const DEFAULT_LOOK_AHEAD: f32 = 0.001;

/// Places the camera on the curve once per frame
#[derive(Debug, Clone, Copy)]
pub struct PositionUpdater {
    look_ahead: f32,
}

impl Default for PositionUpdater {
    fn default() -> Self {
        Self::new(DEFAULT_LOOK_AHEAD)
    }
}

impl PositionUpdater {
    /// `look_ahead` outside `(0, 0.5]` falls back to the default
    pub fn new(look_ahead: f32) -> Self {
        let look_ahead = if look_ahead.is_finite() && look_ahead > 0.0 && look_ahead <= 0.5 {
            look_ahead
        } else {
            log::warn!(
                "Look-ahead {} out of range, using {}",
                look_ahead,
                DEFAULT_LOOK_AHEAD
            );
            DEFAULT_LOOK_AHEAD
        };
        Self { look_ahead }
    }

    pub fn look_ahead(&self) -> f32 {
        self.look_ahead
    }

    /// Pose for a given progress.
    ///
    /// The heading comes from a chord of length `look_ahead` starting at
    /// `progress`. Near the end the chord start is held at `1 - look_ahead`,
    /// so the camera keeps facing the direction of travel instead of flipping.
    pub fn pose_at(&self, curve: &CurvePath, progress: f32) -> CameraPose {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };

        let position = curve.point_at(progress);
        let chord_start = progress.min(1.0 - self.look_ahead);
        let heading = curve.point_at(chord_start + self.look_ahead) - curve.point_at(chord_start);
        let direction = heading
            .try_normalize()
            .unwrap_or_else(|| curve.tangent_at(progress));

        CameraPose::look_along(position, direction)
    }

    /// Writes the pose for the current progress into `camera`. Never mutates `state`.
    pub fn update(
        &self,
        curve: &CurvePath,
        state: &NavigationState,
        camera: &mut impl CameraTransform,
    ) -> CameraPose {
        let pose = self.pose_at(curve, state.progress());
        camera.set_pose(&pose);
        log::trace!(
            "progress {:.4}: position {:?}, forward {:?}",
            state.progress(),
            pose.position,
            pose.forward
        );
        pose
    }
}
