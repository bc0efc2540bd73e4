use glam::Vec3;

use crate::math::CameraPose;

/// Anything with a settable position and orientation.
///
/// The navigation core writes through this once per frame and never reads it back.
pub trait CameraTransform {
    /// Move the camera to a world-space position
    fn set_position(&mut self, position: Vec3);

    /// Orient the camera; `forward` and `up` are unit length and orthogonal
    fn set_orientation(&mut self, forward: Vec3, up: Vec3);

    fn set_pose(&mut self, pose: &CameraPose) {
        self.set_position(pose.position);
        self.set_orientation(pose.forward, pose.up);
    }
}

impl CameraTransform for CameraPose {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_orientation(&mut self, forward: Vec3, up: Vec3) {
        self.forward = forward;
        self.up = up;
    }

    fn set_pose(&mut self, pose: &CameraPose) {
        *self = *pose;
    }
}
