use glam::{Mat4, Vec3};

use crate::config::ViewConfig;
use crate::math::{CameraPose, WORLD_UP};
use crate::traits::CameraTransform;
use crate::types::CameraUniform;

/// Perspective camera driven by the navigation session
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    forward: Vec3,
    up: Vec3,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(view: &ViewConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            up: WORLD_UP,
            fov_y: view.fov_y_degrees.to_radians(),
            near: view.near,
            far: view.far,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up).normalize()
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            forward: self.forward,
            up: self.up,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.pose().view_matrix()
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }

    pub fn to_uniform(&self, aspect: f32, progress: f32) -> CameraUniform {
        let view_proj = self.projection_matrix(aspect) * self.view_matrix();

        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            position: self.position.to_array(),
            progress,
            forward: self.forward.to_array(),
            _pad1: 0.0,
            right: self.right().to_array(),
            _pad2: 0.0,
            up: self.up.to_array(),
            _pad3: 0.0,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}

impl CameraTransform for Camera {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_orientation(&mut self, forward: Vec3, up: Vec3) {
        self.forward = forward;
        self.up = up;
    }
}
