use glam::{Mat3, Mat4, Quat, Vec3};

/// Preferred up axis for the camera
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Reference axis used when the view direction is nearly vertical
pub const SECONDARY_UP: Vec3 = Vec3::Z;

/// |cos| between forward and world up above which world up is abandoned
const PARALLEL_THRESHOLD: f32 = 0.999;

/// Camera position with an orthonormal forward/up pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            up: WORLD_UP,
        }
    }
}

impl CameraPose {
    /// Pose at `position` facing along `direction`.
    /// A zero or non-finite direction faces -Z.
    pub fn look_along(position: Vec3, direction: Vec3) -> Self {
        let (forward, up) = look_basis(direction);
        Self {
            position,
            forward,
            up,
        }
    }

    /// Pose at `position` facing `target`
    pub fn look_at(position: Vec3, target: Vec3) -> Self {
        Self::look_along(position, target - position)
    }

    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up)
    }

    /// A point one unit in front of the camera
    pub fn look_target(&self) -> Vec3 {
        self.position + self.forward
    }

    /// Rotation taking the camera's local frame (-Z forward, +Y up) to world space
    pub fn rotation(&self) -> Quat {
        Quat::from_mat3(&Mat3::from_cols(self.right(), self.up, -self.forward))
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward, self.up)
    }
}

/// Orthonormal (forward, up) for a view direction.
///
/// Up is world +Y re-orthogonalized against forward, or +Z when forward is
/// within a hair of vertical.
pub fn look_basis(direction: Vec3) -> (Vec3, Vec3) {
    let forward = direction.try_normalize().unwrap_or(Vec3::NEG_Z);
    let reference = if forward.dot(WORLD_UP).abs() > PARALLEL_THRESHOLD {
        SECONDARY_UP
    } else {
        WORLD_UP
    };
    let right = forward.cross(reference).normalize();
    let up = right.cross(forward);
    (forward, up)
}
