mod orientation;
mod spline;

pub use orientation::{look_basis, CameraPose, SECONDARY_UP, WORLD_UP};
pub use spline::{CurveOptions, CurvePath, CurveType};
