pub mod curve;

pub use curve::{load_curve_path, parse_control_points, parse_curve_json};
