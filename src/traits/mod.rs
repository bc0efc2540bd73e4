pub mod camera;
pub mod input;

pub use camera::*;
pub use input::*;
