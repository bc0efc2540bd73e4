use serde::{Deserialize, Serialize};

/// Conversion factors between device units and normalized pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputUnits {
    /// Pixels of travel represented by one wheel line (one notch on most mice)
    pub line_height_px: f32,
}

impl Default for InputUnits {
    fn default() -> Self {
        Self {
            line_height_px: 100.0,
        }
    }
}

/// Capability shared by every input device: produce one signed scroll distance.
///
/// The result is in normalized pixels, positive meaning forward along the path.
pub trait ScrollSource {
    fn scroll_delta(&self, units: &InputUnits) -> f32;
}

/// Mouse wheel or trackpad scroll, with winit's sign convention
/// (positive y scrolls content up, i.e. a backward gesture)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelDelta {
    /// Discrete notches
    Lines(f32),
    /// Continuous pixel scroll from trackpads and high-resolution wheels
    Pixels(f32),
}

impl ScrollSource for WheelDelta {
    fn scroll_delta(&self, units: &InputUnits) -> f32 {
        match *self {
            WheelDelta::Lines(lines) => -lines * units.line_height_px,
            WheelDelta::Pixels(px) => -px,
        }
    }
}

/// Single-finger vertical drag between two consecutive touch samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchDrag {
    pub previous_y: f32,
    pub current_y: f32,
}

impl ScrollSource for TouchDrag {
    fn scroll_delta(&self, _units: &InputUnits) -> f32 {
        // Screen y grows downward, so a finger moving up is forward
        self.previous_y - self.current_y
    }
}

/// Device kinds the navigation engine understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Wheel(WheelDelta),
    Touch(TouchDrag),
}

impl ScrollSource for InputEvent {
    fn scroll_delta(&self, units: &InputUnits) -> f32 {
        match self {
            InputEvent::Wheel(wheel) => wheel.scroll_delta(units),
            InputEvent::Touch(drag) => drag.scroll_delta(units),
        }
    }
}

impl From<WheelDelta> for InputEvent {
    fn from(wheel: WheelDelta) -> Self {
        InputEvent::Wheel(wheel)
    }
}

impl From<TouchDrag> for InputEvent {
    fn from(drag: TouchDrag) -> Self {
        InputEvent::Touch(drag)
    }
}

/// Collapse any device event into one signed scalar delta.
/// Non-finite payloads yield zero.
pub fn normalize_input(event: &impl ScrollSource, units: &InputUnits) -> f32 {
    let delta = event.scroll_delta(units);
    if delta.is_finite() {
        delta
    } else {
        0.0
    }
}
