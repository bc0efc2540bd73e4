use std::collections::HashSet;
use winit::event::{MouseScrollDelta, TouchPhase, WindowEvent};

use crate::traits::{InputEvent, TouchDrag, WheelDelta};

/// Adapter that turns Winit wheel and touch events into navigation input.
///
/// Touch scrolling follows exactly one finger. Once a second finger lands,
/// touch scrolling pauses until every finger has lifted, so pinch and
/// two-finger gestures never jerk the camera.
#[derive(Debug, Clone, Default)]
pub struct WinitScrollAdapter {
    /// Ids of touches currently on the surface
    active_touches: HashSet<u64>,
    /// Tracked touch id and its last vertical position
    anchor: Option<(u64, f32)>,
    /// Set while a multi-touch gesture is in progress
    suspended: bool,
}

impl WinitScrollAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a Winit WindowEvent, if it carries scroll input
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::MouseWheel { delta, .. } => Self::wheel(*delta),
            WindowEvent::Touch(touch) => {
                self.touch(touch.phase, touch.id, touch.location.y as f32)
            }
            _ => None,
        }
    }

    /// Map a wheel delta; horizontal-only scrolls are ignored
    pub fn wheel(delta: MouseScrollDelta) -> Option<InputEvent> {
        let wheel = match delta {
            MouseScrollDelta::LineDelta(_, y) => WheelDelta::Lines(y),
            MouseScrollDelta::PixelDelta(position) => WheelDelta::Pixels(position.y as f32),
        };
        match wheel {
            WheelDelta::Lines(y) | WheelDelta::Pixels(y) if y == 0.0 => None,
            _ => Some(InputEvent::Wheel(wheel)),
        }
    }

    /// Track one touch sample, producing a drag when the tracked finger moves
    pub fn touch(&mut self, phase: TouchPhase, id: u64, y: f32) -> Option<InputEvent> {
        match phase {
            TouchPhase::Started => {
                self.active_touches.insert(id);
                if self.active_touches.len() == 1 && !self.suspended {
                    self.anchor = Some((id, y));
                } else {
                    self.anchor = None;
                    self.suspended = true;
                }
                None
            }
            TouchPhase::Moved => match self.anchor {
                Some((tracked, previous_y)) if tracked == id && !self.suspended => {
                    self.anchor = Some((id, y));
                    Some(InputEvent::Touch(TouchDrag {
                        previous_y,
                        current_y: y,
                    }))
                }
                _ => None,
            },
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active_touches.remove(&id);
                if matches!(self.anchor, Some((tracked, _)) if tracked == id) {
                    self.anchor = None;
                }
                if self.active_touches.is_empty() {
                    self.suspended = false;
                }
                None
            }
        }
    }

    /// Number of fingers currently down
    pub fn active_touches(&self) -> usize {
        self.active_touches.len()
    }
}
