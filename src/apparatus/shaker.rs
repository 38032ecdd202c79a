// apparatus/shaker.rs

use ultraviolet::Vec2;

use super::DragBounds;
use crate::config::ShakerConfig;

/// Solid-solute dispenser. It dispenses while it is being moved: the rate is
/// either 0 or `max_dispensing_rate`, never proportional to speed.
#[derive(Clone, Debug, PartialEq)]
pub struct Shaker {
    position: Vec2,
    /// Position at the end of the previous `step`.
    previous_position: Vec2,
    home: Vec2,
    drag_bounds: DragBounds,
    /// Radians, measured in view coordinates (y down).
    orientation: f32,
    visible: bool,
    empty: bool,
    max_dispensing_rate: f64,
    dispensing_rate: f64,
}

impl Shaker {
    pub fn new(config: &ShakerConfig) -> Self {
        let drag_bounds = DragBounds::from_arrays(config.drag_min, config.drag_max);
        let home = drag_bounds.clamp(Vec2::from(config.position));
        Self {
            position: home,
            previous_position: home,
            home,
            drag_bounds,
            orientation: config.orientation,
            visible: true,
            empty: false,
            max_dispensing_rate: config.max_dispensing_rate,
            dispensing_rate: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Drag the shaker; clamped to its drag bounds.
    pub fn set_position(&mut self, position: Vec2) {
        if position.x.is_nan() || position.y.is_nan() {
            return;
        }
        self.position = self.drag_bounds.clamp(position);
    }

    /// Treat the current position as already seen, so the next `step` does not
    /// read it as motion. Used when state is injected from outside.
    pub fn sync_previous_position(&mut self) {
        self.previous_position = self.position;
    }

    pub fn orientation(&self) -> f32 {
        self.orientation
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.dispensing_rate = 0.0;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn set_empty(&mut self, empty: bool) {
        self.empty = empty;
        if empty {
            self.dispensing_rate = 0.0;
        }
    }

    /// mol/s
    pub fn dispensing_rate(&self) -> f64 {
        self.dispensing_rate
    }

    pub fn max_dispensing_rate(&self) -> f64 {
        self.max_dispensing_rate
    }

    /// Motion gate, run once per tick.
    pub fn step(&mut self) {
        if self.visible && !self.empty {
            self.dispensing_rate = if self.position == self.previous_position {
                0.0
            } else {
                self.max_dispensing_rate
            };
        } else {
            self.dispensing_rate = 0.0;
        }
        self.previous_position = self.position;
    }

    pub fn reset(&mut self) {
        self.position = self.home;
        self.previous_position = self.home;
        self.visible = true;
        self.empty = false;
        self.dispensing_rate = 0.0;
    }
}
