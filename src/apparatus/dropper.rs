// apparatus/dropper.rs

use ultraviolet::Vec2;

use super::DragBounds;
use crate::config::DropperConfig;

/// Stock-solution dispenser.
///
/// Flows at a fixed rate only while the host holds it on (`dispensing`), the
/// host has it enabled, it is visible, not empty, and the beaker has room.
/// Closing any gate also releases the dispensing button.
#[derive(Clone, Debug, PartialEq)]
pub struct Dropper {
    position: Vec2,
    home: Vec2,
    drag_bounds: DragBounds,
    visible: bool,
    dispensing: bool,
    enabled: bool,
    empty: bool,
    beaker_has_room: bool,
    flow_rate_when_on: f64,
}

impl Dropper {
    pub fn new(config: &DropperConfig) -> Self {
        let drag_bounds = DragBounds::from_arrays(config.drag_min, config.drag_max);
        let home = drag_bounds.clamp(Vec2::from(config.position));
        Self {
            position: home,
            home,
            drag_bounds,
            visible: false,
            dispensing: false,
            enabled: true,
            empty: false,
            beaker_has_room: true,
            flow_rate_when_on: config.flow_rate,
        }
    }

    /// L/s of stock solution currently flowing.
    pub fn flow_rate(&self) -> f64 {
        if self.dispensing && self.can_dispense() {
            self.flow_rate_when_on
        } else {
            0.0
        }
    }

    pub fn is_flowing(&self) -> bool {
        self.flow_rate() > 0.0
    }

    fn can_dispense(&self) -> bool {
        self.visible && self.enabled && !self.empty && self.beaker_has_room
    }

    fn release_if_blocked(&mut self) {
        if !self.can_dispense() {
            self.dispensing = false;
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        if position.x.is_nan() || position.y.is_nan() {
            return;
        }
        self.position = self.drag_bounds.clamp(position);
    }

    pub fn is_dispensing(&self) -> bool {
        self.dispensing
    }

    /// Press or release the dropper. Pressing is ignored while blocked.
    pub fn set_dispensing(&mut self, dispensing: bool) {
        self.dispensing = dispensing && self.can_dispense();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.release_if_blocked();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.release_if_blocked();
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn set_empty(&mut self, empty: bool) {
        self.empty = empty;
        self.release_if_blocked();
    }

    pub fn set_beaker_has_room(&mut self, has_room: bool) {
        self.beaker_has_room = has_room;
        self.release_if_blocked();
    }

    pub fn reset(&mut self) {
        self.position = self.home;
        self.visible = false;
        self.dispensing = false;
        self.enabled = true;
        self.empty = false;
        self.beaker_has_room = true;
    }
}
