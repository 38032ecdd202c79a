// apparatus/cuvette.rs

use ultraviolet::Vec2;

use crate::config::{LabConfig, RangeWithDefault};

/// Sample holder on the optical bench. Its width is the light's path length.
#[derive(Clone, Debug, PartialEq)]
pub struct Cuvette {
    pub position: Vec2,
    width: f64,
    width_range: RangeWithDefault,
    /// cm
    pub height: f64,
    snap_interval: f64,
    dragging: bool,
}

impl Cuvette {
    pub fn new(config: &LabConfig) -> Self {
        Self {
            position: Vec2::from(config.cuvette_position),
            width: config.cuvette_width.default,
            width_range: config.cuvette_width,
            height: config.cuvette_height,
            snap_interval: config.cuvette_snap_interval,
            dragging: false,
        }
    }

    /// cm
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn path_length(&self) -> f64 {
        self.width
    }

    pub fn width_range(&self) -> RangeWithDefault {
        self.width_range
    }

    pub fn set_width(&mut self, width: f64) {
        if width.is_nan() {
            return;
        }
        self.width = self.width_range.clamp(width);
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_width_drag(&mut self) {
        self.dragging = true;
    }

    /// Continuous adjustment; never snaps.
    pub fn drag_width(&mut self, width: f64) {
        self.set_width(width);
    }

    /// Finish an adjustment, optionally snapping to the nearest grid value.
    pub fn end_width_drag(&mut self, snap: bool) {
        self.dragging = false;
        if snap {
            let snapped = (self.width / self.snap_interval).round() * self.snap_interval;
            self.set_width(snapped);
        }
    }

    pub fn reset(&mut self) {
        self.width = self.width_range.default;
        self.dragging = false;
    }
}
