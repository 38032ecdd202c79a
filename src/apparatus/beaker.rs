// apparatus/beaker.rs

use ultraviolet::Vec2;

use crate::config::BeakerConfig;

/// Fixed beaker geometry. `position` is the center of the floor; view
/// coordinates grow downward, so the rim is at `position.y - height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Beaker {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    /// Capacity in liters.
    pub volume: f64,
}

impl Beaker {
    pub fn new(position: Vec2, width: f32, height: f32, volume: f64) -> Self {
        Self {
            position,
            width,
            height,
            volume,
        }
    }

    pub fn from_config(config: &BeakerConfig) -> Self {
        Self::new(
            Vec2::from(config.position),
            config.width,
            config.height,
            config.volume,
        )
    }

    pub fn left(&self) -> f32 {
        self.position.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.position.y
    }

    pub fn top(&self) -> f32 {
        self.position.y - self.height
    }

    /// Height of the liquid column holding `volume` liters.
    pub fn fill_height(&self, volume: f64) -> f32 {
        ((volume / self.volume).clamp(0.0, 1.0) as f32) * self.height
    }

    /// y at which a falling particle of `particle_size` meets the liquid, or
    /// the floor when the beaker is empty.
    pub fn solution_surface_y(&self, volume: f64, particle_size: f32) -> f32 {
        if volume > 0.0 {
            self.bottom() - self.fill_height(volume) - particle_size
        } else {
            self.bottom()
        }
    }
}
