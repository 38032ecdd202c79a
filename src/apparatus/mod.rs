// apparatus/mod.rs
// Lab equipment: containers, solvent/solute sources, and the optical bench

mod beaker;
mod cuvette;
mod dropper;
mod evaporator;
mod faucet;
mod light;
mod shaker;

pub use beaker::*;
pub use cuvette::*;
pub use dropper::*;
pub use evaporator::*;
pub use faucet::*;
pub use light::*;
pub use shaker::*;

use ultraviolet::Vec2;

/// Axis-aligned drag bounds for movable equipment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl DragBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_arrays(min: [f32; 2], max: [f32; 2]) -> Self {
        Self::new(Vec2::from(min), Vec2::from(max))
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }
}
