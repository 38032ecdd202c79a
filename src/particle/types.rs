// particle/types.rs
// Particle record, its kinds, and the render snapshot handed to hosts

use palette::Srgb;
use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

/// Kind-specific particle data.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Solid solute in flight from the shaker to the solution.
    Shaker { velocity: Vec2, acceleration: Vec2 },
    /// Undissolved solute resting on the beaker floor.
    Precipitate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    /// Radians.
    pub orientation: f32,
    /// Edge length, view units.
    pub size: f32,
    /// Index of the solute in the model's catalog.
    pub solute: usize,
    pub kind: ParticleKind,
}

impl Particle {
    pub fn shaker(
        position: Vec2,
        orientation: f32,
        size: f32,
        solute: usize,
        velocity: Vec2,
        acceleration: Vec2,
    ) -> Self {
        Self {
            position,
            orientation,
            size,
            solute,
            kind: ParticleKind::Shaker {
                velocity,
                acceleration,
            },
        }
    }

    pub fn precipitate(position: Vec2, orientation: f32, size: f32, solute: usize) -> Self {
        Self {
            position,
            orientation,
            size,
            solute,
            kind: ParticleKind::Precipitate,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        match self.kind {
            ParticleKind::Shaker { velocity, .. } => velocity,
            ParticleKind::Precipitate => Vec2::zero(),
        }
    }

    /// Advance one step of ballistic motion.
    ///
    /// Only the beaker's left wall is a collider: `left_wall` is the smallest
    /// x a particle may occupy; crossing it clamps x and reflects the x
    /// velocity. Precipitate does not move.
    pub fn integrate(&mut self, dt: f32, left_wall: f32) {
        if let ParticleKind::Shaker {
            velocity,
            acceleration,
        } = &mut self.kind
        {
            *velocity += *acceleration * dt;
            let mut position = self.position + *velocity * dt;
            if position.x < left_wall {
                position.x = left_wall;
                velocity.x = -velocity.x;
            }
            self.position = position;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleTag {
    Shaker,
    Precipitate,
}

/// What a renderer needs to draw one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSnapshot {
    pub position: Vec2,
    pub orientation: f32,
    pub size: f32,
    pub color: Srgb<u8>,
    pub tag: ParticleTag,
}

impl ParticleSnapshot {
    pub fn of(particle: &Particle, color: Srgb<u8>) -> Self {
        Self {
            position: particle.position,
            orientation: particle.orientation,
            size: particle.size,
            color,
            tag: match particle.kind {
                ParticleKind::Shaker { .. } => ParticleTag::Shaker,
                ParticleKind::Precipitate => ParticleTag::Precipitate,
            },
        }
    }
}
