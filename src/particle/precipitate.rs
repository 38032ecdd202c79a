// particle/precipitate.rs
// Visual stand-ins for undissolved solute; the amount itself lives on the solution

use rand::Rng;
use ultraviolet::Vec2;

use super::Particle;
use crate::apparatus::Beaker;
use crate::chemistry::Solute;

#[derive(Clone, Debug, Default)]
pub struct PrecipitateParticles {
    particles: Vec<Particle>,
}

impl PrecipitateParticles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn restore(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    /// Add or remove particles until there are exactly `target`. New ones land
    /// at random on the floor; removal takes the most recent first.
    pub fn sync<R: Rng>(
        &mut self,
        target: usize,
        solute: &Solute,
        solute_index: usize,
        beaker: &Beaker,
        rng: &mut R,
    ) {
        if self.particles.len() > target {
            self.particles.truncate(target);
            return;
        }
        let size = solute.particle_size;
        let min_x = beaker.left() + size;
        let max_x = (beaker.right() - size).max(min_x);
        let y = beaker.bottom() - size / 2.0;
        while self.particles.len() < target {
            let x = rng.random_range(min_x..=max_x);
            let orientation = rng.random_range(0.0..std::f32::consts::TAU);
            self.particles.push(Particle::precipitate(
                Vec2::new(x, y),
                orientation,
                size,
                solute_index,
            ));
        }
    }
}
