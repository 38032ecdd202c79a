// particle/solute_particles.rs
// Solute particles falling from the shaker and dissolving on contact

use rand::Rng;
use rayon::prelude::*;
use ultraviolet::Vec2;

use super::Particle;
use crate::apparatus::{Beaker, Shaker};
use crate::chemistry::Solute;
use crate::config::ParticleConfig;
use crate::profile_scope;

/// Number of particles to create for one tick of dispensing.
///
/// `round(max(1, rate · particles_per_mole · dt))`: at least one particle per
/// dispensing tick however short the tick is, so very high tick rates
/// over-dispense relative to the nominal rate. `ConcentrationModel` further
/// caps the count at the room left under the maximum solute amount, less the
/// particles already in flight, so one long tick cannot queue more solute than
/// the beaker can take.
pub fn new_particle_count(dispensing_rate: f64, particles_per_mole: f64, dt: f64) -> usize {
    (dispensing_rate * particles_per_mole * dt).max(1.0).round() as usize
}

/// Live solute particles in flight. Owned by the model; dissolving a particle
/// is reported back as a count so the model applies it to the solution.
#[derive(Clone, Debug, Default)]
pub struct SoluteParticles {
    particles: Vec<Particle>,
    config: ParticleConfig,
}

impl SoluteParticles {
    pub fn new(config: ParticleConfig) -> Self {
        Self {
            particles: Vec::new(),
            config,
        }
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

    /// Replace the live set, e.g. from a saved state.
    pub fn restore(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    /// Move every particle, then remove those that reached the solution
    /// surface (or the floor of an empty beaker). Returns how many were
    /// removed; each one is `1 / particles_per_mole` moles of new solute.
    pub fn propagate(&mut self, dt: f64, beaker: &Beaker, volume: f64) -> usize {
        profile_scope!("solute_particles_propagate");
        let dt = dt as f32;
        let left = beaker.left();
        self.particles
            .par_iter_mut()
            .for_each(|p| p.integrate(dt, left + p.size));

        let before = self.particles.len();
        self.particles
            .retain(|p| p.position.y <= beaker.solution_surface_y(volume, p.size));
        before - self.particles.len()
    }

    /// Emit new particles at the shaker tip while the shaker is dispensing.
    /// `limit` caps the count (the room left for solute in the beaker).
    /// Returns how many were created.
    pub fn spawn<R: Rng>(
        &mut self,
        dt: f64,
        shaker: &Shaker,
        solute: &Solute,
        solute_index: usize,
        limit: usize,
        rng: &mut R,
    ) -> usize {
        profile_scope!("solute_particles_spawn");
        let rate = shaker.dispensing_rate();
        if !(rate > 0.0) {
            return 0;
        }
        let count = new_particle_count(rate, solute.particles_per_mole, dt).min(limit);

        let direction = Vec2::new(shaker.orientation().cos(), shaker.orientation().sin());
        let velocity = direction * self.config.initial_speed;
        let acceleration = Vec2::new(0.0, self.config.gravity);
        let max_x = self.config.max_x_offset;
        let max_y = self.config.max_y_offset;
        self.particles.reserve(count);
        for _ in 0..count {
            let offset = Vec2::new(rng.random_range(-max_x..=max_x), rng.random_range(0.0..=max_y));
            let orientation = rng.random_range(0.0..std::f32::consts::TAU);
            self.particles.push(Particle::shaker(
                shaker.position() + offset,
                orientation,
                solute.particle_size,
                solute_index,
                velocity,
                acceleration,
            ));
        }
        count
    }
}
