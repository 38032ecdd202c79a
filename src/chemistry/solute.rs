// chemistry/solute.rs
// Immutable solute descriptor

use palette::Srgb;
use serde::{Deserialize, Serialize};

use super::{MolarAbsorptivityData, Solvent};
use crate::config::{DEFAULT_PARTICLES_PER_MOLE, DEFAULT_PARTICLE_SIZE};
use crate::units;

/// How the solute is delivered to the beaker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoluteForm {
    /// Solid particles from the shaker.
    #[default]
    Solid,
    /// Stock solution from the dropper.
    Solution,
}

/// Colors a solution of this solute takes between "barely any" and saturated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoluteColors {
    pub dilute: Srgb<u8>,
    pub saturated: Srgb<u8>,
}

impl SoluteColors {
    pub const fn new(dilute: Srgb<u8>, saturated: Srgb<u8>) -> Self {
        Self { dilute, saturated }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Solute {
    pub name: String,
    pub formula: String,
    /// g/mol
    pub molar_mass: f64,
    /// mol/L, concentration of the dropper's stock solution
    pub stock_concentration: f64,
    /// mol/L
    pub saturated_concentration: f64,
    pub colors: SoluteColors,
    /// Edge length of a solid particle, in view units.
    pub particle_size: f32,
    /// Number of solid particles that make up one mole.
    pub particles_per_mole: f64,
    pub absorptivity: MolarAbsorptivityData,
}

impl Solute {
    /// Panics if the chemistry constants are physically meaningless.
    pub fn new(
        name: &str,
        formula: &str,
        molar_mass: f64,
        stock_concentration: f64,
        saturated_concentration: f64,
        colors: SoluteColors,
        absorptivity: MolarAbsorptivityData,
    ) -> Self {
        assert!(molar_mass > 0.0, "{}: molar mass must be positive", name);
        assert!(
            stock_concentration >= 0.0,
            "{}: stock concentration must be non-negative",
            name
        );
        assert!(
            saturated_concentration > 0.0,
            "{}: saturated concentration must be positive",
            name
        );
        assert!(
            stock_concentration <= saturated_concentration,
            "{}: stock concentration {} exceeds saturation {}",
            name,
            stock_concentration,
            saturated_concentration
        );
        Self {
            name: name.to_string(),
            formula: formula.to_string(),
            molar_mass,
            stock_concentration,
            saturated_concentration,
            colors,
            particle_size: DEFAULT_PARTICLE_SIZE,
            particles_per_mole: DEFAULT_PARTICLES_PER_MOLE,
            absorptivity,
        }
    }

    pub fn with_particle_size(mut self, size: f32) -> Self {
        assert!(size > 0.0, "{}: particle size must be positive", self.name);
        self.particle_size = size;
        self
    }

    pub fn with_particles_per_mole(mut self, particles_per_mole: f64) -> Self {
        assert!(
            particles_per_mole > 0.0,
            "{}: particles per mole must be positive",
            self.name
        );
        self.particles_per_mole = particles_per_mole;
        self
    }

    /// Moles of solute carried by one solid particle.
    pub fn moles_per_particle(&self) -> f64 {
        1.0 / self.particles_per_mole
    }

    pub fn molar_absorptivity(&self, wavelength: f64) -> f64 {
        self.absorptivity.molar_absorptivity(wavelength)
    }

    pub fn lambda_max(&self) -> f64 {
        self.absorptivity.lambda_max()
    }

    pub fn percent_concentration(&self, concentration: f64, solvent: &Solvent) -> f64 {
        units::percent_concentration(self.molar_mass, concentration, solvent.density)
    }

    /// Startup check that percent concentration stays in `[0, 100]` over the
    /// concentrations this solute can reach in `solvent`.
    ///
    /// A failure means the science-data table is wrong; the lab must not start.
    pub fn assert_valid_in(&self, solvent: &Solvent) {
        for c in [0.0, self.stock_concentration, self.saturated_concentration] {
            let p = self.percent_concentration(c, solvent);
            assert!(
                (0.0..=100.0).contains(&p),
                "{}: percent concentration {} at {} mol/L is outside [0, 100]",
                self.name,
                p,
                c
            );
        }
    }
}
