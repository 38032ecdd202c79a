// chemistry/solution.rs
// The solution in the beaker: volume and solute amount, everything else derived

use std::sync::Arc;

use palette::{LinSrgb, Mix, Srgb};

use super::{Solute, Solvent};
use crate::config::RangeWithDefault;

/// Aggregate state of the beaker's contents.
///
/// Only `volume` and `solute_amount` are stored. Concentration, precipitate
/// and saturation are recomputed from both on every read, so they can never
/// be observed out of step with each other.
#[derive(Clone, Debug)]
pub struct ConcentrationSolution {
    solvent: Solvent,
    solute: Arc<Solute>,
    volume: f64,
    solute_amount: f64,
    volume_range: RangeWithDefault,
    solute_amount_range: RangeWithDefault,
}

impl ConcentrationSolution {
    pub fn new(
        solvent: Solvent,
        solute: Arc<Solute>,
        volume_range: RangeWithDefault,
        solute_amount_range: RangeWithDefault,
    ) -> Self {
        solute.assert_valid_in(&solvent);
        Self {
            solvent,
            solute,
            volume: volume_range.default,
            solute_amount: solute_amount_range.default,
            volume_range,
            solute_amount_range,
        }
    }

    pub fn solvent(&self) -> &Solvent {
        &self.solvent
    }

    pub fn solute(&self) -> &Arc<Solute> {
        &self.solute
    }

    pub fn set_solute(&mut self, solute: Arc<Solute>) {
        solute.assert_valid_in(&self.solvent);
        self.solute = solute;
    }

    /// Liters.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f64) {
        if volume.is_nan() {
            return;
        }
        self.volume = self.volume_range.clamp(volume);
    }

    pub fn max_volume(&self) -> f64 {
        self.volume_range.max
    }

    /// Moles, dissolved plus precipitated.
    pub fn solute_amount(&self) -> f64 {
        self.solute_amount
    }

    pub fn set_solute_amount(&mut self, amount: f64) {
        if amount.is_nan() {
            return;
        }
        self.solute_amount = self.solute_amount_range.clamp(amount);
    }

    pub fn max_solute_amount(&self) -> f64 {
        self.solute_amount_range.max
    }

    /// mol/L, capped at saturation; 0 for an empty beaker.
    pub fn concentration(&self) -> f64 {
        if self.volume > 0.0 {
            (self.solute_amount / self.volume).min(self.solute.saturated_concentration)
        } else {
            0.0
        }
    }

    pub fn percent_concentration(&self) -> f64 {
        self.solute
            .percent_concentration(self.concentration(), &self.solvent)
    }

    /// Moles of undissolved solute.
    pub fn precipitate_amount(&self) -> f64 {
        (self.solute_amount - self.solute.saturated_concentration * self.volume).max(0.0)
    }

    /// Moles actually in solution.
    pub fn dissolved_amount(&self) -> f64 {
        self.solute_amount - self.precipitate_amount()
    }

    pub fn is_saturated(&self) -> bool {
        self.precipitate_amount() > 0.0
    }

    /// Number of precipitate particles that represent the precipitate amount:
    /// truncated, but never zero while any precipitate exists.
    pub fn number_of_precipitate_particles(&self) -> usize {
        let precipitate = self.precipitate_amount();
        let count = (precipitate * self.solute.particles_per_mole).trunc() as usize;
        if count == 0 && precipitate > 0.0 {
            1
        } else {
            count
        }
    }

    pub fn color(&self) -> Srgb<u8> {
        let concentration = self.concentration();
        if concentration <= 0.0 {
            return self.solvent.color;
        }
        let fraction = (concentration / self.solute.saturated_concentration).clamp(0.0, 1.0);
        mix_colors(
            self.solute.colors.dilute,
            self.solute.colors.saturated,
            fraction as f32,
        )
    }

    /// Pour in pure solvent. Returns the volume actually added.
    pub fn add_solvent(&mut self, volume: f64) -> f64 {
        let before = self.volume;
        self.set_volume(before + volume.max(0.0));
        self.volume - before
    }

    /// Take out pure solvent, leaving the solute behind (evaporation).
    /// Returns the volume actually removed.
    pub fn remove_solvent(&mut self, volume: f64) -> f64 {
        let before = self.volume;
        self.set_volume(before - volume.max(0.0));
        before - self.volume
    }

    /// Drain solution at its current concentration.
    ///
    /// The concentration is read before the volume changes; reading it after
    /// would apply the post-drain ratio to the drained liquid. Returns
    /// `(volume removed, moles removed)`.
    pub fn drain(&mut self, volume: f64) -> (f64, f64) {
        let concentration = self.concentration();
        let removed = self.remove_solvent(volume);
        let before = self.solute_amount;
        self.set_solute_amount(before - concentration * removed);
        (removed, before - self.solute_amount)
    }

    /// Add solution of the given concentration as one unit: volume and solute
    /// amount are both updated before this returns. Returns the volume
    /// actually added.
    pub fn add_solution(&mut self, volume: f64, concentration: f64) -> f64 {
        let added = self.add_solvent(volume);
        if added > 0.0 {
            let amount = self.solute_amount + concentration.max(0.0) * added;
            self.set_solute_amount(amount);
        }
        added
    }

    /// Add solid solute. Returns the moles actually added.
    pub fn add_solute(&mut self, moles: f64) -> f64 {
        let before = self.solute_amount;
        self.set_solute_amount(before + moles.max(0.0));
        self.solute_amount - before
    }

    pub fn reset(&mut self) {
        self.volume = self.volume_range.default;
        self.solute_amount = self.solute_amount_range.default;
    }
}

/// Interpolate two sRGB colors in linear space.
pub fn mix_colors(from: Srgb<u8>, to: Srgb<u8>, t: f32) -> Srgb<u8> {
    let a: LinSrgb<f32> = from.into_format::<f32>().into_linear();
    let b: LinSrgb<f32> = to.into_format::<f32>().into_linear();
    let mixed = a.mix(b, t.clamp(0.0, 1.0));
    Srgb::<f32>::from_linear(mixed).into_format::<u8>()
}
