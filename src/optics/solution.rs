// optics/solution.rs
// Solutions offered by the absorbance lab and their concentration ranges

use std::sync::Arc;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::chemistry::{catalog, mix_colors, Solute, Solvent};
use crate::config::RangeWithDefault;
use crate::units;

/// Units a solution's concentration is shown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcentrationUnits {
    Millimolar,
    Micromolar,
}

impl ConcentrationUnits {
    pub fn from_molar(self, concentration: f64) -> f64 {
        match self {
            ConcentrationUnits::Millimolar => units::molar_to_millimolar(concentration),
            ConcentrationUnits::Micromolar => units::molar_to_micromolar(concentration),
        }
    }

    pub fn to_molar(self, concentration: f64) -> f64 {
        match self {
            ConcentrationUnits::Millimolar => units::millimolar_to_molar(concentration),
            ConcentrationUnits::Micromolar => units::micromolar_to_molar(concentration),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ConcentrationUnits::Millimolar => "mM",
            ConcentrationUnits::Micromolar => "µM",
        }
    }
}

/// A solution in the cuvette: one solute at a user-set concentration.
#[derive(Clone, Debug)]
pub struct BeersLawSolution {
    solute: Arc<Solute>,
    solvent: Solvent,
    /// mol/L
    range: RangeWithDefault,
    units: ConcentrationUnits,
    concentration: f64,
}

impl BeersLawSolution {
    /// `range` is in mol/L. Panics if the solute is invalid in the solvent or
    /// the range reaches past the solute's saturation.
    pub fn new(
        solute: Arc<Solute>,
        solvent: Solvent,
        range: RangeWithDefault,
        units: ConcentrationUnits,
    ) -> Self {
        solute.assert_valid_in(&solvent);
        assert!(
            range.min >= 0.0 && range.min <= range.default && range.default <= range.max,
            "{}: concentration range [{}, {}] with default {} is malformed",
            solute.name,
            range.min,
            range.max,
            range.default
        );
        assert!(
            range.max <= solute.saturated_concentration,
            "{}: concentration range exceeds saturation",
            solute.name
        );
        Self {
            concentration: range.default,
            solute,
            solvent,
            range,
            units,
        }
    }

    pub fn solute(&self) -> &Arc<Solute> {
        &self.solute
    }

    pub fn name(&self) -> &str {
        &self.solute.name
    }

    pub fn range(&self) -> RangeWithDefault {
        self.range
    }

    pub fn units(&self) -> ConcentrationUnits {
        self.units
    }

    /// mol/L
    pub fn concentration(&self) -> f64 {
        self.concentration
    }

    pub fn set_concentration(&mut self, concentration: f64) {
        if !concentration.is_nan() {
            self.concentration = self.range.clamp(concentration);
        }
    }

    /// Concentration in this solution's display units.
    pub fn display_concentration(&self) -> f64 {
        self.units.from_molar(self.concentration)
    }

    pub fn set_display_concentration(&mut self, value: f64) {
        self.set_concentration(self.units.to_molar(value));
    }

    pub fn molar_absorptivity(&self, wavelength: f64) -> f64 {
        self.solute.molar_absorptivity(wavelength)
    }

    pub fn lambda_max(&self) -> f64 {
        self.solute.lambda_max()
    }

    /// Solvent color at zero, the solute's saturated color at the top of the range.
    pub fn color(&self) -> Srgb<u8> {
        if self.concentration <= 0.0 {
            return self.solvent.color;
        }
        let span = self.range.max - self.range.min;
        let fraction = if span > 0.0 {
            (self.concentration - self.range.min) / span
        } else {
            1.0
        };
        mix_colors(self.solvent.color, self.solute.colors.saturated, fraction as f32)
    }

    pub fn reset(&mut self) {
        self.concentration = self.range.default;
    }
}

fn millimolar(solute: Solute, max: f64, default: f64) -> BeersLawSolution {
    BeersLawSolution::new(
        Arc::new(solute),
        Solvent::water(),
        RangeWithDefault::new(
            0.0,
            units::millimolar_to_molar(max),
            units::millimolar_to_molar(default),
        ),
        ConcentrationUnits::Millimolar,
    )
}

fn micromolar(solute: Solute, max: f64, default: f64) -> BeersLawSolution {
    BeersLawSolution::new(
        Arc::new(solute),
        Solvent::water(),
        RangeWithDefault::new(
            0.0,
            units::micromolar_to_molar(max),
            units::micromolar_to_molar(default),
        ),
        ConcentrationUnits::Micromolar,
    )
}

/// Solutions offered by the absorbance lab, in display order.
pub fn beers_law_solutions() -> Vec<BeersLawSolution> {
    vec![
        millimolar(catalog::drink_mix(), 400.0, 100.0),
        millimolar(catalog::cobalt_ii_nitrate(), 400.0, 100.0),
        millimolar(catalog::cobalt_chloride(), 250.0, 100.0),
        micromolar(catalog::potassium_dichromate(), 500.0, 100.0),
        micromolar(catalog::potassium_chromate(), 400.0, 100.0),
        millimolar(catalog::nickel_ii_chloride(), 350.0, 100.0),
        millimolar(catalog::copper_sulfate(), 200.0, 100.0),
        micromolar(catalog::potassium_permanganate(), 800.0, 100.0),
    ]
}
