// chemistry/solvent.rs

use palette::Srgb;

use crate::units::WATER_DENSITY;

/// Liquid medium the solute dissolves in. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Solvent {
    pub name: String,
    pub formula: String,
    /// g/L
    pub density: f64,
    pub color: Srgb<u8>,
}

impl Solvent {
    pub fn water() -> Self {
        Self {
            name: "water".to_string(),
            formula: "H2O".to_string(),
            density: WATER_DENSITY,
            color: Srgb::new(224, 255, 255),
        }
    }
}
