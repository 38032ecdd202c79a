//! Physical unit definitions and conversions.
//!
//! Base units:
//! - Volume: liter (L)
//! - Amount: mole (mol)
//! - Concentration: molar (mol/L)
//! - Path length: centimeter (cm)
//! - Wavelength: nanometer (nm)
//! - Time: second (s)

/// Millimolar per molar.
pub const MILLIMOLAR_PER_MOLAR: f64 = 1.0e3;
/// Micromolar per molar.
pub const MICROMOLAR_PER_MOLAR: f64 = 1.0e6;

/// Shortest wavelength of the visible spectrum handled by the optics, in nm.
pub const VISIBLE_WAVELENGTH_MIN: f64 = 380.0;
/// Longest wavelength of the visible spectrum handled by the optics, in nm.
pub const VISIBLE_WAVELENGTH_MAX: f64 = 780.0;

/// Density of water in g/L.
pub const WATER_DENSITY: f64 = 1000.0;

pub fn molar_to_millimolar(c: f64) -> f64 {
    c * MILLIMOLAR_PER_MOLAR
}

pub fn millimolar_to_molar(c: f64) -> f64 {
    c / MILLIMOLAR_PER_MOLAR
}

pub fn molar_to_micromolar(c: f64) -> f64 {
    c * MICROMOLAR_PER_MOLAR
}

pub fn micromolar_to_molar(c: f64) -> f64 {
    c / MICROMOLAR_PER_MOLAR
}

/// Mass percent of solute in a solution of molarity `concentration`.
///
/// `100·(M·c) / (ρ + M·c)` with `M` in g/mol, `c` in mol/L and `ρ` the solvent
/// density in g/L. The solvent mass per liter is taken as `ρ`, which is the
/// convention the lab uses for dilute aqueous solutions.
pub fn percent_concentration(molar_mass: f64, concentration: f64, solvent_density: f64) -> f64 {
    let solute_grams = molar_mass * concentration;
    let total = solvent_density + solute_grams;
    if total > 0.0 {
        100.0 * solute_grams / total
    } else {
        0.0
    }
}
