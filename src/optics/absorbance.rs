// optics/absorbance.rs

/// Beer-Lambert absorbance `A = ε·b·C`.
///
/// `molar_absorptivity` in 1/(cm·M), `path_length` in cm, `concentration` in M.
pub fn absorbance(molar_absorptivity: f64, path_length: f64, concentration: f64) -> f64 {
    molar_absorptivity * path_length * concentration
}

/// Fraction of light transmitted, `T = 10^-A`. In `(0, 1]` for finite `A >= 0`.
pub fn transmittance(absorbance: f64) -> f64 {
    10f64.powf(-absorbance)
}

/// Transmittance as the percentage a detector displays.
pub fn percent_transmittance(absorbance: f64) -> f64 {
    100.0 * transmittance(absorbance)
}
