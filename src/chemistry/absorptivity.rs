// chemistry/absorptivity.rs
// Wavelength -> molar absorptivity table for a solute

use crate::units::{VISIBLE_WAVELENGTH_MAX, VISIBLE_WAVELENGTH_MIN};

/// Sampling step of tables built from absorption bands, in nm.
pub const ABSORPTIVITY_STEP_NM: f64 = 1.0;

/// One Gaussian absorption band: `peak · exp(-((λ - center) / width)² / 2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AbsorptionBand {
    /// nm
    pub center: f64,
    /// 1/(cm·M)
    pub peak: f64,
    /// nm (standard deviation)
    pub width: f64,
}

impl AbsorptionBand {
    pub const fn new(center: f64, peak: f64, width: f64) -> Self {
        Self { center, peak, width }
    }

    fn at(&self, wavelength: f64) -> f64 {
        let z = (wavelength - self.center) / self.width;
        self.peak * (-0.5 * z * z).exp()
    }
}

/// Molar absorptivity sampled on a uniform wavelength grid.
///
/// Lookups interpolate linearly between samples and clamp to the end samples
/// outside the grid. Every sample is non-negative.
#[derive(Clone, Debug, PartialEq)]
pub struct MolarAbsorptivityData {
    min_wavelength: f64,
    step: f64,
    samples: Vec<f64>,
    lambda_max: f64,
}

impl MolarAbsorptivityData {
    /// Build from raw samples starting at `min_wavelength`, spaced `step` nm.
    ///
    /// Panics on an empty table, a non-positive step or a negative sample:
    /// those mean the science data is wrong.
    pub fn from_samples(min_wavelength: f64, step: f64, samples: Vec<f64>) -> Self {
        assert!(!samples.is_empty(), "molar absorptivity table is empty");
        assert!(step > 0.0, "molar absorptivity step must be positive, got {}", step);
        assert!(
            samples.iter().all(|s| s.is_finite() && *s >= 0.0),
            "molar absorptivity samples must be finite and non-negative"
        );
        let mut peak_index = 0;
        for (i, s) in samples.iter().enumerate() {
            if *s > samples[peak_index] {
                peak_index = i;
            }
        }
        let lambda_max = min_wavelength + peak_index as f64 * step;
        Self {
            min_wavelength,
            step,
            samples,
            lambda_max,
        }
    }

    /// Sample a sum of absorption bands over the visible spectrum.
    pub fn from_bands(bands: &[AbsorptionBand]) -> Self {
        let count = ((VISIBLE_WAVELENGTH_MAX - VISIBLE_WAVELENGTH_MIN) / ABSORPTIVITY_STEP_NM)
            .round() as usize
            + 1;
        let samples = (0..count)
            .map(|i| {
                let wavelength = VISIBLE_WAVELENGTH_MIN + i as f64 * ABSORPTIVITY_STEP_NM;
                bands.iter().map(|b| b.at(wavelength)).sum()
            })
            .collect();
        Self::from_samples(VISIBLE_WAVELENGTH_MIN, ABSORPTIVITY_STEP_NM, samples)
    }

    /// Molar absorptivity at `wavelength`, in 1/(cm·M).
    pub fn molar_absorptivity(&self, wavelength: f64) -> f64 {
        let last = self.samples.len() - 1;
        let t = (wavelength - self.min_wavelength) / self.step;
        if !(t > 0.0) {
            return self.samples[0];
        }
        if t >= last as f64 {
            return self.samples[last];
        }
        let i = t.floor() as usize;
        let frac = t - i as f64;
        self.samples[i] + (self.samples[i + 1] - self.samples[i]) * frac
    }

    /// Wavelength of strongest absorption, in nm.
    pub fn lambda_max(&self) -> f64 {
        self.lambda_max
    }

    pub fn max_wavelength(&self) -> f64 {
        self.min_wavelength + (self.samples.len() - 1) as f64 * self.step
    }

    pub fn min_wavelength(&self) -> f64 {
        self.min_wavelength
    }
}
