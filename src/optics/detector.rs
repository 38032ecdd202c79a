// optics/detector.rs

use serde::{Deserialize, Serialize};

use super::percent_transmittance;
use crate::probe::{BeamRegion, Containment};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectorMode {
    /// Percent transmittance.
    #[default]
    Transmittance,
    Absorbance,
}

/// Probe that measures the light reaching it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AbsorbanceDetector {
    pub mode: DetectorMode,
}

impl AbsorbanceDetector {
    pub fn new(mode: DetectorMode) -> Self {
        Self { mode }
    }

    /// `None` while the light is off or the probe is out of the beam. Before
    /// the cuvette the beam is unattenuated (0 absorbance, 100 %).
    pub fn reading<P>(&self, light_on: bool, absorbance: f64, probe: &P) -> Option<f64>
    where
        P: Containment<BeamRegion> + ?Sized,
    {
        if !light_on || !probe.contains(BeamRegion::Beam) {
            return None;
        }
        let absorbance = if probe.contains(BeamRegion::PastCuvette) {
            absorbance
        } else {
            0.0
        };
        Some(match self.mode {
            DetectorMode::Absorbance => absorbance,
            DetectorMode::Transmittance => percent_transmittance(absorbance),
        })
    }

    pub fn reset(&mut self) {
        self.mode = DetectorMode::default();
    }
}
