// optics/model.rs
// BeersLawModel: solution, cuvette, light and detector of the absorbance lab

use crate::apparatus::{Cuvette, Light, WavelengthMode};
use crate::config::LabConfig;
use crate::error::ConfigError;
use crate::probe::{BeamRegion, Containment};

use super::{
    absorbance, beers_law_solutions, transmittance, AbsorbanceDetector, BeersLawSolution,
    DetectorMode,
};

/// The "measure absorbance" model. Nothing here evolves with time, so there
/// is no tick: every observable is computed from the current settings.
pub struct BeersLawModel {
    config: LabConfig,
    solutions: Vec<BeersLawSolution>,
    selected: usize,
    cuvette: Cuvette,
    light: Light,
    detector: AbsorbanceDetector,
}

impl BeersLawModel {
    pub fn new(config: LabConfig, solutions: Vec<BeersLawSolution>) -> Result<Self, ConfigError> {
        config.validate()?;
        if solutions.is_empty() {
            return Err(ConfigError::invalid("no solutions to measure"));
        }
        Ok(Self::assemble(config, solutions))
    }

    fn assemble(config: LabConfig, solutions: Vec<BeersLawSolution>) -> Self {
        let mut light = Light::new(&config);
        light.reset(solutions[0].lambda_max());
        Self {
            cuvette: Cuvette::new(&config),
            detector: AbsorbanceDetector::default(),
            selected: 0,
            solutions,
            light,
            config,
        }
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn solutions(&self) -> &[BeersLawSolution] {
        &self.solutions
    }

    pub fn selected_solution(&self) -> usize {
        self.selected
    }

    pub fn solution(&self) -> &BeersLawSolution {
        &self.solutions[self.selected]
    }

    /// Unknown indices are ignored. Each solution keeps its own concentration.
    pub fn select_solution(&mut self, index: usize) {
        if index >= self.solutions.len() {
            log::warn!(
                "[model] no solution #{} among {}",
                index,
                self.solutions.len()
            );
            return;
        }
        if index != self.selected {
            self.selected = index;
            log::info!("[model] selected solution {}", self.solution().name());
        }
        let lambda_max = self.solution().lambda_max();
        self.light.solution_changed(lambda_max);
    }

    /// mol/L, clamped to the solution's range.
    pub fn set_concentration(&mut self, concentration: f64) {
        self.solutions[self.selected].set_concentration(concentration);
    }

    pub fn cuvette(&self) -> &Cuvette {
        &self.cuvette
    }

    pub fn set_cuvette_width(&mut self, width: f64) {
        self.cuvette.set_width(width);
    }

    pub fn begin_cuvette_drag(&mut self) {
        self.cuvette.begin_width_drag();
    }

    pub fn drag_cuvette_width(&mut self, width: f64) {
        self.cuvette.drag_width(width);
    }

    pub fn end_cuvette_drag(&mut self, snap: bool) {
        self.cuvette.end_width_drag(snap);
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn set_light_on(&mut self, on: bool) {
        self.light.set_on(on);
    }

    pub fn set_wavelength_mode(&mut self, mode: WavelengthMode) {
        let lambda_max = self.solution().lambda_max();
        self.light.set_mode(mode, lambda_max);
    }

    pub fn set_wavelength(&mut self, wavelength: f64) {
        self.light.set_wavelength(wavelength);
    }

    pub fn detector(&self) -> &AbsorbanceDetector {
        &self.detector
    }

    pub fn set_detector_mode(&mut self, mode: DetectorMode) {
        self.detector.mode = mode;
    }

    /// ε of the selected solution at the light's wavelength, 1/(cm·M).
    pub fn molar_absorptivity(&self) -> f64 {
        self.solution().molar_absorptivity(self.light.wavelength())
    }

    pub fn absorbance(&self) -> f64 {
        absorbance(
            self.molar_absorptivity(),
            self.cuvette.path_length(),
            self.solution().concentration(),
        )
    }

    pub fn transmittance(&self) -> f64 {
        transmittance(self.absorbance())
    }

    pub fn detector_reading<P>(&self, probe: &P) -> Option<f64>
    where
        P: Containment<BeamRegion> + ?Sized,
    {
        self.detector
            .reading(self.light.is_on(), self.absorbance(), probe)
    }

    pub fn reset(&mut self) {
        log::info!("[model] reset absorbance lab");
        self.solutions.iter_mut().for_each(BeersLawSolution::reset);
        self.selected = 0;
        self.cuvette.reset();
        let lambda_max = self.solution().lambda_max();
        self.light.reset(lambda_max);
        self.detector.reset();
    }
}

impl Default for BeersLawModel {
    fn default() -> Self {
        Self::assemble(LabConfig::default(), beers_law_solutions())
    }
}
