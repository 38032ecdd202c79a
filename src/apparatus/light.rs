// apparatus/light.rs

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

use crate::config::{LabConfig, RangeWithDefault};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavelengthMode {
    /// Wavelength tracks the selected solution's lambda max.
    #[default]
    Preset,
    /// Wavelength is chosen by the user.
    Variable,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vec2,
    on: bool,
    mode: WavelengthMode,
    /// nm
    wavelength: f64,
    range: RangeWithDefault,
}

impl Light {
    pub fn new(config: &LabConfig) -> Self {
        Self {
            position: Vec2::from(config.light_position),
            on: false,
            mode: WavelengthMode::Preset,
            wavelength: config.wavelength.default,
            range: config.wavelength,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    pub fn mode(&self) -> WavelengthMode {
        self.mode
    }

    /// Switch mode. Entering preset mode snaps to `lambda_max`.
    pub fn set_mode(&mut self, mode: WavelengthMode, lambda_max: f64) {
        self.mode = mode;
        if mode == WavelengthMode::Preset {
            self.set_wavelength_unchecked(lambda_max);
        }
    }

    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    pub fn range(&self) -> RangeWithDefault {
        self.range
    }

    /// User wavelength request; only honored in variable mode.
    pub fn set_wavelength(&mut self, wavelength: f64) {
        if self.mode == WavelengthMode::Variable {
            self.set_wavelength_unchecked(wavelength);
        }
    }

    /// Follow a new solution's lambda max when in preset mode.
    pub fn solution_changed(&mut self, lambda_max: f64) {
        if self.mode == WavelengthMode::Preset {
            self.set_wavelength_unchecked(lambda_max);
        }
    }

    fn set_wavelength_unchecked(&mut self, wavelength: f64) {
        if !wavelength.is_nan() {
            self.wavelength = self.range.clamp(wavelength);
        }
    }

    pub fn reset(&mut self, lambda_max: f64) {
        self.on = false;
        self.mode = WavelengthMode::Preset;
        self.set_wavelength_unchecked(lambda_max);
    }
}
