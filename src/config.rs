// Centralized configuration for lab parameters

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::units;

// ====================
// Beaker
// ====================
/// Beaker capacity in liters.
pub const BEAKER_VOLUME: f64 = 1.0;
pub const BEAKER_WIDTH: f32 = 600.0;
pub const BEAKER_HEIGHT: f32 = 300.0;
/// Bottom-center of the beaker, in view coordinates (y grows downward).
pub const BEAKER_POSITION: [f32; 2] = [350.0, 550.0];

// ====================
// Solution
// ====================
pub const DEFAULT_SOLUTION_VOLUME: f64 = 0.5;
pub const MAX_SOLUTE_AMOUNT: f64 = 5.0; // mol

// ====================
// Solvent / solute sources
// ====================
pub const MAX_INPUT_FLOW_RATE: f64 = 0.25; // L/s
pub const MAX_OUTPUT_FLOW_RATE: f64 = MAX_INPUT_FLOW_RATE; // L/s
pub const MAX_EVAPORATION_RATE: f64 = 0.25; // L/s
pub const DROPPER_FLOW_RATE: f64 = 0.05; // L/s
pub const SHAKER_MAX_DISPENSING_RATE: f64 = 0.2; // mol/s

pub const SHAKER_POSITION: [f32; 2] = [340.0, 170.0];
pub const SHAKER_ORIENTATION: f32 = 0.75 * std::f32::consts::PI;
pub const SHAKER_DRAG_MIN: [f32; 2] = [250.0, 50.0];
pub const SHAKER_DRAG_MAX: [f32; 2] = [575.0, 210.0];

pub const DROPPER_POSITION: [f32; 2] = [410.0, 225.0];
pub const DROPPER_DRAG_MIN: [f32; 2] = [260.0, 225.0];
pub const DROPPER_DRAG_MAX: [f32; 2] = [580.0, 225.0];

// ====================
// Solute particles
// ====================
pub const PARTICLE_INITIAL_SPEED: f32 = 100.0; // view units/s
pub const PARTICLE_GRAVITY: f32 = 150.0; // view units/s^2
pub const PARTICLE_MAX_X_OFFSET: f32 = 20.0;
pub const PARTICLE_MAX_Y_OFFSET: f32 = 5.0;
pub const DEFAULT_PARTICLE_SIZE: f32 = 5.0;
pub const DEFAULT_PARTICLES_PER_MOLE: f64 = 200.0;

// ====================
// Cuvette / light
// ====================
pub const CUVETTE_WIDTH_MIN: f64 = 0.5; // cm
pub const CUVETTE_WIDTH_MAX: f64 = 2.0; // cm
pub const CUVETTE_DEFAULT_WIDTH: f64 = 1.0; // cm
pub const CUVETTE_HEIGHT: f64 = 3.0; // cm
pub const CUVETTE_SNAP_INTERVAL: f64 = 0.1; // cm
pub const CUVETTE_POSITION: [f32; 2] = [3.3, 0.5];
pub const LIGHT_POSITION: [f32; 2] = [1.5, 2.2];

/// A bounded scalar range with a default value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeWithDefault {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl RangeWithDefault {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, what: &str) -> Result<(), ConfigError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.min <= self.max) {
            return Err(ConfigError::invalid(format!(
                "{} range [{}, {}] is empty or not finite",
                what, self.min, self.max
            )));
        }
        if !self.contains(self.default) {
            return Err(ConfigError::invalid(format!(
                "{} default {} outside [{}, {}]",
                what, self.default, self.min, self.max
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeakerConfig {
    pub position: [f32; 2],
    pub width: f32,
    pub height: f32,
    /// Capacity in liters.
    pub volume: f64,
}

impl Default for BeakerConfig {
    fn default() -> Self {
        Self {
            position: BEAKER_POSITION,
            width: BEAKER_WIDTH,
            height: BEAKER_HEIGHT,
            volume: BEAKER_VOLUME,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakerConfig {
    pub position: [f32; 2],
    pub orientation: f32,
    pub drag_min: [f32; 2],
    pub drag_max: [f32; 2],
    /// mol/s while the shaker is moving.
    pub max_dispensing_rate: f64,
}

impl Default for ShakerConfig {
    fn default() -> Self {
        Self {
            position: SHAKER_POSITION,
            orientation: SHAKER_ORIENTATION,
            drag_min: SHAKER_DRAG_MIN,
            drag_max: SHAKER_DRAG_MAX,
            max_dispensing_rate: SHAKER_MAX_DISPENSING_RATE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropperConfig {
    pub position: [f32; 2],
    pub drag_min: [f32; 2],
    pub drag_max: [f32; 2],
    /// L/s of stock solution while dispensing.
    pub flow_rate: f64,
}

impl Default for DropperConfig {
    fn default() -> Self {
        Self {
            position: DROPPER_POSITION,
            drag_min: DROPPER_DRAG_MIN,
            drag_max: DROPPER_DRAG_MAX,
            flow_rate: DROPPER_FLOW_RATE,
        }
    }
}

/// Kinematics of solute particles falling out of the shaker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub initial_speed: f32,
    pub gravity: f32,
    pub max_x_offset: f32,
    pub max_y_offset: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            initial_speed: PARTICLE_INITIAL_SPEED,
            gravity: PARTICLE_GRAVITY,
            max_x_offset: PARTICLE_MAX_X_OFFSET,
            max_y_offset: PARTICLE_MAX_Y_OFFSET,
        }
    }
}

/// Parameters of the "mix a solution" model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub beaker: BeakerConfig,
    /// Default volume in liters; the range is always `[0, beaker.volume]`.
    pub default_volume: f64,
    pub max_solute_amount: f64,
    pub max_input_flow_rate: f64,
    pub max_output_flow_rate: f64,
    pub max_evaporation_rate: f64,
    pub shaker: ShakerConfig,
    pub dropper: DropperConfig,
    pub particles: ParticleConfig,
    /// Fixed seed for reproducible particle placement. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            beaker: BeakerConfig::default(),
            default_volume: DEFAULT_SOLUTION_VOLUME,
            max_solute_amount: MAX_SOLUTE_AMOUNT,
            max_input_flow_rate: MAX_INPUT_FLOW_RATE,
            max_output_flow_rate: MAX_OUTPUT_FLOW_RATE,
            max_evaporation_rate: MAX_EVAPORATION_RATE,
            shaker: ShakerConfig::default(),
            dropper: DropperConfig::default(),
            particles: ParticleConfig::default(),
            rng_seed: None,
        }
    }
}

impl ModelConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        log::info!("[config] loaded model config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ModelConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn volume_range(&self) -> RangeWithDefault {
        RangeWithDefault::new(0.0, self.beaker.volume, self.default_volume)
    }

    pub fn solute_amount_range(&self) -> RangeWithDefault {
        RangeWithDefault::new(0.0, self.max_solute_amount, 0.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.beaker.volume > 0.0) {
            return Err(ConfigError::invalid("beaker volume must be positive"));
        }
        if !(self.beaker.width.is_finite()
            && self.beaker.height.is_finite()
            && self.beaker.width > 0.0
            && self.beaker.height > 0.0)
        {
            return Err(ConfigError::invalid("beaker size must be positive"));
        }
        check_point("beaker position", self.beaker.position)?;
        self.volume_range().check("solution volume")?;
        if !(self.max_solute_amount > 0.0) {
            return Err(ConfigError::invalid("max solute amount must be positive"));
        }
        for (name, rate) in [
            ("max input flow rate", self.max_input_flow_rate),
            ("max output flow rate", self.max_output_flow_rate),
            ("max evaporation rate", self.max_evaporation_rate),
            ("dropper flow rate", self.dropper.flow_rate),
            ("shaker dispensing rate", self.shaker.max_dispensing_rate),
        ] {
            if !(rate.is_finite() && rate >= 0.0) {
                return Err(ConfigError::invalid(format!("{} must be non-negative", name)));
            }
        }
        check_point("shaker position", self.shaker.position)?;
        check_point("dropper position", self.dropper.position)?;
        check_bounds("shaker", self.shaker.drag_min, self.shaker.drag_max)?;
        check_bounds("dropper", self.dropper.drag_min, self.dropper.drag_max)?;
        if !self.shaker.orientation.is_finite() {
            return Err(ConfigError::invalid("shaker orientation must be finite"));
        }
        let p = &self.particles;
        if !(p.initial_speed.is_finite() && p.gravity.is_finite()) {
            return Err(ConfigError::invalid("particle speed and gravity must be finite"));
        }
        for (name, offset) in [("x", p.max_x_offset), ("y", p.max_y_offset)] {
            if !(offset.is_finite() && offset >= 0.0) {
                return Err(ConfigError::invalid(format!(
                    "particle {} spawn offset must be non-negative",
                    name
                )));
            }
        }
        Ok(())
    }
}

fn check_point(what: &str, p: [f32; 2]) -> Result<(), ConfigError> {
    if !(p[0].is_finite() && p[1].is_finite()) {
        return Err(ConfigError::invalid(format!("{} must be finite", what)));
    }
    Ok(())
}

fn check_bounds(what: &str, min: [f32; 2], max: [f32; 2]) -> Result<(), ConfigError> {
    check_point(&format!("{} drag min", what), min)?;
    check_point(&format!("{} drag max", what), max)?;
    if !(min[0] <= max[0] && min[1] <= max[1]) {
        return Err(ConfigError::invalid(format!("{} drag bounds are inverted", what)));
    }
    Ok(())
}

/// Parameters of the "measure absorbance" module.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Cuvette width (path length) in cm.
    pub cuvette_width: RangeWithDefault,
    pub cuvette_height: f64,
    pub cuvette_snap_interval: f64,
    pub cuvette_position: [f32; 2],
    /// Wavelength range of the variable light, in nm. The default is only
    /// used until a solution is selected in preset mode.
    pub wavelength: RangeWithDefault,
    pub light_position: [f32; 2],
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            cuvette_width: RangeWithDefault::new(
                CUVETTE_WIDTH_MIN,
                CUVETTE_WIDTH_MAX,
                CUVETTE_DEFAULT_WIDTH,
            ),
            cuvette_height: CUVETTE_HEIGHT,
            cuvette_snap_interval: CUVETTE_SNAP_INTERVAL,
            cuvette_position: CUVETTE_POSITION,
            wavelength: RangeWithDefault::new(
                units::VISIBLE_WAVELENGTH_MIN,
                units::VISIBLE_WAVELENGTH_MAX,
                units::VISIBLE_WAVELENGTH_MIN,
            ),
            light_position: LIGHT_POSITION,
        }
    }
}

impl LabConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: LabConfig = toml::from_str(&content)?;
        config.validate()?;
        log::info!("[config] loaded lab config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cuvette_width.check("cuvette width")?;
        if !(self.cuvette_width.min > 0.0) {
            return Err(ConfigError::invalid("cuvette width must be positive"));
        }
        if !(self.cuvette_height.is_finite() && self.cuvette_height > 0.0) {
            return Err(ConfigError::invalid("cuvette height must be positive"));
        }
        if !(self.cuvette_snap_interval.is_finite() && self.cuvette_snap_interval > 0.0) {
            return Err(ConfigError::invalid("cuvette snap interval must be positive"));
        }
        check_point("cuvette position", self.cuvette_position)?;
        check_point("light position", self.light_position)?;
        self.wavelength.check("wavelength")?;
        Ok(())
    }
}
