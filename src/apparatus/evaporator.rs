// apparatus/evaporator.rs

/// Removes solvent (never solute) at a bounded rate.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaporator {
    max_evaporation_rate: f64,
    evaporation_rate: f64,
    enabled: bool,
}

impl Evaporator {
    pub fn new(max_evaporation_rate: f64) -> Self {
        Self {
            max_evaporation_rate,
            evaporation_rate: 0.0,
            enabled: true,
        }
    }

    /// L/s
    pub fn evaporation_rate(&self) -> f64 {
        self.evaporation_rate
    }

    pub fn max_evaporation_rate(&self) -> f64 {
        self.max_evaporation_rate
    }

    pub fn set_evaporation_rate(&mut self, rate: f64) {
        if !self.enabled || rate.is_nan() {
            self.evaporation_rate = 0.0;
            return;
        }
        self.evaporation_rate = rate.clamp(0.0, self.max_evaporation_rate);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.evaporation_rate = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.evaporation_rate = 0.0;
        self.enabled = true;
    }
}
