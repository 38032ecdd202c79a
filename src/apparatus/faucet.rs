// apparatus/faucet.rs

/// A bounded flow source: solvent in at the top, or solution out through the
/// drain. Disabling it shuts it off.
#[derive(Clone, Debug, PartialEq)]
pub struct Faucet {
    max_flow_rate: f64,
    flow_rate: f64,
    enabled: bool,
}

impl Faucet {
    pub fn new(max_flow_rate: f64) -> Self {
        Self {
            max_flow_rate,
            flow_rate: 0.0,
            enabled: true,
        }
    }

    /// L/s
    pub fn flow_rate(&self) -> f64 {
        self.flow_rate
    }

    pub fn max_flow_rate(&self) -> f64 {
        self.max_flow_rate
    }

    /// Request a flow rate. Clamped to `[0, max]`; ignored while disabled.
    pub fn set_flow_rate(&mut self, rate: f64) {
        if !self.enabled || rate.is_nan() {
            self.flow_rate = 0.0;
            return;
        }
        self.flow_rate = rate.clamp(0.0, self.max_flow_rate);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.flow_rate = 0.0;
        }
    }

    pub fn is_flowing(&self) -> bool {
        self.flow_rate > 0.0
    }

    pub fn reset(&mut self) {
        self.flow_rate = 0.0;
        self.enabled = true;
    }
}
