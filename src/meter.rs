// meter.rs
// Concentration meter: what the probe reads depending on which fluid it touches

use serde::{Deserialize, Serialize};

use crate::probe::{Containment, FluidRegion};
use crate::simulation::ConcentrationModel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayUnits {
    /// mol/L
    #[default]
    Molar,
    /// Percent by mass.
    Percent,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConcentrationMeter {
    pub units: DisplayUnits,
}

impl ConcentrationMeter {
    pub fn new(units: DisplayUnits) -> Self {
        Self { units }
    }

    /// Current reading for a probe, or `None` when it touches nothing.
    ///
    /// Checked in order: the solution (or the drain stream while it runs),
    /// then the solvent stream while it runs, then the dropper stream while
    /// it flows.
    pub fn reading<P>(&self, model: &ConcentrationModel, probe: &P) -> Option<f64>
    where
        P: Containment<FluidRegion> + ?Sized,
    {
        let solution = model.solution();
        if probe.contains(FluidRegion::Solution)
            || (model.drain_faucet().is_flowing() && probe.contains(FluidRegion::DrainStream))
        {
            return Some(match self.units {
                DisplayUnits::Molar => solution.concentration(),
                DisplayUnits::Percent => solution.percent_concentration(),
            });
        }
        if model.solvent_faucet().is_flowing() && probe.contains(FluidRegion::SolventStream) {
            return Some(0.0);
        }
        if model.dropper().is_flowing() && probe.contains(FluidRegion::DropperStream) {
            let solute = model.solute();
            let stock = solute.stock_concentration;
            return Some(match self.units {
                DisplayUnits::Molar => stock,
                DisplayUnits::Percent => solute.percent_concentration(stock, solution.solvent()),
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::SoluteForm;
    use crate::probe::{Inside, Nowhere};

    fn model() -> ConcentrationModel {
        ConcentrationModel::default()
    }

    #[test]
    fn probe_in_solution_reads_concentration() {
        let mut m = model();
        m.set_solute_amount(1.0);
        let meter = ConcentrationMeter::default();
        let reading = meter.reading(&m, &Inside(FluidRegion::Solution));
        assert_eq!(reading, Some(2.0));

        let percent = ConcentrationMeter::new(DisplayUnits::Percent)
            .reading(&m, &Inside(FluidRegion::Solution))
            .unwrap();
        assert!((percent - m.solution().percent_concentration()).abs() < 1e-12);
        assert!(percent > 0.0 && percent < 100.0);
    }

    #[test]
    fn probe_in_air_reads_nothing() {
        let m = model();
        assert_eq!(ConcentrationMeter::default().reading(&m, &Nowhere), None);
    }

    #[test]
    fn streams_only_read_while_flowing() {
        let mut m = model();
        m.set_solute_amount(1.0);
        let meter = ConcentrationMeter::default();

        assert_eq!(meter.reading(&m, &Inside(FluidRegion::DrainStream)), None);
        m.set_drain_flow_rate(0.1);
        assert_eq!(meter.reading(&m, &Inside(FluidRegion::DrainStream)), Some(2.0));

        assert_eq!(meter.reading(&m, &Inside(FluidRegion::SolventStream)), None);
        m.set_solvent_flow_rate(0.1);
        assert_eq!(meter.reading(&m, &Inside(FluidRegion::SolventStream)), Some(0.0));
    }

    #[test]
    fn dropper_stream_reads_stock_concentration() {
        let mut m = model();
        let meter = ConcentrationMeter::default();
        m.set_solute_form(SoluteForm::Solution);
        assert_eq!(meter.reading(&m, &Inside(FluidRegion::DropperStream)), None);
        m.set_dropper_dispensing(true);
        let stock = m.solute().stock_concentration;
        assert_eq!(meter.reading(&m, &Inside(FluidRegion::DropperStream)), Some(stock));
    }

    #[test]
    fn solution_wins_over_streams() {
        let mut m = model();
        m.set_solute_amount(1.0);
        m.set_solvent_flow_rate(0.1);
        let everywhere = |_: FluidRegion| true;
        assert_eq!(ConcentrationMeter::default().reading(&m, &everywhere), Some(2.0));
    }
}
