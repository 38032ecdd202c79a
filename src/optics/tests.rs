// optics/tests.rs

use std::sync::Arc;

use super::*;
use crate::apparatus::WavelengthMode;
use crate::chemistry::{MolarAbsorptivityData, Solute, SoluteColors, Solvent};
use crate::config::{LabConfig, RangeWithDefault};
use crate::probe::{BeamRegion, Inside, Nowhere};

/// A solute that absorbs 200 1/(cm·M) at every visible wavelength.
fn flat_solution() -> BeersLawSolution {
    let solute = Solute::new(
        "flat",
        "Fl",
        100.0,
        1.0,
        2.0,
        SoluteColors::new(palette::Srgb::new(255, 200, 200), palette::Srgb::new(200, 0, 0)),
        MolarAbsorptivityData::from_samples(380.0, 1.0, vec![200.0; 401]),
    );
    BeersLawSolution::new(
        Arc::new(solute),
        Solvent::water(),
        RangeWithDefault::new(0.0, 0.1, 0.01),
        ConcentrationUnits::Millimolar,
    )
}

fn flat_model() -> BeersLawModel {
    BeersLawModel::new(LabConfig::default(), vec![flat_solution()]).unwrap()
}

#[cfg(test)]
mod beer_lambert {
    use super::*;

    #[test]
    fn one_centimeter_of_centimolar_solution() {
        let a = absorbance(200.0, 1.0, 0.01);
        assert!((a - 2.0).abs() < 1e-12);
        assert!((transmittance(a) - 0.01).abs() < 1e-12);
    }

    #[test]
    fn zero_absorbance_transmits_everything() {
        assert_eq!(transmittance(0.0), 1.0);
        assert_eq!(percent_transmittance(0.0), 100.0);
    }

    #[test]
    fn transmittance_stays_in_unit_interval() {
        for a in [0.0, 0.1, 1.0, 5.0, 50.0] {
            let t = transmittance(a);
            assert!(t > 0.0 && t <= 1.0, "A = {} gave T = {}", a, t);
            assert_eq!(t, 10f64.powf(-a));
        }
    }

    #[test]
    fn model_combines_solution_cuvette_and_light() {
        let model = flat_model();
        assert!((model.absorbance() - 2.0).abs() < 1e-12);
        assert!((model.transmittance() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn doubling_path_length_doubles_absorbance() {
        let mut model = flat_model();
        let a = model.absorbance();
        model.set_cuvette_width(2.0);
        assert!((model.absorbance() - 2.0 * a).abs() < 1e-12);
    }

    #[test]
    fn pure_solvent_absorbs_nothing() {
        let mut model = flat_model();
        model.set_concentration(0.0);
        assert_eq!(model.absorbance(), 0.0);
        assert_eq!(model.transmittance(), 1.0);
    }
}

#[cfg(test)]
mod solutions {
    use super::*;

    #[test]
    fn catalog_ranges_and_units() {
        let solutions = beers_law_solutions();
        assert_eq!(solutions.len(), 8);
        let expected = [
            ("drink mix", ConcentrationUnits::Millimolar, 400.0),
            ("cobalt (II) nitrate", ConcentrationUnits::Millimolar, 400.0),
            ("cobalt chloride", ConcentrationUnits::Millimolar, 250.0),
            ("potassium dichromate", ConcentrationUnits::Micromolar, 500.0),
            ("potassium chromate", ConcentrationUnits::Micromolar, 400.0),
            ("nickel (II) chloride", ConcentrationUnits::Millimolar, 350.0),
            ("copper sulfate", ConcentrationUnits::Millimolar, 200.0),
            ("potassium permanganate", ConcentrationUnits::Micromolar, 800.0),
        ];
        for (solution, (name, units, max)) in solutions.iter().zip(expected) {
            assert_eq!(solution.name(), name);
            assert_eq!(solution.units(), units);
            assert!((units.from_molar(solution.range().max) - max).abs() < 1e-9);
            assert_eq!(solution.range().min, 0.0);
        }
    }

    #[test]
    fn concentration_is_clamped_to_range() {
        let mut s = flat_solution();
        s.set_concentration(5.0);
        assert_eq!(s.concentration(), 0.1);
        s.set_concentration(-1.0);
        assert_eq!(s.concentration(), 0.0);
        s.set_display_concentration(50.0);
        assert!((s.concentration() - 0.05).abs() < 1e-15);
        assert!((s.display_concentration() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn color_runs_from_solvent_to_solute() {
        let mut s = flat_solution();
        s.set_concentration(0.0);
        assert_eq!(s.color(), Solvent::water().color);
        s.set_concentration(0.1);
        assert_eq!(s.color(), palette::Srgb::new(200, 0, 0));
    }

    #[test]
    #[should_panic(expected = "exceeds saturation")]
    fn range_past_saturation_is_fatal() {
        let solute = flat_solution().solute().clone();
        let _ = BeersLawSolution::new(
            solute,
            Solvent::water(),
            RangeWithDefault::new(0.0, 3.0, 0.0),
            ConcentrationUnits::Millimolar,
        );
    }
}

#[cfg(test)]
mod light {
    use super::*;

    #[test]
    fn preset_light_follows_selected_solution() {
        let mut model = BeersLawModel::default();
        assert_eq!(model.light().mode(), WavelengthMode::Preset);
        assert!((model.light().wavelength() - 504.0).abs() < 1e-9);
        model.select_solution(7);
        assert!((model.light().wavelength() - 525.0).abs() < 1e-9);
        model.set_wavelength(600.0);
        assert!((model.light().wavelength() - 525.0).abs() < 1e-9);
    }

    #[test]
    fn variable_light_keeps_user_wavelength() {
        let mut model = BeersLawModel::default();
        model.set_wavelength_mode(WavelengthMode::Variable);
        model.set_wavelength(650.0);
        model.select_solution(3);
        assert_eq!(model.light().wavelength(), 650.0);
        model.set_wavelength_mode(WavelengthMode::Preset);
        assert!((model.light().wavelength() - 440.0).abs() < 1e-9);
    }

    #[test]
    fn absorbance_peaks_at_lambda_max() {
        let mut model = BeersLawModel::default();
        model.select_solution(7);
        let peak = model.absorbance();
        model.set_wavelength_mode(WavelengthMode::Variable);
        for wavelength in [400.0, 480.0, 560.0, 700.0] {
            model.set_wavelength(wavelength);
            assert!(model.absorbance() < peak);
        }
    }

    #[test]
    fn selecting_an_unknown_solution_is_ignored() {
        let mut model = BeersLawModel::default();
        model.select_solution(2);
        model.select_solution(99);
        assert_eq!(model.selected_solution(), 2);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut model = BeersLawModel::default();
        model.select_solution(4);
        model.set_concentration(0.0002);
        model.set_light_on(true);
        model.set_cuvette_width(1.7);
        model.set_detector_mode(DetectorMode::Absorbance);
        model.reset();
        assert_eq!(model.selected_solution(), 0);
        assert!(!model.light().is_on());
        assert_eq!(model.cuvette().width(), 1.0);
        assert_eq!(model.detector().mode, DetectorMode::Transmittance);
        assert_eq!(model.solutions()[4].concentration(), model.solutions()[4].range().default);
    }
}

#[cfg(test)]
mod detector {
    use super::*;

    #[test]
    fn dark_or_outside_reads_nothing() {
        let mut model = flat_model();
        assert_eq!(model.detector_reading(&Inside(BeamRegion::PastCuvette)), None);
        model.set_light_on(true);
        assert_eq!(model.detector_reading(&Nowhere), None);
    }

    #[test]
    fn before_the_cuvette_the_beam_is_unattenuated() {
        let mut model = flat_model();
        model.set_light_on(true);
        assert_eq!(model.detector_reading(&Inside(BeamRegion::Beam)), Some(100.0));
        model.set_detector_mode(DetectorMode::Absorbance);
        assert_eq!(model.detector_reading(&Inside(BeamRegion::Beam)), Some(0.0));
    }

    #[test]
    fn past_the_cuvette_reads_the_solution() {
        let mut model = flat_model();
        model.set_light_on(true);
        let past = |_: BeamRegion| true;
        let percent = model.detector_reading(&past).unwrap();
        assert!((percent - 1.0).abs() < 1e-9);
        model.set_detector_mode(DetectorMode::Absorbance);
        let a = model.detector_reading(&past).unwrap();
        assert!((a - 2.0).abs() < 1e-12);
    }

    #[test]
    fn cuvette_snaps_when_drag_ends() {
        let mut model = flat_model();
        model.begin_cuvette_drag();
        model.drag_cuvette_width(1.46);
        assert_eq!(model.cuvette().width(), 1.46);
        model.end_cuvette_drag(true);
        assert!((model.cuvette().width() - 1.5).abs() < 1e-12);
    }
}
