// simulation/tests.rs
// Tick orchestration, gates, selection and state injection for ConcentrationModel

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ultraviolet::Vec2;

use super::ConcentrationModel;
use crate::chemistry::{catalog, SoluteForm};
use crate::config::ModelConfig;
use crate::error::{ConfigError, StateError};

const EPS: f64 = 1e-9;

fn seeded(seed: u64) -> ConcentrationModel {
    let config = ModelConfig {
        rng_seed: Some(seed),
        ..ModelConfig::default()
    };
    ConcentrationModel::new(config, catalog::concentration_solutes()).unwrap()
}

fn nudge_shaker(m: &mut ConcentrationModel, dx: f32) {
    let p = m.shaker().position();
    m.set_shaker_position(p + Vec2::new(dx, 0.0));
}

fn assert_consistent(m: &ConcentrationModel) {
    let s = m.solution();
    assert!(s.volume() >= 0.0 && s.volume() <= s.max_volume(), "volume {}", s.volume());
    assert!(
        s.solute_amount() >= 0.0 && s.solute_amount() <= s.max_solute_amount(),
        "solute {}",
        s.solute_amount()
    );
    if s.volume() == 0.0 {
        assert_eq!(s.concentration(), 0.0);
    }
    let expected = (s.solute_amount() - s.solute().saturated_concentration * s.volume()).max(0.0);
    assert!((s.precipitate_amount() - expected).abs() < EPS);
    assert_eq!(m.precipitate_particle_count(), s.number_of_precipitate_particles());
    assert_eq!(m.solvent_faucet().is_enabled(), s.volume() < s.max_volume());
    assert_eq!(m.drain_faucet().is_enabled(), s.volume() > 0.0);
    assert_eq!(m.evaporator().is_enabled(), s.volume() > 0.0);
}

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn default_model_starts_with_half_a_liter_of_water() {
        let m = ConcentrationModel::default();
        assert_eq!(m.volume(), 0.5);
        assert_eq!(m.solute_amount(), 0.0);
        assert_eq!(m.concentration(), 0.0);
        assert_eq!(m.solute_form(), SoluteForm::Solid);
        assert!(m.shaker().is_visible());
        assert!(!m.dropper().is_visible());
        assert_eq!(m.solute().name, "drink mix");
        assert_consistent(&m);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let result = ConcentrationModel::new(ModelConfig::default(), Vec::new());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ModelConfig {
            max_solute_amount: 0.0,
            ..ModelConfig::default()
        };
        let result = ConcentrationModel::new(config, catalog::concentration_solutes());
        assert!(result.is_err());
    }

    #[test]
    fn nan_geometry_is_rejected_before_anything_is_built() {
        let mut config = ModelConfig::default();
        config.shaker.drag_min[0] = f32::NAN;
        let result = ConcentrationModel::new(config, catalog::concentration_solutes());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let mut config = ModelConfig::default();
        config.particles.max_x_offset = f32::NAN;
        let result = ConcentrationModel::new(config, catalog::concentration_solutes());
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}

#[cfg(test)]
mod tick {
    use super::*;

    #[test]
    fn draining_removes_solute_at_pre_drain_concentration() {
        let mut m = seeded(1);
        m.set_solute_amount(1.0); // 2 M
        m.set_drain_flow_rate(0.1);
        m.step(1.0);
        assert!((m.volume() - 0.4).abs() < EPS);
        assert!((m.solute_amount() - 0.8).abs() < EPS);
        assert!((m.concentration() - 2.0).abs() < EPS);
        assert_consistent(&m);
    }

    #[test]
    fn draining_past_empty_stops_at_zero() {
        let mut m = seeded(1);
        m.set_volume(0.05);
        m.set_solute_amount(0.1); // 2 M
        m.set_drain_flow_rate(0.25);
        m.step(1.0);
        assert_eq!(m.volume(), 0.0);
        assert!(m.solute_amount().abs() < EPS);
        assert!(!m.drain_faucet().is_enabled());
        assert_eq!(m.drain_faucet().flow_rate(), 0.0);
        assert!(!m.evaporator().is_enabled());
        assert_consistent(&m);
    }

    #[test]
    fn solvent_faucet_shuts_off_at_capacity() {
        let mut m = seeded(1);
        m.set_volume(0.95);
        m.set_solvent_flow_rate(0.25);
        m.step(1.0);
        assert_eq!(m.volume(), 1.0);
        assert!(!m.solvent_faucet().is_enabled());
        assert_eq!(m.solvent_faucet().flow_rate(), 0.0);
        m.set_solvent_flow_rate(0.25);
        assert_eq!(m.solvent_faucet().flow_rate(), 0.0);
        assert_consistent(&m);
    }

    #[test]
    fn evaporation_concentrates_until_saturated() {
        let mut m = seeded(1);
        m.set_solute_amount(2.9);
        assert!(!m.is_saturated());
        m.set_evaporation_rate(0.25);
        m.step(0.1);
        assert!((m.volume() - 0.475).abs() < EPS);
        assert_eq!(m.solute_amount(), 2.9, "evaporation leaves solute behind");
        assert!(m.is_saturated());
        assert!((m.concentration() - m.solute().saturated_concentration).abs() < EPS);
        assert_eq!(m.precipitate_particle_count(), 13);
        assert_consistent(&m);
    }

    #[test]
    fn evaporating_everything_disables_the_evaporator() {
        let mut m = seeded(1);
        m.set_evaporation_rate(0.25);
        m.step(10.0);
        assert_eq!(m.volume(), 0.0);
        assert!(!m.evaporator().is_enabled());
        assert_eq!(m.evaporator().evaporation_rate(), 0.0);
    }

    #[test]
    fn dropper_adds_stock_solution() {
        let mut m = seeded(1);
        m.set_solute_form(SoluteForm::Solution);
        m.set_dropper_dispensing(true);
        m.step(1.0);
        let stock = m.solute().stock_concentration;
        assert!((m.volume() - 0.55).abs() < EPS);
        assert!((m.solute_amount() - 0.05 * stock).abs() < EPS);
        assert_consistent(&m);
    }

    #[test]
    fn dropper_stops_when_beaker_fills() {
        let mut m = seeded(1);
        m.set_solute_form(SoluteForm::Solution);
        m.set_volume(0.99);
        m.set_dropper_dispensing(true);
        m.step(1.0);
        let stock = m.solute().stock_concentration;
        assert_eq!(m.volume(), 1.0);
        assert!((m.solute_amount() - 0.01 * stock).abs() < EPS);
        assert!(!m.dropper().is_dispensing());
        m.step(1.0);
        assert_eq!(m.volume(), 1.0);
        assert!((m.solute_amount() - 0.01 * stock).abs() < EPS);
    }

    #[test]
    fn shaking_spawns_particles_that_dissolve_into_solute() {
        let mut m = seeded(5);
        nudge_shaker(&mut m, 5.0);
        m.step(1.0);
        assert_eq!(m.solute_particle_count(), 40);
        assert_eq!(m.solute_amount(), 0.0, "nothing has landed yet");

        for _ in 0..300 {
            m.step(1.0 / 60.0);
            assert_consistent(&m);
        }
        assert_eq!(m.solute_particle_count(), 0);
        assert!((m.solute_amount() - 40.0 / 200.0).abs() < EPS);
    }

    #[test]
    fn still_shaker_emits_nothing() {
        let mut m = seeded(5);
        for _ in 0..10 {
            m.step(1.0 / 60.0);
        }
        assert_eq!(m.solute_particle_count(), 0);
    }

    #[test]
    fn zero_dt_tick_still_emits_one_particle() {
        let mut m = seeded(5);
        nudge_shaker(&mut m, 5.0);
        m.step(0.0);
        assert_eq!(m.solute_particle_count(), 1);
        assert_eq!(m.frame(), 1);
        assert_eq!(m.elapsed(), 0.0);
    }

    #[test]
    fn hidden_shaker_does_not_dispense() {
        let mut m = seeded(5);
        m.set_solute_form(SoluteForm::Solution);
        nudge_shaker(&mut m, 5.0);
        m.step(1.0);
        assert_eq!(m.solute_particle_count(), 0);
    }

    #[test]
    fn full_shaker_stops_when_solute_is_maxed() {
        let mut m = seeded(5);
        m.set_solute_amount(5.0);
        assert!(m.shaker().is_empty());
        nudge_shaker(&mut m, 5.0);
        m.step(1.0);
        assert_eq!(m.solute_particle_count(), 0);
    }

    #[test]
    fn spawning_never_overfills_the_solute_budget() {
        let mut m = seeded(5);
        m.set_solute_amount(5.0 - 0.01); // room for 2 particles
        nudge_shaker(&mut m, 5.0);
        m.step(1.0);
        assert_eq!(m.solute_particle_count(), 2);
    }

    #[test]
    fn huge_dt_shaking_stays_within_the_solute_budget() {
        let mut m = seeded(5);
        let room = ((m.solution().max_solute_amount() - m.solute_amount())
            * m.solute().particles_per_mole)
            .ceil() as usize;
        nudge_shaker(&mut m, 5.0);
        m.step(1.0e7);
        let in_flight = m.solute_particle_count();
        assert!(in_flight > 0);
        assert!(in_flight <= room, "{} particles for room {}", in_flight, room);
        assert_consistent(&m);

        m.step(1.0e7);
        assert_eq!(m.solute_particle_count(), 0);
        assert!(m.solute_amount() <= m.solution().max_solute_amount());
        assert!((m.solute_amount() - m.solution().max_solute_amount()).abs() < EPS);
        assert!(m.shaker().is_empty());
        assert_consistent(&m);
    }

    #[test]
    fn bad_dt_is_ignored() {
        let mut m = seeded(5);
        m.set_solvent_flow_rate(0.1);
        for dt in [-1.0, f64::NAN, f64::INFINITY] {
            m.step(dt);
        }
        assert_eq!(m.frame(), 0);
        assert_eq!(m.volume(), 0.5);
    }

    #[test]
    fn clock_tracks_frames_and_time() {
        let mut m = seeded(5);
        m.step(0.25);
        m.step(0.5);
        assert_eq!(m.frame(), 2);
        assert!((m.elapsed() - 0.75).abs() < EPS);
    }

    #[test]
    fn random_inputs_keep_every_invariant() {
        let mut m = seeded(11);
        let mut driver = StdRng::seed_from_u64(99);
        for frame in 0..3000 {
            match driver.random_range(0..10) {
                0 => m.set_solvent_flow_rate(driver.random_range(-0.1..0.4)),
                1 => m.set_drain_flow_rate(driver.random_range(-0.1..0.4)),
                2 => m.set_evaporation_rate(driver.random_range(-0.1..0.4)),
                3 => m.set_dropper_dispensing(driver.random_bool(0.5)),
                4 => m.set_solute_form(if driver.random_bool(0.5) {
                    SoluteForm::Solid
                } else {
                    SoluteForm::Solution
                }),
                5 if frame % 500 == 0 => m.select_solute(driver.random_range(0..9)),
                _ => nudge_shaker(&mut m, driver.random_range(-8.0..8.0)),
            }
            m.step(driver.random_range(0.0..0.2));
            assert_consistent(&m);
        }
    }
}

#[cfg(test)]
mod selection {
    use super::*;

    #[test]
    fn selecting_a_solute_empties_the_beaker_of_solute() {
        let mut m = seeded(3);
        m.set_solute_amount(4.0);
        nudge_shaker(&mut m, 5.0);
        m.step(0.1);
        assert!(m.precipitate_particle_count() > 0);
        assert!(m.solute_particle_count() > 0);

        m.select_solute(7);
        assert_eq!(m.selected_solute(), 7);
        assert_eq!(m.solute().formula, "KMnO4");
        assert_eq!(m.solute_amount(), 0.0);
        assert_eq!(m.volume(), 0.5, "water stays");
        assert_eq!(m.solute_particle_count(), 0);
        assert_eq!(m.precipitate_particle_count(), 0);
        assert_consistent(&m);
    }

    #[test]
    fn unknown_solute_is_ignored() {
        let mut m = seeded(3);
        m.set_solute_amount(1.0);
        m.select_solute(42);
        assert_eq!(m.selected_solute(), 0);
        assert_eq!(m.solute_amount(), 1.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut m = seeded(3);
        m.select_solute(2);
        m.set_solute_form(SoluteForm::Solution);
        m.set_solvent_flow_rate(0.2);
        m.set_solute_amount(3.0);
        m.step(0.5);
        m.reset();
        assert_eq!(m.selected_solute(), 0);
        assert_eq!(m.solute_form(), SoluteForm::Solid);
        assert_eq!(m.volume(), 0.5);
        assert_eq!(m.solute_amount(), 0.0);
        assert_eq!(m.solvent_faucet().flow_rate(), 0.0);
        assert_eq!(m.solute_particle_count(), 0);
        assert_eq!(m.precipitate_particle_count(), 0);
        assert_eq!(m.frame(), 0);
        assert!(m.shaker().is_visible());
        assert_consistent(&m);
    }

    #[test]
    fn snapshots_use_the_saturated_color() {
        let mut m = seeded(3);
        m.set_solute_amount(4.0);
        let snaps = m.precipitate_particle_snapshots();
        assert_eq!(snaps.len(), m.precipitate_particle_count());
        assert!(snaps.iter().all(|s| s.color == m.solute().colors.saturated));
    }
}

#[cfg(test)]
mod state {
    use super::*;

    #[test]
    fn loaded_shaker_position_is_not_shaking() {
        let mut source = seeded(8);
        nudge_shaker(&mut source, 30.0);
        let state = source.snapshot_state();

        let mut loaded = seeded(8);
        loaded.load_state(state).unwrap();
        assert_eq!(loaded.shaker().position(), source.shaker().position());
        loaded.step(1.0);
        assert_eq!(loaded.solute_particle_count(), 0);

        let mut dragged = seeded(8);
        nudge_shaker(&mut dragged, 30.0);
        dragged.step(1.0);
        assert_eq!(dragged.solute_particle_count(), 40);
    }

    #[test]
    fn snapshot_and_load_preserve_state() {
        let mut source = seeded(8);
        source.select_solute(4);
        source.set_solute_amount(2.0);
        source.set_solvent_flow_rate(0.05);
        nudge_shaker(&mut source, 5.0);
        source.step(0.5);
        source.step(0.1);
        let state = source.snapshot_state();

        let mut loaded = seeded(1);
        loaded.load_state(state.clone()).unwrap();
        assert_eq!(loaded.selected_solute(), 4);
        assert_eq!(loaded.volume(), source.volume());
        assert_eq!(loaded.solute_amount(), source.solute_amount());
        assert_eq!(loaded.solute_particle_count(), source.solute_particle_count());
        assert_eq!(loaded.precipitate_particle_count(), source.precipitate_particle_count());
        assert_eq!(loaded.frame(), 2);
        assert_eq!(loaded.snapshot_state(), state);
    }

    #[test]
    fn load_state_clamps_out_of_range_values() {
        let mut m = seeded(8);
        let mut state = m.snapshot_state();
        state.volume = 3.0;
        state.solute_amount = -2.0;
        state.solvent_flow_rate = 1.0;
        m.load_state(state).unwrap();
        assert_eq!(m.volume(), 1.0);
        assert_eq!(m.solute_amount(), 0.0);
        assert_eq!(m.solvent_faucet().flow_rate(), 0.0, "faucet is off when full");
        assert_consistent(&m);
    }

    #[test]
    fn unknown_solute_in_state_is_an_error() {
        let mut m = seeded(8);
        let mut state = m.snapshot_state();
        state.solute = 12;
        let err = m.load_state(state).unwrap_err();
        assert!(matches!(err, StateError::UnknownSolute { index: 12, available: 9 }));
    }
}
