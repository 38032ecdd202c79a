// simulation/model.rs
// ConcentrationModel: owns every piece of the "mix a solution" lab and advances it one tick at a time

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use ultraviolet::Vec2;

use crate::apparatus::{Beaker, Dropper, Evaporator, Faucet, Shaker};
use crate::chemistry::{catalog, ConcentrationSolution, Solute, SoluteForm, Solvent};
use crate::config::ModelConfig;
use crate::error::{ConfigError, StateError};
use crate::io::ModelState;
use crate::particle::{Particle, ParticleSnapshot, PrecipitateParticles, SoluteParticles};
use crate::profile_scope;

/// The "mix a solution" model.
///
/// All state is owned here and only changes through the methods below. Every
/// public method leaves the model fully consistent: volume and solute amount
/// in range, gates matching the solution, precipitate particles matching the
/// precipitate amount.
pub struct ConcentrationModel {
    config: ModelConfig,
    solutes: Vec<Arc<Solute>>,
    selected: usize,
    solute_form: SoluteForm,
    solution: ConcentrationSolution,
    beaker: Beaker,
    solvent_faucet: Faucet,
    drain_faucet: Faucet,
    evaporator: Evaporator,
    shaker: Shaker,
    dropper: Dropper,
    solute_particles: SoluteParticles,
    precipitate_particles: PrecipitateParticles,
    rng: StdRng,
    frame: u64,
    elapsed: f64,
}

impl ConcentrationModel {
    /// Build a model from a config and an ordered solute catalog.
    ///
    /// Panics if any solute is chemically invalid in water.
    pub fn new(config: ModelConfig, solutes: Vec<Arc<Solute>>) -> Result<Self, ConfigError> {
        config.validate()?;
        if solutes.is_empty() {
            return Err(ConfigError::invalid("solute catalog is empty"));
        }
        Ok(Self::assemble(config, solutes))
    }

    fn assemble(config: ModelConfig, solutes: Vec<Arc<Solute>>) -> Self {
        let solvent = Solvent::water();
        for solute in &solutes {
            solute.assert_valid_in(&solvent);
        }
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let solution = ConcentrationSolution::new(
            solvent,
            solutes[0].clone(),
            config.volume_range(),
            config.solute_amount_range(),
        );
        let mut model = Self {
            beaker: Beaker::from_config(&config.beaker),
            solvent_faucet: Faucet::new(config.max_input_flow_rate),
            drain_faucet: Faucet::new(config.max_output_flow_rate),
            evaporator: Evaporator::new(config.max_evaporation_rate),
            shaker: Shaker::new(&config.shaker),
            dropper: Dropper::new(&config.dropper),
            solute_particles: SoluteParticles::new(config.particles.clone()),
            precipitate_particles: PrecipitateParticles::new(),
            solutes,
            selected: 0,
            solute_form: SoluteForm::default(),
            solution,
            rng,
            frame: 0,
            elapsed: 0.0,
            config,
        };
        model.apply_solute_form();
        model.update_gates();
        model.sync_precipitate();
        model
    }

    // ====================
    // Tick
    // ====================

    /// Advance the model by `dt` seconds.
    ///
    /// Negative or non-finite `dt` is ignored. `dt == 0` still runs a full
    /// tick, so a dispensing shaker still emits its minimum particle.
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("[model] ignoring step with dt = {}", dt);
            return;
        }
        profile_scope!("model_step");

        self.add_solvent_from_faucet(dt);
        self.drain_solution_from_faucet(dt);
        self.add_stock_solution_from_dropper(dt);
        self.evaporate_solvent(dt);

        self.shaker.step();
        self.dissolve_solute_particles(dt);
        self.create_solute_particles(dt);
        self.sync_precipitate();

        self.frame += 1;
        self.elapsed += dt;
    }

    fn add_solvent_from_faucet(&mut self, dt: f64) {
        let requested = self.solvent_faucet.flow_rate() * dt;
        if requested > 0.0 {
            self.solution.add_solvent(requested);
            self.update_gates();
        }
    }

    fn drain_solution_from_faucet(&mut self, dt: f64) {
        let requested = self.drain_faucet.flow_rate() * dt;
        if requested > 0.0 {
            self.solution.drain(requested);
            self.update_gates();
        }
    }

    fn add_stock_solution_from_dropper(&mut self, dt: f64) {
        let requested = self.dropper.flow_rate() * dt;
        if requested > 0.0 {
            let stock = self.solute().stock_concentration;
            self.solution.add_solution(requested, stock);
            self.update_gates();
        }
    }

    fn evaporate_solvent(&mut self, dt: f64) {
        let requested = self.evaporator.evaporation_rate() * dt;
        if requested > 0.0 {
            self.solution.remove_solvent(requested);
            self.update_gates();
        }
    }

    fn dissolve_solute_particles(&mut self, dt: f64) {
        let dissolved = self.solute_particles.propagate(dt, &self.beaker, self.solution.volume());
        if dissolved > 0 {
            let moles = dissolved as f64 * self.solute().moles_per_particle();
            self.solution.add_solute(moles);
            self.update_gates();
        }
    }

    fn create_solute_particles(&mut self, dt: f64) {
        let solute = self.solutes[self.selected].clone();
        // Particles already in flight will land as solute too.
        let room = (self.solution.max_solute_amount() - self.solution.solute_amount()).max(0.0);
        let limit = ((room * solute.particles_per_mole).ceil() as usize)
            .saturating_sub(self.solute_particles.len());
        self.solute_particles.spawn(
            dt,
            &self.shaker,
            &solute,
            self.selected,
            limit,
            &mut self.rng,
        );
    }

    fn sync_precipitate(&mut self) {
        let target = self.solution.number_of_precipitate_particles();
        let solute = self.solutes[self.selected].clone();
        self.precipitate_particles
            .sync(target, &solute, self.selected, &self.beaker, &mut self.rng);
    }

    /// Recompute the empty/full gates of every source from the solution.
    fn update_gates(&mut self) {
        let volume = self.solution.volume();
        let full = volume >= self.solution.max_volume();
        let has_liquid = volume > 0.0;

        if self.solvent_faucet.is_enabled() == full {
            log::debug!("[model] solvent faucet enabled: {}", !full);
            self.solvent_faucet.set_enabled(!full);
        }
        if self.drain_faucet.is_enabled() != has_liquid {
            log::debug!("[model] drain faucet enabled: {}", has_liquid);
            self.drain_faucet.set_enabled(has_liquid);
        }
        if self.evaporator.is_enabled() != has_liquid {
            log::debug!("[model] evaporator enabled: {}", has_liquid);
            self.evaporator.set_enabled(has_liquid);
        }

        let out_of_solute = self.solution.solute_amount() >= self.solution.max_solute_amount();
        self.shaker.set_empty(out_of_solute);
        self.dropper.set_empty(out_of_solute);
        self.dropper.set_beaker_has_room(!full);
    }

    fn apply_solute_form(&mut self) {
        self.shaker.set_visible(self.solute_form == SoluteForm::Solid);
        self.dropper.set_visible(self.solute_form == SoluteForm::Solution);
    }

    /// Re-establish the derived invariants after a direct change to the solution.
    fn settle(&mut self) {
        self.update_gates();
        self.sync_precipitate();
    }

    // ====================
    // Host inputs
    // ====================

    pub fn set_solvent_flow_rate(&mut self, rate: f64) {
        self.solvent_faucet.set_flow_rate(rate);
    }

    pub fn set_drain_flow_rate(&mut self, rate: f64) {
        self.drain_faucet.set_flow_rate(rate);
    }

    pub fn set_evaporation_rate(&mut self, rate: f64) {
        self.evaporator.set_evaporation_rate(rate);
    }

    pub fn set_dropper_dispensing(&mut self, dispensing: bool) {
        self.dropper.set_dispensing(dispensing);
    }

    pub fn set_dropper_enabled(&mut self, enabled: bool) {
        self.dropper.set_enabled(enabled);
    }

    pub fn set_shaker_position(&mut self, position: Vec2) {
        self.shaker.set_position(position);
    }

    pub fn set_dropper_position(&mut self, position: Vec2) {
        self.dropper.set_position(position);
    }

    /// Switch to the solute at `index` in the catalog. The beaker keeps its
    /// water but loses all solute. Unknown indices are ignored.
    pub fn select_solute(&mut self, index: usize) {
        if index == self.selected {
            return;
        }
        let Some(solute) = self.solutes.get(index).cloned() else {
            log::warn!(
                "[model] no solute #{} in a catalog of {}",
                index,
                self.solutes.len()
            );
            return;
        };
        log::info!("[model] selected solute {} ({})", solute.name, solute.formula);
        self.selected = index;
        self.solution.set_solute(solute);
        self.solution.set_solute_amount(0.0);
        self.solute_particles.clear();
        self.precipitate_particles.clear();
        self.settle();
    }

    pub fn set_solute_form(&mut self, form: SoluteForm) {
        if form != self.solute_form {
            log::info!("[model] solute form: {:?}", form);
        }
        self.solute_form = form;
        self.apply_solute_form();
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.solution.set_volume(volume);
        self.settle();
    }

    pub fn set_solute_amount(&mut self, amount: f64) {
        self.solution.set_solute_amount(amount);
        self.settle();
    }

    /// Restore every piece of mutable state to its initial value.
    pub fn reset(&mut self) {
        log::info!("[model] reset");
        self.selected = 0;
        self.solution.set_solute(self.solutes[0].clone());
        self.solution.reset();
        self.solute_form = SoluteForm::default();
        self.solvent_faucet.reset();
        self.drain_faucet.reset();
        self.evaporator.reset();
        self.shaker.reset();
        self.dropper.reset();
        self.solute_particles.clear();
        self.precipitate_particles.clear();
        self.frame = 0;
        self.elapsed = 0.0;
        self.apply_solute_form();
        self.settle();
    }

    // ====================
    // State injection
    // ====================

    /// Capture all mutable state.
    pub fn snapshot_state(&self) -> ModelState {
        ModelState {
            solute: self.selected,
            solute_form: self.solute_form,
            volume: self.solution.volume(),
            solute_amount: self.solution.solute_amount(),
            solvent_flow_rate: self.solvent_faucet.flow_rate(),
            drain_flow_rate: self.drain_faucet.flow_rate(),
            evaporation_rate: self.evaporator.evaporation_rate(),
            shaker_position: self.shaker.position(),
            dropper_position: self.dropper.position(),
            dropper_enabled: self.dropper.is_enabled(),
            dropper_dispensing: self.dropper.is_dispensing(),
            solute_particles: self.solute_particles.particles().to_vec(),
            precipitate_particles: self.precipitate_particles.particles().to_vec(),
            frame: self.frame,
            elapsed: self.elapsed,
        }
    }

    /// Replace all mutable state with `state`.
    ///
    /// Values are clamped as if set by the host. The shaker's restored
    /// position counts as already seen, so loading never reads as shaking.
    pub fn load_state(&mut self, state: ModelState) -> Result<(), StateError> {
        let solute = self
            .solutes
            .get(state.solute)
            .cloned()
            .ok_or(StateError::UnknownSolute {
                index: state.solute,
                available: self.solutes.len(),
            })?;
        self.selected = state.solute;
        self.solution.set_solute(solute);
        self.solute_form = state.solute_form;
        self.apply_solute_form();

        self.solution.set_volume(state.volume);
        self.solution.set_solute_amount(state.solute_amount);
        self.update_gates();

        self.solvent_faucet.set_flow_rate(state.solvent_flow_rate);
        self.drain_faucet.set_flow_rate(state.drain_flow_rate);
        self.evaporator.set_evaporation_rate(state.evaporation_rate);

        self.shaker.set_position(state.shaker_position);
        self.shaker.sync_previous_position();
        self.dropper.set_position(state.dropper_position);
        self.dropper.set_enabled(state.dropper_enabled);
        self.dropper.set_dispensing(state.dropper_dispensing);

        let selected = self.selected;
        let retag = |mut particles: Vec<Particle>| {
            particles.iter_mut().for_each(|p| p.solute = selected);
            particles
        };
        self.solute_particles.restore(retag(state.solute_particles));
        self.precipitate_particles
            .restore(retag(state.precipitate_particles));
        self.sync_precipitate();

        self.frame = state.frame;
        self.elapsed = state.elapsed;
        log::info!(
            "[model] loaded state at frame {} ({} particles in flight)",
            self.frame,
            self.solute_particles.len()
        );
        Ok(())
    }

    // ====================
    // Observers
    // ====================

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn solutes(&self) -> &[Arc<Solute>] {
        &self.solutes
    }

    pub fn selected_solute(&self) -> usize {
        self.selected
    }

    pub fn solute(&self) -> &Arc<Solute> {
        &self.solutes[self.selected]
    }

    pub fn solute_form(&self) -> SoluteForm {
        self.solute_form
    }

    pub fn solution(&self) -> &ConcentrationSolution {
        &self.solution
    }

    pub fn beaker(&self) -> &Beaker {
        &self.beaker
    }

    pub fn solvent_faucet(&self) -> &Faucet {
        &self.solvent_faucet
    }

    pub fn drain_faucet(&self) -> &Faucet {
        &self.drain_faucet
    }

    pub fn evaporator(&self) -> &Evaporator {
        &self.evaporator
    }

    pub fn shaker(&self) -> &Shaker {
        &self.shaker
    }

    pub fn dropper(&self) -> &Dropper {
        &self.dropper
    }

    pub fn volume(&self) -> f64 {
        self.solution.volume()
    }

    pub fn solute_amount(&self) -> f64 {
        self.solution.solute_amount()
    }

    pub fn concentration(&self) -> f64 {
        self.solution.concentration()
    }

    pub fn percent_concentration(&self) -> f64 {
        self.solution.percent_concentration()
    }

    pub fn is_saturated(&self) -> bool {
        self.solution.is_saturated()
    }

    pub fn precipitate_amount(&self) -> f64 {
        self.solution.precipitate_amount()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulated seconds since construction or the last reset.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn solute_particle_count(&self) -> usize {
        self.solute_particles.len()
    }

    pub fn precipitate_particle_count(&self) -> usize {
        self.precipitate_particles.len()
    }

    pub fn solute_particle_snapshots(&self) -> Vec<ParticleSnapshot> {
        let color = self.solute().colors.saturated;
        self.solute_particles
            .particles()
            .iter()
            .map(|p| ParticleSnapshot::of(p, color))
            .collect()
    }

    pub fn precipitate_particle_snapshots(&self) -> Vec<ParticleSnapshot> {
        let color = self.solute().colors.saturated;
        self.precipitate_particles
            .particles()
            .iter()
            .map(|p| ParticleSnapshot::of(p, color))
            .collect()
    }
}

impl Default for ConcentrationModel {
    /// Default lab with the built-in solute catalog.
    fn default() -> Self {
        Self::assemble(ModelConfig::default(), catalog::concentration_solutes())
    }
}
