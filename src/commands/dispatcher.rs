use crate::optics::BeersLawModel;
use crate::simulation::ConcentrationModel;

use super::{state, BeersLawCommand, ModelCommand};

/// Apply a single `ModelCommand`.
pub fn process_command(cmd: ModelCommand, model: &mut ConcentrationModel) {
    match cmd {
        ModelCommand::SetSolventFlowRate { rate } => model.set_solvent_flow_rate(rate),
        ModelCommand::SetDrainFlowRate { rate } => model.set_drain_flow_rate(rate),
        ModelCommand::SetEvaporationRate { rate } => model.set_evaporation_rate(rate),
        ModelCommand::SetDropperDispensing { dispensing } => {
            model.set_dropper_dispensing(dispensing);
        }
        ModelCommand::SetDropperEnabled { enabled } => model.set_dropper_enabled(enabled),
        ModelCommand::MoveShaker { position } => model.set_shaker_position(position),
        ModelCommand::MoveDropper { position } => model.set_dropper_position(position),
        ModelCommand::SelectSolute { index } => model.select_solute(index),
        ModelCommand::SetSoluteForm { form } => model.set_solute_form(form),
        ModelCommand::SetVolume { volume } => model.set_volume(volume),
        ModelCommand::SetSoluteAmount { amount } => model.set_solute_amount(amount),
        ModelCommand::Step { dt } => state::handle_step(model, dt),
        ModelCommand::Reset => model.reset(),
        ModelCommand::SaveState { path, format, compress } => {
            state::handle_save_state(model, path, format, compress);
        }
        ModelCommand::LoadState { path } => {
            state::handle_load_state(model, path);
        }
    }
}

/// Apply a single `BeersLawCommand`.
pub fn process_beers_law_command(cmd: BeersLawCommand, model: &mut BeersLawModel) {
    match cmd {
        BeersLawCommand::SelectSolution { index } => model.select_solution(index),
        BeersLawCommand::SetConcentration { concentration } => {
            model.set_concentration(concentration);
        }
        BeersLawCommand::BeginCuvetteDrag => model.begin_cuvette_drag(),
        BeersLawCommand::DragCuvetteWidth { width } => model.drag_cuvette_width(width),
        BeersLawCommand::EndCuvetteDrag { snap } => model.end_cuvette_drag(snap),
        BeersLawCommand::SetLightOn { on } => model.set_light_on(on),
        BeersLawCommand::SetWavelengthMode { mode } => model.set_wavelength_mode(mode),
        BeersLawCommand::SetWavelength { wavelength } => model.set_wavelength(wavelength),
        BeersLawCommand::SetDetectorMode { mode } => model.set_detector_mode(mode),
        BeersLawCommand::Reset => model.reset(),
    }
}
