use crate::io::{restore_model, save_state, SaveFormat};
use crate::profile_scope;
use crate::simulation::ConcentrationModel;

#[cfg(feature = "profiling")]
use crate::PROFILER;

/// Advance the model one tick.
pub fn handle_step(model: &mut ConcentrationModel, dt: f64) {
    model.step(dt);
    #[cfg(feature = "profiling")]
    {
        PROFILER.lock().end_frame();
    }
}

/// Save the model state to disk.
pub fn handle_save_state(model: &ConcentrationModel, path: String, format: SaveFormat, compress: bool) {
    profile_scope!("command_save_state");
    if let Err(e) = save_state(&path, model, format, compress) {
        log::error!("[io] failed to save state to {}: {}", path, e);
    }
}

/// Load the model state from disk. On failure the model is left untouched.
pub fn handle_load_state(model: &mut ConcentrationModel, path: String) {
    profile_scope!("command_load_state");
    if let Err(e) = restore_model(&path, model) {
        log::error!("[io] failed to load state from {}: {}", path, e);
    }
}
