// commands/mod.rs
// Host inputs expressed as data, applied to a model by the dispatcher

mod dispatcher;
mod state;

pub use dispatcher::*;

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

use crate::apparatus::WavelengthMode;
use crate::chemistry::SoluteForm;
use crate::io::SaveFormat;
use crate::optics::DetectorMode;

/// Inputs to the "mix a solution" model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ModelCommand {
    SetSolventFlowRate { rate: f64 },
    SetDrainFlowRate { rate: f64 },
    SetEvaporationRate { rate: f64 },
    SetDropperDispensing { dispensing: bool },
    SetDropperEnabled { enabled: bool },
    MoveShaker { position: Vec2 },
    MoveDropper { position: Vec2 },
    SelectSolute { index: usize },
    SetSoluteForm { form: SoluteForm },
    SetVolume { volume: f64 },
    SetSoluteAmount { amount: f64 },
    Step { dt: f64 },
    Reset,
    SaveState { path: String, format: SaveFormat, compress: bool },
    LoadState { path: String },
}

/// Inputs to the "measure absorbance" model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BeersLawCommand {
    SelectSolution { index: usize },
    SetConcentration { concentration: f64 },
    BeginCuvetteDrag,
    DragCuvetteWidth { width: f64 },
    EndCuvetteDrag { snap: bool },
    SetLightOn { on: bool },
    SetWavelengthMode { mode: WavelengthMode },
    SetWavelength { wavelength: f64 },
    SetDetectorMode { mode: DetectorMode },
    Reset,
}
