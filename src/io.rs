// io.rs
// Saving and restoring ConcentrationModel state (JSON or bincode, optionally gzip)

use std::io::{BufWriter, Cursor, Read, Write};
use std::path::Path;

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

use crate::chemistry::SoluteForm;
use crate::error::StateError;
use crate::particle::Particle;
use crate::profile_scope;
use crate::simulation::ConcentrationModel;

/// Every piece of mutable model state, including live particles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelState {
    /// Index into the model's solute catalog.
    pub solute: usize,
    #[serde(default)]
    pub solute_form: SoluteForm,
    pub volume: f64,
    pub solute_amount: f64,
    #[serde(default)]
    pub solvent_flow_rate: f64,
    #[serde(default)]
    pub drain_flow_rate: f64,
    #[serde(default)]
    pub evaporation_rate: f64,
    pub shaker_position: Vec2,
    pub dropper_position: Vec2,
    #[serde(default = "default_dropper_enabled")]
    pub dropper_enabled: bool,
    #[serde(default)]
    pub dropper_dispensing: bool,
    #[serde(default)]
    pub solute_particles: Vec<Particle>,
    #[serde(default)]
    pub precipitate_particles: Vec<Particle>,
    #[serde(default)]
    pub frame: u64,
    #[serde(default)]
    pub elapsed: f64,
}

fn default_dropper_enabled() -> bool {
    true
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveFormat {
    #[default]
    Json,
    Binary,
}

/// Write the model's state to `path`.
///
/// Goes through a temporary file next to `path` which is renamed into place,
/// so an interrupted save never truncates an existing file.
pub fn save_state<P: AsRef<Path>>(
    path: P,
    model: &ConcentrationModel,
    format: SaveFormat,
    compress: bool,
) -> Result<(), StateError> {
    profile_scope!("save_state");
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let state = model.snapshot_state();
    let tmp_path = path.with_extension({
        let mut os = path.extension().map(|e| e.to_os_string()).unwrap_or_default();
        os.push(".tmp");
        os
    });
    {
        let file = std::fs::File::create(&tmp_path)?;
        let writer = BufWriter::new(file);
        match (format, compress) {
            (SaveFormat::Json, false) => {
                let mut writer = writer;
                serde_json::to_writer(&mut writer, &state)?;
                writer.flush()?;
            }
            (SaveFormat::Json, true) => {
                let mut encoder = GzEncoder::new(writer, Compression::fast());
                serde_json::to_writer(&mut encoder, &state)?;
                encoder.finish()?.flush()?;
            }
            (SaveFormat::Binary, false) => {
                let mut writer = writer;
                bincode::serialize_into(&mut writer, &state)?;
                writer.flush()?;
            }
            (SaveFormat::Binary, true) => {
                let mut encoder = GzEncoder::new(writer, Compression::fast());
                bincode::serialize_into(&mut encoder, &state)?;
                encoder.finish()?.flush()?;
            }
        }
    }
    std::fs::rename(&tmp_path, path)?;
    log::info!(
        "[io] saved state ({:?}{}) to {}",
        format,
        if compress { ", gzip" } else { "" },
        path.display()
    );
    Ok(())
}

/// Read a state written by `save_state`, whatever its format.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<ModelState, StateError> {
    profile_scope!("load_state");
    let data = std::fs::read(path.as_ref())?;
    let state = match maybe_decompress_gzip(&data)? {
        Some(decoded) => parse_state_bytes(&decoded)?,
        None => parse_state_bytes(&data)?,
    };
    log::info!("[io] loaded state from {}", path.as_ref().display());
    Ok(state)
}

/// Load `path` straight into `model`.
pub fn restore_model<P: AsRef<Path>>(
    path: P,
    model: &mut ConcentrationModel,
) -> Result<(), StateError> {
    let state = load_state(path)?;
    model.load_state(state)
}

fn parse_state_bytes(bytes: &[u8]) -> Result<ModelState, StateError> {
    if let Ok(state) = serde_json::from_slice::<ModelState>(bytes) {
        return Ok(state);
    }
    if let Ok(state) = bincode::deserialize::<ModelState>(bytes) {
        return Ok(state);
    }
    Err(StateError::UnknownFormat)
}

fn maybe_decompress_gzip(data: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
    if data.len() < 2 || data[0] != 0x1f || data[1] != 0x8b {
        return Ok(None);
    }
    let mut decoder = GzDecoder::new(Cursor::new(data));
    let mut decoded = Vec::new();
    decoder.read_to_end(&mut decoded)?;
    Ok(Some(decoded))
}
