pub mod apparatus;
pub mod chemistry;
pub mod commands;
pub mod config;
pub mod error;
pub mod io;
pub mod meter;
pub mod optics;
pub mod particle;
pub mod probe;
pub mod profiler;
pub mod simulation;
pub mod units;

pub use error::{ConfigError, StateError};
pub use optics::BeersLawModel;
pub use simulation::ConcentrationModel;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
