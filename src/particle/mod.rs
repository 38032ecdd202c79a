// particle/mod.rs
// Transient particles: solute falling from the shaker, precipitate on the floor

mod precipitate;
mod solute_particles;
mod types;

pub use precipitate::*;
pub use solute_particles::*;
pub use types::*;
