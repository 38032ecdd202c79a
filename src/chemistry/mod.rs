// chemistry/mod.rs
// Solvent and solute descriptors, the beaker solution, and the built-in catalog

mod absorptivity;
pub mod catalog;
mod solute;
mod solution;
mod solvent;

pub use absorptivity::*;
pub use solute::*;
pub use solution::*;
pub use solvent::*;
