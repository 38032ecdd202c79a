// optics/mod.rs
// Beer-Lambert optics for the "measure absorbance" lab

mod absorbance;
mod detector;
mod model;
mod solution;

pub use absorbance::*;
pub use detector::*;
pub use model::*;
pub use solution::*;

#[cfg(test)]
mod tests;
