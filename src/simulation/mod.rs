// simulation/mod.rs
// The concentration model and its per-tick orchestration

mod model;
pub use model::*;

#[cfg(test)]
mod tests;
