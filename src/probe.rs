// probe.rs
// Named regions a probe can be in, and the predicate hosts supply to test them.
//
// The core never sees shapes. Whoever owns the geometry answers
// "is the probe in region R right now?" and the meters decide what to read.

/// Regions of fluid the concentration meter can dip into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FluidRegion {
    /// The solution in the beaker.
    Solution,
    /// The stream leaving the drain faucet.
    DrainStream,
    /// The pure-solvent stream from the input faucet.
    SolventStream,
    /// The stock-solution stream from the dropper.
    DropperStream,
}

/// Regions of the light path the absorbance detector can sit in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BeamRegion {
    /// Anywhere on the beam.
    Beam,
    /// The part of the beam that has passed through the cuvette.
    PastCuvette,
}

/// Yes/no containment query for a probe against a named region.
pub trait Containment<R> {
    fn contains(&self, region: R) -> bool;
}

impl<R, F> Containment<R> for F
where
    F: Fn(R) -> bool,
{
    fn contains(&self, region: R) -> bool {
        self(region)
    }
}

/// A probe that is in none of the regions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Nowhere;

impl<R> Containment<R> for Nowhere {
    fn contains(&self, _region: R) -> bool {
        false
    }
}

/// A probe inside exactly one region.
#[derive(Clone, Copy, Debug)]
pub struct Inside<R>(pub R);

impl<R: PartialEq> Containment<R> for Inside<R> {
    fn contains(&self, region: R) -> bool {
        self.0 == region
    }
}
