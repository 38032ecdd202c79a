// chemistry/catalog.rs
// Built-in solute data. Order here is the order hosts list solutes in.

use std::sync::Arc;

use palette::Srgb;

use super::{AbsorptionBand, MolarAbsorptivityData, Solute, SoluteColors};

fn colors(dilute: (u8, u8, u8), saturated: (u8, u8, u8)) -> SoluteColors {
    SoluteColors::new(
        Srgb::new(dilute.0, dilute.1, dilute.2),
        Srgb::new(saturated.0, saturated.1, saturated.2),
    )
}

fn bands(bands: &[AbsorptionBand]) -> MolarAbsorptivityData {
    MolarAbsorptivityData::from_bands(bands)
}

pub fn drink_mix() -> Solute {
    Solute::new(
        "drink mix",
        "C12H22O11",
        342.296,
        5.5,
        5.96,
        colors((255, 225, 225), (255, 0, 0)),
        bands(&[AbsorptionBand::new(504.0, 5.5, 35.0)]),
    )
}

pub fn cobalt_ii_nitrate() -> Solute {
    Solute::new(
        "cobalt (II) nitrate",
        "Co(NO3)2",
        182.942,
        5.0,
        5.64,
        colors((255, 225, 225), (255, 0, 0)),
        bands(&[AbsorptionBand::new(510.0, 4.9, 30.0)]),
    )
}

pub fn cobalt_chloride() -> Solute {
    Solute::new(
        "cobalt chloride",
        "CoCl2",
        129.839,
        4.0,
        4.33,
        colors((255, 242, 242), (255, 106, 106)),
        bands(&[
            AbsorptionBand::new(510.0, 4.6, 30.0),
            AbsorptionBand::new(620.0, 0.5, 40.0),
        ]),
    )
}

pub fn potassium_dichromate() -> Solute {
    Solute::new(
        "potassium dichromate",
        "K2Cr2O7",
        294.185,
        0.5,
        0.51,
        colors((255, 204, 153), (255, 127, 0)),
        bands(&[AbsorptionBand::new(440.0, 370.0, 35.0)]),
    )
    .with_particle_size(4.0)
}

pub fn potassium_chromate() -> Solute {
    Solute::new(
        "potassium chromate",
        "K2CrO4",
        194.191,
        3.0,
        3.35,
        colors((255, 255, 153), (255, 255, 0)),
        bands(&[AbsorptionBand::new(372.0, 4830.0, 35.0)]),
    )
}

pub fn nickel_ii_chloride() -> Solute {
    Solute::new(
        "nickel (II) chloride",
        "NiCl2",
        129.599,
        5.0,
        5.21,
        colors((234, 244, 234), (0, 128, 0)),
        bands(&[
            AbsorptionBand::new(395.0, 5.1, 30.0),
            AbsorptionBand::new(720.0, 2.1, 45.0),
        ]),
    )
}

pub fn copper_sulfate() -> Solute {
    Solute::new(
        "copper sulfate",
        "CuSO4",
        159.609,
        1.0,
        1.38,
        colors((200, 225, 255), (30, 144, 255)),
        bands(&[AbsorptionBand::new(800.0, 12.0, 90.0)]),
    )
}

pub fn potassium_permanganate() -> Solute {
    Solute::new(
        "potassium permanganate",
        "KMnO4",
        158.034,
        0.4,
        0.48,
        colors((255, 0, 255), (80, 0, 80)),
        bands(&[AbsorptionBand::new(525.0, 2455.0, 30.0)]),
    )
    .with_particle_size(4.0)
}

/// Colorless: its absorptivity is zero everywhere.
pub fn sodium_chloride() -> Solute {
    Solute::new(
        "sodium chloride",
        "NaCl",
        58.443,
        5.0,
        5.37,
        colors((224, 255, 255), (255, 255, 255)),
        bands(&[AbsorptionBand::new(380.0, 0.0, 10.0)]),
    )
}

/// Solutes offered by the "mix a solution" lab, in display order.
pub fn concentration_solutes() -> Vec<Arc<Solute>> {
    vec![
        Arc::new(drink_mix()),
        Arc::new(cobalt_ii_nitrate()),
        Arc::new(cobalt_chloride()),
        Arc::new(potassium_dichromate()),
        Arc::new(potassium_chromate()),
        Arc::new(nickel_ii_chloride()),
        Arc::new(copper_sulfate()),
        Arc::new(potassium_permanganate()),
        Arc::new(sodium_chloride()),
    ]
}
