use super::MaterialKind;
use serde::Serialize;

/// Holds the physical properties of a construction material
///
/// Entries are looked up from the static table via [`MaterialKind::properties`]
/// and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MaterialProperties {
    /// Display name
    pub name: &'static str,

    /// Tensile strength in MPa
    pub tensile_strength: f64,

    /// Compressive strength in MPa
    pub compressive_strength: f64,

    /// Thermal expansion coefficient per degree Celsius
    pub thermal_expansion: f64,

    /// Corrosion resistance on a 0-1 scale
    pub corrosion_resistance: f64,

    /// Water resistance on a 0-1 scale
    pub water_resistance: f64,

    /// Density in kg/m3
    pub density: f64,
}

impl MaterialKind {
    /// Returns the physical properties of this material
    pub fn properties(&self) -> MaterialProperties {
        match self {
            MaterialKind::Steel => MaterialProperties {
                name: "Steel",
                tensile_strength: 400.0,
                compressive_strength: 400.0,
                thermal_expansion: 1.2e-5,
                corrosion_resistance: 0.4,
                water_resistance: 0.3,
                density: 7850.0,
            },
            MaterialKind::Concrete => MaterialProperties {
                name: "Concrete",
                tensile_strength: 3.0,
                compressive_strength: 30.0,
                thermal_expansion: 1.0e-5,
                corrosion_resistance: 0.7,
                water_resistance: 0.6,
                density: 2400.0,
            },
            MaterialKind::ReinforcedConcrete => MaterialProperties {
                name: "Reinforced Concrete",
                tensile_strength: 25.0,
                compressive_strength: 40.0,
                thermal_expansion: 1.0e-5,
                corrosion_resistance: 0.6,
                water_resistance: 0.7,
                density: 2500.0,
            },
            MaterialKind::Wood => MaterialProperties {
                name: "Wood",
                tensile_strength: 100.0,
                compressive_strength: 50.0,
                thermal_expansion: 5.0e-6,
                corrosion_resistance: 0.3,
                water_resistance: 0.2,
                density: 600.0,
            },
            MaterialKind::Masonry => MaterialProperties {
                name: "Masonry",
                tensile_strength: 2.0,
                compressive_strength: 15.0,
                thermal_expansion: 8.0e-6,
                corrosion_resistance: 0.8,
                water_resistance: 0.5,
                density: 1800.0,
            },
            MaterialKind::Composite => MaterialProperties {
                name: "Composite",
                tensile_strength: 600.0,
                compressive_strength: 200.0,
                thermal_expansion: 2.0e-6,
                corrosion_resistance: 0.9,
                water_resistance: 0.9,
                density: 1600.0,
            },
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
