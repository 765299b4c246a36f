use crate::base::{FoundationKind, MaterialKind};

/// Implements the bridge asset model
#[derive(Clone, Debug, PartialEq)]
pub struct Bridge {
    /// Unique asset identifier
    pub id: String,

    /// Construction material
    pub material: MaterialKind,

    /// Age in years
    pub age: u32,

    /// Location label (opaque)
    pub location: String,

    /// Latitude (opaque metadata)
    pub latitude: f64,

    /// Longitude (opaque metadata)
    pub longitude: f64,

    /// Span length in meters
    pub span_length: f64,

    /// Deck height above normal water level in meters
    pub height_above_water: f64,

    /// Load capacity in tons
    pub load_capacity: f64,

    /// Foundation construction kind
    pub foundation: FoundationKind,
}

impl Bridge {
    /// Calculates the vulnerability to flooding on [0, 1]
    ///
    /// Driven by the remaining clearance between the deck and the water
    /// level; pile foundations resist scour, spread footings are prone to
    /// undermining.
    pub fn flood_vulnerability(&self, water_level: f64) -> f64 {
        let clearance = self.height_above_water - water_level;
        let vulnerability = if clearance <= 0.0 {
            // water above the deck
            1.0
        } else if clearance < 2.0 {
            0.8 + (2.0 - clearance) * 0.1
        } else {
            f64::min(0.8, 1.0 / clearance)
        };
        let foundation_factor = match self.foundation {
            FoundationKind::Pile => 0.7,
            FoundationKind::Spread => 1.2,
            FoundationKind::Caisson => 1.0,
        };
        f64::min(1.0, vulnerability * foundation_factor)
    }

    /// Calculates the vulnerability to high winds on [0, 1]
    ///
    /// Longer spans are more exposed; wind speeds beyond 80 km/h load the
    /// structure significantly and beyond 150 km/h critically.
    pub fn wind_vulnerability(&self, wind_speed: f64) -> f64 {
        let span_factor = f64::min(1.0, self.span_length / 500.0);
        let wind_factor = if wind_speed < 80.0 {
            0.1
        } else if wind_speed < 120.0 {
            0.3 + (wind_speed - 80.0) / 80.0
        } else {
            f64::min(1.0, 0.8 + (wind_speed - 120.0) / 150.0)
        };
        span_factor * wind_factor
    }

    /// Calculates the vulnerability to extreme heat on [0, 1]
    ///
    /// Bridges carry no dedicated heat rule; thermal expansion of the deck
    /// is the only stimulus, attenuated to 40% of the temperature factor.
    pub fn heat_vulnerability(&self, max_temperature: f64) -> f64 {
        let temp_factor = f64::min(1.0, (max_temperature - 30.0) / 30.0);
        temp_factor * 0.4
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
