use crate::base::{EventKind, Severity};
use crate::event::{FloodEvent, HeatwaveEvent, HighWindEvent};
use serde::Serialize;

/// Defines a climate event as one of the supported variants
#[derive(Clone, Debug, PartialEq)]
pub enum ClimateEvent {
    Flood(FloodEvent),
    Heatwave(HeatwaveEvent),
    HighWind(HighWindEvent),
}

impl ClimateEvent {
    /// Returns the event type
    pub fn kind(&self) -> EventKind {
        match self {
            ClimateEvent::Flood(..) => EventKind::Flood,
            ClimateEvent::Heatwave(..) => EventKind::Heatwave,
            ClimateEvent::HighWind(..) => EventKind::HighWind,
        }
    }

    /// Returns the severity grade
    pub fn severity(&self) -> Severity {
        match self {
            ClimateEvent::Flood(event) => event.severity,
            ClimateEvent::Heatwave(event) => event.severity,
            ClimateEvent::HighWind(event) => event.severity,
        }
    }

    /// Calculates the overall stress factor on [0, 1]
    pub fn stress_factor(&self) -> f64 {
        match self {
            ClimateEvent::Flood(event) => event.stress_factor(),
            ClimateEvent::Heatwave(event) => event.stress_factor(),
            ClimateEvent::HighWind(event) => event.stress_factor(),
        }
    }

    /// Returns the event information with the sub-factor breakdown
    pub fn info(&self) -> EventInfo {
        match self {
            ClimateEvent::Flood(event) => event.info(),
            ClimateEvent::Heatwave(event) => event.info(),
            ClimateEvent::HighWind(event) => event.info(),
        }
    }
}

/// Holds the reportable information of a climate event
#[derive(Clone, Debug, Serialize)]
pub struct EventInfo {
    /// Event type
    pub event_type: EventKind,

    /// Display name
    pub event_name: String,

    /// Severity grade
    pub severity: Severity,

    /// Overall stress factor (rounded to 3 decimals)
    pub stress_factor: f64,

    /// Variant-specific physical parameters
    #[serde(flatten)]
    pub details: EventDetails,

    /// Stress sub-factor breakdown (each rounded to 3 decimals)
    pub components: EventComponents,
}

/// Holds the variant-specific physical parameters of an event
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum EventDetails {
    Flood {
        rainfall_intensity_mm_hr: f64,
        water_level_m: f64,
        flow_velocity_m_s: f64,
        duration_hours: f64,
    },
    Heatwave {
        max_temperature_c: f64,
        min_temperature_c: f64,
        duration_days: f64,
        humidity_percent: f64,
        solar_radiation_w_m2: f64,
    },
    HighWind {
        sustained_wind_speed_kmh: f64,
        gust_speed_kmh: f64,
        duration_hours: f64,
        wind_direction: String,
        storm_surge_m: f64,
    },
}

/// Holds the variant-specific stress sub-factors of an event
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum EventComponents {
    Flood {
        rainfall_stress: f64,
        water_level_stress: f64,
        erosion_stress: f64,
        duration_amplifier: f64,
    },
    Heatwave {
        temperature_stress: f64,
        thermal_expansion_stress: f64,
        duration_stress: f64,
        humidity_modifier: f64,
    },
    HighWind {
        sustained_wind_stress: f64,
        gust_stress: f64,
        duration_factor: f64,
        storm_surge_factor: f64,
    },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
