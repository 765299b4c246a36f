use crate::base::{round3, EventKind, Severity};
use crate::event::{EventComponents, EventDetails, EventInfo};

/// Implements the high wind event stress model
///
/// The storm surge factor is a coastal amplifier on the 1.0-1.3 range, so
/// the composite can exceed the nominal sub-scale before the final clamp.
#[derive(Clone, Debug, PartialEq)]
pub struct HighWindEvent {
    /// Display name
    pub name: String,

    /// Severity grade
    pub severity: Severity,

    /// Sustained wind speed in km/h
    pub sustained_wind_speed: f64,

    /// Gust speed in km/h
    pub gust_speed: f64,

    /// Duration in hours
    pub duration: f64,

    /// Wind direction label (opaque)
    pub wind_direction: String,

    /// Storm surge in meters (coastal areas)
    pub storm_surge: f64,
}

impl HighWindEvent {
    /// Calculates the stress sub-factor from the sustained wind speed
    ///
    /// Thresholds (km/h): moderate 50-80, high 80-120, very high 120-150,
    /// extreme 150+.
    pub fn sustained_wind_stress(&self) -> f64 {
        let x = self.sustained_wind_speed;
        if x < 50.0 {
            0.2
        } else if x < 80.0 {
            0.3 + (x - 50.0) / 100.0
        } else if x < 120.0 {
            0.6 + (x - 80.0) / 150.0
        } else if x < 150.0 {
            0.85 + (x - 120.0) / 200.0
        } else {
            1.0
        }
    }

    /// Calculates the stress sub-factor from wind gusts (dynamic loading
    /// and fatigue)
    pub fn gust_stress(&self) -> f64 {
        let x = self.gust_speed;
        if x < 80.0 {
            0.3
        } else if x < 120.0 {
            0.5 + (x - 80.0) / 100.0
        } else if x < 160.0 {
            0.75 + (x - 120.0) / 200.0
        } else {
            0.95
        }
    }

    /// Calculates the duration amplifier (fatigue accumulates with time)
    pub fn duration_factor(&self) -> f64 {
        let x = self.duration;
        if x < 6.0 {
            0.75
        } else if x < 24.0 {
            0.85 + (x - 6.0) / 60.0
        } else {
            f64::min(1.0, 0.95 + (x - 24.0) / 200.0)
        }
    }

    /// Calculates the storm surge amplifier (1.0 when no significant surge)
    pub fn storm_surge_factor(&self) -> f64 {
        let s = self.storm_surge;
        if s < 0.5 {
            1.0
        } else if s < 2.0 {
            1.1 + (s - 0.5) / 10.0
        } else {
            f64::min(1.3, 1.2 + (s - 2.0) / 20.0)
        }
    }

    /// Calculates the overall wind stress factor on [0, 1]
    pub fn stress_factor(&self) -> f64 {
        let base = self.sustained_wind_stress() * 0.45 + self.gust_stress() * 0.55;
        f64::min(
            1.0,
            base * self.duration_factor() * self.storm_surge_factor() * self.severity.multiplier(),
        )
    }

    /// Returns the event information with the sub-factor breakdown
    pub fn info(&self) -> EventInfo {
        EventInfo {
            event_type: EventKind::HighWind,
            event_name: self.name.clone(),
            severity: self.severity,
            stress_factor: round3(self.stress_factor()),
            details: EventDetails::HighWind {
                sustained_wind_speed_kmh: self.sustained_wind_speed,
                gust_speed_kmh: self.gust_speed,
                duration_hours: self.duration,
                wind_direction: self.wind_direction.clone(),
                storm_surge_m: self.storm_surge,
            },
            components: EventComponents::HighWind {
                sustained_wind_stress: round3(self.sustained_wind_stress()),
                gust_stress: round3(self.gust_stress()),
                duration_factor: round3(self.duration_factor()),
                storm_surge_factor: round3(self.storm_surge_factor()),
            },
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
