use crate::base::{round2, round3, EventKind, Severity};
use crate::event::{EventComponents, EventDetails, EventInfo};

/// Implements the flood event stress model
///
/// Sub-factors are piecewise-linear interpolations between the critical
/// thresholds of each physical input; every sub-factor lands on a 0-1 scale
/// and the composite stress factor is clamped to [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct FloodEvent {
    /// Display name
    pub name: String,

    /// Severity grade
    pub severity: Severity,

    /// Rainfall intensity in mm/hour
    pub rainfall_intensity: f64,

    /// Water level above normal in meters
    pub water_level: f64,

    /// Flow velocity in m/s (drives erosion/scour)
    pub flow_velocity: f64,

    /// Duration in hours
    pub duration: f64,
}

impl FloodEvent {
    /// Estimates the flow velocity from the water level
    ///
    /// Manning's equation approximation: V is about sqrt(depth), capped at 5 m/s.
    pub fn estimate_flow_velocity(water_level: f64) -> f64 {
        f64::min(5.0, f64::sqrt(f64::max(0.1, water_level)))
    }

    /// Calculates the stress sub-factor from rainfall intensity
    ///
    /// Thresholds (mm/h): light < 10, moderate 10-30, heavy 30-100, extreme 100+.
    pub fn rainfall_factor(&self) -> f64 {
        let x = self.rainfall_intensity;
        if x < 10.0 {
            0.2
        } else if x < 30.0 {
            0.4 + (x - 10.0) / 50.0
        } else if x < 100.0 {
            0.7 + (x - 30.0) / 200.0
        } else {
            f64::min(1.0, 0.9 + (x - 100.0) / 300.0)
        }
    }

    /// Calculates the stress sub-factor from the water level
    ///
    /// Thresholds (m): minor < 1, moderate 1-3, major 3-5, catastrophic 5+.
    pub fn water_level_factor(&self) -> f64 {
        let x = self.water_level;
        if x < 1.0 {
            0.3
        } else if x < 3.0 {
            0.5 + (x - 1.0) / 5.0
        } else if x < 5.0 {
            0.8 + (x - 3.0) / 10.0
        } else {
            0.95
        }
    }

    /// Calculates the erosion/scour sub-factor from the flow velocity
    ///
    /// Below 1 m/s is safe; above 3 m/s erosion is severe.
    pub fn erosion_factor(&self) -> f64 {
        let x = self.flow_velocity;
        if x < 1.0 {
            0.2
        } else if x < 2.0 {
            0.4 + (x - 1.0) / 2.5
        } else {
            f64::min(1.0, 0.7 + (x - 2.0) / 5.0)
        }
    }

    /// Calculates the duration amplifier (cumulative damage)
    pub fn duration_factor(&self) -> f64 {
        let x = self.duration;
        if x < 6.0 {
            0.7
        } else if x < 24.0 {
            0.85 + (x - 6.0) / 60.0
        } else {
            f64::min(1.0, 1.0 + (x - 24.0) / 100.0)
        }
    }

    /// Calculates the overall flood stress factor on [0, 1]
    pub fn stress_factor(&self) -> f64 {
        let base = self.rainfall_factor() * 0.25 + self.water_level_factor() * 0.45 + self.erosion_factor() * 0.30;
        f64::min(1.0, base * self.duration_factor() * self.severity.multiplier())
    }

    /// Returns the event information with the sub-factor breakdown
    pub fn info(&self) -> EventInfo {
        EventInfo {
            event_type: EventKind::Flood,
            event_name: self.name.clone(),
            severity: self.severity,
            stress_factor: round3(self.stress_factor()),
            details: EventDetails::Flood {
                rainfall_intensity_mm_hr: self.rainfall_intensity,
                water_level_m: self.water_level,
                flow_velocity_m_s: round2(self.flow_velocity),
                duration_hours: self.duration,
            },
            components: EventComponents::Flood {
                rainfall_stress: round3(self.rainfall_factor()),
                water_level_stress: round3(self.water_level_factor()),
                erosion_stress: round3(self.erosion_factor()),
                duration_amplifier: round3(self.duration_factor()),
            },
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
