use crate::base::{round1, round3, EventKind, Severity};
use crate::event::{EventComponents, EventDetails, EventInfo};

/// Implements the heatwave event stress model
#[derive(Clone, Debug, PartialEq)]
pub struct HeatwaveEvent {
    /// Display name
    pub name: String,

    /// Severity grade
    pub severity: Severity,

    /// Daytime maximum temperature in Celsius
    pub max_temperature: f64,

    /// Nighttime minimum temperature in Celsius
    pub min_temperature: f64,

    /// Duration in days
    pub duration: f64,

    /// Relative humidity in percent
    pub humidity: f64,

    /// Peak solar radiation in W/m2 (reported, not a stress input)
    pub solar_radiation: f64,
}

impl HeatwaveEvent {
    /// Estimates the peak solar radiation from the maximum temperature
    ///
    /// Typical heatwave values are 800-1000 W/m2, capped at 1200.
    pub fn estimate_solar_radiation(max_temperature: f64) -> f64 {
        f64::min(1200.0, 700.0 + (max_temperature - 30.0) * 15.0)
    }

    /// Calculates the thermal stress sub-factor from the maximum temperature
    ///
    /// Thresholds (Celsius): moderate 35-38, high 38-42, extreme 42+.
    pub fn temperature_stress(&self) -> f64 {
        let x = self.max_temperature;
        if x < 35.0 {
            0.2
        } else if x < 38.0 {
            0.4 + (x - 35.0) / 10.0
        } else if x < 42.0 {
            0.7 + (x - 38.0) / 15.0
        } else {
            f64::min(1.0, 0.9 + (x - 42.0) / 20.0)
        }
    }

    /// Calculates the expansion/contraction sub-factor from the daily
    /// temperature range (thermal cycling)
    pub fn thermal_expansion_stress(&self) -> f64 {
        let range = self.max_temperature - self.min_temperature;
        if range < 10.0 {
            0.3
        } else if range < 20.0 {
            0.5 + (range - 10.0) / 30.0
        } else {
            f64::min(1.0, 0.75 + (range - 20.0) / 40.0)
        }
    }

    /// Calculates the cumulative exposure sub-factor from the duration
    pub fn duration_stress(&self) -> f64 {
        let x = self.duration;
        if x < 3.0 {
            0.6
        } else if x < 7.0 {
            0.75 + (x - 3.0) / 20.0
        } else {
            f64::min(1.0, 0.9 + (x - 7.0) / 30.0)
        }
    }

    /// Calculates the humidity modifier
    ///
    /// High humidity increases heat stress on materials; the modifier can
    /// exceed 1 above 70% humidity.
    pub fn humidity_modifier(&self) -> f64 {
        let h = self.humidity;
        if h < 40.0 {
            0.8
        } else if h < 70.0 {
            0.9 + (h - 40.0) / 300.0
        } else {
            1.0 + (h - 70.0) / 100.0
        }
    }

    /// Calculates the overall heatwave stress factor on [0, 1]
    pub fn stress_factor(&self) -> f64 {
        let base =
            self.temperature_stress() * 0.40 + self.thermal_expansion_stress() * 0.30 + self.duration_stress() * 0.30;
        f64::min(1.0, base * self.humidity_modifier() * self.severity.multiplier())
    }

    /// Returns the event information with the sub-factor breakdown
    pub fn info(&self) -> EventInfo {
        EventInfo {
            event_type: EventKind::Heatwave,
            event_name: self.name.clone(),
            severity: self.severity,
            stress_factor: round3(self.stress_factor()),
            details: EventDetails::Heatwave {
                max_temperature_c: self.max_temperature,
                min_temperature_c: self.min_temperature,
                duration_days: self.duration,
                humidity_percent: self.humidity,
                solar_radiation_w_m2: round1(self.solar_radiation),
            },
            components: EventComponents::Heatwave {
                temperature_stress: round3(self.temperature_stress()),
                thermal_expansion_stress: round3(self.thermal_expansion_stress()),
                duration_stress: round3(self.duration_stress()),
                humidity_modifier: round3(self.humidity_modifier()),
            },
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::HeatwaveEvent;
    use crate::base::Severity;

    fn heatwave(max_t: f64, min_t: f64, duration: f64, humidity: f64, severity: Severity) -> HeatwaveEvent {
        HeatwaveEvent {
            name: "Heatwave Event".to_string(),
            severity,
            max_temperature: max_t,
            min_temperature: min_t,
            duration,
            humidity,
            solar_radiation: HeatwaveEvent::estimate_solar_radiation(max_t),
        }
    }

    #[test]
    fn temperature_breakpoints_work() {
        assert_eq!(heatwave(30.0, 25.0, 2.0, 50.0, Severity::Low).temperature_stress(), 0.2);
        let mid = heatwave(36.5, 25.0, 2.0, 50.0, Severity::Low);
        assert!((mid.temperature_stress() - 0.55).abs() < 1e-15);
        let hot = heatwave(40.0, 25.0, 2.0, 50.0, Severity::Low);
        assert!((hot.temperature_stress() - (0.7 + 2.0 / 15.0)).abs() < 1e-15);
        let extreme = heatwave(50.0, 25.0, 2.0, 50.0, Severity::Low);
        assert_eq!(extreme.temperature_stress(), 1.0);
    }

    #[test]
    fn expansion_and_duration_work() {
        let event = heatwave(45.0, 30.0, 10.0, 50.0, Severity::High);
        // range 15 -> 0.5 + 5/30
        assert!((event.thermal_expansion_stress() - (0.5 + 5.0 / 30.0)).abs() < 1e-15);
        // 10 days -> 0.9 + 3/30
        assert!((event.duration_stress() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn humidity_modifier_can_exceed_one() {
        let humid = heatwave(40.0, 30.0, 5.0, 90.0, Severity::Moderate);
        assert!((humid.humidity_modifier() - 1.2).abs() < 1e-15);
        let dry = heatwave(40.0, 30.0, 5.0, 20.0, Severity::Moderate);
        assert_eq!(dry.humidity_modifier(), 0.8);
    }

    #[test]
    fn stress_factor_is_clamped_for_all_severities() {
        for severity in [Severity::Low, Severity::Moderate, Severity::High, Severity::Extreme] {
            let event = heatwave(50.0, 20.0, 20.0, 100.0, severity);
            let stress = event.stress_factor();
            assert!((0.0..=1.0).contains(&stress));
        }
    }

    #[test]
    fn solar_radiation_estimate_works() {
        assert_eq!(HeatwaveEvent::estimate_solar_radiation(40.0), 850.0);
        assert_eq!(HeatwaveEvent::estimate_solar_radiation(80.0), 1200.0);
    }
}
