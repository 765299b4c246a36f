use crate::base::{DrainageKind, MaterialKind};

/// Implements the road asset model
#[derive(Clone, Debug, PartialEq)]
pub struct Road {
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

    /// Length in kilometers
    pub length: f64,

    /// Width in meters
    pub width: f64,

    /// Traffic volume in vehicles per day
    pub traffic_volume: u32,

    /// Drainage quality grade
    pub drainage: DrainageKind,

    /// Elevation above sea level in meters
    pub elevation: f64,
}

impl Road {
    /// Calculates the vulnerability to flooding on [0, 1]
    ///
    /// Drainage capacity against rainfall accumulation, with standing water
    /// above 30 cm blocking vehicle passage entirely.
    pub fn flood_vulnerability(&self, water_level: f64, rainfall_intensity: f64) -> f64 {
        let drainage_factor = match self.drainage {
            DrainageKind::Excellent => 0.3,
            DrainageKind::Good => 0.6,
            DrainageKind::Fair => 0.8,
            DrainageKind::Poor => 1.0,
        };
        let rain_factor = if rainfall_intensity < 20.0 {
            0.2
        } else if rainfall_intensity < 50.0 {
            0.4 + (rainfall_intensity - 20.0) / 60.0
        } else {
            f64::min(1.0, 0.9 + (rainfall_intensity - 50.0) / 100.0)
        };
        let water_factor = if water_level > 0.3 {
            1.0
        } else if water_level > 0.15 {
            0.7
        } else {
            0.3
        };
        f64::min(1.0, rain_factor * drainage_factor * water_factor)
    }

    /// Calculates the vulnerability to extreme heat on [0, 1]
    ///
    /// Asphalt ruts and deforms under prolonged heat; concrete fares better.
    /// Heavy traffic amplifies the thermal damage.
    pub fn heat_vulnerability(&self, temperature: f64, duration_days: f64) -> f64 {
        let material_heat_factor = if self.material == MaterialKind::Concrete { 0.5 } else { 1.0 };
        let temp_factor = if temperature < 35.0 {
            0.1
        } else if temperature < 45.0 {
            0.4 + (temperature - 35.0) / 25.0
        } else {
            f64::min(1.0, 0.8 + (temperature - 45.0) / 30.0)
        };
        let duration_factor = f64::min(1.0, 0.3 + duration_days.floor() / 15.0);
        let traffic_factor = if self.traffic_volume > 50000 {
            1.2
        } else if self.traffic_volume > 20000 {
            1.0
        } else {
            0.8
        };
        f64::min(1.0, material_heat_factor * temp_factor * duration_factor * traffic_factor)
    }

    /// Calculates the vulnerability to high winds on [0, 1]
    ///
    /// Roads carry no dedicated wind rule; debris and visibility are the
    /// only stimuli, capped at 0.3.
    pub fn wind_vulnerability(&self, wind_speed: f64) -> f64 {
        f64::min(0.3, wind_speed / 400.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Road;
    use crate::base::{DrainageKind, MaterialKind};

    fn road(material: MaterialKind, traffic_volume: u32, drainage: DrainageKind) -> Road {
        Road {
            id: "RD-1".to_string(),
            material,
            age: 20,
            location: "Valley".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            length: 5.0,
            width: 10.0,
            traffic_volume,
            drainage,
            elevation: 0.0,
        }
    }

    #[test]
    fn flood_vulnerability_works() {
        let poor = road(MaterialKind::Concrete, 10000, DrainageKind::Poor);
        // heavy rain, deep standing water
        assert!((poor.flood_vulnerability(0.5, 60.0) - 1.0).abs() < 1e-15);

        let excellent = road(MaterialKind::Concrete, 10000, DrainageKind::Excellent);
        // rain 0.5, drainage 0.3, shallow water 0.3
        let v = excellent.flood_vulnerability(0.1, 26.0);
        assert!((v - 0.5 * 0.3 * 0.3).abs() < 1e-15);
    }

    #[test]
    fn heat_vulnerability_favors_concrete() {
        let concrete = road(MaterialKind::Concrete, 10000, DrainageKind::Good);
        let asphalt = road(MaterialKind::Composite, 10000, DrainageKind::Good);
        let v_concrete = concrete.heat_vulnerability(44.0, 9.0);
        let v_asphalt = asphalt.heat_vulnerability(44.0, 9.0);
        assert!((v_concrete * 2.0 - v_asphalt).abs() < 1e-15);
    }

    #[test]
    fn traffic_amplifies_heat_damage() {
        let light = road(MaterialKind::Composite, 10000, DrainageKind::Good);
        let medium = road(MaterialKind::Composite, 30000, DrainageKind::Good);
        let heavy = road(MaterialKind::Composite, 80000, DrainageKind::Good);
        let t = 40.0;
        let d = 6.0;
        assert!(light.heat_vulnerability(t, d) < medium.heat_vulnerability(t, d));
        assert!(medium.heat_vulnerability(t, d) < heavy.heat_vulnerability(t, d));
    }

    #[test]
    fn wind_vulnerability_is_capped() {
        let r = road(MaterialKind::Concrete, 10000, DrainageKind::Good);
        assert!((r.wind_vulnerability(100.0) - 0.25).abs() < 1e-15);
        assert_eq!(r.wind_vulnerability(200.0), 0.3);
    }
}
