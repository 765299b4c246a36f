use crate::base::{CoolingKind, MaterialKind};

/// Implements the building asset model
#[derive(Clone, Debug, PartialEq)]
pub struct Building {
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

    /// Number of floors
    pub floors: u32,

    /// Height in meters
    pub height: f64,

    /// Floor area in square meters
    pub floor_area: f64,

    /// Foundation depth in meters
    pub foundation_depth: f64,

    /// Whether a basement exists
    pub has_basement: bool,

    /// Cooling system kind
    pub cooling: CoolingKind,
}

impl Building {
    /// Calculates the vulnerability to flooding on [0, 1]
    ///
    /// Weighted sum of basement inundation (critical depth 3 m), ground
    /// floor inundation (critical depth 2 m), and foundation undermining.
    pub fn flood_vulnerability(&self, water_level: f64) -> f64 {
        let basement = if self.has_basement && water_level > 0.0 {
            f64::min(1.0, water_level / 3.0)
        } else {
            0.0
        };
        let ground_floor = if water_level > 0.5 {
            f64::min(1.0, water_level / 2.0)
        } else {
            0.0
        };
        let foundation = if water_level > self.foundation_depth { 0.8 } else { 0.2 };
        f64::min(1.0, basement * 0.3 + ground_floor * 0.4 + foundation * 0.3)
    }

    /// Calculates the vulnerability to extreme heat on [0, 1]
    ///
    /// Mechanical cooling strongly mitigates; the material's thermal
    /// expansion coefficient scales the final value.
    pub fn heat_vulnerability(&self, temperature: f64, duration_days: f64) -> f64 {
        let temp_factor = if temperature < 35.0 {
            0.1
        } else if temperature < 40.0 {
            0.3 + (temperature - 35.0) / 10.0
        } else {
            f64::min(1.0, 0.8 + (temperature - 40.0) / 20.0)
        };
        let duration_factor = f64::min(1.0, 0.5 + duration_days.floor() / 20.0);
        let cooling_factor = match self.cooling {
            CoolingKind::Mechanical => 0.4,
            CoolingKind::Natural => 0.7,
            CoolingKind::None => 1.0,
        };
        let thermal_stress = f64::min(1.0, self.material.properties().thermal_expansion * 1e6);
        f64::min(1.0, temp_factor * duration_factor * cooling_factor * thermal_stress)
    }

    /// Calculates the vulnerability to high winds on [0, 1]
    ///
    /// Taller buildings catch more wind load; rigid materials resist it.
    pub fn wind_vulnerability(&self, wind_speed: f64) -> f64 {
        let height_factor = f64::min(1.0, self.height / 100.0);
        let wind_factor = if wind_speed < 100.0 {
            0.1
        } else if wind_speed < 150.0 {
            0.3 + (wind_speed - 100.0) / 100.0
        } else {
            f64::min(1.0, 0.8 + (wind_speed - 150.0) / 100.0)
        };
        let material_factor = match self.material {
            MaterialKind::Steel => 0.5,
            MaterialKind::ReinforcedConcrete => 0.6,
            MaterialKind::Concrete => 0.8,
            MaterialKind::Masonry => 1.0,
            MaterialKind::Wood => 0.9,
            MaterialKind::Composite => 0.4,
        };
        height_factor * wind_factor * material_factor
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Building;
    use crate::base::{CoolingKind, MaterialKind};

    fn building(material: MaterialKind, has_basement: bool, cooling: CoolingKind) -> Building {
        Building {
            id: "BLD-1".to_string(),
            material,
            age: 60,
            location: "Desert City".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            floors: 15,
            height: 45.0,
            floor_area: 3000.0,
            foundation_depth: 5.0,
            has_basement,
            cooling,
        }
    }

    #[test]
    fn flood_vulnerability_works() {
        let b = building(MaterialKind::Concrete, true, CoolingKind::Mechanical);
        // dry: only the baseline foundation risk remains
        assert!((b.flood_vulnerability(0.0) - 0.06).abs() < 1e-15);
        // 1.5 m: basement 0.5, ground floor 0.75, foundation 0.2
        let v = b.flood_vulnerability(1.5);
        assert!((v - (0.5 * 0.3 + 0.75 * 0.4 + 0.2 * 0.3)).abs() < 1e-15);
        // deep water over the foundation depth
        let v = b.flood_vulnerability(6.0);
        assert!((v - (1.0 * 0.3 + 1.0 * 0.4 + 0.8 * 0.3)).abs() < 1e-15);
    }

    #[test]
    fn basement_only_counts_when_present() {
        let with_basement = building(MaterialKind::Concrete, true, CoolingKind::Mechanical);
        let without = building(MaterialKind::Concrete, false, CoolingKind::Mechanical);
        assert!(with_basement.flood_vulnerability(2.0) > without.flood_vulnerability(2.0));
    }

    #[test]
    fn heat_vulnerability_works() {
        // concrete expansion 1e-5 scales to 10 -> clamped at 1.0
        let b = building(MaterialKind::Concrete, false, CoolingKind::None);
        let v = b.heat_vulnerability(48.0, 12.0);
        // temp 1.0 (clamped), duration min(1, 0.5 + 12/20) = 1.0, cooling 1.0
        assert!((v - 1.0).abs() < 1e-15);

        let cooled = building(MaterialKind::Concrete, false, CoolingKind::Mechanical);
        assert!((cooled.heat_vulnerability(48.0, 12.0) - 0.4).abs() < 1e-15);
    }

    #[test]
    fn wind_vulnerability_ranks_materials() {
        let masonry = building(MaterialKind::Masonry, false, CoolingKind::None);
        let steel = building(MaterialKind::Steel, false, CoolingKind::None);
        let composite = building(MaterialKind::Composite, false, CoolingKind::None);
        let v_masonry = masonry.wind_vulnerability(140.0);
        let v_steel = steel.wind_vulnerability(140.0);
        let v_composite = composite.wind_vulnerability(140.0);
        assert!(v_masonry > v_steel && v_steel > v_composite);
        // height factor 0.45, wind factor 0.7
        assert!((v_masonry - 0.45 * 0.7).abs() < 1e-15);
    }
}
