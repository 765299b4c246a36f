use crate::asset::{Bridge, Building, Road};
use crate::base::{round2, round3, AssetKind, CoolingKind, DrainageKind, FoundationKind};
use crate::base::{MaterialKind, MaterialProperties};
use serde::Serialize;

/// Defines an infrastructure asset as one of the supported variants
///
/// Assets are constructed fresh from a configuration for each analysis and
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub enum InfrastructureAsset {
    Bridge(Bridge),
    Building(Building),
    Road(Road),
}

impl InfrastructureAsset {
    /// Returns the asset type
    pub fn kind(&self) -> AssetKind {
        match self {
            InfrastructureAsset::Bridge(..) => AssetKind::Bridge,
            InfrastructureAsset::Building(..) => AssetKind::Building,
            InfrastructureAsset::Road(..) => AssetKind::Road,
        }
    }

    /// Returns the unique asset identifier
    pub fn id(&self) -> &str {
        match self {
            InfrastructureAsset::Bridge(asset) => &asset.id,
            InfrastructureAsset::Building(asset) => &asset.id,
            InfrastructureAsset::Road(asset) => &asset.id,
        }
    }

    /// Returns the construction material
    pub fn material(&self) -> MaterialKind {
        match self {
            InfrastructureAsset::Bridge(asset) => asset.material,
            InfrastructureAsset::Building(asset) => asset.material,
            InfrastructureAsset::Road(asset) => asset.material,
        }
    }

    /// Returns the physical properties of the construction material
    pub fn material_properties(&self) -> MaterialProperties {
        self.material().properties()
    }

    /// Returns the age in years
    pub fn age(&self) -> u32 {
        match self {
            InfrastructureAsset::Bridge(asset) => asset.age,
            InfrastructureAsset::Building(asset) => asset.age,
            InfrastructureAsset::Road(asset) => asset.age,
        }
    }

    /// Returns the location label
    pub fn location(&self) -> &str {
        match self {
            InfrastructureAsset::Bridge(asset) => &asset.location,
            InfrastructureAsset::Building(asset) => &asset.location,
            InfrastructureAsset::Road(asset) => &asset.location,
        }
    }

    /// Calculates the age degradation factor on [0.3, 1]
    ///
    /// Exponential decay with a 50-year half-life, floored at 0.3 (a
    /// structure retains at least 30% of its capacity).
    pub fn age_degradation(&self) -> f64 {
        let half_life = 50.0;
        let factor = f64::exp(-0.693 * f64::from(self.age()) / half_life);
        f64::max(0.3, factor)
    }

    /// Calculates the baseline structural integrity on a 0-100 scale
    /// (rounded to 2 decimals)
    pub fn baseline_integrity(&self) -> f64 {
        let props = self.material_properties();
        let material_factor = props.corrosion_resistance * 0.4 + props.water_resistance * 0.3 + 0.3;
        round2(self.age_degradation() * material_factor * 100.0)
    }

    /// Returns the asset information
    pub fn info(&self) -> AssetInfo {
        let details = match self {
            InfrastructureAsset::Bridge(asset) => AssetDetails::Bridge {
                span_length_m: asset.span_length,
                height_above_water_m: asset.height_above_water,
                load_capacity_tons: asset.load_capacity,
                foundation_type: asset.foundation,
            },
            InfrastructureAsset::Building(asset) => AssetDetails::Building {
                floors: asset.floors,
                height_m: asset.height,
                floor_area_sqm: asset.floor_area,
                foundation_depth_m: asset.foundation_depth,
                has_basement: asset.has_basement,
                cooling_system: asset.cooling,
            },
            InfrastructureAsset::Road(asset) => AssetDetails::Road {
                length_km: asset.length,
                width_m: asset.width,
                traffic_volume_vpd: asset.traffic_volume,
                drainage_quality: asset.drainage,
                elevation_m: asset.elevation,
            },
        };
        let (latitude, longitude) = match self {
            InfrastructureAsset::Bridge(asset) => (asset.latitude, asset.longitude),
            InfrastructureAsset::Building(asset) => (asset.latitude, asset.longitude),
            InfrastructureAsset::Road(asset) => (asset.latitude, asset.longitude),
        };
        AssetInfo {
            asset_id: self.id().to_string(),
            kind: self.kind(),
            material: self.material(),
            age: self.age(),
            location: self.location().to_string(),
            latitude,
            longitude,
            baseline_integrity: self.baseline_integrity(),
            baseline_integrity_original: None,
            age_degradation: round3(self.age_degradation()),
            details,
        }
    }
}

/// Holds the reportable information of an infrastructure asset
#[derive(Clone, Debug, Serialize)]
pub struct AssetInfo {
    /// Unique asset identifier
    pub asset_id: String,

    /// Asset type
    #[serde(rename = "type")]
    pub kind: AssetKind,

    /// Construction material
    pub material: MaterialKind,

    /// Age in years
    pub age: u32,

    /// Location label
    pub location: String,

    /// Latitude (opaque metadata)
    pub latitude: f64,

    /// Longitude (opaque metadata)
    pub longitude: f64,

    /// Baseline structural integrity on a 0-100 scale; after reinforcement
    /// adjustment this carries the boosted value
    pub baseline_integrity: f64,

    /// Integrity before reinforcement adjustment (set only when adjusted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_integrity_original: Option<f64>,

    /// Age degradation factor (rounded to 3 decimals)
    pub age_degradation: f64,

    /// Variant-specific structural parameters
    #[serde(flatten)]
    pub details: AssetDetails,
}

/// Holds the variant-specific structural parameters of an asset
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum AssetDetails {
    Bridge {
        span_length_m: f64,
        height_above_water_m: f64,
        load_capacity_tons: f64,
        foundation_type: FoundationKind,
    },
    Building {
        floors: u32,
        height_m: f64,
        floor_area_sqm: f64,
        foundation_depth_m: f64,
        has_basement: bool,
        cooling_system: CoolingKind,
    },
    Road {
        length_km: f64,
        width_m: f64,
        traffic_volume_vpd: u32,
        drainage_quality: DrainageKind,
        elevation_m: f64,
    },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::base::AssetConfig;

    #[test]
    fn age_degradation_works() {
        let mut config = AssetConfig::from_json(
            r#"{"id":"RD-1","type":"road","material":"concrete","age":0,"location":"Valley"}"#,
        )
        .unwrap();
        assert_eq!(config.build().unwrap().age_degradation(), 1.0);

        config.age = 50;
        let half_life = config.build().unwrap().age_degradation();
        assert!((half_life - 0.5).abs() < 1e-3);

        // ancient asset clamps to the 0.3 floor, not the raw exponential
        config.age = 200;
        assert_eq!(config.build().unwrap().age_degradation(), 0.3);
    }

    #[test]
    fn baseline_integrity_works() {
        let config = AssetConfig::from_json(
            r#"{"id":"RD-1","type":"road","material":"concrete","age":0,"location":"Valley"}"#,
        )
        .unwrap();
        // concrete: 0.7 * 0.4 + 0.6 * 0.3 + 0.3 = 0.76 -> 76.0 at age zero
        assert_eq!(config.build().unwrap().baseline_integrity(), 76.0);
    }

    #[test]
    fn info_round_trips_supplied_fields() {
        let config = AssetConfig::from_json(
            r#"{"id":"BRG-9","type":"bridge","material":"steel","age":40,"location":"Coastal City",
                "latitude":41.9,"longitude":12.5,"span_length":150.0,"height_above_water":12.0,
                "load_capacity":80.0,"foundation_type":"caisson"}"#,
        )
        .unwrap();
        let info = config.build().unwrap().info();
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["asset_id"], "BRG-9");
        assert_eq!(value["type"], "bridge");
        assert_eq!(value["material"], "steel");
        assert_eq!(value["age"], 40);
        assert_eq!(value["latitude"], 41.9);
        assert_eq!(value["span_length_m"], 150.0);
        assert_eq!(value["height_above_water_m"], 12.0);
        assert_eq!(value["load_capacity_tons"], 80.0);
        assert_eq!(value["foundation_type"], "caisson");
    }
}
