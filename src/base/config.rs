use crate::asset::{Bridge, Building, InfrastructureAsset, Road};
use crate::base::{AssetKind, CoolingKind, DrainageKind, EventKind, FoundationKind, MaterialKind, Severity};
use crate::event::{ClimateEvent, FloodEvent, HeatwaveEvent, HighWindEvent};
use crate::SimError;
use serde::{Deserialize, Serialize};

/// Holds the configuration of an infrastructure asset
///
/// The configuration is a flat mapping as produced by the transport layer.
/// Variant-specific fields are optional; absent ones take the documented
/// defaults during [`AssetConfig::build`]. Building never mutates the
/// configuration, so the same config can be built repeatedly.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AssetConfig {
    /// Unique asset identifier
    pub id: String,

    /// Asset type label: "bridge", "building", or "road"
    #[serde(rename = "type")]
    pub kind: String,

    /// Material label, e.g. "steel" or "reinforced_concrete"
    pub material: String,

    /// Age in years
    pub age: u32,

    /// Location label (opaque)
    pub location: String,

    /// Latitude (opaque metadata, default 0)
    #[serde(default)]
    pub latitude: f64,

    /// Longitude (opaque metadata, default 0)
    #[serde(default)]
    pub longitude: f64,

    /// Bridge: span length in meters (default 100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span_length: Option<f64>,

    /// Bridge: deck height above normal water level in meters (default 10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_above_water: Option<f64>,

    /// Bridge: load capacity in tons (default 50)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_capacity: Option<f64>,

    /// Bridge: foundation type label (default "pile")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foundation_type: Option<String>,

    /// Building: number of floors (default 5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<u32>,

    /// Building: height in meters (default 15)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Building: floor area in square meters (default 1000)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_area: Option<f64>,

    /// Building: foundation depth in meters (default 3)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foundation_depth: Option<f64>,

    /// Building: whether a basement exists (default false)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_basement: Option<bool>,

    /// Building: cooling system label (default "mechanical")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling_system: Option<String>,

    /// Road: length in kilometers (default 5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    /// Road: width in meters (default 10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Road: traffic volume in vehicles per day (default 10000)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_volume: Option<u32>,

    /// Road: drainage quality label (default "good")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drainage_quality: Option<String>,

    /// Road: elevation above sea level in meters (default 0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

impl AssetConfig {
    /// Parses a configuration from a JSON string
    ///
    /// Missing required fields and unparseable numeric fields are reported
    /// as [`SimError::InvalidInput`] before any asset is constructed.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json).map_err(|e| SimError::InvalidInput(e.to_string()))
    }

    /// Resolves labels and defaults, then constructs the asset
    ///
    /// Unknown type, material, foundation, drainage, or cooling labels are
    /// rejected with [`SimError::UnsupportedVariant`]; in that case no asset
    /// is constructed.
    pub fn build(&self) -> Result<InfrastructureAsset, SimError> {
        let kind = AssetKind::from_label(&self.kind)?;
        let material = MaterialKind::from_label(&self.material)?;
        match kind {
            AssetKind::Bridge => Ok(InfrastructureAsset::Bridge(Bridge {
                id: self.id.clone(),
                material,
                age: self.age,
                location: self.location.clone(),
                latitude: self.latitude,
                longitude: self.longitude,
                span_length: self.span_length.unwrap_or(100.0),
                height_above_water: self.height_above_water.unwrap_or(10.0),
                load_capacity: self.load_capacity.unwrap_or(50.0),
                foundation: FoundationKind::from_label(self.foundation_type.as_deref().unwrap_or("pile"))?,
            })),
            AssetKind::Building => Ok(InfrastructureAsset::Building(Building {
                id: self.id.clone(),
                material,
                age: self.age,
                location: self.location.clone(),
                latitude: self.latitude,
                longitude: self.longitude,
                floors: self.floors.unwrap_or(5),
                height: self.height.unwrap_or(15.0),
                floor_area: self.floor_area.unwrap_or(1000.0),
                foundation_depth: self.foundation_depth.unwrap_or(3.0),
                has_basement: self.has_basement.unwrap_or(false),
                cooling: CoolingKind::from_label(self.cooling_system.as_deref().unwrap_or("mechanical"))?,
            })),
            AssetKind::Road => Ok(InfrastructureAsset::Road(Road {
                id: self.id.clone(),
                material,
                age: self.age,
                location: self.location.clone(),
                latitude: self.latitude,
                longitude: self.longitude,
                length: self.length.unwrap_or(5.0),
                width: self.width.unwrap_or(10.0),
                traffic_volume: self.traffic_volume.unwrap_or(10000),
                drainage: DrainageKind::from_label(self.drainage_quality.as_deref().unwrap_or("good"))?,
                elevation: self.elevation.unwrap_or(0.0),
            })),
        }
    }
}

/// Holds the configuration of a climate event
///
/// Variant-specific fields are optional; absent ones take the documented
/// defaults during [`EventConfig::build`]. The derived quantities
/// (flood flow velocity, heatwave solar radiation) are estimated here when
/// absent, so construction of the event itself is total.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EventConfig {
    /// Event type label: "flood", "heatwave", or "high_wind"
    #[serde(rename = "type")]
    pub kind: String,

    /// Severity label (default "moderate")
    #[serde(default = "default_severity")]
    pub severity: String,

    /// Display name (defaults to a per-variant name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Duration in hours (flood, high wind) or days (heatwave);
    /// defaults: flood 12 h, heatwave 5 d, high wind 8 h
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Flood: rainfall intensity in mm/hour (default 50)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall_intensity: Option<f64>,

    /// Flood: water level above normal in meters (default 2)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_level: Option<f64>,

    /// Flood: flow velocity in m/s (derived from water level when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_velocity: Option<f64>,

    /// Heatwave: daytime maximum temperature in Celsius (default 40)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_temperature: Option<f64>,

    /// Heatwave: nighttime minimum temperature in Celsius (default 28)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_temperature: Option<f64>,

    /// Heatwave: relative humidity in percent (default 50)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,

    /// Heatwave: peak solar radiation in W/m2 (derived from the maximum
    /// temperature when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar_radiation: Option<f64>,

    /// High wind: sustained wind speed in km/h (default 100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustained_wind_speed: Option<f64>,

    /// High wind: gust speed in km/h (default 130)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gust_speed: Option<f64>,

    /// High wind: wind direction label (opaque, default "variable")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<String>,

    /// High wind: storm surge in meters (default 0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storm_surge: Option<f64>,
}

fn default_severity() -> String {
    "moderate".to_string()
}

impl EventConfig {
    /// Parses a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json).map_err(|e| SimError::InvalidInput(e.to_string()))
    }

    /// Resolves labels, defaults, and derived quantities, then constructs
    /// the event
    pub fn build(&self) -> Result<ClimateEvent, SimError> {
        let kind = EventKind::from_label(&self.kind)?;
        let severity = Severity::from_label(&self.severity)?;
        match kind {
            EventKind::Flood => {
                let water_level = self.water_level.unwrap_or(2.0);
                Ok(ClimateEvent::Flood(FloodEvent {
                    name: self.name.clone().unwrap_or_else(|| "Flood Event".to_string()),
                    severity,
                    rainfall_intensity: self.rainfall_intensity.unwrap_or(50.0),
                    water_level,
                    flow_velocity: self
                        .flow_velocity
                        .unwrap_or_else(|| FloodEvent::estimate_flow_velocity(water_level)),
                    duration: self.duration.unwrap_or(12.0),
                }))
            }
            EventKind::Heatwave => {
                let max_temperature = self.max_temperature.unwrap_or(40.0);
                Ok(ClimateEvent::Heatwave(HeatwaveEvent {
                    name: self.name.clone().unwrap_or_else(|| "Heatwave Event".to_string()),
                    severity,
                    max_temperature,
                    min_temperature: self.min_temperature.unwrap_or(28.0),
                    duration: self.duration.unwrap_or(5.0),
                    humidity: self.humidity.unwrap_or(50.0),
                    solar_radiation: self
                        .solar_radiation
                        .unwrap_or_else(|| HeatwaveEvent::estimate_solar_radiation(max_temperature)),
                }))
            }
            EventKind::HighWind => Ok(ClimateEvent::HighWind(HighWindEvent {
                name: self.name.clone().unwrap_or_else(|| "High Wind Event".to_string()),
                severity,
                sustained_wind_speed: self.sustained_wind_speed.unwrap_or(100.0),
                gust_speed: self.gust_speed.unwrap_or(130.0),
                duration: self.duration.unwrap_or(8.0),
                wind_direction: self.wind_direction.clone().unwrap_or_else(|| "variable".to_string()),
                storm_surge: self.storm_surge.unwrap_or(0.0),
            })),
        }
    }
}

/// Holds the configuration of a what-if scenario
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScenarioConfig {
    /// Unique scenario identifier
    pub scenario_id: String,

    /// Display name
    pub name: String,

    /// Free-form description (default empty)
    #[serde(default)]
    pub description: String,

    /// Asset configuration
    pub infrastructure: AssetConfig,

    /// Climate event configuration
    pub climate_event: EventConfig,

    /// Reinforcement strategy ids applied in order (default none)
    #[serde(default)]
    pub reinforcements: Vec<String>,
}

impl ScenarioConfig {
    /// Parses a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json).map_err(|e| SimError::InvalidInput(e.to_string()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
