use crate::base::{AssetKind, EventConfig, MaterialKind, MaterialProperties};
use crate::SimError;
use serde::Serialize;

/// Holds one entry of the read-only material catalog
#[derive(Clone, Copy, Debug, Serialize)]
pub struct MaterialCatalogEntry {
    /// Material identifier
    pub value: MaterialKind,

    /// Display name
    pub name: &'static str,

    /// Physical properties
    pub properties: MaterialProperties,
}

/// Returns the material catalog exposed to the transport layer
pub fn material_catalog() -> Vec<MaterialCatalogEntry> {
    MaterialKind::all()
        .into_iter()
        .map(|kind| MaterialCatalogEntry {
            value: kind,
            name: kind.properties().name,
            properties: kind.properties(),
        })
        .collect()
}

/// Holds one entry of the read-only asset type catalog
#[derive(Clone, Debug, Serialize)]
pub struct AssetTypeCatalogEntry {
    /// Asset type identifier
    pub value: AssetKind,

    /// Display name
    pub name: &'static str,

    /// Short description
    pub description: String,
}

/// Returns the asset type catalog exposed to the transport layer
pub fn asset_type_catalog() -> Vec<AssetTypeCatalogEntry> {
    AssetKind::all()
        .into_iter()
        .map(|kind| {
            let name = match kind {
                AssetKind::Bridge => "Bridge",
                AssetKind::Building => "Building",
                AssetKind::Road => "Road",
            };
            AssetTypeCatalogEntry {
                value: kind,
                name,
                description: format!("{} infrastructure asset", name),
            }
        })
        .collect()
}

/// Holds a named preset climate scenario template
#[derive(Clone, Debug)]
pub struct ClimatePreset {
    /// Preset identifier
    pub id: &'static str,

    /// Ready-to-build event configuration
    pub config: EventConfig,
}

/// Holds one entry of the read-only preset catalog view
#[derive(Clone, Debug, Serialize)]
pub struct PresetCatalogEntry {
    /// Preset identifier
    pub id: &'static str,

    /// Display name
    pub name: String,

    /// Event type label
    #[serde(rename = "type")]
    pub kind: String,

    /// Severity label
    pub severity: String,
}

fn event_template(kind: &str, severity: &str, name: &str) -> EventConfig {
    EventConfig {
        kind: kind.to_string(),
        severity: severity.to_string(),
        name: Some(name.to_string()),
        duration: None,
        rainfall_intensity: None,
        water_level: None,
        flow_velocity: None,
        max_temperature: None,
        min_temperature: None,
        humidity: None,
        solar_radiation: None,
        sustained_wind_speed: None,
        gust_speed: None,
        wind_direction: None,
        storm_surge: None,
    }
}

/// Returns the preset climate scenario templates in catalog order
pub fn climate_presets() -> Vec<ClimatePreset> {
    vec![
        ClimatePreset {
            id: "100year_flood",
            config: EventConfig {
                rainfall_intensity: Some(120.0),
                water_level: Some(4.5),
                duration: Some(24.0),
                flow_velocity: Some(3.5),
                ..event_template("flood", "extreme", "100-Year Flood")
            },
        },
        ClimatePreset {
            id: "moderate_flood",
            config: EventConfig {
                rainfall_intensity: Some(40.0),
                water_level: Some(1.5),
                duration: Some(8.0),
                ..event_template("flood", "moderate", "Moderate Flooding")
            },
        },
        ClimatePreset {
            id: "extreme_heatwave",
            config: EventConfig {
                max_temperature: Some(45.0),
                min_temperature: Some(32.0),
                duration: Some(10.0),
                humidity: Some(40.0),
                ..event_template("heatwave", "extreme", "Extreme Heatwave")
            },
        },
        ClimatePreset {
            id: "moderate_heatwave",
            config: EventConfig {
                max_temperature: Some(38.0),
                min_temperature: Some(28.0),
                duration: Some(5.0),
                humidity: Some(55.0),
                ..event_template("heatwave", "moderate", "Moderate Heatwave")
            },
        },
        ClimatePreset {
            id: "hurricane_winds",
            config: EventConfig {
                sustained_wind_speed: Some(150.0),
                gust_speed: Some(200.0),
                duration: Some(12.0),
                storm_surge: Some(3.0),
                ..event_template("high_wind", "extreme", "Hurricane-Force Winds")
            },
        },
        ClimatePreset {
            id: "severe_storm",
            config: EventConfig {
                sustained_wind_speed: Some(90.0),
                gust_speed: Some(120.0),
                duration: Some(6.0),
                storm_surge: Some(0.5),
                ..event_template("high_wind", "high", "Severe Storm")
            },
        },
    ]
}

/// Looks up a preset climate scenario by id
pub fn climate_preset(id: &str) -> Result<EventConfig, SimError> {
    climate_presets()
        .into_iter()
        .find(|preset| preset.id == id)
        .map(|preset| preset.config)
        .ok_or_else(|| SimError::UnsupportedVariant {
            kind: "climate scenario preset",
            value: id.to_string(),
        })
}

/// Returns the preset catalog view exposed to the transport layer
pub fn preset_catalog() -> Vec<PresetCatalogEntry> {
    climate_presets()
        .into_iter()
        .map(|preset| PresetCatalogEntry {
            id: preset.id,
            name: preset.config.name.clone().unwrap_or_default(),
            kind: preset.config.kind.clone(),
            severity: preset.config.severity.clone(),
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
