use crate::base::{AssetConfig, EventConfig, ScenarioConfig};

/// Holds sample configurations for tests and examples
pub struct SampleConfigs {}

impl SampleConfigs {
    /// Returns a 40-year steel bridge on the coast
    pub fn asset_steel_bridge() -> AssetConfig {
        AssetConfig {
            id: "BRG-001".to_string(),
            kind: "bridge".to_string(),
            material: "steel".to_string(),
            age: 40,
            location: "Coastal City".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            span_length: Some(150.0),
            height_above_water: Some(12.0),
            load_capacity: Some(80.0),
            foundation_type: Some("pile".to_string()),
            floors: None,
            height: None,
            floor_area: None,
            foundation_depth: None,
            has_basement: None,
            cooling_system: None,
            length: None,
            width: None,
            traffic_volume: None,
            drainage_quality: None,
            elevation: None,
        }
    }

    /// Returns a 60-year concrete high-rise with a basement and natural
    /// ventilation only
    pub fn asset_concrete_building() -> AssetConfig {
        AssetConfig {
            id: "BLD-001".to_string(),
            kind: "building".to_string(),
            material: "concrete".to_string(),
            age: 60,
            location: "Desert City".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            span_length: None,
            height_above_water: None,
            load_capacity: None,
            foundation_type: None,
            floors: Some(15),
            height: Some(45.0),
            floor_area: Some(3000.0),
            foundation_depth: Some(5.0),
            has_basement: Some(true),
            cooling_system: Some("natural".to_string()),
            length: None,
            width: None,
            traffic_volume: None,
            drainage_quality: None,
            elevation: None,
        }
    }

    /// Returns an extreme coastal flood event
    pub fn event_extreme_flood() -> EventConfig {
        EventConfig {
            kind: "flood".to_string(),
            severity: "extreme".to_string(),
            name: Some("Extreme Coastal Flood".to_string()),
            duration: Some(24.0),
            rainfall_intensity: Some(120.0),
            water_level: Some(5.0),
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

    /// Returns an extreme desert heatwave event
    pub fn event_extreme_heatwave() -> EventConfig {
        EventConfig {
            kind: "heatwave".to_string(),
            severity: "extreme".to_string(),
            name: Some("Extreme Desert Heatwave".to_string()),
            duration: Some(12.0),
            rainfall_intensity: None,
            water_level: None,
            flow_velocity: None,
            max_temperature: Some(48.0),
            min_temperature: Some(35.0),
            humidity: Some(30.0),
            solar_radiation: None,
            sustained_wind_speed: None,
            gust_speed: None,
            wind_direction: None,
            storm_surge: None,
        }
    }

    /// Returns the 40-year steel bridge paired with the extreme flood
    pub fn steel_bridge_flood() -> (AssetConfig, EventConfig) {
        (
            SampleConfigs::asset_steel_bridge(),
            SampleConfigs::event_extreme_flood(),
        )
    }

    /// Returns the 60-year concrete building paired with the extreme
    /// heatwave
    pub fn concrete_building_heatwave() -> (AssetConfig, EventConfig) {
        (
            SampleConfigs::asset_concrete_building(),
            SampleConfigs::event_extreme_heatwave(),
        )
    }

    /// Returns a baseline scenario and a reinforced variant of the steel
    /// bridge in the extreme flood
    pub fn bridge_flood_scenarios() -> Vec<ScenarioConfig> {
        vec![
            ScenarioConfig {
                scenario_id: "baseline".to_string(),
                name: "Baseline".to_string(),
                description: "No reinforcement".to_string(),
                infrastructure: SampleConfigs::asset_steel_bridge(),
                climate_event: SampleConfigs::event_extreme_flood(),
                reinforcements: Vec::new(),
            },
            ScenarioConfig {
                scenario_id: "reinforced".to_string(),
                name: "Foundation + Deck".to_string(),
                description: "Foundation strengthening with deck rehabilitation".to_string(),
                infrastructure: SampleConfigs::asset_steel_bridge(),
                climate_event: SampleConfigs::event_extreme_flood(),
                reinforcements: vec![
                    "bridge_foundation_strengthening".to_string(),
                    "bridge_deck_rehabilitation".to_string(),
                ],
            },
        ]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
