use crate::SimError;
use serde::Serialize;

/// Defines how a strategy modification combines with its target parameter
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModOperation {
    Multiply,
    Add,
    Set,
}

/// Holds a single parameter modification of a reinforcement strategy
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Modification {
    /// Target parameter name, e.g. "flood_resistance" or "integrity_boost"
    pub parameter: &'static str,

    /// Value combined according to the operation
    pub value: f64,

    /// Combination operation
    pub operation: ModOperation,
}

/// Holds an immutable reinforcement strategy from the catalog
///
/// Strategies are referenced by id from scenarios; multiplicative
/// "*_resistance" modifications reduce stress and additive
/// "integrity_boost" modifications raise the baseline integrity (see
/// [`crate::scenario::Scenario::run_analysis`]).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ReinforcementStrategy {
    /// Catalog identifier
    pub id: &'static str,

    /// Display name
    pub name: &'static str,

    /// What the strategy entails
    pub description: &'static str,

    /// Relative cost multiplier (> 0)
    pub cost_factor: f64,

    /// Parameter modifications applied by this strategy
    pub modifications: &'static [Modification],
}

impl ReinforcementStrategy {
    /// Returns the full strategy catalog in its canonical order
    pub fn catalog() -> [ReinforcementStrategy; 9] {
        [
            ReinforcementStrategy {
                id: "bridge_foundation_strengthening",
                name: "Foundation Strengthening",
                description: "Add supplemental piling and scour protection",
                cost_factor: 2.5,
                modifications: &[
                    Modification {
                        parameter: "flood_resistance",
                        value: 0.6,
                        operation: ModOperation::Multiply,
                    },
                    Modification {
                        parameter: "integrity_boost",
                        value: 15.0,
                        operation: ModOperation::Add,
                    },
                ],
            },
            ReinforcementStrategy {
                id: "bridge_wind_bracing",
                name: "Wind Bracing Installation",
                description: "Add cross-bracing and cable stays",
                cost_factor: 1.8,
                modifications: &[
                    Modification {
                        parameter: "wind_resistance",
                        value: 0.5,
                        operation: ModOperation::Multiply,
                    },
                    Modification {
                        parameter: "integrity_boost",
                        value: 10.0,
                        operation: ModOperation::Add,
                    },
                ],
            },
            ReinforcementStrategy {
                id: "bridge_deck_rehabilitation",
                name: "Deck Rehabilitation",
                description: "Replace deteriorated deck and improve drainage",
                cost_factor: 2.0,
                modifications: &[
                    Modification {
                        parameter: "overall_resistance",
                        value: 0.7,
                        operation: ModOperation::Multiply,
                    },
                    Modification {
                        parameter: "integrity_boost",
                        value: 20.0,
                        operation: ModOperation::Add,
                    },
                ],
            },
            ReinforcementStrategy {
                id: "building_flood_barriers",
                name: "Flood Barrier System",
                description: "Install removable flood panels and waterproofing",
                cost_factor: 1.5,
                modifications: &[
                    Modification {
                        parameter: "flood_resistance",
                        value: 0.5,
                        operation: ModOperation::Multiply,
                    },
                    Modification {
                        parameter: "integrity_boost",
                        value: 12.0,
                        operation: ModOperation::Add,
                    },
                ],
            },
            ReinforcementStrategy {
                id: "building_cooling_upgrade",
                name: "Enhanced Cooling System",
                description: "Upgrade HVAC and install reflective coating",
                cost_factor: 1.7,
                modifications: &[
                    Modification {
                        parameter: "heat_resistance",
                        value: 0.4,
                        operation: ModOperation::Multiply,
                    },
                    Modification {
                        parameter: "integrity_boost",
                        value: 8.0,
                        operation: ModOperation::Add,
                    },
                ],
            },
            ReinforcementStrategy {
                id: "building_structural_reinforcement",
                name: "Structural Reinforcement",
                description: "Strengthen connections and add wind bracing",
                cost_factor: 2.2,
                modifications: &[
                    Modification {
                        parameter: "wind_resistance",
                        value: 0.55,
                        operation: ModOperation::Multiply,
                    },
                    Modification {
                        parameter: "integrity_boost",
                        value: 15.0,
                        operation: ModOperation::Add,
                    },
                ],
            },
            ReinforcementStrategy {
                id: "road_drainage_improvement",
                name: "Drainage System Upgrade",
                description: "Enhance storm drains and retention capacity",
                cost_factor: 1.6,
                modifications: &[
                    Modification {
                        parameter: "flood_resistance",
                        value: 0.45,
                        operation: ModOperation::Multiply,
                    },
                    Modification {
                        parameter: "integrity_boost",
                        value: 10.0,
                        operation: ModOperation::Add,
                    },
                ],
            },
            ReinforcementStrategy {
                id: "road_heat_resistant_surface",
                name: "Heat-Resistant Surfacing",
                description: "Apply cool pavement treatment and polymer-modified asphalt",
                cost_factor: 1.4,
                modifications: &[
                    Modification {
                        parameter: "heat_resistance",
                        value: 0.5,
                        operation: ModOperation::Multiply,
                    },
                    Modification {
                        parameter: "integrity_boost",
                        value: 10.0,
                        operation: ModOperation::Add,
                    },
                ],
            },
            ReinforcementStrategy {
                id: "road_elevation",
                name: "Roadway Elevation",
                description: "Raise critical sections above flood levels",
                cost_factor: 3.0,
                modifications: &[
                    Modification {
                        parameter: "flood_resistance",
                        value: 0.3,
                        operation: ModOperation::Multiply,
                    },
                    Modification {
                        parameter: "integrity_boost",
                        value: 18.0,
                        operation: ModOperation::Add,
                    },
                ],
            },
        ]
    }

    /// Looks up a strategy by its catalog id
    pub fn find(id: &str) -> Result<ReinforcementStrategy, SimError> {
        ReinforcementStrategy::catalog()
            .into_iter()
            .find(|strategy| strategy.id == id)
            .ok_or_else(|| SimError::UnsupportedVariant {
                kind: "reinforcement strategy",
                value: id.to_string(),
            })
    }
}

/// Holds one entry of the read-only strategy catalog view
#[derive(Clone, Copy, Debug, Serialize)]
pub struct StrategyCatalogEntry {
    /// Catalog identifier
    pub id: &'static str,

    /// Display name
    pub name: &'static str,

    /// What the strategy entails
    pub description: &'static str,

    /// Relative cost multiplier
    pub cost_factor: f64,
}

/// Returns the strategy catalog view exposed to the transport layer
pub fn strategy_catalog() -> Vec<StrategyCatalogEntry> {
    ReinforcementStrategy::catalog()
        .iter()
        .map(|strategy| StrategyCatalogEntry {
            id: strategy.id,
            name: strategy.name,
            description: strategy.description,
            cost_factor: strategy.cost_factor,
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{strategy_catalog, ModOperation, ReinforcementStrategy};
    use crate::SimError;

    #[test]
    fn catalog_lookup_works() {
        let strategy = ReinforcementStrategy::find("road_elevation").unwrap();
        assert_eq!(strategy.name, "Roadway Elevation");
        assert_eq!(strategy.cost_factor, 3.0);
        assert_eq!(strategy.modifications[0].parameter, "flood_resistance");
        assert_eq!(strategy.modifications[0].operation, ModOperation::Multiply);

        assert_eq!(
            ReinforcementStrategy::find("bridge_teleportation"),
            Err(SimError::UnsupportedVariant {
                kind: "reinforcement strategy",
                value: "bridge_teleportation".to_string(),
            })
        );
    }

    #[test]
    fn catalog_is_well_formed() {
        let catalog = ReinforcementStrategy::catalog();
        assert_eq!(catalog.len(), 9);
        for strategy in &catalog {
            assert!(strategy.cost_factor > 0.0);
            assert!(!strategy.modifications.is_empty());
        }
        assert_eq!(strategy_catalog().len(), 9);
    }
}
