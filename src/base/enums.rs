use crate::SimError;
use serde::{Deserialize, Serialize};

/// Defines the construction materials known to the engine
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    Steel,
    Concrete,
    ReinforcedConcrete,
    Wood,
    Masonry,
    Composite,
}

impl MaterialKind {
    /// Returns all supported materials in catalog order
    pub fn all() -> [MaterialKind; 6] {
        [
            MaterialKind::Steel,
            MaterialKind::Concrete,
            MaterialKind::ReinforcedConcrete,
            MaterialKind::Wood,
            MaterialKind::Masonry,
            MaterialKind::Composite,
        ]
    }

    /// Parses a lowercase label such as "reinforced_concrete"
    pub fn from_label(value: &str) -> Result<Self, SimError> {
        match value {
            "steel" => Ok(MaterialKind::Steel),
            "concrete" => Ok(MaterialKind::Concrete),
            "reinforced_concrete" => Ok(MaterialKind::ReinforcedConcrete),
            "wood" => Ok(MaterialKind::Wood),
            "masonry" => Ok(MaterialKind::Masonry),
            "composite" => Ok(MaterialKind::Composite),
            _ => Err(SimError::UnsupportedVariant {
                kind: "material",
                value: value.to_string(),
            }),
        }
    }

    /// Returns the lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            MaterialKind::Steel => "steel",
            MaterialKind::Concrete => "concrete",
            MaterialKind::ReinforcedConcrete => "reinforced_concrete",
            MaterialKind::Wood => "wood",
            MaterialKind::Masonry => "masonry",
            MaterialKind::Composite => "composite",
        }
    }
}

/// Defines the supported infrastructure asset types
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Bridge,
    Building,
    Road,
}

impl AssetKind {
    /// Returns all supported asset types in catalog order
    pub fn all() -> [AssetKind; 3] {
        [AssetKind::Bridge, AssetKind::Building, AssetKind::Road]
    }

    /// Parses a lowercase label such as "bridge"
    pub fn from_label(value: &str) -> Result<Self, SimError> {
        match value {
            "bridge" => Ok(AssetKind::Bridge),
            "building" => Ok(AssetKind::Building),
            "road" => Ok(AssetKind::Road),
            _ => Err(SimError::UnsupportedVariant {
                kind: "asset type",
                value: value.to_string(),
            }),
        }
    }

    /// Returns the lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Bridge => "bridge",
            AssetKind::Building => "building",
            AssetKind::Road => "road",
        }
    }
}

/// Defines the supported climate event types
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Flood,
    Heatwave,
    HighWind,
}

impl EventKind {
    /// Parses a lowercase label such as "high_wind"
    pub fn from_label(value: &str) -> Result<Self, SimError> {
        match value {
            "flood" => Ok(EventKind::Flood),
            "heatwave" => Ok(EventKind::Heatwave),
            "high_wind" => Ok(EventKind::HighWind),
            _ => Err(SimError::UnsupportedVariant {
                kind: "climate event type",
                value: value.to_string(),
            }),
        }
    }

    /// Returns the lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Flood => "flood",
            EventKind::Heatwave => "heatwave",
            EventKind::HighWind => "high_wind",
        }
    }
}

/// Defines the severity grades of a climate event
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Moderate,
    High,
    Extreme,
}

impl Severity {
    /// Parses a lowercase label such as "extreme"
    pub fn from_label(value: &str) -> Result<Self, SimError> {
        match value {
            "low" => Ok(Severity::Low),
            "moderate" => Ok(Severity::Moderate),
            "high" => Ok(Severity::High),
            "extreme" => Ok(Severity::Extreme),
            _ => Err(SimError::UnsupportedVariant {
                kind: "severity",
                value: value.to_string(),
            }),
        }
    }

    /// Returns the lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Extreme => "extreme",
        }
    }

    /// Returns the numeric multiplier applied to every event's base stress
    pub fn multiplier(&self) -> f64 {
        match self {
            Severity::Low => 0.5,
            Severity::Moderate => 0.75,
            Severity::High => 1.0,
            Severity::Extreme => 1.3,
        }
    }
}

/// Defines the bridge foundation construction kinds
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoundationKind {
    Pile,
    Spread,
    Caisson,
}

impl FoundationKind {
    /// Parses a lowercase label such as "caisson"
    pub fn from_label(value: &str) -> Result<Self, SimError> {
        match value {
            "pile" => Ok(FoundationKind::Pile),
            "spread" => Ok(FoundationKind::Spread),
            "caisson" => Ok(FoundationKind::Caisson),
            _ => Err(SimError::UnsupportedVariant {
                kind: "foundation type",
                value: value.to_string(),
            }),
        }
    }

    /// Returns the lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            FoundationKind::Pile => "pile",
            FoundationKind::Spread => "spread",
            FoundationKind::Caisson => "caisson",
        }
    }
}

/// Defines the road drainage quality grades
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrainageKind {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl DrainageKind {
    /// Parses a lowercase label such as "poor"
    pub fn from_label(value: &str) -> Result<Self, SimError> {
        match value {
            "excellent" => Ok(DrainageKind::Excellent),
            "good" => Ok(DrainageKind::Good),
            "fair" => Ok(DrainageKind::Fair),
            "poor" => Ok(DrainageKind::Poor),
            _ => Err(SimError::UnsupportedVariant {
                kind: "drainage quality",
                value: value.to_string(),
            }),
        }
    }

    /// Returns the lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            DrainageKind::Excellent => "excellent",
            DrainageKind::Good => "good",
            DrainageKind::Fair => "fair",
            DrainageKind::Poor => "poor",
        }
    }
}

/// Defines the building cooling system kinds
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoolingKind {
    Mechanical,
    Natural,
    None,
}

impl CoolingKind {
    /// Parses a lowercase label such as "mechanical"
    pub fn from_label(value: &str) -> Result<Self, SimError> {
        match value {
            "mechanical" => Ok(CoolingKind::Mechanical),
            "natural" => Ok(CoolingKind::Natural),
            "none" => Ok(CoolingKind::None),
            _ => Err(SimError::UnsupportedVariant {
                kind: "cooling system",
                value: value.to_string(),
            }),
        }
    }

    /// Returns the lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            CoolingKind::Mechanical => "mechanical",
            CoolingKind::Natural => "natural",
            CoolingKind::None => "none",
        }
    }
}

/// Defines the ordinal risk classification of a stress score
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Returns the lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{AssetKind, CoolingKind, DrainageKind, EventKind, FoundationKind, MaterialKind, RiskLevel, Severity};
    use crate::SimError;

    #[test]
    fn labels_round_trip() {
        for kind in MaterialKind::all() {
            assert_eq!(MaterialKind::from_label(kind.label()), Ok(kind));
        }
        for kind in AssetKind::all() {
            assert_eq!(AssetKind::from_label(kind.label()), Ok(kind));
        }
        for kind in [EventKind::Flood, EventKind::Heatwave, EventKind::HighWind] {
            assert_eq!(EventKind::from_label(kind.label()), Ok(kind));
        }
        for kind in [Severity::Low, Severity::Moderate, Severity::High, Severity::Extreme] {
            assert_eq!(Severity::from_label(kind.label()), Ok(kind));
        }
        for kind in [FoundationKind::Pile, FoundationKind::Spread, FoundationKind::Caisson] {
            assert_eq!(FoundationKind::from_label(kind.label()), Ok(kind));
        }
        for kind in [
            DrainageKind::Excellent,
            DrainageKind::Good,
            DrainageKind::Fair,
            DrainageKind::Poor,
        ] {
            assert_eq!(DrainageKind::from_label(kind.label()), Ok(kind));
        }
        for kind in [CoolingKind::Mechanical, CoolingKind::Natural, CoolingKind::None] {
            assert_eq!(CoolingKind::from_label(kind.label()), Ok(kind));
        }
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(
            AssetKind::from_label("airport"),
            Err(SimError::UnsupportedVariant {
                kind: "asset type",
                value: "airport".to_string(),
            })
        );
        let err = MaterialKind::from_label("adamantium").unwrap_err();
        assert_eq!(err.to_string(), "unsupported material: adamantium");
        assert!(Severity::from_label("apocalyptic").is_err());
    }

    #[test]
    fn severity_multipliers_work() {
        assert_eq!(Severity::Low.multiplier(), 0.5);
        assert_eq!(Severity::Moderate.multiplier(), 0.75);
        assert_eq!(Severity::High.multiplier(), 1.0);
        assert_eq!(Severity::Extreme.multiplier(), 1.3);
    }

    #[test]
    fn risk_level_serializes_as_lowercase() {
        let json = serde_json::to_string(&RiskLevel::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
