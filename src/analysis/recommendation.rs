use crate::analysis::AnalysisResult;
use crate::base::{AssetKind, EventKind, RiskLevel};
use serde::Serialize;

/// Defines the priority grades of a recommendation
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Priority {
    #[serde(rename = "CRITICAL")]
    Critical,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
}

/// Defines the relative cost bands of a recommendation
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum CostBand {
    #[serde(rename = "$")]
    Low,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    High,
    #[serde(rename = "$$$$")]
    VeryHigh,
}

impl CostBand {
    /// Returns the weight used for the total cost estimate
    pub fn weight(&self) -> u32 {
        match self {
            CostBand::Low => 1,
            CostBand::Moderate => 2,
            CostBand::High => 3,
            CostBand::VeryHigh => 4,
        }
    }
}

/// Holds one prioritized, costed action
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Recommendation {
    /// Priority grade
    pub priority: Priority,

    /// Short action title
    pub action: &'static str,

    /// What the action entails
    pub description: &'static str,

    /// Expected implementation timeline
    pub timeline: &'static str,

    /// Relative cost band
    pub estimated_cost: CostBand,
}

impl Recommendation {
    fn new(
        priority: Priority,
        action: &'static str,
        description: &'static str,
        timeline: &'static str,
        estimated_cost: CostBand,
    ) -> Self {
        Recommendation {
            priority,
            action,
            description,
            timeline,
            estimated_cost,
        }
    }
}

/// Holds the executive summary report with the recommendation list
#[derive(Clone, Debug, Serialize)]
pub struct SummaryReport {
    /// Identifier of the analyzed asset
    pub asset_id: String,

    /// Risk classification
    pub risk_level: RiskLevel,

    /// Stress score (0-100)
    pub stress_score: f64,

    /// Failure probability in percent
    pub failure_probability: f64,

    /// Prioritized recommendations
    pub recommendations: Vec<Recommendation>,

    /// Number of recommendations
    pub total_recommendations: usize,

    /// Bucketed total implementation cost range
    pub estimated_total_cost: &'static str,

    /// One-paragraph executive summary
    pub executive_summary: String,
}

/// Implements the mapping from a completed analysis to actionable
/// recommendations
pub struct RecommendationEngine<'a> {
    /// The completed analysis
    results: &'a AnalysisResult,
}

impl<'a> RecommendationEngine<'a> {
    /// Allocates a new instance
    pub fn new(results: &'a AnalysisResult) -> Self {
        RecommendationEngine { results }
    }

    /// Generates the prioritized recommendation list
    ///
    /// Critical risk prepends two emergency actions; high or critical risk
    /// appends a monitoring recommendation.
    pub fn generate_recommendations(&self) -> Vec<Recommendation> {
        let risk = self.results.analysis.risk_level;
        let mut recommendations = Vec::new();

        if risk == RiskLevel::Critical {
            recommendations.push(Recommendation::new(
                Priority::Critical,
                "Immediate structural inspection required",
                "Engage certified structural engineers for emergency assessment",
                "Within 24 hours",
                CostBand::VeryHigh,
            ));
            recommendations.push(Recommendation::new(
                Priority::Critical,
                "Consider temporary closure/restrictions",
                "Restrict access until safety can be verified",
                "Immediate",
                CostBand::Low,
            ));
        }

        match self.results.infrastructure.kind {
            AssetKind::Bridge => recommendations.extend(self.bridge_recommendations()),
            AssetKind::Building => recommendations.extend(self.building_recommendations()),
            AssetKind::Road => recommendations.extend(self.road_recommendations()),
        }

        if risk == RiskLevel::High || risk == RiskLevel::Critical {
            recommendations.push(Recommendation::new(
                Priority::High,
                "Install structural health monitoring system",
                "Deploy sensors to track stress, vibration, and deformation in real-time",
                "1-2 months",
                CostBand::High,
            ));
        }

        recommendations
    }

    fn bridge_recommendations(&self) -> Vec<Recommendation> {
        let mut recs = Vec::new();
        match self.results.climate_event.event_type {
            EventKind::Flood => {
                recs.push(Recommendation::new(
                    Priority::High,
                    "Install scour protection",
                    "Add riprap or concrete aprons to prevent foundation undermining",
                    "3-6 months",
                    CostBand::High,
                ));
                recs.push(Recommendation::new(
                    Priority::Medium,
                    "Improve drainage systems",
                    "Enhance deck drainage to prevent water accumulation",
                    "2-4 months",
                    CostBand::Moderate,
                ));
                if self.results.analysis.stress_score > 70.0 {
                    recs.push(Recommendation::new(
                        Priority::High,
                        "Strengthen foundation",
                        "Add supplemental piling or extend foundation depth",
                        "6-12 months",
                        CostBand::VeryHigh,
                    ));
                }
            }
            EventKind::HighWind => {
                recs.push(Recommendation::new(
                    Priority::High,
                    "Add wind bracing",
                    "Install cross-bracing and cable stays to reduce wind-induced vibration",
                    "4-8 months",
                    CostBand::High,
                ));
                recs.push(Recommendation::new(
                    Priority::Medium,
                    "Aerodynamic modifications",
                    "Install wind fairings or modify deck profile",
                    "6-10 months",
                    CostBand::VeryHigh,
                ));
            }
            EventKind::Heatwave => (),
        }
        recs
    }

    fn building_recommendations(&self) -> Vec<Recommendation> {
        let mut recs = Vec::new();
        match self.results.climate_event.event_type {
            EventKind::Flood => {
                recs.push(Recommendation::new(
                    Priority::High,
                    "Install flood barriers",
                    "Deploy removable flood panels or permanent water barriers",
                    "1-3 months",
                    CostBand::Moderate,
                ));
                recs.push(Recommendation::new(
                    Priority::Medium,
                    "Waterproof basement",
                    "Apply waterproofing membranes and sealants to foundation",
                    "2-4 months",
                    CostBand::Moderate,
                ));
                recs.push(Recommendation::new(
                    Priority::Medium,
                    "Elevate critical systems",
                    "Move electrical, HVAC equipment above flood level",
                    "3-6 months",
                    CostBand::High,
                ));
            }
            EventKind::Heatwave => {
                recs.push(Recommendation::new(
                    Priority::High,
                    "Upgrade cooling systems",
                    "Install or enhance mechanical cooling capacity",
                    "2-4 months",
                    CostBand::High,
                ));
                recs.push(Recommendation::new(
                    Priority::Medium,
                    "Apply reflective coating",
                    "Cool roof coating to reduce solar heat absorption",
                    "1-2 months",
                    CostBand::Moderate,
                ));
                recs.push(Recommendation::new(
                    Priority::Medium,
                    "Install thermal insulation",
                    "Improve envelope insulation to reduce thermal stress",
                    "3-5 months",
                    CostBand::High,
                ));
            }
            EventKind::HighWind => {
                recs.push(Recommendation::new(
                    Priority::High,
                    "Reinforce structural connections",
                    "Strengthen roof-to-wall and wall-to-foundation connections",
                    "3-6 months",
                    CostBand::High,
                ));
                recs.push(Recommendation::new(
                    Priority::Medium,
                    "Install impact-resistant windows",
                    "Replace with hurricane-rated glazing systems",
                    "2-4 months",
                    CostBand::VeryHigh,
                ));
            }
        }
        recs
    }

    fn road_recommendations(&self) -> Vec<Recommendation> {
        let mut recs = Vec::new();
        match self.results.climate_event.event_type {
            EventKind::Flood => {
                recs.push(Recommendation::new(
                    Priority::High,
                    "Improve drainage infrastructure",
                    "Upgrade storm drains, culverts, and retention basins",
                    "4-8 months",
                    CostBand::High,
                ));
                recs.push(Recommendation::new(
                    Priority::Medium,
                    "Elevate roadway sections",
                    "Raise critical sections above projected flood levels",
                    "6-12 months",
                    CostBand::VeryHigh,
                ));
                recs.push(Recommendation::new(
                    Priority::Medium,
                    "Install flood warning systems",
                    "Deploy water level sensors and automated signage",
                    "2-3 months",
                    CostBand::Moderate,
                ));
            }
            EventKind::Heatwave => {
                recs.push(Recommendation::new(
                    Priority::High,
                    "Apply cool pavement treatment",
                    "Use reflective sealants or light-colored aggregates",
                    "3-5 months",
                    CostBand::Moderate,
                ));
                recs.push(Recommendation::new(
                    Priority::Medium,
                    "Resurface with heat-resistant materials",
                    "Use polymer-modified or heat-resistant asphalt mixes",
                    "6-10 months",
                    CostBand::High,
                ));
            }
            EventKind::HighWind => (),
        }
        recs
    }

    /// Estimates the total implementation cost range from the summed cost
    /// band weights
    pub fn estimate_total_cost(recommendations: &[Recommendation]) -> &'static str {
        let total: u32 = recommendations.iter().map(|r| r.estimated_cost.weight()).sum();
        if total < 5 {
            "$10,000 - $50,000"
        } else if total < 10 {
            "$50,000 - $250,000"
        } else if total < 15 {
            "$250,000 - $1,000,000"
        } else {
            "$1,000,000+"
        }
    }

    /// Generates the one-paragraph executive summary
    fn executive_summary(&self) -> String {
        let risk = self.results.analysis.risk_level;
        let description = match risk {
            RiskLevel::Low => "minimal structural concerns",
            RiskLevel::Medium => "moderate vulnerability requiring preventive measures",
            RiskLevel::High => "significant structural risk requiring urgent intervention",
            RiskLevel::Critical => "critical failure risk demanding immediate action",
        };
        format!(
            "Analysis reveals {} risk level with stress score of {:.1}/100 and {:.1}% failure probability. \
             Assessment indicates {}.",
            risk.label().to_uppercase(),
            self.results.analysis.stress_score,
            self.results.analysis.failure_probability_percent,
            description
        )
    }

    /// Generates the executive summary report with the recommendation list
    pub fn summary_report(&self) -> SummaryReport {
        let recommendations = self.generate_recommendations();
        SummaryReport {
            asset_id: self.results.infrastructure.asset_id.clone(),
            risk_level: self.results.analysis.risk_level,
            stress_score: self.results.analysis.stress_score,
            failure_probability: self.results.analysis.failure_probability_percent,
            total_recommendations: recommendations.len(),
            estimated_total_cost: RecommendationEngine::estimate_total_cost(&recommendations),
            executive_summary: self.executive_summary(),
            recommendations,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
