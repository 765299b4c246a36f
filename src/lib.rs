//! Cisim - climate-infrastructure stress simulator
//!
//! This crate estimates structural stress and failure risk of infrastructure
//! assets (bridges, buildings, roads) subjected to simulated extreme climate
//! events (flood, heatwave, high wind), and supports what-if comparison of
//! reinforcement strategies.
//!
//! The main components are:
//!
//! * [`base`] - material table, configuration objects, static catalogs
//! * [`event`] - parametric climate-event stress models
//! * [`asset`] - asset models with age degradation and vulnerability rules
//! * [`analysis`] - the stress analyzer and the recommendation engine
//! * [`scenario`] - reinforcement strategies, scenarios, and comparisons
//!
//! # Example
//!
//! ```
//! use cisim::analysis::StressAnalyzer;
//! use cisim::base::SampleConfigs;
//! use cisim::SimError;
//!
//! fn main() -> Result<(), SimError> {
//!     let (asset_config, event_config) = SampleConfigs::steel_bridge_flood();
//!     let asset = asset_config.build()?;
//!     let event = event_config.build()?;
//!     let results = StressAnalyzer::new(&asset, &event).analyze();
//!     assert!(results.analysis.stress_score <= 100.0);
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Defines the error type for all fallible operations of the engine
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimError {
    /// A required field is missing or a numeric field failed to parse
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An identifier does not belong to the supported set
    #[error("unsupported {kind}: {value}")]
    UnsupportedVariant {
        /// The kind of identifier that was rejected (e.g. "asset type")
        kind: &'static str,

        /// The offending value as supplied by the caller
        value: String,
    },
}

pub mod analysis;
pub mod asset;
pub mod base;
pub mod event;
pub mod scenario;
