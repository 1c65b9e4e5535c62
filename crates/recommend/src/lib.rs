//! Confidence-weighted career recommendations for waypoint.
//!
//! Takes ranked job matches from `waypoint-matcher`, blends each with
//! optional market signals from `waypoint-market`, and produces explainable,
//! action-oriented recommendations sorted by confidence. All market input is
//! advisory: missing providers or missing records degrade to neutral
//! defaults, never to errors.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Confidence blending between skill match and market signals.
pub mod confidence;
/// The recommendation pipeline.
pub mod engine;
/// Template explanations and recommended actions.
pub mod explainer;

pub use confidence::{blend_confidence, market_confidence};
pub use engine::{RecommendationEngine, RecommendOptions};
pub use explainer::{generate_actions, generate_explanation};

use serde::{Deserialize, Serialize};
use waypoint_market::{MarketValidation, OccupationOutlook};
use waypoint_matcher::JobMatch;
use waypoint_ontology::Job;

/// Categorical growth outlook for an occupation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthOutlook {
    /// Projected growth of 15% or more.
    Excellent,
    /// Projected growth of 7% or more.
    Good,
    /// Non-negative growth, or no data.
    Fair,
    /// Projected decline.
    Poor,
}

impl GrowthOutlook {
    /// Maps a growth percentage to an outlook; `None` defaults to fair.
    pub fn from_growth_percent(growth: Option<f64>) -> Self {
        match growth {
            Some(g) if g >= 15.0 => GrowthOutlook::Excellent,
            Some(g) if g >= 7.0 => GrowthOutlook::Good,
            Some(g) if g >= 0.0 => GrowthOutlook::Fair,
            Some(_) => GrowthOutlook::Poor,
            None => GrowthOutlook::Fair,
        }
    }

    /// Returns a stable lowercase label for this outlook.
    pub fn label(&self) -> &'static str {
        match self {
            GrowthOutlook::Excellent => "excellent",
            GrowthOutlook::Good => "good",
            GrowthOutlook::Fair => "fair",
            GrowthOutlook::Poor => "poor",
        }
    }
}

/// One ranked, explainable career recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecommendation {
    /// The recommended job.
    pub job: Job,
    /// Skill-match score carried from the underlying job match.
    pub match_score: f64,
    /// The underlying job match with its skill buckets.
    pub skill_match: JobMatch,
    /// Growth/wage projection, when a provider had a record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_data: Option<OccupationOutlook>,
    /// Oracle validation, when one was available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_validation: Option<MarketValidation>,
    /// Human-readable explanation assembled from fixed templates.
    pub explanation: String,
    /// Blended confidence in [0, 1].
    pub confidence: f64,
    /// Up to five suggested actions, specific before generic.
    pub recommended_actions: Vec<String>,
    /// Estimated salary range (0.75x to 1.25x of the median wage).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<(u32, u32)>,
    /// Categorical growth outlook.
    pub growth_outlook: GrowthOutlook,
}
