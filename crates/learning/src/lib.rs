//! Gap analysis and learning-path planning for waypoint.
//!
//! Turns one career recommendation into a dependency-ordered sequence of
//! learning milestones: which skills to close, in what order, with which
//! curated resources, and roughly how long and how expensive the whole path
//! is. Resource catalogs and prerequisite chains are plain YAML data, so
//! curricula change without touching code.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Planner configuration (prerequisites and validation methods).
pub mod config;
/// Gap analysis against a recommendation.
pub mod gaps;
/// Milestone synthesis and path assembly.
pub mod path;
/// The YAML-backed learning-resource catalog.
pub mod resources;

pub use config::{PlannerConfig, DEFAULT_VALIDATION};
pub use gaps::{analyze_gaps, prioritize_gaps};
pub use path::{
    estimate_completion_date, next_milestone, total_hours, weeks_to_complete, CostBand,
    DifficultyBand, LearningMilestone, LearningPath, PathPlanner,
};
pub use resources::{
    LearningResource, ResourceCatalog, ResourceCost, ResourceDifficulty, ResourceError,
    ResourceKind,
};
