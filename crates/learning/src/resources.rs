//! Learning-resource catalog.
//!
//! Resources live outside the binary in a YAML catalog keyed by skill
//! display name, so curricula can be revised without a recompile. The
//! planner only reads; there is no mutation API.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// What kind of artifact a learning resource is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Structured course with lessons.
    Course,
    /// Industry certification program.
    Certification,
    /// Book or long-form text.
    Book,
    /// Short guided tutorial.
    Tutorial,
    /// Exercise or drill collection.
    Practice,
}

impl ResourceKind {
    /// Returns a stable lowercase label for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Course => "course",
            ResourceKind::Certification => "certification",
            ResourceKind::Book => "book",
            ResourceKind::Tutorial => "tutorial",
            ResourceKind::Practice => "practice",
        }
    }
}

/// Difficulty band a resource targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceDifficulty {
    /// No prior exposure assumed.
    Beginner,
    /// Working knowledge assumed.
    Intermediate,
    /// Deep prior knowledge assumed.
    Advanced,
}

impl ResourceDifficulty {
    /// Numeric score used when averaging difficulty across a path (1..=3).
    pub fn score(self) -> f64 {
        match self {
            ResourceDifficulty::Beginner => 1.0,
            ResourceDifficulty::Intermediate => 2.0,
            ResourceDifficulty::Advanced => 3.0,
        }
    }

    /// Returns a stable lowercase label for this difficulty.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceDifficulty::Beginner => "beginner",
            ResourceDifficulty::Intermediate => "intermediate",
            ResourceDifficulty::Advanced => "advanced",
        }
    }
}

/// Pricing model of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCost {
    /// Entirely free.
    Free,
    /// Payment required.
    Paid,
    /// Free tier with paid upgrades.
    Freemium,
}

/// One learning resource in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    /// Display title.
    pub title: String,
    /// Who offers the resource.
    pub provider: String,
    /// Where to find it.
    pub url: String,
    /// What kind of artifact it is.
    pub kind: ResourceKind,
    /// Difficulty band it targets.
    pub difficulty: ResourceDifficulty,
    /// Estimated hours of effort.
    pub estimated_hours: u32,
    /// Pricing model.
    pub cost: ResourceCost,
    /// Optional community rating out of 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Failure loading a resource catalog or planner config.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying io error.
        #[source]
        source: std::io::Error,
    },
    /// The YAML did not parse into the expected shape.
    #[error("failed to parse resource YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Curated resources keyed by skill display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceCatalog {
    entries: BTreeMap<String, Vec<LearningResource>>,
}

impl ResourceCatalog {
    /// An empty catalog. The planner falls back to generic milestones for
    /// every skill.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, ResourceError> {
        let catalog: Self = serde_yaml::from_str(text)?;
        debug!(skills = catalog.entries.len(), "loaded resource catalog");
        Ok(catalog)
    }

    /// Reads and parses a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Resources curated for a skill name; empty for uncatalogued skills.
    pub fn resources_for(&self, skill_name: &str) -> &[LearningResource] {
        self.entries
            .get(skill_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of skills with curated resources.
    pub fn skill_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
