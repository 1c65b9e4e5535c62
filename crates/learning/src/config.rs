//! Planner configuration.
//!
//! Prerequisite chains and validation methods are data, not code. They ship
//! as YAML alongside the resource catalog and default to empty maps, which
//! leaves every milestone independent and validated by the generic project
//! method.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::resources::ResourceError;

/// Validation method used when a skill has no specific one configured.
pub const DEFAULT_VALIDATION: &str = "Complete practical project demonstrating skill";

/// Data-driven planner settings: prerequisite chains and per-skill
/// validation methods, both keyed by skill display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Skills that should be learned before a given skill.
    #[serde(default)]
    pub prerequisites: BTreeMap<String, Vec<String>>,
    /// How to demonstrate each skill once learned.
    #[serde(default)]
    pub validation_methods: BTreeMap<String, String>,
    /// Fallback validation method.
    #[serde(default = "default_validation")]
    pub default_validation: String,
}

fn default_validation() -> String {
    DEFAULT_VALIDATION.to_string()
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            prerequisites: BTreeMap::new(),
            validation_methods: BTreeMap::new(),
            default_validation: default_validation(),
        }
    }
}

impl PlannerConfig {
    /// Parses a config from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, ResourceError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Reads and parses a config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Prerequisite skill names for a skill; empty when none configured.
    pub fn prerequisites_for(&self, skill_name: &str) -> &[String] {
        self.prerequisites
            .get(skill_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Validation method for a skill, falling back to the default.
    pub fn validation_for(&self, skill_name: &str) -> &str {
        self.validation_methods
            .get(skill_name)
            .map(String::as_str)
            .unwrap_or(&self.default_validation)
    }
}
