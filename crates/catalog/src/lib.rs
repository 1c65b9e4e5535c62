//! YAML seed catalogs for waypoint ontologies.
//!
//! A seed file declares skills and jobs in one document; loading one builds
//! a populated [`OntologyStore`]. Loading is tolerant where the store is:
//! job requirements may reference skills the catalog never declares, which
//! is logged and kept, since consumers fall back to raw ids for display.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use waypoint_ontology::{Job, OntologyStore, Skill};

/// Failure loading a seed catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
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
    #[error("failed to parse catalog YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Deserialized shape of one seed file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    /// Skills to add, in declaration order.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Jobs to add, in declaration order.
    #[serde(default)]
    pub jobs: Vec<Job>,
}

impl CatalogSeed {
    /// Parses a seed from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Reads and parses a seed file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Builds a populated ontology from this seed.
    ///
    /// Skills load before jobs so requirement references can be checked.
    /// Dangling references are kept but logged.
    pub fn into_store(self) -> OntologyStore {
        let mut store = OntologyStore::new();

        for skill in self.skills {
            store.add_skill(skill);
        }
        for job in &self.jobs {
            for req in &job.required_skills {
                if store.skill(&req.skill_id).is_none() {
                    warn!(
                        job = %job.id,
                        skill = %req.skill_id,
                        "job requires a skill the catalog does not declare"
                    );
                }
            }
        }
        for job in self.jobs {
            store.add_job(job);
        }

        info!(
            skills = store.skill_count(),
            jobs = store.job_count(),
            "loaded seed catalog"
        );
        store
    }
}

/// Loads a seed file straight into a populated ontology.
pub fn load_store(path: impl AsRef<Path>) -> Result<OntologyStore, CatalogError> {
    Ok(CatalogSeed::from_path(path)?.into_store())
}
