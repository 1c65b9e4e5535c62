//! JSON snapshot export/import for a populated [`OntologyStore`].
//!
//! The snapshot keys skills and jobs by id, matching the seed-catalog shape.
//! Reimporting a snapshot reproduces identical skill/job id sets and
//! requirement lists; catalog order is normalized to id order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::store::OntologyStore;
use crate::types::{Job, Skill};

/// Serializable form of a whole ontology.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OntologySnapshot {
    /// Skills keyed by id.
    #[serde(default)]
    pub skills: BTreeMap<String, Skill>,
    /// Jobs keyed by id.
    #[serde(default)]
    pub jobs: BTreeMap<String, Job>,
}

impl OntologyStore {
    /// Captures the current skills and jobs as a snapshot.
    pub fn snapshot(&self) -> OntologySnapshot {
        OntologySnapshot {
            skills: self
                .skills()
                .map(|s| (s.id.clone(), s.clone()))
                .collect(),
            jobs: self
                .jobs_in_order()
                .map(|j| (j.id.clone(), j.clone()))
                .collect(),
        }
    }

    /// Rebuilds a store from a snapshot, rematerializing the relationship
    /// graph from each skill's related list.
    pub fn from_snapshot(snapshot: OntologySnapshot) -> Self {
        let mut store = OntologyStore::new();
        for skill in snapshot.skills.into_values() {
            store.add_skill(skill);
        }
        for job in snapshot.jobs.into_values() {
            store.add_job(job);
        }
        store
    }

    /// Exports the ontology as pretty-printed JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    /// Imports an ontology previously produced by [`Self::export_json`].
    pub fn import_json(json: &str) -> serde_json::Result<Self> {
        let snapshot: OntologySnapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }
}
