//! Canonical skill and occupation ontology for waypoint.
//!
//! This crate holds the data model shared by every other waypoint crate and
//! the [`OntologyStore`], the in-memory registry that everything above it
//! queries:
//! - Skill/job lookup by id, name, or synonym.
//! - A skill-relationship graph with a heuristic similarity measure.
//! - Exact-id job match scoring and skill-gap identification.
//! - A JSON snapshot format for exporting and reimporting a catalog.
//!
//! The store is populated once at startup (see `waypoint-catalog`) and is
//! read-mostly afterwards; all queries take `&self` so a store can be shared
//! across concurrent matching operations.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Snapshot export/import for a populated store.
pub mod snapshot;
/// The ontology registry and its scoring primitives.
pub mod store;
/// Core data-model types.
pub mod types;

pub use snapshot::OntologySnapshot;
pub use store::{OntologyStore, DEFAULT_MIN_IMPORTANCE};
pub use types::{
    Job, Proficiency, Skill, SkillCategory, SkillGap, SkillRequirement, UserProfile, UserSkill,
};
