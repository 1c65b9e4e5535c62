//! Skill-string resolution and job matching for waypoint.
//!
//! Two responsibilities live here:
//! - Resolving arbitrary skill strings to ontology skills through a strict
//!   four-stage cascade (exact → synonym → fuzzy → semantic), first hit wins.
//! - Aggregating resolved skills into ranked per-job matches with
//!   transferable-skill partial credit.
//!
//! The matcher borrows the ontology store read-only, so one store can back
//! many concurrent matchers.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// The four-stage matching cascade.
pub mod cascade;
/// Job matching and transferable-skill lookup.
pub mod jobs;
/// Keyword extraction for the semantic stage.
pub mod keywords;

pub use cascade::{MatchStrategy, SkillMatch};
pub use jobs::{JobMatch, DEFAULT_MIN_MATCH_SCORE};
pub use keywords::extract_keywords;

use std::collections::HashMap;

use waypoint_ontology::OntologyStore;

/// Resolves raw skill strings against an ontology and matches jobs.
#[derive(Debug)]
pub struct SkillMatcher<'a> {
    ontology: &'a OntologyStore,
    /// Lowercased synonym → skill ids carrying it, in skill-id order.
    /// On collision the first id wins at lookup time.
    synonym_index: HashMap<String, Vec<String>>,
}

impl<'a> SkillMatcher<'a> {
    /// Builds a matcher over `ontology`, constructing the synonym reverse
    /// index once up front.
    pub fn new(ontology: &'a OntologyStore) -> Self {
        let mut synonym_index: HashMap<String, Vec<String>> = HashMap::new();
        for skill in ontology.skills() {
            for synonym in &skill.synonyms {
                synonym_index
                    .entry(synonym.to_lowercase())
                    .or_default()
                    .push(skill.id.clone());
            }
        }
        Self {
            ontology,
            synonym_index,
        }
    }

    /// The ontology this matcher resolves against.
    pub fn ontology(&self) -> &'a OntologyStore {
        self.ontology
    }

    /// Resolves a batch of raw terms. Terms that fail every cascade stage
    /// are silently dropped, so the output can be shorter than the input.
    pub fn match_terms<S: AsRef<str>>(&self, terms: &[S]) -> Vec<SkillMatch> {
        terms
            .iter()
            .filter_map(|term| self.match_term(term.as_ref()))
            .collect()
    }

    /// Expands each term to its best-matching skill name plus the names of
    /// that skill's related skills; terms with no match map to an empty list.
    pub fn expand_terms<S: AsRef<str>>(&self, terms: &[S]) -> HashMap<String, Vec<String>> {
        let mut expansions = HashMap::new();
        for term in terms {
            let term = term.as_ref();
            let names = match self.match_term(term) {
                Some(m) => {
                    let mut names = vec![m.skill.name.clone()];
                    names.extend(
                        self.ontology
                            .get_related_skills(&m.skill.id)
                            .into_iter()
                            .map(|s| s.name.clone()),
                    );
                    names
                }
                None => Vec::new(),
            };
            expansions.insert(term.to_string(), names);
        }
        expansions
    }
}
