use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use waypoint_ontology::Job;

use crate::cascade::SkillMatch;
use crate::SkillMatcher;

/// Default threshold a job's match score must reach to be kept.
pub const DEFAULT_MIN_MATCH_SCORE: f64 = 0.5;

/// Partial importance credit granted for a transferable skill.
const TRANSFERABLE_CREDIT: f64 = 0.7;
/// Similarity a user skill must exceed to count as transferable when no
/// direct graph adjacency exists.
const TRANSFERABLE_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Per-job aggregate of how well a set of resolved skills fits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    /// The matched job.
    pub job: Job,
    /// Importance-weighted match score in [0, 1].
    pub match_score: f64,
    /// Resolved skills that directly satisfied a requirement.
    pub matched_skills: Vec<SkillMatch>,
    /// Display names of requirements with no direct or transferable cover.
    pub missing_skills: Vec<String>,
    /// Display names of requirements covered only by a transferable skill.
    pub transferable_skills: Vec<String>,
}

impl<'a> SkillMatcher<'a> {
    /// Matches resolved skills against every cataloged job.
    ///
    /// A requirement counts fully when its skill id was resolved directly,
    /// at [`TRANSFERABLE_CREDIT`] of its importance when a transferable
    /// skill covers it, and as missing otherwise. Jobs without requirements
    /// or with zero total importance are skipped; jobs below
    /// `min_match_score` are dropped. Results sort descending by score with
    /// a stable tie-break on catalog order.
    pub fn find_matching_jobs(
        &self,
        skill_matches: &[SkillMatch],
        min_match_score: f64,
    ) -> Vec<JobMatch> {
        // Sorted so transferable-skill lookup is deterministic.
        let matched_ids: BTreeSet<String> = skill_matches
            .iter()
            .map(|m| m.skill.id.clone())
            .collect();

        let mut job_matches = Vec::new();
        for job in self.ontology().jobs_in_order() {
            if job.required_skills.is_empty() {
                continue;
            }

            let total_importance: f64 = job.required_skills.iter().map(|r| r.importance).sum();
            if total_importance == 0.0 {
                continue;
            }

            let mut matched_skills = Vec::new();
            let mut missing_skills = Vec::new();
            let mut transferable_skills = Vec::new();
            let mut matched_importance = 0.0;

            for req in &job.required_skills {
                if matched_ids.contains(&req.skill_id) {
                    if let Some(m) = skill_matches.iter().find(|m| m.skill.id == req.skill_id) {
                        matched_skills.push(m.clone());
                    }
                    matched_importance += req.importance;
                } else {
                    let name = self.ontology().skill_display_name(&req.skill_id);
                    if self.find_transferable_skill(&req.skill_id, &matched_ids).is_some() {
                        transferable_skills.push(name);
                        matched_importance += req.importance * TRANSFERABLE_CREDIT;
                    } else {
                        missing_skills.push(name);
                    }
                }
            }

            let match_score = matched_importance / total_importance;
            if match_score >= min_match_score {
                debug!(job = %job.id, match_score, "job cleared match threshold");
                job_matches.push(JobMatch {
                    job: job.clone(),
                    match_score,
                    matched_skills,
                    missing_skills,
                    transferable_skills,
                });
            }
        }

        // Stable sort preserves catalog order among equal scores.
        job_matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        job_matches
    }

    /// Finds a user skill that substitutes for `required_id`, iterating the
    /// matched ids in ascending order so the donor is deterministic.
    ///
    /// Graph adjacency is consulted first, in both directions; failing that,
    /// the similarity fallback requires strictly more than
    /// [`TRANSFERABLE_SIMILARITY_THRESHOLD`].
    pub fn find_transferable_skill(
        &self,
        required_id: &str,
        matched_ids: &BTreeSet<String>,
    ) -> Option<String> {
        if let Some(related) = self.ontology().related_ids(required_id) {
            for user_id in matched_ids {
                if related.contains(user_id) {
                    return Some(user_id.clone());
                }
            }
        }
        for user_id in matched_ids {
            if self
                .ontology()
                .related_ids(user_id)
                .is_some_and(|related| related.contains(required_id))
            {
                return Some(user_id.clone());
            }
        }

        for user_id in matched_ids {
            let similarity = self
                .ontology()
                .calculate_skill_similarity(required_id, user_id);
            if similarity > TRANSFERABLE_SIMILARITY_THRESHOLD {
                return Some(user_id.clone());
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_ontology::{OntologyStore, Proficiency};
    use waypoint_test_utils::{requirement, sample_job, sample_skill};

    fn two_skill_store() -> OntologyStore {
        let mut store = OntologyStore::new();
        store.add_skill(sample_skill("python", "Python", &["Python"], &[]));
        store.add_skill(sample_skill("sql", "SQL", &[], &[]));
        store.add_job(sample_job(
            "data_scientist",
            "Data Scientist",
            vec![
                requirement("python", 0.9, Proficiency::Advanced),
                requirement("sql", 0.7, Proficiency::Intermediate),
            ],
        ));
        store
    }

    #[test]
    fn synonym_resolution_feeds_weighted_job_score() {
        let store = two_skill_store();
        let matcher = SkillMatcher::new(&store);

        let matches = matcher.match_terms(&["Python"]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 1.0); // exact, display name equals term

        let jobs = matcher.find_matching_jobs(&matches, 0.5);
        assert_eq!(jobs.len(), 1);
        let jm = &jobs[0];
        // 0.9 of 1.6 total importance.
        assert!((jm.match_score - 0.5625).abs() < 1e-9);
        assert_eq!(jm.missing_skills, vec!["SQL"]);
        assert!(jm.transferable_skills.is_empty());
    }

    #[test]
    fn min_match_score_is_inclusive() {
        let store = two_skill_store();
        let matcher = SkillMatcher::new(&store);
        let matches = matcher.match_terms(&["Python"]);

        assert_eq!(matcher.find_matching_jobs(&matches, 0.5625).len(), 1);
        assert!(matcher.find_matching_jobs(&matches, 0.6).is_empty());
    }

    #[test]
    fn jobs_without_requirements_or_weight_are_skipped() {
        let mut store = two_skill_store();
        store.add_job(sample_job("empty", "Empty", vec![]));
        store.add_job(sample_job(
            "weightless",
            "Weightless",
            vec![requirement("python", 0.0, Proficiency::Beginner)],
        ));
        let matcher = SkillMatcher::new(&store);
        let matches = matcher.match_terms(&["Python"]);

        let jobs = matcher.find_matching_jobs(&matches, 0.0);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job.id, "data_scientist");
    }

    #[test]
    fn transferable_skill_earns_partial_credit() {
        let mut store = OntologyStore::new();
        store.add_skill(sample_skill("r", "R", &[], &[]));
        store.add_skill(sample_skill("python", "Python", &[], &["r"]));
        store.add_job(sample_job(
            "analyst",
            "Analyst",
            vec![requirement("python", 1.0, Proficiency::Intermediate)],
        ));
        let matcher = SkillMatcher::new(&store);

        let matches = matcher.match_terms(&["R"]);
        let jobs = matcher.find_matching_jobs(&matches, 0.0);

        assert_eq!(jobs.len(), 1);
        assert!((jobs[0].match_score - 0.7).abs() < 1e-9);
        assert_eq!(jobs[0].transferable_skills, vec!["Python"]);
        assert!(jobs[0].missing_skills.is_empty());
        assert!(jobs[0].matched_skills.is_empty());
    }

    #[test]
    fn transferable_adjacency_works_in_reverse_direction() {
        let mut store = OntologyStore::new();
        // The user skill lists the required skill as related, not vice versa.
        store.add_skill(sample_skill("r", "R", &[], &["python"]));
        store.add_skill(sample_skill("python", "Python", &[], &[]));
        let matcher = SkillMatcher::new(&store);

        let matched: BTreeSet<String> = ["r".to_string()].into();
        assert_eq!(
            matcher.find_transferable_skill("python", &matched),
            Some("r".to_string())
        );
    }

    #[test]
    fn transferable_donor_is_smallest_qualifying_id() {
        let mut store = OntologyStore::new();
        store.add_skill(sample_skill("zeta", "Zeta", &[], &[]));
        store.add_skill(sample_skill("alpha", "Alpha", &[], &[]));
        store.add_skill(sample_skill(
            "target",
            "Target",
            &[],
            &["zeta", "alpha"],
        ));
        let matcher = SkillMatcher::new(&store);

        let matched: BTreeSet<String> =
            ["zeta".to_string(), "alpha".to_string()].into();
        // Both qualify via adjacency; ascending id order makes alpha the donor.
        assert_eq!(
            matcher.find_transferable_skill("target", &matched),
            Some("alpha".to_string())
        );
    }

    #[test]
    fn transferable_similarity_fallback_requires_strictly_above_threshold() {
        let mut store = OntologyStore::new();
        // python and sql share their entire adjacency sets: similarity
        // 0.6 * 1/1 = 0.6, which is NOT > 0.6, so no transfer.
        store.add_skill(sample_skill("python", "Python", &[], &["data_analysis"]));
        store.add_skill(sample_skill("sql", "SQL", &[], &["data_analysis"]));
        store.add_skill(sample_skill("data_analysis", "Data Analysis", &[], &[]));
        let matcher = SkillMatcher::new(&store);

        let matched: BTreeSet<String> = ["sql".to_string()].into();
        assert_eq!(matcher.find_transferable_skill("python", &matched), None);
    }

    #[test]
    fn missing_bucket_falls_back_to_raw_id_for_unknown_skills() {
        let mut store = two_skill_store();
        store.add_job(sample_job(
            "frontier",
            "Frontier Role",
            vec![
                requirement("python", 0.9, Proficiency::Advanced),
                requirement("ghost_skill", 0.1, Proficiency::Beginner),
            ],
        ));
        let matcher = SkillMatcher::new(&store);
        let matches = matcher.match_terms(&["Python"]);

        let jobs = matcher.find_matching_jobs(&matches, 0.0);
        let frontier = jobs.iter().find(|j| j.job.id == "frontier").unwrap();
        assert_eq!(frontier.missing_skills, vec!["ghost_skill"]);
    }

    #[test]
    fn results_sort_by_score_with_stable_catalog_tiebreak() {
        let mut store = OntologyStore::new();
        store.add_skill(sample_skill("python", "Python", &[], &[]));
        store.add_skill(sample_skill("sql", "SQL", &[], &[]));
        store.add_job(sample_job(
            "half_b",
            "Half B",
            vec![
                requirement("python", 0.5, Proficiency::Beginner),
                requirement("sql", 0.5, Proficiency::Beginner),
            ],
        ));
        store.add_job(sample_job(
            "full",
            "Full",
            vec![requirement("python", 1.0, Proficiency::Beginner)],
        ));
        store.add_job(sample_job(
            "half_a",
            "Half A",
            vec![
                requirement("python", 0.5, Proficiency::Beginner),
                requirement("sql", 0.5, Proficiency::Beginner),
            ],
        ));
        let matcher = SkillMatcher::new(&store);

        let matches = matcher.match_terms(&["Python"]);
        let jobs = matcher.find_matching_jobs(&matches, 0.0);
        let ids: Vec<&str> = jobs.iter().map(|j| j.job.id.as_str()).collect();
        assert_eq!(ids, vec!["full", "half_b", "half_a"]);
    }
}
