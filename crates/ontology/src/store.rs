use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::types::{Job, Skill, SkillGap, UserSkill};

/// Default importance threshold for [`OntologyStore::find_jobs_by_skill`].
pub const DEFAULT_MIN_IMPORTANCE: f64 = 0.3;

/// Similarity assigned when one skill appears in the other's adjacency set.
const DIRECT_RELATION_SIMILARITY: f64 = 0.8;
/// Weight applied to the Jaccard overlap of two adjacency sets.
const SHARED_RELATION_WEIGHT: f64 = 0.6;

/// In-memory registry of skills, jobs, and the skill-relationship graph.
///
/// Lookup misses never raise: unknown ids yield empty lists or zero scores.
/// Skills iterate in id order and jobs in catalog (insertion) order, so every
/// full scan in the workspace is deterministic.
#[derive(Debug, Clone, Default)]
pub struct OntologyStore {
    skills: BTreeMap<String, Skill>,
    jobs: HashMap<String, Job>,
    job_order: Vec<String>,
    relationships: HashMap<String, BTreeSet<String>>,
}

impl OntologyStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a skill and materializes its adjacency set.
    ///
    /// Insertion is one-directional: if this skill lists `b` as related, `b`
    /// does not gain an edge back unless added with one explicitly.
    pub fn add_skill(&mut self, skill: Skill) {
        self.relationships.insert(
            skill.id.clone(),
            skill.related_skills.iter().cloned().collect(),
        );
        self.skills.insert(skill.id.clone(), skill);
    }

    /// Adds or replaces a job. The first insertion fixes its catalog order.
    pub fn add_job(&mut self, job: Job) {
        if !self.jobs.contains_key(&job.id) {
            self.job_order.push(job.id.clone());
        }
        self.jobs.insert(job.id.clone(), job);
    }

    /// Looks up a skill by id.
    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.get(id)
    }

    /// Looks up a job by id.
    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.get(id)
    }

    /// Iterates all skills in id order.
    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.values()
    }

    /// Iterates all jobs in catalog order.
    pub fn jobs_in_order(&self) -> impl Iterator<Item = &Job> {
        self.job_order.iter().filter_map(|id| self.jobs.get(id))
    }

    /// Number of skills held.
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    /// Number of jobs held.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Adjacency set for a skill id, if the skill was ever added.
    pub fn related_ids(&self, skill_id: &str) -> Option<&BTreeSet<String>> {
        self.relationships.get(skill_id)
    }

    /// Display name for a skill id, falling back to the raw id when the
    /// ontology does not hold the skill. Jobs are allowed to reference ids
    /// outside the ontology; this is where that tolerance lives.
    pub fn skill_display_name(&self, skill_id: &str) -> String {
        self.skills
            .get(skill_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| skill_id.to_string())
    }

    /// Finds a skill by case-insensitive display name, then by
    /// case-insensitive synonym. No fuzziness here; that belongs to the
    /// matcher crate.
    pub fn find_skill_by_name(&self, name: &str) -> Option<&Skill> {
        let needle = name.to_lowercase();

        if let Some(skill) = self
            .skills
            .values()
            .find(|s| s.name.to_lowercase() == needle)
        {
            return Some(skill);
        }

        self.skills
            .values()
            .find(|s| s.synonyms.iter().any(|syn| syn.to_lowercase() == needle))
    }

    /// Returns the skills adjacent to `skill_id`; empty for unknown ids.
    pub fn get_related_skills(&self, skill_id: &str) -> Vec<&Skill> {
        let Some(related) = self.relationships.get(skill_id) else {
            return Vec::new();
        };
        related
            .iter()
            .filter_map(|id| self.skills.get(id))
            .collect()
    }

    /// Heuristic similarity between two skills in [0, 1].
    ///
    /// 1.0 for identical ids; 0.8 when `a` appears in `b`'s adjacency set
    /// (directional on purpose, so similarity is symmetric only when the
    /// catalog inserted both edges); otherwise 0.6 x Jaccard overlap of the
    /// two adjacency sets when both are non-empty; else 0.0.
    pub fn calculate_skill_similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }

        if let Some(related_b) = self.relationships.get(b) {
            if related_b.contains(a) {
                return DIRECT_RELATION_SIMILARITY;
            }
        }

        let related_a = self.relationships.get(a);
        let related_b = self.relationships.get(b);
        if let (Some(ra), Some(rb)) = (related_a, related_b) {
            if !ra.is_empty() && !rb.is_empty() {
                let intersection = ra.intersection(rb).count();
                let union = ra.union(rb).count();
                if union > 0 {
                    return SHARED_RELATION_WEIGHT * intersection as f64 / union as f64;
                }
            }
        }

        0.0
    }

    /// Jobs with at least one requirement on `skill_id` at or above
    /// `min_importance`, in catalog order.
    pub fn find_jobs_by_skill(&self, skill_id: &str, min_importance: f64) -> Vec<&Job> {
        self.jobs_in_order()
            .filter(|job| {
                job.required_skills
                    .iter()
                    .any(|req| req.skill_id == skill_id && req.importance >= min_importance)
            })
            .collect()
    }

    /// Canonical exact-id match score for a job in [0, 1].
    ///
    /// Each requirement the user holds contributes
    /// `importance x proficiency_ratio`, where the ratio is 1.0 at or above
    /// the required level and `user_rank / required_rank` below it; the sum
    /// is normalized by total importance. Unknown job ids, jobs without
    /// requirements, and zero total importance all score 0.0.
    ///
    /// This is distinct from the matcher crate's fuzzy-aware job matching;
    /// both exist and serve different callers.
    pub fn calculate_job_match_score(&self, user_skills: &[UserSkill], job_id: &str) -> f64 {
        let Some(job) = self.jobs.get(job_id) else {
            return 0.0;
        };
        if job.required_skills.is_empty() {
            return 0.0;
        }

        let held: HashMap<&str, &UserSkill> = user_skills
            .iter()
            .map(|us| (us.skill_id.as_str(), us))
            .collect();

        let total_importance: f64 = job.required_skills.iter().map(|r| r.importance).sum();
        if total_importance == 0.0 {
            return 0.0;
        }

        let mut score = 0.0;
        for req in &job.required_skills {
            if let Some(user_skill) = held.get(req.skill_id.as_str()) {
                let user_rank = f64::from(user_skill.level.rank());
                let required_rank = f64::from(req.required_level.rank());
                let proficiency_ratio = if user_rank >= required_rank {
                    1.0
                } else {
                    user_rank / required_rank
                };
                score += req.importance * proficiency_ratio;
            }
        }

        score / total_importance
    }

    /// Gaps between the user's skills and a job's requirements, sorted
    /// descending by `importance x gap_score` (stable, so ties keep the
    /// original requirement order). Unknown job ids yield an empty list.
    pub fn identify_skill_gaps(&self, user_skills: &[UserSkill], job_id: &str) -> Vec<SkillGap> {
        let Some(job) = self.jobs.get(job_id) else {
            return Vec::new();
        };

        let held: HashMap<&str, &UserSkill> = user_skills
            .iter()
            .map(|us| (us.skill_id.as_str(), us))
            .collect();

        let mut gaps = Vec::new();
        for req in &job.required_skills {
            let skill_name = self.skill_display_name(&req.skill_id);

            match held.get(req.skill_id.as_str()) {
                Some(user_skill) => {
                    let user_rank = user_skill.level.rank();
                    let required_rank = req.required_level.rank();
                    if user_rank < required_rank {
                        let gap_score =
                            f64::from(required_rank - user_rank) / f64::from(required_rank);
                        gaps.push(SkillGap {
                            skill_id: req.skill_id.clone(),
                            skill_name,
                            current_level: Some(user_skill.level),
                            required_level: req.required_level,
                            importance: req.importance,
                            gap_score,
                        });
                    }
                }
                None => {
                    gaps.push(SkillGap {
                        skill_id: req.skill_id.clone(),
                        skill_name,
                        current_level: None,
                        required_level: req.required_level,
                        importance: req.importance,
                        gap_score: 1.0,
                    });
                }
            }
        }

        gaps.sort_by(|a, b| {
            b.priority()
                .partial_cmp(&a.priority())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        debug!(job_id, gap_count = gaps.len(), "identified skill gaps");
        gaps
    }
}
