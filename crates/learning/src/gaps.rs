//! Gap analysis against a career recommendation.

use std::collections::HashMap;

use tracing::debug;
use waypoint_ontology::{OntologyStore, Proficiency, SkillGap, UserSkill};
use waypoint_recommend::CareerRecommendation;

/// Importance assumed for a missing skill with no matching requirement.
const DEFAULT_MISSING_IMPORTANCE: f64 = 0.8;
/// Importance above which a gap is treated as priority regardless of size.
const PRIORITY_IMPORTANCE: f64 = 0.5;

/// Derives skill gaps for one recommendation.
///
/// Absence gaps come from the recommendation's missing-skill names so that
/// requirements already covered by a transferable skill are not re-listed.
/// Each missing name is traced back to its requirement for importance and
/// target level; names with no traceable requirement get a synthesized id
/// and conservative defaults. Shortfall gaps are then added for held skills
/// below the required level. The result sorts descending by priority.
pub fn analyze_gaps(
    ontology: &OntologyStore,
    user_skills: &[UserSkill],
    recommendation: &CareerRecommendation,
) -> Vec<SkillGap> {
    let job = &recommendation.job;
    let mut gaps = Vec::new();

    for missing in &recommendation.skill_match.missing_skills {
        let requirement = job.required_skills.iter().find(|req| {
            req.skill_id == *missing || ontology.skill_display_name(&req.skill_id) == *missing
        });

        let gap = match requirement {
            Some(req) => SkillGap {
                skill_id: req.skill_id.clone(),
                skill_name: missing.clone(),
                current_level: None,
                required_level: req.required_level,
                importance: req.importance,
                gap_score: 1.0,
            },
            None => SkillGap {
                skill_id: missing.to_lowercase().replace(' ', "_"),
                skill_name: missing.clone(),
                current_level: None,
                required_level: Proficiency::Intermediate,
                importance: DEFAULT_MISSING_IMPORTANCE,
                gap_score: 1.0,
            },
        };
        gaps.push(gap);
    }

    let held: HashMap<&str, &UserSkill> = user_skills
        .iter()
        .map(|us| (us.skill_id.as_str(), us))
        .collect();

    for req in &job.required_skills {
        let Some(user_skill) = held.get(req.skill_id.as_str()) else {
            continue;
        };
        let user_rank = user_skill.level.rank();
        let required_rank = req.required_level.rank();
        if user_rank < required_rank {
            gaps.push(SkillGap {
                skill_id: req.skill_id.clone(),
                skill_name: ontology.skill_display_name(&req.skill_id),
                current_level: Some(user_skill.level),
                required_level: req.required_level,
                importance: req.importance,
                gap_score: f64::from(required_rank - user_rank) / f64::from(required_rank),
            });
        }
    }

    gaps.sort_by(|a, b| {
        b.priority()
            .partial_cmp(&a.priority())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    debug!(job = %job.id, gaps = gaps.len(), "analyzed skill gaps");
    gaps
}

/// Splits gap names into priority and optional buckets.
///
/// A gap is priority when its requirement is important (above 0.5) or the
/// skill is entirely absent; everything else is optional.
pub fn prioritize_gaps(gaps: &[SkillGap]) -> (Vec<String>, Vec<String>) {
    let mut priority = Vec::new();
    let mut optional = Vec::new();

    for gap in gaps {
        if gap.importance > PRIORITY_IMPORTANCE || gap.gap_score >= 1.0 {
            priority.push(gap.skill_name.clone());
        } else {
            optional.push(gap.skill_name.clone());
        }
    }

    (priority, optional)
}
