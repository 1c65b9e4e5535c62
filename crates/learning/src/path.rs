//! Milestone synthesis and path assembly.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::debug;
use waypoint_ontology::{OntologyStore, Proficiency, SkillGap, UserSkill};
use waypoint_recommend::CareerRecommendation;

use crate::config::PlannerConfig;
use crate::gaps::{analyze_gaps, prioritize_gaps};
use crate::resources::{
    LearningResource, ResourceCatalog, ResourceCost, ResourceDifficulty, ResourceKind,
};

/// Resources kept per milestone after level filtering.
const MAX_RESOURCES: usize = 3;
/// Weeks for a milestone synthesized without any curated resources.
const GENERIC_WEEKS: u32 = 6;
/// Hours assumed for a synthesized placeholder resource.
const GENERIC_HOURS: u32 = 40;
/// Base weeks for a curated milestone.
const BASE_WEEKS: u32 = 4;
/// Extra weeks when the skill is entirely absent.
const FULL_GAP_EXTRA_WEEKS: u32 = 4;
/// Extra weeks for a substantial (but partial) shortfall.
const HALF_GAP_EXTRA_WEEKS: u32 = 2;
/// Gap score at or above which the substantial-shortfall extra applies.
const HALF_GAP_THRESHOLD: f64 = 0.5;

/// Average resource difficulty at or below which a path reads as beginner.
const BEGINNER_DIFFICULTY_CEILING: f64 = 1.5;
/// Average resource difficulty at or below which a path reads as intermediate.
const INTERMEDIATE_DIFFICULTY_CEILING: f64 = 2.5;
/// Paid-resource count at or below which the cost band is the middle one.
const MID_COST_MAX_PAID: usize = 2;

/// One skill to close, with the resources and checkpoint to do it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningMilestone {
    /// Skill display name this milestone closes.
    pub skill_name: String,
    /// Proficiency to reach.
    pub target_level: Proficiency,
    /// Up to three resources, level-filtered from the catalog.
    pub resources: Vec<LearningResource>,
    /// Estimated weeks of effort.
    pub estimated_weeks: u32,
    /// Skill names that should be learned first.
    pub prerequisites: Vec<String>,
    /// How to demonstrate the skill once learned.
    pub validation_method: String,
}

/// Overall price band of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostBand {
    /// No paid resources.
    #[serde(rename = "Free to $100")]
    FreeToLow,
    /// One or two paid resources.
    #[serde(rename = "$100 to $500")]
    Moderate,
    /// Three or more paid resources.
    #[serde(rename = "$500 to $1500")]
    Substantial,
}

impl CostBand {
    /// Returns the display label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            CostBand::FreeToLow => "Free to $100",
            CostBand::Moderate => "$100 to $500",
            CostBand::Substantial => "$500 to $1500",
        }
    }
}

/// Overall difficulty band of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyBand {
    /// Mostly entry-level resources.
    Beginner,
    /// Mixed or unknown difficulty.
    Intermediate,
    /// Mostly advanced resources.
    Advanced,
}

/// A dependency-ordered sequence of milestones toward one target job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    /// Title of the job the path works toward.
    pub target_job_title: String,
    /// Sum of milestone week estimates.
    pub total_estimated_weeks: u32,
    /// Milestones in dependency order.
    pub milestones: Vec<LearningMilestone>,
    /// Names of the gaps that must be closed.
    pub priority_skills: Vec<String>,
    /// Names of the gaps that are nice to close.
    pub optional_skills: Vec<String>,
    /// Price band across all milestone resources.
    pub estimated_cost: CostBand,
    /// Difficulty band across all milestone resources.
    pub difficulty_level: DifficultyBand,
}

/// Builds learning paths from gap analyses, a resource catalog, and planner
/// config.
#[derive(Debug, Clone, Default)]
pub struct PathPlanner {
    catalog: ResourceCatalog,
    config: PlannerConfig,
}

impl PathPlanner {
    /// Creates a planner over a resource catalog with default config.
    pub fn new(catalog: ResourceCatalog) -> Self {
        Self {
            catalog,
            config: PlannerConfig::default(),
        }
    }

    /// Replaces the planner config.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the complete path for one recommendation.
    ///
    /// Every gap yields exactly one milestone, so a path for a non-empty gap
    /// set is never empty even when the catalog has nothing curated.
    pub fn build_path(
        &self,
        ontology: &OntologyStore,
        user_skills: &[UserSkill],
        recommendation: &CareerRecommendation,
    ) -> LearningPath {
        let gaps = analyze_gaps(ontology, user_skills, recommendation);
        let (priority_skills, optional_skills) = prioritize_gaps(&gaps);

        let milestones: Vec<LearningMilestone> = gaps
            .iter()
            .map(|gap| self.milestone_for_gap(gap))
            .collect();
        let milestones = sequence_milestones(milestones);

        let total_estimated_weeks = milestones.iter().map(|m| m.estimated_weeks).sum();
        let estimated_cost = estimate_cost(&milestones);
        let difficulty_level = assess_difficulty(&milestones);
        debug!(
            job = %recommendation.job.id,
            milestones = milestones.len(),
            weeks = total_estimated_weeks,
            "built learning path"
        );

        LearningPath {
            target_job_title: recommendation.job.title.clone(),
            total_estimated_weeks,
            milestones,
            priority_skills,
            optional_skills,
            estimated_cost,
            difficulty_level,
        }
    }

    /// One milestone for one gap.
    ///
    /// Uncatalogued skills get a synthesized placeholder resource rather
    /// than an empty milestone. Prerequisites apply only to skills the user
    /// is starting from zero; a shortfall on a held skill has none.
    fn milestone_for_gap(&self, gap: &SkillGap) -> LearningMilestone {
        let curated = self.catalog.resources_for(&gap.skill_name);

        let (resources, estimated_weeks) = if curated.is_empty() {
            (vec![placeholder_resource(&gap.skill_name)], GENERIC_WEEKS)
        } else {
            let mut weeks = BASE_WEEKS;
            if gap.gap_score >= 1.0 {
                weeks += FULL_GAP_EXTRA_WEEKS;
            } else if gap.gap_score >= HALF_GAP_THRESHOLD {
                weeks += HALF_GAP_EXTRA_WEEKS;
            }
            (filter_by_level(curated, gap.current_level), weeks)
        };

        let prerequisites = if gap.current_level.is_none() {
            self.config.prerequisites_for(&gap.skill_name).to_vec()
        } else {
            Vec::new()
        };

        LearningMilestone {
            skill_name: gap.skill_name.clone(),
            target_level: gap.required_level,
            resources,
            estimated_weeks,
            prerequisites,
            validation_method: self.config.validation_for(&gap.skill_name).to_string(),
        }
    }
}

fn placeholder_resource(skill_name: &str) -> LearningResource {
    LearningResource {
        title: format!("{skill_name} Fundamentals"),
        provider: "Various".to_string(),
        url: format!(
            "https://www.google.com/search?q=learn+{}",
            skill_name.to_lowercase().replace(' ', "+")
        ),
        kind: ResourceKind::Course,
        difficulty: ResourceDifficulty::Beginner,
        estimated_hours: GENERIC_HOURS,
        cost: ResourceCost::Freemium,
        rating: None,
    }
}

/// Picks up to three resources appropriate to where the learner starts.
///
/// Starting from zero keeps beginner and intermediate material; a partial
/// shortfall keeps intermediate and advanced; an advanced learner keeps
/// only advanced material and certifications. When the filter empties the
/// list the unfiltered head is used instead.
fn filter_by_level(
    resources: &[LearningResource],
    current: Option<Proficiency>,
) -> Vec<LearningResource> {
    let keep: Vec<&LearningResource> = match current {
        None => resources
            .iter()
            .filter(|r| {
                matches!(
                    r.difficulty,
                    ResourceDifficulty::Beginner | ResourceDifficulty::Intermediate
                )
            })
            .collect(),
        Some(Proficiency::Beginner) | Some(Proficiency::Intermediate) => resources
            .iter()
            .filter(|r| {
                matches!(
                    r.difficulty,
                    ResourceDifficulty::Intermediate | ResourceDifficulty::Advanced
                )
            })
            .collect(),
        Some(Proficiency::Advanced) | Some(Proficiency::Expert) => resources
            .iter()
            .filter(|r| {
                r.difficulty == ResourceDifficulty::Advanced
                    || r.kind == ResourceKind::Certification
            })
            .collect(),
    };

    if keep.is_empty() {
        resources.iter().take(MAX_RESOURCES).cloned().collect()
    } else {
        keep.into_iter().take(MAX_RESOURCES).cloned().collect()
    }
}

/// Orders milestones so prerequisites come before their dependents.
///
/// Repeatedly admits milestones whose prerequisites are all satisfied by
/// already-admitted skills. When no progress can be made (a cycle, or a
/// prerequisite outside the path) the remainder is appended in its original
/// order rather than dropped.
fn sequence_milestones(milestones: Vec<LearningMilestone>) -> Vec<LearningMilestone> {
    let mut ordered = Vec::with_capacity(milestones.len());
    let mut satisfied: BTreeSet<String> = BTreeSet::new();
    let mut remaining: Vec<LearningMilestone> = Vec::new();

    for milestone in milestones {
        if milestone.prerequisites.is_empty() {
            satisfied.insert(milestone.skill_name.clone());
            ordered.push(milestone);
        } else {
            remaining.push(milestone);
        }
    }

    while !remaining.is_empty() {
        let before = remaining.len();
        let mut deferred = Vec::new();
        for milestone in remaining {
            if milestone.prerequisites.iter().all(|p| satisfied.contains(p)) {
                satisfied.insert(milestone.skill_name.clone());
                ordered.push(milestone);
            } else {
                deferred.push(milestone);
            }
        }
        remaining = deferred;
        if remaining.len() == before {
            ordered.append(&mut remaining);
            break;
        }
    }

    ordered
}

fn estimate_cost(milestones: &[LearningMilestone]) -> CostBand {
    let paid = milestones
        .iter()
        .flat_map(|m| &m.resources)
        .filter(|r| r.cost == ResourceCost::Paid)
        .count();

    if paid == 0 {
        CostBand::FreeToLow
    } else if paid <= MID_COST_MAX_PAID {
        CostBand::Moderate
    } else {
        CostBand::Substantial
    }
}

fn assess_difficulty(milestones: &[LearningMilestone]) -> DifficultyBand {
    let scores: Vec<f64> = milestones
        .iter()
        .flat_map(|m| &m.resources)
        .map(|r| r.difficulty.score())
        .collect();
    if scores.is_empty() {
        return DifficultyBand::Intermediate;
    }

    let average = scores.iter().sum::<f64>() / scores.len() as f64;
    if average <= BEGINNER_DIFFICULTY_CEILING {
        DifficultyBand::Beginner
    } else if average <= INTERMEDIATE_DIFFICULTY_CEILING {
        DifficultyBand::Intermediate
    } else {
        DifficultyBand::Advanced
    }
}

/// The next milestone to start, given completed skill names.
///
/// Prefers the first incomplete milestone whose prerequisites are all
/// completed; when none qualifies, falls back to the first incomplete one.
pub fn next_milestone<'p>(
    path: &'p LearningPath,
    completed: &[String],
) -> Option<&'p LearningMilestone> {
    let incomplete = || {
        path.milestones
            .iter()
            .filter(|m| !completed.contains(&m.skill_name))
    };

    incomplete()
        .find(|m| m.prerequisites.iter().all(|p| completed.contains(p)))
        .or_else(|| incomplete().next())
}

/// Total hours across every resource in the path.
pub fn total_hours(path: &LearningPath) -> u32 {
    path.milestones
        .iter()
        .flat_map(|m| &m.resources)
        .map(|r| r.estimated_hours)
        .sum()
}

/// Whole weeks needed at the given pace, never less than one.
pub fn weeks_to_complete(path: &LearningPath, hours_per_week: u32) -> u32 {
    (total_hours(path) / hours_per_week.max(1)).max(1)
}

/// Projected completion date at the given weekly pace, from now.
pub fn estimate_completion_date(path: &LearningPath, hours_per_week: u32) -> OffsetDateTime {
    OffsetDateTime::now_utc() + Duration::weeks(i64::from(weeks_to_complete(path, hours_per_week)))
}
