use serde::{Deserialize, Serialize};

/// Broad category a skill belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    /// Tool, language, or domain-specific technical competency.
    Technical,
    /// Interpersonal and collaboration skills.
    Soft,
    /// Reasoning, analysis, and problem-solving skills.
    Cognitive,
    /// Physical or manual skills.
    Physical,
}

impl SkillCategory {
    /// Returns a stable lowercase label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Cognitive => "cognitive",
            SkillCategory::Physical => "physical",
        }
    }
}

/// Ordinal proficiency depth for a skill.
///
/// Levels form a strict total order (beginner < intermediate < advanced <
/// expert). All arithmetic comparisons go through [`Proficiency::rank`],
/// never through string comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    /// Entry-level familiarity.
    Beginner,
    /// Working proficiency.
    Intermediate,
    /// Deep, independent proficiency.
    Advanced,
    /// Authoritative mastery.
    Expert,
}

impl Proficiency {
    /// Integer rank used for gap and match arithmetic (1..=4).
    pub fn rank(self) -> u8 {
        match self {
            Proficiency::Beginner => 1,
            Proficiency::Intermediate => 2,
            Proficiency::Advanced => 3,
            Proficiency::Expert => 4,
        }
    }

    /// Returns a stable lowercase label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
            Proficiency::Expert => "expert",
        }
    }
}

/// Canonical, named competency unit in the ontology.
///
/// Skills are created at catalog load time and are immutable thereafter
/// within a process lifetime; the ontology may add more over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique id within one ontology instance.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description, searched by the semantic matching stage.
    pub description: String,
    /// Category this skill belongs to.
    pub category: SkillCategory,
    /// Optional external-catalog code (e.g. an O*NET element id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    /// Alternative names this skill is known by.
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Ids of related skills. Insertion into the relationship graph is
    /// one-directional: if A lists B here, B does not list A unless the
    /// catalog says so explicitly.
    #[serde(default)]
    pub related_skills: Vec<String>,
}

/// One weighted skill requirement owned by exactly one [`Job`].
///
/// Importance values across a job's requirements are not required to sum to
/// one; scoring normalizes by their sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRequirement {
    /// Id of the required skill. May reference a skill the ontology does not
    /// hold; consumers fall back to the raw id as a display name.
    pub skill_id: String,
    /// Weight of this requirement in [0, 1].
    pub importance: f64,
    /// Minimum proficiency the job expects.
    pub required_level: Proficiency,
    /// Whether the requirement is a hard one.
    #[serde(default = "default_mandatory")]
    pub mandatory: bool,
}

fn default_mandatory() -> bool {
    true
}

/// Canonical role with a weighted set of required skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique id within one ontology instance.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Optional external-catalog code used to key market-data lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    /// Ordered skill requirements.
    #[serde(default)]
    pub required_skills: Vec<SkillRequirement>,
    /// Optional growth summary carried from the seed catalog (percent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_projection: Option<f64>,
    /// Optional median salary summary carried from the seed catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_salary: Option<f64>,
}

/// A skill the user holds, with proficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSkill {
    /// Id of the held skill.
    pub skill_id: String,
    /// Proficiency the user has reached.
    pub level: Proficiency,
    /// Optional years of experience with this skill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<u32>,
    /// Whether the skill claim has been validated.
    #[serde(default)]
    pub validated: bool,
}

impl UserSkill {
    /// Convenience constructor for an unvalidated skill claim.
    pub fn new(skill_id: impl Into<String>, level: Proficiency) -> Self {
        Self {
            skill_id: skill_id.into(),
            level,
            years_experience: None,
            validated: false,
        }
    }
}

/// Minimal user profile the recommendation pipeline consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Opaque user id.
    pub id: String,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Skills the user claims.
    #[serde(default)]
    pub skills: Vec<UserSkill>,
}

/// Normalized severity of one proficiency shortfall or absence.
///
/// Derived, never stored. `gap_score` is 1.0 when the skill is entirely
/// absent, otherwise `(required_rank - current_rank) / required_rank`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    /// Id of the lacking skill.
    pub skill_id: String,
    /// Display name, falling back to the raw id for unknown skills.
    pub skill_name: String,
    /// Level the user currently holds, if any.
    pub current_level: Option<Proficiency>,
    /// Level the job requires.
    pub required_level: Proficiency,
    /// Importance of the underlying requirement.
    pub importance: f64,
    /// Severity in [0, 1]; higher means a bigger gap.
    pub gap_score: f64,
}

impl SkillGap {
    /// Priority weight used to order gaps (importance x severity).
    pub fn priority(&self) -> f64 {
        self.importance * self.gap_score
    }
}
