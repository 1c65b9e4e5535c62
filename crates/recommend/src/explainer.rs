//! Template explanations and recommended actions for a recommendation.

use waypoint_market::{MarketValidation, OccupationOutlook};
use waypoint_matcher::JobMatch;

/// Growth above which the explanation calls out strong growth.
const STRONG_GROWTH_PERCENT: f64 = 10.0;
/// Validation confidence needed before the explanation cites it.
const CITED_VALIDATION_CONFIDENCE: f64 = 0.6;
/// How many skill names each sentence lists at most.
const TOP_SKILLS: usize = 3;
/// Hard cap on recommended actions.
const MAX_ACTIONS: usize = 5;

/// Assembles the human-readable explanation for one job match.
pub fn generate_explanation(
    job_match: &JobMatch,
    outlook: Option<&OccupationOutlook>,
    validation: Option<&MarketValidation>,
) -> String {
    let mut parts = Vec::new();

    let match_pct = (job_match.match_score * 100.0) as i64;
    if job_match.matched_skills.is_empty() {
        parts.push(format!(
            "You have a {match_pct}% skill match for {}.",
            job_match.job.title
        ));
    } else {
        let matched: Vec<&str> = job_match
            .matched_skills
            .iter()
            .take(TOP_SKILLS)
            .map(|m| m.skill.name.as_str())
            .collect();
        parts.push(format!(
            "You have a {match_pct}% skill match for {}. Your matching skills include: {}.",
            job_match.job.title,
            matched.join(", ")
        ));
    }

    if !job_match.missing_skills.is_empty() {
        let missing: Vec<&str> = job_match
            .missing_skills
            .iter()
            .take(TOP_SKILLS)
            .map(String::as_str)
            .collect();
        parts.push(format!(
            "To strengthen your candidacy, consider developing: {}.",
            missing.join(", ")
        ));
    }

    if let Some(growth) = outlook.and_then(|o| o.growth_percent) {
        if growth > STRONG_GROWTH_PERCENT {
            parts.push(format!(
                "This field shows strong growth potential with {growth}% projected growth."
            ));
        } else if growth > 0.0 {
            parts.push(format!(
                "This field shows moderate growth with {growth}% projected growth."
            ));
        } else {
            parts.push(format!(
                "This field faces challenges with {growth}% projected change. \
                 Consider specialized skills to remain competitive."
            ));
        }
    }

    if let Some(v) = validation {
        if v.confidence > CITED_VALIDATION_CONFIDENCE {
            if v.is_current {
                parts.push("Current market data confirms strong demand for this role.".into());
            } else {
                parts.push("Market validation indicates stable demand for this role.".into());
            }
        }
    }

    parts.join(" ")
}

/// Suggests up to five actions, specific ones before generic filler.
pub fn generate_actions(
    job_match: &JobMatch,
    outlook: Option<&OccupationOutlook>,
) -> Vec<String> {
    let mut actions = Vec::new();

    for skill in job_match.missing_skills.iter().take(TOP_SKILLS) {
        actions.push(format!(
            "Learn {skill} through online courses or certification"
        ));
    }

    if !job_match.transferable_skills.is_empty() {
        actions.push("Highlight transferable skills in your resume and interviews".to_string());
    }

    if let Some(education) = outlook.and_then(|o| o.typical_education.as_deref()) {
        actions.push(format!(
            "Consider {} if not already completed",
            education.to_lowercase()
        ));
    }

    actions.extend(
        [
            "Build a portfolio showcasing relevant projects",
            "Network with professionals in this field",
            "Apply to entry-level positions to gain experience",
        ]
        .map(String::from),
    );

    actions.truncate(MAX_ACTIONS);
    actions
}
