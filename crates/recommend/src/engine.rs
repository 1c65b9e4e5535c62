use tracing::debug;
use waypoint_market::{MarketDataProvider, MarketValidator};
use waypoint_matcher::{JobMatch, SkillMatcher};
use waypoint_ontology::{Job, OntologyStore, UserProfile};

use crate::confidence::{blend_confidence, market_confidence};
use crate::explainer::{generate_actions, generate_explanation};
use crate::{CareerRecommendation, GrowthOutlook};

/// Match-score threshold used when gathering candidate jobs for a profile;
/// looser than the matcher's default so market signals can re-rank
/// borderline fits before the final cut.
const CANDIDATE_MIN_MATCH_SCORE: f64 = 0.3;
/// Neutral match score assigned to trending careers with no profile.
const TRENDING_MATCH_SCORE: f64 = 0.5;
/// Salary range spread around the median wage.
const SALARY_SPREAD: f64 = 0.25;

/// Options for [`RecommendationEngine::recommend`].
#[derive(Debug, Clone)]
pub struct RecommendOptions {
    /// Maximum number of recommendations returned.
    pub limit: usize,
    /// Minimum match score a candidate job must reach.
    pub min_match_score: f64,
    /// Whether to consult the validation oracle, when one is configured.
    pub validate: bool,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            min_match_score: CANDIDATE_MIN_MATCH_SCORE,
            validate: true,
        }
    }
}

/// Blends job matches with market signals into ranked recommendations.
pub struct RecommendationEngine<'a> {
    matcher: SkillMatcher<'a>,
    market: Option<&'a dyn MarketDataProvider>,
    validator: Option<&'a dyn MarketValidator>,
}

impl<'a> RecommendationEngine<'a> {
    /// Creates an engine over an ontology with no market signals configured.
    pub fn new(ontology: &'a OntologyStore) -> Self {
        Self {
            matcher: SkillMatcher::new(ontology),
            market: None,
            validator: None,
        }
    }

    /// Attaches a growth/wage projection provider.
    pub fn with_market_data(mut self, provider: &'a dyn MarketDataProvider) -> Self {
        self.market = Some(provider);
        self
    }

    /// Attaches a market-validation oracle.
    pub fn with_validator(mut self, validator: &'a dyn MarketValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// The matcher this engine resolves profiles with.
    pub fn matcher(&self) -> &SkillMatcher<'a> {
        &self.matcher
    }

    /// Ranked recommendations for a user profile.
    ///
    /// Resolves the profile's skill terms, gathers candidate jobs above
    /// `min_match_score`, enriches the top `2 x limit` candidates with
    /// market signals, and returns the best `limit` sorted descending by
    /// (confidence, match score).
    pub fn recommend(
        &self,
        profile: &UserProfile,
        options: &RecommendOptions,
    ) -> Vec<CareerRecommendation> {
        let terms: Vec<&str> = profile.skills.iter().map(|s| s.skill_id.as_str()).collect();
        let skill_matches = self.matcher.match_terms(&terms);
        let job_matches = self
            .matcher
            .find_matching_jobs(&skill_matches, options.min_match_score);
        debug!(
            profile = %profile.id,
            resolved = skill_matches.len(),
            candidates = job_matches.len(),
            "built candidate job matches"
        );

        let mut recommendations: Vec<CareerRecommendation> = job_matches
            .into_iter()
            .take(options.limit * 2)
            .map(|jm| self.build_recommendation(jm, options.validate))
            .collect();

        recommendations.sort_by(|a, b| {
            (b.confidence, b.match_score)
                .partial_cmp(&(a.confidence, a.match_score))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        recommendations.truncate(options.limit);
        recommendations
    }

    /// Builds one recommendation from a job match, pulling market signals
    /// for the job's external code when providers are configured.
    pub fn build_recommendation(
        &self,
        job_match: JobMatch,
        consult_validator: bool,
    ) -> CareerRecommendation {
        let outlook = job_match
            .job
            .external_code
            .as_deref()
            .and_then(|code| self.market.and_then(|m| m.outlook_for(code)));

        let validation = if consult_validator {
            self.validator
                .and_then(|v| v.validate(&job_match.job.title, outlook.as_ref()))
        } else {
            None
        };

        let market = market_confidence(outlook.as_ref(), validation.as_ref());
        let confidence = blend_confidence(job_match.match_score, market);

        let explanation = generate_explanation(&job_match, outlook.as_ref(), validation.as_ref());
        let recommended_actions = generate_actions(&job_match, outlook.as_ref());

        let salary_range = outlook.as_ref().and_then(|o| o.median_annual_wage).map(|m| {
            let median = f64::from(m);
            (
                (median * (1.0 - SALARY_SPREAD)) as u32,
                (median * (1.0 + SALARY_SPREAD)) as u32,
            )
        });
        let growth_outlook =
            GrowthOutlook::from_growth_percent(outlook.as_ref().and_then(|o| o.growth_percent));

        CareerRecommendation {
            job: job_match.job.clone(),
            match_score: job_match.match_score,
            skill_match: job_match,
            market_data: outlook,
            market_validation: validation,
            explanation,
            confidence,
            recommended_actions,
            salary_range,
            growth_outlook,
        }
    }

    /// Trending careers regardless of any profile: the provider's fastest
    /// growing occupations wrapped as neutral-match recommendations. Empty
    /// when no market provider is configured.
    pub fn trending_careers(&self, limit: usize) -> Vec<CareerRecommendation> {
        let Some(market) = self.market else {
            return Vec::new();
        };

        let mut trending: Vec<CareerRecommendation> = market
            .fastest_growing(limit)
            .into_iter()
            .map(|outlook| {
                let job = Job {
                    id: format!("trending_{}", outlook.occupation_code),
                    title: outlook.occupation_title.clone(),
                    description: format!(
                        "Growing career in {}",
                        outlook.occupation_title.to_lowercase()
                    ),
                    external_code: Some(outlook.occupation_code.clone()),
                    required_skills: Vec::new(),
                    growth_projection: outlook.growth_percent,
                    median_salary: outlook.median_annual_wage.map(f64::from),
                };
                let job_match = JobMatch {
                    job,
                    match_score: TRENDING_MATCH_SCORE,
                    matched_skills: Vec::new(),
                    missing_skills: Vec::new(),
                    transferable_skills: Vec::new(),
                };
                self.build_recommendation(job_match, true)
            })
            .collect();

        trending.truncate(limit);
        trending
    }
}
