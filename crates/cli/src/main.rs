//! Command-line interface for the `waypoint` application.
//!
//! Loads YAML catalogs, runs the matching and recommendation pipeline, and
//! prints pretty JSON so the output can be piped into other tools.

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use waypoint_catalog::load_store;
use waypoint_learning::{PathPlanner, PlannerConfig, ResourceCatalog};
use waypoint_market::StaticMarketData;
use waypoint_matcher::SkillMatcher;
use waypoint_ontology::{Proficiency, UserProfile, UserSkill};
use waypoint_recommend::{RecommendOptions, RecommendationEngine};

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Commands::Match { catalog, terms } => {
            let store = load_store(&catalog)
                .with_context(|| format!("loading catalog {}", catalog.display()))?;
            let matcher = SkillMatcher::new(&store);
            let refs: Vec<&str> = terms.iter().map(String::as_str).collect();
            print_json(&matcher.match_terms(&refs))
        }
        Commands::Jobs {
            catalog,
            min_score,
            terms,
        } => {
            let store = load_store(&catalog)
                .with_context(|| format!("loading catalog {}", catalog.display()))?;
            let matcher = SkillMatcher::new(&store);
            let refs: Vec<&str> = terms.iter().map(String::as_str).collect();
            let matches = matcher.match_terms(&refs);
            print_json(&matcher.find_matching_jobs(&matches, min_score))
        }
        Commands::Recommend {
            catalog,
            market,
            limit,
            skills,
        } => {
            let store = load_store(&catalog)
                .with_context(|| format!("loading catalog {}", catalog.display()))?;
            let market = market
                .map(|path| {
                    StaticMarketData::from_path(&path)
                        .with_context(|| format!("loading market data {}", path.display()))
                })
                .transpose()?;

            let mut engine = RecommendationEngine::new(&store);
            if let Some(provider) = market.as_ref() {
                engine = engine.with_market_data(provider);
            }

            let profile = profile_from_args(&skills)?;
            let options = RecommendOptions {
                limit,
                ..Default::default()
            };
            print_json(&engine.recommend(&profile, &options))
        }
        Commands::Plan {
            catalog,
            resources,
            planner,
            job,
            skills,
        } => {
            let store = load_store(&catalog)
                .with_context(|| format!("loading catalog {}", catalog.display()))?;
            let resources = ResourceCatalog::from_path(&resources)
                .with_context(|| format!("loading resources {}", resources.display()))?;
            let config = planner
                .map(|path| {
                    PlannerConfig::from_path(&path)
                        .with_context(|| format!("loading planner config {}", path.display()))
                })
                .transpose()?
                .unwrap_or_default();

            let profile = profile_from_args(&skills)?;
            let engine = RecommendationEngine::new(&store);
            let matches = {
                let terms: Vec<&str> = profile.skills.iter().map(|s| s.skill_id.as_str()).collect();
                engine.matcher().match_terms(&terms)
            };
            let job_match = engine
                .matcher()
                .find_matching_jobs(&matches, 0.0)
                .into_iter()
                .find(|jm| jm.job.id == job);
            let Some(job_match) = job_match else {
                bail!("job '{job}' is not in the catalog");
            };

            let recommendation = engine.build_recommendation(job_match, true);
            let planner = PathPlanner::new(resources).with_config(config);
            print_json(&planner.build_path(&store, &profile.skills, &recommendation))
        }
    }
}

/// Parses `TERM` or `TERM:LEVEL` arguments into a throwaway profile.
fn profile_from_args(args: &[String]) -> Result<UserProfile> {
    let skills = args
        .iter()
        .map(|arg| match arg.split_once(':') {
            Some((term, level)) => Ok(UserSkill::new(term, parse_level(level)?)),
            None => Ok(UserSkill::new(arg, Proficiency::Intermediate)),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(UserProfile {
        id: "cli".to_string(),
        name: None,
        skills,
    })
}

fn parse_level(level: &str) -> Result<Proficiency> {
    match level.to_lowercase().as_str() {
        "beginner" => Ok(Proficiency::Beginner),
        "intermediate" => Ok(Proficiency::Intermediate),
        "advanced" => Ok(Proficiency::Advanced),
        "expert" => Ok(Proficiency::Expert),
        other => bail!("unknown proficiency level '{other}'"),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
