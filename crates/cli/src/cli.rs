use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for the `waypoint` application.
#[derive(Debug, Parser)]
#[command(
    name = "waypoint",
    about = "Skill matching, career recommendations, and learning paths"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `waypoint` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolves free-text skill terms against the catalog.
    Match {
        /// Seed catalog YAML with skills and jobs.
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,
        /// Skill terms to resolve.
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Ranks cataloged jobs against resolved skill terms.
    Jobs {
        /// Seed catalog YAML with skills and jobs.
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,
        /// Minimum match score a job must reach.
        #[arg(long, default_value_t = 0.3)]
        min_score: f64,
        /// Skill terms to resolve.
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Produces ranked career recommendations for a skill set.
    Recommend {
        /// Seed catalog YAML with skills and jobs.
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,
        /// Optional market-outlook YAML keyed by occupation code.
        #[arg(long, value_name = "FILE")]
        market: Option<PathBuf>,
        /// Maximum recommendations returned.
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Skills held, as `TERM` or `TERM:LEVEL` (beginner, intermediate,
        /// advanced, expert; defaults to intermediate).
        #[arg(required = true)]
        skills: Vec<String>,
    },
    /// Builds a learning path toward one cataloged job.
    Plan {
        /// Seed catalog YAML with skills and jobs.
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,
        /// Learning-resource catalog YAML keyed by skill name.
        #[arg(long, value_name = "FILE")]
        resources: PathBuf,
        /// Optional planner config YAML (prerequisites, validation methods).
        #[arg(long, value_name = "FILE")]
        planner: Option<PathBuf>,
        /// Id of the target job in the catalog.
        #[arg(long, value_name = "JOB_ID")]
        job: String,
        /// Skills held, as `TERM` or `TERM:LEVEL`.
        #[arg(required = true)]
        skills: Vec<String>,
    },
}
