//! Shared test fixtures for waypoint crates.
//!
//! Builders for small ontologies, profiles, and YAML fixtures used by tests
//! in several crates of the workspace.

use waypoint_ontology::{
    Job, OntologyStore, Proficiency, Skill, SkillCategory, SkillRequirement, UserProfile,
    UserSkill,
};

/// Builds a technical skill with the given synonyms and related ids.
pub fn sample_skill(id: &str, name: &str, synonyms: &[&str], related: &[&str]) -> Skill {
    Skill {
        id: id.into(),
        name: name.into(),
        description: String::new(),
        category: SkillCategory::Technical,
        external_code: None,
        synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        related_skills: related.iter().map(|s| s.to_string()).collect(),
    }
}

/// Builds a mandatory skill requirement.
pub fn requirement(skill_id: &str, importance: f64, level: Proficiency) -> SkillRequirement {
    SkillRequirement {
        skill_id: skill_id.into(),
        importance,
        required_level: level,
        mandatory: true,
    }
}

/// Builds a job with the given requirements and no market summary fields.
pub fn sample_job(id: &str, title: &str, reqs: Vec<SkillRequirement>) -> Job {
    Job {
        id: id.into(),
        title: title.into(),
        description: String::new(),
        external_code: None,
        required_skills: reqs,
        growth_projection: None,
        median_salary: None,
    }
}

/// A small data-career ontology used across crate tests: Python, SQL,
/// Statistics, Data Analysis, Communication, plus data scientist and data
/// analyst roles.
pub fn data_career_store() -> OntologyStore {
    let mut store = OntologyStore::new();

    store.add_skill(Skill {
        description: "General-purpose programming language for scripting and data work".into(),
        ..sample_skill("python", "Python", &["python3", "py"], &["data_analysis"])
    });
    store.add_skill(Skill {
        description: "Relational database query language".into(),
        ..sample_skill("sql", "SQL", &["structured query language"], &["data_analysis"])
    });
    store.add_skill(Skill {
        description: "Collecting and interpreting quantitative evidence".into(),
        ..sample_skill("statistics", "Statistics", &["stats"], &["data_analysis"])
    });
    store.add_skill(Skill {
        description: "Exploring datasets to extract insight".into(),
        ..sample_skill(
            "data_analysis",
            "Data Analysis",
            &[],
            &["python", "sql", "statistics"],
        )
    });
    store.add_skill(Skill {
        category: SkillCategory::Soft,
        description: "Presenting findings to technical and non-technical audiences".into(),
        ..sample_skill("communication", "Communication", &[], &[])
    });

    store.add_job(Job {
        external_code: Some("15-2051".into()),
        ..sample_job(
            "data_scientist",
            "Data Scientist",
            vec![
                requirement("python", 0.9, Proficiency::Advanced),
                requirement("sql", 0.7, Proficiency::Intermediate),
                requirement("statistics", 0.8, Proficiency::Intermediate),
            ],
        )
    });
    store.add_job(Job {
        external_code: Some("15-2041".into()),
        ..sample_job(
            "data_analyst",
            "Data Analyst",
            vec![
                requirement("sql", 0.9, Proficiency::Intermediate),
                requirement("data_analysis", 0.8, Proficiency::Intermediate),
                requirement("communication", 0.4, Proficiency::Intermediate),
            ],
        )
    });

    store
}

/// Profile holding advanced Python and intermediate SQL.
pub fn python_sql_profile() -> UserProfile {
    UserProfile {
        id: "user-1".into(),
        name: Some("Test User".into()),
        skills: vec![
            UserSkill::new("python", Proficiency::Advanced),
            UserSkill::new("sql", Proficiency::Intermediate),
        ],
    }
}

/// Resource-catalog YAML covering Python and SQL with mixed costs.
pub fn resource_catalog_yaml() -> &'static str {
    r#"
Python:
  - title: Python for Everybody
    provider: Coursera
    url: https://example.org/python-for-everybody
    kind: course
    difficulty: beginner
    estimated_hours: 120
    cost: freemium
    rating: 4.8
  - title: Automate the Boring Stuff
    provider: No Starch Press
    url: https://example.org/automate
    kind: book
    difficulty: beginner
    estimated_hours: 40
    cost: free
  - title: PCAP Certification
    provider: Python Institute
    url: https://example.org/pcap
    kind: certification
    difficulty: intermediate
    estimated_hours: 80
    cost: paid
SQL:
  - title: SQL for Data Science
    provider: Coursera
    url: https://example.org/sql-for-data-science
    kind: course
    difficulty: beginner
    estimated_hours: 25
    cost: freemium
  - title: Interactive SQL Tutorial
    provider: SQLBolt
    url: https://example.org/sqlbolt
    kind: tutorial
    difficulty: beginner
    estimated_hours: 10
    cost: free
  - title: SQL Practice Problems
    provider: HackerRank
    url: https://example.org/sql-practice
    kind: practice
    difficulty: intermediate
    estimated_hours: 30
    cost: free
"#
}
