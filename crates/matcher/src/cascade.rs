use serde::{Deserialize, Serialize};
use tracing::debug;
use waypoint_ontology::Skill;

use crate::keywords::extract_keywords;
use crate::SkillMatcher;

/// Score and confidence assigned to synonym matches.
const SYNONYM_SCORE: f64 = 0.9;
/// Minimum edit-similarity a fuzzy candidate must clear.
const FUZZY_THRESHOLD: f64 = 0.4;
/// Floor applied when the input is a substring of the skill name.
const FUZZY_SUBSTRING_BOOST: f64 = 0.8;
/// Floor applied when the skill name is a substring of the input.
const FUZZY_REVERSE_SUBSTRING_BOOST: f64 = 0.7;
/// Confidence discount for fuzzy matches.
const FUZZY_CONFIDENCE_FACTOR: f64 = 0.8;
/// Minimum keyword-coverage score a semantic candidate must clear.
const SEMANTIC_THRESHOLD: f64 = 0.3;
/// Confidence discount for semantic matches.
const SEMANTIC_CONFIDENCE_FACTOR: f64 = 0.6;

/// Which cascade stage produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Case-insensitive equality with a skill's display name.
    Exact,
    /// Case-insensitive equality with a registered synonym.
    Synonym,
    /// Normalized edit similarity against skill names.
    Fuzzy,
    /// Keyword overlap against skill name plus description.
    Semantic,
}

impl MatchStrategy {
    /// Returns a stable label for this strategy.
    pub fn label(&self) -> &'static str {
        match self {
            MatchStrategy::Exact => "exact",
            MatchStrategy::Synonym => "synonym",
            MatchStrategy::Fuzzy => "fuzzy",
            MatchStrategy::Semantic => "semantic",
        }
    }
}

/// Result of resolving one raw term to an ontology skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// The raw input term.
    pub term: String,
    /// The resolved skill.
    pub skill: Skill,
    /// Match score in (0, 1].
    pub score: f64,
    /// Which stage fired.
    pub strategy: MatchStrategy,
    /// Confidence in (0, 1]; lower-precedence stages discount their score.
    pub confidence: f64,
}

impl<'a> SkillMatcher<'a> {
    /// Resolves one raw term through the cascade. Stages are tried in strict
    /// order and the first hit wins; `None` means every stage declined.
    pub fn match_term(&self, term: &str) -> Option<SkillMatch> {
        let matched = self
            .exact_match(term)
            .or_else(|| self.synonym_match(term))
            .or_else(|| self.fuzzy_match(term))
            .or_else(|| self.semantic_match(term));

        match &matched {
            Some(m) => debug!(
                term,
                skill = %m.skill.id,
                strategy = m.strategy.label(),
                score = m.score,
                "resolved skill term"
            ),
            None => debug!(term, "no cascade stage matched"),
        }
        matched
    }

    fn exact_match(&self, term: &str) -> Option<SkillMatch> {
        let needle = term.to_lowercase().trim().to_string();
        self.ontology
            .skills()
            .find(|skill| skill.name.to_lowercase() == needle)
            .map(|skill| SkillMatch {
                term: term.to_string(),
                skill: skill.clone(),
                score: 1.0,
                strategy: MatchStrategy::Exact,
                confidence: 1.0,
            })
    }

    fn synonym_match(&self, term: &str) -> Option<SkillMatch> {
        let needle = term.to_lowercase().trim().to_string();
        let skill_ids = self.synonym_index.get(&needle)?;
        // First id wins on collision.
        let skill = skill_ids.first().and_then(|id| self.ontology.skill(id))?;
        Some(SkillMatch {
            term: term.to_string(),
            skill: skill.clone(),
            score: SYNONYM_SCORE,
            strategy: MatchStrategy::Synonym,
            confidence: SYNONYM_SCORE,
        })
    }

    fn fuzzy_match(&self, term: &str) -> Option<SkillMatch> {
        let needle = term.to_lowercase().trim().to_string();
        let mut best: Option<(&Skill, f64)> = None;

        for skill in self.ontology.skills() {
            let name = skill.name.to_lowercase();
            let mut score = strsim::normalized_levenshtein(&needle, &name);

            if name.contains(&needle) {
                score = score.max(FUZZY_SUBSTRING_BOOST);
            } else if needle.contains(&name) {
                score = score.max(FUZZY_REVERSE_SUBSTRING_BOOST);
            }

            if score > FUZZY_THRESHOLD && best.map_or(true, |(_, b)| score > b) {
                best = Some((skill, score));
            }
        }

        best.map(|(skill, score)| SkillMatch {
            term: term.to_string(),
            skill: skill.clone(),
            score,
            strategy: MatchStrategy::Fuzzy,
            confidence: score * FUZZY_CONFIDENCE_FACTOR,
        })
    }

    fn semantic_match(&self, term: &str) -> Option<SkillMatch> {
        let keywords = extract_keywords(term);
        if keywords.is_empty() {
            return None;
        }

        let mut best: Option<(&Skill, f64)> = None;
        for skill in self.ontology.skills() {
            let text = format!("{} {}", skill.name, skill.description).to_lowercase();
            let hits = keywords.iter().filter(|k| text.contains(k.as_str())).count();
            if hits == 0 {
                continue;
            }
            let score = hits as f64 / keywords.len() as f64;
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((skill, score));
            }
        }

        match best {
            Some((skill, score)) if score > SEMANTIC_THRESHOLD => Some(SkillMatch {
                term: term.to_string(),
                skill: skill.clone(),
                score,
                strategy: MatchStrategy::Semantic,
                confidence: score * SEMANTIC_CONFIDENCE_FACTOR,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_ontology::{OntologyStore, Skill, SkillCategory};

    fn skill(id: &str, name: &str, description: &str, synonyms: &[&str]) -> Skill {
        Skill {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: SkillCategory::Technical,
            external_code: None,
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            related_skills: Vec::new(),
        }
    }

    fn sample_store() -> OntologyStore {
        let mut store = OntologyStore::new();
        store.add_skill(skill(
            "python",
            "Python",
            "General-purpose programming language used for scripting and data work",
            &["python3", "py"],
        ));
        store.add_skill(skill(
            "machine_learning",
            "Machine Learning",
            "Training statistical models that learn patterns from data",
            &["ML"],
        ));
        store.add_skill(skill(
            "sql",
            "SQL",
            "Relational database query language",
            &["structured query language"],
        ));
        store
    }

    #[test]
    fn exact_match_scores_full_confidence() {
        let store = sample_store();
        let matcher = SkillMatcher::new(&store);
        let m = matcher.match_term("python").unwrap();

        assert_eq!(m.skill.id, "python");
        assert_eq!(m.strategy, MatchStrategy::Exact);
        assert_eq!(m.score, 1.0);
        assert_eq!(m.confidence, 1.0);
    }

    #[test]
    fn exact_beats_synonym_of_another_skill() {
        let mut store = sample_store();
        // "Python" is now also a synonym of a different skill; the exact
        // display-name match must still win.
        store.add_skill(skill("serpent", "Serpent Handling", "", &["Python"]));
        let matcher = SkillMatcher::new(&store);

        let m = matcher.match_term("Python").unwrap();
        assert_eq!(m.skill.id, "python");
        assert_eq!(m.strategy, MatchStrategy::Exact);
    }

    #[test]
    fn synonym_match_scores_point_nine() {
        let store = sample_store();
        let matcher = SkillMatcher::new(&store);
        let m = matcher.match_term("ML").unwrap();

        assert_eq!(m.skill.id, "machine_learning");
        assert_eq!(m.strategy, MatchStrategy::Synonym);
        assert_eq!(m.score, 0.9);
        assert_eq!(m.confidence, 0.9);
    }

    #[test]
    fn synonym_collision_first_skill_id_wins() {
        let mut store = OntologyStore::new();
        store.add_skill(skill("alpha", "Alpha", "", &["shared"]));
        store.add_skill(skill("beta", "Beta", "", &["shared"]));
        let matcher = SkillMatcher::new(&store);

        let m = matcher.match_term("shared").unwrap();
        assert_eq!(m.skill.id, "alpha");
    }

    #[test]
    fn fuzzy_match_handles_typos() {
        let store = sample_store();
        let matcher = SkillMatcher::new(&store);
        let m = matcher.match_term("pythn").unwrap();

        assert_eq!(m.skill.id, "python");
        assert_eq!(m.strategy, MatchStrategy::Fuzzy);
        assert!(m.score > 0.4);
        assert!((m.confidence - m.score * 0.8).abs() < 1e-9);
    }

    #[test]
    fn fuzzy_substring_floors_score_at_point_eight() {
        let store = sample_store();
        let matcher = SkillMatcher::new(&store);
        // "machine" is a substring of "machine learning".
        let m = matcher.match_term("machine").unwrap();

        assert_eq!(m.skill.id, "machine_learning");
        assert_eq!(m.strategy, MatchStrategy::Fuzzy);
        assert!(m.score >= 0.8);
    }

    #[test]
    fn fuzzy_reverse_substring_floors_score_at_point_seven() {
        let store = sample_store();
        let matcher = SkillMatcher::new(&store);
        let m = matcher.match_term("advanced sql tuning wizardry").unwrap();

        assert_eq!(m.skill.id, "sql");
        assert_eq!(m.strategy, MatchStrategy::Fuzzy);
        assert!(m.score >= 0.7);
    }

    #[test]
    fn fuzzy_never_fires_when_exact_or_synonym_hit() {
        let store = sample_store();
        let matcher = SkillMatcher::new(&store);
        assert_eq!(
            matcher.match_term("SQL").unwrap().strategy,
            MatchStrategy::Exact
        );
        assert_eq!(
            matcher.match_term("py").unwrap().strategy,
            MatchStrategy::Synonym
        );
    }

    #[test]
    fn semantic_match_counts_keyword_coverage() {
        let store = sample_store();
        let matcher = SkillMatcher::new(&store);
        let m = matcher
            .match_term("training statistical models on patterns")
            .unwrap();

        assert_eq!(m.skill.id, "machine_learning");
        assert_eq!(m.strategy, MatchStrategy::Semantic);
        assert!(m.score > 0.3);
        assert!((m.confidence - m.score * 0.6).abs() < 1e-9);
    }

    #[test]
    fn unmatched_terms_are_dropped_from_batches() {
        let store = sample_store();
        let matcher = SkillMatcher::new(&store);
        let matches = matcher.match_terms(&["python", "zzzzqqq xyzygy"]);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].skill.id, "python");
    }

    #[test]
    fn expand_terms_includes_related_skill_names() {
        let mut store = OntologyStore::new();
        store.add_skill(Skill {
            related_skills: vec!["sql".into()],
            ..skill("python", "Python", "", &[])
        });
        store.add_skill(skill("sql", "SQL", "", &[]));
        let matcher = SkillMatcher::new(&store);

        let expansions = matcher.expand_terms(&["python", "nonsense zyzzyva"]);
        assert_eq!(expansions["python"], vec!["Python", "SQL"]);
        assert!(expansions["nonsense zyzzyva"].is_empty());
    }

    #[test]
    fn strategy_labels_are_stable() {
        assert_eq!(MatchStrategy::Exact.label(), "exact");
        assert_eq!(MatchStrategy::Synonym.label(), "synonym");
        assert_eq!(MatchStrategy::Fuzzy.label(), "fuzzy");
        assert_eq!(MatchStrategy::Semantic.label(), "semantic");
    }
}
