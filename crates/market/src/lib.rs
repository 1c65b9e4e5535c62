//! Advisory labor-market signals for waypoint.
//!
//! The recommendation scorer treats market data as optional, already-resolved
//! input: growth/wage projections per occupation code and free-text
//! validations per occupation title. The live integrations that produce such
//! data (labor statistics APIs, web-search oracles) are out of scope here;
//! this crate defines their interfaces plus static, file-backed
//! implementations suitable for seeding and tests.
//!
//! Failure semantics at this boundary are uniform: no record means `None`,
//! never an error, so a provider outage upstream degrades into the scorer's
//! neutral defaults instead of propagating.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Structured growth/wage projection for one occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationOutlook {
    /// External occupation code (matches `Job::external_code`).
    pub occupation_code: String,
    /// Occupation title as the data source names it.
    pub occupation_title: String,
    /// Projected employment growth in percent; negative means decline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_percent: Option<f64>,
    /// Median annual wage in whole currency units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_annual_wage: Option<u32>,
    /// Typical entry-level education, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_education: Option<String>,
}

/// Free-text market validation with confidence and recency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketValidation {
    /// Summary text returned by the validation oracle.
    pub summary: String,
    /// Source citations backing the summary.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Oracle's own confidence in [0, 1].
    pub confidence: f64,
    /// Whether the underlying data looked current.
    pub is_current: bool,
}

/// Source of growth/wage projections, keyed by occupation code.
pub trait MarketDataProvider {
    /// Projection for one occupation code; `None` when no record exists.
    fn outlook_for(&self, occupation_code: &str) -> Option<OccupationOutlook>;

    /// Occupations with the highest projected growth, descending, at most
    /// `limit` of them. Records without a growth figure are excluded.
    fn fastest_growing(&self, limit: usize) -> Vec<OccupationOutlook>;
}

/// Source of per-title market validations.
pub trait MarketValidator {
    /// Validation for one occupation title; `None` when the oracle has
    /// nothing (including when an upstream call failed — callers convert
    /// failures into absence before reaching the scorer).
    fn validate(
        &self,
        occupation_title: &str,
        outlook: Option<&OccupationOutlook>,
    ) -> Option<MarketValidation>;
}

/// Error loading a static market-data table.
#[derive(Debug, thiserror::Error)]
pub enum MarketDataError {
    /// The table file could not be read.
    #[error("failed to read market data file: {0}")]
    Io(#[from] std::io::Error),
    /// The table file was not valid YAML of the expected shape.
    #[error("failed to parse market data: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// [`MarketDataProvider`] backed by an in-memory table loaded from YAML.
#[derive(Debug, Clone, Default)]
pub struct StaticMarketData {
    records: BTreeMap<String, OccupationOutlook>,
}

impl StaticMarketData {
    /// Builds a provider from a list of outlook records; later records with
    /// a duplicate code replace earlier ones.
    pub fn new(records: impl IntoIterator<Item = OccupationOutlook>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|r| (r.occupation_code.clone(), r))
                .collect(),
        }
    }

    /// Parses a YAML list of outlook records.
    pub fn from_yaml(yaml: &str) -> Result<Self, MarketDataError> {
        let records: Vec<OccupationOutlook> = serde_yaml::from_str(yaml)?;
        debug!(count = records.len(), "loaded market data records");
        Ok(Self::new(records))
    }

    /// Reads and parses a YAML file of outlook records.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MarketDataError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MarketDataProvider for StaticMarketData {
    fn outlook_for(&self, occupation_code: &str) -> Option<OccupationOutlook> {
        self.records.get(occupation_code).cloned()
    }

    fn fastest_growing(&self, limit: usize) -> Vec<OccupationOutlook> {
        let mut records: Vec<OccupationOutlook> = self
            .records
            .values()
            .filter(|r| r.growth_percent.is_some())
            .cloned()
            .collect();
        records.sort_by(|a, b| {
            b.growth_percent
                .partial_cmp(&a.growth_percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        records.truncate(limit);
        records
    }
}

/// [`MarketValidator`] backed by a fixed per-title table.
///
/// Stands in for the web-search oracle in tests and offline runs; titles are
/// matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct StaticValidations {
    records: BTreeMap<String, MarketValidation>,
}

impl StaticValidations {
    /// Builds a validator from (title, validation) pairs.
    pub fn new(records: impl IntoIterator<Item = (String, MarketValidation)>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|(title, v)| (title.to_lowercase(), v))
                .collect(),
        }
    }

    /// Parses a YAML map of title → validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, MarketDataError> {
        let records: BTreeMap<String, MarketValidation> = serde_yaml::from_str(yaml)?;
        Ok(Self::new(records))
    }
}

impl MarketValidator for StaticValidations {
    fn validate(
        &self,
        occupation_title: &str,
        _outlook: Option<&OccupationOutlook>,
    ) -> Option<MarketValidation> {
        self.records.get(&occupation_title.to_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlook(code: &str, growth: Option<f64>) -> OccupationOutlook {
        OccupationOutlook {
            occupation_code: code.into(),
            occupation_title: code.to_uppercase(),
            growth_percent: growth,
            median_annual_wage: Some(100_000),
            typical_education: None,
        }
    }

    #[test]
    fn outlook_lookup_misses_return_none() {
        let provider = StaticMarketData::new([outlook("15-2051", Some(35.0))]);
        assert!(provider.outlook_for("15-2051").is_some());
        assert!(provider.outlook_for("00-0000").is_none());
    }

    #[test]
    fn fastest_growing_sorts_descending_and_truncates() {
        let provider = StaticMarketData::new([
            outlook("a", Some(5.0)),
            outlook("b", Some(22.0)),
            outlook("c", None),
            outlook("d", Some(-3.0)),
        ]);
        let top = provider.fastest_growing(2);
        let codes: Vec<&str> = top.iter().map(|o| o.occupation_code.as_str()).collect();
        assert_eq!(codes, vec!["b", "a"]);
    }

    #[test]
    fn yaml_round_trip() {
        let yaml = r#"
- occupation_code: "15-2051"
  occupation_title: Data Scientists
  growth_percent: 35.2
  median_annual_wage: 103500
  typical_education: "Bachelor's degree"
- occupation_code: "43-9021"
  occupation_title: Data Entry Keyers
  growth_percent: -25.1
"#;
        let provider = StaticMarketData::from_yaml(yaml).unwrap();
        assert_eq!(provider.len(), 2);
        let ds = provider.outlook_for("15-2051").unwrap();
        assert_eq!(ds.growth_percent, Some(35.2));
        assert_eq!(ds.median_annual_wage, Some(103500));
        assert_eq!(ds.typical_education.as_deref(), Some("Bachelor's degree"));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = StaticMarketData::from_yaml("not: [valid").unwrap_err();
        assert!(matches!(err, MarketDataError::Parse(_)));
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market.yaml");
        std::fs::write(
            &path,
            "- occupation_code: \"x\"\n  occupation_title: X\n  growth_percent: 1.0\n",
        )
        .unwrap();
        let provider = StaticMarketData::from_path(&path).unwrap();
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn validations_match_titles_case_insensitively() {
        let validator = StaticValidations::new([(
            "Data Scientist".to_string(),
            MarketValidation {
                summary: "Strong demand".into(),
                sources: vec!["https://example.org".into()],
                confidence: 0.8,
                is_current: true,
            },
        )]);

        assert!(validator.validate("data scientist", None).is_some());
        assert!(validator.validate("Taxidermist", None).is_none());
    }
}
