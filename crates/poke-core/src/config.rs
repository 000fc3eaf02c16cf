//! Query configuration and its portable clipboard form
//!
//! `QueryConfig` is the full parameterization of a similarity query. The
//! portable form is the self-describing JSON placed on the clipboard by
//! export and consumed by import; its key names are a wire contract shared
//! with any other producer.

use serde::{Deserialize, Serialize};

use crate::schema::VectorStrengths;
use crate::{PokeError, Result};

/// Recognized result sizes for a similarity query.
pub const K_CHOICES: [u32; 5] = [10, 20, 30, 40, 50];

/// Scoring algorithm used by the backend index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Euclidean,
    Cosine,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Euclidean => "euclidean",
            Algorithm::Cosine => "cosine",
        }
    }

    pub fn from_name(name: &str) -> Option<Algorithm> {
        match name {
            "euclidean" => Some(Algorithm::Euclidean),
            "cosine" => Some(Algorithm::Cosine),
            _ => None,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = PokeError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::from_name(s)
            .ok_or_else(|| PokeError::Import(format!("unrecognized algorithm: {s}")))
    }
}

/// The full parameterization of one similarity query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    pub algorithm: Algorithm,
    pub k: u32,
    pub strengths: VectorStrengths,
}

impl QueryConfig {
    /// Session defaults: cosine scoring, ten results, and whatever strengths
    /// the backend advertised.
    pub fn new(strengths: VectorStrengths) -> Self {
        Self {
            algorithm: Algorithm::Cosine,
            k: 10,
            strengths,
        }
    }

    pub fn to_portable(&self) -> PortableSettings {
        PortableSettings {
            algorithm: self.algorithm,
            k: self.k,
            vector_strengths: self.strengths.clone(),
        }
    }

    /// Apply a portable-form payload field by field.
    ///
    /// Unparsable text fails the whole import with no effect. Otherwise each
    /// of the three fields is validated and applied independently:
    /// `algorithm` and `k` only when recognized, `vectorStrengths` only when
    /// schema-complete and all-numeric. The outcome records what was
    /// accepted so callers can report skipped fields.
    pub fn apply_portable(&mut self, text: &str) -> Result<ImportOutcome> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| PokeError::Import(format!("unparsable settings: {e}")))?;
        let object = value
            .as_object()
            .ok_or_else(|| PokeError::Import("settings must be a JSON object".into()))?;

        let mut outcome = ImportOutcome::default();

        if let Some(algorithm) = object
            .get("algorithm")
            .and_then(|v| v.as_str())
            .and_then(Algorithm::from_name)
        {
            self.algorithm = algorithm;
            outcome.algorithm_applied = true;
        }

        // Producers may serialize k as a float (30.0); any numeric form
        // with an integral value is acceptable.
        if let Some(k) = object
            .get("k")
            .and_then(|v| v.as_f64())
            .filter(|k| k.fract() == 0.0)
            .map(|k| k as u32)
            .filter(|k| K_CHOICES.contains(k))
        {
            self.k = k;
            outcome.k_applied = true;
        }

        if let Some(block) = object.get("vectorStrengths") {
            if let Ok(strengths) = VectorStrengths::from_json_value(block) {
                self.strengths = strengths;
                outcome.strengths_applied = true;
            }
        }

        Ok(outcome)
    }
}

/// The self-describing clipboard form: `{ algorithm, k, vectorStrengths }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortableSettings {
    pub algorithm: Algorithm,
    pub k: u32,
    #[serde(rename = "vectorStrengths")]
    pub vector_strengths: VectorStrengths,
}

impl PortableSettings {
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PokeError::Import(format!("failed to serialize settings: {e}")))
    }
}

/// Which fields of an imported payload were accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    pub algorithm_applied: bool,
    pub k_applied: bool,
    pub strengths_applied: bool,
}

impl ImportOutcome {
    pub fn any_applied(&self) -> bool {
        self.algorithm_applied || self.k_applied || self.strengths_applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> QueryConfig {
        QueryConfig::new(VectorStrengths::zeroed())
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::from_name("cosine"), Some(Algorithm::Cosine));
        assert_eq!(Algorithm::from_name("euclidean"), Some(Algorithm::Euclidean));
        assert_eq!(Algorithm::from_name("manhattan"), None);
        assert_eq!(
            serde_json::to_string(&Algorithm::Cosine).unwrap(),
            "\"cosine\""
        );
    }

    #[test]
    fn test_defaults() {
        let config = config();
        assert_eq!(config.algorithm, Algorithm::Cosine);
        assert_eq!(config.k, 10);
    }

    #[test]
    fn test_portable_form_key_names() {
        let text = config().to_portable().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value.get("algorithm").is_some());
        assert!(value.get("k").is_some());
        assert!(value.get("vectorStrengths").is_some());
    }

    #[test]
    fn test_apply_portable_fields_are_independent() {
        let mut config = config();
        // Bad algorithm, good k: k still applies.
        let payload = json!({ "algorithm": "manhattan", "k": 30 }).to_string();
        let outcome = config.apply_portable(&payload).unwrap();
        assert!(!outcome.algorithm_applied);
        assert!(outcome.k_applied);
        assert_eq!(config.algorithm, Algorithm::Cosine);
        assert_eq!(config.k, 30);
    }

    #[test]
    fn test_apply_portable_rejects_unrecognized_k() {
        let mut config = config();
        let outcome = config
            .apply_portable(&json!({ "k": 17 }).to_string())
            .unwrap();
        assert!(!outcome.k_applied);
        assert_eq!(config.k, 10);
    }

    #[test]
    fn test_apply_portable_accepts_float_typed_integral_k() {
        let mut config = config();
        let outcome = config
            .apply_portable(&json!({ "k": 30.0 }).to_string())
            .unwrap();
        assert!(outcome.k_applied);
        assert_eq!(config.k, 30);

        let outcome = config
            .apply_portable(&json!({ "k": 30.5 }).to_string())
            .unwrap();
        assert!(!outcome.k_applied);
        assert_eq!(config.k, 30);
    }

    #[test]
    fn test_apply_portable_rejects_partial_strengths() {
        let mut config = config();
        config.strengths.image = 0.9;
        let payload = json!({ "vectorStrengths": { "image": 0.5 } }).to_string();
        let outcome = config.apply_portable(&payload).unwrap();
        assert!(!outcome.strengths_applied);
        assert_eq!(config.strengths.image, 0.9);
    }

    #[test]
    fn test_apply_portable_malformed_text_has_no_effect() {
        let mut config = config();
        let before = config.clone();
        assert!(config.apply_portable("not json {").is_err());
        assert!(config.apply_portable("[1, 2, 3]").is_err());
        assert_eq!(config, before);
    }

    #[test]
    fn test_round_trip() {
        let mut exported = config();
        exported.algorithm = Algorithm::Euclidean;
        exported.k = 40;
        exported.strengths.habitat = 1.3;

        let text = exported.to_portable().to_json_pretty().unwrap();
        let mut imported = config();
        let outcome = imported.apply_portable(&text).unwrap();

        assert!(outcome.algorithm_applied && outcome.k_applied && outcome.strengths_applied);
        assert_eq!(imported, exported);
    }
}
