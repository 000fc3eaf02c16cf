//! The weight-dimension schema
//!
//! The similarity query is parameterized by a closed set of eleven weight
//! dimensions. The set is enumerated statically here; everything that walks
//! "all dimensions" iterates [`Dimension::ALL`] rather than reflecting over
//! a live value, so the key set cannot drift at runtime.

use serde::{Deserialize, Serialize};

use crate::{PokeError, Result};

/// One weight dimension of the similarity query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Image,
    Pokedex,
    Size,
    Types,
    EggGroups,
    Color,
    Habitat,
    Shape,
    EvolutionChain,
    Booleans,
    Stats,
}

/// Valid range and input granularity for one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Dimension {
    /// Every recognized dimension, in wire order.
    pub const ALL: [Dimension; 11] = [
        Dimension::Image,
        Dimension::Pokedex,
        Dimension::Size,
        Dimension::Types,
        Dimension::EggGroups,
        Dimension::Color,
        Dimension::Habitat,
        Dimension::Shape,
        Dimension::EvolutionChain,
        Dimension::Booleans,
        Dimension::Stats,
    ];

    /// The key used in the portable form and in `vectorStrengths` objects.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Image => "image",
            Dimension::Pokedex => "pokedex",
            Dimension::Size => "size",
            Dimension::Types => "types",
            Dimension::EggGroups => "egg_groups",
            Dimension::Color => "color",
            Dimension::Habitat => "habitat",
            Dimension::Shape => "shape",
            Dimension::EvolutionChain => "evolution_chain",
            Dimension::Booleans => "booleans",
            Dimension::Stats => "stats",
        }
    }

    pub fn from_key(key: &str) -> Option<Dimension> {
        Dimension::ALL.into_iter().find(|d| d.key() == key)
    }

    /// The embedding-derived image dimension is finer-grained and capped at
    /// 1.0; the attribute dimensions all share [0, 2] with step 0.1.
    pub fn bounds(&self) -> Bounds {
        match self {
            Dimension::Image => Bounds { min: 0.0, max: 1.0, step: 0.025 },
            _ => Bounds { min: 0.0, max: 2.0, step: 0.1 },
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-dimension strengths of a similarity query.
///
/// The field set is exactly the schema's key set; values are free-floating
/// `f64`s (range enforcement is an input-boundary concern, see
/// [`Dimension::bounds`]). Deserialization rejects unknown or missing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VectorStrengths {
    pub image: f64,
    pub pokedex: f64,
    pub size: f64,
    pub types: f64,
    pub egg_groups: f64,
    pub color: f64,
    pub habitat: f64,
    pub shape: f64,
    pub evolution_chain: f64,
    pub booleans: f64,
    pub stats: f64,
}

impl VectorStrengths {
    /// All dimensions at zero.
    pub fn zeroed() -> Self {
        Self {
            image: 0.0,
            pokedex: 0.0,
            size: 0.0,
            types: 0.0,
            egg_groups: 0.0,
            color: 0.0,
            habitat: 0.0,
            shape: 0.0,
            evolution_chain: 0.0,
            booleans: 0.0,
            stats: 0.0,
        }
    }

    pub fn get(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::Image => self.image,
            Dimension::Pokedex => self.pokedex,
            Dimension::Size => self.size,
            Dimension::Types => self.types,
            Dimension::EggGroups => self.egg_groups,
            Dimension::Color => self.color,
            Dimension::Habitat => self.habitat,
            Dimension::Shape => self.shape,
            Dimension::EvolutionChain => self.evolution_chain,
            Dimension::Booleans => self.booleans,
            Dimension::Stats => self.stats,
        }
    }

    pub fn set(&mut self, dim: Dimension, value: f64) {
        match dim {
            Dimension::Image => self.image = value,
            Dimension::Pokedex => self.pokedex = value,
            Dimension::Size => self.size = value,
            Dimension::Types => self.types = value,
            Dimension::EggGroups => self.egg_groups = value,
            Dimension::Color => self.color = value,
            Dimension::Habitat => self.habitat = value,
            Dimension::Shape => self.shape = value,
            Dimension::EvolutionChain => self.evolution_chain = value,
            Dimension::Booleans => self.booleans = value,
            Dimension::Stats => self.stats = value,
        }
    }

    /// Validate an untrusted JSON value as a schema-complete strengths block.
    ///
    /// The key set must equal the schema's key set exactly — a missing key,
    /// a stray key, or a non-numeric value rejects the whole block. Used by
    /// settings import, where partial strength objects must never be merged.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| PokeError::Import("vectorStrengths is not an object".into()))?;

        for key in map.keys() {
            if Dimension::from_key(key).is_none() {
                return Err(PokeError::Import(format!(
                    "unrecognized strength dimension: {key}"
                )));
            }
        }

        let mut out = Self::zeroed();
        for dim in Dimension::ALL {
            let number = map
                .get(dim.key())
                .ok_or_else(|| {
                    PokeError::Import(format!("missing strength dimension: {}", dim.key()))
                })?
                .as_f64()
                .ok_or_else(|| {
                    PokeError::Import(format!("strength {} is not a number", dim.key()))
                })?;
            out.set(dim, number);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_covers_every_key_once() {
        let mut keys: Vec<&str> = Dimension::ALL.iter().map(|d| d.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 11);
    }

    #[test]
    fn test_from_key_round_trip() {
        for dim in Dimension::ALL {
            assert_eq!(Dimension::from_key(dim.key()), Some(dim));
        }
        assert_eq!(Dimension::from_key("text"), None);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(
            Dimension::Image.bounds(),
            Bounds { min: 0.0, max: 1.0, step: 0.025 }
        );
        assert_eq!(
            Dimension::Stats.bounds(),
            Bounds { min: 0.0, max: 2.0, step: 0.1 }
        );
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut strengths = VectorStrengths::zeroed();
        for (i, dim) in Dimension::ALL.into_iter().enumerate() {
            strengths.set(dim, i as f64 * 0.1);
        }
        for (i, dim) in Dimension::ALL.into_iter().enumerate() {
            assert_eq!(strengths.get(dim), i as f64 * 0.1);
        }
    }

    fn full_strengths_json() -> serde_json::Value {
        json!({
            "image": 0.5, "pokedex": 1.0, "size": 0.2, "types": 2.0,
            "egg_groups": 0.1, "color": 0.3, "habitat": 0.4, "shape": 0.5,
            "evolution_chain": 0.6, "booleans": 0.7, "stats": 1.5
        })
    }

    #[test]
    fn test_from_json_value_accepts_complete_block() {
        let strengths = VectorStrengths::from_json_value(&full_strengths_json()).unwrap();
        assert_eq!(strengths.image, 0.5);
        assert_eq!(strengths.stats, 1.5);
    }

    #[test]
    fn test_from_json_value_rejects_partial_block() {
        let err = VectorStrengths::from_json_value(&json!({ "image": 0.5 })).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_from_json_value_rejects_stray_key() {
        let mut value = full_strengths_json();
        value["text"] = json!(0.5);
        assert!(VectorStrengths::from_json_value(&value).is_err());
    }

    #[test]
    fn test_from_json_value_rejects_non_numeric() {
        let mut value = full_strengths_json();
        value["color"] = json!("blue");
        assert!(VectorStrengths::from_json_value(&value).is_err());
    }

    #[test]
    fn test_deny_unknown_fields_on_wire() {
        let mut value = full_strengths_json();
        value["extra"] = json!(1.0);
        let parsed: std::result::Result<VectorStrengths, _> = serde_json::from_value(value);
        assert!(parsed.is_err());
    }
}
