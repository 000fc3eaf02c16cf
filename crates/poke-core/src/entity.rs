//! Catalog entities and constants tables as served by the backend
//!
//! Both are fetched once per session and never mutated afterwards; the
//! attribute fields carry small integer codes that the `Constants` tables
//! resolve into display labels.

use serde::{Deserialize, Serialize};

/// A single catalog entry, matching the `GET /pokemon` wire format.
///
/// Attribute codes (types, color, habitat, shape, egg groups) index into
/// the parallel arrays of [`Constants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub order: i32,
    pub name: String,
    pub species_name: String,
    /// Hectograms
    pub weight: u32,
    /// Decimeters
    pub height: u32,
    pub species_index: u32,
    /// HP, attack, defense, special-attack, special-defense, speed
    pub stats: Vec<u32>,
    pub stat_total: u32,
    /// 1-based type codes (one or two entries)
    pub types: Vec<u8>,
    pub generation: u8,
    #[serde(rename = "eggGroups")]
    pub egg_groups: Vec<u8>,
    /// 1-based color code
    pub color: u8,
    pub is_baby: u8,
    pub is_legendary: u8,
    pub is_mythical: u8,
    pub pokedex_number: u32,
    pub evolution_chain: u32,
    pub genus: String,
    /// 1-based habitat code, 0 when the species has no recorded habitat
    pub habitat: u8,
    /// 1-based shape code
    pub shape: u8,
}

/// Ordered lookup tables from `GET /constants`.
///
/// Type, color, shape, and habitat codes are 1-based; egg-group codes index
/// the array directly. That asymmetry matches the backend's data and is
/// preserved here rather than papered over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constants {
    pub types: Vec<String>,
    pub egg_groups: Vec<String>,
    pub colors: Vec<String>,
    pub shapes: Vec<String>,
    pub habitats: Vec<String>,
}

impl Constants {
    pub fn type_label(&self, code: u8) -> Option<&str> {
        one_based(&self.types, code)
    }

    pub fn egg_group_label(&self, code: u8) -> Option<&str> {
        self.egg_groups.get(code as usize).map(String::as_str)
    }

    pub fn color_label(&self, code: u8) -> Option<&str> {
        one_based(&self.colors, code)
    }

    pub fn shape_label(&self, code: u8) -> Option<&str> {
        one_based(&self.shapes, code)
    }

    /// Code 0 means "no recorded habitat" and resolves to `None`.
    pub fn habitat_label(&self, code: u8) -> Option<&str> {
        one_based(&self.habitats, code)
    }
}

fn one_based(table: &[String], code: u8) -> Option<&str> {
    if code == 0 {
        return None;
    }
    table.get(code as usize - 1).map(String::as_str)
}

const GENERATION_NUMERALS: [&str; 9] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Roman numeral for a generation (1–9), for display.
pub fn generation_numeral(generation: u8) -> Option<&'static str> {
    if generation == 0 {
        return None;
    }
    GENERATION_NUMERALS.get(generation as usize - 1).copied()
}

/// One ranked neighbor from `POST /find_similar/combined`.
///
/// Results arrive ordered by relevance; index 0 is conventionally the query
/// entity itself, whose similarity figure is not meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarPokemon {
    pub name: String,
    pub similarity: f64,
}
