//! Poke Core - data model and configuration schema
//!
//! Typed model for the similarity explorer: the Pokémon catalog as served
//! by the backend, the constants tables used to resolve small integer codes
//! into display labels, and the query configuration (algorithm, result size,
//! per-dimension vector strengths) with its portable export/import form.
//!
//! Everything here is pure data plus validation. Network access lives in
//! `poke-api-client`; stateful controllers live in `poke-app`.

use thiserror::Error;

mod config;
mod entity;
mod schema;

pub use config::{Algorithm, ImportOutcome, PortableSettings, QueryConfig, K_CHOICES};
pub use entity::{generation_numeral, Constants, Pokemon, SimilarPokemon};
pub use schema::{Bounds, Dimension, VectorStrengths};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum PokeError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Unknown pokemon: {0}")]
    UnknownPokemon(String),
}

pub type Result<T> = std::result::Result<T, PokeError>;
