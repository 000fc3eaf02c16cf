//! Poke API Client - HTTP client for the similarity backend
//!
//! Provides a strongly-typed client for the four backend endpoints: the
//! catalog, the constants tables, the advertised default strengths, and the
//! combined similarity query. The backend owns all vector math; this crate
//! only speaks its wire format.

use serde::Serialize;

use poke_core::{
    Algorithm, Constants, Pokemon, PokeError, QueryConfig, Result, SimilarPokemon,
    VectorStrengths,
};

/// Client for the similarity backend.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

/// Request body for the combined similarity query (matches the backend).
///
/// Every schema dimension travels as its own `<key>_strength` field.
#[derive(Serialize)]
struct SimilarRequest {
    pokemon: String,
    k: u32,
    algorithm: Algorithm,
    image_strength: f64,
    pokedex_strength: f64,
    size_strength: f64,
    types_strength: f64,
    egg_groups_strength: f64,
    color_strength: f64,
    habitat_strength: f64,
    shape_strength: f64,
    evolution_chain_strength: f64,
    booleans_strength: f64,
    stats_strength: f64,
}

impl SimilarRequest {
    fn new(pokemon: &str, config: &QueryConfig) -> Self {
        let s = &config.strengths;
        Self {
            pokemon: pokemon.to_string(),
            k: config.k,
            algorithm: config.algorithm,
            image_strength: s.image,
            pokedex_strength: s.pokedex,
            size_strength: s.size,
            types_strength: s.types,
            egg_groups_strength: s.egg_groups,
            color_strength: s.color,
            habitat_strength: s.habitat,
            shape_strength: s.shape,
            evolution_chain_strength: s.evolution_chain,
            booleans_strength: s.booleans,
            stats_strength: s.stats,
        }
    }
}

impl ApiClient {
    /// Create a new client for a backend at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the full catalog. Fetched once per session.
    pub async fn list_pokemon(&self) -> Result<Vec<Pokemon>> {
        let url = format!("{}/pokemon", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PokeError::Api(format!("Failed to fetch pokemon list: {}", e)))?;

        if !response.status().is_success() {
            return Err(PokeError::Api(format!(
                "Pokemon list request failed with status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| PokeError::Api(format!("Failed to parse pokemon list: {}", e)))
    }

    /// Fetch the constants lookup tables. Fetched once per session.
    pub async fn constants(&self) -> Result<Constants> {
        let url = format!("{}/constants", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PokeError::Api(format!("Failed to fetch constants: {}", e)))?;

        if !response.status().is_success() {
            return Err(PokeError::Api(format!(
                "Constants request failed with status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| PokeError::Api(format!("Failed to parse constants: {}", e)))
    }

    /// Fetch the backend's recommended default strengths.
    ///
    /// The response must be schema-complete; `VectorStrengths` rejects
    /// anything else at parse time, so a drifted backend fails loudly here
    /// rather than corrupting later resets.
    pub async fn default_strengths(&self) -> Result<VectorStrengths> {
        let url = format!("{}/vectors/strengths", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PokeError::Api(format!("Failed to fetch default strengths: {}", e)))?;

        if !response.status().is_success() {
            return Err(PokeError::Api(format!(
                "Default strengths request failed with status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| PokeError::Api(format!("Failed to parse default strengths: {}", e)))
    }

    /// Run one combined similarity query for `pokemon` under `config`.
    ///
    /// Returns neighbors ordered by relevance; index 0 is conventionally the
    /// query entity itself. No retries and no timeout; staleness is the
    /// caller's concern.
    pub async fn find_similar(
        &self,
        pokemon: &str,
        config: &QueryConfig,
    ) -> Result<Vec<SimilarPokemon>> {
        let url = format!("{}/find_similar/combined", self.base_url);
        let request = SimilarRequest::new(pokemon, config);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| PokeError::Api(format!("Failed to send similarity query: {}", e)))?;

        if !response.status().is_success() {
            return Err(PokeError::Api(format!(
                "Similarity query failed with status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| PokeError::Api(format!("Failed to parse similarity results: {}", e)))
    }
}
