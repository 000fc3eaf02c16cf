//! Shared fixtures for the integration tests: a small catalog, schema
//! defaults, and a scripted similarity provider with per-name delays and
//! failures for exercising the orchestrator's ordering guarantees.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use poke_app::SimilarityProvider;
use poke_core::{
    Constants, Pokemon, PokeError, QueryConfig, Result, SimilarPokemon, VectorStrengths,
};

/// Build a minimal catalog with the given names.
pub fn roster(names: &[&str]) -> Vec<Pokemon> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Pokemon {
            id: i as u32 + 1,
            order: i as i32 + 1,
            name: name.to_string(),
            species_name: name.to_string(),
            weight: 60,
            height: 4,
            species_index: i as u32 + 1,
            stats: vec![35, 55, 40, 50, 50, 90],
            stat_total: 320,
            types: vec![13],
            generation: 1,
            egg_groups: vec![0, 5],
            color: 10,
            is_baby: 0,
            is_legendary: 0,
            is_mythical: 0,
            pokedex_number: i as u32 + 1,
            evolution_chain: i as u32 + 1,
            genus: "Test Pokémon".to_string(),
            habitat: 2,
            shape: 6,
        })
        .collect()
}

pub fn constants() -> Constants {
    Constants {
        types: vec!["normal".into(), "electric".into()],
        egg_groups: vec!["monster".into(), "fairy".into()],
        colors: vec!["yellow".into()],
        shapes: vec!["upright".into()],
        habitats: vec!["forest".into()],
    }
}

/// Backend-advertised default strengths used across the tests.
pub fn defaults() -> VectorStrengths {
    let mut strengths = VectorStrengths::zeroed();
    strengths.image = 0.5;
    strengths.types = 1.0;
    strengths.stats = 1.0;
    strengths
}

/// Scripted similarity backend. Responds with a ranked list headed by the
/// query entity; individual names can be given artificial latency or made
/// to fail.
#[derive(Default)]
pub struct ScriptedProvider {
    delays: HashMap<String, Duration>,
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// How many queries have been issued so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SimilarityProvider for ScriptedProvider {
    async fn find_similar(
        &self,
        pokemon: &str,
        config: &QueryConfig,
    ) -> Result<Vec<SimilarPokemon>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(pokemon) {
            sleep(*delay).await;
        }
        if self.failing.contains(pokemon) {
            return Err(PokeError::Api(format!("scripted failure for {pokemon}")));
        }
        let mut results = vec![SimilarPokemon {
            name: pokemon.to_string(),
            similarity: 0.0,
        }];
        for rank in 1..config.k.min(3) {
            results.push(SimilarPokemon {
                name: format!("{pokemon}-neighbor-{rank}"),
                similarity: rank as f64 * 0.1,
            });
        }
        Ok(results)
    }
}
