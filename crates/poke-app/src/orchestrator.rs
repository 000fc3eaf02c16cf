//! Query orchestrator
//!
//! The only place that issues similarity queries and the only place that
//! decides whether a response is still relevant. Multiple requests can be
//! in flight at once (rapid edits re-trigger before earlier responses
//! land); ordering is enforced by a monotonically increasing epoch. A
//! response is applied only if its epoch is still the latest triggered one,
//! so out-of-order completion can never render a stale result. There is no
//! physical cancellation; superseded requests complete over the wire and
//! are dropped here.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{debug, warn};

use poke_api_client::ApiClient;
use poke_core::{QueryConfig, Result, SimilarPokemon};

/// Backend seam for the combined similarity query.
#[async_trait]
pub trait SimilarityProvider: Send + Sync {
    async fn find_similar(
        &self,
        pokemon: &str,
        config: &QueryConfig,
    ) -> Result<Vec<SimilarPokemon>>;
}

#[async_trait]
impl SimilarityProvider for ApiClient {
    async fn find_similar(
        &self,
        pokemon: &str,
        config: &QueryConfig,
    ) -> Result<Vec<SimilarPokemon>> {
        ApiClient::find_similar(self, pokemon, config).await
    }
}

/// What a renderer needs: whether a query is outstanding and the last
/// applied result list. The list is replaced wholesale, never edited.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    pub loading: bool,
    pub results: Vec<SimilarPokemon>,
}

pub struct QueryOrchestrator<P> {
    provider: Arc<P>,
    /// Epoch of the most recently triggered request.
    epoch: AtomicU64,
    state: Arc<Mutex<QueryState>>,
}

impl<P: SimilarityProvider> QueryOrchestrator<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            epoch: AtomicU64::new(0),
            state: Arc::new(Mutex::new(QueryState::default())),
        }
    }

    /// Snapshot of the current query state.
    pub fn state(&self) -> QueryState {
        self.state.lock().unwrap().clone()
    }

    pub fn results(&self) -> Vec<SimilarPokemon> {
        self.state.lock().unwrap().results.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().loading
    }

    /// Drop any displayed result and invalidate every in-flight request.
    pub fn clear(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        state.loading = false;
        state.results.clear();
    }

    /// Issue a similarity query for the current selection.
    ///
    /// No selection is a no-op that clears any displayed result. Otherwise
    /// the visible results empty out, loading turns on, and the request is
    /// awaited; the response is applied only if no newer trigger (or clear)
    /// has happened in the meantime. A failed request clears loading,
    /// leaves the (empty) results alone, and is not retried.
    pub async fn trigger(&self, selection: Option<&str>, config: &QueryConfig) {
        let Some(pokemon) = selection else {
            self.clear();
            return;
        };

        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().unwrap();
            state.loading = true;
            state.results.clear();
        }
        debug!(epoch, pokemon, "Triggering similarity query");

        let outcome = self.provider.find_similar(pokemon, config).await;

        // The staleness check happens under the state lock: a concurrent
        // bump then either orders before the check (this response is
        // discarded) or after this write (its own mutation supersedes it).
        // Checked-then-written without the lock, a clear() landing between
        // the two could be overwritten by a stale response.
        let mut state = self.state.lock().unwrap();
        if self.epoch.load(Ordering::SeqCst) != epoch {
            debug!(epoch, pokemon, "Discarding stale similarity response");
            return;
        }
        match outcome {
            Ok(results) => {
                debug!(epoch, count = results.len(), "Applying similarity results");
                state.results = results;
                state.loading = false;
            }
            Err(e) => {
                warn!(epoch, pokemon, "Similarity query failed: {}", e);
                state.loading = false;
            }
        }
    }
}
