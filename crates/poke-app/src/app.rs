//! Explorer session
//!
//! Composition root: fetches the immutable catalog data, wires the three
//! controllers over it, and routes every selection change into the
//! orchestrator so the URL, the selection, and the displayed results stay
//! consistent.

use std::sync::Arc;

use tracing::info;

use poke_api_client::ApiClient;
use poke_core::{Constants, Pokemon, Result, VectorStrengths};

use crate::location::Location;
use crate::orchestrator::{QueryOrchestrator, SimilarityProvider};
use crate::selection::{SelectionChange, SelectionSynchronizer};
use crate::settings::SettingsController;

pub struct ExplorerApp<P> {
    pokemon: Vec<Pokemon>,
    constants: Constants,
    pub settings: SettingsController,
    pub selection: SelectionSynchronizer,
    pub orchestrator: QueryOrchestrator<P>,
}

impl ExplorerApp<ApiClient> {
    /// Fetch the catalog, constants, and default strengths from the backend
    /// and build a session at `query` (usually "" or a share link's query
    /// string).
    ///
    /// Any fetch failure here is fatal to the session and propagates; there
    /// is nothing sensible to explore without the catalog.
    pub async fn bootstrap(base_url: &str, query: &str) -> Result<Self> {
        let client = ApiClient::new(base_url);
        let (pokemon, constants, defaults) = tokio::try_join!(
            client.list_pokemon(),
            client.constants(),
            client.default_strengths(),
        )?;
        info!(count = pokemon.len(), "Loaded catalog");

        let mut app = Self::with_parts(pokemon, constants, defaults, Arc::new(client), query);
        // Adopt a selection carried by the opening URL, if any.
        let change = app.selection.reconcile_from_url(&app.pokemon);
        app.apply(change).await;
        Ok(app)
    }
}

impl<P: SimilarityProvider> ExplorerApp<P> {
    /// Assemble a session from already-fetched parts. Bootstrap for tests
    /// and embedders that bring their own provider.
    pub fn with_parts(
        pokemon: Vec<Pokemon>,
        constants: Constants,
        defaults: VectorStrengths,
        provider: Arc<P>,
        query: &str,
    ) -> Self {
        Self {
            pokemon,
            constants,
            settings: SettingsController::new(defaults),
            selection: SelectionSynchronizer::new(Location::from_query(query)),
            orchestrator: QueryOrchestrator::new(provider),
        }
    }

    pub fn pokemon(&self) -> &[Pokemon] {
        &self.pokemon
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn find(&self, name: &str) -> Option<&Pokemon> {
        self.pokemon.iter().find(|p| p.name == name)
    }

    /// Select an entity and run the query for it.
    pub async fn select(&mut self, name: &str) {
        let change = self.selection.select_by_name(name, &self.pokemon);
        self.apply(change).await;
    }

    /// Drop the selection and the displayed results.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.orchestrator.clear();
    }

    /// Adopt an externally supplied URL query string.
    pub async fn open_url(&mut self, query: &str) {
        let change = self.selection.open_query(query, &self.pokemon);
        self.apply(change).await;
    }

    /// Navigate one step back in history.
    pub async fn back(&mut self) {
        let change = self.selection.back(&self.pokemon);
        self.apply(change).await;
    }

    /// Re-run the query for the current selection, e.g. after a settings
    /// edit changed the configuration the last result was computed under.
    pub async fn refresh(&self) {
        self.orchestrator
            .trigger(self.selection.selected(), self.settings.config())
            .await;
    }

    async fn apply(&self, change: SelectionChange) {
        match change {
            SelectionChange::Changed => self.refresh().await,
            SelectionChange::Cleared => self.orchestrator.clear(),
            SelectionChange::Unchanged => {}
        }
    }
}
