//! URL / selection / query consistency through the assembled session.

use std::sync::Arc;

use poke_app::ExplorerApp;
use poke_tests::{constants, defaults, roster, ScriptedProvider};

fn app_with(
    provider: Arc<ScriptedProvider>,
    query: &str,
) -> ExplorerApp<ScriptedProvider> {
    ExplorerApp::with_parts(
        roster(&["bulbasaur", "pikachu", "charizard"]),
        constants(),
        defaults(),
        provider,
        query,
    )
}

#[tokio::test]
async fn test_select_updates_url_and_queries_once() {
    let provider = Arc::new(ScriptedProvider::new());
    let mut app = app_with(provider.clone(), "");

    app.select("bulbasaur").await;

    assert_eq!(app.selection.selected(), Some("bulbasaur"));
    assert_eq!(app.selection.location().query_string(), "?pokemon=bulbasaur");
    assert_eq!(provider.call_count(), 1);
    assert_eq!(app.orchestrator.results()[0].name, "bulbasaur");
}

#[tokio::test]
async fn test_reselecting_same_entity_does_not_requery() {
    let provider = Arc::new(ScriptedProvider::new());
    let mut app = app_with(provider.clone(), "");

    app.select("pikachu").await;
    app.select("pikachu").await;

    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_opening_url_adopts_known_selection() {
    let provider = Arc::new(ScriptedProvider::new());
    let mut app = app_with(provider.clone(), "");

    app.open_url("?pokemon=charizard").await;

    assert_eq!(app.selection.selected(), Some("charizard"));
    assert_eq!(provider.call_count(), 1);
    assert_eq!(app.orchestrator.results()[0].name, "charizard");
}

#[tokio::test]
async fn test_unknown_url_entity_resolves_to_none() {
    let provider = Arc::new(ScriptedProvider::new());
    let mut app = app_with(provider.clone(), "");
    app.select("pikachu").await;

    app.open_url("?pokemon=missingno").await;

    assert_eq!(app.selection.selected(), None);
    assert!(app.orchestrator.results().is_empty());
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_clear_selection_empties_results_and_url() {
    let provider = Arc::new(ScriptedProvider::new());
    let mut app = app_with(provider.clone(), "");
    app.select("pikachu").await;

    app.clear_selection();

    assert_eq!(app.selection.selected(), None);
    assert_eq!(app.selection.location().query_string(), "");
    assert!(app.orchestrator.results().is_empty());
}

#[tokio::test]
async fn test_back_restores_previous_selection_and_requeries() {
    let provider = Arc::new(ScriptedProvider::new());
    let mut app = app_with(provider.clone(), "");
    app.select("bulbasaur").await;
    app.select("charizard").await;

    app.back().await;

    assert_eq!(app.selection.selected(), Some("bulbasaur"));
    assert_eq!(app.orchestrator.results()[0].name, "bulbasaur");
    assert_eq!(provider.call_count(), 3);
}

#[tokio::test]
async fn test_settings_change_refresh_requeries_current_selection() {
    let provider = Arc::new(ScriptedProvider::new());
    let mut app = app_with(provider.clone(), "");
    app.select("pikachu").await;

    app.settings.edit(poke_core::Dimension::Stats, 1.8);
    app.refresh().await;

    assert_eq!(provider.call_count(), 2);
    assert_eq!(app.orchestrator.results()[0].name, "pikachu");
}
