//! Ordering guarantees of the query orchestrator: only the response to the
//! most recently triggered request is ever applied, regardless of network
//! completion order.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use poke_app::QueryOrchestrator;
use poke_core::QueryConfig;
use poke_tests::{defaults, ScriptedProvider};

fn config() -> QueryConfig {
    QueryConfig::new(defaults())
}

#[tokio::test]
async fn test_slow_earlier_response_never_overwrites_newer_one() {
    // pikachu is triggered first but resolves last.
    let provider = Arc::new(
        ScriptedProvider::new().with_delay("pikachu", Duration::from_millis(100)),
    );
    let orchestrator = Arc::new(QueryOrchestrator::new(provider.clone()));

    let slow = {
        let orchestrator = orchestrator.clone();
        let config = config();
        tokio::spawn(async move {
            orchestrator.trigger(Some("pikachu"), &config).await;
        })
    };
    sleep(Duration::from_millis(20)).await;
    let fast = {
        let orchestrator = orchestrator.clone();
        let config = config();
        tokio::spawn(async move {
            orchestrator.trigger(Some("charizard"), &config).await;
        })
    };

    fast.await.unwrap();
    slow.await.unwrap();

    let state = orchestrator.state();
    assert!(!state.loading);
    assert_eq!(state.results[0].name, "charizard");
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn test_sequential_triggers_apply_in_order() {
    let provider = Arc::new(ScriptedProvider::new());
    let orchestrator = QueryOrchestrator::new(provider);

    orchestrator.trigger(Some("bulbasaur"), &config()).await;
    assert_eq!(orchestrator.results()[0].name, "bulbasaur");

    orchestrator.trigger(Some("squirtle"), &config()).await;
    assert_eq!(orchestrator.results()[0].name, "squirtle");
    assert!(!orchestrator.is_loading());
}

#[tokio::test]
async fn test_clear_during_flight_discards_response() {
    let provider = Arc::new(
        ScriptedProvider::new().with_delay("pikachu", Duration::from_millis(60)),
    );
    let orchestrator = Arc::new(QueryOrchestrator::new(provider));

    let in_flight = {
        let orchestrator = orchestrator.clone();
        let config = config();
        tokio::spawn(async move {
            orchestrator.trigger(Some("pikachu"), &config).await;
        })
    };
    sleep(Duration::from_millis(20)).await;
    orchestrator.clear();
    in_flight.await.unwrap();

    let state = orchestrator.state();
    assert!(!state.loading);
    assert!(state.results.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_clear_racing_completion_never_leaves_results() {
    // Land clear() as close as possible to the response's arrival, across
    // real threads, and require that no run ever settles with results
    // displayed for a cleared selection.
    for _ in 0..25 {
        let provider = Arc::new(
            ScriptedProvider::new().with_delay("pikachu", Duration::from_millis(5)),
        );
        let orchestrator = Arc::new(QueryOrchestrator::new(provider));

        let in_flight = {
            let orchestrator = orchestrator.clone();
            let config = config();
            tokio::spawn(async move {
                orchestrator.trigger(Some("pikachu"), &config).await;
            })
        };
        sleep(Duration::from_millis(5)).await;
        orchestrator.clear();
        in_flight.await.unwrap();

        let state = orchestrator.state();
        assert!(
            state.results.is_empty(),
            "stale response applied after clear"
        );
        assert!(!state.loading);
    }
}

#[tokio::test]
async fn test_failed_query_clears_loading_without_results() {
    let provider = Arc::new(ScriptedProvider::new().with_failure("missingno"));
    let orchestrator = QueryOrchestrator::new(provider);

    orchestrator.trigger(Some("missingno"), &config()).await;

    let state = orchestrator.state();
    assert!(!state.loading);
    assert!(state.results.is_empty());
}

#[tokio::test]
async fn test_trigger_without_selection_clears_results() {
    let provider = Arc::new(ScriptedProvider::new());
    let orchestrator = QueryOrchestrator::new(provider);

    orchestrator.trigger(Some("eevee"), &config()).await;
    assert!(!orchestrator.results().is_empty());

    orchestrator.trigger(None, &config()).await;
    assert!(orchestrator.results().is_empty());
    assert!(!orchestrator.is_loading());
}
