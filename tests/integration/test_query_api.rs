//! Tests for the API state: graph swap semantics and regeneration.

use std::io::Write as _;
use std::sync::Arc;

use lattice::api::ApiState;
use lattice::config::Config;
use lattice::graph::{GraphBuilder, KnowledgeGraph};
use lattice::query::QueryEngine;

use crate::fixtures::{corpus, FixtureParser};

fn test_config(dir: &tempfile::TempDir, csv: &str) -> Config {
    let csv_path = dir.path().join("paragraphs.csv");
    let mut file = std::fs::File::create(&csv_path).unwrap();
    write!(file, "{}", csv).unwrap();

    let mut config = Config::default();
    config.source.path = csv_path.to_string_lossy().to_string();
    config.graph.data_file = dir
        .path()
        .join("graph.json")
        .to_string_lossy()
        .to_string();
    config
}

fn corpus_csv() -> String {
    let mut csv = "paragraphs\n".to_string();
    for unit in corpus() {
        csv.push_str(unit);
        csv.push('\n');
    }
    csv
}

#[tokio::test]
async fn test_regenerate_swaps_graph_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, &corpus_csv());
    let graph_file = config.graph_file();

    // Start serving an empty graph.
    let state = ApiState::new(
        KnowledgeGraph::new(),
        Arc::new(FixtureParser::new()),
        config,
    );
    assert_eq!(state.current_graph().await.node_count(), 0);

    let (nodes, edges) = state.regenerate().await.unwrap();
    assert!(nodes > 0);
    assert_eq!(edges, 3);

    let current = state.current_graph().await;
    assert!(current.has_node("Curie"));
    assert!(graph_file.exists());
}

#[tokio::test]
async fn test_in_flight_handle_survives_swap() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, &corpus_csv());

    let state = ApiState::new(
        KnowledgeGraph::new(),
        Arc::new(FixtureParser::new()),
        config,
    );

    // A query holding the old handle keeps seeing the fully-old graph
    // across a regeneration.
    let old = state.current_graph().await;
    state.regenerate().await.unwrap();

    assert_eq!(old.node_count(), 0);
    assert_eq!(
        QueryEngine::new(old).answer("info about Curie"),
        "No matches found for the query."
    );
    assert!(state.current_graph().await.has_node("Curie"));
}

#[tokio::test]
async fn test_failed_regenerate_leaves_old_graph_serving() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&dir, &corpus_csv());
    // Point the source somewhere that cannot be read.
    config.source.path = dir
        .path()
        .join("missing.csv")
        .to_string_lossy()
        .to_string();

    let builder = GraphBuilder::new(Arc::new(FixtureParser::new()));
    let original = builder.build(corpus()).await.unwrap();
    let node_count = original.node_count();

    let state = ApiState::new(original, Arc::new(FixtureParser::new()), config);
    assert!(state.regenerate().await.is_err());

    let current = state.current_graph().await;
    assert_eq!(current.node_count(), node_count);
    assert!(current.has_node("Curie"));
}

#[tokio::test]
async fn test_failed_parse_during_regenerate_leaves_old_graph() {
    let dir = tempfile::tempdir().unwrap();
    // The fixture parser has no entry for this paragraph.
    let config = test_config(&dir, "paragraphs\nNot in the fixture table.\n");

    let builder = GraphBuilder::new(Arc::new(FixtureParser::new()));
    let original = builder.build(corpus()).await.unwrap();

    let state = ApiState::new(original, Arc::new(FixtureParser::new()), config);
    assert!(state.regenerate().await.is_err());
    assert!(state.current_graph().await.has_node("Curie"));
}

#[tokio::test]
async fn test_query_handler_answers_and_recovers_shape_failures() {
    use axum::extract::State;
    use axum::Json;
    use lattice::api::query_handler;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir, &corpus_csv());

    let builder = GraphBuilder::new(Arc::new(FixtureParser::new()));
    let graph = builder.build(corpus()).await.unwrap();
    let state = Arc::new(ApiState::new(
        graph,
        Arc::new(FixtureParser::new()),
        config,
    ));

    // Well-formed query: an answer, no error.
    let body = Ok(Json(serde_json::json!({"query": "info about Curie"})));
    let response = query_handler(State(Arc::clone(&state)), body).await.0;
    assert!(response.answer.unwrap().contains("PERSON"));
    assert!(response.error.is_none());

    // Missing query field: recovered into an error answer.
    let body = Ok(Json(serde_json::json!({"text": "info about Curie"})));
    let response = query_handler(State(Arc::clone(&state)), body).await.0;
    assert!(response.answer.is_none());
    assert!(response.error.unwrap().contains("query"));

    // Non-string query field: same recovery.
    let body = Ok(Json(serde_json::json!({"query": 42})));
    let response = query_handler(State(state), body).await.0;
    assert!(response.error.is_some());
}
