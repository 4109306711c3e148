//! End-to-end pipeline tests: extract, build, persist, reload, query.

use std::collections::HashSet;
use std::sync::Arc;

use lattice::graph::{read_graph, write_graph, GraphBuilder, NO_LABEL};
use lattice::query::QueryEngine;

use crate::fixtures::{corpus, FixtureParser};

#[tokio::test]
async fn test_build_from_corpus() {
    let builder = GraphBuilder::new(Arc::new(FixtureParser::new()));
    let graph = builder.build(corpus()).await.unwrap();

    // Entity nodes carry labels; governing tokens enter unlabeled.
    assert_eq!(graph.node_label("Curie"), Some("PERSON"));
    assert_eq!(graph.node_label("Paris"), Some("GPE"));
    assert!(graph.has_node("discovered"));
    assert_eq!(graph.node_label("discovered"), None);

    // One edge per rule firing: two predicate-complement, one
    // prepositional-object.
    assert_eq!(graph.edge_count(), 3);
    let edges: HashSet<(String, String, Option<String>)> = graph
        .edges()
        .map(|(k, r)| {
            (
                k.first().to_string(),
                k.second().to_string(),
                r.map(String::from),
            )
        })
        .collect();
    assert!(edges.contains(&(
        "Curie".to_string(),
        "discovered".to_string(),
        Some("polonium".to_string())
    )));
    assert!(edges.contains(&(
        "Curie".to_string(),
        "was".to_string(),
        Some("chemist".to_string())
    )));
    assert!(edges.contains(&(
        "Paris".to_string(),
        "worked".to_string(),
        Some("in".to_string())
    )));
}

#[tokio::test]
async fn test_persist_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");

    let builder = GraphBuilder::new(Arc::new(FixtureParser::new()));
    let graph = builder.build(corpus()).await.unwrap();
    write_graph(&graph, &path).unwrap();

    let reloaded = read_graph(&path).unwrap();
    assert_eq!(reloaded.node_count(), graph.node_count());
    assert_eq!(reloaded.edge_count(), graph.edge_count());

    // Labels survive; absent labels come back as the sentinel string.
    assert_eq!(reloaded.node_label("Curie"), Some("PERSON"));
    assert_eq!(reloaded.node_label("discovered"), Some(NO_LABEL));

    for (key, relation) in graph.edges() {
        let found = reloaded.edges().find(|(k, _)| *k == key);
        assert_eq!(found.map(|(_, r)| r), Some(relation));
    }
}

#[tokio::test]
async fn test_query_over_reloaded_graph() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");

    let builder = GraphBuilder::new(Arc::new(FixtureParser::new()));
    let graph = builder.build(corpus()).await.unwrap();
    write_graph(&graph, &path).unwrap();

    let engine = QueryEngine::new(Arc::new(read_graph(&path).unwrap()));

    let answer = engine.answer("info about Curie");
    assert!(answer.contains("Curie"));
    assert!(answer.contains("PERSON"));

    let answer = engine.answer("relationships of Curie");
    assert!(answer.contains("Curie -- discovered: polonium"));
    assert!(answer.contains("Curie -- was: chemist"));
    assert!(!answer.contains("Paris"));

    let answer = engine.answer("chemist");
    assert!(answer.contains("Curie -- was: chemist"));

    assert_eq!(
        engine.answer("   "),
        "No query provided. Please provide a query."
    );
    assert_eq!(engine.answer("uranium"), "No matches found for the query.");
}

#[tokio::test]
async fn test_parse_failure_aborts_batch() {
    let builder = GraphBuilder::new(Arc::new(FixtureParser::new()));
    let result = builder
        .build(vec!["Curie discovered polonium.", "Unknown paragraph."])
        .await;
    assert!(result.is_err());
}
