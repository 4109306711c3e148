//! REST API request handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::graph::{self, GraphBuilder, GraphDocument, KnowledgeGraph};
use crate::parse::LanguageParser;
use crate::query::QueryEngine;
use crate::sources;

/// The currently served graph plus its load timestamp.
///
/// Swapped wholesale on regeneration; never mutated in place.
pub struct GraphState {
    pub graph: Arc<KnowledgeGraph>,
    pub loaded_at: DateTime<Utc>,
}

impl GraphState {
    pub fn new(graph: KnowledgeGraph) -> Self {
        Self {
            graph: Arc::new(graph),
            loaded_at: Utc::now(),
        }
    }
}

/// Application state shared across handlers.
pub struct ApiState {
    state: RwLock<GraphState>,
    builder: GraphBuilder,
    config: Config,
}

impl ApiState {
    /// Create API state serving the given graph.
    pub fn new(graph: KnowledgeGraph, parser: Arc<dyn LanguageParser>, config: Config) -> Self {
        Self {
            state: RwLock::new(GraphState::new(graph)),
            builder: GraphBuilder::new(parser),
            config,
        }
    }

    /// Cheap handle to the graph currently being served.
    pub async fn current_graph(&self) -> Arc<KnowledgeGraph> {
        Arc::clone(&self.state.read().await.graph)
    }

    /// Rebuild the graph from the configured source, persist it, and swap
    /// it in. The write lock is held only for the pointer swap, so
    /// in-flight queries finish against the old graph; a failed rebuild
    /// leaves the old graph serving.
    pub async fn regenerate(&self) -> crate::error::Result<(usize, usize)> {
        let paragraphs =
            sources::read_paragraphs(&self.config.source.path, &self.config.source.column)?;
        let graph = self.builder.build(&paragraphs).await?;
        graph::write_graph(&graph, self.config.graph_file())?;

        let counts = (graph.node_count(), graph.edge_count());
        *self.state.write().await = GraphState::new(graph);
        Ok(counts)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query request body.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Query response: exactly one of `answer` or `error`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResponse {
    fn answer(answer: String) -> Self {
        Self {
            answer: Some(answer),
            error: None,
        }
    }

    fn error(error: String) -> Self {
        Self {
            answer: None,
            error: Some(error),
        }
    }
}

/// Regenerate response.
#[derive(Debug, Clone, Serialize)]
pub struct RegenerateResponse {
    pub nodes: usize,
    pub edges: usize,
    pub message: String,
}

/// Stats response.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub nodes: usize,
    pub edges: usize,
    pub loaded_at: DateTime<Utc>,
    pub data_file: String,
}

/// Generic error body for non-query endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /query - answer a free-text query.
///
/// Shape failures (unparseable body, missing or non-string `query` field)
/// are recovered into an `error` answer; a well-formed query always yields
/// an `answer`.
pub async fn query_handler(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Json<QueryResponse> {
    let value = match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            warn!("rejected query body: {}", rejection.body_text());
            return Json(QueryResponse::error(rejection.body_text()));
        }
    };

    let query = match serde_json::from_value::<QueryRequest>(value) {
        Ok(request) => request.query,
        Err(e) => {
            return Json(QueryResponse::error(format!(
                "Request body must carry a string 'query' field: {}",
                e
            )))
        }
    };

    let graph = state.current_graph().await;
    let answer = QueryEngine::new(graph).answer(&query);
    info!(%query, "answered query");
    Json(QueryResponse::answer(answer))
}

/// GET /data - the node-link document for the current graph.
pub async fn data_handler(State(state): State<Arc<ApiState>>) -> Json<GraphDocument> {
    let graph = state.current_graph().await;
    Json(GraphDocument::from_graph(&graph))
}

/// POST /regenerate - rebuild the graph from the configured source and
/// atomically swap it in.
pub async fn regenerate_handler(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match state.regenerate().await {
        Ok((nodes, edges)) => {
            info!(nodes, edges, "graph regenerated");
            (
                StatusCode::OK,
                Json(RegenerateResponse {
                    nodes,
                    edges,
                    message: "Graph regenerated".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("regeneration failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /stats - node/edge counts for the current graph.
pub async fn stats_handler(State(state): State<Arc<ApiState>>) -> Json<StatsResponse> {
    let state_guard = state.state.read().await;
    Json(StatsResponse {
        nodes: state_guard.graph.node_count(),
        edges: state_guard.graph.edge_count(),
        loaded_at: state_guard.loaded_at,
        data_file: state.config.graph_file().display().to_string(),
    })
}
