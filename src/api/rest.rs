//! REST API router and server.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

use crate::api::handlers::{
    data_handler, query_handler, regenerate_handler, stats_handler, ApiState,
};
use crate::config::ServerConfig;

/// REST API configuration.
#[derive(Debug, Clone)]
pub struct RestApiConfig {
    /// Enable CORS.
    pub enable_cors: bool,
    /// Allowed origins for CORS; "*" means any.
    pub cors_origins: Vec<String>,
    /// API prefix (e.g. "/api").
    pub prefix: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            cors_origins: vec!["*".to_string()],
            prefix: "/api".to_string(),
        }
    }
}

impl From<&ServerConfig> for RestApiConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            enable_cors: server.enable_cors,
            cors_origins: server.cors_origins.clone(),
            prefix: server.prefix.clone(),
        }
    }
}

/// Create the REST API router.
///
/// Endpoints:
/// - POST {prefix}/query      - Answer a free-text query
/// - GET  {prefix}/data       - Current graph as a node-link document
/// - POST {prefix}/regenerate - Rebuild from source and swap the graph
/// - GET  {prefix}/stats      - Node/edge counts
pub fn create_router(state: Arc<ApiState>, config: &RestApiConfig) -> Router {
    let api_routes = Router::new()
        .route("/query", post(query_handler))
        .route("/data", get(data_handler))
        .route("/regenerate", post(regenerate_handler))
        .route("/stats", get(stats_handler))
        .with_state(state);

    let router = Router::new().nest(&config.prefix, api_routes);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);

        let cors = if config.cors_origins.iter().any(|o| o == "*") {
            cors.allow_origin(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            cors.allow_origin(AllowOrigin::list(origins))
        };

        router.layer(cors)
    } else {
        router
    }
}

/// Bind and serve the router until the process is stopped.
pub async fn serve(router: Router, port: u16) -> crate::error::Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Query API listening on {}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}
