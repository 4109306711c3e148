//! REST API boundary.
//!
//! Thin HTTP shell around the query engine and graph state: request
//! framing, CORS, and the atomic swap point for regeneration live here;
//! everything else is delegated to the core modules.

mod handlers;
mod rest;

pub use handlers::*;
pub use rest::*;
