//! Lattice: entity-relationship graph extraction and query service.
//!
//! Turns unstructured paragraphs into a queryable graph: named entities
//! become nodes, syntactic subject–verb–object patterns become edges, the
//! accumulated graph persists as a node-link JSON document, and free-text
//! questions are answered against graph structure.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod graph;
pub mod parse;
pub mod query;
pub mod sources;

pub use api::{create_router, serve, ApiState, RestApiConfig};
pub use config::Config;
pub use error::{CodecError, ConfigError, LatticeError, ParseError, Result, SourceError};
pub use extract::{EntityExtractor, RelationExtractor, RelationTriple};
pub use graph::{
    read_graph, write_graph, EdgeKey, GraphBuilder, GraphDocument, KnowledgeGraph, NO_LABEL,
    NO_RELATION,
};
pub use parse::{DepRole, EntitySpan, LanguageParser, ParsedDocument, RemoteParser, Token};
pub use query::{QueryEngine, QueryIntent};
pub use sources::read_paragraphs;
