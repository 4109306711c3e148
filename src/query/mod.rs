//! Free-text query answering over the built graph.
//!
//! A query is classified into one of three intents by prefix (node info,
//! node relationships, or a general keyword scan) and resolved against
//! graph structure into a single natural-language answer string. A
//! well-formed query never fails: lookup misses resolve to descriptive
//! "not found" answers.

mod engine;

pub use engine::{QueryEngine, QueryIntent};
