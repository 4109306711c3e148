//! Extraction layer: turns text units into graph raw material.
//!
//! Two extractors run over every text unit:
//!
//! - [`EntityExtractor`] asks the language parser for named-entity spans;
//!   these become graph nodes.
//! - [`RelationExtractor`] walks the unit's dependency parse and emits
//!   subject–verb–object triples; these become graph edges.
//!
//! Neither extractor filters or deduplicates; collisions are resolved by
//! the graph's upsert semantics downstream.

mod entities;
mod relations;

pub use entities::EntityExtractor;
pub use relations::{RelationExtractor, RelationTriple};
