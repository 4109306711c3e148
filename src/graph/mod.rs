//! The cumulative entity-relationship graph.
//!
//! An explicit owned structure, a map from node id to optional label plus
//! a map from unordered id pair to optional relation, covers everything
//! this crate needs: O(1) upserts and existence checks, O(degree) incident
//! edge listing, and a direct mapping onto the node-link document format.
//! No external graph library is involved.

mod builder;
mod codec;
mod model;

pub use builder::GraphBuilder;
pub use codec::{read_graph, write_graph, GraphDocument, NO_LABEL, NO_RELATION};
pub use model::{EdgeKey, KnowledgeGraph};
