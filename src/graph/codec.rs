//! Node-link JSON document read/write.
//!
//! The persisted format is a JSON object with exactly two arrays:
//!
//! ```json
//! { "nodes": [{"id": "...", "label": "..."}],
//!   "edges": [{"source": "...", "target": "...", "relation": "..."}] }
//! ```
//!
//! Absent attributes are written as the literal sentinels below, so a
//! write-then-read round trip preserves node and edge content exactly.
//! Malformed documents fail with a structural decode error; there is no
//! partial recovery.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};
use crate::graph::KnowledgeGraph;

/// Label written for nodes that never received one.
pub const NO_LABEL: &str = "No label";

/// Relation written for edges that never received one.
pub const NO_RELATION: &str = "No relation";

/// The persisted node-link document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// One node entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub label: String,
}

/// One edge entry. Endpoint order carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub relation: String,
}

impl GraphDocument {
    /// Capture a graph into document form, substituting sentinels for
    /// absent attributes. Entry order follows the graph's internal
    /// iteration order.
    pub fn from_graph(graph: &KnowledgeGraph) -> Self {
        let nodes = graph
            .nodes()
            .map(|(id, label)| NodeRecord {
                id: id.to_string(),
                label: label.unwrap_or(NO_LABEL).to_string(),
            })
            .collect();

        let edges = graph
            .edges()
            .map(|(key, relation)| EdgeRecord {
                source: key.first().to_string(),
                target: key.second().to_string(),
                relation: relation.unwrap_or(NO_RELATION).to_string(),
            })
            .collect();

        Self { nodes, edges }
    }

    /// Reconstruct a fresh graph, applying the same upsert semantics the
    /// builder uses: nodes first, then edges.
    pub fn into_graph(self) -> KnowledgeGraph {
        let mut graph = KnowledgeGraph::new();
        for node in self.nodes {
            graph.add_node(node.id, Some(node.label));
        }
        for edge in self.edges {
            graph.add_edge(edge.source, edge.target, Some(edge.relation));
        }
        graph
    }

    /// Decode a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CodecError::Decode(e).into())
    }

    /// Encode the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CodecError::Encode(e).into())
    }
}

/// Write a graph to a node-link document file.
pub fn write_graph(graph: &KnowledgeGraph, path: impl AsRef<Path>) -> Result<()> {
    let document = GraphDocument::from_graph(graph);
    let json = document.to_json()?;
    fs::write(path.as_ref(), json).map_err(|e| CodecError::WriteFile(e).into())
}

/// Read a graph back from a node-link document file.
pub fn read_graph(path: impl AsRef<Path>) -> Result<KnowledgeGraph> {
    let json = fs::read_to_string(path.as_ref()).map_err(CodecError::ReadFile)?;
    Ok(GraphDocument::from_json(&json)?.into_graph())
}
