//! In-memory graph structure.

use std::collections::HashMap;

/// Unordered pair of node ids identifying one undirected edge.
///
/// The pair is stored in lexicographic order so that (a, b) and (b, a) hash
/// and compare identically. Self-loops are legal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    first: String,
    second: String,
}

impl EdgeKey {
    /// Build the canonical key for an endpoint pair.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let a = a.into();
        let b = b.into();
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// First endpoint in canonical order.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Second endpoint in canonical order.
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Whether `id` is one of the endpoints.
    pub fn touches(&self, id: &str) -> bool {
        self.first == id || self.second == id
    }

    /// The endpoint opposite `id`, assuming `id` is an endpoint.
    pub fn other<'a>(&'a self, id: &str) -> &'a str {
        if self.first == id {
            &self.second
        } else {
            &self.first
        }
    }
}

/// The full node/edge collection built from a batch of text units.
///
/// Node identity is exact string equality on surface text with no
/// normalization, stemming, or case-folding. Labels and relations follow
/// last-write-wins on collision; no history is kept.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    nodes: HashMap<String, Option<String>>,
    edges: HashMap<EdgeKey, Option<String>>,
}

impl KnowledgeGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a node, overwriting any existing label.
    pub fn add_node(&mut self, id: impl Into<String>, label: Option<String>) {
        self.nodes.insert(id.into(), label);
    }

    /// Insert a node with no label unless it already exists.
    ///
    /// Existing labels are left untouched; this is how edge endpoints that
    /// never appeared as extracted entities enter the node set.
    pub fn ensure_node(&mut self, id: &str) {
        if !self.nodes.contains_key(id) {
            self.nodes.insert(id.to_string(), None);
        }
    }

    /// Upsert an undirected edge, overwriting any existing relation for the
    /// pair. Both endpoints are ensured as nodes.
    pub fn add_edge(
        &mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        relation: Option<String>,
    ) {
        let a = a.into();
        let b = b.into();
        self.ensure_node(&a);
        self.ensure_node(&b);
        self.edges.insert(EdgeKey::new(a, b), relation);
    }

    /// Whether a node with this exact id exists.
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// The node's label, if the node exists and carries one.
    pub fn node_label(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|l| l.as_deref())
    }

    /// All nodes as (id, label) pairs.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.nodes
            .iter()
            .map(|(id, label)| (id.as_str(), label.as_deref()))
    }

    /// All edges as (key, relation) pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&EdgeKey, Option<&str>)> {
        self.edges
            .iter()
            .map(|(key, relation)| (key, relation.as_deref()))
    }

    /// Every edge incident to `id`.
    pub fn edges_of<'a>(
        &'a self,
        id: &'a str,
    ) -> impl Iterator<Item = (&'a EdgeKey, Option<&'a str>)> {
        self.edges
            .iter()
            .filter(move |(key, _)| key.touches(id))
            .map(|(key, relation)| (key, relation.as_deref()))
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
