//! Query intent classification and resolution.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::graph::KnowledgeGraph;

/// Intent of a free-text query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryIntent {
    /// Nothing left after trimming.
    Empty,
    /// "info about X" / "information about X".
    NodeInfo { name: String },
    /// "relationships of X" / "relations of X".
    NodeRelationships { name: String },
    /// Anything else: substring scan over every edge.
    Keyword { term: String },
}

/// Answers free-text queries against an immutable graph.
///
/// Each query is stateless and independent; the engine holds nothing but
/// the graph handle. Classification is case-insensitive, but node-name
/// lookup preserves the casing the caller typed, since node identity in
/// the graph is exact.
pub struct QueryEngine {
    graph: Arc<KnowledgeGraph>,
}

static INFO_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:info|information)\s+about\b").expect("Invalid regex"));
static RELATIONS_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:relationships|relations)\s+of\b").expect("Invalid regex"));
static ABOUT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\babout\b").expect("Invalid regex"));
static OF_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bof\b").expect("Invalid regex"));

impl QueryEngine {
    /// Create an engine over the given graph.
    pub fn new(graph: Arc<KnowledgeGraph>) -> Self {
        Self { graph }
    }

    /// Classify a query string into an intent.
    ///
    /// Node names are the remainder after the first occurrence of the
    /// pivot word ("about" / "of"), trimmed.
    pub fn classify(query: &str) -> QueryIntent {
        let query = query.trim();
        if query.is_empty() {
            return QueryIntent::Empty;
        }

        if INFO_PREFIX.is_match(query) {
            let name = remainder_after(query, &ABOUT_WORD);
            return QueryIntent::NodeInfo { name };
        }

        if RELATIONS_PREFIX.is_match(query) {
            let name = remainder_after(query, &OF_WORD);
            return QueryIntent::NodeRelationships { name };
        }

        QueryIntent::Keyword {
            term: query.to_string(),
        }
    }

    /// Resolve a query to a natural-language answer string.
    pub fn answer(&self, query: &str) -> String {
        match Self::classify(query) {
            QueryIntent::Empty => "No query provided. Please provide a query.".to_string(),
            QueryIntent::NodeInfo { name } => self.node_info(&name),
            QueryIntent::NodeRelationships { name } => self.node_relationships(&name),
            QueryIntent::Keyword { term } => self.keyword_scan(&term),
        }
    }

    fn node_info(&self, name: &str) -> String {
        if self.graph.has_node(name) {
            let label = self.graph.node_label(name).unwrap_or("unknown");
            format!("Node '{}' has label '{}'.", name, label)
        } else {
            // Unknown node: fall back to scanning edges for the name.
            self.keyword_scan(name)
        }
    }

    fn node_relationships(&self, name: &str) -> String {
        if !self.graph.has_node(name) {
            return self.keyword_scan(name);
        }

        let relations: Vec<String> = self
            .graph
            .edges_of(name)
            .map(|(key, relation)| format_edge(name, key.other(name), relation))
            .collect();

        if relations.is_empty() {
            format!("Node '{}' has no relationships.", name)
        } else {
            format!(
                "Node '{}' has the following relationships: {}.",
                name,
                relations.join(", ")
            )
        }
    }

    fn keyword_scan(&self, term: &str) -> String {
        let needle = term.to_lowercase();
        let matches: Vec<String> = self
            .graph
            .edges()
            .filter(|(key, relation)| {
                key.first().to_lowercase().contains(&needle)
                    || key.second().to_lowercase().contains(&needle)
                    || relation
                        .map(|r| r.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            })
            .map(|(key, relation)| format_edge(key.first(), key.second(), relation))
            .collect();

        if matches.is_empty() {
            "No matches found for the query.".to_string()
        } else {
            format!("Found matches: {}.", matches.join(", "))
        }
    }
}

fn format_edge(u: &str, v: &str, relation: Option<&str>) -> String {
    format!("{} -- {}: {}", u, v, relation.unwrap_or("unknown"))
}

fn remainder_after(query: &str, word: &Regex) -> String {
    match word.find(query) {
        Some(m) => query[m.end()..].trim().to_string(),
        None => String::new(),
    }
}
