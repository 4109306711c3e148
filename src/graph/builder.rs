//! Batch construction of the knowledge graph from text units.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Result;
use crate::extract::{EntityExtractor, RelationExtractor};
use crate::graph::KnowledgeGraph;
use crate::parse::LanguageParser;

/// Folds entities and relation triples from many text units into one graph.
///
/// Ingestion is a blocking batch over the input collection, in order; order
/// only matters for last-write-wins collisions on node labels and edge
/// relations. A parser failure aborts the batch for that unit's caller;
/// the builder does not retry.
pub struct GraphBuilder {
    parser: Arc<dyn LanguageParser>,
    entities: EntityExtractor,
    relations: RelationExtractor,
}

impl GraphBuilder {
    /// Create a builder over the given parser backend.
    pub fn new(parser: Arc<dyn LanguageParser>) -> Self {
        let entities = EntityExtractor::new(Arc::clone(&parser));
        Self {
            parser,
            entities,
            relations: RelationExtractor::new(),
        }
    }

    /// Ingest one text unit into the graph.
    ///
    /// Entities become labeled nodes; relation triples become edges keyed by
    /// the subject and object surface texts, labeled with the middle token's
    /// lemma. Edge endpoints that were never extracted as entities become
    /// unlabeled nodes. No validation ties edges back to the entity set.
    pub async fn ingest(&self, graph: &mut KnowledgeGraph, text: &str) -> Result<()> {
        let spans = self.entities.extract(text).await?;
        for span in &spans {
            graph.add_node(span.text.clone(), Some(span.label.clone()));
        }

        let doc = self.parser.parse(text).await?;
        let triples = self.relations.extract(&doc);
        for triple in &triples {
            graph.add_edge(
                triple.subject_token(&doc).text.clone(),
                triple.object_token(&doc).text.clone(),
                Some(triple.verb_token(&doc).lemma.clone()),
            );
        }

        debug!(
            entities = spans.len(),
            triples = triples.len(),
            "ingested text unit"
        );
        Ok(())
    }

    /// Build a fresh graph from an ordered collection of text units.
    pub async fn build<I, S>(&self, units: I) -> Result<KnowledgeGraph>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = KnowledgeGraph::new();
        let mut count = 0usize;
        for unit in units {
            self.ingest(&mut graph, unit.as_ref()).await?;
            count += 1;
        }

        info!(
            units = count,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph build complete"
        );
        Ok(graph)
    }
}
