//! Named-entity extraction for one text unit.

use std::sync::Arc;

use crate::error::Result;
use crate::parse::{EntitySpan, LanguageParser};

/// Extracts named-entity spans from text units via the language parser.
///
/// Every span the parser detects is returned as-is, in parser order. No
/// span-overlap resolution or deduplication happens here; node identity in
/// the graph takes care of repeats. Parser failures propagate.
pub struct EntityExtractor {
    parser: Arc<dyn LanguageParser>,
}

impl EntityExtractor {
    /// Create an extractor over the given parser backend.
    pub fn new(parser: Arc<dyn LanguageParser>) -> Self {
        Self { parser }
    }

    /// Extract every entity span from one text unit.
    pub async fn extract(&self, text: &str) -> Result<Vec<EntitySpan>> {
        self.parser.entities(text).await
    }
}
