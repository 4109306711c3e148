//! Shared fixture parser backend.
//!
//! Serves canned dependency parses and entity spans for a tiny corpus,
//! shaped the way an NLP service would emit them.

use std::collections::HashMap;

use async_trait::async_trait;

use lattice::error::{ParseError, Result};
use lattice::parse::{DepRole, EntitySpan, LanguageParser, ParsedDocument, Token};

pub const UNIT_DISCOVERY: &str = "Curie discovered polonium.";
pub const UNIT_PROFESSION: &str = "Curie was a chemist.";
pub const UNIT_RESIDENCE: &str = "Curie worked in Paris.";

/// The fixture corpus, in ingestion order.
pub fn corpus() -> Vec<&'static str> {
    vec![UNIT_DISCOVERY, UNIT_PROFESSION, UNIT_RESIDENCE]
}

fn token(text: &str, lemma: &str, dep: DepRole, head: usize) -> Token {
    Token {
        text: text.to_string(),
        lemma: lemma.to_string(),
        dep,
        head,
    }
}

fn span(text: &str, label: &str) -> EntitySpan {
    EntitySpan {
        text: text.to_string(),
        label: label.to_string(),
    }
}

/// Parser that answers from a canned table and fails on unknown text.
pub struct FixtureParser {
    docs: HashMap<&'static str, ParsedDocument>,
    spans: HashMap<&'static str, Vec<EntitySpan>>,
}

impl Default for FixtureParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureParser {
    pub fn new() -> Self {
        let mut docs = HashMap::new();
        let mut spans = HashMap::new();

        docs.insert(
            UNIT_DISCOVERY,
            ParsedDocument::new(vec![
                token("Curie", "curie", DepRole::Nsubj, 1),
                token("discovered", "discover", DepRole::Other, 1),
                token("polonium", "polonium", DepRole::Dobj, 1),
                token(".", ".", DepRole::Other, 1),
            ]),
        );
        spans.insert(UNIT_DISCOVERY, vec![span("Curie", "PERSON")]);

        docs.insert(
            UNIT_PROFESSION,
            ParsedDocument::new(vec![
                token("Curie", "curie", DepRole::Nsubj, 1),
                token("was", "be", DepRole::Other, 1),
                token("a", "a", DepRole::Other, 3),
                token("chemist", "chemist", DepRole::Attr, 1),
                token(".", ".", DepRole::Other, 1),
            ]),
        );
        spans.insert(UNIT_PROFESSION, vec![span("Curie", "PERSON")]);

        docs.insert(
            UNIT_RESIDENCE,
            ParsedDocument::new(vec![
                token("Curie", "curie", DepRole::Nsubj, 1),
                token("worked", "work", DepRole::Other, 1),
                token("in", "in", DepRole::Prep, 1),
                token("Paris", "paris", DepRole::Pobj, 2),
                token(".", ".", DepRole::Other, 1),
            ]),
        );
        spans.insert(
            UNIT_RESIDENCE,
            vec![span("Curie", "PERSON"), span("Paris", "GPE")],
        );

        Self { docs, spans }
    }
}

#[async_trait]
impl LanguageParser for FixtureParser {
    async fn parse(&self, text: &str) -> Result<ParsedDocument> {
        self.docs
            .get(text)
            .cloned()
            .ok_or_else(|| ParseError::Decode(format!("no fixture for: {}", text)).into())
    }

    async fn entities(&self, text: &str) -> Result<Vec<EntitySpan>> {
        self.spans
            .get(text)
            .cloned()
            .ok_or_else(|| ParseError::Decode(format!("no fixture for: {}", text)).into())
    }
}
