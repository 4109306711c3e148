//! The external language parser, behind a narrow capability interface.
//!
//! The rest of the crate never sees a linguistic engine directly: it works
//! with [`ParsedDocument`] (tokens carrying dependency roles, lemmas, and
//! head links) and [`EntitySpan`] (named-entity surface text plus a label).
//! Any backend that can produce those two shapes, whether a remote NLP
//! service or a test fixture, plugs in through [`LanguageParser`].

mod remote;

pub use remote::RemoteParser;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Types
// ============================================================================

/// The grammatical relation of a token to its governing token.
///
/// The vocabulary mirrors the dependency tags emitted by common NLP
/// services; anything outside the roles the relation extractor cares about
/// collapses into [`DepRole::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepRole {
    /// Nominal subject.
    Nsubj,
    /// Direct object.
    Dobj,
    /// Attribute complement (predicate nominal).
    Attr,
    /// Object of a preposition.
    Pobj,
    /// Preposition.
    Prep,
    /// Any other dependency role.
    #[serde(other)]
    Other,
}

/// One token of a parsed text unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// The token's surface text.
    pub text: String,
    /// The token's lemma (base form).
    pub lemma: String,
    /// Dependency role relative to the head token.
    pub dep: DepRole,
    /// Index of the governing token; roots point at themselves.
    pub head: usize,
}

/// A dependency-parsed text unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedDocument {
    tokens: Vec<Token>,
}

impl ParsedDocument {
    /// Build a document from a token sequence.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// All tokens in document order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Token at `index`, if in range.
    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Indices of the left-dependents of token `head`: tokens appearing
    /// before it whose head link points at it, in document order.
    pub fn lefts(&self, head: usize) -> impl Iterator<Item = usize> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .take(head)
            .filter(move |(_, t)| t.head == head)
            .map(|(i, _)| i)
    }
}

/// A named-entity span detected by the parser.
///
/// The label vocabulary belongs entirely to the backend; the core treats it
/// as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// The raw matched surface text.
    pub text: String,
    /// Category tag (e.g. person, organization, date).
    pub label: String,
}

// ============================================================================
// Parser Trait
// ============================================================================

/// Capability interface for language parser backends.
#[async_trait]
pub trait LanguageParser: Send + Sync {
    /// Tokenize and dependency-parse one text unit.
    async fn parse(&self, text: &str) -> Result<ParsedDocument>;

    /// Detect named-entity spans in one text unit.
    async fn entities(&self, text: &str) -> Result<Vec<EntitySpan>>;
}
