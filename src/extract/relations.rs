//! Relation extraction over a dependency parse.
//!
//! Walks every token of a parsed unit once and applies two mutually
//! exclusive pattern rules:
//!
//! - **Predicate-complement**: a token in `attr` or `dobj` role whose
//!   governor has a left-dependent nominal subject yields
//!   (subject, this token, governor). The triple's middle element is the
//!   complement token itself, so the edge relation downstream carries the
//!   complement's lemma rather than the governing verb's.
//! - **Prepositional-object**: a token in `pobj` role under a `prep`
//!   governor yields (governor-of-governor, preposition, this token); the
//!   edge relation carries the preposition's lemma.
//!
//! A token matching neither rule produces nothing. When several left
//! dependents carry the subject role, only the first is used.

use crate::parse::{DepRole, ParsedDocument, Token};

/// A (subject, verb, object) triple over token indices of one parsed unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationTriple {
    /// Index of the subject token.
    pub subject: usize,
    /// Index of the middle token; its lemma labels the edge.
    pub verb: usize,
    /// Index of the object token.
    pub object: usize,
}

impl RelationTriple {
    /// Resolve the subject token.
    pub fn subject_token<'a>(&self, doc: &'a ParsedDocument) -> &'a Token {
        &doc.tokens()[self.subject]
    }

    /// Resolve the middle (relation-bearing) token.
    pub fn verb_token<'a>(&self, doc: &'a ParsedDocument) -> &'a Token {
        &doc.tokens()[self.verb]
    }

    /// Resolve the object token.
    pub fn object_token<'a>(&self, doc: &'a ParsedDocument) -> &'a Token {
        &doc.tokens()[self.object]
    }
}

/// Extracts subject–verb–object triples from parsed text units.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationExtractor;

impl RelationExtractor {
    /// Create a new relation extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract triples from one parsed unit, in token order.
    pub fn extract(&self, doc: &ParsedDocument) -> Vec<RelationTriple> {
        let tokens = doc.tokens();
        let mut triples = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            match token.dep {
                DepRole::Attr | DepRole::Dobj => {
                    let governor = token.head;
                    if let Some(subject) = doc
                        .lefts(governor)
                        .find(|&j| tokens[j].dep == DepRole::Nsubj)
                    {
                        triples.push(RelationTriple {
                            subject,
                            verb: i,
                            object: governor,
                        });
                    }
                }
                DepRole::Pobj if tokens[token.head].dep == DepRole::Prep => {
                    let preposition = token.head;
                    triples.push(RelationTriple {
                        subject: tokens[preposition].head,
                        verb: preposition,
                        object: i,
                    });
                }
                _ => {}
            }
        }

        triples
    }
}
