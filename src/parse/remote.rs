//! HTTP backend for the language parser interface.
//!
//! Talks to an external NLP service that exposes a single POST endpoint
//! accepting `{"text": ...}` and returning tokens with dependency info plus
//! named-entity spans. The service is treated as a black box; transport,
//! status, and decode failures all surface as [`ParseError`].

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{ParseError, Result};
use crate::parse::{EntitySpan, LanguageParser, ParsedDocument, Token};

/// Language parser backed by a remote HTTP service.
pub struct RemoteParser {
    client: reqwest::Client,
    endpoint: String,
}

/// Wire shape of the parser service response.
#[derive(Debug, Deserialize)]
struct ParseResponse {
    #[serde(default)]
    tokens: Vec<Token>,
    #[serde(default)]
    entities: Vec<EntitySpan>,
}

impl RemoteParser {
    /// Create a parser client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    async fn request(&self, text: &str) -> Result<ParseResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .map_err(|e| ParseError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ParseError::Service { status, message }.into());
        }

        let parsed: ParseResponse = response
            .json()
            .await
            .map_err(|e| ParseError::Decode(e.to_string()))?;

        // Head links must stay inside the token vector.
        let len = parsed.tokens.len();
        if let Some(bad) = parsed.tokens.iter().find(|t| t.head >= len) {
            return Err(ParseError::Decode(format!(
                "token '{}' has head index {} out of range ({} tokens)",
                bad.text, bad.head, len
            ))
            .into());
        }

        Ok(parsed)
    }
}

#[async_trait]
impl LanguageParser for RemoteParser {
    async fn parse(&self, text: &str) -> Result<ParsedDocument> {
        let response = self.request(text).await?;
        Ok(ParsedDocument::new(response.tokens))
    }

    async fn entities(&self, text: &str) -> Result<Vec<EntitySpan>> {
        let response = self.request(text).await?;
        Ok(response.entities)
    }
}
