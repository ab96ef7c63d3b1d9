//! Meaning resolution: prompt the completion service with the document and
//! its candidate abbreviations, then parse the free-text answer.

use crate::abbrev::AbbreviationSet;
use crate::engine::config::Config;
use thiserror::Error;

pub mod client;
pub mod parser;
pub mod prompt;

pub use client::{CompletionClient, CompletionRequest, OpenAiClient};
pub use parser::{parse_meanings, MeaningMap};
pub use prompt::build_prompt;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Resolves candidate abbreviations through a completion client.
pub struct Resolver<'a, C: CompletionClient + ?Sized> {
    client: &'a C,
    config: &'a Config,
}

impl<'a, C: CompletionClient + ?Sized> Resolver<'a, C> {
    pub fn new(client: &'a C, config: &'a Config) -> Self {
        Self { client, config }
    }

    /// All candidates go out in one request. An empty candidate set never
    /// reaches the service.
    pub fn resolve(
        &self,
        abbreviations: &AbbreviationSet,
        context: &str,
    ) -> Result<MeaningMap, ResolveError> {
        if abbreviations.is_empty() {
            tracing::info!("no abbreviation candidates, skipping completion call");
            return Ok(MeaningMap::new());
        }

        let request = CompletionRequest {
            model: self.config.model.clone(),
            prompt: build_prompt(abbreviations, context),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens_for(abbreviations.len()),
        };

        let text = self.client.complete(&request)?;
        let meanings = parse_meanings(&text);

        tracing::info!(
            candidates = abbreviations.len(),
            resolved = meanings.len(),
            "abbreviations resolved"
        );
        Ok(meanings)
    }
}
