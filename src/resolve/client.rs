use super::ResolveError;
use crate::engine::config::Config;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// A single completion request: one user message, greedy decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Text-completion service seen by the resolver.
///
/// Returns the raw text of the first choice, or an empty string when the
/// service produced no choice or no content.
pub trait CompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ResolveError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: Message,
}

#[derive(Deserialize, Debug)]
struct Message {
    content: Option<String>,
}

/// OpenAI-compatible chat-completions client (blocking).
pub struct OpenAiClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self, ResolveError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ResolveError> {
        let body = ChatRequest {
            model: &request.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %request.model,
            max_tokens = request.max_tokens,
            prompt_chars = request.prompt.len(),
            "sending completion request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            return Err(ResolveError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        extract_content(&text)
    }
}

/// Pull the first choice's message content out of a chat-completions body.
fn extract_content(body: &str) -> Result<String, ResolveError> {
    let parsed: ChatResponse = serde_json::from_str(body)?;

    match parsed.choices.into_iter().next() {
        Some(choice) => Ok(choice.message.content.unwrap_or_default()),
        None => {
            tracing::warn!("completion response contained no choices");
            Ok(String::new())
        }
    }
}
