//! Chat completions client for OpenAI-compatible APIs.
//!
//! Each call is a single blocking HTTPS round trip. There is no retry,
//! backoff, or explicit timeout; a failed request is returned to the caller
//! with the service's error body attached.

use crate::config::GeneratorConfig;
use crate::generate::PostGenerator;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice; missing choices or null content read as empty.
    fn into_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default()
    }
}

fn build_request<'a>(model: &'a str, system: &'a str, user: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: [
            ChatMessage {
                role: "system",
                content: system,
            },
            ChatMessage {
                role: "user",
                content: user,
            },
        ],
    }
}

/// Blocking client bound to one API key and model.
pub struct OpenAiClient {
    config: GeneratorConfig,
    agent: ureq::Agent,
}

impl OpenAiClient {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            agent: ureq::Agent::new_with_defaults(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }
}

impl PostGenerator for OpenAiClient {
    fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = build_request(&self.config.model, system, user);
        let endpoint = self.endpoint();
        let start = Instant::now();

        let mut response = self
            .agent
            .post(&endpoint)
            .config()
            .http_status_as_error(false)
            .build()
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send_json(&request)
            .with_context(|| format!("POST {endpoint}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.body_mut().read_to_string().unwrap_or_default();
            return Err(anyhow!(
                "chat completion failed with status {}: {}",
                status,
                body.trim()
            ));
        }
        let parsed: ChatResponse = response
            .body_mut()
            .read_json()
            .context("parse chat completion response")?;
        let text = parsed.into_text();

        tracing::info!(
            elapsed_ms = start.elapsed().as_millis(),
            model = %self.config.model,
            prompt_bytes = user.len(),
            response_bytes = text.len(),
            "chat completion complete"
        );
        Ok(text)
    }
}
