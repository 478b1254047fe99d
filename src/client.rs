//! Completion provider clients
//!
//! Two-leg fallback chain over OpenAI-shaped chat completion endpoints:
//! - Primary: Pulze, best-of-3 sampling at temperature 1, routing weighted
//!   entirely toward quality, requests labeled for observability
//! - Fallback: OpenAI, single completion with default sampling
//!
//! Any transport or envelope error on one leg moves to the next; there is no
//! retry beyond that single hop. The first candidate in a response is taken
//! as authoritative.

use crate::config::Config;
use crate::error::{HatchError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const PULZE_API_URL: &str = "https://api.pulze.ai/v1/chat/completions";
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Routing hint sent with every Pulze request: quality over cost and latency.
const PULZE_WEIGHTS: &str = r#"{"cost":0.0,"quality":1.0,"latency":0.0}"#;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    n: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// One way of turning a prompt into a single text completion.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// `label` categorizes the request ("hatch_list" / "materials_list");
    /// providers that have nowhere to put it may ignore it.
    async fn complete(&self, prompt: &str, label: &str) -> Result<String>;
}

pub struct PulzeProvider {
    http: reqwest::Client,
    api_key: String,
}

impl PulzeProvider {
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: build_http_client(timeout)?,
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl CompletionProvider for PulzeProvider {
    fn name(&self) -> &'static str {
        "pulze"
    }

    async fn complete(&self, prompt: &str, label: &str) -> Result<String> {
        let request = ChatRequest {
            model: "pulze",
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            n: Some(3),
            temperature: Some(1.0),
        };
        let labels = serde_json::to_string(&serde_json::json!({ "request": label }))?;

        let response = self
            .http
            .post(PULZE_API_URL)
            .bearer_auth(&self.api_key)
            .header("Pulze-Labels", labels)
            .header("Pulze-Weights", PULZE_WEIGHTS)
            .json(&request)
            .send()
            .await
            .map_err(|e| HatchError::ApiCall(format!("pulze request failed: {e}")))?;

        read_first_choice(response, "pulze").await
    }
}

pub struct OpenAiProvider {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: &str, model: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: build_http_client(timeout)?,
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, prompt: &str, _label: &str) -> Result<String> {
        // Default sampling on the fallback leg: no n, no temperature.
        let request = ChatRequest {
            model: &self.model,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            n: None,
            temperature: None,
        };

        let response = self
            .http
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| HatchError::ApiCall(format!("openai request failed: {e}")))?;

        read_first_choice(response, "openai").await
    }
}

fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| HatchError::Config(format!("failed to create HTTP client: {e}")))
}

async fn read_first_choice(response: reqwest::Response, provider: &str) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(HatchError::ApiCall(format!(
            "{provider} returned status {status}"
        )));
    }

    let parsed: ChatResponse = response
        .json()
        .await
        .map_err(|e| HatchError::ApiCall(format!("{provider} response was not valid JSON: {e}")))?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| HatchError::ApiCall(format!("{provider} returned no choices")))
}

/// Ordered chain of completion providers, tried front to back.
pub struct CompletionClient {
    providers: Vec<Box<dyn CompletionProvider>>,
    verbose: bool,
}

impl CompletionClient {
    /// Standard chain: Pulze primary, OpenAI fallback, both on the one
    /// credential the caller supplied.
    pub fn new(api_key: &str, config: &Config, verbose: bool) -> Result<Self> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let providers: Vec<Box<dyn CompletionProvider>> = vec![
            Box::new(PulzeProvider::new(api_key, timeout)?),
            Box::new(OpenAiProvider::new(api_key, &config.fallback_model, timeout)?),
        ];
        Ok(Self { providers, verbose })
    }

    pub fn from_providers(providers: Vec<Box<dyn CompletionProvider>>) -> Self {
        Self {
            providers,
            verbose: false,
        }
    }

    /// Try every leg in order; first success wins, last error propagates.
    pub async fn complete(&self, prompt: &str, label: &str) -> Result<String> {
        self.try_chain(&self.providers, prompt, label).await
    }

    /// Skip the primary leg. Used when the primary's completion parsed to
    /// nothing rather than failing outright.
    pub async fn complete_fallback(&self, prompt: &str, label: &str) -> Result<String> {
        if self.providers.len() < 2 {
            return Err(HatchError::ApiCall("no fallback provider configured".into()));
        }
        self.try_chain(&self.providers[1..], prompt, label).await
    }

    async fn try_chain(
        &self,
        providers: &[Box<dyn CompletionProvider>],
        prompt: &str,
        label: &str,
    ) -> Result<String> {
        let mut last_err = HatchError::ApiCall("no completion providers configured".into());
        for provider in providers {
            match provider.complete(prompt, label).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    if self.verbose {
                        println!("  {} request failed: {}", provider.name(), e);
                    }
                    last_err = e;
                }
            }
        }
        Err(last_err)
    }
}
