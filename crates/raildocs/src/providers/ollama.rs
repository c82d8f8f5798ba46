//! Ollama-backed rationale provider

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::LlmConfig;
use crate::decision::PromptBuilder;
use crate::error::{Error, Result};
use crate::types::AvailabilityDecision;

use super::llm::RationaleProvider;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Rationale provider backed by a local Ollama server
pub struct OllamaRationaler {
    client: Client,
    config: LlmConfig,
}

impl OllamaRationaler {
    /// Create a provider from LLM configuration
    pub fn new(config: &LlmConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config: config.clone(),
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.config.base_url);
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
            },
        };

        let mut last_error = None;
        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::warn!(
                    "retrying Ollama request (attempt {}/{})",
                    attempt + 1,
                    self.config.max_retries + 1
                );
            }

            match self.try_generate(&url, &request).await {
                Ok(text) => return Ok(text),
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or_else(|| Error::Internal("request never attempted".to_string())))
    }

    async fn try_generate(&self, url: &str, request: &GenerateRequest<'_>) -> Result<String> {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Llm(format!("Ollama request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Llm(format!("Ollama error: {} - {}", status, body)));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Llm(format!("failed to parse Ollama response: {}", e)))?;

        Ok(parsed.response.trim().to_string())
    }
}

#[async_trait]
impl RationaleProvider for OllamaRationaler {
    async fn explain(&self, decision: &AvailabilityDecision) -> Result<String> {
        let prompt = PromptBuilder::build_rationale_prompt(decision);
        self.generate(&prompt).await
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.config.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
