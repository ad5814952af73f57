//! AI-backed password strength advisor.
//!
//! Delegates strength scoring to an external generative model behind an
//! OpenAI-compatible chat endpoint. The request embeds the expected
//! response shape in the prompt; the reply is parsed back into a
//! [`StrengthReport`]. Single-shot, non-cancelable, no retry — any
//! transport or model failure surfaces as "analysis unavailable".

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::types::advisor::{AdvisorConfig, StrengthLabel, StrengthReport};
use crate::types::errors::AdvisorError;

/// Trait defining the strength analysis operation.
#[async_trait]
pub trait StrengthAdvisorTrait {
    async fn analyze(&self, password: &str) -> Result<StrengthReport, AdvisorError>;
}

/// Strength advisor backed by an OpenAI-compatible chat-completions API.
pub struct StrengthAdvisor {
    client: reqwest::Client,
    config: AdvisorConfig,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Deserialize)]
struct RawReport {
    strength: String,
    #[serde(default)]
    suggestions: Vec<String>,
}

impl StrengthAdvisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    fn build_prompt(password: &str) -> String {
        format!(
            "You are a password security expert. Analyze the strength of the \
             provided password and provide specific, actionable suggestions for \
             improvement.\n\n\
             Password: {}\n\n\
             Respond with only a JSON object of the following structure:\n\
             {{\n\
               \"strength\": \"(Weak, Moderate, or Strong)\",\n\
               \"suggestions\": [\"suggestion 1\", \"suggestion 2\"]\n\
             }}",
            password
        )
    }

    /// Parses the model's message content into a report.
    ///
    /// Tolerates code fences around the JSON body. An unrecognizable
    /// strength assessment is a failure, not a guessed label.
    pub fn parse_report(content: &str) -> Result<StrengthReport, AdvisorError> {
        let trimmed = content
            .trim()
            .trim_start_matches("```json")
            .trim_start_matches("```")
            .trim_end_matches("```")
            .trim();

        let raw: RawReport = serde_json::from_str(trimmed).map_err(|e| {
            AdvisorError::AnalysisUnavailable(format!("malformed model response: {}", e))
        })?;

        let strength = StrengthLabel::from_free_text(&raw.strength).ok_or_else(|| {
            AdvisorError::AnalysisUnavailable(format!(
                "unrecognized strength assessment: {}",
                raw.strength
            ))
        })?;

        Ok(StrengthReport {
            strength,
            suggestions: raw.suggestions,
        })
    }
}

#[async_trait]
impl StrengthAdvisorTrait for StrengthAdvisor {
    async fn analyze(&self, password: &str) -> Result<StrengthReport, AdvisorError> {
        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "user", "content": Self::build_prompt(password) }
            ],
        });

        let mut request = self.client.post(&self.config.api_endpoint).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "strength analysis request failed");
            AdvisorError::AnalysisUnavailable(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(status = %status, "strength analysis provider error");
            return Err(AdvisorError::AnalysisUnavailable(format!(
                "provider returned {}",
                status
            )));
        }

        let chat: ChatResponse = response.json().await.map_err(|e| {
            AdvisorError::AnalysisUnavailable(format!("malformed provider response: {}", e))
        })?;

        let content = chat
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| {
                AdvisorError::AnalysisUnavailable("provider returned no choices".to_string())
            })?;

        Self::parse_report(content)
    }
}
