use serde::{Deserialize, Serialize};
use std::fmt;

/// Strength classification returned by the advisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    /// Lenient parse from the model's free-text assessment.
    ///
    /// Matches case-insensitively; compound phrases ("very strong") resolve
    /// by checking Strong, then Moderate, then Weak. Returns `None` for
    /// anything unrecognizable — the caller treats that as a failed analysis.
    pub fn from_free_text(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        if lower.contains("strong") {
            Some(StrengthLabel::Strong)
        } else if lower.contains("moderate") || lower.contains("medium") {
            Some(StrengthLabel::Moderate)
        } else if lower.contains("weak") {
            Some(StrengthLabel::Weak)
        } else {
            None
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Moderate => write!(f, "Moderate"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Result of a strength analysis: a label plus ordered, human-readable
/// improvement suggestions (possibly empty).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthReport {
    pub strength: StrengthLabel,
    pub suggestions: Vec<String>,
}

/// Configuration for the advisor's model endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    pub api_endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://openrouter.ai/api/v1/chat/completions".to_string(),
            model: "google/gemini-2.0-flash".to_string(),
            api_key: None,
        }
    }
}
