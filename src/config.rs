//! Pipeline configuration module.
//!
//! Provides configuration for the hosted API (key, models, voice)
//! with environment-variable loading for script use.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TtsError};

/// Model used for the summarization step.
pub const DEFAULT_SUMMARY_MODEL: &str = "gemini-1.5-flash-latest";

/// Model used for the speech synthesis step.
pub const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Prebuilt voice used when none is configured.
pub const DEFAULT_VOICE: &str = "Zephyr";

/// Base URL of the generation API.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the tts-pipe pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsConfig {
    /// API key for the hosted generation service.
    pub api_key: String,

    /// Prebuilt voice name for speech synthesis.
    pub voice: String,

    /// Model identifier used for summarization.
    pub summary_model: String,

    /// Model identifier used for speech synthesis.
    pub tts_model: String,

    /// Base URL of the generation API.
    pub api_base: String,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            voice: DEFAULT_VOICE.to_string(),
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            tts_model: DEFAULT_TTS_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl TtsConfig {
    /// Creates a new TtsConfig with the given API key and defaults elsewhere.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Loads configuration from the environment.
    ///
    /// Reads the API key from GEMINI_API_KEY, falling back to GOOGLE_API_KEY,
    /// and the voice from VOICE_NAME. Fails if no API key is set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| TtsError::missing_api_key())?;

        let voice = std::env::var("VOICE_NAME").unwrap_or_else(|_| DEFAULT_VOICE.to_string());

        Ok(Self {
            api_key,
            voice,
            ..Default::default()
        })
    }

    /// Returns the non-streaming generateContent URL for a model.
    pub fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_base, model)
    }

    /// Returns the streaming (SSE) generateContent URL for a model.
    pub fn stream_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.api_base, model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_known_models() {
        let config = TtsConfig::default();
        assert_eq!(config.voice, "Zephyr");
        assert_eq!(config.summary_model, DEFAULT_SUMMARY_MODEL);
        assert_eq!(config.tts_model, DEFAULT_TTS_MODEL);
    }

    #[test]
    fn urls_include_model_and_action() {
        let config = TtsConfig::with_api_key("test-key");
        assert_eq!(
            config.generate_url("gemini-1.5-flash-latest"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent"
        );
        assert!(config
            .stream_url("gemini-2.5-flash-preview-tts")
            .ends_with(":streamGenerateContent?alt=sse"));
    }
}
