//! REST client for the hosted Gemini generation API.
//!
//! Covers the two calls the pipeline makes: a non-streaming generateContent
//! for summarization and a streaming (SSE) generateContent for speech
//! synthesis with inline audio payloads.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::config::TtsConfig;
use crate::error::{Result, TtsError};
use crate::generation::AudioChunk;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: Vec<&'a str>,
    speech_config: SpeechConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig<'a> {
    voice_config: VoiceConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig<'a> {
    prebuilt_voice_config: PrebuiltVoiceConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig<'a> {
    voice_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: Option<String>,
    data: Option<String>,
}

impl<'a> GenerateContentRequest<'a> {
    fn text_only(text: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![RequestPart { text }],
            }],
            generation_config: None,
        }
    }

    fn speech(text: &'a str, voice: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![RequestPart { text }],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["AUDIO"],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig { voice_name: voice },
                    },
                },
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Client for the Gemini generateContent endpoints.
#[derive(Debug)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: TtsConfig,
}

impl GeminiClient {
    /// Creates a new client from a configuration.
    pub fn new(config: TtsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &TtsConfig {
        &self.config
    }

    /// Summarizes the given text with the configured summary model.
    ///
    /// Returns the first candidate's concatenated text parts.
    pub async fn summarize(&self, text: &str) -> Result<String> {
        let request = GenerateContentRequest::text_only(text);
        let url = self.config.generate_url(&self.config.summary_model);

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TtsError::summary_failed(format!("request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| TtsError::summary_failed(format!("API error: {}", e)))?;

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| TtsError::summary_failed(format!("invalid response body: {}", e)))?;

        extract_text(body).ok_or_else(|| TtsError::summary_failed("response contained no text"))
    }

    /// Synthesizes speech for the given text with the configured TTS model.
    ///
    /// Consumes the SSE response body one network chunk at a time and
    /// returns the inline audio payloads in arrival order. The stream is
    /// read sequentially with no timeout of its own; a hung upstream call
    /// blocks until the connection drops.
    pub async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<AudioChunk>> {
        let request = GenerateContentRequest::speech(text, voice);
        let url = self.config.stream_url(&self.config.tts_model);

        let mut response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TtsError::synthesis_failed(format!("request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| TtsError::synthesis_failed(format!("API error: {}", e)))?;

        let mut chunks = Vec::new();
        let mut buffer: Vec<u8> = Vec::new();

        while let Some(bytes) = response
            .chunk()
            .await
            .map_err(|e| TtsError::synthesis_failed(format!("stream error: {}", e)))?
        {
            buffer.extend_from_slice(&bytes);
            // SSE events are newline-delimited `data: <json>` lines.
            while let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=pos).collect();
                if let Some(chunk) = parse_sse_line(&line) {
                    chunks.push(chunk);
                }
            }
        }

        // Flush a trailing line without a final newline.
        if !buffer.is_empty() {
            if let Some(chunk) = parse_sse_line(&buffer) {
                chunks.push(chunk);
            }
        }

        Ok(chunks)
    }
}

/// Parses one SSE line, returning an audio chunk if it carries inline data.
///
/// Non-data lines, keep-alives, end markers, and events that fail to parse
/// are all skipped rather than treated as errors; chunk extraction is
/// best-effort.
fn parse_sse_line(line: &[u8]) -> Option<AudioChunk> {
    let line = std::str::from_utf8(line).ok()?.trim();
    let payload = line.strip_prefix("data:")?.trim();
    if payload.is_empty() || payload == "[DONE]" {
        return None;
    }
    let event: GenerateContentResponse = serde_json::from_str(payload).ok()?;
    extract_inline_audio(event)
}

/// Extracts the first part's inline audio from a response event.
fn extract_inline_audio(response: GenerateContentResponse) -> Option<AudioChunk> {
    let part = response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?;
    let inline = part.inline_data?;
    let data = BASE64.decode(inline.data?.as_bytes()).ok()?;
    Some(AudioChunk::new(inline.mime_type, data))
}

/// Concatenates the first candidate's text parts.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
