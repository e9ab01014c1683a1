//! Speech synthesis pipeline.
//!
//! Orchestrates the two hosted calls: summarize the input text, then
//! synthesize speech from the summary and package the streamed audio
//! as a WAV file.

use crate::audio::{pcm_duration, PcmFormat};
use crate::config::DEFAULT_VOICE;
use crate::error::{Result, TtsError};
use crate::generation::collect::{AudioCollector, FALLBACK_MIME_TYPE};
use crate::models::GeminiClient;

/// Options controlling a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Prebuilt voice name for synthesis.
    pub voice: String,
    /// Whether to summarize the input before speaking it.
    pub summarize: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            voice: DEFAULT_VOICE.to_string(),
            summarize: true,
        }
    }
}

/// Runs the full text-to-speech pipeline and returns the final audio bytes.
///
/// # Arguments
///
/// * `client` - Hosted generation API client
/// * `input_text` - Text to summarize and speak
/// * `options` - Voice and summarization settings
///
/// # Returns
///
/// A complete WAV file (or the upstream bytes unmodified when the API
/// already reported `audio/wav`).
pub async fn run(
    client: &GeminiClient,
    input_text: &str,
    options: &PipelineOptions,
) -> Result<Vec<u8>> {
    let input_text = input_text.trim();
    if input_text.is_empty() {
        return Err(TtsError::empty_input());
    }

    // Step 1: Summarization (best-effort; a failure falls back to the input)
    let speech_text = if options.summarize {
        match client.summarize(input_text).await {
            Ok(summary) => {
                eprintln!(
                    "Summarized {} chars of input to {} chars",
                    input_text.len(),
                    summary.len()
                );
                summary
            }
            Err(err) => {
                eprintln!("Summarization failed ({}), speaking input as-is", err);
                input_text.to_string()
            }
        }
    } else {
        input_text.to_string()
    };

    // Step 2: Speech synthesis
    eprintln!(
        "Synthesizing speech for {} chars with voice \"{}\"...",
        speech_text.len(),
        options.voice
    );
    let chunks = client.synthesize(&speech_text, &options.voice).await?;

    // Step 3: Collect and package the audio
    let mut collector = AudioCollector::new();
    for chunk in chunks {
        collector.push(chunk);
    }

    if collector.is_empty() {
        return Err(TtsError::no_audio());
    }

    let raw_len = collector.len();
    match collector.mime_type() {
        Some(mime) if mime.eq_ignore_ascii_case("audio/wav") => {
            eprintln!("Upstream returned WAV directly, passing {} bytes through", raw_len);
        }
        mime => {
            let format = PcmFormat::parse(mime.unwrap_or(FALLBACK_MIME_TYPE));
            eprintln!(
                "Wrapping {} PCM bytes ({:.2}s at {} Hz, {}-bit)",
                raw_len,
                pcm_duration(&format, raw_len),
                format.sample_rate,
                format.bits_per_sample
            );
        }
    }

    Ok(collector.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_summarize_with_default_voice() {
        let options = PipelineOptions::default();
        assert!(options.summarize);
        assert_eq!(options.voice, "Zephyr");
    }
}
