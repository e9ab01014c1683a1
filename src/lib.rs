//! tts-pipe: text summarization and speech synthesis pipeline.
//!
//! This library provides the core functionality for tts-pipe, a small
//! pipeline that summarizes input text with a hosted generation model,
//! synthesizes speech from the summary, and packages the streamed raw
//! PCM audio into a WAV file.
//!
//! # Modules
//!
//! - [`audio`] - MIME descriptor parsing and WAV container encoding
//! - [`config`] - Pipeline configuration (API key, models, voice)
//! - [`error`] - Error types and result aliases
//! - [`generation`] - Chunk collection and the end-to-end pipeline
//! - [`models`] - REST client for the hosted generation API
//!
//! # Example
//!
//! ```rust,ignore
//! use tts_pipe::audio::{encode_wav, PcmFormat};
//!
//! // Parse the raw PCM descriptor reported by the API
//! let format = PcmFormat::parse("audio/L16;rate=24000");
//! assert_eq!(format.sample_rate, 24_000);
//!
//! // Wrap raw PCM bytes in a WAV container
//! let wav = encode_wav(&pcm_bytes, "audio/L16;rate=24000");
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod generation;
pub mod models;

// Re-export commonly used types at crate root for convenience
pub use audio::{encode_wav, PcmFormat};
pub use config::TtsConfig;
pub use error::{ErrorCode, Result, TtsError};
pub use generation::{AudioChunk, AudioCollector, PipelineOptions};
pub use models::GeminiClient;
