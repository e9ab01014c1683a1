//! Error types for the tts-pipe pipeline.
//!
//! Provides an error enum for all pipeline operations including
//! configuration, the two hosted generation calls, and output writing.

use std::fmt;

/// Error codes matching the CLI exit-code contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Neither GEMINI_API_KEY nor GOOGLE_API_KEY is set.
    MissingApiKey,
    /// No input text was provided via flag, environment, or stdin.
    EmptyInput,
    /// The summarization call failed or returned no text.
    SummaryFailed,
    /// The speech synthesis call failed.
    SynthesisFailed,
    /// The synthesis stream completed without returning any audio.
    NoAudio,
    /// Writing the output file failed.
    OutputFailed,
}

impl ErrorCode {
    /// Returns the string code for log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingApiKey => "MISSING_API_KEY",
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::SummaryFailed => "SUMMARY_FAILED",
            ErrorCode::SynthesisFailed => "SYNTHESIS_FAILED",
            ErrorCode::NoAudio => "NO_AUDIO",
            ErrorCode::OutputFailed => "OUTPUT_FAILED",
        }
    }

    /// Returns the process exit code for this error.
    ///
    /// Configuration and input problems exit 2, an empty audio response
    /// exits 3, and generation or output failures exit 4.
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorCode::MissingApiKey | ErrorCode::EmptyInput => 2,
            ErrorCode::NoAudio => 3,
            ErrorCode::SummaryFailed | ErrorCode::SynthesisFailed | ErrorCode::OutputFailed => 4,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for pipeline operations.
#[derive(Debug)]
pub struct TtsError {
    /// The error code category.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional context (URL, file path, etc.).
    pub context: Option<String>,
}

impl TtsError {
    /// Creates a new TtsError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Creates a new TtsError with additional context.
    pub fn with_context(
        code: ErrorCode,
        message: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// No API key found in the environment.
    pub fn missing_api_key() -> Self {
        Self::new(
            ErrorCode::MissingApiKey,
            "GEMINI_API_KEY (or GOOGLE_API_KEY) is not set",
        )
    }

    /// No input text provided.
    pub fn empty_input() -> Self {
        Self::new(ErrorCode::EmptyInput, "No input text provided")
    }

    /// Summarization failed.
    pub fn summary_failed(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::SummaryFailed, reason)
    }

    /// Speech synthesis failed.
    pub fn synthesis_failed(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::SynthesisFailed, reason)
    }

    /// The synthesis stream returned no audio payloads.
    pub fn no_audio() -> Self {
        Self::new(ErrorCode::NoAudio, "No audio returned by TTS model")
    }

    /// Writing the output failed.
    pub fn output_failed(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::OutputFailed, reason)
    }
}

impl fmt::Display for TtsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, " (context: {})", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for TtsError {}

/// Result type alias using TtsError.
pub type Result<T> = std::result::Result<T, TtsError>;
