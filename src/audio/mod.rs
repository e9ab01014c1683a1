//! Audio output module.
//!
//! Provides MIME descriptor parsing and WAV container encoding for the
//! raw PCM payloads returned by the generation API.

pub mod mime;
pub mod wav;

// Re-export commonly used items
pub use mime::{PcmFormat, DEFAULT_BITS_PER_SAMPLE, DEFAULT_SAMPLE_RATE};
pub use wav::{encode_wav, pcm_duration, write_wav, CHANNELS, HEADER_SIZE};
