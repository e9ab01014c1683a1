//! Audio generation module.
//!
//! Provides streamed chunk collection and the end-to-end pipeline.

pub mod collect;
pub mod pipeline;

// Re-export commonly used items
pub use collect::{AudioChunk, AudioCollector, FALLBACK_MIME_TYPE};
pub use pipeline::{run, PipelineOptions};
