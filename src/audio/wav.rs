//! WAV container encoding for raw PCM audio.
//!
//! Emits the canonical 44-byte RIFF/WAVE header followed by the payload
//! bytes unmodified. Output is always mono; the payload is treated as
//! opaque sample bytes and never inspected or converted.

use std::io::{self, Write};

use super::mime::PcmFormat;

/// Number of output channels. The pipeline only ever emits mono audio.
pub const CHANNELS: u16 = 1;

/// Size of the RIFF/WAVE header in bytes.
pub const HEADER_SIZE: usize = 44;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - PCM format parameters
/// * `pcm` - Raw PCM sample bytes
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav<W: Write>(writer: &mut W, format: &PcmFormat, pcm: &[u8]) -> io::Result<()> {
    let data_size = pcm.len() as u32;
    let chunk_size = 36 + data_size; // RIFF size excludes the 8-byte RIFF prefix

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&chunk_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&CHANNELS.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk; odd-length payloads are written without a RIFF pad byte
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm)?;

    Ok(())
}

/// Encodes raw PCM bytes into a WAV container.
///
/// Parses `mime_type` for the bit depth and sample rate (defaults apply for
/// anything missing or malformed) and returns the 44-byte header followed by
/// `pcm` verbatim. This is pure and total: any payload, including an empty
/// one, produces a syntactically valid container.
pub fn encode_wav(pcm: &[u8], mime_type: &str) -> Vec<u8> {
    let format = PcmFormat::parse(mime_type);
    let mut buffer = Vec::with_capacity(HEADER_SIZE + pcm.len());
    write_wav(&mut buffer, &format, pcm).expect("writing to Vec should not fail");
    buffer
}

/// Returns the duration in seconds of a raw PCM payload with the given format.
///
/// Returns 0.0 when the format's byte rate is zero (degenerate bit depths).
pub fn pcm_duration(format: &PcmFormat, pcm_len: usize) -> f32 {
    let byte_rate = format.byte_rate();
    if byte_rate == 0 {
        return 0.0;
    }
    pcm_len as f32 / byte_rate as f32
}
