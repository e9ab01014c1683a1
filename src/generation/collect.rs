//! Inline audio chunk collection.
//!
//! The generation API streams audio as a sequence of inline-data parts,
//! each tagged with a MIME type. Payloads are concatenated in arrival
//! order; the first chunk that carries data fixes the MIME type for the
//! whole stream.

use crate::audio::encode_wav;

/// Raw PCM descriptor assumed when no MIME type was reported at all.
pub const FALLBACK_MIME_TYPE: &str = "audio/L16;rate=24000";

/// One inline audio payload from a streamed response chunk.
#[derive(Debug, Clone)]
pub struct AudioChunk {
    /// MIME type reported for this chunk, if any.
    pub mime_type: Option<String>,
    /// Raw payload bytes, already base64-decoded.
    pub data: Vec<u8>,
}

impl AudioChunk {
    /// Creates a new AudioChunk.
    pub fn new(mime_type: Option<String>, data: Vec<u8>) -> Self {
        Self { mime_type, data }
    }
}

/// Accumulates streamed audio chunks into a single payload.
#[derive(Debug, Default)]
pub struct AudioCollector {
    data: Vec<u8>,
    mime_type: Option<String>,
}

impl AudioCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one chunk.
    ///
    /// Chunks with an empty payload are skipped. The first chunk that
    /// carries data fixes the stream's MIME type; a missing or empty type
    /// on that chunk means the upstream already produced `audio/wav`.
    pub fn push(&mut self, chunk: AudioChunk) {
        if chunk.data.is_empty() {
            return;
        }
        if self.mime_type.is_none() {
            self.mime_type = Some(
                chunk
                    .mime_type
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "audio/wav".to_string()),
            );
        }
        self.data.extend_from_slice(&chunk.data);
    }

    /// Returns true if no payload bytes have been collected.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of payload bytes collected so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the MIME type fixed for this stream, if any chunk carried data.
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Produces the final audio bytes.
    ///
    /// When the stream reported `audio/wav` (ASCII case-insensitive) the
    /// concatenated payload is returned unmodified; otherwise it is wrapped
    /// in a WAV container using the reported raw PCM descriptor.
    pub fn finish(self) -> Vec<u8> {
        let mime = self
            .mime_type
            .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string());
        if mime.eq_ignore_ascii_case("audio/wav") {
            return self.data;
        }
        encode_wav(&self.data, &mime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::HEADER_SIZE;

    #[test]
    fn concatenates_in_arrival_order() {
        let mut collector = AudioCollector::new();
        collector.push(AudioChunk::new(
            Some("audio/L16;rate=24000".into()),
            vec![1, 2],
        ));
        collector.push(AudioChunk::new(None, vec![3, 4]));

        let wav = collector.finish();
        assert_eq!(&wav[HEADER_SIZE..], &[1, 2, 3, 4]);
    }

    #[test]
    fn first_data_chunk_fixes_mime_type() {
        let mut collector = AudioCollector::new();
        collector.push(AudioChunk::new(Some("audio/L24;rate=48000".into()), vec![0; 3]));
        collector.push(AudioChunk::new(Some("audio/L16;rate=8000".into()), vec![0; 3]));

        assert_eq!(collector.mime_type(), Some("audio/L24;rate=48000"));
        let wav = collector.finish();
        // Sample rate at offset 24 comes from the first chunk's descriptor.
        assert_eq!(
            u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]),
            48_000
        );
    }

    #[test]
    fn empty_payloads_are_skipped() {
        let mut collector = AudioCollector::new();
        collector.push(AudioChunk::new(Some("audio/L8;rate=8000".into()), vec![]));
        collector.push(AudioChunk::new(Some("audio/L16;rate=24000".into()), vec![7]));

        // The empty chunk contributed neither bytes nor a MIME type.
        assert_eq!(collector.len(), 1);
        assert_eq!(collector.mime_type(), Some("audio/L16;rate=24000"));
    }

    #[test]
    fn wav_mime_passes_payload_through() {
        let payload = b"RIFF fake wav bytes".to_vec();
        let mut collector = AudioCollector::new();
        collector.push(AudioChunk::new(Some("audio/wav".into()), payload.clone()));

        assert_eq!(collector.finish(), payload);
    }

    #[test]
    fn wav_mime_match_is_case_insensitive() {
        let payload = vec![9, 9, 9];
        let mut collector = AudioCollector::new();
        collector.push(AudioChunk::new(Some("Audio/WAV".into()), payload.clone()));

        assert_eq!(collector.finish(), payload);
    }

    #[test]
    fn missing_mime_type_means_passthrough() {
        // An untagged first chunk is assumed to already be a complete
        // WAV file.
        let payload = vec![1, 2, 3];
        let mut collector = AudioCollector::new();
        collector.push(AudioChunk::new(None, payload.clone()));

        assert_eq!(collector.mime_type(), Some("audio/wav"));
        assert_eq!(collector.finish(), payload);
    }

    #[test]
    fn raw_pcm_gets_wrapped() {
        let mut collector = AudioCollector::new();
        collector.push(AudioChunk::new(
            Some("audio/L16;rate=24000".into()),
            vec![0; 10],
        ));

        let wav = collector.finish();
        assert_eq!(wav.len(), HEADER_SIZE + 10);
        assert_eq!(&wav[0..4], b"RIFF");
    }

    #[test]
    fn empty_collector_reports_empty() {
        let collector = AudioCollector::new();
        assert!(collector.is_empty());
        assert_eq!(collector.mime_type(), None);
    }
}
