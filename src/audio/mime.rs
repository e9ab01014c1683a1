//! MIME parameter parsing for raw PCM descriptors.
//!
//! The generation API reports raw audio with descriptors like
//! `audio/L16;rate=24000`. Parsing is best-effort: unparseable parameters
//! keep their defaults and parsing itself never fails.

use super::wav::CHANNELS;

/// Default bits per sample when the descriptor does not say otherwise.
pub const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 24_000;

/// PCM encoding parameters extracted from an audio MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    /// Bits per sample (e.g. 16 for `audio/L16`).
    pub bits_per_sample: u16,
    /// Sample rate in Hz (e.g. 24000 for `rate=24000`).
    pub sample_rate: u32,
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self {
            bits_per_sample: DEFAULT_BITS_PER_SAMPLE,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl PcmFormat {
    /// Parses a semicolon-delimited MIME descriptor.
    ///
    /// Recognized segments are a case-insensitive `rate=<hz>` parameter and
    /// a case-sensitive `audio/L<bits>` token. A segment that fails to parse
    /// leaves the current value untouched; when a parameter appears more than
    /// once the last valid occurrence wins.
    pub fn parse(descriptor: &str) -> Self {
        let mut format = Self::default();

        for segment in descriptor.split(';') {
            let segment = segment.trim();
            if let Some(value) = strip_prefix_ignore_ascii_case(segment, "rate=") {
                if let Ok(rate) = value.trim().parse::<u32>() {
                    format.sample_rate = rate;
                }
            } else if let Some(value) = segment.strip_prefix("audio/L") {
                if let Ok(bits) = value.trim().parse::<u16>() {
                    format.bits_per_sample = bits;
                }
            }
        }

        format
    }

    /// Calculates bytes per sample (truncating for bit depths that are not
    /// a multiple of 8).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub(crate) fn block_align(&self) -> u16 {
        CHANNELS * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// ASCII case-insensitive version of `str::strip_prefix`.
fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bits_and_rate() {
        let format = PcmFormat::parse("audio/L24;rate=48000");
        assert_eq!(format.bits_per_sample, 24);
        assert_eq!(format.sample_rate, 48_000);
    }

    #[test]
    fn missing_rate_keeps_default() {
        let format = PcmFormat::parse("audio/L16");
        assert_eq!(format.bits_per_sample, 16);
        assert_eq!(format.sample_rate, 24_000);
    }

    #[test]
    fn garbage_yields_all_defaults() {
        let format = PcmFormat::parse("garbage;rate=notanumber");
        assert_eq!(format, PcmFormat::default());
    }

    #[test]
    fn rate_prefix_is_case_insensitive() {
        let format = PcmFormat::parse("audio/L16;RATE=8000");
        assert_eq!(format.sample_rate, 8_000);
    }

    #[test]
    fn bits_prefix_is_case_sensitive() {
        // `AUDIO/L24` does not match, so the 16-bit default is kept.
        let format = PcmFormat::parse("AUDIO/L24;rate=8000");
        assert_eq!(format.bits_per_sample, 16);
        assert_eq!(format.sample_rate, 8_000);
    }

    #[test]
    fn segments_are_trimmed() {
        let format = PcmFormat::parse(" audio/L8 ; rate=16000 ");
        assert_eq!(format.bits_per_sample, 8);
        assert_eq!(format.sample_rate, 16_000);
    }

    #[test]
    fn last_valid_occurrence_wins() {
        let format = PcmFormat::parse("audio/L8;rate=8000;rate=44100;audio/L24");
        assert_eq!(format.bits_per_sample, 24);
        assert_eq!(format.sample_rate, 44_100);
    }

    #[test]
    fn invalid_later_occurrence_keeps_earlier_value() {
        let format = PcmFormat::parse("rate=8000;rate=oops");
        assert_eq!(format.sample_rate, 8_000);
    }

    #[test]
    fn empty_descriptor_yields_defaults() {
        assert_eq!(PcmFormat::parse(""), PcmFormat::default());
    }

    #[test]
    fn derived_fields_for_16_bit_mono() {
        let format = PcmFormat::parse("audio/L16;rate=8000");
        assert_eq!(format.bytes_per_sample(), 2);
        assert_eq!(format.block_align(), 2);
        assert_eq!(format.byte_rate(), 16_000);
    }

    #[test]
    fn odd_bit_depth_truncates_bytes_per_sample() {
        let format = PcmFormat::parse("audio/L12;rate=24000");
        assert_eq!(format.bits_per_sample, 12);
        assert_eq!(format.bytes_per_sample(), 1);
        assert_eq!(format.block_align(), 1);
        assert_eq!(format.byte_rate(), 24_000);
    }
}
