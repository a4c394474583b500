//! Audio fixture probe
//!
//! Measures the reference WAV fixture's duration from its RIFF header,
//! without decoding samples. The value is advisory: every downstream
//! computation works with it absent, so any decoding failure degrades to
//! `None` rather than surfacing an error.

use std::path::Path;

/// WAV header parse failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavError {
    /// File is too small to contain a valid WAV header
    TooSmall,
    /// Missing RIFF header at start of file
    MissingRiff,
    /// Missing WAVE marker in header
    MissingWave,
    /// No fmt chunk found in file
    MissingFmt,
    /// fmt chunk is truncated
    FmtTruncated,
    /// No data chunk found in file
    NoDataChunk,
    /// Header declares a zero sample rate or frame size
    InvalidRate,
}

impl std::fmt::Display for WavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooSmall => write!(f, "WAV file too small"),
            Self::MissingRiff => write!(f, "Invalid WAV: missing RIFF header"),
            Self::MissingWave => write!(f, "Invalid WAV: missing WAVE marker"),
            Self::MissingFmt => write!(f, "Invalid WAV: no fmt chunk found"),
            Self::FmtTruncated => write!(f, "Invalid WAV: fmt chunk truncated"),
            Self::NoDataChunk => write!(f, "Invalid WAV: no data chunk found"),
            Self::InvalidRate => write!(f, "Invalid WAV: zero sample rate or frame size"),
        }
    }
}

impl std::error::Error for WavError {}

/// Header fields needed to compute a WAV file's duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    /// Sample rate in Hz (validated non-zero)
    pub sample_rate: u32,
    /// Channel count as declared by the header
    pub channels: u16,
    /// Bits per sample as declared by the header
    pub bits_per_sample: u16,
    /// Number of sample frames in the data chunk
    pub frame_count: u64,
}

impl WavInfo {
    /// Duration in seconds: `frame_count / sample_rate`
    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count as f64 / f64::from(self.sample_rate)
    }
}

/// Parse RIFF/WAVE header chunks and compute the frame count
///
/// Walks the chunk list for `fmt ` and `data`, tolerating unknown chunks and
/// odd-size padding. The data chunk's payload is never inspected; only its
/// byte length matters. A data chunk that claims more bytes than the file
/// holds is clamped to the bytes actually present.
pub fn parse_wav_info(data: &[u8]) -> Result<WavInfo, WavError> {
    if data.len() < 44 {
        return Err(WavError::TooSmall);
    }
    if &data[0..4] != b"RIFF" {
        return Err(WavError::MissingRiff);
    }
    if &data[8..12] != b"WAVE" {
        return Err(WavError::MissingWave);
    }

    let mut fmt: Option<(u32, u16, u16, u16)> = None;
    let mut data_len: Option<usize> = None;

    let mut pos = 12;
    while pos + 8 <= data.len() {
        let chunk_id = &data[pos..pos + 4];
        let chunk_size =
            u32::from_le_bytes([data[pos + 4], data[pos + 5], data[pos + 6], data[pos + 7]])
                as usize;

        if chunk_id == b"fmt " {
            if chunk_size < 16 || pos + 8 + chunk_size > data.len() {
                return Err(WavError::FmtTruncated);
            }
            let channels = u16::from_le_bytes([data[pos + 10], data[pos + 11]]);
            let sample_rate = u32::from_le_bytes([
                data[pos + 12],
                data[pos + 13],
                data[pos + 14],
                data[pos + 15],
            ]);
            let block_align = u16::from_le_bytes([data[pos + 20], data[pos + 21]]);
            let bits_per_sample = u16::from_le_bytes([data[pos + 22], data[pos + 23]]);
            fmt = Some((sample_rate, channels, bits_per_sample, block_align));
        } else if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = (data_start + chunk_size).min(data.len());
            data_len = Some(data_end - data_start);
        }

        pos += 8 + chunk_size;
        // Chunks are padded to even boundaries (RIFF spec)
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    let (sample_rate, channels, bits_per_sample, block_align) = fmt.ok_or(WavError::MissingFmt)?;
    let data_len = data_len.ok_or(WavError::NoDataChunk)?;

    // Fall back to the computed frame size when the header's block align is zero
    let frame_size = if block_align > 0 {
        u64::from(block_align)
    } else {
        u64::from(channels) * u64::from(bits_per_sample / 8)
    };
    if sample_rate == 0 || frame_size == 0 {
        return Err(WavError::InvalidRate);
    }

    Ok(WavInfo {
        sample_rate,
        channels,
        bits_per_sample,
        frame_count: data_len as u64 / frame_size,
    })
}

/// Probe a WAV file's duration in seconds
///
/// Never raises: absent, unreadable, and undecodable files all yield `None`.
#[must_use]
pub fn wav_duration_seconds(path: &Path) -> Option<f64> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "audio fixture missing or unreadable");
            return None;
        }
    };
    match parse_wav_info(&data) {
        Ok(info) => Some(info.duration_seconds()),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "audio fixture not a parseable WAV");
            None
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Header parsing never panics on arbitrary input
        #[test]
        fn fuzz_wav_parsing(data: Vec<u8>) {
            let _ = parse_wav_info(&data);
        }

        /// Any parse that succeeds reports a finite, non-negative duration
        #[test]
        fn prop_duration_non_negative(data: Vec<u8>) {
            if let Ok(info) = parse_wav_info(&data) {
                let duration = info.duration_seconds();
                prop_assert!(duration.is_finite());
                prop_assert!(duration >= 0.0);
            }
        }
    }
}
