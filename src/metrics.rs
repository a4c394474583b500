//! Metrics derivation: raw E2E payloads to normalized per-model entries
//!
//! One entry exists per model in the platform's canonical list, in that
//! list's order. Missing input data degrades an entry, it never shrinks the
//! list. `duration_sec == 0` is the single authoritative "unmeasured" signal
//! for every downstream consumer.

use serde::Serialize;

use crate::results::RawResult;

/// Error string recorded when a model's `result.json` is absent
pub const MISSING_RESULT_ERROR: &str = "missing result.json";

/// One model's normalized benchmark measurement
///
/// Immutable once derived; read by the chart renderer and the report
/// composer, and persisted only inside the combined snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedEntry {
    /// Displayed identifier: the payload's value when present and non-empty,
    /// else the requested canonical id
    pub model_id: String,
    /// Inference engine name, empty when unknown
    pub engine: String,
    /// Whether the E2E run passed
    pub pass: bool,
    /// Failure description reported by the harness, if any
    pub error: Option<String>,
    /// Transcript text produced by the run
    pub transcript: String,
    /// Word-token count derived from the transcript
    pub word_count: usize,
    /// Raw wall-clock measurement in milliseconds, 0 when absent
    pub duration_ms: f64,
    /// Wall-clock duration in seconds; 0 means no usable measurement
    pub duration_sec: f64,
    /// Transcript words per second of processing
    ///
    /// "Tokens" is a legacy field name kept for downstream consumers of the
    /// snapshot schema; the unit is words, not subword tokens.
    pub tokens_per_second: f64,
    /// Audio duration over processing duration; `None` when either is unknown
    pub realtime_factor: Option<f64>,
}

/// Count word tokens in a transcript
///
/// A token is a maximal run of ASCII letters, digits, and apostrophes, so
/// `It's` and `o'clock` count once each and punctuation-only spans count
/// not at all.
#[must_use]
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for byte in text.bytes() {
        let is_word = byte.is_ascii_alphanumeric() || byte == b'\'';
        if is_word && !in_word {
            count += 1;
        }
        in_word = is_word;
    }
    count
}

/// Derive a normalized entry from a raw payload, or from its absence
///
/// An absent payload yields the canonical empty entry with
/// [`MISSING_RESULT_ERROR`]. The displayed `model_id` prefers the payload's
/// non-empty value; lookup and ordering always key on the requested id.
#[must_use]
pub fn derive_entry(
    model_id: &str,
    raw: Option<RawResult>,
    audio_duration_sec: Option<f64>,
) -> NormalizedEntry {
    let Some(raw) = raw else {
        return NormalizedEntry {
            model_id: model_id.to_string(),
            engine: String::new(),
            pass: false,
            error: Some(MISSING_RESULT_ERROR.to_string()),
            transcript: String::new(),
            word_count: 0,
            duration_ms: 0.0,
            duration_sec: 0.0,
            tokens_per_second: 0.0,
            realtime_factor: None,
        };
    };

    let transcript = raw.transcript.unwrap_or_default();
    let duration_ms = raw.duration_ms.unwrap_or(0.0);
    let duration_sec = if duration_ms > 0.0 {
        duration_ms / 1000.0
    } else {
        0.0
    };
    let word_count = count_words(&transcript);
    let tokens_per_second = if duration_sec > 0.0 {
        word_count as f64 / duration_sec
    } else {
        0.0
    };
    let realtime_factor = match audio_duration_sec {
        Some(audio) if audio > 0.0 && duration_sec > 0.0 => Some(audio / duration_sec),
        _ => None,
    };

    NormalizedEntry {
        model_id: match raw.model_id {
            Some(id) if !id.is_empty() => id,
            _ => model_id.to_string(),
        },
        engine: raw.engine.unwrap_or_default(),
        pass: raw.pass.unwrap_or(false),
        error: raw.error,
        transcript,
        word_count,
        duration_ms,
        duration_sec,
        tokens_per_second,
        realtime_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(transcript: &str, duration_ms: f64) -> RawResult {
        RawResult {
            model_id: None,
            engine: Some("fluid".to_string()),
            pass: Some(true),
            error: None,
            transcript: Some(transcript.to_string()),
            duration_ms: Some(duration_ms),
        }
    }

    // -------------------------------------------------------------------------
    // count_words tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_count_words_mixed_punctuation() {
        // Hello, world, It's, 2, o'clock
        assert_eq!(count_words("Hello, world! It's 2 o'clock."), 5);
    }

    #[test]
    fn test_count_words_empty_and_punctuation_only() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("... --- !!!"), 0);
    }

    #[test]
    fn test_count_words_whitespace_runs() {
        assert_eq!(count_words("one\n\ttwo   three"), 3);
    }

    #[test]
    fn test_count_words_non_ascii_excluded() {
        // Non-ASCII letters are separators for this tokenizer, so the accented
        // word splits at the accent
        assert_eq!(count_words("caf\u{e9} au lait"), 3);
    }

    // -------------------------------------------------------------------------
    // derive_entry tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_missing_payload_yields_empty_entry() {
        let entry = derive_entry("whisper-tiny", None, Some(30.0));
        assert_eq!(entry.model_id, "whisper-tiny");
        assert_eq!(entry.engine, "");
        assert!(!entry.pass);
        assert_eq!(entry.error.as_deref(), Some(MISSING_RESULT_ERROR));
        assert_eq!(entry.word_count, 0);
        assert_eq!(entry.duration_sec, 0.0);
        assert_eq!(entry.tokens_per_second, 0.0);
        assert_eq!(entry.realtime_factor, None);
    }

    #[test]
    fn test_tokens_per_second_exact() {
        let entry = derive_entry(
            "whisper-tiny",
            Some(raw("one two three four five six seven eight", 4000.0)),
            None,
        );
        assert_eq!(entry.word_count, 8);
        assert_eq!(entry.duration_sec, 4.0);
        assert_eq!(entry.tokens_per_second, 2.0);
    }

    #[test]
    fn test_realtime_factor_cases() {
        let measured = derive_entry("m", Some(raw("hello", 5000.0)), Some(10.0));
        assert_eq!(measured.realtime_factor, Some(2.0));

        let no_audio = derive_entry("m", Some(raw("hello", 5000.0)), None);
        assert_eq!(no_audio.realtime_factor, None);

        let zero_audio = derive_entry("m", Some(raw("hello", 5000.0)), Some(0.0));
        assert_eq!(zero_audio.realtime_factor, None);

        let unmeasured = derive_entry("m", Some(raw("hello", 0.0)), Some(10.0));
        assert_eq!(unmeasured.realtime_factor, None);
    }

    #[test]
    fn test_non_positive_duration_is_unmeasured() {
        let entry = derive_entry("m", Some(raw("some words here", -250.0)), Some(10.0));
        assert_eq!(entry.duration_sec, 0.0);
        assert_eq!(entry.tokens_per_second, 0.0);
        assert_eq!(entry.realtime_factor, None);
        // The raw measurement is preserved as reported
        assert_eq!(entry.duration_ms, -250.0);
    }

    #[test]
    fn test_payload_model_id_preferred_for_display() {
        let mut payload = raw("hi", 1000.0);
        payload.model_id = Some("whisper-tiny-int8".to_string());
        let entry = derive_entry("whisper-tiny", Some(payload), None);
        assert_eq!(entry.model_id, "whisper-tiny-int8");
    }

    #[test]
    fn test_empty_payload_model_id_falls_back() {
        let mut payload = raw("hi", 1000.0);
        payload.model_id = Some(String::new());
        let entry = derive_entry("whisper-tiny", Some(payload), None);
        assert_eq!(entry.model_id, "whisper-tiny");
    }

    #[test]
    fn test_serialized_field_names() {
        let entry = derive_entry("m", None, None);
        let json = serde_json::to_string(&entry).expect("serialize");
        assert!(json.contains("\"tokens_per_second\":0.0"));
        assert!(json.contains("\"realtime_factor\":null"));
        assert!(json.contains("\"error\":\"missing result.json\""));
    }
}
