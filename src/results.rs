//! Result loading: one `result.json` per (platform, model) pair
//!
//! The E2E harnesses write `<base>/<model_id>/result.json`. Absent files,
//! unreadable files, and malformed payloads are indistinguishable "missing"
//! outcomes; the loader never raises and never partially recovers a parse.

use std::path::Path;

use serde::Deserialize;

use crate::metrics::{derive_entry, NormalizedEntry};

/// Raw per-model E2E result payload
///
/// Every field is optional: the two platform harnesses emit slightly
/// different shapes and older runs omit fields entirely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawResult {
    /// Model identifier as reported by the harness
    pub model_id: Option<String>,
    /// Inference engine used for the run
    pub engine: Option<String>,
    /// Whether the run passed
    pub pass: Option<bool>,
    /// Failure description
    pub error: Option<String>,
    /// Transcript text produced by the run
    pub transcript: Option<String>,
    /// Wall-clock duration in milliseconds
    pub duration_ms: Option<f64>,
}

/// Load one result payload, or `None` for absent/unreadable/malformed files
#[must_use]
pub fn load_result(path: &Path) -> Option<RawResult> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "result.json missing or unreadable");
            return None;
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(raw) => Some(raw),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "result.json failed to parse");
            None
        }
    }
}

/// Collect one normalized entry per canonical model id, in canonical order
///
/// The returned list always has exactly `models.len()` entries; a missing
/// result degrades its entry, it never shrinks the list.
#[must_use]
pub fn collect_platform_entries(
    base_dir: &Path,
    models: &[String],
    audio_duration_sec: Option<f64>,
) -> Vec<NormalizedEntry> {
    models
        .iter()
        .map(|model_id| {
            let raw = load_result(&base_dir.join(model_id).join("result.json"));
            derive_entry(model_id, raw, audio_duration_sec)
        })
        .collect()
}
