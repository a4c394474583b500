//! Report composition: markdown section and structured snapshot
//!
//! Tables render in canonical model order; the charts rank by throughput.
//! The two orderings are independent on purpose, so a model's row position
//! is stable across runs even as its ranking moves.

use std::path::Path;

use serde::Serialize;

use crate::metrics::NormalizedEntry;

/// File name of the iOS chart artifact
pub const IOS_CHART_FILE: &str = "ios_tokens_per_second.svg";
/// File name of the Android chart artifact
pub const ANDROID_CHART_FILE: &str = "android_tokens_per_second.svg";
/// File name of the combined JSON snapshot artifact
pub const SNAPSHOT_FILE: &str = "inference_results.json";
/// File name of the markdown report artifact
pub const REPORT_FILE: &str = "inference_report.md";

/// Combined machine-readable snapshot of one report run
///
/// The durable artifact: entry order within each platform list equals the
/// canonical model order.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Path of the audio fixture the suites ran against
    pub audio_fixture: String,
    /// Fixture duration in seconds, when the probe could measure it
    pub audio_duration_sec: Option<f64>,
    /// iOS entries in canonical model order
    pub ios: Vec<NormalizedEntry>,
    /// Android entries in canonical model order
    pub android: Vec<NormalizedEntry>,
}

/// Format an optional metric to `digits` decimal places, `n/a` when absent
fn fmt_float(value: Option<f64>, digits: usize) -> String {
    match value {
        Some(v) => format!("{v:.digits$}"),
        None => "n/a".to_string(),
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Render one platform's results table in canonical order
///
/// Unmeasured rows (`duration_sec <= 0`) show an explicit `n/a` for the
/// numeric columns; the pass/fail label is shown either way.
#[must_use]
pub fn platform_table(title: &str, entries: &[NormalizedEntry]) -> String {
    let mut out = String::new();
    push_line(&mut out, &format!("#### {title}"));
    push_line(&mut out, "");
    push_line(
        &mut out,
        "| Model | Engine | Words | Duration (s) | Tok/s | RTF | Pass |",
    );
    push_line(&mut out, "|---|---|---:|---:|---:|---:|---|");
    for entry in entries {
        let pass_label = if entry.pass { "PASS" } else { "FAIL" };
        let engine = if entry.engine.is_empty() {
            "-"
        } else {
            entry.engine.as_str()
        };
        if entry.duration_sec <= 0.0 {
            push_line(
                &mut out,
                &format!(
                    "| `{}` | {engine} | 0 | n/a | n/a | n/a | {pass_label} |",
                    entry.model_id
                ),
            );
            continue;
        }
        push_line(
            &mut out,
            &format!(
                "| `{}` | {engine} | {} | {} | {} | {} | {pass_label} |",
                entry.model_id,
                entry.word_count,
                fmt_float(Some(entry.duration_sec), 2),
                fmt_float(Some(entry.tokens_per_second), 2),
                fmt_float(entry.realtime_factor, 2),
            ),
        );
    }
    out
}

/// Compose the full markdown report section
#[must_use]
pub fn compose_markdown(
    audio_path: &Path,
    audio_duration_sec: Option<f64>,
    out_dir: &Path,
    ios_entries: &[NormalizedEntry],
    android_entries: &[NormalizedEntry],
) -> String {
    let audio_line = match audio_duration_sec {
        Some(duration) if duration > 0.0 => {
            format!("`{}` ({duration:.2}s, 16kHz mono WAV)", audio_path.display())
        }
        _ => format!("`{}` (duration unknown)", audio_path.display()),
    };

    let mut md = String::new();
    push_line(&mut md, "### Inference Token Speed Benchmarks");
    push_line(&mut md, "");
    push_line(
        &mut md,
        "Measured from E2E `result.json` files using a longer English fixture.",
    );
    push_line(&mut md, "");
    push_line(&mut md, &format!("Fixture: {audio_line}"));
    push_line(&mut md, "");
    push_line(&mut md, "#### Evaluation Method");
    push_line(&mut md, "");
    push_line(
        &mut md,
        "- Per-model E2E runs with the same English fixture on each platform.",
    );
    push_line(
        &mut md,
        "- `duration_sec = duration_ms / 1000` from each model `result.json`.",
    );
    push_line(
        &mut md,
        "- `token_count` is computed from transcript words: `[A-Za-z0-9']+`.",
    );
    push_line(&mut md, "- `tok/s = token_count / duration_sec`.");
    push_line(&mut md, "- `RTF = audio_duration_sec / duration_sec`.");
    push_line(&mut md, "");
    push_line(&mut md, "#### iOS Graph");
    push_line(&mut md, "");
    push_line(
        &mut md,
        &format!("![iOS tokens/sec]({}/{IOS_CHART_FILE})", out_dir.display()),
    );
    push_line(&mut md, "");
    push_line(&mut md, &platform_table("iOS Results", ios_entries));
    push_line(&mut md, "#### Android Graph");
    push_line(&mut md, "");
    push_line(
        &mut md,
        &format!(
            "![Android tokens/sec]({}/{ANDROID_CHART_FILE})",
            out_dir.display()
        ),
    );
    push_line(&mut md, "");
    push_line(
        &mut md,
        &platform_table("Android Results", android_entries),
    );
    push_line(&mut md, "#### Reproduce");
    push_line(&mut md, "");
    push_line(&mut md, "1. `rm -rf artifacts/e2e/ios/* artifacts/e2e/android/*`");
    push_line(&mut md, "2. `TARGET_SECONDS=30 scripts/prepare-long-eval-audio.sh`");
    push_line(
        &mut md,
        "3. `EVAL_WAV_PATH=artifacts/benchmarks/long_en_eval.wav scripts/ios-e2e-test.sh`",
    );
    push_line(
        &mut md,
        "4. `INSTRUMENT_TIMEOUT_SEC=300 EVAL_WAV_PATH=artifacts/benchmarks/long_en_eval.wav scripts/android-e2e-test.sh`",
    );
    push_line(
        &mut md,
        "5. `inference-report --audio artifacts/benchmarks/long_en_eval.wav --update-readme`",
    );
    push_line(&mut md, "");
    push_line(
        &mut md,
        "One-command runner: `TARGET_SECONDS=30 scripts/run-inference-benchmarks.sh`",
    );
    md
}

/// Compose the markdown section and the combined snapshot in one pass
///
/// Both artifacts are built from the same entry lists so they can never
/// disagree about what was measured.
#[must_use]
pub fn compose(
    audio_path: &Path,
    audio_duration_sec: Option<f64>,
    out_dir: &Path,
    ios_entries: Vec<NormalizedEntry>,
    android_entries: Vec<NormalizedEntry>,
) -> (String, Snapshot) {
    let markdown = compose_markdown(
        audio_path,
        audio_duration_sec,
        out_dir,
        &ios_entries,
        &android_entries,
    );
    let snapshot = Snapshot {
        audio_fixture: audio_path.display().to_string(),
        audio_duration_sec,
        ios: ios_entries,
        android: android_entries,
    };
    (markdown, snapshot)
}
