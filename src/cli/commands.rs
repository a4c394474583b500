//! Pipeline orchestration for the report CLI
//!
//! Fully sequential: probe the fixture, collect both platforms, render the
//! charts, write the artifacts, optionally patch the README. Input reads are
//! tolerant (every missing input has a documented fallback); artifact writes
//! are not (any failed write aborts the run).

use std::fs;
use std::path::Path;

use crate::audio::wav_duration_seconds;
use crate::chart::render_chart;
use crate::error::ReportResult;
use crate::readme::patch_section;
use crate::report::{
    self, ANDROID_CHART_FILE, IOS_CHART_FILE, REPORT_FILE, SNAPSHOT_FILE,
};
use crate::results::collect_platform_entries;

use super::args::Args;

/// Chart title for the iOS platform
const IOS_CHART_TITLE: &str = "iOS Inference Throughput (tokens/sec)";
/// Chart title for the Android platform
const ANDROID_CHART_TITLE: &str = "Android Inference Throughput (tokens/sec)";

/// Run the full report pipeline
///
/// Produces the two chart files, the snapshot, and the markdown report under
/// `--out-dir`, then splices the report into the README when
/// `--update-readme` is set.
pub fn run(args: &Args) -> ReportResult<()> {
    fs::create_dir_all(&args.out_dir)?;

    let audio_duration = wav_duration_seconds(&args.audio);
    tracing::debug!(?audio_duration, audio = %args.audio.display(), "probed fixture");

    let ios_models = args.ios_model_list();
    let android_models = args.android_model_list();
    let ios_entries = collect_platform_entries(&args.ios_dir, &ios_models, audio_duration);
    let android_entries =
        collect_platform_entries(&args.android_dir, &android_models, audio_duration);

    let ios_chart = render_chart(IOS_CHART_TITLE, &ios_entries);
    let android_chart = render_chart(ANDROID_CHART_TITLE, &android_entries);

    let (markdown, snapshot) = report::compose(
        &args.audio,
        audio_duration,
        &args.out_dir,
        ios_entries,
        android_entries,
    );
    // Serialize before the first write so a failure leaves no partial artifact set
    let snapshot_json = serde_json::to_string_pretty(&snapshot)?;

    write_artifact(&args.out_dir.join(IOS_CHART_FILE), &ios_chart)?;
    write_artifact(&args.out_dir.join(ANDROID_CHART_FILE), &android_chart)?;
    write_artifact(&args.out_dir.join(SNAPSHOT_FILE), &snapshot_json)?;
    write_artifact(&args.out_dir.join(REPORT_FILE), &markdown)?;

    if args.update_readme {
        // Absent or unreadable README degrades to an empty document
        let existing = fs::read_to_string(&args.readme).unwrap_or_default();
        fs::write(&args.readme, patch_section(&existing, &markdown))?;
        println!("Updated README: {}", args.readme.display());
    }

    Ok(())
}

fn write_artifact(path: &Path, contents: &str) -> ReportResult<()> {
    fs::write(path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    println!("Wrote: {}", path.display());
    Ok(())
}
