//! # inference-report
//!
//! Cross-platform inference throughput report builder.
//!
//! Aggregates per-model `result.json` measurements produced by the iOS and
//! Android end-to-end benchmark suites, derives throughput and real-time
//! factor metrics, renders ranked SVG bar charts, and composes a markdown
//! summary plus a combined JSON snapshot. The summary can be spliced into a
//! README between sentinel markers, idempotently.
//!
//! ## Pipeline
//!
//! ```text
//! audio probe ──┐
//! result loader ┴─> metrics deriver ─> chart renderer   (svg per platform)
//!                                   └> report composer  (snapshot + markdown)
//!                                       └> document patcher (optional)
//! ```
//!
//! Reads are tolerant: a missing result file, an unreadable fixture, or an
//! absent README all degrade to documented defaults. Writes are strict: a
//! failed artifact write aborts the run.

#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

pub mod audio;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod readme;
pub mod report;
pub mod results;

pub use error::{ReportError, ReportResult};
pub use metrics::NormalizedEntry;
pub use report::Snapshot;
pub use results::RawResult;
