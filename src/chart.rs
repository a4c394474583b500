//! Ranked SVG bar chart rendering
//!
//! Hand-rolled vector output with fixed geometry: no charting dependency, no
//! external stylesheet or font beyond the inline system stack. Rendering is
//! deterministic byte-for-byte given equal inputs.

use std::fmt::Write;

use crate::metrics::NormalizedEntry;

// Canvas geometry (pixels)
const WIDTH: u32 = 1280;
const LEFT: u32 = 320;
const RIGHT: u32 = 180;
const TOP: u32 = 90;
const BAR_HEIGHT: u32 = 24;
const BAR_GAP: u32 = 10;
const TICKS: u32 = 5;

/// Bar color for passing runs
const PASS_COLOR: &str = "#2563eb";
/// Bar color for failing runs that still measured
const FAIL_COLOR: &str = "#9ca3af";

/// Escape text for embedding in SVG markup
///
/// Model identifiers come from result payloads, so every interpolated string
/// is treated as untrusted. Attributes in the output use single quotes;
/// both quote characters are escaped.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a throughput bar chart for one platform's entries
///
/// Only measured entries (`duration_sec > 0` and `tokens_per_second > 0`)
/// become bars, ranked by throughput descending with input order breaking
/// ties. Bar color keys on the `pass` flag. An empty measured set renders a
/// placeholder label and no bars.
#[must_use]
pub fn render_chart(title: &str, entries: &[NormalizedEntry]) -> String {
    let mut measured: Vec<&NormalizedEntry> = entries
        .iter()
        .filter(|e| e.duration_sec > 0.0 && e.tokens_per_second > 0.0)
        .collect();
    measured.sort_by(|a, b| b.tokens_per_second.total_cmp(&a.tokens_per_second));

    let chart_w = f64::from(WIDTH - LEFT - RIGHT);
    let rows = measured.len().max(1) as u32;
    let height = TOP + rows * (BAR_HEIGHT + BAR_GAP) + 80;

    let max_tps = if measured.is_empty() {
        // Pure floor value, keeps the axis division well-defined
        1.0
    } else {
        measured
            .iter()
            .map(|e| e.tokens_per_second)
            .fold(0.0_f64, f64::max)
    };

    let mut svg = String::new();
    let mut line = |s: String| {
        svg.push_str(&s);
        svg.push('\n');
    };

    line(format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{WIDTH}' height='{height}' viewBox='0 0 {WIDTH} {height}'>"
    ));
    line("<style>".to_string());
    line(
        "text { font-family: -apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, sans-serif; }"
            .to_string(),
    );
    line(".title { font-size: 28px; font-weight: 700; fill: #1f2937; }".to_string());
    line(".axis { font-size: 13px; fill: #4b5563; }".to_string());
    line(".label { font-size: 13px; fill: #111827; }".to_string());
    line(".value { font-size: 12px; fill: #111827; font-weight: 600; }".to_string());
    line("</style>".to_string());
    line("<rect x='0' y='0' width='100%' height='100%' fill='#ffffff' />".to_string());
    line(format!(
        "<text x='40' y='48' class='title'>{}</text>",
        escape_text(title)
    ));

    line(format!(
        "<line x1='{LEFT}' y1='{}' x2='{LEFT}' y2='{}' stroke='#d1d5db' />",
        TOP - 12,
        height - 42
    ));
    line(format!(
        "<line x1='{LEFT}' y1='{}' x2='{}' y2='{}' stroke='#d1d5db' />",
        height - 42,
        WIDTH - RIGHT + 12,
        height - 42
    ));

    for i in 0..=TICKS {
        let frac = f64::from(i) / f64::from(TICKS);
        let value = max_tps * frac;
        let x = f64::from(LEFT) + chart_w * frac;
        line(format!(
            "<line x1='{x:.1}' y1='{}' x2='{x:.1}' y2='{}' stroke='#9ca3af' />",
            height - 42,
            height - 36
        ));
        line(format!(
            "<text x='{x:.1}' y='{}' text-anchor='middle' class='axis'>{value:.1}</text>",
            height - 14
        ));
    }

    if measured.is_empty() {
        line(format!(
            "<text x='{LEFT}' y='{}' class='label'>No measured results found.</text>",
            TOP + 20
        ));
    } else {
        for (idx, entry) in measured.iter().enumerate() {
            let y = TOP + idx as u32 * (BAR_HEIGHT + BAR_GAP);
            let bar_w = chart_w * (entry.tokens_per_second / max_tps);
            let color = if entry.pass { PASS_COLOR } else { FAIL_COLOR };
            let value = format!("{:.2} tok/s", entry.tokens_per_second);

            line(format!(
                "<text x='{}' y='{}' text-anchor='end' class='label'>{}</text>",
                LEFT - 14,
                y + BAR_HEIGHT - 6,
                escape_text(&entry.model_id)
            ));
            line(format!(
                "<rect x='{LEFT}' y='{y}' width='{bar_w:.2}' height='{BAR_HEIGHT}' rx='4' fill='{color}' />"
            ));
            line(format!(
                "<text x='{:.2}' y='{}' class='value'>{}</text>",
                f64::from(LEFT) + bar_w + 8.0,
                y + BAR_HEIGHT - 6,
                escape_text(&value)
            ));
        }
    }

    write!(svg, "</svg>").ok();
    svg
}
