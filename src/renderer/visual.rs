//! Marker lines: one colored dot per beat, caption underneath.

use super::constants::*;
use super::markup_builder::{Fragment, MarkupBuilder};
use crate::model::VisualLine;

/// Render every line as a marker row followed by its caption.
///
/// A line without colors still emits its (empty) row so captions keep
/// their vertical rhythm.
pub fn render_visual(lines: &[VisualLine]) -> Fragment {
    lines.iter().map(render_line).collect()
}

fn render_line(line: &VisualLine) -> Fragment {
    let mut b = MarkupBuilder::new();
    b.open("div", &[("class", MARKER_LINE_CLASS)]);
    for color in &line.colors {
        let class = format!("{MARKER_CLASS} {color}");
        b.open("span", &[("class", class.as_str())]).close("span");
    }
    b.close("div");

    b.open("p", &[]).unbreakable_text(&line.text).close("p");
    b.build()
}
