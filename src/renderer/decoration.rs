//! Corner decorations around the marker block.

use super::constants::*;
use super::markup_builder::{Fragment, MarkupBuilder};
use crate::model::Decoration;

/// One hidden-from-assistive-tech image per listed corner. The placement
/// class pins each image to its corner, clear of the marker rows.
pub fn render_decoration(decoration: Option<&Decoration>) -> Fragment {
    let Some(decoration) = decoration else {
        return Fragment::default();
    };

    let mut b = MarkupBuilder::new();
    for corner in &decoration.positions {
        let class = format!("{DECORATION_CLASS} {}", corner.class());
        b.void(
            "img",
            &[
                ("aria-hidden", "true"),
                ("alt", ""),
                ("src", decoration.image.as_str()),
                ("class", class.as_str()),
            ],
        );
    }
    b.build()
}
