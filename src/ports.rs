//! UI ports: the page surface the renderers and controllers talk to.
//!
//! The browser binding implements these over real DOM elements; the
//! [`HeadlessPage`](crate::headless::HeadlessPage) implements them in memory.

use crate::error::UiError;
use crate::renderer::Fragment;

/// A container that rendered items are appended to, in order.
pub trait Mount<T> {
    fn append(&mut self, item: T) -> Result<(), UiError>;
}

/// How a section is brought into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

/// Vertical alignment of the scrolled element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
}

impl ScrollOptions {
    /// Smooth scroll, section top at the top of the viewport.
    pub const SECTION: Self = Self {
        behavior: ScrollBehavior::Smooth,
        block: ScrollBlock::Start,
    };
}

/// Class toggling and scrolling for the rendered button/section pairs,
/// addressed by catalog index.
pub trait TabView {
    fn set_button_clicked(&mut self, index: usize, clicked: bool) -> Result<(), UiError>;
    fn set_section_active(&mut self, index: usize, active: bool) -> Result<(), UiError>;
    fn scroll_into_view(&mut self, index: usize, options: ScrollOptions) -> Result<(), UiError>;
}

/// The help menu panel and its explanation text panel.
pub trait HelpView {
    fn menu_visible(&self) -> bool;
    fn set_menu_visible(&mut self, visible: bool);
    fn set_text_visible(&mut self, visible: bool);
    fn set_text(&mut self, content: &Fragment);
}
