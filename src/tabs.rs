//! Tab controller: at most one song section is shown at a time.
//!
//! Nothing is active after load. A click deactivates every pair, activates
//! the clicked one and scrolls its section into view; clicking the active
//! tab again repeats exactly that.

use tracing::debug;

use crate::error::UiError;
use crate::ports::{ScrollOptions, TabView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabController {
    count: usize,
    active: Option<usize>,
}

impl TabController {
    /// Controller for `count` rendered button/section pairs.
    pub fn new(count: usize) -> Self {
        Self { count, active: None }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Index of the open tab, if any tab was clicked yet.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Handle a click on button `index`. An index outside the catalog is
    /// rejected before anything on the page changes.
    pub fn click<V: TabView + ?Sized>(&mut self, index: usize, view: &mut V) -> Result<(), UiError> {
        if index >= self.count {
            return Err(UiError::UnknownTab { index, count: self.count });
        }

        for i in 0..self.count {
            view.set_button_clicked(i, false)?;
            view.set_section_active(i, false)?;
        }
        view.set_button_clicked(index, true)?;
        view.set_section_active(index, true)?;
        self.active = Some(index);

        view.scroll_into_view(index, ScrollOptions::SECTION)?;
        debug!(index, "tab activated");
        Ok(())
    }
}
