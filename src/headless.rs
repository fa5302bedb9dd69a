//! In-memory page: implements every UI port without a browser.
//!
//! Used as the test harness and by the CLI, which serialises the populated
//! page into a static HTML document.

use crate::error::UiError;
use crate::page::PageConfig;
use crate::ports::{HelpView, Mount, ScrollOptions, TabView};
use crate::renderer::constants::*;
use crate::renderer::{escape, Fragment, MarkupBuilder, SongButton, SongSection};

#[derive(Debug, Clone)]
struct Tab<T> {
    item: T,
    on: bool,
}

/// A page with the two catalog mount points and the help panels.
#[derive(Debug, Clone)]
pub struct HeadlessPage {
    mounted: bool,
    buttons: Vec<Tab<SongButton>>,
    sections: Vec<Tab<SongSection>>,
    scrolls: Vec<(usize, ScrollOptions)>,
    menu_visible: bool,
    text_visible: bool,
    text: Fragment,
}

impl Default for HeadlessPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self {
            mounted: true,
            buttons: Vec::new(),
            sections: Vec::new(),
            scrolls: Vec::new(),
            menu_visible: false,
            text_visible: false,
            text: Fragment::default(),
        }
    }

    /// A page whose catalog mount points are missing; every append fails.
    pub fn without_mounts() -> Self {
        Self {
            mounted: false,
            ..Self::new()
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &SongButton> {
        self.buttons.iter().map(|t| &t.item)
    }

    pub fn sections(&self) -> impl Iterator<Item = &SongSection> {
        self.sections.iter().map(|t| &t.item)
    }

    /// Indices of buttons carrying the `clicked` class.
    pub fn clicked_buttons(&self) -> Vec<usize> {
        on_indices(&self.buttons)
    }

    /// Indices of sections carrying the `active` class.
    pub fn active_sections(&self) -> Vec<usize> {
        on_indices(&self.sections)
    }

    /// Every scroll request, oldest first.
    pub fn scrolls(&self) -> &[(usize, ScrollOptions)] {
        &self.scrolls
    }

    pub fn help_menu_visible(&self) -> bool {
        self.menu_visible
    }

    pub fn help_text_visible(&self) -> bool {
        self.text_visible
    }

    pub fn help_text(&self) -> &Fragment {
        &self.text
    }

    /// Serialise the page, in its current state, as a complete document.
    pub fn to_document(&self, config: &PageConfig) -> String {
        let strings = config.locale.strings();
        let mut b = MarkupBuilder::new();

        b.open("head", &[])
            .void("meta", &[("charset", "utf-8")])
            .void("meta", &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")])
            .element("title", &[], &config.title)
            .void("link", &[("rel", "stylesheet"), ("href", config.stylesheet.as_str())])
            .close("head");

        b.open("body", &[]).open("header", &[]).element("h1", &[], &config.title);
        b.element("button", &[("id", HELP_TRIGGER_ID), ("type", "button")], "?");
        b.open("div", &[("id", HELP_MENU_ID), ("style", display(self.menu_visible))])
            .element("button", &[("type", "button"), ("onclick", "showExplanation('usage')")], strings.help_menu_usage)
            .element("button", &[("type", "button"), ("onclick", "showExplanation('practice')")], strings.help_menu_practice)
            .close("div");
        b.open("div", &[("id", HELP_TEXT_ID), ("style", display(self.text_visible))])
            .fragment(&self.text)
            .close("div");
        b.close("header");

        b.open("nav", &[("id", BUTTON_MOUNT_ID)]);
        for tab in &self.buttons {
            b.fragment(&tab.item.to_markup(tab.on));
        }
        b.close("nav");

        b.open("main", &[("id", SECTION_MOUNT_ID), ("data-catalog", config.catalog_url.as_str())]);
        for tab in &self.sections {
            b.fragment(&tab.item.to_markup(tab.on));
        }
        b.close("main");

        if let Some(script) = &config.script {
            b.open("script", &[("type", "module"), ("src", script.as_str())]).close("script");
        }
        b.close("body");

        format!(
            "<!DOCTYPE html>\n<html lang=\"{}\">{}</html>\n",
            escape(strings.lang),
            b.build()
        )
    }

    fn tab_mut<T>(tabs: &mut [Tab<T>], index: usize) -> Result<&mut Tab<T>, UiError> {
        let count = tabs.len();
        tabs.get_mut(index).ok_or(UiError::UnknownTab { index, count })
    }
}

fn on_indices<T>(tabs: &[Tab<T>]) -> Vec<usize> {
    tabs.iter()
        .enumerate()
        .filter_map(|(i, t)| t.on.then_some(i))
        .collect()
}

fn display(visible: bool) -> &'static str {
    if visible {
        "display: block"
    } else {
        "display: none"
    }
}

impl Mount<SongButton> for HeadlessPage {
    fn append(&mut self, item: SongButton) -> Result<(), UiError> {
        if !self.mounted {
            return Err(UiError::MissingMount(BUTTON_MOUNT_ID.to_string()));
        }
        self.buttons.push(Tab { item, on: false });
        Ok(())
    }
}

impl Mount<SongSection> for HeadlessPage {
    fn append(&mut self, item: SongSection) -> Result<(), UiError> {
        if !self.mounted {
            return Err(UiError::MissingMount(SECTION_MOUNT_ID.to_string()));
        }
        self.sections.push(Tab { item, on: false });
        Ok(())
    }
}

impl TabView for HeadlessPage {
    fn set_button_clicked(&mut self, index: usize, clicked: bool) -> Result<(), UiError> {
        Self::tab_mut(&mut self.buttons, index)?.on = clicked;
        Ok(())
    }

    fn set_section_active(&mut self, index: usize, active: bool) -> Result<(), UiError> {
        Self::tab_mut(&mut self.sections, index)?.on = active;
        Ok(())
    }

    fn scroll_into_view(&mut self, index: usize, options: ScrollOptions) -> Result<(), UiError> {
        Self::tab_mut(&mut self.sections, index)?;
        self.scrolls.push((index, options));
        Ok(())
    }
}

impl HelpView for HeadlessPage {
    fn menu_visible(&self) -> bool {
        self.menu_visible
    }

    fn set_menu_visible(&mut self, visible: bool) {
        self.menu_visible = visible;
    }

    fn set_text_visible(&mut self, visible: bool) {
        self.text_visible = visible;
    }

    fn set_text(&mut self, content: &Fragment) {
        self.text = content.clone();
    }
}
