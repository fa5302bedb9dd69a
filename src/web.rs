//! Browser binding: the UI ports over real DOM elements.
//!
//! Loaded as a wasm module by the page. On DOM ready it fetches the catalog
//! once, fills the two mount points and wires the tabs and the help menu.
//! A page already rendered by the CLI is only wired, not fetched again.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    console, Document, Element, Event, HtmlElement, Response, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::error::{CatalogError, UiError};
use crate::help;
use crate::locale::Locale;
use crate::model::Catalog;
use crate::page::{populate, PageConfig};
use crate::ports::{HelpView, Mount, ScrollBehavior, ScrollBlock, ScrollOptions, TabView};
use crate::renderer::constants::*;
use crate::renderer::{section_id, Fragment, SongButton, SongSection};
use crate::tabs::TabController;

thread_local! {
    static LOCALE: Cell<Locale> = Cell::new(Locale::En);
}

// ═══════════════════════════════════════════════════════════════════════
// Entry points
// ═══════════════════════════════════════════════════════════════════════

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = document()?;
    if document.ready_state() != "loading" {
        return boot();
    }

    let on_ready = Closure::<dyn FnMut()>::once_into_js(move || {
        if let Err(e) = boot() {
            console::error_1(&e);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

/// Global help entry point, called from the menu's inline handlers.
#[wasm_bindgen(js_name = showExplanation)]
pub fn show_explanation(topic: Option<String>) {
    let Ok(document) = document() else {
        return;
    };
    let Some(mut view) = DomHelp::locate(&document) else {
        return;
    };
    help::show_explanation(&mut view, topic.as_deref(), LOCALE.with(Cell::get));
}

fn boot() -> Result<(), JsValue> {
    let document = document()?;
    let locale = page_locale(&document);
    LOCALE.with(|l| l.set(locale));

    wire_help(&document)?;

    let mut mounts = DomMounts::locate(&document).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let prerendered = mounts.buttons.child_element_count() as usize;
    if prerendered > 0 {
        return wire_tabs(&document, &mounts, TabController::new(prerendered));
    }

    let url = mounts
        .sections
        .get_attribute("data-catalog")
        .unwrap_or_else(|| PageConfig::default().catalog_url);

    wasm_bindgen_futures::spawn_local(async move {
        let fetched = fetch_catalog(&url).await;
        // No tracing subscriber runs in the browser; `populate` logs for native builds.
        if let Err(e) = &fetched {
            console::error_1(&JsValue::from_str(&format!("Error loading songs: {e}")));
        }

        let result = match populate(fetched, &mut mounts, locale) {
            Ok(Some(tabs)) => wire_tabs(&mounts.document, &mounts, tabs),
            Ok(None) => Ok(()),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        };
        if let Err(e) = result {
            console::error_1(&e);
        }
    });
    Ok(())
}

async fn fetch_catalog(url: &str) -> Result<Catalog, CatalogError> {
    let window = web_sys::window().ok_or_else(|| CatalogError::Fetch("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(url)).await.map_err(fetch_err)?;
    let response: Response = response.dyn_into().map_err(fetch_err)?;
    if !response.ok() {
        return Err(CatalogError::Fetch(format!("HTTP {} for '{url}'", response.status())));
    }

    let body = JsFuture::from(response.text().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    let text = body
        .as_string()
        .ok_or_else(|| CatalogError::Fetch("response body is not text".to_string()))?;
    Catalog::from_json(&text)
}

// ═══════════════════════════════════════════════════════════════════════
// Wiring
// ═══════════════════════════════════════════════════════════════════════

struct TabState {
    tabs: TabController,
    view: DomTabs,
}

fn wire_tabs(document: &Document, mounts: &DomMounts, tabs: TabController) -> Result<(), JsValue> {
    let children = mounts.buttons.children();
    let buttons: Vec<Element> = (0..children.length()).filter_map(|i| children.item(i)).collect();
    let sections = (0..tabs.len())
        .map(|i| {
            let id = section_id(i);
            document
                .get_element_by_id(&id)
                .ok_or_else(|| JsValue::from_str(&UiError::MissingMount(id).to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let state = Rc::new(RefCell::new(TabState {
        tabs,
        view: DomTabs {
            buttons: buttons.clone(),
            sections,
        },
    }));

    for (index, button) in buttons.iter().enumerate() {
        let state = Rc::clone(&state);
        let on_click = Closure::wrap(Box::new(move |_event: Event| {
            let mut s = state.borrow_mut();
            let TabState { tabs, view } = &mut *s;
            if let Err(e) = tabs.click(index, view) {
                console::error_1(&JsValue::from_str(&e.to_string()));
            }
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// The help menu needs its trigger, menu and text elements; without them
/// it is simply not wired.
fn wire_help(document: &Document) -> Result<(), JsValue> {
    let Some(trigger) = document.get_element_by_id(HELP_TRIGGER_ID) else {
        return Ok(());
    };
    let Some(mut view) = DomHelp::locate(document).filter(|v| v.menu.is_some()) else {
        return Ok(());
    };

    let on_click = Closure::wrap(Box::new(move |_event: Event| {
        help::toggle(&mut view);
    }) as Box<dyn FnMut(_)>);
    trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// Ports
// ═══════════════════════════════════════════════════════════════════════

struct DomMounts {
    document: Document,
    buttons: Element,
    sections: Element,
}

impl DomMounts {
    fn locate(document: &Document) -> Result<Self, UiError> {
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| UiError::MissingMount(id.to_string()))
        };
        Ok(Self {
            document: document.clone(),
            buttons: find(BUTTON_MOUNT_ID)?,
            sections: find(SECTION_MOUNT_ID)?,
        })
    }
}

impl Mount<SongButton> for DomMounts {
    fn append(&mut self, item: SongButton) -> Result<(), UiError> {
        let button = self.document.create_element("button").map_err(js_err)?;
        button.set_class_name(BUTTON_CLASS);
        button.set_text_content(Some(&item.label));
        button.set_attribute("data-target", &item.target).map_err(js_err)?;
        self.buttons.append_child(&button).map_err(js_err)?;
        Ok(())
    }
}

impl Mount<SongSection> for DomMounts {
    fn append(&mut self, item: SongSection) -> Result<(), UiError> {
        let section = self.document.create_element("section").map_err(js_err)?;
        section.set_class_name(SECTION_CLASS);
        section.set_id(&item.id);
        section.set_inner_html(item.body.as_str());
        self.sections.append_child(&section).map_err(js_err)?;
        Ok(())
    }
}

struct DomTabs {
    buttons: Vec<Element>,
    sections: Vec<Element>,
}

fn toggle_class(elements: &[Element], index: usize, class: &str, on: bool) -> Result<(), UiError> {
    let element = elements.get(index).ok_or(UiError::UnknownTab {
        index,
        count: elements.len(),
    })?;
    let classes = element.class_list();
    if on {
        classes.add_1(class).map_err(js_err)
    } else {
        classes.remove_1(class).map_err(js_err)
    }
}

impl TabView for DomTabs {
    fn set_button_clicked(&mut self, index: usize, clicked: bool) -> Result<(), UiError> {
        toggle_class(&self.buttons, index, BUTTON_ACTIVE_CLASS, clicked)
    }

    fn set_section_active(&mut self, index: usize, active: bool) -> Result<(), UiError> {
        toggle_class(&self.sections, index, SECTION_ACTIVE_CLASS, active)
    }

    fn scroll_into_view(&mut self, index: usize, options: ScrollOptions) -> Result<(), UiError> {
        let section = self.sections.get(index).ok_or(UiError::UnknownTab {
            index,
            count: self.sections.len(),
        })?;

        let dom_options = ScrollIntoViewOptions::new();
        dom_options.set_behavior(match options.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        dom_options.set_block(match options.block {
            ScrollBlock::Start => ScrollLogicalPosition::Start,
        });
        section.scroll_into_view_with_scroll_into_view_options(&dom_options);
        Ok(())
    }
}

/// Help panels. The global entry point only needs the text panel, so the
/// menu may be absent.
struct DomHelp {
    menu: Option<HtmlElement>,
    text: HtmlElement,
}

impl DomHelp {
    fn locate(document: &Document) -> Option<Self> {
        Some(Self {
            menu: html_element(document, HELP_MENU_ID),
            text: html_element(document, HELP_TEXT_ID)?,
        })
    }
}

fn is_displayed(element: &HtmlElement) -> bool {
    element
        .style()
        .get_property_value("display")
        .is_ok_and(|display| display == "block")
}

fn set_displayed(element: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    if let Err(e) = element.style().set_property("display", display) {
        console::error_1(&e);
    }
}

impl HelpView for DomHelp {
    fn menu_visible(&self) -> bool {
        self.menu.as_ref().is_some_and(is_displayed)
    }

    fn set_menu_visible(&mut self, visible: bool) {
        if let Some(menu) = &self.menu {
            set_displayed(menu, visible);
        }
    }

    fn set_text_visible(&mut self, visible: bool) {
        set_displayed(&self.text, visible);
    }

    fn set_text(&mut self, content: &Fragment) {
        self.text.set_inner_html(content.as_str());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// `<html lang="...">`, falling back to English.
fn page_locale(document: &Document) -> Locale {
    document
        .document_element()
        .and_then(|root| root.get_attribute("lang"))
        .and_then(|lang| lang.parse().ok())
        .unwrap_or_default()
}

fn js_err(e: JsValue) -> UiError {
    UiError::Backend(format!("{e:?}"))
}

fn fetch_err(e: JsValue) -> CatalogError {
    CatalogError::Fetch(format!("{e:?}"))
}
