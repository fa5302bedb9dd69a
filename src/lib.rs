//! musicalitos: song catalog renderer for the Musicalitos practice page.
//!
//! Reads the catalog (a JSON array of songs), renders one tab button and one
//! tab section per song, and drives the tab and help-overlay behaviour
//! through small UI port traits. In the browser the ports are DOM elements
//! (see the `web` module, wasm32 only); elsewhere [`HeadlessPage`] plays the
//! page.
//!
//! # Example
//! ```no_run
//! use musicalitos::{populate, read_catalog, HeadlessPage, Locale, PageConfig};
//!
//! let mut page = HeadlessPage::new();
//! let mut tabs = populate(read_catalog("songs.json"), &mut page, Locale::En)?
//!     .expect("catalog loaded");
//! tabs.click(0, &mut page)?;
//! println!("{}", page.to_document(&PageConfig::default()));
//! # Ok::<(), musicalitos::UiError>(())
//! ```

pub mod error;
pub mod headless;
pub mod help;
pub mod locale;
pub mod model;
pub mod page;
pub mod ports;
pub mod renderer;
pub mod tabs;

#[cfg(target_arch = "wasm32")]
pub mod web;

use std::path::Path;

pub use error::{CatalogError, UiError};
pub use headless::HeadlessPage;
pub use help::{show_explanation, Topic};
pub use locale::Locale;
pub use model::*;
pub use page::{populate, PageConfig};
pub use renderer::{render_catalog, render_song, Fragment, SongButton, SongSection};
pub use tabs::TabController;

/// Read and parse a catalog file.
pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Catalog::from_json(&text)
}

/// Render a catalog document straight into a static HTML page.
///
/// A catalog that fails to load yields the empty page, exactly like the
/// browser does; only a page-side failure is an error.
pub fn render_json_to_document(json: &str, config: &PageConfig) -> Result<String, UiError> {
    render_loaded(Catalog::from_json(json), config)
}

/// Read a catalog file and render it into a static HTML page.
pub fn render_file_to_document<P: AsRef<Path>>(path: P, config: &PageConfig) -> Result<String, UiError> {
    render_loaded(read_catalog(path), config)
}

fn render_loaded(fetched: Result<Catalog, CatalogError>, config: &PageConfig) -> Result<String, UiError> {
    let mut page = HeadlessPage::new();
    populate(fetched, &mut page, config.locale)?;
    Ok(page.to_document(config))
}
