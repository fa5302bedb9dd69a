//! Page bootstrap: take the fetched catalog, render it, activate the tabs.

use tracing::{error, info};

use crate::error::{CatalogError, UiError};
use crate::locale::Locale;
use crate::model::Catalog;
use crate::ports::Mount;
use crate::renderer::{render_catalog, SongButton, SongSection};
use crate::tabs::TabController;

/// Page-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub locale: Locale,
    /// Document title and page heading
    pub title: String,
    /// Where the browser fetches the catalog from
    pub catalog_url: String,
    pub stylesheet: String,
    /// Module script loading the browser binding, if the page should be
    /// interactive
    pub script: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            title: "Musicalitos".to_string(),
            catalog_url: "songs.json".to_string(),
            stylesheet: "style.css".to_string(),
            script: None,
        }
    }
}

/// Fill the page from the outcome of the catalog fetch.
///
/// A failed load is logged and leaves the page empty: `Ok(None)`, no tabs.
/// A page that cannot take the rendered songs is an `Err`, not recovered.
pub fn populate<M>(
    fetched: Result<Catalog, CatalogError>,
    mounts: &mut M,
    locale: Locale,
) -> Result<Option<TabController>, UiError>
where
    M: Mount<SongButton> + Mount<SongSection> + ?Sized,
{
    let catalog = match fetched {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "failed to load songs");
            return Ok(None);
        }
    };

    info!(songs = catalog.len(), "catalog loaded");
    let count = render_catalog(&catalog, mounts, locale)?;
    Ok(Some(TabController::new(count)))
}
