//! Error types.
//!
//! Only two things can fail: loading the catalog and talking to the page.
//! Everything inside a song record degrades to a default instead of failing
//! (see [`crate::model`]).

use std::path::PathBuf;

use thiserror::Error;

/// The catalog could not be loaded. The page logs this and stays empty.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    ///
    /// ```
    /// # use musicalitos::CatalogError;
    /// let err = CatalogError::Io {
    ///     path: "songs.json".into(),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    /// };
    /// assert_eq!(err.to_string(), "Failed to read catalog 'songs.json': no such file");
    /// ```
    #[error("Failed to read catalog '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fetch itself failed (browser side; carries the JS error text).
    #[error("Failed to fetch catalog: {0}")]
    Fetch(String),

    /// The catalog is not valid JSON.
    #[error("Catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog parsed but its top level is not a list of songs.
    #[error("Catalog must be a JSON array of songs, found {0}")]
    NotAnArray(&'static str),
}

/// A UI port or controller refused an operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A required mount point is not on the page.
    #[error("Mount point '#{0}' is missing")]
    MissingMount(String),

    /// A tab index outside the rendered catalog.
    #[error("No tab at index {index} (catalog has {count})")]
    UnknownTab { index: usize, count: usize },

    /// The page backend reported a failure.
    #[error("Page operation failed: {0}")]
    Backend(String),
}
