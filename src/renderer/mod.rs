//! Catalog renderer: turns songs into tab buttons and tab sections.
//!
//! Each renderer is a pure function from model data to a [`Fragment`]; the
//! catalog renderer composes them per song and hands the results to the
//! page's mount points in catalog order.

pub mod constants;
mod markup_builder;
mod audio;
mod decoration;
mod visual;

use tracing::debug;

use crate::error::UiError;
use crate::locale::Locale;
use crate::model::{Catalog, Song};
use crate::ports::Mount;
use constants::*;

pub use audio::render_audio;
pub use decoration::render_decoration;
pub use markup_builder::Fragment;
pub(crate) use markup_builder::{escape, MarkupBuilder};
pub use visual::render_visual;

// ═══════════════════════════════════════════════════════════════════════
// Rendered items
// ═══════════════════════════════════════════════════════════════════════

/// The tab button of one song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongButton {
    /// Position in the catalog
    pub index: usize,
    /// Note glyph + title
    pub label: String,
    /// Id of the section this button opens
    pub target: String,
}

/// The content section of one song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongSection {
    pub index: usize,
    pub id: String,
    /// Everything inside the `<section>` element
    pub body: Fragment,
}

/// Section id for the song at `index`. Ids are positional, so songs with the
/// same title never collide.
pub fn section_id(index: usize) -> String {
    format!("{SECTION_ID_PREFIX}{index}")
}

impl SongButton {
    pub fn to_markup(&self, clicked: bool) -> Fragment {
        let class = if clicked {
            format!("{BUTTON_CLASS} {BUTTON_ACTIVE_CLASS}")
        } else {
            BUTTON_CLASS.to_string()
        };
        let mut b = MarkupBuilder::new();
        b.element(
            "button",
            &[("class", class.as_str()), ("data-target", self.target.as_str())],
            &self.label,
        );
        b.build()
    }
}

impl SongSection {
    pub fn to_markup(&self, active: bool) -> Fragment {
        let class = if active {
            format!("{SECTION_CLASS} {SECTION_ACTIVE_CLASS}")
        } else {
            SECTION_CLASS.to_string()
        };
        let mut b = MarkupBuilder::new();
        b.open("section", &[("class", class.as_str()), ("id", self.id.as_str())])
            .fragment(&self.body)
            .close("section");
        b.build()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render the button and section of the song at `index`.
pub fn render_song(index: usize, song: &Song, locale: Locale) -> (SongButton, SongSection) {
    let id = section_id(index);
    let button = SongButton {
        index,
        label: format!("{NOTE_GLYPH} {}", song.title),
        target: id.clone(),
    };
    let section = SongSection {
        index,
        id,
        body: render_section_body(song, locale),
    };
    (button, section)
}

/// Render the whole catalog into the page's button and section mount
/// points, preserving order. Returns the number of songs rendered.
pub fn render_catalog<M>(catalog: &Catalog, mounts: &mut M, locale: Locale) -> Result<usize, UiError>
where
    M: Mount<SongButton> + Mount<SongSection> + ?Sized,
{
    for (index, song) in catalog.iter().enumerate() {
        let (button, section) = render_song(index, song, locale);
        debug!(index, title = %song.title, "rendered song");
        Mount::<SongButton>::append(mounts, button)?;
        Mount::<SongSection>::append(mounts, section)?;
    }
    Ok(catalog.len())
}

/// Heading, artist, decorated marker block, guide link, audio players.
fn render_section_body(song: &Song, locale: Locale) -> Fragment {
    let strings = locale.strings();
    let mut b = MarkupBuilder::new();

    b.element("h2", &[], &format!("{NOTE_GLYPH} {}", song.title));
    b.open("p", &[])
        .element("strong", &[], strings.artist_label)
        .text(" ")
        .text(&song.artist)
        .close("p");

    b.open("section", &[("class", COLORS_BLOCK_CLASS)])
        .fragment(&render_decoration(song.decoration.as_ref()))
        .element("h2", &[], &song.title)
        .fragment(&render_visual(&song.visual))
        .close("section");

    b.open("ul", &[])
        .open("li", &[])
        .element("a", &[("href", song.guide.as_str()), ("target", "_blank")], strings.guide_link)
        .close("li")
        .close("ul");

    b.open("div", &[("class", AUDIO_BLOCK_CLASS)])
        .element("h3", &[], strings.audio_heading)
        .fragment(&render_audio(song.audio.as_deref(), locale))
        .close("div");

    b.build()
}
