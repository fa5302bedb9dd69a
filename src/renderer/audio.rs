//! Audio players, one per instrument.

use super::constants::*;
use super::markup_builder::{Fragment, MarkupBuilder};
use crate::locale::Locale;
use crate::model::AudioTrack;

/// Render one labeled player per track, in catalog order. `None` renders
/// the "no audio" placeholder and nothing else.
pub fn render_audio(audio: Option<&[AudioTrack]>, locale: Locale) -> Fragment {
    let strings = locale.strings();
    let Some(tracks) = audio else {
        let mut b = MarkupBuilder::new();
        b.element("p", &[("class", AUDIO_EMPTY_CLASS)], strings.no_audio);
        return b.build();
    };

    tracks
        .iter()
        .map(|track| {
            let mut b = MarkupBuilder::new();
            b.open("div", &[("class", AUDIO_ITEM_CLASS)])
                .element("strong", &[], &format!("{}:", track.instrument.label(locale)))
                .void("br", &[])
                .open("audio", &[("controls", "controls"), ("preload", "none")])
                .void("source", &[("src", track.source.as_str()), ("type", AUDIO_MIME)])
                .text(strings.audio_unsupported)
                .close("audio")
                .close("div");
            b.build()
        })
        .collect()
}
