//! Data model for the song catalog.
//!
//! Records are read once per page load and never change afterwards. Every
//! optional field gets its default right here, at deserialization time, so
//! the renderers only ever see complete values.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::CatalogError;
use crate::locale::Locale;

/// The ordered list of songs. Order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub songs: Vec<Song>,
}

/// One catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Song {
    /// Display name
    #[serde(alias = "titulo", deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(alias = "artista", deserialize_with = "lenient::text")]
    pub artist: String,
    /// Link target of the external guide document
    #[serde(alias = "guia", deserialize_with = "lenient::text")]
    pub guide: String,
    /// Marker lines, top to bottom
    #[serde(deserialize_with = "lenient::visual")]
    pub visual: Vec<VisualLine>,
    /// `None` when the record has no usable audio mapping; the page then
    /// shows a placeholder instead of players.
    #[serde(deserialize_with = "lenient::audio")]
    pub audio: Option<Vec<AudioTrack>>,
    #[serde(alias = "decoracion", deserialize_with = "lenient::decoration")]
    pub decoration: Option<Decoration>,
}

/// A row of colored markers with a caption underneath.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualLine {
    /// Color class names, one marker each
    #[serde(alias = "colores", deserialize_with = "lenient::text_list")]
    pub colors: Vec<String>,
    #[serde(alias = "texto", deserialize_with = "lenient::text")]
    pub text: String,
}

/// One audio player: which instrument plays and where the file lives.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioTrack {
    pub instrument: Instrument,
    pub source: String,
}

/// Instrument keys of the audio mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instrument {
    Xylophone,
    Piano,
    Flute,
    Ukulele,
    /// Any other key, displayed as written
    Other(String),
}

/// Ornamental image anchored to one or more corners of the marker block.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub image: String,
    /// Never empty; one image is rendered per entry, duplicates included.
    pub positions: Vec<Corner>,
}

/// Corner a decoration is anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Fields every record is expected to carry, with their alternate spelling.
const REQUIRED_FIELDS: [(&str, &str); 3] = [("title", "titulo"), ("artist", "artista"), ("guide", "guia")];

/// Record keys with a Spanish spelling. The English key wins when both are present.
const SONG_ALIASES: [(&str, &str); 4] = [
    ("title", "titulo"),
    ("artist", "artista"),
    ("guide", "guia"),
    ("decoration", "decoracion"),
];
const LINE_ALIASES: [(&str, &str); 2] = [("colors", "colores"), ("text", "texto")];

impl Catalog {
    /// Parse a catalog document. The top level must be a JSON array; the
    /// records inside it are never rejected.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(text)?;
        let records = match value {
            Value::Array(records) => records,
            other => return Err(CatalogError::NotAnArray(json_kind(&other))),
        };

        let songs = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Song::from_record(index, record))
            .collect();

        Ok(Self { songs })
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Song> {
        self.songs.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Song;
    type IntoIter = std::slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}

impl Song {
    /// Convert one raw record. Missing required fields render as empty text;
    /// a record that is not an object becomes an empty song.
    pub fn from_record(index: usize, mut record: Value) -> Self {
        drop_shadowed_aliases(&mut record, &SONG_ALIASES);
        if let Value::Object(ref map) = record {
            for (field, alias) in REQUIRED_FIELDS {
                if !matches!(map.get(field).or_else(|| map.get(alias)), Some(Value::String(_))) {
                    warn!(index, field, "song record has no usable '{field}', rendering it empty");
                }
            }
        }

        serde_json::from_value(record).unwrap_or_else(|e| {
            warn!(index, error = %e, "song record is unreadable, rendering an empty song");
            Song::default()
        })
    }
}

impl AudioTrack {
    pub fn new(key: &str, source: impl Into<String>) -> Self {
        Self {
            instrument: Instrument::from_key(key),
            source: source.into(),
        }
    }
}

impl Instrument {
    /// Accepts both the English and the Spanish keys.
    pub fn from_key(key: &str) -> Self {
        match key {
            "xylophone" | "xilofono" => Self::Xylophone,
            "piano" => Self::Piano,
            "flute" | "flauta" => Self::Flute,
            "ukulele" | "ukelele" => Self::Ukulele,
            other => Self::Other(other.to_string()),
        }
    }

    /// Human-readable name; unknown keys fall back to the raw key.
    pub fn label(&self, locale: Locale) -> &str {
        let strings = locale.strings();
        match self {
            Self::Xylophone => strings.xylophone,
            Self::Piano => strings.piano,
            Self::Flute => strings.flute,
            Self::Ukulele => strings.ukulele,
            Self::Other(key) => key,
        }
    }
}

impl Corner {
    /// Unknown tags anchor top-right.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "top-left" => Self::TopLeft,
            "top-right" => Self::TopRight,
            "bottom-left" => Self::BottomLeft,
            "bottom-right" => Self::BottomRight,
            _ => Self::TopRight,
        }
    }

    /// Placement class that anchors the image away from the markers.
    pub fn class(self) -> &'static str {
        match self {
            Self::TopLeft => "decoration-top-left",
            Self::TopRight => "decoration-top-right",
            Self::BottomLeft => "decoration-bottom-left",
            Self::BottomRight => "decoration-bottom-right",
        }
    }
}

/// serde rejects a record carrying both spellings of a field, so the
/// Spanish key goes whenever the English one is there.
fn drop_shadowed_aliases(record: &mut Value, aliases: &[(&str, &str)]) {
    if let Value::Object(map) = record {
        for (field, alias) in aliases {
            if map.contains_key(*field) {
                map.remove(*alias);
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Field deserializers that never fail: whatever shape the catalog has,
/// they settle on the documented default.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::{drop_shadowed_aliases, AudioTrack, Corner, Decoration, VisualLine, LINE_ALIASES};

    /// Scalars other than strings keep their JSON spelling.
    fn stringify(value: Value) -> String {
        match value {
            Value::String(s) => s,
            other => other.to_string(),
        }
    }

    pub(super) fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => s,
            _ => String::new(),
        })
    }

    pub(super) fn text_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items.into_iter().map(stringify).collect(),
            _ => Vec::new(),
        })
    }

    pub(super) fn visual<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<VisualLine>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(lines) => lines
                .into_iter()
                .map(|mut line| {
                    drop_shadowed_aliases(&mut line, &LINE_ALIASES);
                    serde_json::from_value(line).unwrap_or_default()
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    pub(super) fn audio<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<AudioTrack>>, D::Error> {
        let tracks = match Value::deserialize(d)? {
            Value::Object(map) => map
                .into_iter()
                .map(|(key, src)| AudioTrack::new(&key, stringify(src)))
                .collect(),
            // Arrays walk like objects keyed by index
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, src)| AudioTrack::new(&i.to_string(), stringify(src)))
                .collect(),
            _ => return Ok(None),
        };
        Ok(Some(tracks))
    }

    pub(super) fn decoration<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Decoration>, D::Error> {
        let Value::Object(mut map) = Value::deserialize(d)? else {
            return Ok(None);
        };

        let image = match map.remove("image").or_else(|| map.remove("img")) {
            Some(Value::String(image)) if !image.is_empty() => image,
            _ => return Ok(None),
        };

        let positions = match map.remove("positions").or_else(|| map.remove("posiciones")) {
            Some(Value::Array(tags)) if !tags.is_empty() => tags
                .iter()
                .map(|tag| tag.as_str().map_or(Corner::TopRight, Corner::from_tag))
                .collect(),
            _ => vec![Corner::TopRight],
        };

        Ok(Some(Decoration { image, positions }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn song(json: &str) -> Song {
        let value: Value = serde_json::from_str(json).unwrap();
        Song::from_record(0, value)
    }

    #[test]
    fn optional_fields_default() {
        let s = song(r#"{"title": "Pin Pon", "artist": "Trad.", "guide": "g.pdf"}"#);
        assert_eq!(s.title, "Pin Pon");
        assert!(s.visual.is_empty());
        assert_eq!(s.audio, None);
        assert_eq!(s.decoration, None);
    }

    #[test]
    fn spanish_field_names_are_accepted() {
        let s = song(
            r#"{"titulo": "Los pollitos", "artista": "Trad.", "guia": "guia.pdf",
                "visual": [{"colores": ["rojo"], "texto": "pío pío"}],
                "audio": {"xilofono": "x.mp3", "flauta": "f.mp3"},
                "decoracion": {"img": "pollito.png", "posiciones": ["bottom-left"]}}"#,
        );
        assert_eq!(s.artist, "Trad.");
        assert_eq!(s.guide, "guia.pdf");
        assert_eq!(s.visual, vec![VisualLine { colors: vec!["rojo".into()], text: "pío pío".into() }]);
        let audio = s.audio.unwrap();
        assert_eq!(audio[0].instrument, Instrument::Xylophone);
        assert_eq!(audio[1].instrument, Instrument::Flute);
        assert_eq!(
            s.decoration,
            Some(Decoration { image: "pollito.png".into(), positions: vec![Corner::BottomLeft] })
        );
    }

    #[test]
    fn both_spellings_of_a_field_keep_the_english_one() {
        let s = song(
            r#"{"title": "Estrellita", "titulo": "Estrellita (es)", "artist": "Trad.", "guide": "g.pdf",
                "visual": [{"colors": ["red"], "colores": ["rojo"], "text": "Es", "texto": "Es (es)"}],
                "audio": {"piano": "p.mp3"},
                "decoration": {"image": "star.png"}, "decoracion": {"img": "estrella.png"}}"#,
        );
        assert_eq!(s.title, "Estrellita");
        assert_eq!(s.artist, "Trad.");
        assert_eq!(s.guide, "g.pdf");
        assert_eq!(s.visual, vec![VisualLine { colors: vec!["red".into()], text: "Es".into() }]);
        assert_eq!(s.audio, Some(vec![AudioTrack::new("piano", "p.mp3")]));
        assert_eq!(s.decoration.map(|d| d.image), Some("star.png".to_string()));
    }

    #[test]
    fn missing_required_fields_render_empty() {
        let s = song(r#"{"artist": 42}"#);
        assert_eq!(s.title, "");
        assert_eq!(s.artist, "");
        assert_eq!(s.guide, "");
    }

    #[test]
    fn audio_keeps_document_order() {
        let s = song(r#"{"audio": {"ukulele": "u.mp3", "piano": "p.mp3", "flute": "f.mp3"}}"#);
        let keys: Vec<_> = s.audio.unwrap().into_iter().map(|t| t.instrument).collect();
        assert_eq!(keys, vec![Instrument::Ukulele, Instrument::Piano, Instrument::Flute]);
    }

    #[test]
    fn audio_that_is_not_a_mapping_is_none() {
        assert_eq!(song(r#"{"audio": null}"#).audio, None);
        assert_eq!(song(r#"{"audio": "piano.mp3"}"#).audio, None);
        assert_eq!(song(r#"{"audio": 3}"#).audio, None);
        assert_eq!(song(r#"{"audio": {}}"#).audio, Some(vec![]));
    }

    #[test]
    fn audio_array_is_keyed_by_index() {
        let audio = song(r#"{"audio": ["a.mp3", "b.mp3"]}"#).audio.unwrap();
        assert_eq!(audio[1], AudioTrack::new("1", "b.mp3"));
        assert_eq!(audio[1].instrument, Instrument::Other("1".into()));
    }

    #[test]
    fn decoration_positions_default_and_fall_back() {
        let d = song(r#"{"decoration": {"image": "x.png", "positions": []}}"#).decoration.unwrap();
        assert_eq!(d.positions, vec![Corner::TopRight]);

        let d = song(r#"{"decoration": {"image": "x.png", "positions": "top-left"}}"#).decoration.unwrap();
        assert_eq!(d.positions, vec![Corner::TopRight]);

        let d = song(r#"{"decoration": {"image": "x.png", "positions": ["middle", 7, "bottom-right"]}}"#)
            .decoration
            .unwrap();
        assert_eq!(d.positions, vec![Corner::TopRight, Corner::TopRight, Corner::BottomRight]);
    }

    #[test]
    fn decoration_without_image_is_none() {
        assert_eq!(song(r#"{"decoration": {"positions": ["top-left"]}}"#).decoration, None);
        assert_eq!(song(r#"{"decoration": {"image": ""}}"#).decoration, None);
        assert_eq!(song(r#"{"decoration": "x.png"}"#).decoration, None);
    }

    #[test]
    fn malformed_visual_lines_degrade() {
        let s = song(r#"{"visual": [{"text": "solo texto"}, {"colors": "red"}, 5, {"colors": [1, "blue"]}]}"#);
        assert_eq!(s.visual.len(), 4);
        assert!(s.visual[0].colors.is_empty());
        assert_eq!(s.visual[0].text, "solo texto");
        assert!(s.visual[1].colors.is_empty());
        assert_eq!(s.visual[2], VisualLine::default());
        assert_eq!(s.visual[3].colors, vec!["1".to_string(), "blue".to_string()]);

        assert!(song(r#"{"visual": {"colors": ["red"]}}"#).visual.is_empty());
    }

    #[test]
    fn non_object_record_is_an_empty_song() {
        assert_eq!(Song::from_record(3, Value::from(12)), Song::default());
    }

    #[test]
    fn catalog_top_level_must_be_an_array() {
        let err = Catalog::from_json(r#"{"songs": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::NotAnArray("an object")));
        assert!(matches!(Catalog::from_json("not json"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn catalog_preserves_order_and_duplicates() {
        let catalog = Catalog::from_json(r#"[{"title": "A"}, {"title": "B"}, {"title": "A"}]"#).unwrap();
        let titles: Vec<_> = catalog.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "A"]);
    }
}
