//! Fixed UI wording, per language.

use std::fmt;
use std::str::FromStr;

/// Language of the page chrome. Catalog content is shown as written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// Every fixed string the renderers and the help overlay print.
///
/// The help texts are markup (they carry `<strong>` and `<br/>`); everything
/// else is plain text and gets escaped on output.
#[derive(Debug)]
pub struct UiStrings {
    pub lang: &'static str,
    pub artist_label: &'static str,
    pub guide_link: &'static str,
    pub audio_heading: &'static str,
    pub no_audio: &'static str,
    pub audio_unsupported: &'static str,
    pub xylophone: &'static str,
    pub piano: &'static str,
    pub flute: &'static str,
    pub ukulele: &'static str,
    pub help_menu_usage: &'static str,
    pub help_menu_practice: &'static str,
    pub usage_help: &'static str,
    pub practice_help: &'static str,
}

static EN: UiStrings = UiStrings {
    lang: "en",
    artist_label: "Artist:",
    guide_link: "📘 View guide",
    audio_heading: "🎧 Listen by instrument:",
    no_audio: "No audio available",
    audio_unsupported: "Your browser does not support the audio element.",
    xylophone: "Xylophone",
    piano: "Piano",
    flute: "Flute",
    ukulele: "Ukulele",
    help_menu_usage: "How do I use this page?",
    help_menu_practice: "How do I practice?",
    usage_help: "📖 <strong>How do I use this page?</strong><br/>\
        Pick a song with the buttons. You will see its guide, the audio for each instrument \
        and the reading with colored dots.",
    practice_help: "🎶 <strong>How do I practice?</strong><br/>\
        1) Listen to the instrument you like best.<br/>\
        2) Follow the dots with your voice or by clapping.<br/>\
        3) Repeat it part by part and build your own mini routine or game.",
};

static ES: UiStrings = UiStrings {
    lang: "es",
    artist_label: "Artista:",
    guide_link: "📘 Ver guía",
    audio_heading: "🎧 Escucha por instrumento:",
    no_audio: "No hay audios disponibles",
    audio_unsupported: "Tu navegador no soporta el elemento de audio.",
    xylophone: "Xilófono",
    piano: "Piano",
    flute: "Flauta",
    ukulele: "Ukelele",
    help_menu_usage: "¿Cómo usar esta página?",
    help_menu_practice: "¿Cómo practicar?",
    usage_help: "📖 <strong>¿Cómo usar esta página?</strong><br/>\
        Elige una canción con los botones. Verás su guía, los audios por instrumento \
        y la lectura con bolitas de colores.",
    practice_help: "🎶 <strong>¿Cómo practicar?</strong><br/>\
        1) Escucha el instrumento que prefieras.<br/>\
        2) Sigue las bolitas con la voz o palmas.<br/>\
        3) Repite por partes y arma tu mini coreo o juego.",
};

impl Locale {
    pub fn strings(self) -> &'static UiStrings {
        match self {
            Self::En => &EN,
            Self::Es => &ES,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strings().lang)
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the primary subtag matters: "es-MX" is Spanish.
        let primary = s.split('-').next().unwrap_or_default().to_lowercase();
        match primary.as_str() {
            "en" | "english" => Ok(Self::En),
            "es" | "spanish" | "español" => Ok(Self::Es),
            other => Err(format!("unsupported locale '{other}' (expected 'en' or 'es')")),
        }
    }
}
