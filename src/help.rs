//! Help overlay: a trigger that toggles the help menu, and the explanation
//! panel filled on demand with one of the canned texts.

use tracing::debug;

use crate::locale::Locale;
use crate::ports::HelpView;
use crate::renderer::Fragment;

/// Which canned explanation to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// How the page works
    Usage,
    /// How to practice a song
    Practice,
}

impl Topic {
    /// Accepts the English and Spanish tags; anything else is `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "usage" | "uso" => Some(Self::Usage),
            "practice" | "practica" => Some(Self::Practice),
            _ => None,
        }
    }

    pub fn explanation(self, locale: Locale) -> Fragment {
        let strings = locale.strings();
        match self {
            Self::Usage => Fragment::trusted(strings.usage_help),
            Self::Practice => Fragment::trusted(strings.practice_help),
        }
    }
}

/// Click on the trigger icon: hide the menu and the explanation if the menu
/// is shown, otherwise show the menu and leave the explanation as it was.
pub fn toggle<V: HelpView + ?Sized>(view: &mut V) {
    if view.menu_visible() {
        view.set_menu_visible(false);
        view.set_text_visible(false);
    } else {
        view.set_menu_visible(true);
    }
}

/// Show the explanation panel and, for a known topic tag, replace its text.
/// Unknown or missing tags still reveal the panel but keep its content.
pub fn show_explanation<V: HelpView + ?Sized>(view: &mut V, tag: Option<&str>, locale: Locale) -> Option<Topic> {
    view.set_text_visible(true);

    let topic = tag.and_then(Topic::from_tag)?;
    view.set_text(&topic.explanation(locale));
    debug!(?topic, "help explanation shown");
    Some(topic)
}
