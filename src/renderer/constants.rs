//! Shared names for the rendered markup (CSS classes, ids, glyphs).

// ── Ids ─────────────────────────────────────────────────────────────
pub const SECTION_ID_PREFIX: &str = "song-";
pub const BUTTON_MOUNT_ID: &str = "song-buttons";
pub const SECTION_MOUNT_ID: &str = "song-sections";
pub const HELP_TRIGGER_ID: &str = "help-trigger";
pub const HELP_MENU_ID: &str = "help-menu";
pub const HELP_TEXT_ID: &str = "help-text";

// ── Tabs ────────────────────────────────────────────────────────────
pub const BUTTON_CLASS: &str = "song-card tab-button";
pub const SECTION_CLASS: &str = "tab-content";
pub const BUTTON_ACTIVE_CLASS: &str = "clicked";
pub const SECTION_ACTIVE_CLASS: &str = "active";

// ── Section body ────────────────────────────────────────────────────
pub(super) const COLORS_BLOCK_CLASS: &str = "song-colors";
pub(super) const MARKER_LINE_CLASS: &str = "line";
pub(super) const MARKER_CLASS: &str = "color";
pub(super) const AUDIO_BLOCK_CLASS: &str = "audio-instruments";
pub(super) const AUDIO_ITEM_CLASS: &str = "audio-item";
pub(super) const AUDIO_EMPTY_CLASS: &str = "audio-empty";
pub(super) const DECORATION_CLASS: &str = "decoration-img";

// ── Glyphs & media ──────────────────────────────────────────────────
pub const NOTE_GLYPH: &str = "🎵";
pub(super) const AUDIO_MIME: &str = "audio/mpeg";
pub(super) const NBSP: &str = "&#160;";
