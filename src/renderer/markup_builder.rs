//! Markup builder: accumulates elements and produces a [`Fragment`].
//!
//! Output is XHTML-compatible: void elements are self-closed and boolean
//! attributes carry their own name as value, so both browsers and XML
//! parsers read it.

use std::fmt;

use super::constants::NBSP;

// ═══════════════════════════════════════════════════════════════════════
// Fragment
// ═══════════════════════════════════════════════════════════════════════

/// A finished piece of markup. Fragments only grow by concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    /// Wrap markup that does not come from the catalog (fixed UI strings).
    pub fn trusted(markup: &'static str) -> Self {
        Self(markup.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        let mut out = Fragment::default();
        out.extend(iter);
        out
    }
}

impl Extend<Fragment> for Fragment {
    fn extend<I: IntoIterator<Item = Fragment>>(&mut self, iter: I) {
        for fragment in iter {
            self.0.push_str(&fragment.0);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// MarkupBuilder
// ═══════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub(crate) struct MarkupBuilder {
    out: String,
}

impl MarkupBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn build(self) -> Fragment {
        Fragment(self.out)
    }

    pub(crate) fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attrs);
        self.out.push('>');
        self
    }

    pub(crate) fn close(&mut self, tag: &str) -> &mut Self {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
        self
    }

    /// A void element such as `<img/>` or `<br/>`.
    pub(crate) fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.start_tag(tag, attrs);
        self.out.push_str("/>");
        self
    }

    /// `<tag attrs>text</tag>` with the text escaped.
    pub(crate) fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        self.open(tag, attrs).text(text).close(tag)
    }

    pub(crate) fn text(&mut self, content: &str) -> &mut Self {
        self.out.push_str(&escape(content));
        self
    }

    /// Escaped text whose spaces cannot break the line.
    pub(crate) fn unbreakable_text(&mut self, content: &str) -> &mut Self {
        self.out.push_str(&escape(content).replace(' ', NBSP));
        self
    }

    pub(crate) fn fragment(&mut self, fragment: &Fragment) -> &mut Self {
        self.out.push_str(fragment.as_str());
        self
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(&escape(value));
            self.out.push('"');
        }
    }
}

/// Escape text for element content and double-quoted attribute values.
pub(crate) fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_text_and_attributes() {
        let mut b = MarkupBuilder::new();
        b.element("a", &[("href", "x?a=1&b=\"2\"")], "<b>");
        assert_eq!(b.build().as_str(), r#"<a href="x?a=1&amp;b=&quot;2&quot;">&lt;b&gt;</a>"#);
    }

    #[test]
    fn void_elements_self_close() {
        let mut b = MarkupBuilder::new();
        b.void("br", &[]).void("img", &[("alt", "")]);
        assert_eq!(b.build().as_str(), r#"<br/><img alt=""/>"#);
    }

    #[test]
    fn unbreakable_text_replaces_every_space() {
        let mut b = MarkupBuilder::new();
        b.unbreakable_text("a b  c & d");
        assert_eq!(b.build().as_str(), "a&#160;b&#160;&#160;c&#160;&amp;&#160;d");
    }

    #[test]
    fn fragments_concatenate_in_order() {
        let joined: Fragment = ["<i/>", "<b/>"].into_iter().map(Fragment::trusted).collect();
        assert_eq!(joined.as_str(), "<i/><b/>");
    }
}
