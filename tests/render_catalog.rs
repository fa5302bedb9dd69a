//! Rendering tests: render the fixture catalog and inspect the markup
//! structurally.

use musicalitos::{populate, read_catalog, Catalog, HeadlessPage, Locale, SongSection};
use pretty_assertions::assert_eq;
use roxmltree::{Document, Node};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn rendered_page(locale: Locale) -> HeadlessPage {
    let mut page = HeadlessPage::new();
    populate(read_catalog(fixture("songs.json")), &mut page, locale)
        .expect("mounts present")
        .expect("catalog loads");
    page
}

fn section(page: &HeadlessPage, index: usize) -> SongSection {
    page.sections().nth(index).expect("section rendered").clone()
}

/// Fragments are not single-rooted; wrap them so the XML parser accepts them.
fn wrap(html: &str) -> String {
    format!("<root>{html}</root>")
}

fn has_class(node: &Node, class: &str) -> bool {
    node.attribute("class")
        .is_some_and(|classes| classes.split(' ').any(|c| c == class))
}

fn count(doc: &Document, tag: &str) -> usize {
    doc.descendants().filter(|n| n.has_tag_name(tag)).count()
}

#[test]
fn one_button_and_section_per_song_in_order() {
    let page = rendered_page(Locale::En);

    let buttons: Vec<_> = page.buttons().map(|b| (b.label.clone(), b.target.clone())).collect();
    assert_eq!(
        buttons,
        vec![
            ("🎵 Estrellita".to_string(), "song-0".to_string()),
            ("🎵 Los pollitos".to_string(), "song-1".to_string()),
            ("🎵 Estrellita".to_string(), "song-2".to_string()),
        ]
    );

    let ids: Vec<_> = page.sections().map(|s| s.id.clone()).collect();
    assert_eq!(ids, vec!["song-0", "song-1", "song-2"]);
}

#[test]
fn duplicate_titles_get_distinct_sections() {
    let page = rendered_page(Locale::En);
    let first = section(&page, 0);
    let third = section(&page, 2);
    assert_ne!(first.id, third.id);
    assert!(third.body.as_str().contains("Remix"));
}

#[test]
fn markers_are_rendered_per_color_in_order() {
    let page = rendered_page(Locale::En);
    let html = wrap(section(&page, 0).body.as_str());
    let doc = Document::parse(&html).expect("section body is well-formed");

    let lines: Vec<Node> = doc
        .descendants()
        .filter(|n| n.has_tag_name("div") && has_class(n, "line"))
        .collect();
    assert_eq!(lines.len(), 2);

    let colors: Vec<&str> = lines[0]
        .children()
        .filter(|n| n.has_tag_name("span") && has_class(n, "color"))
        .map(|n| n.attribute("class").unwrap().trim_start_matches("color "))
        .collect();
    assert_eq!(colors, vec!["red", "red", "green", "green"]);
}

#[test]
fn captions_never_contain_breakable_spaces() {
    let page = rendered_page(Locale::En);
    let html = wrap(section(&page, 0).body.as_str());
    let doc = Document::parse(&html).unwrap();

    let captions: Vec<String> = doc
        .descendants()
        .filter(|n| n.has_tag_name("p") && n.prev_sibling_element().is_some_and(|p| has_class(&p, "line")))
        .map(|n| n.text().unwrap_or_default().to_string())
        .collect();

    assert_eq!(captions, vec!["Es\u{a0}trel\u{a0}li\u{a0}ta", "dón\u{a0}de\u{a0}\u{a0}es\u{a0}tás"]);
    assert!(captions.iter().all(|c| !c.contains(' ')));
}

#[test]
fn line_without_colors_keeps_an_empty_marker_row() {
    let page = rendered_page(Locale::En);
    let html = wrap(section(&page, 1).body.as_str());
    let doc = Document::parse(&html).unwrap();

    let lines: Vec<Node> = doc
        .descendants()
        .filter(|n| n.has_tag_name("div") && has_class(n, "line"))
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].children().count(), 0);
}

#[test]
fn audio_players_are_labeled_in_catalog_order() {
    let page = rendered_page(Locale::En);
    let html = wrap(section(&page, 0).body.as_str());
    let doc = Document::parse(&html).unwrap();

    let labels: Vec<&str> = doc
        .descendants()
        .filter(|n| n.has_tag_name("div") && has_class(n, "audio-item"))
        .filter_map(|item| item.children().find(|n| n.has_tag_name("strong")))
        .filter_map(|strong| strong.text())
        .collect();
    assert_eq!(labels, vec!["Xylophone:", "Piano:", "triangle:"]);

    let sources: Vec<(&str, &str)> = doc
        .descendants()
        .filter(|n| n.has_tag_name("source"))
        .map(|n| (n.attribute("src").unwrap(), n.attribute("type").unwrap()))
        .collect();
    assert_eq!(sources[2], ("audio/estrellita-triangle.mp3", "audio/mpeg"));

    for audio in doc.descendants().filter(|n| n.has_tag_name("audio")) {
        assert_eq!(audio.attribute("preload"), Some("none"));
        assert!(audio.attribute("controls").is_some());
    }
}

#[test]
fn missing_or_null_audio_renders_only_the_placeholder() {
    let page = rendered_page(Locale::En);
    for index in [1, 2] {
        let html = wrap(section(&page, index).body.as_str());
        let doc = Document::parse(&html).unwrap();

        let placeholders: Vec<_> = doc
            .descendants()
            .filter(|n| n.has_tag_name("p") && has_class(n, "audio-empty"))
            .collect();
        assert_eq!(placeholders.len(), 1, "song {index}");
        assert_eq!(placeholders[0].text(), Some("No audio available"));
        assert_eq!(count(&doc, "audio"), 0, "song {index}");
    }
}

#[test]
fn decorations_follow_their_positions() {
    let page = rendered_page(Locale::En);

    let placements = |index: usize| -> Vec<String> {
        let html = wrap(section(&page, index).body.as_str());
        let doc = Document::parse(&html).unwrap();
        doc.descendants()
            .filter(|n| n.has_tag_name("img") && has_class(n, "decoration-img"))
            .map(|n| {
                assert_eq!(n.attribute("alt"), Some(""));
                assert_eq!(n.attribute("aria-hidden"), Some("true"));
                n.attribute("class").unwrap().to_string()
            })
            .collect()
    };

    assert_eq!(
        placements(0),
        vec!["decoration-img decoration-top-left", "decoration-img decoration-bottom-right"]
    );
    // No positions: top-right by default
    assert_eq!(placements(1), vec!["decoration-img decoration-top-right"]);
    // No image: nothing
    assert!(placements(2).is_empty());
}

#[test]
fn decoration_sits_inside_the_marker_block_before_its_heading() {
    let page = rendered_page(Locale::En);
    let html = wrap(section(&page, 0).body.as_str());
    let doc = Document::parse(&html).unwrap();

    let block = doc
        .descendants()
        .find(|n| n.has_tag_name("section") && has_class(n, "song-colors"))
        .expect("marker block");
    let tags: Vec<&str> = block
        .children()
        .filter(|n| n.is_element())
        .map(|n| n.tag_name().name())
        .collect();
    assert_eq!(tags, vec!["img", "img", "h2", "div", "p", "div", "p"]);
}

#[test]
fn guide_link_opens_in_a_new_context() {
    let page = rendered_page(Locale::En);
    let html = wrap(section(&page, 1).body.as_str());
    let doc = Document::parse(&html).unwrap();

    let link = doc.descendants().find(|n| n.has_tag_name("a")).expect("guide link");
    assert_eq!(link.attribute("href"), Some("guias/pollitos.pdf"));
    assert_eq!(link.attribute("target"), Some("_blank"));
}

#[test]
fn spanish_chrome() {
    let page = rendered_page(Locale::Es);
    let body = section(&page, 0).body;
    assert!(body.as_str().contains("<strong>Artista:</strong> Traditional"));
    assert!(body.as_str().contains("<strong>Xilófono:</strong>"));
    assert!(body.as_str().contains("📘 Ver guía"));

    let body = section(&page, 1).body;
    assert!(body.as_str().contains("No hay audios disponibles"));
}

#[test]
fn catalog_of_n_songs_renders_n_pairs() {
    for n in [0, 1, 7] {
        let json = format!(
            "[{}]",
            (0..n)
                .map(|i| format!(r#"{{"title": "Song {i}", "artist": "A", "guide": "g"}}"#))
                .collect::<Vec<_>>()
                .join(",")
        );
        let mut page = HeadlessPage::new();
        let tabs = populate(Catalog::from_json(&json), &mut page, Locale::En)
            .unwrap()
            .unwrap();
        assert_eq!(tabs.len(), n);
        assert_eq!(page.buttons().count(), n);
        assert_eq!(page.sections().count(), n);
        for (i, (button, section)) in page.buttons().zip(page.sections()).enumerate() {
            assert_eq!(button.target, section.id);
            assert_eq!(section.id, format!("song-{i}"));
        }
    }
}
