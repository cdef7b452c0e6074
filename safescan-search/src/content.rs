//! HTML to visible text.
//!
//! Removes elements whose content is never rendered (scripts, styles,
//! `noscript`, templates), parses the rest, and returns every text node of
//! the document with whitespace collapsed.

use scraper::Html;

/// Elements stripped together with their content before parsing.
const NON_VISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Extract the visible text of an HTML document.
///
/// Never fails: malformed markup is parsed leniently and a page without any
/// text yields an empty string.
pub fn visible_text(html: &str) -> String {
    let cleaned = strip_non_visible_tags(html);
    let document = Html::parse_document(&cleaned);
    let raw = document.root_element().text().collect::<Vec<_>>().join(" ");
    collapse_whitespace(&raw)
}

fn strip_non_visible_tags(html: &str) -> String {
    NON_VISIBLE_TAGS
        .iter()
        .fold(html.to_owned(), |acc, tag| strip_tag(&acc, tag))
}

/// Remove all instances of a specific HTML tag and its content.
fn strip_tag(html: &str, tag: &str) -> String {
    let mut result = String::with_capacity(html.len());
    // ASCII lowercasing keeps byte offsets aligned with `html`.
    let lower = html.to_ascii_lowercase();
    let open_tag = format!("<{tag}");
    let close_tag = format!("</{tag}>");

    let mut pos = 0;
    loop {
        let start = match lower[pos..].find(&open_tag) {
            Some(offset) => pos + offset,
            None => {
                result.push_str(&html[pos..]);
                break;
            }
        };

        // Must be the tag itself, not a longer name like <styles> or <scripted>.
        let after_tag = start + open_tag.len();
        if let Some(&next_byte) = lower.as_bytes().get(after_tag) {
            if !matches!(next_byte, b' ' | b'>' | b'/' | b'\n' | b'\r' | b'\t') {
                result.push_str(&html[pos..after_tag]);
                pos = after_tag;
                continue;
            }
        }

        result.push_str(&html[pos..start]);

        let end = match lower[start..].find(&close_tag) {
            Some(offset) => start + offset + close_tag.len(),
            // Unclosed: drop only the opening tag.
            None => match lower[start..].find('>') {
                Some(offset) => start + offset + 1,
                None => html.len(),
            },
        };

        pos = end;
    }

    result
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_body_text() {
        let html = "<html><body><p>Hello <b>world</b></p></body></html>";
        assert_eq!(visible_text(html), "Hello world");
    }

    #[test]
    fn includes_title_and_layout_text() {
        let html = r#"<html><head><title>Page Title</title></head><body>
            <nav>Menu</nav><main>Main text</main><footer>Footer text</footer>
        </body></html>"#;
        let text = visible_text(html);
        assert!(text.contains("Page Title"));
        assert!(text.contains("Menu"));
        assert!(text.contains("Main text"));
        assert!(text.contains("Footer text"));
    }

    #[test]
    fn strips_script_and_style() {
        let html = r#"<html><head><style>.murder { color: red; }</style></head><body>
            <p>Real content</p>
            <script>var blood = 1; alert('hi');</script>
            <SCRIPT type="text/javascript">shouted()</SCRIPT>
        </body></html>"#;
        let text = visible_text(html);
        assert_eq!(text, "Real content");
    }

    #[test]
    fn strips_noscript_and_template() {
        let html = r#"<body><p>Visible</p><noscript>Enable JS</noscript>
            <template><p>Hidden row</p></template></body>"#;
        assert_eq!(visible_text(html), "Visible");
    }

    #[test]
    fn similar_tag_names_are_kept() {
        let html = "<body><styles>Custom element text</styles><p>Para</p></body>";
        let text = visible_text(html);
        assert!(text.contains("Custom element text"));
        assert!(text.contains("Para"));
    }

    #[test]
    fn unclosed_script_drops_only_opening_tag() {
        let html = "<body><p>Before</p><script src=\"x.js\"><p>After</p></body>";
        let text = visible_text(html);
        assert!(text.contains("Before"));
    }

    #[test]
    fn whitespace_is_collapsed() {
        let html = "<body>Word1    Word2\n\n\n\tWord3</body>";
        assert_eq!(visible_text(html), "Word1 Word2 Word3");
    }

    #[test]
    fn empty_markup_yields_empty_text() {
        assert_eq!(visible_text(""), "");
        assert_eq!(visible_text("<html><body>  \n </body></html>"), "");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(visible_text("just some text"), "just some text");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(visible_text("<p>Fish &amp; chips</p>"), "Fish & chips");
    }

    #[test]
    fn multibyte_text_survives_stripping() {
        let html = "<p>Grüße</p><script>é</script><p>naïve café</p>";
        assert_eq!(visible_text(html), "Grüße naïve café");
    }
}
