// ABOUTME: Markdown rendering for the sheet documentation tab
// ABOUTME: Converts CommonMark to HTML and tags every heading with the sheet heading class

use pulldown_cmark::{html, Event, Options, Parser, Tag};
use tracing::debug;

/// Class added to every heading so the sheet CSS styles it as a label
pub const HEADING_CLASS: &str = "sheet-heading_label";

/// Render markdown to HTML, adding [`HEADING_CLASS`] to `h1`..`h6`
pub fn render_markdown(markdown: &str) -> String {
    let mut headings = 0usize;
    let parser = Parser::new_ext(markdown, Options::empty()).map(|event| match event {
        Event::Start(Tag::Heading(level, id, mut classes)) => {
            headings += 1;
            classes.push(HEADING_CLASS);
            Event::Start(Tag::Heading(level, id, classes))
        }
        other => other,
    });

    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, parser);

    debug!(
        "Rendered {} bytes of markdown with {} headings",
        markdown.len(),
        headings
    );
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_get_class() {
        let html = render_markdown("# Sheet\n\nSome text\n\n### Details\n");
        assert!(html.contains(r#"<h1 class="sheet-heading_label">Sheet</h1>"#));
        assert!(html.contains(r#"<h3 class="sheet-heading_label">Details</h3>"#));
        assert!(html.contains("<p>Some text</p>"));
    }

    #[test]
    fn test_other_elements_untouched() {
        let html = render_markdown("- one\n- *two*\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<em>two</em>"));
        assert!(!html.contains(HEADING_CLASS));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_markdown(""), "");
    }
}
