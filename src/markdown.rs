//! Markdown Rendering
//!
//! Renders the informational page bodies with pulldown-cmark. Every heading
//! gets a slug id so sections can be linked by anchor.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Render markdown to HTML with tables, strikethrough and heading anchors
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = anchor_headings(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Lowercase ASCII alphanumerics joined by single dashes.
/// "2. Identity & Access Management" -> "2-identity-access-management"
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Fill in missing heading ids from the heading text. Duplicate slugs get a
/// numeric suffix.
fn anchor_headings<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut used: Vec<String> = Vec::new();
    // Index of the open heading's Start event and its collected text
    let mut open: Option<(usize, String)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                open = Some((events.len(), String::new()));
                events.push(event);
            }
            Event::Text(ref t) | Event::Code(ref t) => {
                if let Some((_, text)) = open.as_mut() {
                    text.push_str(t);
                }
                events.push(event);
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((start, text)) = open.take() {
                    if let Event::Start(Tag::Heading { id, .. }) = &mut events[start] {
                        if id.is_none() {
                            let slug = unique_slug(slugify(&text), &mut used);
                            *id = Some(CowStr::from(slug));
                        }
                    }
                }
                events.push(event);
            }
            other => events.push(other),
        }
    }
    events
}

fn unique_slug(base: String, used: &mut Vec<String>) -> String {
    let base = if base.is_empty() { "section".to_string() } else { base };
    let mut candidate = base.clone();
    let mut n = 1;
    while used.contains(&candidate) {
        candidate = format!("{}-{}", base, n);
        n += 1;
    }
    used.push(candidate.clone());
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("2. Identity & Access Management"), "2-identity-access-management");
        assert_eq!(slugify("  The Golden Thread!  "), "the-golden-thread");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_headings_get_ids() {
        let html = parse_markdown("## Data Collection\n\nWe collect identity data.");
        assert!(html.contains(r#"<h2 id="data-collection">Data Collection</h2>"#), "{}", html);
        assert!(html.contains("<p>We collect identity data.</p>"));
    }

    #[test]
    fn test_duplicate_headings_are_suffixed() {
        let html = parse_markdown("## Fees\n\n## Fees\n");
        assert!(html.contains(r#"id="fees""#));
        assert!(html.contains(r#"id="fees-1""#));
    }

    #[test]
    fn test_explicit_id_is_kept() {
        let html = parse_markdown("## Audits {#audits}\n");
        assert!(html.contains(r#"<h2 id="audits">Audits</h2>"#), "{}", html);
    }

    #[test]
    fn test_inline_markup_in_heading() {
        let html = parse_markdown("### Use `TLS 1.3` now");
        assert!(html.contains(r#"id="use-tls-1-3-now""#), "{}", html);
    }

    #[test]
    fn test_tables_enabled() {
        let html = parse_markdown("| Method | Fee |\n|---|---|\n| Escrow | 0.5% |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>Escrow</td>"));
    }
}
