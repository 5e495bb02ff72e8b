//! Markdown Rendering
//!
//! Renders content copy (bio, project details) with pulldown-cmark, plus:
//! - External links open in a new tab (`target="_blank"`, `rel="noopener noreferrer"`)
//! - Relative image paths are percent-encoded and resolved against the asset base
//! - Images are lazy-loaded

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Parse markdown with all extensions enabled
pub fn parse_markdown(text: &str, asset_base: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser, asset_base);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str, asset_base: &str) -> String {
    let html = parse_markdown(text, asset_base);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

// State for the event transformer
enum State {
    Normal,
    InImage { url: String, alt: String, depth: usize },
}

/// Transform parser events for links and images
fn transform_events<'a>(parser: Parser<'a>, asset_base: &str) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;
    // One entry per open link: true when we emitted the <a> ourselves
    let mut link_stack: Vec<bool> = Vec::new();

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::Link { dest_url, title, .. }) if is_external(&dest_url) => {
                    let mut html = format!(
                        r#"<a href="{}" target="_blank" rel="noopener noreferrer""#,
                        escape_html(&dest_url)
                    );
                    if !title.is_empty() {
                        html.push_str(&format!(r#" title="{}""#, escape_html(&title)));
                    }
                    html.push('>');
                    events.push(Event::Html(CowStr::from(html)));
                    link_stack.push(true);
                }
                Event::Start(tag @ Tag::Link { .. }) => {
                    events.push(Event::Start(tag));
                    link_stack.push(false);
                }
                Event::End(TagEnd::Link) => {
                    if link_stack.pop().unwrap_or(false) {
                        events.push(Event::Html(CowStr::from("</a>")));
                    } else {
                        events.push(Event::End(TagEnd::Link));
                    }
                }
                Event::Start(Tag::Image { dest_url, .. }) => {
                    state = State::InImage {
                        url: resolve_asset_url(asset_base, &dest_url),
                        alt: String::new(),
                        depth: 0,
                    };
                }
                other => events.push(other),
            },

            State::InImage {
                ref url,
                ref mut alt,
                ref mut depth,
            } => match event {
                Event::Text(t) | Event::Code(t) => alt.push_str(&t),
                Event::Start(_) => *depth += 1,
                Event::End(TagEnd::Image) if *depth == 0 => {
                    let html = format!(
                        r#"<img src="{}" alt="{}" loading="lazy" class="md-image" />"#,
                        escape_html(url),
                        escape_html(alt)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                Event::End(_) => *depth = depth.saturating_sub(1),
                _ => {}
            },
        }
    }

    events
}

fn is_external(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//")
}

const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Resolve a content asset path. Absolute URLs, site-absolute paths and
/// data URIs pass through; relative paths are encoded and prefixed with `base`.
pub fn resolve_asset_url(base: &str, path: &str) -> String {
    let lower = path.to_ascii_lowercase();
    if is_external(path) || path.starts_with('/') || lower.starts_with("data:") {
        return path.to_string();
    }

    let relative = path.trim_start_matches("./").replace('\\', "/");
    let encoded = utf8_percent_encode(&relative, PATH_ENCODE_SET).to_string();
    if base.is_empty() || base.ends_with('/') {
        format!("{}{}", base, encoded)
    } else {
        format!("{}/{}", base, encoded)
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_links_open_in_new_tab() {
        let html = parse_markdown("See [demo](https://melouka.vercel.app/).", "./");
        assert!(html.contains(
            r#"<a href="https://melouka.vercel.app/" target="_blank" rel="noopener noreferrer">demo</a>"#
        ));
    }

    #[test]
    fn test_in_page_links_untouched() {
        let html = parse_markdown("[contact](#contact)", "./");
        assert!(html.contains(r##"<a href="#contact">contact</a>"##));
        assert!(!html.contains("_blank"));
    }

    #[test]
    fn test_relative_images_resolved_and_encoded() {
        let html = parse_markdown("![My *shot*](<./images/app shot.png>)", "/static");
        assert!(html.contains(r#"src="/static/images/app%20shot.png""#));
        assert!(html.contains(r#"alt="My shot""#));
        assert!(html.contains(r#"loading="lazy""#));
    }

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(parse_markdown_inline("over **5 years**", "./"), "over <strong>5 years</strong>");
    }

    #[test]
    fn test_asset_url_passthrough() {
        assert_eq!(resolve_asset_url("./", "https://x.io/a.png"), "https://x.io/a.png");
        assert_eq!(resolve_asset_url("./", "/images/a.png"), "/images/a.png");
        assert_eq!(resolve_asset_url("./", "images/a b.png"), "./images/a%20b.png");
        assert_eq!(resolve_asset_url("assets", "./a.png"), "assets/a.png");
    }
}
