use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Render a cell body as HTML. Raw HTML in the body is shown as text and
/// link targets with unknown schemes are neutralized.
pub fn render_body(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(content, options).map(|event| match event {
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize_destination(dest_url, "#", true),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize_destination(dest_url, "", false),
            title,
            id,
        }),
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

fn sanitize_destination<'a>(
    dest_url: CowStr<'a>,
    fallback: &'static str,
    allow_mailto: bool,
) -> CowStr<'a> {
    if is_safe_destination(&dest_url, allow_mailto) {
        dest_url
    } else {
        CowStr::Borrowed(fallback)
    }
}

/// Images never get `mailto:` targets.
fn is_safe_destination(value: &str, allow_mailto: bool) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    if lower.starts_with("//") {
        return false;
    }
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return true;
    }
    if lower.starts_with("mailto:") {
        return allow_mailto;
    }
    !lower.contains(':')
}
