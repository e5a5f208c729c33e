//! HTML rendering for every server-rendered page.
//!
//! Pages are assembled from small string builders. All user text goes through
//! [`escape`]; cell bodies go through the markdown renderer.

pub mod markdown;
pub mod pages;

pub use pages::{
    card_page, edit_card_page, edit_links_page, edit_sources_page, room_page, rooms_page,
};

/// Escape text for use in HTML content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a single URL path segment.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Wrap page content in the shared document shell.
pub(crate) fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
	<meta charset="utf-8">
	<title>{title} · Labyrinth</title>
	<link rel="stylesheet" href="/page/style.css">
</head>
<body>
<nav><a href="/rooms">Rooms</a> <a href="/page/new_cell.html">New cell</a></nav>
{content}
</body>
</html>
"#,
        title = escape(title),
        content = content,
    )
}

/// Page shown for unknown cells, rooms and pages.
pub fn not_found_page() -> String {
    layout(
        "Not found",
        r#"<div class="card not-found">
	<div class="card-title">This cell does not exist</div>
	<p>The labyrinth has no room here. <a href="/rooms">Back to the rooms</a>.</p>
</div>"#,
    )
}
