use std::fmt::Write;

use super::markdown::render_body;
use super::{encode_segment, escape, layout};
use crate::domain::{Cell, CellLink, CollectionOfCells};

fn cell_href(id: &str) -> String {
    format!("/cell/{}", encode_segment(id))
}

fn room_href(room: &str) -> String {
    format!("/room/{}", encode_segment(room))
}

fn source_items(cell: &Cell) -> String {
    let mut items = String::new();
    for source in &cell.sources {
        let _ = writeln!(
            items,
            "\t<li class=\"card-source\">{}</li>",
            escape(source.as_str())
        );
    }
    items
}

/// Read-only view of a card.
pub fn card_page(cell: &Cell, links: &[CellLink]) -> String {
    let mut link_items = String::new();
    for link in links {
        let _ = writeln!(
            link_items,
            "\t<li class=\"card-link\"><a href=\"{}\">{}</a></li>",
            cell_href(link.id.as_str()),
            escape(&link.title)
        );
    }

    let content = format!(
        r#"<div class="card">
<div class="card-room"><a href="{room_href}">{room}</a></div>
<div class="card-title">{title}</div><!--title-->
<div class="card-body">{body}</div>
<ul class="card-source-list">Sources
{sources}</ul> <!--sources-->
<ul class="card-link-list">Links
{links}</ul> <!--links-->
<div class="card-actions"><a href="{href}/edit">Edit</a> <a href="{href}/sources">Sources</a> <a href="{href}/links">Links</a></div>
</div>"#,
        room_href = room_href(&cell.room),
        room = escape(&cell.room),
        title = escape(&cell.title),
        body = render_body(&cell.body),
        sources = source_items(cell),
        links = link_items,
        href = cell_href(cell.id.as_str()),
    );
    layout(&cell.title, &content)
}

/// Form editing title, body and room.
pub fn edit_card_page(cell: &Cell) -> String {
    let content = format!(
        r#"<form class="card" method="post" action="/save">
<input type="hidden" name="cellId" value="{id}">
<label>Room <input type="text" name="room" value="{room}" required></label>
<label>Title <input type="text" name="title" value="{title}" required></label>
<label>Body <textarea name="body" required>{body}</textarea></label>
<button type="submit">Save</button>
<a href="{href}">Cancel</a>
</form>"#,
        id = escape(cell.id.as_str()),
        room = escape(&cell.room),
        title = escape(&cell.title),
        body = escape(&cell.body),
        href = cell_href(cell.id.as_str()),
    );
    layout(&format!("Edit {}", cell.title), &content)
}

/// Source list with add and remove forms.
pub fn edit_sources_page(cell: &Cell) -> String {
    let href = cell_href(cell.id.as_str());
    let mut items = String::new();
    for source in &cell.sources {
        let _ = writeln!(
            items,
            "\t<li class=\"card-source\">{text}<form method=\"post\" action=\"{href}/sources/remove\"><input type=\"hidden\" name=\"source\" value=\"{text}\"><button type=\"submit\">Remove</button></form></li>",
            text = escape(source.as_str()),
            href = href,
        );
    }

    let content = format!(
        r#"<div class="card">
<div class="card-title"><a href="{href}">{title}</a></div>
<ul class="card-source-list">Sources
{items}</ul>
<form method="post" action="{href}/sources/add">
<input type="text" name="source" id="source-search" autocomplete="off" data-search="/search/sources">
<button type="submit">Add source</button>
</form>
</div>"#,
        href = href,
        title = escape(&cell.title),
        items = items,
    );
    layout(&format!("Sources of {}", cell.title), &content)
}

/// Link list with link and unlink forms.
pub fn edit_links_page(cell: &Cell, links: &[CellLink]) -> String {
    let href = cell_href(cell.id.as_str());
    let mut items = String::new();
    for link in links {
        let _ = writeln!(
            items,
            "\t<li class=\"card-link\"><a href=\"{target}\">{title}</a><form method=\"post\" action=\"{href}/links/remove\"><input type=\"hidden\" name=\"cellToUnlink\" value=\"{id}\"><button type=\"submit\">Unlink</button></form></li>",
            target = cell_href(link.id.as_str()),
            title = escape(&link.title),
            href = href,
            id = escape(link.id.as_str()),
        );
    }

    let content = format!(
        r#"<div class="card">
<div class="card-title"><a href="{href}">{title}</a></div>
<ul class="card-link-list">Links
{items}</ul> <!--links-->
<form method="post" action="{href}/links/add">
<input type="text" name="cellToLink" id="cell-search" autocomplete="off" data-search="/search/cells">
<button type="submit">Link cell</button>
</form>
</div>"#,
        href = href,
        title = escape(&cell.title),
        items = items,
    );
    layout(&format!("Links of {}", cell.title), &content)
}

/// Every room with its cell count.
pub fn rooms_page(rooms: &[CollectionOfCells]) -> String {
    let mut items = String::new();
    for room in rooms {
        let _ = writeln!(
            items,
            "\t<li class=\"room\"><a href=\"{}\">{}</a> <span class=\"room-count\">{}</span></li>",
            room_href(&room.name),
            escape(&room.name),
            room.count()
        );
    }
    let content = format!("<ul class=\"room-list\">\n{}</ul>", items);
    layout("Rooms", &content)
}

/// The cells of a single room.
pub fn room_page(name: &str, cells: &[Cell]) -> String {
    let mut items = String::new();
    for cell in cells {
        let _ = writeln!(
            items,
            "\t<li class=\"room-cell\"><a href=\"{}\">{}</a></li>",
            cell_href(cell.id.as_str()),
            escape(&cell.summary())
        );
    }
    let content = format!(
        "<h1 class=\"room-name\">{}</h1>\n<ul class=\"cells-collection\">\n{}</ul>",
        escape(name),
        items
    );
    layout(name, &content)
}
