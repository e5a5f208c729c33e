use indexmap::IndexSet;

use super::Repository;
use crate::domain::{Cell, CellId, Source};

/// Id of the demo card that links to the two library cards.
pub const DEMO_CELL_ID: &str = "72aed05b-cb2d-4cad-bf70-05d8ae02a7bc";
const BABEL_ID: &str = "0b7e4c52-8f6a-4f0e-9a36-2d1f7c3e5a10";
const MIRRORS_ID: &str = "e3c9d1a4-5b27-4c8e-b6f0-91a2d4e7c8b3";

impl Repository {
    /// Create a repository preloaded with demo content.
    pub fn seeded() -> Self {
        let repo = Repository::new();
        {
            let mut store = repo.store.lock();
            store.insert(seed_cell(
                DEMO_CELL_ID,
                "The labyrinth",
                "Every cell is a room of the labyrinth. Follow the links to wander.",
                "Habitación",
                &["Confucius"],
                &[BABEL_ID, MIRRORS_ID],
            ));
            store.insert(seed_cell(
                BABEL_ID,
                "The Library of Babel",
                "The universe (which others call the Library) is composed of an indefinite number of hexagonal galleries.",
                "Biblioteca",
                &["Jorge Luis Borges"],
                &[DEMO_CELL_ID],
            ));
            store.insert(seed_cell(
                MIRRORS_ID,
                "Mirrors",
                "Mirrors faithfully duplicate every gallery, so the labyrinth seems endless.",
                "Biblioteca",
                &["Tlön, Uqbar, Orbis Tertius"],
                &[DEMO_CELL_ID],
            ));
        }
        repo
    }
}

fn seed_cell(
    id: &str,
    title: &str,
    body: &str,
    room: &str,
    sources: &[&str],
    links: &[&str],
) -> Cell {
    Cell {
        id: CellId::new(id),
        title: title.to_string(),
        body: body.to_string(),
        room: room.to_string(),
        sources: sources.iter().copied().map(Source::from).collect(),
        links: links.iter().copied().map(CellId::from).collect::<IndexSet<_>>(),
    }
}
