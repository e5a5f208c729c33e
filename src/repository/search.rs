use super::Repository;
use crate::domain::primitives::contains_ignore_case;
use crate::domain::{Cell, CollectionOfCells, Source};

impl Repository {
    /// Every source of every cell matching `term`, case-insensitively.
    /// An empty term returns all sources.
    pub fn search_sources(&self, term: &str) -> Vec<Source> {
        let store = self.store.lock();
        store
            .cells
            .values()
            .flat_map(|cell| cell.sources.iter())
            .filter(|source| source.matches(term))
            .cloned()
            .collect()
    }

    /// Distinct room names containing `term`, case-insensitively.
    pub fn search_rooms(&self, term: &str) -> Vec<String> {
        let store = self.store.lock();
        store
            .rooms
            .keys()
            .filter(|room| contains_ignore_case(room, term))
            .cloned()
            .collect()
    }

    /// Cells whose title or body contains `term`, case-insensitively.
    pub fn search_cells(&self, term: &str) -> Vec<Cell> {
        let store = self.store.lock();
        store
            .cells
            .values()
            .filter(|cell| cell.matches(term))
            .cloned()
            .collect()
    }

    /// One collection per room, each holding the cells in that room.
    pub fn list_rooms(&self) -> Vec<CollectionOfCells> {
        let store = self.store.lock();
        store
            .rooms
            .keys()
            .map(|room| CollectionOfCells {
                name: room.clone(),
                cells: store
                    .cells
                    .values()
                    .filter(|cell| &cell.room == room)
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    /// Cells whose room equals `room` exactly. Unknown rooms yield an empty
    /// list.
    pub fn list_cells_in_room(&self, room: &str) -> Vec<Cell> {
        let store = self.store.lock();
        store
            .cells
            .values()
            .filter(|cell| cell.room == room)
            .cloned()
            .collect()
    }
}
