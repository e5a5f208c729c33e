//! In-memory repository for cells, rooms, sources and links.
//!
//! This module provides the `Repository` struct, the single owner of all
//! cell data for the lifetime of the process. Methods are organized across
//! submodules by concern:
//! - `cells.rs` - create, read and update with field validation
//! - `sources.rs` - adding and removing attributions on a cell
//! - `links.rs` - symmetric links between cells
//! - `search.rs` - substring search and room listings
//! - `seed.rs` - demo content
//!
//! Every operation takes one coarse lock over the whole store and validates
//! before it mutates, so a failed call leaves the store untouched.

mod cells;
mod links;
mod search;
mod seed;
mod sources;

pub use seed::DEMO_CELL_ID;

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::domain::{Cell, CellId};
use crate::error::RepoError;

/// Repository of cells, shared between request handlers behind an `Arc`.
#[derive(Debug, Default)]
pub struct Repository {
    store: Mutex<Store>,
}

impl Repository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Lock-guarded state. Cells are kept in creation order, which is the
/// iteration order every search and listing reports.
#[derive(Debug, Default)]
struct Store {
    cells: IndexMap<CellId, Cell>,
    /// Room name to number of cells in it. Rooms with no cells are removed.
    rooms: IndexMap<String, usize>,
}

impl Store {
    fn cell(&self, id: &CellId) -> Result<&Cell, RepoError> {
        self.cells.get(id).ok_or_else(|| not_found(id))
    }

    fn cell_mut(&mut self, id: &CellId) -> Result<&mut Cell, RepoError> {
        self.cells.get_mut(id).ok_or_else(|| not_found(id))
    }

    fn fresh_id(&self) -> CellId {
        loop {
            let id = CellId::generate();
            if !self.cells.contains_key(&id) {
                return id;
            }
        }
    }

    fn insert(&mut self, cell: Cell) {
        self.enter_room(&cell.room);
        self.cells.insert(cell.id.clone(), cell);
    }

    fn enter_room(&mut self, room: &str) {
        *self.rooms.entry(room.to_string()).or_insert(0) += 1;
    }

    fn leave_room(&mut self, room: &str) {
        if let Some(count) = self.rooms.get_mut(room) {
            *count -= 1;
            if *count == 0 {
                self.rooms.shift_remove(room);
            }
        }
    }
}

fn not_found(id: &CellId) -> RepoError {
    RepoError::NotFound(format!("cell {}", id))
}
