use indexmap::IndexSet;

use super::Repository;
use crate::domain::{Cell, CellDraft, CellId, CellUpdate};
use crate::error::RepoError;

impl Repository {
    /// Store a new cell and return its freshly generated id.
    ///
    /// # Errors
    /// Returns `ValidationFailed` if title, body or room is blank.
    pub fn new_cell(&self, draft: CellDraft) -> Result<CellId, RepoError> {
        check_fields(draft.empty_fields())?;

        let mut store = self.store.lock();
        let id = store.fresh_id();
        store.insert(Cell {
            id: id.clone(),
            title: draft.title,
            body: draft.body,
            room: draft.room,
            sources: draft.sources,
            links: IndexSet::new(),
        });
        Ok(id)
    }

    /// Get a copy of the stored cell.
    pub fn get_cell(&self, id: &CellId) -> Result<Cell, RepoError> {
        self.store.lock().cell(id).cloned()
    }

    /// Replace title, body and room of an existing cell. Sources and links
    /// are preserved.
    ///
    /// # Errors
    /// Returns `ValidationFailed` on blank fields, `NotFound` on unknown id.
    pub fn update_cell(&self, update: CellUpdate) -> Result<CellId, RepoError> {
        check_fields(update.empty_fields())?;

        let mut store = self.store.lock();
        let previous_room = store.cell(&update.id)?.room.clone();
        if previous_room != update.room {
            store.leave_room(&previous_room);
            store.enter_room(&update.room);
        }

        let cell = store.cell_mut(&update.id)?;
        cell.title = update.title;
        cell.body = update.body;
        cell.room = update.room;
        Ok(update.id)
    }

    pub fn cell_count(&self) -> usize {
        self.store.lock().cells.len()
    }
}

fn check_fields(empty: Vec<&'static str>) -> Result<(), RepoError> {
    if empty.is_empty() {
        Ok(())
    } else {
        Err(RepoError::ValidationFailed(empty))
    }
}
