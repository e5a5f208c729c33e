use super::Repository;
use crate::domain::{CellId, Source};
use crate::error::RepoError;

impl Repository {
    /// Append a source to the cell. Duplicates are kept.
    pub fn add_source_to_cell(&self, id: &CellId, source: Source) -> Result<CellId, RepoError> {
        let mut store = self.store.lock();
        store.cell_mut(id)?.sources.push(source);
        Ok(id.clone())
    }

    /// Remove every occurrence of `source` from the cell. Removing a source
    /// the cell does not carry is a no-op.
    pub fn remove_source_from_cell(
        &self,
        id: &CellId,
        source: &Source,
    ) -> Result<CellId, RepoError> {
        let mut store = self.store.lock();
        store.cell_mut(id)?.sources.retain(|s| s != source);
        Ok(id.clone())
    }
}
