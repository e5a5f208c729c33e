use super::Repository;
use crate::domain::{CellId, CellLink};
use crate::error::RepoError;

impl Repository {
    /// Link two cells in both directions. Linking an already linked pair is
    /// a no-op.
    ///
    /// # Errors
    /// Returns `InvalidOperation` for a self-link, `NotFound` if either cell
    /// is missing.
    pub fn link_cells(&self, a: &CellId, b: &CellId) -> Result<(), RepoError> {
        if a == b {
            return Err(RepoError::InvalidOperation(format!(
                "cell {} cannot link to itself",
                a
            )));
        }

        let mut store = self.store.lock();
        store.cell(a)?;
        store.cell(b)?;

        store.cell_mut(a)?.links.insert(b.clone());
        store.cell_mut(b)?.links.insert(a.clone());
        Ok(())
    }

    /// Remove the link between two cells in both directions. Unlinking a
    /// pair that is not linked is a no-op.
    pub fn unlink_cells(&self, a: &CellId, b: &CellId) -> Result<(), RepoError> {
        let mut store = self.store.lock();
        store.cell(a)?;
        store.cell(b)?;

        store.cell_mut(a)?.links.shift_remove(b);
        store.cell_mut(b)?.links.shift_remove(a);
        Ok(())
    }

    /// Id and title of every cell linked from `id`, in link order.
    pub fn linked_cells(&self, id: &CellId) -> Result<Vec<CellLink>, RepoError> {
        let store = self.store.lock();
        let cell = store.cell(id)?;
        cell.links
            .iter()
            .map(|linked| {
                let target = store.cell(linked)?;
                Ok(CellLink {
                    id: target.id.clone(),
                    title: target.title.clone(),
                })
            })
            .collect()
    }
}
