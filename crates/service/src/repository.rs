//! Generic in-memory document collection.

use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use salesdesk_core::{DocName, Document, NameGenerator, StoreError, StoreResult};

/// Insertion-ordered collection owning every record of one document kind.
///
/// Reads hand out clones, so callers can never mutate the backing storage
/// through a returned value. Lookups are linear scans; collections here are
/// dashboard-sized.
#[derive(Debug)]
pub struct Repository<T: Document> {
    records: RwLock<Vec<T>>,
    names: Mutex<NameGenerator>,
}

impl<T: Document> Repository<T> {
    pub fn new(names: NameGenerator) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            names: Mutex::new(names),
        }
    }

    /// Full sequence of current records, in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.read().clone()
    }

    /// The record, or `None` for absence. Absence is not an error here.
    pub fn get(&self, name: &DocName) -> Option<T> {
        self.read().iter().find(|doc| doc.name() == name).cloned()
    }

    /// Assign a fresh name, append, and return the stored record. Whatever
    /// name the caller put on the input is overwritten.
    pub fn insert(&self, mut doc: T) -> T {
        let name = self
            .names
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_name(T::PREFIX);
        doc.assign_name(name);
        self.write().push(doc.clone());
        debug!(kind = T::KIND, name = %doc.name(), "document created");
        doc
    }

    /// Merge the patch onto the stored record and return the updated copy.
    pub fn update(&self, name: &DocName, patch: T::Patch) -> StoreResult<T> {
        let mut records = self.write();
        let doc = records
            .iter_mut()
            .find(|doc| doc.name() == name)
            .ok_or_else(|| StoreError::not_found(name.clone()))?;
        doc.apply_patch(patch);
        debug!(kind = T::KIND, name = %name, "document updated");
        Ok(doc.clone())
    }

    /// Remove the record.
    pub fn remove(&self, name: &DocName) -> StoreResult<()> {
        let mut records = self.write();
        let idx = records
            .iter()
            .position(|doc| doc.name() == name)
            .ok_or_else(|| StoreError::not_found(name.clone()))?;
        records.remove(idx);
        debug!(kind = T::KIND, name = %name, "document deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Document> Default for Repository<T> {
    fn default() -> Self {
        Self::new(NameGenerator::from_entropy())
    }
}
