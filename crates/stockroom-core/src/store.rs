//! In-memory entity store.
//!
//! The store is the single source of truth for one record type. It keeps
//! insertion order and performs no validation of its own: identifiers are
//! assigned by the mutation layer through [`EntityStore::next_id`].

use stockroom_model::{Entity, EntityId};

/// Ordered collection of records of one type.
#[derive(Debug, Clone)]
pub struct EntityStore<E: Entity> {
    records: Vec<E>,
}

impl<E: Entity> Default for EntityStore<E> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<E: Entity> EntityStore<E> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn add(&mut self, record: E) {
        self.records.push(record);
    }

    /// Merge `patch` over the record with `id`.
    ///
    /// Returns `false` and leaves the store untouched when no record matches.
    pub fn update(&mut self, id: E::Id, patch: E::Patch) -> bool {
        match self.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                record.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`, returning it if it was present.
    pub fn remove(&mut self, id: E::Id) -> Option<E> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some(self.records.remove(index))
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[E] {
        &self.records
    }

    pub fn get(&self, id: E::Id) -> Option<&E> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: E::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identifier for the next record: one past the largest present id,
    /// or [`EntityId::FIRST`] for an empty store.
    ///
    /// Returns `None` once the largest id is the maximum representable one.
    pub fn next_id(&self) -> Option<E::Id> {
        self.records
            .iter()
            .map(Entity::id)
            .max()
            .map_or(Some(E::Id::FIRST), EntityId::successor)
    }
}

impl<E: Entity> FromIterator<E> for EntityStore<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
