//! Traits shared by every record kept in an entity store.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Identifier of a stored record.
///
/// Identifiers are positive and assigned sequentially: a new record gets the
/// successor of the largest identifier in its store, or [`EntityId::FIRST`]
/// when the store is empty.
pub trait EntityId: Copy + Eq + Ord + Hash + Debug + Display {
    /// Identifier given to the first record of an empty store.
    const FIRST: Self;

    /// The identifier immediately after `self`, or `None` when the id space
    /// is exhausted.
    #[must_use]
    fn successor(self) -> Option<Self>;
}

/// A record that lives in an entity store.
pub trait Entity: Clone + Debug {
    /// Identifier type.
    type Id: EntityId;
    /// Field set merged over an existing record on update.
    type Patch;

    /// Immutable identifier of this record.
    fn id(&self) -> Self::Id;

    /// Display name used in notifications.
    fn label(&self) -> &str;

    /// Merge `patch` over the mutable fields. The identifier never changes.
    fn apply(&mut self, patch: Self::Patch);

    /// Case-insensitive search over the record's searchable text.
    ///
    /// `needle` must already be lower-cased.
    fn matches_search(&self, needle: &str) -> bool;
}
