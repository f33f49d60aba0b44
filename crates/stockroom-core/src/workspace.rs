//! Shared owner of the item and category stores.
//!
//! Both inventory screens read and mutate the same workspace, so the
//! category delete check always counts the items the inventory page shows.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use stockroom_model::{Category, CategoryId, Item};
use tracing::debug;

use crate::activity::{ActivityEntry, ActivityLog};
use crate::error::{CoreError, Result};
use crate::stats::InventoryStats;
use crate::store::EntityStore;

/// Label shown for an item whose category cannot be resolved.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Seed data for a workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryFixture {
    pub categories: Vec<Category>,
    pub items: Vec<Item>,
    pub activity: Vec<ActivityEntry>,
}

/// Process-wide inventory state.
#[derive(Debug, Clone, Default)]
pub struct InventoryWorkspace {
    items: EntityStore<Item>,
    categories: EntityStore<Category>,
    activity: ActivityLog,
}

impl InventoryWorkspace {
    /// Empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a workspace from seed data.
    ///
    /// Identifiers must be unique per record type. Items may reference
    /// categories that do not exist; they display as [`UNKNOWN_CATEGORY`].
    pub fn from_fixture(fixture: InventoryFixture) -> Result<Self> {
        ensure_unique("category", fixture.categories.iter().map(|c| c.id.get()))?;
        ensure_unique("item", fixture.items.iter().map(|i| i.id.get()))?;
        debug!(
            categories = fixture.categories.len(),
            items = fixture.items.len(),
            "workspace seeded"
        );
        Ok(Self {
            items: fixture.items.into_iter().collect(),
            categories: fixture.categories.into_iter().collect(),
            activity: ActivityLog::from_entries(fixture.activity),
        })
    }

    /// Read a JSON fixture file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let fixture: InventoryFixture = serde_json::from_str(&content)?;
        Self::from_fixture(fixture)
    }

    /// Write the current state as a pretty-printed JSON fixture.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.to_fixture())?;
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "workspace saved");
        Ok(())
    }

    pub fn items(&self) -> &EntityStore<Item> {
        &self.items
    }

    pub fn categories(&self) -> &EntityStore<Category> {
        &self.categories
    }

    pub(crate) fn items_mut(&mut self) -> &mut EntityStore<Item> {
        &mut self.items
    }

    pub(crate) fn categories_mut(&mut self) -> &mut EntityStore<Category> {
        &mut self.categories
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Feed settings such as the actor and clock.
    pub fn activity_mut(&mut self) -> &mut ActivityLog {
        &mut self.activity
    }

    /// Dashboard totals and per-category stock.
    pub fn stats(&self) -> InventoryStats {
        InventoryStats::compute(self)
    }

    /// Display name of a category, or [`UNKNOWN_CATEGORY`].
    pub fn category_name(&self, id: CategoryId) -> &str {
        self.categories
            .get(id)
            .map_or(UNKNOWN_CATEGORY, |category| category.name.as_str())
    }

    /// Number of items referencing `category`.
    pub fn items_in_category(&self, category: CategoryId) -> usize {
        self.items
            .all()
            .iter()
            .filter(|item| item.category_id == category)
            .count()
    }

    /// Snapshot of the current state as seed data.
    pub fn to_fixture(&self) -> InventoryFixture {
        InventoryFixture {
            categories: self.categories.all().to_vec(),
            items: self.items.all().to_vec(),
            activity: self.activity.entries().to_vec(),
        }
    }
}

fn ensure_unique(kind: &'static str, ids: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CoreError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "categories": [{"id": 1, "name": "Building", "description": "Cement and sand"}],
        "items": [
            {"id": 1, "name": "Cement", "quantity": 5, "price": 10, "categoryId": 1, "lowStockThreshold": 5},
            {"id": 2, "name": "Varnish", "quantity": 8, "price": 4.5, "categoryId": 9, "lowStockThreshold": 2}
        ]
    }"#;

    fn workspace() -> InventoryWorkspace {
        InventoryWorkspace::from_fixture(serde_json::from_str(FIXTURE).unwrap()).unwrap()
    }

    #[test]
    fn resolves_category_names() {
        let ws = workspace();
        let items = ws.items().all();
        assert_eq!(ws.category_name(items[0].category_id), "Building");
        assert_eq!(ws.category_name(items[1].category_id), UNKNOWN_CATEGORY);
    }

    #[test]
    fn counts_items_per_category() {
        let ws = workspace();
        assert_eq!(ws.items_in_category(CategoryId::new(1).unwrap()), 1);
        assert_eq!(ws.items_in_category(CategoryId::new(2).unwrap()), 0);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut fixture: InventoryFixture = serde_json::from_str(FIXTURE).unwrap();
        let duplicate = fixture.items[0].clone();
        fixture.items.push(duplicate);
        let err = InventoryWorkspace::from_fixture(fixture).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateId { kind: "item", id: 1 }));
    }

    #[test]
    fn activity_survives_a_save_and_reload() {
        let mut fixture: InventoryFixture = serde_json::from_str(FIXTURE).unwrap();
        assert!(fixture.activity.is_empty());
        fixture.activity.push(ActivityEntry {
            id: 7,
            user: "Nadia".to_string(),
            role: "Admin".to_string(),
            action: "Added item 'Cement'".to_string(),
            timestamp: chrono::DateTime::<chrono::Utc>::UNIX_EPOCH,
        });
        let ws = InventoryWorkspace::from_fixture(fixture).unwrap();
        let json = serde_json::to_string(&ws.to_fixture()).unwrap();
        let reloaded: InventoryFixture = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded.activity, ws.activity().entries());
        assert_eq!(reloaded.activity[0].id, 7);
    }
}
