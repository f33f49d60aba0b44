//! Inventory categories.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::ids::CategoryId;

/// A category that items reference by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Category {
    pub fn new(id: CategoryId, draft: CategoryDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;
    type Patch = CategoryDraft;

    fn id(&self) -> CategoryId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn apply(&mut self, patch: CategoryDraft) {
        self.name = patch.name;
        self.description = patch.description;
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

/// Field values collected by the category form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl From<&Category> for CategoryDraft {
    fn from(category: &Category) -> Self {
        Self::new(category.name.clone(), category.description.clone())
    }
}
