//! Mutation controller: add, edit and delete with validation and
//! referential integrity.
//!
//! Each operation either changes the workspace and emits one notification,
//! or returns an outcome explaining why nothing changed. Nothing here is
//! fatal; the caller decides how to present the outcome.

use stockroom_model::{
    Category, CategoryDraft, CategoryId, Entity, EntityId, Item, ItemDraft, ItemId,
};
use tracing::{info, warn};

use crate::error::ValidationError;
use crate::notify::{Notification, Notifier, emit};
use crate::workspace::InventoryWorkspace;

/// Result of a mutation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome<Id> {
    /// A record was appended with this id.
    Created(Id),
    /// The record's mutable fields were replaced.
    Updated(Id),
    /// The record was removed.
    Deleted(Id),
    /// Delete refused because other records still reference the target.
    Rejected { id: Id, referencing: usize },
    /// Form input failed validation; nothing changed and nothing was notified.
    Invalid(ValidationError),
    /// The target no longer exists; nothing changed.
    NotFound(Id),
    /// There was no open edit or pending delete to act on.
    NothingPending,
}

impl<Id: EntityId> MutationOutcome<Id> {
    /// Id of the created record, if this outcome is a creation.
    pub fn created(&self) -> Option<Id> {
        match self {
            Self::Created(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether the workspace changed.
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            Self::Created(_) | Self::Updated(_) | Self::Deleted(_)
        )
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Check an item draft and resolve its category.
pub fn validate_item(
    workspace: &InventoryWorkspace,
    draft: &ItemDraft,
) -> Result<CategoryId, ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    let category_id = draft.category_id.ok_or(ValidationError::MissingCategory)?;
    if !workspace.categories().contains(category_id) {
        return Err(ValidationError::UnknownCategory(category_id));
    }
    if draft.price.is_sign_negative() && !draft.price.is_zero() {
        return Err(ValidationError::NegativePrice);
    }
    Ok(category_id)
}

pub fn validate_category(draft: &CategoryDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    Ok(())
}

// =============================================================================
// ITEMS
// =============================================================================

/// Append a new item with the next free id.
pub fn add_item(
    workspace: &mut InventoryWorkspace,
    draft: ItemDraft,
    notifier: &mut dyn Notifier,
) -> MutationOutcome<ItemId> {
    let category_id = match validate_item(workspace, &draft) {
        Ok(category_id) => category_id,
        Err(error) => return MutationOutcome::Invalid(error),
    };
    let Some(id) = workspace.items().next_id() else {
        warn!("item ids exhausted");
        return MutationOutcome::Invalid(ValidationError::IdsExhausted);
    };
    let item = Item::new(id, category_id, draft);
    let message = format!("{} has been added to inventory.", item.label());
    let action = format!("Added item '{}'", item.label());
    info!(item_id = %id, category_id = %category_id, "item added");
    workspace.items_mut().add(item);
    workspace.activity_mut().record(action);
    emit(notifier, Notification::success(message));
    MutationOutcome::Created(id)
}

/// Replace the mutable fields of item `id`, keeping its id.
pub fn update_item(
    workspace: &mut InventoryWorkspace,
    id: ItemId,
    draft: ItemDraft,
    notifier: &mut dyn Notifier,
) -> MutationOutcome<ItemId> {
    if let Err(error) = validate_item(workspace, &draft) {
        return MutationOutcome::Invalid(error);
    }
    let message = format!("{} has been updated.", draft.name);
    let action = format!("Updated item '{}'", draft.name);
    if !workspace.items_mut().update(id, draft) {
        warn!(item_id = %id, "edit target no longer exists");
        return MutationOutcome::NotFound(id);
    }
    info!(item_id = %id, "item updated");
    workspace.activity_mut().record(action);
    emit(notifier, Notification::info(message));
    MutationOutcome::Updated(id)
}

/// Remove item `id`. Items are never referenced, so this always proceeds.
pub fn delete_item(
    workspace: &mut InventoryWorkspace,
    id: ItemId,
    notifier: &mut dyn Notifier,
) -> MutationOutcome<ItemId> {
    match workspace.items_mut().remove(id) {
        Some(item) => {
            info!(item_id = %id, "item removed");
            workspace
                .activity_mut()
                .record(format!("Deleted item '{}'", item.label()));
            emit(notifier, Notification::info(format!(
                "{} has been removed from inventory.",
                item.label()
            )));
            MutationOutcome::Deleted(id)
        }
        None => {
            warn!(item_id = %id, "delete target no longer exists");
            MutationOutcome::NotFound(id)
        }
    }
}

// =============================================================================
// CATEGORIES
// =============================================================================

pub fn add_category(
    workspace: &mut InventoryWorkspace,
    draft: CategoryDraft,
    notifier: &mut dyn Notifier,
) -> MutationOutcome<CategoryId> {
    if let Err(error) = validate_category(&draft) {
        return MutationOutcome::Invalid(error);
    }
    let Some(id) = workspace.categories().next_id() else {
        warn!("category ids exhausted");
        return MutationOutcome::Invalid(ValidationError::IdsExhausted);
    };
    let category = Category::new(id, draft);
    let message = format!("{} has been added to inventory.", category.label());
    let action = format!("Added category '{}'", category.label());
    info!(category_id = %id, "category added");
    workspace.categories_mut().add(category);
    workspace.activity_mut().record(action);
    emit(notifier, Notification::success(message));
    MutationOutcome::Created(id)
}

pub fn update_category(
    workspace: &mut InventoryWorkspace,
    id: CategoryId,
    draft: CategoryDraft,
    notifier: &mut dyn Notifier,
) -> MutationOutcome<CategoryId> {
    if let Err(error) = validate_category(&draft) {
        return MutationOutcome::Invalid(error);
    }
    let message = format!("{} has been updated.", draft.name);
    let action = format!("Updated category '{}'", draft.name);
    if !workspace.categories_mut().update(id, draft) {
        warn!(category_id = %id, "edit target no longer exists");
        return MutationOutcome::NotFound(id);
    }
    info!(category_id = %id, "category updated");
    workspace.activity_mut().record(action);
    emit(notifier, Notification::info(message));
    MutationOutcome::Updated(id)
}

/// Remove category `id` unless items still reference it.
pub fn delete_category(
    workspace: &mut InventoryWorkspace,
    id: CategoryId,
    notifier: &mut dyn Notifier,
) -> MutationOutcome<CategoryId> {
    let referencing = workspace.items_in_category(id);
    if referencing > 0 {
        warn!(category_id = %id, referencing, "category delete rejected");
        emit(notifier, Notification::error(format!(
            "This category has {referencing} item(s). Delete all items first."
        )));
        return MutationOutcome::Rejected { id, referencing };
    }
    match workspace.categories_mut().remove(id) {
        Some(category) => {
            info!(category_id = %id, "category removed");
            workspace
                .activity_mut()
                .record(format!("Deleted category '{}'", category.label()));
            emit(notifier, Notification::info(format!(
                "{} has been removed from inventory.",
                category.label()
            )));
            MutationOutcome::Deleted(id)
        }
        None => {
            warn!(category_id = %id, "delete target no longer exists");
            MutationOutcome::NotFound(id)
        }
    }
}
