//! List page controllers for the inventory and category screens.
//!
//! # Architecture
//!
//! A page owns only transient view state: the query, the form state and the
//! pending delete. Records live in the shared [`InventoryWorkspace`], which
//! every operation borrows for the duration of one call.
//!
//! Two independent two-phase state machines run on each page:
//!
//! - form: `Closed -> Add | Edit(id) -> Closed`
//! - delete: `Idle -> Pending(id) -> Idle`
//!
//! A delete only mutates on [`InventoryPage::confirm_delete`]; cancelling
//! clears the pending target without touching the workspace.

use stockroom_model::{CategoryDraft, CategoryFilter, CategoryId, ItemDraft, ItemId, SortKey};
use tracing::debug;

use crate::mutation::{self, MutationOutcome};
use crate::notify::Notifier;
use crate::query::{
    CategoryQuery, CategoryRow, ItemPage, ItemQuery, PAGE_SIZE, clamp_page, total_pages,
};
use crate::workspace::InventoryWorkspace;

/// Add/edit form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState<Id> {
    Closed,
    Add,
    Edit(Id),
}

impl<Id> Default for FormState<Id> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<Id> FormState<Id> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Delete confirmation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteState<Id> {
    Idle,
    Pending(Id),
}

impl<Id> Default for DeleteState<Id> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Close the form unless the outcome asks the user to fix their input.
fn settle_form<Id>(form: &mut FormState<Id>, outcome: &MutationOutcome<Id>) {
    if !matches!(outcome, MutationOutcome::Invalid(_)) {
        *form = FormState::Closed;
    }
}

// =============================================================================
// INVENTORY PAGE
// =============================================================================

/// Controller behind the inventory items screen.
#[derive(Debug, Clone, Default)]
pub struct InventoryPage {
    query: ItemQuery,
    form: FormState<ItemId>,
    delete: DeleteState<ItemId>,
}

impl InventoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &ItemQuery {
        &self.query
    }

    pub fn form(&self) -> FormState<ItemId> {
        self.form
    }

    pub fn pending_delete(&self) -> Option<ItemId> {
        match self.delete {
            DeleteState::Pending(id) => Some(id),
            DeleteState::Idle => None,
        }
    }

    /// Current page of the table.
    pub fn view<'a>(&self, workspace: &'a InventoryWorkspace) -> ItemPage<'a> {
        self.query.run(workspace.items().all())
    }

    pub fn set_search(&mut self, workspace: &InventoryWorkspace, term: impl Into<String>) {
        self.query.search = term.into();
        self.clamp(workspace);
    }

    pub fn set_category_filter(&mut self, workspace: &InventoryWorkspace, filter: CategoryFilter) {
        self.query.category = filter;
        self.clamp(workspace);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    /// Jump to a 1-based page, clamped into range.
    pub fn go_to_page(&mut self, workspace: &InventoryWorkspace, page: usize) {
        self.query.page = page;
        self.clamp(workspace);
    }

    pub fn next_page(&mut self, workspace: &InventoryWorkspace) {
        self.go_to_page(workspace, self.query.page.saturating_add(1));
    }

    pub fn previous_page(&mut self, workspace: &InventoryWorkspace) {
        self.go_to_page(workspace, self.query.page.saturating_sub(1));
    }

    /// Keep the stored page inside `[1, max(1, total_pages)]`.
    fn clamp(&mut self, workspace: &InventoryWorkspace) {
        let matching = self.query.filter(workspace.items().all()).len();
        let clamped = clamp_page(self.query.page, total_pages(matching, PAGE_SIZE));
        if clamped != self.query.page {
            debug!(from = self.query.page, to = clamped, "inventory page clamped");
            self.query.page = clamped;
        }
    }

    /// Open the form for a new item, pre-filled with the first category.
    pub fn open_add(&mut self, workspace: &InventoryWorkspace) -> ItemDraft {
        self.form = FormState::Add;
        ItemDraft::blank(workspace.categories().all())
    }

    /// Open the form on an existing item. Returns `None` if it is gone.
    pub fn open_edit(&mut self, workspace: &InventoryWorkspace, id: ItemId) -> Option<ItemDraft> {
        let item = workspace.items().get(id)?;
        self.form = FormState::Edit(id);
        Some(ItemDraft::from(item))
    }

    pub fn close_form(&mut self) {
        self.form = FormState::Closed;
    }

    /// Save the open form.
    ///
    /// Invalid input keeps the form open; every other outcome closes it.
    pub fn submit(
        &mut self,
        workspace: &mut InventoryWorkspace,
        draft: ItemDraft,
        notifier: &mut dyn Notifier,
    ) -> MutationOutcome<ItemId> {
        let outcome = match self.form {
            FormState::Closed => return MutationOutcome::NothingPending,
            FormState::Add => mutation::add_item(workspace, draft, notifier),
            FormState::Edit(id) => mutation::update_item(workspace, id, draft, notifier),
        };
        settle_form(&mut self.form, &outcome);
        self.clamp(workspace);
        outcome
    }

    /// First step of a delete: remember the target until confirmed.
    pub fn request_delete(&mut self, id: ItemId) {
        self.delete = DeleteState::Pending(id);
    }

    pub fn cancel_delete(&mut self) {
        self.delete = DeleteState::Idle;
    }

    /// Second step of a delete: remove the pending item.
    pub fn confirm_delete(
        &mut self,
        workspace: &mut InventoryWorkspace,
        notifier: &mut dyn Notifier,
    ) -> MutationOutcome<ItemId> {
        let DeleteState::Pending(id) = std::mem::replace(&mut self.delete, DeleteState::Idle) else {
            return MutationOutcome::NothingPending;
        };
        let outcome = mutation::delete_item(workspace, id, notifier);
        self.clamp(workspace);
        outcome
    }
}

// =============================================================================
// CATEGORIES PAGE
// =============================================================================

/// Controller behind the categories screen.
#[derive(Debug, Clone, Default)]
pub struct CategoriesPage {
    query: CategoryQuery,
    form: FormState<CategoryId>,
    delete: DeleteState<CategoryId>,
}

impl CategoriesPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &CategoryQuery {
        &self.query
    }

    pub fn form(&self) -> FormState<CategoryId> {
        self.form
    }

    pub fn pending_delete(&self) -> Option<CategoryId> {
        match self.delete {
            DeleteState::Pending(id) => Some(id),
            DeleteState::Idle => None,
        }
    }

    /// Category cards with their item counts.
    pub fn view<'a>(&self, workspace: &'a InventoryWorkspace) -> Vec<CategoryRow<'a>> {
        self.query
            .run(workspace.categories().all(), workspace.items().all())
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search = term.into();
    }

    pub fn open_add(&mut self) -> CategoryDraft {
        self.form = FormState::Add;
        CategoryDraft::default()
    }

    pub fn open_edit(
        &mut self,
        workspace: &InventoryWorkspace,
        id: CategoryId,
    ) -> Option<CategoryDraft> {
        let category = workspace.categories().get(id)?;
        self.form = FormState::Edit(id);
        Some(CategoryDraft::from(category))
    }

    pub fn close_form(&mut self) {
        self.form = FormState::Closed;
    }

    pub fn submit(
        &mut self,
        workspace: &mut InventoryWorkspace,
        draft: CategoryDraft,
        notifier: &mut dyn Notifier,
    ) -> MutationOutcome<CategoryId> {
        let outcome = match self.form {
            FormState::Closed => return MutationOutcome::NothingPending,
            FormState::Add => mutation::add_category(workspace, draft, notifier),
            FormState::Edit(id) => mutation::update_category(workspace, id, draft, notifier),
        };
        settle_form(&mut self.form, &outcome);
        outcome
    }

    pub fn request_delete(&mut self, id: CategoryId) {
        self.delete = DeleteState::Pending(id);
    }

    pub fn cancel_delete(&mut self) {
        self.delete = DeleteState::Idle;
    }

    /// Delete the pending category, or report how many items block it.
    ///
    /// The confirmation closes either way.
    pub fn confirm_delete(
        &mut self,
        workspace: &mut InventoryWorkspace,
        notifier: &mut dyn Notifier,
    ) -> MutationOutcome<CategoryId> {
        let DeleteState::Pending(id) = std::mem::replace(&mut self.delete, DeleteState::Idle) else {
            return MutationOutcome::NothingPending;
        };
        mutation::delete_category(workspace, id, notifier)
    }
}
