//! Headless list controllers for the Stockroom dashboard.
//!
//! The inventory and category screens share one pattern: an in-memory
//! [`EntityStore`], a pure [`query`] projection (filter, sort, paginate) and
//! a set of [`mutation`] operations that validate input, enforce referential
//! integrity and report every terminal action through a [`Notifier`].
//!
//! Both stores live in a single [`InventoryWorkspace`] so integrity checks
//! always see the same data the pages render.
//!
//! # Example
//!
//! ```
//! use stockroom_core::{InventoryPage, InventoryWorkspace, NotificationLog};
//! use stockroom_model::{CategoryDraft, ItemDraft};
//!
//! let mut workspace = InventoryWorkspace::new();
//! let mut log = NotificationLog::default();
//! let category = stockroom_core::mutation::add_category(
//!     &mut workspace,
//!     CategoryDraft::new("Building", "Cement, sand, bricks"),
//!     &mut log,
//! )
//! .created()
//! .unwrap();
//!
//! let mut page = InventoryPage::new();
//! page.open_add(&workspace);
//! page.submit(&mut workspace, ItemDraft::named("Cement").with_category(category), &mut log);
//!
//! assert_eq!(page.view(&workspace).rows.len(), 1);
//! assert_eq!(log.len(), 2);
//! ```

pub mod activity;
pub mod alerts;
pub mod collate;
pub mod error;
pub mod mutation;
pub mod notify;
pub mod page;
pub mod query;
pub mod stats;
pub mod store;
pub mod users;
pub mod workspace;

pub use activity::{ActivityEntry, ActivityLog, Actor};
pub use alerts::AlertCenter;
pub use error::{CoreError, Result, ValidationError};
pub use mutation::MutationOutcome;
pub use notify::{Notification, NotificationKind, NotificationLog, Notifier, emit};
pub use page::{CategoriesPage, DeleteState, FormState, InventoryPage};
pub use query::{CategoryQuery, CategoryRow, ItemPage, ItemQuery, PAGE_SIZE};
pub use stats::{CategoryStock, InventoryStats};
pub use store::EntityStore;
pub use users::UserQuery;
pub use workspace::{InventoryFixture, InventoryWorkspace};
