//! Data model for the Stockroom inventory dashboard.
//!
//! Records shown on the dashboard screens (inventory items, categories,
//! users, alerts), the identifiers that link them, and the small view-state
//! vocabulary (sort keys, filters, routes) shared by the list controllers.

pub mod alert;
pub mod category;
pub mod entity;
pub mod error;
pub mod ids;
pub mod item;
mod price;
pub mod route;
pub mod user;
pub mod view;

pub use alert::{Alert, AlertStatus, BadgeVariant};
pub use category::{Category, CategoryDraft};
pub use entity::{Entity, EntityId};
pub use error::{ModelError, Result};
pub use ids::{CategoryId, ItemId};
pub use item::{Item, ItemDraft, StockStatus};
pub use route::Route;
pub use user::{DirectoryUser, SessionUser, UserRole, UserStatus};
pub use view::{CategoryFilter, Filter, SortKey};
