//! Inventory items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::entity::Entity;
use crate::ids::{CategoryId, ItemId};

/// Low-stock threshold pre-filled on a new item form.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// A stocked inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: u32,
    /// Unit price. Serialized as a JSON number when exact, else a string.
    #[serde(with = "crate::price")]
    pub price: Decimal,
    #[serde(default)]
    pub supplier: String,
    /// Non-owning reference to the item's category.
    pub category_id: CategoryId,
    pub low_stock_threshold: u32,
}

/// Stock badge shown next to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    LowStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
        }
    }
}

impl Item {
    /// Build a stored item from a validated draft.
    pub fn new(id: ItemId, category_id: CategoryId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            quantity: draft.quantity,
            price: draft.price,
            supplier: draft.supplier,
            category_id,
            low_stock_threshold: draft.low_stock_threshold,
        }
    }

    /// Stock is low when the quantity is at or below the threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.low_stock_threshold
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.is_low_stock() {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Price rendered with two decimals and a currency sign.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price.round_dp(2))
    }
}

impl Entity for Item {
    type Id = ItemId;
    type Patch = ItemDraft;

    fn id(&self) -> ItemId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn apply(&mut self, patch: ItemDraft) {
        self.name = patch.name;
        self.description = patch.description;
        self.quantity = patch.quantity;
        self.price = patch.price;
        self.supplier = patch.supplier;
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        self.low_stock_threshold = patch.low_stock_threshold;
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

/// Field values collected by the item form.
///
/// The category is optional because the form can be submitted before any
/// category exists; such drafts fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub quantity: u32,
    #[serde(with = "crate::price")]
    pub price: Decimal,
    pub supplier: String,
    pub category_id: Option<CategoryId>,
    pub low_stock_threshold: u32,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            quantity: 0,
            price: Decimal::ZERO,
            supplier: String::new(),
            category_id: None,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl ItemDraft {
    /// Blank form with the first known category pre-selected.
    pub fn blank(categories: &[Category]) -> Self {
        Self {
            category_id: categories.first().map(|category| category.id),
            ..Self::default()
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            price: item.price,
            supplier: item.supplier.clone(),
            category_id: Some(item.category_id),
            low_stock_threshold: item.low_stock_threshold,
        }
    }
}
