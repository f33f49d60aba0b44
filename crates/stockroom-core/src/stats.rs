//! Dashboard summary figures.

use stockroom_model::CategoryId;

use crate::workspace::{InventoryWorkspace, UNKNOWN_CATEGORY};

/// Stock held under one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStock {
    /// `None` for the bucket of items whose category no longer exists.
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub items: usize,
    pub stock: u64,
}

impl CategoryStock {
    /// Percentage of `total` this category holds, 0 when `total` is 0.
    pub fn share_of(&self, total: u64) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.stock as f64 * 100.0 / total as f64
        }
    }
}

/// Totals shown on the dashboard cards and the distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryStats {
    pub total_items: usize,
    /// Sum of every item's quantity.
    pub total_stock: u64,
    /// Items at or below their low-stock threshold.
    pub low_stock: usize,
    /// One row per category in store order, empty categories included.
    /// Items with a dangling category are pooled in a trailing
    /// [`UNKNOWN_CATEGORY`] row that only appears when non-empty.
    pub by_category: Vec<CategoryStock>,
}

impl InventoryStats {
    pub fn compute(workspace: &InventoryWorkspace) -> Self {
        let mut by_category: Vec<CategoryStock> = workspace
            .categories()
            .all()
            .iter()
            .map(|category| CategoryStock {
                category_id: Some(category.id),
                name: category.name.clone(),
                items: 0,
                stock: 0,
            })
            .collect();
        let mut unknown = CategoryStock {
            category_id: None,
            name: UNKNOWN_CATEGORY.to_string(),
            items: 0,
            stock: 0,
        };

        let mut stats = Self::default();
        for item in workspace.items().all() {
            stats.total_items += 1;
            stats.total_stock += u64::from(item.quantity);
            if item.is_low_stock() {
                stats.low_stock += 1;
            }
            let bucket = by_category
                .iter_mut()
                .find(|row| row.category_id == Some(item.category_id))
                .unwrap_or(&mut unknown);
            bucket.items += 1;
            bucket.stock += u64::from(item.quantity);
        }
        if unknown.items > 0 {
            by_category.push(unknown);
        }
        stats.by_category = by_category;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::InventoryFixture;

    const FIXTURE: &str = r#"{
        "categories": [
            {"id": 1, "name": "Building", "description": ""},
            {"id": 2, "name": "Paint", "description": ""},
            {"id": 3, "name": "Tools", "description": ""}
        ],
        "items": [
            {"id": 1, "name": "Cement", "quantity": 5, "price": 10, "categoryId": 1, "lowStockThreshold": 5},
            {"id": 2, "name": "Sand", "quantity": 40, "price": 3, "categoryId": 1, "lowStockThreshold": 5},
            {"id": 3, "name": "Primer", "quantity": 2, "price": 7, "categoryId": 2, "lowStockThreshold": 3},
            {"id": 4, "name": "Varnish", "quantity": 8, "price": 4.5, "categoryId": 9, "lowStockThreshold": 2}
        ]
    }"#;

    fn stats() -> InventoryStats {
        let fixture: InventoryFixture = serde_json::from_str(FIXTURE).unwrap();
        InventoryWorkspace::from_fixture(fixture).unwrap().stats()
    }

    #[test]
    fn totals_cover_every_item() {
        let stats = stats();
        assert_eq!(stats.total_items, 4);
        assert_eq!(stats.total_stock, 55);
        assert_eq!(stats.low_stock, 2);
    }

    #[test]
    fn distribution_keeps_category_order_and_pools_dangling_items() {
        let stats = stats();
        let rows: Vec<(&str, usize, u64)> = stats
            .by_category
            .iter()
            .map(|row| (row.name.as_str(), row.items, row.stock))
            .collect();
        assert_eq!(
            rows,
            vec![("Building", 2, 45), ("Paint", 1, 2), ("Tools", 0, 0), ("Unknown", 1, 8)]
        );
        assert_eq!(stats.by_category[3].category_id, None);
        let total: u64 = stats.by_category.iter().map(|row| row.stock).sum();
        assert_eq!(total, stats.total_stock);
    }

    #[test]
    fn empty_workspace_has_zero_shares() {
        let stats = InventoryWorkspace::new().stats();
        assert_eq!(stats, InventoryStats::default());
        let row = CategoryStock {
            category_id: None,
            name: UNKNOWN_CATEGORY.to_string(),
            items: 0,
            stock: 0,
        };
        assert_eq!(row.share_of(0), 0.0);
    }
}
