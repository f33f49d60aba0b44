//! Terminal rendering of the dashboard screens.
//!
//! Each screen is first flattened into plain row structs (also used for
//! snapshot tests), then laid out with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use chrono::{DateTime, Utc};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use stockroom_core::activity::relative_time;
use stockroom_core::{ActivityEntry, CategoryRow, InventoryStats, InventoryWorkspace, ItemPage};
use stockroom_model::{Alert, BadgeVariant, DirectoryUser, Route, StockStatus, UserStatus};

// =============================================================================
// ROWS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRowView {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: String,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRowView {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub items: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRowView {
    pub name: String,
    pub email: String,
    pub role: &'static str,
    pub status: &'static str,
    pub last_active: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertRowView {
    pub id: u32,
    pub message: String,
    pub kind: String,
    pub status: &'static str,
    pub date: String,
}

/// One dashboard summary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCardView {
    pub label: &'static str,
    pub value: String,
}

/// One slice of the stock distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStockView {
    pub category: String,
    pub items: usize,
    pub stock: u64,
    pub share: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRowView {
    pub user: String,
    pub role: String,
    pub action: String,
    pub when: String,
}

pub fn item_rows(page: &ItemPage<'_>, workspace: &InventoryWorkspace) -> Vec<ItemRowView> {
    page.rows
        .iter()
        .map(|item| ItemRowView {
            id: item.id.get(),
            name: item.name.clone(),
            category: workspace.category_name(item.category_id).to_string(),
            quantity: item.quantity,
            price: item.price_display(),
            status: item.stock_status().label(),
        })
        .collect()
}

pub fn category_rows(rows: &[CategoryRow<'_>]) -> Vec<CategoryRowView> {
    rows.iter()
        .map(|row| CategoryRowView {
            id: row.category.id.get(),
            name: row.category.name.clone(),
            description: row.category.description.clone(),
            items: row.item_count,
        })
        .collect()
}

pub fn user_rows(users: &[&DirectoryUser]) -> Vec<UserRowView> {
    users
        .iter()
        .map(|user| UserRowView {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.as_str(),
            status: user.status.as_str(),
            last_active: user.last_active.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect()
}

pub fn alert_rows(alerts: &[&Alert]) -> Vec<AlertRowView> {
    alerts
        .iter()
        .map(|alert| AlertRowView {
            id: alert.id,
            message: alert.message.clone(),
            kind: alert.kind.clone(),
            status: alert.status.label(),
            date: alert.date.to_string(),
        })
        .collect()
}

pub fn stat_cards(stats: &InventoryStats) -> Vec<StatCardView> {
    vec![
        StatCardView {
            label: "Total Items",
            value: stats.total_items.to_string(),
        },
        StatCardView {
            label: "Total Stock",
            value: stats.total_stock.to_string(),
        },
        StatCardView {
            label: "Low Stock",
            value: stats.low_stock.to_string(),
        },
    ]
}

pub fn category_stock_rows(stats: &InventoryStats) -> Vec<CategoryStockView> {
    stats
        .by_category
        .iter()
        .map(|row| CategoryStockView {
            category: row.name.clone(),
            items: row.items,
            stock: row.stock,
            share: format!("{:.1}%", row.share_of(stats.total_stock)),
        })
        .collect()
}

/// Feed rows with ages measured from `now`.
pub fn activity_rows(entries: &[&ActivityEntry], now: DateTime<Utc>) -> Vec<ActivityRowView> {
    entries
        .iter()
        .map(|entry| ActivityRowView {
            user: entry.user.clone(),
            role: entry.role.clone(),
            action: entry.action.clone(),
            when: relative_time(entry.timestamp, now),
        })
        .collect()
}

// =============================================================================
// TABLES
// =============================================================================

pub fn stats_table(cards: &[StatCardView]) -> Table {
    let mut table = Table::new();
    table.set_header(cards.iter().map(|card| header_cell(card.label)));
    apply_table_style(&mut table);
    table.add_row(
        cards
            .iter()
            .map(|card| Cell::new(&card.value).add_attribute(Attribute::Bold)),
    );
    for index in 0..cards.len() {
        align_column(&mut table, index, CellAlignment::Center);
    }
    table
}

pub fn category_stock_table(rows: &[CategoryStockView]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Items"),
        header_cell("Stock"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.category).add_attribute(Attribute::Bold),
            Cell::new(row.items),
            Cell::new(row.stock),
            dim_cell(&row.share),
        ]);
    }
    table
}

pub fn activity_table(rows: &[ActivityRowView]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("User"),
        header_cell("Action"),
        header_cell("Role"),
        header_cell("When"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.user).add_attribute(Attribute::Bold),
            Cell::new(&row.action),
            badge_cell(&row.role, BadgeVariant::Outline),
            dim_cell(&row.when),
        ]);
    }
    table
}

pub fn items_table(rows: &[ItemRowView]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Category"),
        header_cell("Quantity"),
        header_cell("Price"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for row in rows {
        let status = if row.status == StockStatus::LowStock.label() {
            Cell::new(row.status).fg(Color::Yellow)
        } else {
            Cell::new(row.status).fg(Color::Green)
        };
        table.add_row(vec![
            dim_cell(row.id),
            Cell::new(&row.name).add_attribute(Attribute::Bold),
            Cell::new(&row.category),
            Cell::new(row.quantity),
            Cell::new(&row.price),
            status,
        ]);
    }
    table
}

pub fn categories_table(rows: &[CategoryRowView]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Description"),
        header_cell("Items"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            dim_cell(row.id),
            Cell::new(&row.name).add_attribute(Attribute::Bold),
            Cell::new(&row.description),
            Cell::new(row.items),
        ]);
    }
    table
}

pub fn users_table(rows: &[UserRowView]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Email"),
        header_cell("Role"),
        header_cell("Status"),
        header_cell("Last active"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        let status = if row.status == UserStatus::Active.as_str() {
            Cell::new(row.status).fg(Color::Green)
        } else {
            dim_cell(row.status)
        };
        table.add_row(vec![
            Cell::new(&row.name).add_attribute(Attribute::Bold),
            Cell::new(&row.email),
            Cell::new(row.role),
            status,
            dim_cell(&row.last_active),
        ]);
    }
    table
}

/// Alerts table; badge colors follow the alert's kind and status variants.
pub fn alerts_table(alerts: &[&Alert]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Message"),
        header_cell("Type"),
        header_cell("Status"),
        header_cell("Date"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (alert, row) in alerts.iter().zip(alert_rows(alerts)) {
        table.add_row(vec![
            dim_cell(row.id),
            Cell::new(&row.message),
            badge_cell(&row.kind, alert.kind_variant()),
            badge_cell(row.status, alert.status_variant()),
            dim_cell(&row.date),
        ]);
    }
    table
}

pub fn routes_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Path"),
        header_cell("Title"),
        header_cell("Layout"),
        header_cell("Redirect"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for route in Route::ALL {
        table.add_row(vec![
            Cell::new(route.path()).fg(Color::Blue),
            Cell::new(route.title()),
            if route.uses_layout() {
                Cell::new("yes")
            } else {
                dim_cell("no")
            },
            route
                .redirect()
                .map_or_else(|| dim_cell("-"), |target| Cell::new(target.path())),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn badge_cell(label: &str, variant: BadgeVariant) -> Cell {
    let cell = Cell::new(label);
    match variant {
        BadgeVariant::Default => cell.fg(Color::Green).add_attribute(Attribute::Bold),
        BadgeVariant::Secondary => cell.fg(Color::DarkGrey),
        BadgeVariant::Destructive => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        BadgeVariant::Outline => cell,
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
