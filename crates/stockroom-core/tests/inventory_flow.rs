//! End-to-end flows through the inventory and categories pages.

use rust_decimal::Decimal;
use stockroom_core::{
    CategoriesPage, InventoryFixture, InventoryPage, InventoryWorkspace, MutationOutcome,
    NotificationKind, NotificationLog, ValidationError,
};
use stockroom_model::{
    Category, CategoryDraft, CategoryFilter, CategoryId, Item, ItemDraft, ItemId, SortKey,
};

fn category_id(value: u32) -> CategoryId {
    CategoryId::new(value).unwrap()
}

fn item_id(value: u32) -> ItemId {
    ItemId::new(value).unwrap()
}

fn seeded() -> InventoryWorkspace {
    let categories = vec![
        Category::new(category_id(1), CategoryDraft::new("Building Materials", "Cement, sand")),
        Category::new(category_id(2), CategoryDraft::new("Paint", "Coatings")),
        Category::new(category_id(3), CategoryDraft::new("Tools", "Hand tools")),
    ];
    let items = vec![Item::new(
        item_id(1),
        category_id(3),
        ItemDraft::named("Hammer")
            .with_quantity(4)
            .with_price(Decimal::new(1250, 2)),
    )];
    InventoryWorkspace::from_fixture(InventoryFixture { categories, items, ..InventoryFixture::default() }).unwrap()
}

#[test]
fn adding_second_item_gets_next_id() {
    let mut ws = InventoryWorkspace::new();
    let mut log = NotificationLog::default();
    let mut categories = CategoriesPage::new();
    categories.open_add();
    let building = categories
        .submit(&mut ws, CategoryDraft::new("Building", ""), &mut log)
        .created()
        .unwrap();

    let mut page = InventoryPage::new();
    page.open_add(&ws);
    page.submit(&mut ws, ItemDraft::named("Cement").with_category(building), &mut log);
    page.open_add(&ws);
    let outcome = page.submit(&mut ws, ItemDraft::named("Paint").with_category(building), &mut log);

    assert_eq!(outcome, MutationOutcome::Created(item_id(2)));
    assert_eq!(
        log.last().unwrap().message,
        "Paint has been added to inventory."
    );
    assert_eq!(log.last().unwrap().kind, NotificationKind::Success);
}

#[test]
fn twelve_items_sorted_by_quantity_split_over_two_pages() {
    let mut ws = seeded();
    let mut log = NotificationLog::default();
    let mut page = InventoryPage::new();
    for quantity in (1..=11).rev() {
        page.open_add(&ws);
        page.submit(
            &mut ws,
            ItemDraft::named(format!("Bolt {quantity}"))
                .with_category(category_id(1))
                .with_quantity(quantity * 10),
            &mut log,
        );
    }
    assert_eq!(ws.items().len(), 12);

    page.set_sort(SortKey::Quantity);
    let first = page.view(&ws);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.rows.len(), 10);
    assert_eq!(first.rows[0].name, "Hammer");
    assert!(first.rows.windows(2).all(|w| w[0].quantity <= w[1].quantity));

    page.next_page(&ws);
    let second = page.view(&ws);
    assert_eq!(second.current_page, 2);
    assert_eq!(second.rows.len(), 2);
    assert_eq!(second.rows[1].name, "Bolt 11");
    assert_eq!(second.summary(), "Showing 11 to 12 of 12 items");
}

#[test]
fn deleting_referenced_category_is_rejected() {
    let mut ws = seeded();
    let mut log = NotificationLog::default();
    let mut page = CategoriesPage::new();

    page.request_delete(category_id(3));
    let outcome = page.confirm_delete(&mut ws, &mut log);

    assert_eq!(
        outcome,
        MutationOutcome::Rejected {
            id: category_id(3),
            referencing: 1
        }
    );
    assert_eq!(page.pending_delete(), None);
    assert_eq!(ws.categories().len(), 3);
    let last = log.last().unwrap();
    assert_eq!(last.kind, NotificationKind::Error);
    assert_eq!(last.message, "This category has 1 item(s). Delete all items first.");
}

#[test]
fn category_can_be_deleted_once_its_items_are_gone() {
    let mut ws = seeded();
    let mut log = NotificationLog::default();
    let mut items = InventoryPage::new();
    let mut categories = CategoriesPage::new();

    items.request_delete(item_id(1));
    assert_eq!(
        items.confirm_delete(&mut ws, &mut log),
        MutationOutcome::Deleted(item_id(1))
    );

    categories.request_delete(category_id(3));
    assert_eq!(
        categories.confirm_delete(&mut ws, &mut log),
        MutationOutcome::Deleted(category_id(3))
    );
    assert!(ws.categories().get(category_id(3)).is_none());
    assert_eq!(
        log.last().unwrap().message,
        "Tools has been removed from inventory."
    );
}

#[test]
fn invalid_submit_keeps_form_open_and_is_silent() {
    let mut ws = seeded();
    let mut log = NotificationLog::default();
    let mut page = InventoryPage::new();
    page.open_add(&ws);

    let outcome = page.submit(&mut ws, ItemDraft::named("   "), &mut log);

    assert_eq!(outcome, MutationOutcome::Invalid(ValidationError::MissingName));
    assert!(page.form().is_open());
    assert!(log.is_empty());
}

#[test]
fn edit_keeps_id_and_cancelled_delete_changes_nothing() {
    let mut ws = seeded();
    let mut log = NotificationLog::default();
    let mut page = InventoryPage::new();

    let draft = page.open_edit(&ws, item_id(1)).unwrap();
    let outcome = page.submit(
        &mut ws,
        ItemDraft {
            name: "Claw hammer".to_string(),
            ..draft
        },
        &mut log,
    );
    assert_eq!(outcome, MutationOutcome::Updated(item_id(1)));
    assert!(!page.form().is_open());
    assert_eq!(ws.items().get(item_id(1)).unwrap().name, "Claw hammer");
    assert_eq!(log.last().unwrap().kind, NotificationKind::Info);

    page.request_delete(item_id(1));
    page.cancel_delete();
    assert_eq!(
        page.confirm_delete(&mut ws, &mut log),
        MutationOutcome::NothingPending
    );
    assert_eq!(ws.items().len(), 1);
}

#[test]
fn narrowing_filter_clamps_stale_page() {
    let mut ws = seeded();
    let mut log = NotificationLog::default();
    let mut page = InventoryPage::new();
    for n in 0..15 {
        page.open_add(&ws);
        page.submit(
            &mut ws,
            ItemDraft::named(format!("Brick {n:02}")).with_category(category_id(1)),
            &mut log,
        );
    }
    page.go_to_page(&ws, 2);
    assert_eq!(page.view(&ws).current_page, 2);

    page.set_category_filter(&ws, CategoryFilter::Only(category_id(3)));
    let view = page.view(&ws);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_count, 1);
    assert!(!view.is_paginated());
}

#[test]
fn fixture_round_trips_through_workspace() {
    let ws = seeded();
    let json = serde_json::to_string(&ws.to_fixture()).unwrap();
    let reloaded = InventoryWorkspace::from_fixture(serde_json::from_str(&json).unwrap()).unwrap();
    assert_eq!(reloaded.items().all(), ws.items().all());
    assert_eq!(reloaded.categories().all(), ws.categories().all());
}
