use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, info_span, warn};

use stockroom_core::users::sample_users;
use stockroom_core::{
    Actor, AlertCenter, CategoriesPage, InventoryPage, InventoryWorkspace, MutationOutcome,
    NotificationKind, NotificationLog, UserQuery,
};
use stockroom_model::{CategoryId, ItemId, Route};
use stockroom_session::{AuthSession, HttpAuthClient, SessionSettings};

use crate::cli::{
    ActivityArgs, ActorArgs, AddItemArgs, AlertsArgs, CategoriesArgs, DeleteArgs, FixtureArgs,
    ItemsArgs, UsersArgs, WhoamiArgs,
};
use stockroom_cli::render::{
    activity_rows, activity_table, alerts_table, categories_table, category_rows,
    category_stock_rows, category_stock_table, item_rows, items_table, routes_table, stat_cards,
    stats_table, user_rows, users_table,
};

/// How a command ended when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    /// The request was understood but refused (validation, integrity,
    /// missing target).
    Refused,
}

pub fn run_items(args: &ItemsArgs) -> Result<Status> {
    let workspace = load_workspace(&args.fixture)?;
    let mut page = InventoryPage::new();
    page.set_search(&workspace, args.search.as_str());
    page.set_category_filter(&workspace, args.category);
    page.set_sort(args.sort);
    page.go_to_page(&workspace, args.page);

    let view = page.view(&workspace);
    if view.is_empty() {
        println!("{}", view.summary());
        return Ok(Status::Done);
    }
    println!("{}", items_table(&item_rows(&view, &workspace)));
    println!("{}", view.summary());
    if view.is_paginated() {
        println!("Page {} of {}", view.current_page, view.total_pages);
    }
    Ok(Status::Done)
}

pub fn run_add_item(args: &AddItemArgs) -> Result<Status> {
    let mut workspace = load_workspace(&args.fixture)?;
    apply_actor(&mut workspace, &args.actor);
    let mut page = InventoryPage::new();
    let mut log = NotificationLog::default();

    let mut draft = page.open_add(&workspace);
    draft.name.clone_from(&args.name);
    draft.description.clone_from(&args.description);
    draft.supplier.clone_from(&args.supplier);
    draft.quantity = args.quantity;
    draft.price = args.price;
    if let Some(category) = args.category {
        draft.category_id = Some(category);
    }

    let outcome = page.submit(&mut workspace, draft, &mut log);
    print_notifications(&mut log);
    match outcome {
        MutationOutcome::Created(id) => {
            info!(item_id = %id, "item created from command line");
            save_if_requested(&workspace, &args.fixture, args.save)?;
            Ok(Status::Done)
        }
        MutationOutcome::Invalid(error) => {
            eprintln!("error: {}", error.user_message());
            Ok(Status::Refused)
        }
        other => {
            warn!(?other, "unexpected add outcome");
            Ok(Status::Refused)
        }
    }
}

pub fn run_delete_item(args: &DeleteArgs) -> Result<Status> {
    let id = ItemId::new(args.id).context("parse item id")?;
    let mut workspace = load_workspace(&args.fixture)?;
    apply_actor(&mut workspace, &args.actor);
    let mut page = InventoryPage::new();
    let mut log = NotificationLog::default();

    page.request_delete(id);
    if args.cancel {
        page.cancel_delete();
    }
    let outcome = page.confirm_delete(&mut workspace, &mut log);
    print_notifications(&mut log);
    finish_delete(outcome, &workspace, args, "item")
}

pub fn run_categories(args: &CategoriesArgs) -> Result<Status> {
    let workspace = load_workspace(&args.fixture)?;
    let mut page = CategoriesPage::new();
    page.set_search(args.search.as_str());
    let rows = page.view(&workspace);
    if rows.is_empty() {
        println!("No categories found.");
    } else {
        println!("{}", categories_table(&category_rows(&rows)));
    }
    Ok(Status::Done)
}

pub fn run_delete_category(args: &DeleteArgs) -> Result<Status> {
    let id = CategoryId::new(args.id).context("parse category id")?;
    let mut workspace = load_workspace(&args.fixture)?;
    apply_actor(&mut workspace, &args.actor);
    let mut page = CategoriesPage::new();
    let mut log = NotificationLog::default();

    page.request_delete(id);
    if args.cancel {
        page.cancel_delete();
    }
    let outcome = page.confirm_delete(&mut workspace, &mut log);
    print_notifications(&mut log);
    finish_delete(outcome, &workspace, args, "category")
}

pub fn run_dashboard(args: &FixtureArgs) -> Result<Status> {
    let workspace = load_workspace(&args.fixture)?;
    let stats = workspace.stats();
    println!("{}", stats_table(&stat_cards(&stats)));
    if stats.by_category.is_empty() {
        println!("No categories found.");
    } else {
        println!("Stock Distribution by Category");
        println!("{}", category_stock_table(&category_stock_rows(&stats)));
    }
    Ok(Status::Done)
}

pub fn run_activity(args: &ActivityArgs) -> Result<Status> {
    let workspace = load_workspace(&args.fixture)?;
    let recent = workspace.activity().recent(args.limit);
    if recent.is_empty() {
        println!("No recent activity.");
    } else {
        println!("{}", activity_table(&activity_rows(&recent, Utc::now())));
    }
    Ok(Status::Done)
}

pub fn run_users(args: &UsersArgs) -> Result<Status> {
    let users = sample_users();
    let query = UserQuery {
        search: args.search.clone(),
        status: args.status,
        role: args.role,
    };
    let visible = query.apply(&users);
    if visible.is_empty() {
        println!("No users found.");
    } else {
        println!("{}", users_table(&user_rows(&visible)));
    }
    Ok(Status::Done)
}

pub fn run_alerts(args: &AlertsArgs) -> Result<Status> {
    let mut center = AlertCenter::with_samples();
    let mut log = NotificationLog::default();
    let mut status = Status::Done;
    if let Some(id) = args.resolve {
        if !center.resolve(id, &mut log) {
            eprintln!("error: alert {id} is not an active alert");
            status = Status::Refused;
        }
        print_notifications(&mut log);
    }
    center.set_search(args.search.as_str());
    let visible = center.visible();
    if visible.is_empty() {
        println!("No alerts found.");
    } else {
        println!("{}", alerts_table(&visible));
    }
    println!("{} active alert(s)", center.active_count());
    Ok(status)
}

pub fn run_whoami(args: &WhoamiArgs) -> Result<Status> {
    let mut settings = SessionSettings::load();
    if let Some(url) = &args.api_url {
        settings.override_api_url(url);
    }
    if let Some(cookie) = &args.cookie {
        settings.cookie = Some(cookie.clone());
    }
    let span = info_span!("whoami", api_url = %settings.api_url);
    let _guard = span.enter();

    let client = HttpAuthClient::new(&settings).context("build HTTP client")?;
    let mut session = AuthSession::new();
    session.refresh(&client, Route::Dashboard.path());
    match (session.user(), session.last_error()) {
        (Some(user), _) => {
            println!("Signed in as {} <{}>", user.name, user.email);
            println!("Role: {}", user.role);
            if let Some(company) = &user.company {
                println!("Company: {company}");
            }
            Ok(Status::Done)
        }
        (None, Some(error)) => {
            println!("Not signed in: {}", error.user_message());
            Ok(Status::Refused)
        }
        (None, None) => {
            println!("Not signed in.");
            Ok(Status::Done)
        }
    }
}

pub fn run_routes() -> Result<Status> {
    println!("{}", routes_table());
    Ok(Status::Done)
}

fn load_workspace(path: &Path) -> Result<InventoryWorkspace> {
    InventoryWorkspace::load(path)
        .with_context(|| format!("load inventory fixture {}", path.display()))
}

fn apply_actor(workspace: &mut InventoryWorkspace, args: &ActorArgs) {
    if let Some(name) = &args.actor {
        workspace
            .activity_mut()
            .set_actor(Actor::new(name.as_str(), args.actor_role.as_str()));
    }
}

fn save_if_requested(workspace: &InventoryWorkspace, path: &Path, save: bool) -> Result<()> {
    if save {
        workspace
            .save(path)
            .with_context(|| format!("save inventory fixture {}", path.display()))?;
        println!("Saved {}", path.display());
    }
    Ok(())
}

fn finish_delete<Id: std::fmt::Display>(
    outcome: MutationOutcome<Id>,
    workspace: &InventoryWorkspace,
    args: &DeleteArgs,
    kind: &str,
) -> Result<Status> {
    match outcome {
        MutationOutcome::Deleted(_) => {
            save_if_requested(workspace, &args.fixture, args.save)?;
            Ok(Status::Done)
        }
        MutationOutcome::NothingPending => {
            println!("Delete cancelled.");
            Ok(Status::Done)
        }
        MutationOutcome::NotFound(id) => {
            eprintln!("error: no {kind} with id {id}");
            Ok(Status::Refused)
        }
        _ => Ok(Status::Refused),
    }
}

fn print_notifications(log: &mut NotificationLog) {
    for notification in log.drain() {
        match notification.kind {
            NotificationKind::Error => eprintln!("{notification}"),
            NotificationKind::Success | NotificationKind::Info => println!("{notification}"),
        }
    }
}
