//! Seed the database with a small demo layout

use zandar_core::ops::{page_ops, widget_ops};
use zandar_core::{apply, Command, Store};

use super::{open_database, CliResult};

pub fn execute(db_path: &str) -> CliResult {
    let mut database = open_database(db_path)?;
    let mut store = database.load()?;

    store = seed_store(&store)?;

    database.persist(&store)?;
    let (pages, widgets, links) = store.counts();
    println!("Seeded {pages} pages, {widgets} widgets, {links} links");
    Ok(())
}

fn seed_store(store: &Store) -> Result<Store, zandar_core::ZandarError> {
    let mut next = apply(
        store,
        Command::PageCreate {
            title: "Home".to_string(),
        },
    )?;
    let home = last_page_id(&next);

    next = apply(
        &next,
        Command::PageCreate {
            title: "Work".to_string(),
        },
    )?;
    let work = last_page_id(&next);

    next = apply(
        &next,
        Command::WidgetCreate {
            page_id: home,
            column_id: 1,
            title: Some("Reading".to_string()),
        },
    )?;
    let reading = last_widget_id(&next, home, 1);

    next = apply(
        &next,
        Command::WidgetCreate {
            page_id: home,
            column_id: 2,
            title: Some("Tools".to_string()),
        },
    )?;
    let tools = last_widget_id(&next, home, 2);

    next = apply(
        &next,
        Command::WidgetCreate {
            page_id: work,
            column_id: 1,
            title: None,
        },
    )?;

    next = apply(
        &next,
        Command::LinkCreate {
            widget_id: reading,
            name: "Hacker News".to_string(),
            url: "news.ycombinator.com".to_string(),
        },
    )?;
    next = apply(
        &next,
        Command::LinkCreate {
            widget_id: reading,
            name: "Lobsters".to_string(),
            url: "https://lobste.rs".to_string(),
        },
    )?;
    next = apply(
        &next,
        Command::LinkCreate {
            widget_id: tools,
            name: "Crates".to_string(),
            url: "https://crates.io".to_string(),
        },
    )?;

    Ok(next)
}

fn last_page_id(store: &Store) -> i64 {
    page_ops::list_pages_ordered(store)
        .iter()
        .map(|p| p.id)
        .max()
        .unwrap_or_default()
}

fn last_widget_id(store: &Store, page_id: i64, column_id: i64) -> i64 {
    widget_ops::widgets_in_column_ordered(store, page_id, column_id)
        .iter()
        .map(|w| w.id)
        .max()
        .unwrap_or_default()
}
