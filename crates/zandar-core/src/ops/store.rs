use std::collections::HashMap;

use crate::errors::{Result, ZandarError};
use crate::model::{Link, Page, Widget};

/// In-memory store for Pages, Widgets and Links
///
/// HashMap-based table per record type plus an auto-increment counter per
/// table, mirroring the durable store's id assignment. Not thread-safe -
/// designed for single-threaded use behind the `apply()` boundary, which is
/// what makes multi-record mutations all-or-nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    /// Map of Page ID to Page
    pub(crate) pages: HashMap<i64, Page>,
    /// Map of Widget ID to Widget
    pub(crate) widgets: HashMap<i64, Widget>,
    /// Map of Link ID to Link
    pub(crate) links: HashMap<i64, Link>,

    next_page_id: i64,
    next_widget_id: i64,
    next_link_id: i64,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            widgets: HashMap::new(),
            links: HashMap::new(),
            next_page_id: 1,
            next_widget_id: 1,
            next_link_id: 1,
        }
    }

    // ===== Pages =====

    /// Get a Page by ID
    ///
    /// # Errors
    ///
    /// Returns `PageNotFound` if no page has this id.
    pub fn get_page(&self, id: i64) -> Result<&Page> {
        self.pages
            .get(&id)
            .ok_or(ZandarError::PageNotFound { page_id: id })
    }

    /// Get a mutable reference to a Page by ID
    ///
    /// # Errors
    ///
    /// Returns `PageNotFound` if no page has this id.
    pub fn get_page_mut(&mut self, id: i64) -> Result<&mut Page> {
        self.pages
            .get_mut(&id)
            .ok_or(ZandarError::PageNotFound { page_id: id })
    }

    /// Add a Page, assigning it the next free id
    ///
    /// Returns the assigned id.
    pub fn add_page(&mut self, mut page: Page) -> i64 {
        let id = self.next_page_id;
        self.next_page_id += 1;
        page.id = id;
        self.pages.insert(id, page);
        id
    }

    /// Insert a Page with its id preserved verbatim
    ///
    /// Used by hydration and restore, which must not re-derive ids. The
    /// auto-increment counter is advanced past the inserted id so later
    /// `add_page` calls cannot collide.
    pub fn insert_page(&mut self, page: Page) {
        self.next_page_id = self.next_page_id.max(page.id + 1);
        self.pages.insert(page.id, page);
    }

    /// Remove a Page record (no cascade - see `page_ops::delete_page`)
    pub(crate) fn remove_page(&mut self, id: i64) {
        self.pages.remove(&id);
    }

    /// List all Pages, sorted by id for deterministic iteration
    pub fn list_pages(&self) -> Vec<&Page> {
        let mut pages: Vec<&Page> = self.pages.values().collect();
        pages.sort_by_key(|p| p.id);
        pages
    }

    /// Find a Page by its display title
    pub fn find_page_by_title(&self, title: &str) -> Option<&Page> {
        self.list_pages().into_iter().find(|p| p.title == title)
    }

    // ===== Widgets =====

    /// Get a Widget by ID
    ///
    /// # Errors
    ///
    /// Returns `WidgetNotFound` if no widget has this id.
    pub fn get_widget(&self, id: i64) -> Result<&Widget> {
        self.widgets
            .get(&id)
            .ok_or(ZandarError::WidgetNotFound { widget_id: id })
    }

    /// Get a mutable reference to a Widget by ID
    ///
    /// # Errors
    ///
    /// Returns `WidgetNotFound` if no widget has this id.
    pub fn get_widget_mut(&mut self, id: i64) -> Result<&mut Widget> {
        self.widgets
            .get_mut(&id)
            .ok_or(ZandarError::WidgetNotFound { widget_id: id })
    }

    /// Add a Widget, assigning it the next free id
    pub fn add_widget(&mut self, mut widget: Widget) -> i64 {
        let id = self.next_widget_id;
        self.next_widget_id += 1;
        widget.id = id;
        self.widgets.insert(id, widget);
        id
    }

    /// Insert a Widget with its id preserved verbatim
    pub fn insert_widget(&mut self, widget: Widget) {
        self.next_widget_id = self.next_widget_id.max(widget.id + 1);
        self.widgets.insert(widget.id, widget);
    }

    /// Remove a Widget record (no cascade - see `widget_ops::delete_widget`)
    pub(crate) fn remove_widget(&mut self, id: i64) {
        self.widgets.remove(&id);
    }

    /// List all Widgets, sorted by id for deterministic iteration
    pub fn list_widgets(&self) -> Vec<&Widget> {
        let mut widgets: Vec<&Widget> = self.widgets.values().collect();
        widgets.sort_by_key(|w| w.id);
        widgets
    }

    /// List the Widgets owned by a page, sorted by id
    pub fn widgets_for_page(&self, page_id: i64) -> Vec<&Widget> {
        self.list_widgets()
            .into_iter()
            .filter(|w| w.page_id == page_id)
            .collect()
    }

    /// List the Widgets in one (page, column) group, sorted by id
    ///
    /// Relative ordering within the group is the ordering engine's concern;
    /// this only defines group membership.
    pub fn widgets_in_column(&self, page_id: i64, column_id: i64) -> Vec<&Widget> {
        self.list_widgets()
            .into_iter()
            .filter(|w| w.page_id == page_id && w.column_id == column_id)
            .collect()
    }

    // ===== Links =====

    /// Get a Link by ID
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if no link has this id.
    pub fn get_link(&self, id: i64) -> Result<&Link> {
        self.links
            .get(&id)
            .ok_or(ZandarError::LinkNotFound { link_id: id })
    }

    /// Get a mutable reference to a Link by ID
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if no link has this id.
    pub fn get_link_mut(&mut self, id: i64) -> Result<&mut Link> {
        self.links
            .get_mut(&id)
            .ok_or(ZandarError::LinkNotFound { link_id: id })
    }

    /// Add a Link, assigning it the next free id
    pub fn add_link(&mut self, mut link: Link) -> i64 {
        let id = self.next_link_id;
        self.next_link_id += 1;
        link.id = id;
        self.links.insert(id, link);
        id
    }

    /// Insert a Link with its id preserved verbatim
    pub fn insert_link(&mut self, link: Link) {
        self.next_link_id = self.next_link_id.max(link.id + 1);
        self.links.insert(link.id, link);
    }

    /// Remove a Link record
    pub(crate) fn remove_link(&mut self, id: i64) {
        self.links.remove(&id);
    }

    /// List all Links, sorted by id for deterministic iteration
    pub fn list_links(&self) -> Vec<&Link> {
        let mut links: Vec<&Link> = self.links.values().collect();
        links.sort_by_key(|l| l.id);
        links
    }

    /// List the Links owned by a widget, sorted by id
    pub fn links_for_widget(&self, widget_id: i64) -> Vec<&Link> {
        self.list_links()
            .into_iter()
            .filter(|l| l.widget_id == widget_id)
            .collect()
    }

    // ===== Whole-store operations =====

    /// Number of records per table: (pages, widgets, links)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.pages.len(), self.widgets.len(), self.links.len())
    }

    /// Remove every record from all three tables
    ///
    /// Id counters are left untouched so ids are not reused within a
    /// session unless a restore explicitly re-seeds them.
    pub fn clear_all(&mut self) {
        self.pages.clear();
        self.widgets.clear();
        self.links.clear();
    }
}
