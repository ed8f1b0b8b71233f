//! Viewer state for one browsing session.
//!
//! A [`Session`] owns the loaded fields, the derived categories, the active
//! category and the search term. Loads are split into an issued
//! [`LoadTicket`] and a completed [`LoadResponse`] so the engine call can run
//! elsewhere; only the response for the most recently issued ticket is ever
//! applied.

use std::path::{Path, PathBuf};

use crate::category::{self, Category, BASIC};
use crate::field::Field;
use crate::navigator::{self, Direction, NavigationContext};
use crate::render;
use crate::Result;

/// Suffix of the window title.
pub const APP_NAME: &str = "mediascope";

/// Identifies one issued load request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub path: PathBuf,
}

/// The outcome of a load request.
#[derive(Debug)]
pub struct LoadResponse {
    pub ticket: LoadTicket,
    pub result: Result<Vec<Field>>,
}

/// What an escape key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// A non-empty search term was cleared.
    ClearedSearch,
    /// There was nothing to clear; the viewer should close.
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    path: Option<PathBuf>,
    fields: Vec<Field>,
    categories: Vec<Category>,
    active: String,
    search: String,
    issued: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            path: None,
            fields: Vec::new(),
            categories: Vec::new(),
            active: BASIC.to_string(),
            search: String::new(),
            issued: 0,
        }
    }

    // ---------------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------------

    /// Issue a load for `path`, superseding any load still in flight.
    pub fn begin_load(&mut self, path: impl Into<PathBuf>) -> LoadTicket {
        self.issued += 1;
        LoadTicket {
            generation: self.issued,
            path: path.into(),
        }
    }

    /// Apply a completed load.
    ///
    /// Returns `Ok(false)` when the response belongs to a superseded request
    /// and was dropped. A failed load leaves the current state untouched and
    /// hands back the error.
    pub fn complete_load(&mut self, response: LoadResponse) -> Result<bool> {
        let LoadResponse { ticket, result } = response;
        if ticket.generation != self.issued {
            tracing::debug!(
                path = %ticket.path.display(),
                generation = ticket.generation,
                latest = self.issued,
                "discarding stale load"
            );
            return Ok(false);
        }

        let fields = result?;
        tracing::info!(path = %ticket.path.display(), fields = fields.len(), "loaded");

        self.categories = category::synthesize(&fields);
        self.fields = fields;
        self.path = Some(ticket.path);
        self.active = self
            .categories
            .first()
            .map(|c| c.key.clone())
            .unwrap_or_else(|| BASIC.to_string());
        Ok(true)
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn active_category(&self) -> &str {
        &self.active
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_loaded(&self) -> bool {
        self.path.is_some()
    }

    /// `"<path> - mediascope"`, or just the application name before the
    /// first load.
    pub fn title(&self) -> String {
        match &self.path {
            Some(path) => format!("{} - {APP_NAME}", path.display()),
            None => APP_NAME.to_string(),
        }
    }

    // ---------------------------------------------------------------------
    // Interaction
    // ---------------------------------------------------------------------

    /// Activate the category with `key`. Unknown keys change nothing.
    pub fn select(&mut self, key: &str) -> bool {
        if self.categories.iter().any(|c| c.key == key) {
            self.active = key.to_string();
            true
        } else {
            false
        }
    }

    /// Activate the category at `index` in [`Session::categories`].
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.categories.get(index) {
            Some(c) => {
                self.active = c.key.clone();
                true
            }
            None => false,
        }
    }

    /// Replace the search term.
    ///
    /// Searching switches to the second category (`Advanced`) so the term is
    /// matched against the complete field set.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        if self.categories.len() > 1 {
            self.active = self.categories[1].key.clone();
        }
    }

    pub fn escape(&mut self) -> Escape {
        if self.search.is_empty() {
            Escape::Quit
        } else {
            self.set_search("");
            Escape::ClearedSearch
        }
    }

    /// Text for the active category and search term.
    pub fn render(&self) -> String {
        render::render(&self.fields, &self.active, &self.search)
    }

    // ---------------------------------------------------------------------
    // Browsing
    // ---------------------------------------------------------------------

    /// Whether the current file has siblings to step to.
    pub fn can_navigate(&self) -> bool {
        self.path
            .as_deref()
            .and_then(NavigationContext::scan)
            .is_some_and(|ctx| ctx.can_navigate())
    }

    /// The file a previous/next step would load, or `None` when the step is a
    /// no-op.
    pub fn sibling(&self, direction: Direction) -> Option<PathBuf> {
        let current = self.path.as_deref()?;
        let next = navigator::step(current, direction);
        (next != current).then_some(next)
    }
}
