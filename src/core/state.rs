//! # Application State
//!
//! Core navigation state for werkbar. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn CatalogSource>  // where the work list comes from
//! ├── location: Location              // the page URL (owns the werk param)
//! ├── default_work: WorkId            // used when the param is absent
//! ├── works: WorkList                 // ordered catalog, or the fallback
//! ├── current_work: WorkId            // derived from location
//! ├── is_loaded: bool                 // list came from the catalog, not fallback
//! ├── is_loading: bool                // a fetch is in flight
//! ├── load_warning: Option<String>    // degraded-mode message for the status slot
//! └── status_message: String          // transient status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations. There is no
//! module-level instance: the entry point constructs the `App` and the event
//! loop owns it.

use std::sync::Arc;

use crate::catalog::{CatalogSource, WorkList};
use crate::core::config::ResolvedConfig;
use crate::core::nav::{self, Location, NavigationInfo, WorkButton};
use crate::core::work::WorkId;

pub struct App {
    pub source: Arc<dyn CatalogSource>,
    pub location: Location,
    pub default_work: WorkId,
    pub works: WorkList,
    pub current_work: WorkId,
    pub is_loaded: bool,
    pub is_loading: bool,
    pub load_warning: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn CatalogSource>, location: Location, default_work: WorkId) -> Self {
        let current_work = nav::resolve_current_work(&location, &default_work);
        let works = WorkList::fallback(&default_work);
        Self {
            source,
            location,
            default_work,
            works,
            current_work,
            is_loaded: false,
            is_loading: false,
            load_warning: None,
            status_message: String::new(),
        }
    }

    pub fn from_config(source: Arc<dyn CatalogSource>, config: &ResolvedConfig) -> Self {
        Self::new(
            source,
            config.page_location.clone(),
            config.default_work.clone(),
        )
    }

    /// Position of the current work in the list, `None` when it is not
    /// listed (which only disables prev/next, never errors).
    pub fn current_index(&self) -> Option<usize> {
        self.works.position(&self.current_work)
    }

    /// The work before the current one, `None` at the start of the list or
    /// when the current work is not listed.
    pub fn previous_target(&self) -> Option<&WorkId> {
        let index = self.current_index()?;
        if index == 0 {
            return None;
        }
        self.works.get(index - 1)
    }

    /// The work after the current one, `None` at the end of the list or when
    /// the current work is not listed.
    pub fn next_target(&self) -> Option<&WorkId> {
        self.works.get(self.current_index()? + 1)
    }

    /// Re-derives the current work from a new location. This is the reload
    /// path: the caller follows up by re-running the loader.
    pub fn apply_location(&mut self, location: Location) {
        self.location = location;
        self.current_work = nav::resolve_current_work(&self.location, &self.default_work);
    }

    /// Marks a fetch as in flight.
    pub fn begin_load(&mut self) {
        self.is_loading = true;
    }

    /// Button model for the bar, one entry per listed work.
    pub fn buttons(&self) -> Vec<WorkButton> {
        nav::build_buttons(self.works.as_slice(), &self.current_work)
    }

    /// Read-only snapshot for consumption by unrelated callers.
    pub fn navigation_info(&self) -> NavigationInfo {
        let current_index = self.current_index();
        NavigationInfo {
            current_work: self.current_work.clone(),
            current_index,
            total_works: self.works.len(),
            available_works: self.works.iter().cloned().collect(),
            has_previous: current_index.is_some_and(|i| i > 0),
            has_next: current_index.is_some_and(|i| i + 1 < self.works.len()),
            is_loaded: self.is_loaded,
        }
    }
}
