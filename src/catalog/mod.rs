//! # Work Catalog
//!
//! Loading and ordering of the available works. The shape mirrors the rest
//! of the crate's seams: a [`CatalogSource`] trait hides where the list
//! comes from, [`WorkList`] owns the ordered result, and [`load`] is the
//! one orchestration point that turns any failure into the single-element
//! fallback list plus a user-visible warning.
//!
//! `load` never returns an error. Initialization always completes; a broken
//! catalog only means degraded navigation.

pub mod http;
pub mod source;

pub use http::HttpCatalogSource;
pub use source::{CatalogError, CatalogSource};

use log::{info, warn};

use crate::core::work::WorkId;

/// Ordered, deduplicated set of available works. Immutable once built;
/// rebuilt only by a reload or an explicit refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkList(Vec<WorkId>);

impl WorkList {
    /// Sorts the raw identifiers (numeric ascending, opaque tokens last) and
    /// drops duplicates.
    pub fn from_raw(mut ids: Vec<WorkId>) -> Self {
        ids.sort();
        ids.dedup();
        Self(ids)
    }

    /// The single-element list used when the catalog cannot be loaded.
    pub fn fallback(default: &WorkId) -> Self {
        Self(vec![default.clone()])
    }

    pub fn as_slice(&self) -> &[WorkId] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WorkId> {
        self.0.get(index)
    }

    /// Position of `id` in the ordered list.
    pub fn position(&self, id: &WorkId) -> Option<usize> {
        self.0.iter().position(|w| w == id)
    }
}

/// What a load attempt produced: the list to navigate over, whether it came
/// from the remote catalog, and the warning for the status slot when it did
/// not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub list: WorkList,
    pub loaded: bool,
    pub warning: Option<String>,
}

/// Warning surfaced in the status slot when the catalog cannot be loaded.
pub const LOAD_WARNING: &str = "Failed to load the work catalog. Using fallback.";

/// Fetches the catalog and produces the navigable list. Any failure
/// (transport, status, malformed document, schema violation, empty list)
/// falls back to the one-element default list and a warning string.
pub async fn load(source: &dyn CatalogSource, default: &WorkId) -> LoadOutcome {
    match source.fetch_works().await {
        Ok(ids) if !ids.is_empty() => {
            let list = WorkList::from_raw(ids);
            info!("Loaded {} works from {} catalog", list.len(), source.name());
            LoadOutcome {
                list,
                loaded: true,
                warning: None,
            }
        }
        Ok(_) => degraded(source, CatalogError::Empty, default),
        Err(e) => degraded(source, e, default),
    }
}

fn degraded(source: &dyn CatalogSource, error: CatalogError, default: &WorkId) -> LoadOutcome {
    warn!("Failed to load work catalog from {}: {}", source.name(), error);
    LoadOutcome {
        list: WorkList::fallback(default),
        loaded: false,
        warning: Some(LOAD_WARNING.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingCatalogSource, StaticCatalogSource};

    #[test]
    fn test_from_raw_sorts_numerically() {
        let list = WorkList::from_raw(vec![
            WorkId::new("bwv7"),
            WorkId::new("bwv1006"),
            WorkId::new("bwv3"),
        ]);
        let tokens: Vec<&str> = list.iter().map(WorkId::as_str).collect();
        assert_eq!(tokens, vec!["bwv3", "bwv7", "bwv1006"]);
    }

    #[test]
    fn test_from_raw_dedups() {
        let list = WorkList::from_raw(vec![
            WorkId::new("bwv7"),
            WorkId::new("bwv7"),
            WorkId::new("bwv3"),
        ]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_position() {
        let list = WorkList::from_raw(vec![WorkId::new("bwv3"), WorkId::new("bwv7")]);
        assert_eq!(list.position(&WorkId::new("bwv7")), Some(1));
        assert_eq!(list.position(&WorkId::new("bwv999")), None);
    }

    #[test]
    fn test_load_success() {
        let source = StaticCatalogSource::new(&["bwv7", "bwv3"]);
        let outcome = tokio_test::block_on(load(&source, &WorkId::new("bwv1006")));
        assert!(outcome.loaded);
        assert!(outcome.warning.is_none());
        let tokens: Vec<&str> = outcome.list.iter().map(WorkId::as_str).collect();
        assert_eq!(tokens, vec!["bwv3", "bwv7"]);
    }

    #[test]
    fn test_load_failure_falls_back() {
        let source = FailingCatalogSource;
        let outcome = tokio_test::block_on(load(&source, &WorkId::new("bwv1006")));
        assert!(!outcome.loaded);
        assert_eq!(outcome.warning.as_deref(), Some(LOAD_WARNING));
        let tokens: Vec<&str> = outcome.list.iter().map(WorkId::as_str).collect();
        assert_eq!(tokens, vec!["bwv1006"]);
    }

    #[test]
    fn test_load_empty_falls_back() {
        let source = StaticCatalogSource::new(&[]);
        let outcome = tokio_test::block_on(load(&source, &WorkId::new("bwv1006")));
        assert!(!outcome.loaded);
        assert_eq!(outcome.list.len(), 1);
    }
}
