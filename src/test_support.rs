//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{CatalogError, CatalogSource, WorkList};
use crate::core::nav::Location;
use crate::core::state::App;
use crate::core::work::WorkId;

/// A catalog source that returns a fixed list, for tests that don't need
/// real HTTP.
pub struct StaticCatalogSource {
    works: Vec<WorkId>,
}

impl StaticCatalogSource {
    pub fn new(tokens: &[&str]) -> Self {
        Self {
            works: tokens.iter().copied().map(WorkId::new).collect(),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_works(&self) -> Result<Vec<WorkId>, CatalogError> {
        Ok(self.works.clone())
    }
}

/// A catalog source that always fails, for exercising the fallback path.
pub struct FailingCatalogSource;

#[async_trait]
impl CatalogSource for FailingCatalogSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_works(&self) -> Result<Vec<WorkId>, CatalogError> {
        Err(CatalogError::Network("connection refused".to_string()))
    }
}

/// Creates a test App at the default location with the default work.
pub fn test_app() -> App {
    App::new(
        Arc::new(StaticCatalogSource::new(&[])),
        Location::parse("http://localhost:8000/").unwrap(),
        WorkId::new("bwv1006"),
    )
}

/// Creates a test App with a loaded work list and the current work resolved
/// from the given location query.
pub fn test_app_with_works(tokens: &[&str], query: &str) -> App {
    let mut app = App::new(
        Arc::new(StaticCatalogSource::new(tokens)),
        Location::parse(&format!("http://localhost:8000/{query}")).unwrap(),
        WorkId::new("bwv1006"),
    );
    app.works = WorkList::from_raw(tokens.iter().copied().map(WorkId::new).collect());
    app.is_loaded = true;
    app
}
