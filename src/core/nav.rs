//! # Navigation Derivation
//!
//! Pure functions between the page location and navigation state: resolving
//! the current work from the `werk` query parameter, building the button
//! model for the bar, and the read-only [`NavigationInfo`] snapshot exposed
//! to unrelated callers.
//!
//! Navigation itself is a full page transition: a new location is built with
//! the `werk` parameter replaced and the whole state is re-derived from it.
//! Nothing here patches state in place.

use std::fmt;

use reqwest::Url;

use crate::core::work::WorkId;

/// Name of the query parameter carrying the current work.
pub const WERK_PARAM: &str = "werk";

/// A parsed page location. Wraps the URL so query handling stays in one
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

/// The location string could not be parsed as a URL.
#[derive(Debug)]
pub struct InvalidLocation(pub String);

impl fmt::Display for InvalidLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid location URL: {}", self.0)
    }
}

impl std::error::Error for InvalidLocation {}

impl Location {
    pub fn parse(s: &str) -> Result<Self, InvalidLocation> {
        let url = Url::parse(s).map_err(|e| InvalidLocation(format!("{s}: {e}")))?;
        Ok(Self { url })
    }

    /// Value of the `werk` query parameter, if present and non-empty.
    pub fn werk_param(&self) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == WERK_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    }

    /// A new location with `werk` set to `value`, other query parameters
    /// preserved.
    pub fn with_werk(&self, value: &str) -> Location {
        let mut url = self.url.clone();
        let others: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(key, _)| key != WERK_PARAM)
            .map(|(key, val)| (key.into_owned(), val.into_owned()))
            .collect();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (key, val) in &others {
                pairs.append_pair(key, val);
            }
            pairs.append_pair(WERK_PARAM, value);
        }
        Location { url }
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }

    /// Resolves a document path relative to this location (used for the
    /// catalog fetch URL).
    pub fn join(&self, path: &str) -> Result<Url, InvalidLocation> {
        self.url
            .join(path)
            .map_err(|e| InvalidLocation(format!("{path}: {e}")))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// Derives the current work from the location: a numeric `werk` value is
/// canonicalized with the prefix, a non-numeric one is used verbatim, and an
/// absent parameter falls back to the configured default.
pub fn resolve_current_work(location: &Location, default: &WorkId) -> WorkId {
    match location.werk_param() {
        Some(value) => WorkId::canonicalize(&value),
        None => default.clone(),
    }
}

/// One entry of the rendered bar, tagged with the raw identifier for later
/// lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkButton {
    pub id: WorkId,
    pub active: bool,
}

/// Builds the button model: one entry per work, at most one active. When the
/// current work is not in the list, no button is active. That is not an
/// error.
pub fn build_buttons(works: &[WorkId], current: &WorkId) -> Vec<WorkButton> {
    works
        .iter()
        .map(|id| WorkButton {
            active: id == current,
            id: id.clone(),
        })
        .collect()
}

/// Read-only navigation snapshot for consumption by unrelated page logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationInfo {
    pub current_work: WorkId,
    pub current_index: Option<usize>,
    pub total_works: usize,
    pub available_works: Vec<WorkId>,
    pub has_previous: bool,
    pub has_next: bool,
    pub is_loaded: bool,
}
