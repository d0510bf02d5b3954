//! # Work Identifiers
//!
//! A work identifier is a string token naming one catalog entry, canonically
//! the fixed `bwv` prefix followed by digits (`bwv1006`). Opaque tokens
//! without a numeric remainder are legal and carried verbatim; they simply
//! sort after every numeric identifier.
//!
//! The type stays a light-weight data holder: parsing, label formatting and
//! ordering live here so the catalog and TUI layers can focus on loading and
//! presentation.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed prefix of canonical work identifiers.
pub const WORK_PREFIX: &str = "bwv";

/// Spaced display form of the prefix, used in full button labels.
pub const WORK_PREFIX_DISPLAY: &str = "BWV ";

/// Identifier of a single work (e.g. `bwv1006`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkId(String);

impl WorkId {
    /// Wraps a raw token verbatim. Use [`WorkId::canonicalize`] for values
    /// coming from the location query parameter.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Canonicalizes a query-parameter value: a purely numeric value gets the
    /// `bwv` prefix prepended, anything else is used verbatim.
    pub fn canonicalize(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Self(format!("{WORK_PREFIX}{raw}"))
        } else {
            Self(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The token with the canonical prefix stripped. This is the value the
    /// `werk` query parameter carries (`bwv1006` → `1006`). Tokens without
    /// the prefix pass through unchanged.
    pub fn param_value(&self) -> &str {
        self.0.strip_prefix(WORK_PREFIX).unwrap_or(&self.0)
    }

    /// The number embedded in a canonical identifier, `None` when the
    /// remainder after the prefix is not base-10 digits.
    pub fn number(&self) -> Option<u32> {
        self.0.strip_prefix(WORK_PREFIX)?.parse().ok()
    }

    /// Full button label: prefix replaced by its spaced display form, rest
    /// upper-cased (`bwv1006` → `BWV 1006`, `foo` → `FOO`).
    pub fn display_label(&self) -> String {
        match self.0.strip_prefix(WORK_PREFIX) {
            Some(rest) => format!("{WORK_PREFIX_DISPLAY}{}", rest.to_uppercase()),
            None => self.0.to_uppercase(),
        }
    }

    /// Abbreviated button label: the bare remainder, upper-cased
    /// (`bwv1006` → `1006`).
    pub fn short_label(&self) -> String {
        self.param_value().to_uppercase()
    }
}

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Numeric identifiers sort by embedded number ascending. Identifiers whose
/// remainder does not parse sort after all numeric ones, lexicographically
/// among themselves.
impl Ord for WorkId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.number(), other.number()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for WorkId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_numeric_gets_prefix() {
        assert_eq!(WorkId::canonicalize("1006").as_str(), "bwv1006");
        assert_eq!(WorkId::canonicalize("7").as_str(), "bwv7");
    }

    #[test]
    fn test_canonicalize_opaque_is_verbatim() {
        assert_eq!(WorkId::canonicalize("foo").as_str(), "foo");
        assert_eq!(WorkId::canonicalize("anh113").as_str(), "anh113");
        // Empty is not numeric
        assert_eq!(WorkId::canonicalize("").as_str(), "");
    }

    #[test]
    fn test_param_value_strips_prefix() {
        assert_eq!(WorkId::new("bwv1006").param_value(), "1006");
        assert_eq!(WorkId::new("foo").param_value(), "foo");
    }

    #[test]
    fn test_number() {
        assert_eq!(WorkId::new("bwv1006").number(), Some(1006));
        assert_eq!(WorkId::new("bwvxyz").number(), None);
        assert_eq!(WorkId::new("foo").number(), None);
    }

    #[test]
    fn test_labels() {
        let id = WorkId::new("bwv1006");
        assert_eq!(id.display_label(), "BWV 1006");
        assert_eq!(id.short_label(), "1006");

        let opaque = WorkId::new("foo");
        assert_eq!(opaque.display_label(), "FOO");
        assert_eq!(opaque.short_label(), "FOO");
    }

    #[test]
    fn test_numeric_order_is_ascending() {
        let mut works = vec![
            WorkId::new("bwv7"),
            WorkId::new("bwv1006"),
            WorkId::new("bwv3"),
        ];
        works.sort();
        let tokens: Vec<&str> = works.iter().map(WorkId::as_str).collect();
        assert_eq!(tokens, vec!["bwv3", "bwv7", "bwv1006"]);
    }

    #[test]
    fn test_non_numeric_sorts_after_numeric() {
        let mut works = vec![
            WorkId::new("zzz"),
            WorkId::new("bwv565"),
            WorkId::new("anh113"),
        ];
        works.sort();
        let tokens: Vec<&str> = works.iter().map(WorkId::as_str).collect();
        assert_eq!(tokens, vec!["bwv565", "anh113", "zzz"]);
    }
}
