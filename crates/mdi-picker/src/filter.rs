//! Filter engine.
//!
//! [`filter`] narrows a [`Catalog`] down to the records whose name or any
//! keyword contains the query, ignoring case and surrounding whitespace. The
//! result is a [`FilteredView`]: a lazy, restartable view that always yields
//! records in catalog order. Nothing is ranked or reordered.

use std::iter::FusedIterator;

use mdi_picker_core::logging::targets;

use crate::catalog::{Catalog, IconRecord};

/// Normalises a free-text query into the needle used for matching.
///
/// The needle is trimmed and lowercased. An empty needle means "no filter".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Filters `catalog` by `query`.
///
/// An empty (or whitespace-only) query yields the whole catalog. Otherwise a
/// record is included iff its lowercased name contains the needle or any of
/// its lowercased keywords does. Matching zero records is not an error.
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> FilteredView<'a> {
    let needle = normalize_query(query);
    tracing::trace!(target: targets::FILTER, needle = %needle, "filtering catalog");
    FilteredView { catalog, needle }
}

/// A lazily evaluated subsequence of a catalog.
///
/// Every call to [`iter`](Self::iter) restarts from the beginning of the
/// catalog, so the view can be walked any number of times.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    catalog: &'a Catalog,
    needle: String,
}

impl<'a> FilteredView<'a> {
    /// The normalised needle this view filters by.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Whether this view is the unfiltered catalog.
    pub fn is_identity(&self) -> bool {
        self.needle.is_empty()
    }

    /// Iterates over matching records in catalog order.
    pub fn iter(&self) -> Matches<'a, '_> {
        Matches {
            records: self.catalog.iter(),
            needle: &self.needle,
        }
    }

    /// Counts matching records. Walks the catalog.
    pub fn len(&self) -> usize {
        if self.is_identity() {
            self.catalog.len()
        } else {
            self.iter().count()
        }
    }

    /// Whether nothing matches.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Whether the named record is part of this view.
    pub fn contains(&self, name: &str) -> bool {
        self.catalog
            .get(name)
            .is_some_and(|record| record.matches(&self.needle))
    }

    /// Names of matching records, in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|r| r.name().to_string()).collect()
    }

    /// Collects matching records, in catalog order.
    pub fn to_vec(&self) -> Vec<&'a IconRecord> {
        self.iter().collect()
    }
}

impl<'a, 'v> IntoIterator for &'v FilteredView<'a> {
    type Item = &'a IconRecord;
    type IntoIter = Matches<'a, 'v>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the records of a [`FilteredView`].
#[derive(Debug, Clone)]
pub struct Matches<'a, 'v> {
    records: std::slice::Iter<'a, IconRecord>,
    needle: &'v str,
}

impl<'a> Iterator for Matches<'a, '_> {
    type Item = &'a IconRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle;
        self.records.find(|record| record.matches(needle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.records.size_hint();
        if self.needle.is_empty() {
            (upper.unwrap_or(0), upper)
        } else {
            (0, upper)
        }
    }
}

impl FusedIterator for Matches<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_catalog() -> Catalog {
        Catalog::from_records(vec![
            IconRecord::new("account", ["person", "user"]),
            IconRecord::new("alert", ["warning"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_scenario_queries() {
        let catalog = scenario_catalog();
        assert_eq!(filter(&catalog, "ale").names(), vec!["alert"]);
        assert_eq!(filter(&catalog, "person").names(), vec!["account"]);
        assert!(filter(&catalog, "zzz").is_empty());
        assert_eq!(filter(&catalog, "zzz").len(), 0);
    }

    #[test]
    fn test_empty_query_is_identity() {
        let catalog = Catalog::load().unwrap();
        let view = filter(&catalog, "");
        assert!(view.is_identity());
        assert_eq!(view.to_vec(), catalog.iter().collect::<Vec<_>>());

        let blank = filter(&catalog, "   \t");
        assert!(blank.is_identity());
        assert_eq!(blank.len(), catalog.len());
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let catalog = scenario_catalog();
        assert_eq!(filter(&catalog, "  WARN ").names(), vec!["alert"]);
        assert_eq!(filter(&catalog, "Acc").names(), vec!["account"]);
    }

    #[test]
    fn test_result_preserves_catalog_order() {
        let catalog = Catalog::load().unwrap();
        for query in ["a", "arrow", "favorite", "e", "remove", "circle"] {
            let positions: Vec<usize> = filter(&catalog, query)
                .iter()
                .map(|r| catalog.position(r.name()).unwrap())
                .collect();
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "order broken for {query:?}: {positions:?}"
            );
        }
    }

    #[test]
    fn test_every_name_matches_itself() {
        let catalog = Catalog::load().unwrap();
        for record in &catalog {
            let view = filter(&catalog, record.name());
            assert!(view.contains(record.name()));
            assert!(view.iter().any(|r| r.name() == record.name()));
        }
    }

    #[test]
    fn test_view_is_restartable() {
        let catalog = scenario_catalog();
        let view = filter(&catalog, "a");
        let first: Vec<_> = view.iter().collect();
        let second: Vec<_> = (&view).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_full_name_query_uses_substring_rule() {
        let catalog = Catalog::load().unwrap();
        let names = filter(&catalog, "alert").names();
        assert_eq!(names, vec!["alert", "alert-circle"]);
    }
}
