use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

/// Paths grouped by domain.
///
/// Domains keep the order in which they were first inserted; paths within a
/// domain are deduplicated and always iterate in sorted order. Global ids are
/// derived from exactly this iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainPaths {
    inner: IndexMap<String, BTreeSet<String>>,
}

/// One entry of the flattened listing. `id` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedPath<'a> {
    pub id: usize,
    pub domain: &'a str,
    pub path: &'a str,
}

impl DomainPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` under `domain`. Returns false if the pair was already present.
    pub fn insert(&mut self, domain: &str, path: &str) -> bool {
        match self.inner.get_mut(domain) {
            Some(paths) => paths.insert(path.to_owned()),
            None => {
                self.inner
                    .insert(domain.to_owned(), BTreeSet::from([path.to_owned()]));
                true
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of domains.
    pub fn domain_count(&self) -> usize {
        self.inner.len()
    }

    /// Number of distinct (domain, path) pairs.
    pub fn path_count(&self) -> usize {
        self.inner.values().map(BTreeSet::len).sum()
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Domains with their sorted paths, in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.inner.iter().map(|(d, p)| (d.as_str(), p))
    }

    /// Walk every path with its global id.
    pub fn indexed(&self) -> impl Iterator<Item = IndexedPath<'_>> {
        self.iter()
            .flat_map(|(domain, paths)| paths.iter().map(move |path| (domain, path.as_str())))
            .enumerate()
            .map(|(idx, (domain, path))| IndexedPath {
                id: idx + 1,
                domain,
                path,
            })
    }

    /// The flattened path list; element `i - 1` is the path with global id `i`.
    pub fn flatten(&self) -> Vec<String> {
        self.indexed().map(|entry| entry.path.to_owned()).collect()
    }
}
