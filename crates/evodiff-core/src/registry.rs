//! Pair-keyed storage of constructed comparison engines.

use std::collections::HashMap;

use crate::domain::VersionPair;

/// Insertion-ordered map from [`VersionPair`] to an engine handle.
///
/// One registry instance holds the code-artifact engines of a run, a
/// second holds the test-artifact engines. Entries are inserted in
/// pair-generation order during a single run and never removed;
/// iteration replays that order for bulk consumption downstream.
#[derive(Debug)]
pub struct DifferencerRegistry<E> {
    engines: HashMap<VersionPair, E>,
    order: Vec<VersionPair>,
}

impl<E> Default for DifferencerRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> DifferencerRegistry<E> {
    pub fn new() -> Self {
        Self {
            engines: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Insert unconditionally. A duplicate pair replaces the stored
    /// engine (last write wins) without duplicating its order slot;
    /// adjacent-pair sequencing should never produce one.
    pub fn put(&mut self, pair: VersionPair, engine: E) {
        if self.engines.insert(pair.clone(), engine).is_none() {
            self.order.push(pair);
        }
    }

    /// Look up the engine stored for `pair`.
    pub fn get(&self, pair: &VersionPair) -> Option<&E> {
        self.engines.get(pair)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&VersionPair, &E)> {
        self.order
            .iter()
            .filter_map(move |pair| self.engines.get(pair).map(|engine| (pair, engine)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Version;

    fn pair(older: &str, newer: &str) -> VersionPair {
        VersionPair::new(
            Version::new(older, format!("/builds/{}", older)),
            Version::new(newer, format!("/builds/{}", newer)),
        )
    }

    #[test]
    fn test_put_and_get() {
        let mut registry = DifferencerRegistry::new();
        registry.put(pair("A", "B"), "engine-ab");

        assert_eq!(registry.get(&pair("A", "B")), Some(&"engine-ab"));
        assert_eq!(registry.get(&pair("B", "C")), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut registry = DifferencerRegistry::new();
        registry.put(pair("A", "B"), 1);
        registry.put(pair("B", "C"), 2);
        registry.put(pair("C", "D"), 3);

        let labels: Vec<String> = registry.iter().map(|(p, _)| p.label()).collect();
        assert_eq!(labels, vec!["A-B", "B-C", "C-D"]);
    }

    #[test]
    fn test_duplicate_pair_last_write_wins_without_reordering() {
        let mut registry = DifferencerRegistry::new();
        registry.put(pair("A", "B"), "first");
        registry.put(pair("B", "C"), "middle");
        registry.put(pair("A", "B"), "second");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(&pair("A", "B")), Some(&"second"));

        let labels: Vec<String> = registry.iter().map(|(p, _)| p.label()).collect();
        assert_eq!(labels, vec!["A-B", "B-C"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry: DifferencerRegistry<()> = DifferencerRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }
}
