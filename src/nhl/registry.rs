//! Bidirectional player id <-> name registry.

use crate::cli::types::PlayerId;
use std::collections::{BTreeMap, HashMap};

/// Built once per run from the persisted roster table and never mutated
/// while a scrape is in progress.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    by_id: BTreeMap<PlayerId, String>,
    by_name: HashMap<String, PlayerId>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(id, name)` pairs. A repeated id keeps its first name; a
    /// name shared by several players resolves to the first id seen.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (PlayerId, String)>) -> Self {
        let mut registry = Self::new();
        for (id, name) in pairs {
            if registry.by_id.contains_key(&id) {
                continue;
            }
            registry.by_name.entry(name.clone()).or_insert(id);
            registry.by_id.insert(id, name);
        }
        registry
    }

    pub fn name(&self, id: PlayerId) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    pub fn id(&self, name: &str) -> Option<PlayerId> {
        self.by_name.get(name).copied()
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.by_id.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_ways() {
        let registry = PlayerRegistry::from_pairs([
            (PlayerId::new(8478402), "Connor McDavid".to_string()),
            (PlayerId::new(8471214), "Alex Ovechkin".to_string()),
        ]);
        assert_eq!(registry.name(PlayerId::new(8471214)), Some("Alex Ovechkin"));
        assert_eq!(registry.id("Connor McDavid"), Some(PlayerId::new(8478402)));
        assert_eq!(registry.id("Nobody"), None);

        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec![PlayerId::new(8471214), PlayerId::new(8478402)]);
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let registry = PlayerRegistry::from_pairs([
            (PlayerId::new(1), "First".to_string()),
            (PlayerId::new(1), "Second".to_string()),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.name(PlayerId::new(1)), Some("First"));
        assert_eq!(registry.id("Second"), None);
    }
}
