//! Ordered, id-addressed entity collection.
//!
//! # Invariants
//! - Members keep insertion order; additions always append.
//! - A generated id never matches an id already present in the collection.
//! - `update`/`remove` on an unknown id leave the collection untouched.
//! - Imported ids may repeat; `update` and `remove` act on every match.

use crate::model::id::EntityId;
use crate::model::Entity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Collection<T> {
    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    pub(crate) fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub(crate) fn matches_mut<'a>(&'a mut self, id: &'a str) -> impl Iterator<Item = &'a mut T> {
        self.items.iter_mut().filter(move |item| item.id() == id)
    }

    pub(crate) fn insert(&mut self, draft: T::Draft) -> EntityId {
        let id = self.fresh_id();
        self.items.push(T::from_draft(id.clone(), draft));
        id
    }

    pub(crate) fn update(&mut self, id: &str, patch: T::Patch) -> bool {
        let mut matched = false;
        for item in self.matches_mut(id) {
            item.apply_patch(patch.clone());
            matched = true;
        }
        matched
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    // Imported snapshots may carry arbitrary ids; re-roll on the rare clash.
    fn fresh_id(&self) -> EntityId {
        loop {
            let candidate = EntityId::generate();
            if self.get(candidate.as_str()).is_none() {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Collection;
    use crate::model::custom_block::{CustomBlock, CustomBlockDraft, CustomBlockPatch};

    fn draft(title: &str) -> CustomBlockDraft {
        CustomBlockDraft {
            title: title.to_string(),
            content: String::new(),
        }
    }

    #[test]
    fn insert_appends_and_returns_lookup_id() {
        let mut blocks = Collection::<CustomBlock>::default();
        let first = blocks.insert(draft("a"));
        let second = blocks.insert(draft("b"));

        assert_ne!(first, second);
        let titles = blocks
            .as_slice()
            .iter()
            .map(|b| b.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["a", "b"]);
        assert_eq!(blocks.get(second.as_str()).unwrap().title, "b");
    }

    #[test]
    fn unknown_id_mutations_are_noops() {
        let mut blocks = Collection::<CustomBlock>::default();
        blocks.insert(draft("a"));
        let before = blocks.clone();

        assert!(!blocks.update(
            "missing",
            CustomBlockPatch {
                title: Some("x".to_string()),
                ..CustomBlockPatch::default()
            }
        ));
        assert!(!blocks.remove("missing"));
        assert_eq!(blocks, before);
    }

    #[test]
    fn repeated_imported_ids_are_all_patched() {
        let block = |title: &str| CustomBlock {
            id: "1700000000000".into(),
            title: title.to_string(),
            content: String::new(),
        };
        let mut blocks = Collection::from_vec(vec![block("a"), block("b")]);

        assert!(blocks.update(
            "1700000000000",
            CustomBlockPatch {
                content: Some("same".to_string()),
                ..CustomBlockPatch::default()
            }
        ));
        assert!(blocks.as_slice().iter().all(|b| b.content == "same"));
        assert_eq!(blocks.as_slice()[1].title, "b");

        assert!(blocks.remove("1700000000000"));
        assert!(blocks.as_slice().is_empty());
    }
}
