//! The caller-owned set of selected item keys.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tessel_common::ItemKey;

use crate::item::GridItem;

/// Selected keys, kept in key order so iteration is deterministic.
/// Keys need not exist in any layout; unknown keys are skipped by edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    keys: BTreeSet<ItemKey>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(key: impl Into<ItemKey>) -> Self {
        let mut keys = BTreeSet::new();
        keys.insert(key.into());
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// The selected key when exactly one is selected.
    pub fn sole(&self) -> Option<&ItemKey> {
        if self.keys.len() == 1 {
            self.keys.iter().next()
        } else {
            None
        }
    }

    pub fn insert(&mut self, key: impl Into<ItemKey>) -> bool {
        self.keys.insert(key.into())
    }

    /// Add `key` if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, key: impl Into<ItemKey>) -> bool {
        let key = key.into();
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemKey> {
        self.keys.iter()
    }

    /// Drop keys that no longer name an item. Returns `true` if any were dropped.
    pub fn retain_existing(&mut self, layout: &[GridItem]) -> bool {
        let before = self.keys.len();
        self.keys
            .retain(|key| layout.iter().any(|item| item.key == *key));
        self.keys.len() != before
    }
}

impl<K: Into<ItemKey>> FromIterator<K> for Selection {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}
