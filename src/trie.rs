//! Error-tolerant prefix tree over normalized place names.
//!
//! A [`Trie`] is batch-built once from canonical entries plus their
//! generated spelling variants, then only ever read. Lookups never mutate
//! the structure, so a built trie is freely shareable across threads.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::CanonicalEntry;
use crate::variants::generate_variants;

/// One node per distinct character along some inserted key. Children are
/// exclusively owned by their parent, so the node graph is a tree by
/// construction: no sharing, no cycles.
#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// Canonical value carried by a terminal node.
    value: Option<String>,
}

/// Prefix tree mapping normalized string keys to canonical values.
///
/// Write-once, read-many: keys are inserted during a single-writer build
/// phase and there is no removal operation.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    keys: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key bound to a canonical value.
    ///
    /// First writer wins: if the key is already bound the existing value
    /// is kept and `false` is returned. Canonical names must therefore be
    /// inserted before generated variants, so an exact canonical spelling
    /// can never be shadowed by a colliding one-edit variant of a
    /// different entry.
    pub fn insert(&mut self, key: &str, value: &str) -> bool {
        let mut node = &mut self.root;
        for ch in key.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.value.is_some() {
            return false;
        }
        node.value = Some(value.to_string());
        self.keys += 1;
        true
    }

    /// Look up the canonical value bound to a key.
    ///
    /// Returns `None` if any character lacks a corresponding child or the
    /// final node carries no value. Absence is a normal outcome, never an
    /// error.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut node = &self.root;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        node.value.as_deref()
    }

    /// Whether the key is bound.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of distinct bound keys.
    pub fn len(&self) -> usize {
        self.keys
    }

    /// Whether the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys == 0
    }

    /// Build a trie from canonical entries.
    ///
    /// All canonical names are inserted first, then every generated
    /// variant, under the first-writer-wins policy. An entry whose
    /// normalized name is empty indicates a corrupt gazetteer and is
    /// rejected; the caller must not use a partially-built trie.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vietaddr::{CanonicalEntry, Trie};
    ///
    /// let entries = vec![CanonicalEntry::new("Hà Nội")];
    /// let trie = Trie::from_entries(&entries)?;
    /// assert_eq!(trie.get("hà nội"), Some("Hà Nội"));
    /// assert_eq!(trie.get("hà nộc"), Some("Hà Nội")); // one substitution
    /// # Ok::<(), vietaddr::Error>(())
    /// ```
    pub fn from_entries(entries: &[CanonicalEntry]) -> Result<Self> {
        let mut trie = Trie::new();

        for entry in entries {
            if entry.name.is_empty() {
                return Err(Error::build_error(format!(
                    "canonical entry {:?} normalizes to an empty key",
                    entry.value
                )));
            }
            trie.insert(&entry.name, &entry.value);
        }

        for entry in entries {
            for variant in generate_variants(&entry.name) {
                // A deletion variant of a one-character name is empty;
                // the empty key is never a meaningful lookup target.
                if variant.is_empty() {
                    continue;
                }
                trie.insert(&variant, &entry.value);
            }
        }

        Ok(trie)
    }
}
