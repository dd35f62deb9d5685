// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container-keyed lookup of live stacks.
//!
//! A page that hosts several stacks needs to find the one attached to a given
//! container. [`StackRegistry`] keeps that mapping explicitly, owned by
//! whoever builds the stacks, instead of stamping a back-reference onto the
//! container element.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Map from container identity (usually its selector) to a stack instance.
#[derive(Debug)]
pub struct StackRegistry<T> {
    entries: BTreeMap<String, T>,
}

impl<T> Default for StackRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StackRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registers `stack` under `container`, returning the instance it
    /// replaces.
    pub fn insert(&mut self, container: impl Into<String>, stack: T) -> Option<T> {
        self.entries.insert(container.into(), stack)
    }

    /// Looks up the stack attached to `container`.
    #[must_use]
    pub fn get(&self, container: &str) -> Option<&T> {
        self.entries.get(container)
    }

    /// Looks up the stack attached to `container` for mutation.
    pub fn get_mut(&mut self, container: &str) -> Option<&mut T> {
        self.entries.get_mut(container)
    }

    /// Detaches and returns the stack attached to `container`.
    pub fn remove(&mut self, container: &str) -> Option<T> {
        self.entries.remove(container)
    }

    /// Returns `true` if a stack is attached to `container`.
    #[must_use]
    pub fn contains(&self, container: &str) -> bool {
        self.entries.contains_key(container)
    }

    /// Number of registered stacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no stack is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(container, stack)` pairs in container order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn insert_lookup_remove() {
        let mut registry = StackRegistry::new();
        assert!(registry.is_empty());

        assert_eq!(registry.insert(".holiday", 1), None);
        assert_eq!(registry.insert(".portfolio", 2), None);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(".holiday"), Some(&1));
        assert!(registry.contains(".portfolio"));
        assert_eq!(registry.get(".missing"), None);

        if let Some(v) = registry.get_mut(".holiday") {
            *v = 10;
        }
        assert_eq!(registry.remove(".holiday"), Some(10));
        assert!(!registry.contains(".holiday"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn reinserting_replaces() {
        let mut registry = StackRegistry::default();
        registry.insert("a", "first");
        assert_eq!(registry.insert("a", "second"), Some("first"));
        assert_eq!(registry.get("a"), Some(&"second"));
    }

    #[test]
    fn iterates_in_key_order() {
        let mut registry = StackRegistry::new();
        registry.insert("b", 2);
        registry.insert("a", 1);
        let keys: Vec<&str> = registry.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
