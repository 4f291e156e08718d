//! Dense ID-indexed storage for netlist entities.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Key types usable as arena indices.
///
/// An implementor is a transparent `u32` wrapper; the trait provides the
/// conversion both ways.
pub trait ArenaId: Copy {
    /// Creates a key from a raw index.
    fn from_raw(index: u32) -> Self;

    /// Returns the raw index.
    fn as_raw(self) -> u32;
}

/// An append-only, densely packed container indexed by an opaque key.
///
/// Entities are never physically removed, so keys stay valid for the
/// arena's whole lifetime; owners that need removal keep a tombstone set
/// beside the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena<I: ArenaId, T> {
    entries: Vec<T>,
    #[serde(skip)]
    _key: PhantomData<I>,
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            _key: PhantomData,
        }
    }

    /// Appends an entity, returning its key.
    pub fn push(&mut self, entity: T) -> I {
        let id = I::from_raw(self.entries.len() as u32);
        self.entries.push(entity);
        id
    }

    /// Returns the number of entities ever allocated.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been allocated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, &entity)` in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (I::from_raw(i as u32), e))
    }

    /// Iterates keys in allocation order.
    pub fn keys(&self) -> impl Iterator<Item = I> + '_ {
        (0..self.entries.len()).map(|i| I::from_raw(i as u32))
    }
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        &self.entries[id.as_raw() as usize]
    }
}

impl<I: ArenaId, T> IndexMut<I> for Arena<I, T> {
    fn index_mut(&mut self, id: I) -> &mut T {
        &mut self.entries[id.as_raw() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::NetId;

    #[test]
    fn push_and_index() {
        let mut arena: Arena<NetId, &str> = Arena::new();
        let a = arena.push("clk");
        let b = arena.push("rst");
        assert_eq!(arena[a], "clk");
        assert_eq!(arena[b], "rst");
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn index_mut_updates_in_place() {
        let mut arena: Arena<NetId, u32> = Arena::new();
        let id = arena.push(1);
        arena[id] = 2;
        assert_eq!(arena[id], 2);
    }

    #[test]
    fn keys_are_allocation_order() {
        let mut arena: Arena<NetId, ()> = Arena::new();
        arena.push(());
        arena.push(());
        let raw: Vec<u32> = arena.keys().map(|k| k.as_raw()).collect();
        assert_eq!(raw, vec![0, 1]);
    }

    #[test]
    fn empty() {
        let arena: Arena<NetId, u32> = Arena::default();
        assert!(arena.is_empty());
        assert_eq!(arena.iter().count(), 0);
    }

    #[test]
    fn serde_roundtrip() {
        let mut arena: Arena<NetId, String> = Arena::new();
        arena.push("x".to_string());
        arena.push("y".to_string());
        let json = serde_json::to_string(&arena).unwrap();
        let back: Arena<NetId, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[NetId::from_raw(1)], "y");
    }
}
