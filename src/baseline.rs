//! A single-lock map used as the comparison baseline for [`Smap`](crate::Smap).

use crate::access::MapAccess;
use hashbrown::HashMap;
use parking_lot::RwLock;
use std::hash::Hash;

/// Map guarded by one read-write lock over the whole table.
///
/// Every write excludes every other operation on the map. It exists to
/// measure `Smap` against the straightforward alternative.
#[derive(Debug)]
pub struct LockedMap<K, V> {
    map: RwLock<HashMap<K, V>>,
}

impl<K, V> LockedMap<K, V>
where
    K: Hash + Eq,
{
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
        }
    }

    /// Set the value for a key.
    pub fn set(&self, key: K, value: V) {
        self.map.write().insert(key, value);
    }

    /// Get a copy of the value stored for a key.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.map.read().get(key).cloned()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }

    /// Calls `f` for each entry until it returns `false`. Holds the read
    /// lock for the whole walk, so `f` must not write to this map.
    pub fn range<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        let map = self.map.read();
        for (key, value) in map.iter() {
            if !f(key, value) {
                break;
            }
        }
    }
}

impl<K, V> Default for LockedMap<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> MapAccess<K, V> for LockedMap<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Clone + Send + Sync,
{
    fn set(&self, key: K, value: V) {
        LockedMap::set(self, key, value)
    }

    fn load(&self, key: &K) -> Option<V> {
        LockedMap::get(self, key)
    }
}
