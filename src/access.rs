//! Common set/load interface over the crate's maps.

use crate::smap::Smap;
use std::hash::Hash;

/// The two per-key operations shared by [`Smap`] and
/// [`LockedMap`](crate::LockedMap), so one workload can drive either.
///
/// `load` returns an owned copy of the value.
pub trait MapAccess<K, V>: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: K, value: V);

    /// Copy out the value stored under `key`, if any.
    fn load(&self, key: &K) -> Option<V>;
}

impl<K, V> MapAccess<K, V> for Smap<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Clone + Send + Sync,
{
    fn set(&self, key: K, value: V) {
        Smap::set(self, key, value)
    }

    fn load(&self, key: &K) -> Option<V> {
        Smap::get(self, key).map(|value| (*value).clone())
    }
}
