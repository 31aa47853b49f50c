use crate::stats::{ShardOps, ShardStats};
use hashbrown::HashMap;
use parking_lot::RwLock;
use std::hash::Hash;
use std::sync::Arc;

/// A single shard containing a HashMap protected by a read-write lock.
///
/// Values are kept behind `Arc` so readers can take them out of the shard
/// without holding the lock or copying.
#[derive(Debug)]
pub(crate) struct Shard<K, V> {
    map: RwLock<HashMap<K, Arc<V>>>,
    stats: ShardStats,
}

impl<K, V> Shard<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: RwLock::new(HashMap::with_capacity(capacity)),
            stats: ShardStats::new(),
        }
    }

    /// Store a value for the key, replacing any previous one.
    pub fn set(&self, key: K, value: V) {
        let value = Arc::new(value);
        let previous = {
            let mut map = self.map.write();
            map.insert(key, value)
        };
        self.stats.record_write();
        // The old value is released after the write lock.
        drop(previous);
    }

    /// Get a value by key, returning an Arc to enable zero-copy access.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let result = self.map.read().get(key).cloned();
        if result.is_some() {
            self.stats.record_read();
        } else {
            self.stats.record_miss();
        }
        result
    }

    /// Check if a key exists without cloning the value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.read().contains_key(key)
    }

    /// Count the entries by walking them under the read lock. Records a scan.
    pub fn count(&self) -> usize {
        let count = self.map.read().iter().count();
        self.stats.record_scan();
        count
    }

    /// Table size as tracked by the map. Not recorded in the stats.
    pub fn size(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Copy every entry into `buf` under a single read lock.
    pub fn collect_into(&self, buf: &mut Vec<(K, Arc<V>)>)
    where
        K: Clone,
    {
        let map = self.map.read();
        buf.reserve(map.len());
        buf.extend(map.iter().map(|(k, v)| (k.clone(), Arc::clone(v))));
        drop(map);
        self.stats.record_scan();
    }

    /// Get a snapshot of statistics for this shard.
    pub fn stats(&self) -> ShardOps {
        self.stats.snapshot()
    }
}
