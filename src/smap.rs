use crate::config::{create_hasher, validate_shard_count, Config};
use crate::error::Error;
use crate::hash::ShardHasher;
use crate::iter::Iter;
use crate::shard::Shard;
use crate::stats::{ShardOps, Stats};
use log::debug;
use std::hash::Hash;
use std::sync::Arc;

/// Thread-safe map with generic comparable key and any value.
///
/// Splits entries across multiple shards, each with its own read-write lock,
/// so operations on different shards don't block each other and no operation
/// ever takes a map-wide lock. Values are stored behind `Arc<V>` so `get` can
/// hand them out without copying.
///
/// Each `set`/`get` is linearizable for its key. Nothing is guaranteed across
/// keys: `len`, `iter` and `range` visit the shards one after another and may
/// observe concurrent writes to some shards but not others.
///
/// # Example
///
/// ```rust
/// use smap::Smap;
///
/// let map = Smap::new();
/// map.set("a", 1);
/// map.set("b", 2);
///
/// assert_eq!(map.get_or_default(&"a"), (1, true));
/// assert_eq!(map.get_or_default(&"c"), (0, false));
/// assert_eq!(map.len(), 2);
/// ```
pub struct Smap<K, V> {
    shards: Vec<Shard<K, V>>,
    shard_mask: usize,
    hash: ShardHasher,
}

impl<K, V> Smap<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    /// Create a new empty map with defaults (16 shards, ahash).
    pub fn new() -> Self {
        Self::build(&Config::default())
    }

    /// Create a new empty map with custom config.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        validate_shard_count(config.shard_count)?;
        Ok(Self::build(&config))
    }

    /// Assemble the shards. `config.shard_count` must already be validated.
    fn build(config: &Config) -> Self {
        let shard_count = config.shard_count;
        let capacity = config.capacity_per_shard.unwrap_or(0);
        let shards = (0..shard_count)
            .map(|_| Shard::with_capacity(capacity))
            .collect();
        let hash = create_hasher(config.hash_function);

        debug!(
            "created smap: {} shards, hasher {}, capacity/shard {}",
            shard_count,
            hash.name(),
            capacity
        );

        Self {
            shards,
            shard_mask: shard_count - 1,
            hash,
        }
    }

    /// Figure out which shard this key belongs to.
    #[inline]
    fn shard_for(&self, key: &K) -> &Shard<K, V> {
        let hash = self.hash.hash_key(key);
        &self.shards[(hash as usize) & self.shard_mask]
    }

    /// Set the value for a key, overwriting any previous value.
    ///
    /// Once `set` returns, every later `get` of the key from any thread sees
    /// this value or a newer one.
    pub fn set(&self, key: K, value: V) {
        self.shard_for(&key).set(key, value)
    }

    /// Get the value stored for a key, or `None` if there is none.
    ///
    /// The returned `Arc` is independent of the map: a later `set` on the
    /// same key does not change what the caller is holding.
    ///
    /// ```rust
    /// use smap::Smap;
    ///
    /// let map = Smap::new();
    /// map.set("key", "value");
    ///
    /// assert_eq!(*map.get(&"key").unwrap(), "value");
    /// assert!(map.get(&"missing").is_none());
    /// ```
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.shard_for(key).get(key)
    }

    /// Get a copy of the value stored for a key together with a found flag.
    /// Returns `(V::default(), false)` if no value is present.
    ///
    /// Check the flag: a stored default value and a missing key return the
    /// same `V`.
    pub fn get_or_default(&self, key: &K) -> (V, bool)
    where
        V: Clone + Default,
    {
        match self.get(key) {
            Some(value) => ((*value).clone(), true),
            None => (V::default(), false),
        }
    }

    /// Check if a key is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.shard_for(key).contains_key(key)
    }

    /// Returns the number of elements in the map.
    ///
    /// Walks every entry, O(n). Each shard is counted under its own lock,
    /// one after another, so the result may mix states from before and after
    /// concurrent writes. With no concurrent writers it is exact.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.count()).sum()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.is_empty())
    }

    /// Calls `f` for each key and value present in the map, in no particular
    /// order, until `f` returns `false`.
    ///
    /// No shard lock is held while `f` runs, so `f` may call `set` or `get`
    /// on this same map. Each entry is visited at most once; entries set
    /// concurrently may or may not be visited.
    ///
    /// ```rust
    /// use smap::Smap;
    ///
    /// let map = Smap::new();
    /// for i in 0..10 {
    ///     map.set(i, i * 10);
    /// }
    ///
    /// let mut visited = 0;
    /// map.range(|_key, _value| {
    ///     visited += 1;
    ///     visited < 3
    /// });
    /// assert_eq!(visited, 3);
    /// ```
    pub fn range<F>(&self, mut f: F)
    where
        K: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        for (key, value) in self.iter() {
            if !f(&key, &value) {
                break;
            }
        }
    }

    /// Weakly consistent iterator over all entries. See [`Iter`].
    pub fn iter(&self) -> Iter<'_, K, V>
    where
        K: Clone,
    {
        Iter::new(&self.shards)
    }

    /// Number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Entry count of each shard, in shard order. Does not count as a scan.
    pub fn shard_loads(&self) -> Vec<usize> {
        self.shards.iter().map(|s| s.size()).collect()
    }

    /// Get detailed statistics about the map and its shards.
    pub fn stats(&self) -> Stats {
        let shard_sizes = self.shard_loads();
        let operations: Vec<ShardOps> = self.shards.iter().map(|s| s.stats()).collect();
        let size: usize = shard_sizes.iter().sum();

        Stats {
            size,
            shard_sizes,
            operations,
        }
    }
}

impl<K, V> Default for Smap<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> std::fmt::Debug for Smap<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Smap")
            .field("shards", &self.shards.len())
            .field("hasher", &self.hash)
            .field("len", &self.shard_loads().iter().sum::<usize>())
            .finish()
    }
}

impl<K, V> Extend<(K, V)> for Smap<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Smap<K, V>
where
    K: Hash + Eq + Send + Sync,
    V: Send + Sync,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, K, V> IntoIterator for &'a Smap<K, V>
where
    K: Hash + Eq + Send + Sync + Clone,
    V: Send + Sync,
{
    type Item = (K, Arc<V>);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
