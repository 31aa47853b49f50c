use crate::shard::Shard;
use std::hash::Hash;
use std::sync::Arc;

/// Weakly consistent iterator over the entries of an [`Smap`](crate::Smap).
///
/// Entries are copied out one shard at a time under that shard's read lock,
/// and the lock is released before any of them is yielded. Writers are only
/// ever blocked for the duration of a single shard's copy, and code consuming
/// the iterator may freely call back into the map.
///
/// Every key lives in exactly one shard and every shard is read once, so an
/// entry is yielded at most once. Entries set after their shard has been read
/// are not seen; entries set into a shard not yet read are.
pub struct Iter<'a, K, V> {
    shards: &'a [Shard<K, V>],
    current_shard: usize,
    buffer: std::vec::IntoIter<(K, Arc<V>)>,
}

impl<'a, K, V> Iter<'a, K, V>
where
    K: Hash + Eq + Send + Sync + Clone,
    V: Send + Sync,
{
    pub(crate) fn new(shards: &'a [Shard<K, V>]) -> Self {
        Self {
            shards,
            current_shard: 0,
            buffer: Vec::new().into_iter(),
        }
    }

    /// Refill the buffer from the next non-empty shard.
    fn fill_buffer(&mut self) -> bool {
        let mut entries = Vec::new();

        while self.current_shard < self.shards.len() {
            self.shards[self.current_shard].collect_into(&mut entries);
            self.current_shard += 1;

            if !entries.is_empty() {
                self.buffer = entries.into_iter();
                return true;
            }
        }

        false
    }
}

impl<K, V> Iterator for Iter<'_, K, V>
where
    K: Hash + Eq + Send + Sync + Clone,
    V: Send + Sync,
{
    type Item = (K, Arc<V>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Some(item);
            }
            if !self.fill_buffer() {
                return None;
            }
        }
    }
}

impl<K, V> std::iter::FusedIterator for Iter<'_, K, V>
where
    K: Hash + Eq + Send + Sync + Clone,
    V: Send + Sync,
{
}
