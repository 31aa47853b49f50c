//! Statistics and diagnostics types.

#[cfg(feature = "metrics")]
use std::sync::atomic::{AtomicU64, Ordering};

/// Per-shard operation statistics.
///
/// All counters stay at 0 unless the `metrics` feature is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShardOps {
    /// Lookups that found a value.
    pub reads: u64,
    /// Lookups for an absent key.
    pub misses: u64,
    /// Set operations (inserts and overwrites).
    pub writes: u64,
    /// Times this shard's entries were walked by `len`, `iter` or `range`.
    /// Size reads for `is_empty`, `shard_loads`, `stats` and `Debug` are
    /// not counted.
    pub scans: u64,
}

/// Thread-safe statistics tracker for a single shard.
#[cfg(feature = "metrics")]
#[derive(Debug)]
pub(crate) struct ShardStats {
    reads: AtomicU64,
    misses: AtomicU64,
    writes: AtomicU64,
    scans: AtomicU64,
}

#[cfg(feature = "metrics")]
impl ShardStats {
    pub fn new() -> Self {
        Self {
            reads: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            writes: AtomicU64::new(0),
            scans: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_scan(&self) {
        self.scans.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ShardOps {
        ShardOps {
            reads: self.reads.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
            scans: self.scans.load(Ordering::Relaxed),
        }
    }
}

/// Zero-sized placeholder when metrics are disabled.
#[cfg(not(feature = "metrics"))]
#[derive(Debug)]
pub(crate) struct ShardStats;

#[cfg(not(feature = "metrics"))]
impl ShardStats {
    pub fn new() -> Self {
        ShardStats
    }

    #[inline]
    pub fn record_read(&self) {}

    #[inline]
    pub fn record_miss(&self) {}

    #[inline]
    pub fn record_write(&self) {}

    #[inline]
    pub fn record_scan(&self) {}

    pub fn snapshot(&self) -> ShardOps {
        ShardOps::default()
    }
}

impl Default for ShardStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate statistics for an Smap instance.
///
/// Each shard is sampled under its own lock, one after another, so under
/// concurrent writes the figures are a weakly consistent estimate.
#[derive(Debug, Clone)]
pub struct Stats {
    /// Total number of entries across all shards.
    pub size: usize,
    /// Number of entries in each shard.
    pub shard_sizes: Vec<usize>,
    /// Operation counts for each shard.
    pub operations: Vec<ShardOps>,
}

impl Stats {
    /// Sum of every shard's counters.
    pub fn total_ops(&self) -> ShardOps {
        self.operations
            .iter()
            .fold(ShardOps::default(), |acc, op| ShardOps {
                reads: acc.reads + op.reads,
                misses: acc.misses + op.misses,
                writes: acc.writes + op.writes,
                scans: acc.scans + op.scans,
            })
    }

    /// Largest shard size divided by the mean. 1.0 is a perfect spread;
    /// 0.0 for an empty map.
    pub fn max_load_ratio(&self) -> f64 {
        if self.size == 0 || self.shard_sizes.is_empty() {
            return 0.0;
        }
        let avg = self.size as f64 / self.shard_sizes.len() as f64;
        let max = self.shard_sizes.iter().copied().max().unwrap_or(0);
        max as f64 / avg
    }
}
