use std::hash::{BuildHasher, Hash, Hasher};

/// Seeds for the shard router. Fixed so that shard placement is the same
/// across map instances and runs.
const AHASH_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Hash function used to route a key to its shard.
/// Uses an enum to avoid trait object limitations with generics.
#[derive(Clone)]
pub enum ShardHasher {
    /// AHash with fixed seeds (default, fast and well-distributed).
    AHash(ahash::RandomState),
    /// FxHash (faster but potentially less distributed).
    #[cfg(feature = "fxhash")]
    FxHash,
}

impl ShardHasher {
    /// AHash router with the crate's fixed seeds.
    pub fn ahash() -> Self {
        ShardHasher::AHash(ahash::RandomState::with_seeds(
            AHASH_SEEDS[0],
            AHASH_SEEDS[1],
            AHASH_SEEDS[2],
            AHASH_SEEDS[3],
        ))
    }

    /// Hash a key to determine which shard it belongs to.
    #[inline]
    pub fn hash_key<K: Hash + ?Sized>(&self, key: &K) -> u64 {
        match self {
            ShardHasher::AHash(state) => {
                let mut hasher = state.build_hasher();
                key.hash(&mut hasher);
                hasher.finish()
            }
            #[cfg(feature = "fxhash")]
            ShardHasher::FxHash => {
                let mut hasher = fxhash::FxHasher64::default();
                key.hash(&mut hasher);
                hasher.finish()
            }
        }
    }

    /// Short name, used in logs and `Debug` output.
    pub fn name(&self) -> &'static str {
        match self {
            ShardHasher::AHash(_) => "ahash",
            #[cfg(feature = "fxhash")]
            ShardHasher::FxHash => "fxhash",
        }
    }
}

impl Default for ShardHasher {
    fn default() -> Self {
        ShardHasher::ahash()
    }
}

impl std::fmt::Debug for ShardHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
