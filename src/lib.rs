//! # Smap
//!
//! A thread-safe map with generic comparable key and any value.
//!
//! Smap splits its entries across multiple shards, each with its own lock.
//! Operations on different shards don't block each other and no operation
//! takes a map-wide lock, so many threads can read and write the same map
//! without any locking on the caller's side.
//!
//! ## Guarantees
//!
//! - `set` and `get` are linearizable per key: after `set(k, v)` returns,
//!   every `get(k)` from any thread sees `v` or a later value.
//! - There is no ordering across keys and no multi-key atomicity.
//! - `len`, `iter` and `range` walk the shards one at a time. They are
//!   weakly consistent: each entry is seen at most once, concurrent writes
//!   may or may not be seen.
//!
//! ## Example
//!
//! ```rust
//! use smap::Smap;
//!
//! let map = Smap::new();
//!
//! map.set("a", 1);
//! map.set("b", 2);
//!
//! assert_eq!(map.get_or_default(&"a"), (1, true));
//! assert_eq!(map.get_or_default(&"c"), (0, false));
//! assert_eq!(map.len(), 2);
//!
//! let mut seen = Vec::new();
//! map.range(|key, value| {
//!     seen.push((*key, *value));
//!     true
//! });
//! seen.sort();
//! assert_eq!(seen, vec![("a", 1), ("b", 2)]);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use smap::{HashFunction, SmapBuilder};
//!
//! let map = SmapBuilder::new()
//!     .shard_count(32)?  // Must be power of two
//!     .hash_function(HashFunction::AHash)
//!     .build::<String, i32>()?;
//! # Ok::<(), smap::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

/// Common interface over the concurrent and baseline maps.
pub mod access;
/// Single-lock baseline map.
pub mod baseline;
/// Configuration and builder types.
pub mod config;
/// Error types.
pub mod error;
/// Hash function implementations.
pub mod hash;
/// Iterator implementations.
pub mod iter;
/// Internal shard implementation.
mod shard;
/// Main Smap implementation.
pub mod smap;
/// Statistics and metrics collection.
pub mod stats;

// Re-export main types
pub use access::MapAccess;
pub use baseline::LockedMap;
pub use config::{Config, HashFunction, SmapBuilder};
pub use error::Error;
pub use iter::Iter;
pub use smap::Smap;
pub use stats::{ShardOps, Stats};
