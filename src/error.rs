/// Errors that can occur when configuring an Smap.
///
/// Map operations themselves never fail; only construction can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The shard count is invalid (must be a power of two and greater than 0).
    InvalidShardCount(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidShardCount(count) => write!(
                f,
                "invalid shard count {}: must be a power of two and greater than 0",
                count
            ),
        }
    }
}

impl std::error::Error for Error {}
