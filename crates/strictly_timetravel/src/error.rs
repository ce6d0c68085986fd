//! Errors for out-of-contract calls.

/// Error raised when a caller addresses history that does not exist.
///
/// The interface only offers jump targets for recorded snapshots, so this
/// means the caller is out of sync with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested snapshot index is past the end of history.
    #[display("History index {index} out of range (history has {len} snapshots)")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
