//! Errors reported by the grouping engine

/// Errors that can occur while configuring the grouper or reading through
/// a cluster's subset view.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GroupError {
    /// Base clustering radius must be a finite, non-negative pixel distance.
    #[error("invalid epsilon: {0} (expected a finite value >= 0)")]
    InvalidEpsilon(f64),

    /// The subset view was issued by an earlier recompute pass.
    ///
    /// Views are detached whenever a list or viewport change is accepted,
    /// so their indices can no longer be trusted.
    #[error("stale subset view: captured at generation {captured}, list is at {current}")]
    StaleView {
        /// Generation the view was created at
        captured: u64,
        /// Current generation of the backing list
        current: u64,
    },

    /// Position inside a subset view is past its end.
    #[error("position {position} out of range for subset of {len} items")]
    PositionOutOfRange {
        /// Requested position within the view
        position: usize,
        /// Number of items in the view
        len: usize,
    },
}

/// Result alias for the grouping engine
pub type Result<T> = std::result::Result<T, GroupError>;
