use thiserror::Error;

/// Error types for `GrowArray` operations
///
/// Every failing operation leaves the array exactly as it was before the call.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowArrayError {
    /// The allocator refused to provide a buffer of the requested size
    #[error("Allocation failed: could not reserve {requested} slots")]
    BadAlloc {
        /// Capacity that was requested
        requested: usize,
    },
    /// Index is beyond the current array length
    #[error("Index out of range: index {index} is beyond array length {length}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
    /// Capacity arithmetic exceeded what the element type can address
    #[error("Capacity overflow: {requested} slots cannot be addressed")]
    Overflow {
        /// Capacity that was requested
        requested: usize,
    },
    /// Invalid parameters provided to `GrowthPolicy::new`
    #[error("Invalid growth policy: {reason}")]
    InvalidConfiguration {
        /// Description of why the policy was rejected
        reason: &'static str,
    },
}
