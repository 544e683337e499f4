//! Error types for kernel invocations

/// Result type for kernel invocations
pub type Result<T> = std::result::Result<T, Error>;

/// Kernel invocation errors
///
/// Every error is reported before any output is produced. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The host object could not be exposed as a contiguous readable buffer
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Declared element width is not 4 bytes
    #[error("Invalid element width: expected 4 bytes, got {width}")]
    InvalidWidth {
        /// Declared per-element byte width
        width: usize,
    },

    /// Scratch or output allocation failed
    #[error("Allocation failed: {bytes} bytes requested")]
    OutOfMemory {
        /// Requested size
        bytes: usize,
    },
}

impl Error {
    /// Create an invalid argument error
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an invalid width error
    #[inline]
    pub fn invalid_width(width: usize) -> Self {
        Self::InvalidWidth { width }
    }

    /// Create an out-of-memory error
    #[inline]
    pub fn out_of_memory(bytes: usize) -> Self {
        Self::OutOfMemory { bytes }
    }

    /// Check if the caller handed over something the kernels cannot accept
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InvalidWidth { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_width(8);
        assert!(err.to_string().contains("got 8"));

        let err = Error::out_of_memory(1024 * 1024);
        assert!(err.to_string().contains("1048576"));
    }

    #[test]
    fn test_contract_violation() {
        assert!(Error::invalid_width(2).is_contract_violation());
        assert!(Error::invalid_argument("not readable").is_contract_violation());
        assert!(!Error::out_of_memory(16).is_contract_violation());
    }
}
