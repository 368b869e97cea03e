//! Error type shared by every fallible deque operation.

use thiserror::Error;

pub type DequeResult<T, E = DequeError> = Result<T, E>;

/// Reasons a deque operation can fail.
///
/// A failed call never leaves the deque partially mutated: the buffer is in
/// exactly the state it held before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DequeError {
    /// A construction argument was rejected (negative or unrepresentable capacity).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An append hit capacity under [`OverflowPolicy::RaiseOnFull`](crate::OverflowPolicy::RaiseOnFull).
    #[error("full")]
    Full,

    /// A pop was attempted on an empty deque.
    #[error("empty")]
    Empty,

    #[error("index {index} out of range for deque of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// Slicing, index assignment and index deletion are rejected outright.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DequeError::Full.to_string(), "full");
        assert_eq!(DequeError::Empty.to_string(), "empty");
        assert_eq!(
            DequeError::IndexOutOfRange { index: -4, len: 3 }.to_string(),
            "index -4 out of range for deque of length 3"
        );
        assert_eq!(
            DequeError::UnsupportedOperation("slice access").to_string(),
            "unsupported operation: slice access"
        );
    }
}
