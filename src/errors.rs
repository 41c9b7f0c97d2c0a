/// Errors that can occur when operating on a [`Sequence`](crate::Sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// The index does not fall within `[-len, len - 1]` (or `[-len, len]` for insert).
    #[error("index {index} is out of range for sequence of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("slice step cannot be zero")]
    ZeroStep,
}

impl SequenceError {
    pub(crate) fn out_of_range(index: isize, len: usize) -> Self {
        SequenceError::IndexOutOfRange { index, len }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, SequenceError>;
