/// Failure computing a Fibonacci term
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// The sequence is only defined for non-negative indices.
    #[error("invalid argument: Fibonacci index must be non-negative, got {index}")]
    InvalidArgument { index: i64 },

    /// F(index) does not fit in a `u64`.
    #[error("overflow: F({index}) exceeds u64 (largest representable index is {max})")]
    Overflow { index: i64, max: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_index() {
        let err = SequenceError::InvalidArgument { index: -3 };
        assert_eq!(
            err.to_string(),
            "invalid argument: Fibonacci index must be non-negative, got -3"
        );

        let err = SequenceError::Overflow { index: 94, max: 93 };
        assert!(err.to_string().contains("F(94)"));
        assert!(err.to_string().contains("93"));
    }
}
