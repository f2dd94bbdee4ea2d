/// Errors returned by vector operations.
///
/// Both variants are precondition failures detected before any output is
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    /// Operands that must correspond elementwise have different lengths.
    #[error("Vector lengths are different [{left}, {right}]")]
    DimensionMismatch {
        /// Length of the left hand operand (or the first vector of a collection).
        left: usize,
        /// Length of the right hand operand (or the offending vector).
        right: usize,
    },

    /// A reduction such as `sum` or `mean` was given no vectors.
    #[error("cannot reduce an empty collection of vectors")]
    EmptyInput,
}

pub type Result<T, E = VectorError> = core::result::Result<T, E>;

#[test]
fn test_error_display() {
    let err = VectorError::DimensionMismatch { left: 1, right: 2 };
    assert_eq!(err.to_string(), "Vector lengths are different [1, 2]");
    assert!(VectorError::EmptyInput.to_string().contains("empty"));
}
