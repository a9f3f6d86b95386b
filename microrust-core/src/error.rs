use thiserror::Error;

/// Custom error type for the microrust crates.
///
/// The differentiation engine itself never fails: primitives and the reverse
/// pass only ever produce (possibly non-finite) floats. Errors come from the
/// layers built on top of it, such as network forward passes with the wrong
/// input width, losses over mismatched slices, invalid optimizer settings and
/// data loading.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MicroRustError {
    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Length mismatch during {operation}: {left} vs {right}")]
    LengthMismatch {
        operation: String,
        left: usize,
        right: usize,
    },

    #[error("Operation {operation} requires at least one element")]
    EmptyInput { operation: String },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
