//! Error types.

/// Error produced while inverting notation.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InvertError {
    /// A multiplier or Square-1 amount cannot be negated.
    #[error("integer overflow")]
    IntegerOverflow,
}

/// Error produced while parsing notation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{message} at {}..{}", .span.start, .span.end)]
pub struct SyntaxError {
    /// Byte range of the input where the error was found.
    pub span: std::ops::Range<usize>,
    /// Description of what was expected and what was found.
    pub message: String,
}
