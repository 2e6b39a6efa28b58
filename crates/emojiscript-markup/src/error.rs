//! Errors returned by the transpiler.

use crate::parser::Transpilation;

/// Error that can occur when transpiling a markup document.
#[derive(Debug, thiserror::Error)]
pub enum TranspileError {
    #[error("empty input")]
    EmptyInput,

    /// At least one error was recorded. The partial output, every error and
    /// every warning are kept so callers can still show a preview.
    #[error("parsing errors: {}", .0.errors.join("; "))]
    Rejected(Box<Transpilation>),
}

impl TranspileError {
    /// All recorded error messages, in order.
    pub fn messages(&self) -> Vec<String> {
        match self {
            TranspileError::EmptyInput => vec![self.to_string()],
            TranspileError::Rejected(partial) => partial.errors.clone(),
        }
    }
}
