//! Error kinds surfaced by lexical analysis (§7).

/// A lexical-analysis failure, tagged with the byte offset it was detected
/// at (§1: "no source-location diagnostics beyond recording each token's
/// byte offset").
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("invalid escape sequence at offset {offset}")]
    InvalidEscapeSequence { offset: usize },

    #[error("unterminated string literal starting at offset {offset}")]
    UnterminatedStringLiteral { offset: usize },

    #[error("malformed numeric literal {text:?} at offset {offset}")]
    MalformedNumericLiteral { offset: usize, text: String },

    #[error("out of memory during lexical analysis")]
    OutOfMemory,
}

/// Result alias for lexical-analysis operations.
pub type LexResult<T> = Result<T, LexError>;
