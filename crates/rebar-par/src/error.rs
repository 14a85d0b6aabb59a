//! Error kinds surfaced by semantic analysis (§7).

/// A semantic-analysis failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `binary_enclose`/`trinary` operator's secondary symbol was never
    /// found, or bracket nesting never returned to zero.
    #[error("unbalanced brackets")]
    UnbalancedBrackets,

    /// An operand span required by an operator's arity shape was empty (e.g.
    /// nothing on one side of a binary operator).
    #[error("empty expression span where an operand was required")]
    EmptyExpressionSpan,

    /// A symbol token at a pivot position had no operator descriptor that
    /// could apply in that position (no prefix/postfix/binary reading fits).
    #[error("no operator applies to symbol at this position")]
    NoApplicableOperator,

    #[error("out of memory during semantic analysis")]
    OutOfMemory,
}

/// Result alias for semantic-analysis operations.
pub type ParseResult<T> = Result<T, ParseError>;
