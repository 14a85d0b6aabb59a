//! The façade's unified error type, wrapping each phase's own (§7).

/// Any failure surfaced by [`crate::Environment`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error(transparent)]
    Lex(#[from] rebar_lex::LexError),
    #[error(transparent)]
    Parse(#[from] rebar_par::ParseError),
}

pub type EnvironmentResult<T> = Result<T, EnvironmentError>;
