use luau_syntax::Span;
use thiserror::Error;

/// Reasons the lexer can reject an input. Only the first failure is ever
/// reported; no further lexing is attempted after it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated long string literal")]
    UnterminatedLongString,
    #[error("unterminated interpolated string literal")]
    UnterminatedInterpString,
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("malformed number literal")]
    MalformedNumber,
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(char),
    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),
}

/// A failure produced while scanning tokens, carrying the byte span of the
/// offending input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The single error type surfaced from [`crate::parse`]. Lex failures are
/// folded into this shape at the boundary, so callers only ever deal with a
/// span and a message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub span: Span,
    pub message: String,
}

impl ParseError {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        ParseError::new(error.span, error.kind.to_string())
    }
}
