//! A lossless parser for the Luau language: Lua 5.1 extended with static
//! types, generics with defaults, string interpolation, compound assignment,
//! `continue`, type assertions, and function attributes.
//!
//! [`parse`] produces a concrete syntax tree that preserves every byte of the
//! input, so [`print`] renders it back byte-for-byte. The [`cst`] module
//! holds the tree model, visitor, and span tools; the [`ast`] module is the
//! lossy, trivia-free view of the same grammar.

pub mod ast;
pub mod cst;
mod error;
mod lexer;
mod parser;

pub use cst::{print, Cst, Spanned, Visit, VisitWith};
pub use error::{LexError, LexErrorKind, ParseError};
pub use lexer::tokenize;
pub use luau_syntax::{SourceText, Span, SyntaxKind, TextPointer, TextSize, Token, Trivia, TriviaKind};

/// Parse a source buffer into its lossless CST. The first malformed input
/// aborts the parse; lex failures are reported through the same error shape
/// as grammar failures.
pub fn parse(source: &str) -> Result<Cst, ParseError> {
    let tokens = lexer::tokenize(source)?;
    parser::parse_tokens(tokens)
}
