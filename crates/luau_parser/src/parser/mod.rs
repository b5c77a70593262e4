use crate::cst::Cst;
use crate::error::ParseError;
use luau_syntax::{SyntaxKind, Token};

mod expr;
mod stat;
mod types;

/// Parse an eagerly-lexed token stream into a CST. The stream must be
/// terminated by an EOF token, which the lexer guarantees.
pub(crate) fn parse_tokens(tokens: Vec<Token>) -> Result<Cst, ParseError> {
    let mut parser = Parser::new(tokens);
    let block = parser.parse_block()?;
    if !parser.at(SyntaxKind::EOF) {
        return Err(parser.error_here(format!(
            "expected the end of the file, found {}",
            parser.describe_current()
        )));
    }
    let eof = parser.bump();
    Ok(Cst { block, eof })
}

/// A position in the token stream that the parser can rewind to after a
/// speculative parse attempt. The stream itself is immutable, so the position
/// is the entire parser state.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ParserCheckpoint {
    pos: usize,
}

/// Recursive-descent parser over the materialized token stream. One token of
/// lookahead covers most of the grammar; the documented ambiguities use
/// targeted multi-token peeks or checkpointed probes instead.
pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|token| token.kind() == SyntaxKind::EOF),
            "token stream is not terminated by EOF"
        );
        Self { tokens, pos: 0 }
    }

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn current_kind(&self) -> SyntaxKind {
        self.current().kind()
    }

    #[inline]
    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    /// True if the current token can serve as a plain name: an identifier or
    /// one of the contextual keywords.
    #[inline]
    pub(crate) fn at_name(&self) -> bool {
        self.current_kind().is_name()
    }

    /// The kind of the token `offset` positions ahead, saturating at EOF.
    pub(crate) fn peek_kind(&self, offset: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + offset)
            .map(Token::kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    /// Take the current token and advance. The EOF token is never advanced
    /// past, so `bump` at the end of input keeps returning it.
    pub(crate) fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Take the current token if it matches, advancing past it.
    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> Option<Token> {
        if self.at(kind) {
            Some(self.bump())
        } else {
            None
        }
    }

    /// Take the current token if it matches `kind`; otherwise report what was
    /// expected. `what` reads as the object of "expected", e.g.
    /// "`end` to close the function body".
    pub(crate) fn expect(&mut self, kind: SyntaxKind, what: &str) -> Result<Token, ParseError> {
        if self.at(kind) {
            return Ok(self.bump());
        }
        Err(self.error_here(format!(
            "expected {what}, found {}",
            self.describe_current()
        )))
    }

    /// Take the current token if it can serve as a name.
    pub(crate) fn expect_name(&mut self, what: &str) -> Result<Token, ParseError> {
        if self.at_name() {
            return Ok(self.bump());
        }
        Err(self.error_here(format!(
            "expected {what}, found {}",
            self.describe_current()
        )))
    }

    pub(crate) fn checkpoint(&self) -> ParserCheckpoint {
        ParserCheckpoint { pos: self.pos }
    }

    pub(crate) fn rewind(&mut self, checkpoint: ParserCheckpoint) {
        self.pos = checkpoint.pos;
    }

    /// An error whose span is the current token.
    #[cfg(not(feature = "debug-tracing"))]
    pub(crate) fn error_here(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.current().span(), message)
    }

    /// An error whose span is the current token. With tracing enabled, the
    /// unconsumed tail of the token stream is appended to the message so the
    /// state at the failure point is visible.
    #[cfg(feature = "debug-tracing")]
    pub(crate) fn error_here(&self, message: impl Into<String>) -> ParseError {
        let message = format!(
            "{}\nRemaining tokens:\n-----------------\n{:#?}",
            message.into(),
            &self.tokens[self.pos..],
        );
        ParseError::new(self.current().span(), message)
    }

    pub(crate) fn describe_current(&self) -> String {
        let token = self.current();
        match token.kind() {
            SyntaxKind::EOF => "the end of the file".to_string(),
            SyntaxKind::IDENT => format!("`{}`", token.text()),
            SyntaxKind::NUMBER => format!("the number `{}`", token.text()),
            kind => match kind.fixed_text() {
                Some(text) => format!("`{text}`"),
                None => kind.describe().to_string(),
            },
        }
    }
}
