use crate::kind::SyntaxKind;
use crate::span::Span;
use crate::text::TextPointer;
use std::fmt::{Debug, Formatter};

/// The classification of a single piece of trivia: bytes that are not
/// syntactically significant but must be preserved for lossless printing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    /// Spaces and tabs, never containing a line break.
    Whitespace,
    /// A single `\n`, `\r\n`, or `\r`.
    Newline,
    /// `-- ...` up to (not including) the end of the line.
    LineComment,
    /// `--[=*[ ... ]=*]`, possibly spanning lines.
    BlockComment,
    /// `#!...` at the very start of the input, up to the end of the line.
    Shebang,
}

/// One piece of trivia. Trivia is attached, in order, to the token that
/// follows it; trivia after the last real token belongs to EOF.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Trivia {
    kind: TriviaKind,
    text: TextPointer,
}

impl Trivia {
    pub fn new(kind: TriviaKind, text: TextPointer) -> Self {
        Self { kind, text }
    }

    pub fn kind(&self) -> TriviaKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn span(&self) -> Span {
        self.text.span()
    }
}

impl Debug for Trivia {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}@{}{:?}", self.kind, self.span(), self.text())
    }
}

/// A single token: a kind tag, a pointer to its text in the source, and the
/// ordered list of trivia that preceded it. Concatenating every token's
/// trivia texts followed by its own text, in token order, reproduces the
/// source byte-for-byte.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: SyntaxKind,
    text: TextPointer,
    trivia: Box<[Trivia]>,
}

impl Token {
    pub fn new(kind: SyntaxKind, text: TextPointer, trivia: Vec<Trivia>) -> Self {
        Self {
            kind,
            text,
            trivia: trivia.into_boxed_slice(),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    /// The token's own text, excluding trivia.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// The byte span of the token text only.
    pub fn span(&self) -> Span {
        self.text.span()
    }

    /// The byte span of the token including its leading trivia.
    pub fn full_span(&self) -> Span {
        match self.trivia.first() {
            Some(first) => first.span().merge(self.text.span()),
            None => self.text.span(),
        }
    }

    pub fn trivia(&self) -> &[Trivia] {
        &self.trivia
    }

    pub fn has_trivia(&self) -> bool {
        !self.trivia.is_empty()
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}@{}{:?}", self.kind, self.span(), self.text())?;
        if self.has_trivia() {
            write!(f, " {:?}", self.trivia)?;
        }
        Ok(())
    }
}
