use crate::span::Span;
use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use std::rc::Rc;

/// An opaque type representing a reference to the source text of the parser.
pub type SourceText = Rc<str>;
pub type TextSize = u32;

/// A flyweight handle to a segment of text. The pointer contains a reference
/// to the source string, an offset within it, and the byte length of the
/// pointed text. Tokens and trivia store these rather than copied strings, so
/// a parsed tree shares a single allocation of the original source.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct TextPointer {
    source: SourceText,
    offset: TextSize,
    len: TextSize,
}

impl TextPointer {
    pub fn new(source: SourceText, offset: TextSize, len: TextSize) -> Self {
        debug_assert!(
            (offset + len) as usize <= source.len(),
            "text pointer {}+{} reaches past the end of a source of length {}",
            offset,
            len,
            source.len()
        );
        Self {
            source,
            offset,
            len,
        }
    }

    /// A zero-length pointer at `offset`, used for the synthetic EOF token.
    pub fn empty_at(source: SourceText, offset: TextSize) -> Self {
        Self::new(source, offset, 0)
    }

    pub fn as_str(&self) -> &str {
        &self.source[self.offset as usize..(self.offset + self.len) as usize]
    }

    pub fn start(&self) -> TextSize {
        self.offset
    }

    pub fn end(&self) -> TextSize {
        self.offset + self.len
    }

    pub fn len_size(&self) -> TextSize {
        self.len
    }

    pub fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.len)
    }

    pub fn source(&self) -> &SourceText {
        &self.source
    }
}

impl Deref for TextPointer {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl Debug for TextPointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}@{}", self.as_str(), self.span())
    }
}
