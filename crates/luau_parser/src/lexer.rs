use memchr::memchr;

use crate::error::{LexError, LexErrorKind};
use luau_syntax::{Span, SourceText, SyntaxKind, TextPointer, TextSize, Token, Trivia, TriviaKind};

/// Scan `source` into its complete token sequence, terminated by a single EOF
/// token. Trivia (whitespace, comments, the shebang) is accumulated while
/// scanning and attached to the next syntactic token; trivia after the last
/// real token is attached to EOF. The first malformed input aborts the scan.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(SourceText::from(source)).tokenize()
}

/// State for one interpolated string that is currently open: the brace depth
/// of the expression being lexed inside it, and where the literal began (for
/// error reporting when the input ends before it closes).
#[derive(Clone, Copy, Debug)]
struct InterpFrame {
    depth: u32,
    opened_at: TextSize,
}

pub(crate) struct Lexer {
    source: SourceText,
    /// Current byte offset into the text.
    position: usize,
    /// Byte offset where the token currently being scanned began.
    token_start: usize,
    /// Trivia collected since the last syntactic token was produced.
    pending_trivia: Vec<Trivia>,
    /// One frame per interpolated string the cursor is nested inside.
    interp_stack: Vec<InterpFrame>,
}

impl Lexer {
    pub(crate) fn new(source: SourceText) -> Self {
        Self {
            source,
            position: 0,
            token_start: 0,
            pending_trivia: Vec::new(),
            interp_stack: Vec::new(),
        }
    }

    pub(crate) fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.collect_trivia()?;
            self.token_start = self.position;

            if self.is_eof() {
                if let Some(frame) = self.interp_stack.first() {
                    return Err(LexError::new(
                        LexErrorKind::UnterminatedInterpString,
                        Span::new(frame.opened_at, frame.opened_at + 1),
                    ));
                }
                tokens.push(self.extract_token(SyntaxKind::EOF));
                return Ok(tokens);
            }

            let kind = self.next_token()?;
            tokens.push(self.extract_token(kind));
        }
    }

    /// Creates a token of the given kind from the current scan range, taking
    /// ownership of all trivia collected since the previous token.
    fn extract_token(&mut self, kind: SyntaxKind) -> Token {
        let text = self.pointer(self.token_start, self.position);
        Token::new(kind, text, std::mem::take(&mut self.pending_trivia))
    }

    //#region Trivia

    /// Accumulate whitespace, newlines, comments, and the shebang into the
    /// pending trivia list until the cursor rests on a syntactic token.
    fn collect_trivia(&mut self) -> Result<(), LexError> {
        loop {
            let start = self.position;
            let kind = match self.current() {
                b' ' | b'\t' | 0x0B | 0x0C => {
                    while matches!(self.current(), b' ' | b'\t' | 0x0B | 0x0C) {
                        self.advance();
                    }
                    TriviaKind::Whitespace
                }
                b'\n' => {
                    self.advance();
                    TriviaKind::Newline
                }
                b'\r' => {
                    self.advance();
                    self.advance_if(b'\n');
                    TriviaKind::Newline
                }
                b'-' if self.peek_at(1) == b'-' => {
                    self.position += 2;
                    match self.long_bracket_level() {
                        Some(level) => {
                            if !self.consume_long_bracket(level) {
                                return Err(self.error_from(
                                    LexErrorKind::UnterminatedBlockComment,
                                    start,
                                ));
                            }
                            TriviaKind::BlockComment
                        }
                        None => {
                            self.consume_to_line_end();
                            TriviaKind::LineComment
                        }
                    }
                }
                b'#' if self.position == 0 && self.peek_at(1) == b'!' => {
                    self.consume_to_line_end();
                    TriviaKind::Shebang
                }
                _ => return Ok(()),
            };
            let text = self.pointer(start, self.position);
            self.pending_trivia.push(Trivia::new(kind, text));
        }
    }

    /// Advance to the next `\n` or `\r` without consuming it.
    fn consume_to_line_end(&mut self) {
        while !self.is_eof() && !matches!(self.current(), b'\n' | b'\r') {
            self.advance();
        }
    }
    //#endregion

    //#region Token dispatch

    fn next_token(&mut self) -> Result<SyntaxKind, LexError> {
        match self.current() {
            c if c.is_ascii_alphabetic() || c == b'_' => Ok(self.consume_name()),
            c if c.is_ascii_digit() => self.consume_number(),
            b'.' if self.peek_at(1).is_ascii_digit() => self.consume_number(),
            b'"' | b'\'' => self.consume_string(),
            b'`' => self.consume_interp_segment(true),
            b'[' => match self.long_bracket_level() {
                Some(level) => self.consume_long_string(level),
                None => Ok(self.consume_byte(SyntaxKind::LSQUARE)),
            },
            b']' => Ok(self.consume_byte(SyntaxKind::RSQUARE)),
            b'(' => Ok(self.consume_byte(SyntaxKind::LPAREN)),
            b')' => Ok(self.consume_byte(SyntaxKind::RPAREN)),
            b'{' => {
                if let Some(frame) = self.interp_stack.last_mut() {
                    frame.depth += 1;
                }
                Ok(self.consume_byte(SyntaxKind::LCURLY))
            }
            b'}' => match self.interp_stack.last_mut() {
                Some(frame) if frame.depth == 0 => self.consume_interp_segment(false),
                Some(frame) => {
                    frame.depth -= 1;
                    Ok(self.consume_byte(SyntaxKind::RCURLY))
                }
                None => Ok(self.consume_byte(SyntaxKind::RCURLY)),
            },
            b',' => Ok(self.consume_byte(SyntaxKind::COMMA)),
            b';' => Ok(self.consume_byte(SyntaxKind::SEMI)),
            b':' => Ok(self.consume_pair_or(b':', SyntaxKind::DOUBLE_COLON, SyntaxKind::COLON)),
            b'.' => Ok(self.consume_dots()),
            b'?' => Ok(self.consume_byte(SyntaxKind::QUESTION)),
            b'|' => Ok(self.consume_byte(SyntaxKind::PIPE)),
            b'&' => Ok(self.consume_byte(SyntaxKind::AMPER)),
            b'<' => Ok(self.consume_pair_or(b'=', SyntaxKind::LANGLE_EQUAL, SyntaxKind::LANGLE)),
            b'>' => Ok(self.consume_pair_or(b'=', SyntaxKind::RANGLE_EQUAL, SyntaxKind::RANGLE)),
            b'=' => Ok(self.consume_pair_or(b'=', SyntaxKind::EQUAL2, SyntaxKind::EQUAL)),
            b'~' => {
                self.advance();
                if self.advance_if(b'=') {
                    Ok(SyntaxKind::TILDE_EQUAL)
                } else {
                    Err(self.error_from(
                        LexErrorKind::UnexpectedCharacter('~'),
                        self.token_start,
                    ))
                }
            }
            b'+' => Ok(self.consume_pair_or(b'=', SyntaxKind::PLUS_EQUAL, SyntaxKind::PLUS)),
            b'-' => {
                self.advance();
                if self.advance_if(b'>') {
                    Ok(SyntaxKind::ARROW)
                } else if self.advance_if(b'=') {
                    Ok(SyntaxKind::MINUS_EQUAL)
                } else {
                    Ok(SyntaxKind::MINUS)
                }
            }
            b'*' => Ok(self.consume_pair_or(b'=', SyntaxKind::STAR_EQUAL, SyntaxKind::STAR)),
            b'/' => {
                self.advance();
                if self.advance_if(b'/') {
                    if self.advance_if(b'=') {
                        Ok(SyntaxKind::SLASH2_EQUAL)
                    } else {
                        Ok(SyntaxKind::SLASH2)
                    }
                } else if self.advance_if(b'=') {
                    Ok(SyntaxKind::SLASH_EQUAL)
                } else {
                    Ok(SyntaxKind::SLASH)
                }
            }
            b'%' => Ok(self.consume_pair_or(b'=', SyntaxKind::PERCENT_EQUAL, SyntaxKind::PERCENT)),
            b'^' => Ok(self.consume_pair_or(b'=', SyntaxKind::CARET_EQUAL, SyntaxKind::CARET)),
            b'#' => Ok(self.consume_byte(SyntaxKind::HASH)),
            b'@' => Ok(self.consume_byte(SyntaxKind::AT)),
            _ => {
                let character = self.current_char();
                let start = self.position;
                self.position += character.len_utf8();
                Err(self.error_from(LexErrorKind::UnexpectedCharacter(character), start))
            }
        }
    }
    //#endregion

    //#region Names and numbers

    fn consume_name(&mut self) -> SyntaxKind {
        let start = self.position;
        while self.current().is_ascii_alphanumeric() || self.current() == b'_' {
            self.advance();
        }
        let text = &self.source[start..self.position];
        SyntaxKind::from_identifier(text).unwrap_or(SyntaxKind::IDENT)
    }

    fn consume_number(&mut self) -> Result<SyntaxKind, LexError> {
        let start = self.position;
        if self.current() == b'0' && matches!(self.peek_at(1), b'x' | b'X') {
            self.position += 2;
            if !self.consume_digit_run(|c| c.is_ascii_hexdigit()) {
                return Err(self.error_from(LexErrorKind::MalformedNumber, start));
            }
        } else if self.current() == b'0' && matches!(self.peek_at(1), b'b' | b'B') {
            self.position += 2;
            if !self.consume_digit_run(|c| matches!(c, b'0' | b'1')) {
                return Err(self.error_from(LexErrorKind::MalformedNumber, start));
            }
        } else {
            self.consume_digit_run(|c| c.is_ascii_digit());
            // A decimal point only belongs to the number when not starting a
            // `..` concat operator.
            if self.current() == b'.' && self.peek_at(1) != b'.' {
                self.advance();
                self.consume_digit_run(|c| c.is_ascii_digit());
            }
            if matches!(self.current(), b'e' | b'E') {
                self.advance();
                if matches!(self.current(), b'+' | b'-') {
                    self.advance();
                }
                if !self.consume_digit_run(|c| c.is_ascii_digit()) {
                    return Err(self.error_from(LexErrorKind::MalformedNumber, start));
                }
            }
        }

        // A literal running straight into a name character is malformed, not
        // two adjacent tokens.
        if self.current().is_ascii_alphanumeric() || self.current() == b'_' {
            self.advance();
            return Err(self.error_from(LexErrorKind::MalformedNumber, start));
        }
        Ok(SyntaxKind::NUMBER)
    }

    /// Consume digits matching `is_digit`, allowing `_` separators anywhere in
    /// the run. Returns true if at least one actual digit was consumed.
    fn consume_digit_run(&mut self, is_digit: impl Fn(u8) -> bool) -> bool {
        let mut any = false;
        loop {
            let current = self.current();
            if is_digit(current) {
                any = true;
                self.advance();
            } else if current == b'_' {
                self.advance();
            } else {
                return any;
            }
        }
    }
    //#endregion

    //#region Strings

    fn consume_string(&mut self) -> Result<SyntaxKind, LexError> {
        let start = self.position;
        let quote = self.current();
        self.advance();
        loop {
            if self.is_eof() || matches!(self.current(), b'\n' | b'\r') {
                return Err(self.error_from(LexErrorKind::UnterminatedString, start));
            }
            match self.current() {
                b'\\' => self.consume_escape(false)?,
                c if c == quote => {
                    self.advance();
                    return Ok(SyntaxKind::STRING);
                }
                _ => self.advance(),
            }
        }
    }

    fn consume_long_string(&mut self, level: usize) -> Result<SyntaxKind, LexError> {
        let start = self.position;
        if self.consume_long_bracket(level) {
            Ok(SyntaxKind::LONG_STRING)
        } else {
            Err(self.error_from(LexErrorKind::UnterminatedLongString, start))
        }
    }

    /// Validate and consume one backslash escape. The cursor must sit on the
    /// backslash. Interpolated strings additionally allow `` \` `` and `\{`.
    fn consume_escape(&mut self, in_interp: bool) -> Result<(), LexError> {
        let escape_start = self.position;
        self.advance();
        if self.is_eof() {
            let kind = if in_interp {
                LexErrorKind::UnterminatedInterpString
            } else {
                LexErrorKind::UnterminatedString
            };
            return Err(self.error_from(kind, escape_start));
        }
        match self.current() {
            b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' | b'\\' | b'\'' | b'"' => {
                self.advance();
                Ok(())
            }
            b'`' | b'{' if in_interp => {
                self.advance();
                Ok(())
            }
            // An escaped line ending continues the string on the next line.
            b'\n' => {
                self.advance();
                Ok(())
            }
            b'\r' => {
                self.advance();
                self.advance_if(b'\n');
                Ok(())
            }
            // \z skips all following whitespace, including line endings.
            b'z' => {
                self.advance();
                while self.current().is_ascii_whitespace() && !self.is_eof() {
                    self.advance();
                }
                Ok(())
            }
            b'x' => {
                self.advance();
                for _ in 0..2 {
                    if !self.current().is_ascii_hexdigit() {
                        return Err(self.error_from(LexErrorKind::InvalidEscape('x'), escape_start));
                    }
                    self.advance();
                }
                Ok(())
            }
            b'u' => {
                self.advance();
                if !self.advance_if(b'{') {
                    return Err(self.error_from(LexErrorKind::InvalidEscape('u'), escape_start));
                }
                if !self.consume_digit_run(|c| c.is_ascii_hexdigit()) {
                    return Err(self.error_from(LexErrorKind::InvalidEscape('u'), escape_start));
                }
                if !self.advance_if(b'}') {
                    return Err(self.error_from(LexErrorKind::InvalidEscape('u'), escape_start));
                }
                Ok(())
            }
            // Up to three decimal digits naming a byte value.
            c if c.is_ascii_digit() => {
                for _ in 0..3 {
                    if !self.current().is_ascii_digit() {
                        break;
                    }
                    self.advance();
                }
                Ok(())
            }
            _ => {
                let character = self.current_char();
                self.position += character.len_utf8();
                Err(self.error_from(LexErrorKind::InvalidEscape(character), escape_start))
            }
        }
    }
    //#endregion

    //#region Interpolated strings

    /// Consume one segment of an interpolated string, starting either at the
    /// opening backtick (`opening`) or at the `}` that closes an embedded
    /// expression. The segment ends at a backtick (closing the literal) or at
    /// a `{` (opening the next embedded expression).
    fn consume_interp_segment(&mut self, opening: bool) -> Result<SyntaxKind, LexError> {
        let start = self.position;
        self.advance();
        loop {
            if self.is_eof() || matches!(self.current(), b'\n' | b'\r') {
                return Err(self.error_from(LexErrorKind::UnterminatedInterpString, start));
            }
            match self.current() {
                b'`' => {
                    self.advance();
                    return Ok(if opening {
                        SyntaxKind::INTERP_STRING_SIMPLE
                    } else {
                        self.interp_stack.pop();
                        SyntaxKind::INTERP_STRING_END
                    });
                }
                b'{' => {
                    self.advance();
                    if opening {
                        self.interp_stack.push(InterpFrame {
                            depth: 0,
                            opened_at: start as TextSize,
                        });
                        return Ok(SyntaxKind::INTERP_STRING_BEGIN);
                    }
                    return Ok(SyntaxKind::INTERP_STRING_MID);
                }
                b'\\' => self.consume_escape(true)?,
                _ => self.advance(),
            }
        }
    }
    //#endregion

    //#region Long brackets

    /// If the cursor sits at a long-bracket opener `[=*[`, returns its level
    /// (the number of `=` characters) without consuming anything.
    fn long_bracket_level(&self) -> Option<usize> {
        if self.current() != b'[' {
            return None;
        }
        let mut offset = 1;
        while self.peek_at(offset) == b'=' {
            offset += 1;
        }
        (self.peek_at(offset) == b'[').then_some(offset - 1)
    }

    /// Consume an entire long-bracket body, opener through closer, leaving
    /// the cursor just past the closing bracket. Returns false if the input
    /// ends before a closer of the same level is found.
    fn consume_long_bracket(&mut self, level: usize) -> bool {
        self.position += level + 2;
        loop {
            match memchr(b']', &self.source.as_bytes()[self.position..]) {
                None => {
                    self.position = self.source.len();
                    return false;
                }
                Some(offset) => {
                    self.position += offset;
                    let mut inner = 1;
                    while self.peek_at(inner) == b'=' {
                        inner += 1;
                    }
                    if inner - 1 == level && self.peek_at(inner) == b']' {
                        self.position += level + 2;
                        return true;
                    }
                    self.advance();
                }
            }
        }
    }
    //#endregion

    //#region Internal API (current, advance, etc.)

    /// Advance one position and return the given `kind`. A syntax convenience
    /// to consume the end of a token in one expression.
    fn consume_byte(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.advance();
        kind
    }

    /// Consume one byte, then either `pair` if the next byte is `second`, or
    /// `single` otherwise.
    fn consume_pair_or(&mut self, second: u8, pair: SyntaxKind, single: SyntaxKind) -> SyntaxKind {
        self.advance();
        if self.advance_if(second) {
            pair
        } else {
            single
        }
    }

    /// `.` `..` `...` or `..=`. The `.digit` number case is handled before
    /// dispatch reaches here.
    fn consume_dots(&mut self) -> SyntaxKind {
        self.advance();
        if !self.advance_if(b'.') {
            return SyntaxKind::DOT;
        }
        if self.advance_if(b'.') {
            SyntaxKind::DOT3
        } else if self.advance_if(b'=') {
            SyntaxKind::DOT2_EQUAL
        } else {
            SyntaxKind::DOT2
        }
    }

    /// Returns the byte at the current position, or NUL at the end of input.
    fn current(&self) -> u8 {
        self.source.as_bytes().get(self.position).copied().unwrap_or(0)
    }

    /// Decodes the complete character at the current position.
    fn current_char(&self) -> char {
        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Returns the byte `offset` positions after the current one, or NUL past
    /// the end of input.
    fn peek_at(&self, offset: usize) -> u8 {
        self.source
            .as_bytes()
            .get(self.position + offset)
            .copied()
            .unwrap_or(0)
    }

    fn is_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    fn advance(&mut self) {
        if self.position < self.source.len() {
            self.position += 1;
        }
    }

    fn advance_if(&mut self, byte: u8) -> bool {
        if self.current() == byte {
            self.advance();
            true
        } else {
            false
        }
    }

    fn pointer(&self, start: usize, end: usize) -> TextPointer {
        TextPointer::new(
            self.source.clone(),
            start as TextSize,
            (end - start) as TextSize,
        )
    }

    fn error_from(&self, kind: LexErrorKind, start: usize) -> LexError {
        let end = self.position.max(start + 1).min(self.source.len().max(start + 1));
        LexError::new(kind, Span::new(start as TextSize, end as TextSize))
    }
    //#endregion
}

#[cfg(test)]
mod tests {
    use super::tokenize;
    use crate::error::LexErrorKind;
    use luau_syntax::{SyntaxKind, TriviaKind};

    fn kinds(source: &str) -> Vec<SyntaxKind> {
        tokenize(source)
            .unwrap_or_else(|err| panic!("failed to lex {source:?}: {err}"))
            .iter()
            .map(|token| token.kind())
            .collect()
    }

    #[test]
    fn lexes_keywords_and_names() {
        assert_eq!(
            kinds("local x = nil"),
            vec![
                SyntaxKind::LOCAL_KW,
                SyntaxKind::IDENT,
                SyntaxKind::EQUAL,
                SyntaxKind::NIL_KW,
                SyntaxKind::EOF,
            ]
        );
    }

    #[test]
    fn lexes_compound_operators() {
        assert_eq!(
            kinds("a //= b ..= c"),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::SLASH2_EQUAL,
                SyntaxKind::IDENT,
                SyntaxKind::DOT2_EQUAL,
                SyntaxKind::IDENT,
                SyntaxKind::EOF,
            ]
        );
    }

    #[test]
    fn dots_do_not_swallow_number_points() {
        assert_eq!(
            kinds("1 .. 2.5 ... .5"),
            vec![
                SyntaxKind::NUMBER,
                SyntaxKind::DOT2,
                SyntaxKind::NUMBER,
                SyntaxKind::DOT3,
                SyntaxKind::NUMBER,
                SyntaxKind::EOF,
            ]
        );
    }

    #[test]
    fn lexes_number_shapes() {
        for source in ["0", "10.25", "1e5", "1.5E-3", "0xFF_f", "0b10_01", "1_000_000", "3."] {
            assert_eq!(kinds(source), vec![SyntaxKind::NUMBER, SyntaxKind::EOF], "{source}");
        }
    }

    #[test]
    fn rejects_malformed_numbers() {
        for source in ["0x", "0b", "1e", "1e+", "3a"] {
            let err = tokenize(source).unwrap_err();
            assert_eq!(err.kind, LexErrorKind::MalformedNumber, "{source}");
            assert_eq!(err.span.start, 0, "{source}");
        }
    }

    #[test]
    fn attaches_trivia_to_following_token() {
        let tokens = tokenize("-- note\nreturn -- after\n").unwrap();
        assert_eq!(tokens[0].kind(), SyntaxKind::RETURN_KW);
        let trivia: Vec<_> = tokens[0].trivia().iter().map(|t| t.kind()).collect();
        assert_eq!(
            trivia,
            vec![TriviaKind::LineComment, TriviaKind::Newline]
        );

        // EOF owns everything after the last real token.
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind(), SyntaxKind::EOF);
        let eof_trivia: Vec<_> = eof.trivia().iter().map(|t| t.kind()).collect();
        assert_eq!(
            eof_trivia,
            vec![
                TriviaKind::Whitespace,
                TriviaKind::LineComment,
                TriviaKind::Newline
            ]
        );
    }

    #[test]
    fn lexes_shebang_as_trivia() {
        let tokens = tokenize("#!/usr/bin/env luau\nprint(1)").unwrap();
        assert_eq!(tokens[0].kind(), SyntaxKind::IDENT);
        assert_eq!(tokens[0].trivia()[0].kind(), TriviaKind::Shebang);
    }

    #[test]
    fn lexes_long_strings_and_comments() {
        assert_eq!(
            kinds("--[=[ not ]] done ]=]\nx = [[raw]]"),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::EQUAL,
                SyntaxKind::LONG_STRING,
                SyntaxKind::EOF,
            ]
        );
    }

    #[test]
    fn rejects_unterminated_literals() {
        assert_eq!(
            tokenize("'abc").unwrap_err().kind,
            LexErrorKind::UnterminatedString
        );
        assert_eq!(
            tokenize("[[abc").unwrap_err().kind,
            LexErrorKind::UnterminatedLongString
        );
        assert_eq!(
            tokenize("--[[abc").unwrap_err().kind,
            LexErrorKind::UnterminatedBlockComment
        );
        assert_eq!(
            tokenize("`abc{1}").unwrap_err().kind,
            LexErrorKind::UnterminatedInterpString
        );
    }

    #[test]
    fn rejects_invalid_escapes() {
        let err = tokenize(r#"local s = "a\qb""#).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidEscape('q'));
        assert!(tokenize(r#"local s = "\x2""#).is_err());
        assert!(tokenize(r#"local s = "\u{}""#).is_err());
        assert!(tokenize(r#"local s = "ok \z
            continued""#)
        .is_ok());
    }

    #[test]
    fn segments_interpolated_strings() {
        assert_eq!(
            kinds("`plain`"),
            vec![SyntaxKind::INTERP_STRING_SIMPLE, SyntaxKind::EOF]
        );
        assert_eq!(
            kinds("`a {x} b {y} c`"),
            vec![
                SyntaxKind::INTERP_STRING_BEGIN,
                SyntaxKind::IDENT,
                SyntaxKind::INTERP_STRING_MID,
                SyntaxKind::IDENT,
                SyntaxKind::INTERP_STRING_END,
                SyntaxKind::EOF,
            ]
        );
    }

    #[test]
    fn tracks_brace_depth_inside_interpolation() {
        assert_eq!(
            kinds("`n = {f({})}`"),
            vec![
                SyntaxKind::INTERP_STRING_BEGIN,
                SyntaxKind::IDENT,
                SyntaxKind::LPAREN,
                SyntaxKind::LCURLY,
                SyntaxKind::RCURLY,
                SyntaxKind::RPAREN,
                SyntaxKind::INTERP_STRING_END,
                SyntaxKind::EOF,
            ]
        );
    }

    #[test]
    fn round_trips_token_and_trivia_text() {
        let source = "#!shebang\n-- lead\nlocal  x\t= [[s]] --[[ tail ]]\n";
        let tokens = tokenize(source).unwrap();
        let mut rebuilt = String::new();
        for token in &tokens {
            for trivia in token.trivia() {
                rebuilt.push_str(trivia.text());
            }
            rebuilt.push_str(token.text());
        }
        assert_eq!(rebuilt, source);
    }
}
