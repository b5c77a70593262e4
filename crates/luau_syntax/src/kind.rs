/// The kind tag for every token the lexer can produce. For fixed-text kinds
/// (keywords and punctuation), the kind alone determines the token's text;
/// everything else carries its byte form in the token itself.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[default]
    EOF = 0, // The end of the input text.

    // Variable-text tokens
    IDENT,  // Any non-keyword name.
    NUMBER, // Decimal, hex, or binary numeric literal.
    STRING, // A single- or double-quoted short string.
    LONG_STRING,           // [=*[ ... ]=*]
    INTERP_STRING_SIMPLE,  // `...` with no interpolation.
    INTERP_STRING_BEGIN,   // `...{
    INTERP_STRING_MID,     // }...{
    INTERP_STRING_END,     // }...`

    // Keywords
    AND_KW,
    BREAK_KW,
    CONTINUE_KW, // Contextual: also valid as a plain name.
    DO_KW,
    ELSE_KW,
    ELSEIF_KW,
    END_KW,
    EXPORT_KW, // Contextual: also valid as a plain name.
    FALSE_KW,
    FOR_KW,
    FUNCTION_KW,
    IF_KW,
    IN_KW,
    LOCAL_KW,
    NIL_KW,
    NOT_KW,
    OR_KW,
    REPEAT_KW,
    RETURN_KW,
    THEN_KW,
    TRUE_KW,
    TYPE_KW,   // Contextual: also valid as a plain name.
    TYPEOF_KW, // Contextual: also valid as a plain name.
    UNTIL_KW,
    WHILE_KW,

    // Punctuation
    LPAREN,        // (
    RPAREN,        // )
    LSQUARE,       // [
    RSQUARE,       // ]
    LCURLY,        // {
    RCURLY,        // }
    COMMA,         // ,
    SEMI,          // ;
    COLON,         // :
    DOUBLE_COLON,  // ::
    DOT,           // .
    DOT2,          // ..
    DOT3,          // ...
    QUESTION,      // ?
    PIPE,          // |
    AMPER,         // &
    LANGLE,        // <
    LANGLE_EQUAL,  // <=
    RANGLE,        // >
    RANGLE_EQUAL,  // >=
    EQUAL,         // =
    EQUAL2,        // ==
    TILDE_EQUAL,   // ~=
    PLUS,          // +
    PLUS_EQUAL,    // +=
    MINUS,         // -
    MINUS_EQUAL,   // -=
    STAR,          // *
    STAR_EQUAL,    // *=
    SLASH,         // /
    SLASH_EQUAL,   // /=
    SLASH2,        // //
    SLASH2_EQUAL,  // //=
    PERCENT,       // %
    PERCENT_EQUAL, // %=
    CARET,         // ^
    CARET_EQUAL,   // ^=
    DOT2_EQUAL,    // ..=
    HASH,          // #
    AT,            // @
    ARROW,         // ->
}

impl SyntaxKind {
    /// The canonical byte form of this kind, when the kind alone determines
    /// it. Variable-text kinds (names, literals, string segments) and EOF
    /// return None.
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::AND_KW => "and",
            SyntaxKind::BREAK_KW => "break",
            SyntaxKind::CONTINUE_KW => "continue",
            SyntaxKind::DO_KW => "do",
            SyntaxKind::ELSE_KW => "else",
            SyntaxKind::ELSEIF_KW => "elseif",
            SyntaxKind::END_KW => "end",
            SyntaxKind::EXPORT_KW => "export",
            SyntaxKind::FALSE_KW => "false",
            SyntaxKind::FOR_KW => "for",
            SyntaxKind::FUNCTION_KW => "function",
            SyntaxKind::IF_KW => "if",
            SyntaxKind::IN_KW => "in",
            SyntaxKind::LOCAL_KW => "local",
            SyntaxKind::NIL_KW => "nil",
            SyntaxKind::NOT_KW => "not",
            SyntaxKind::OR_KW => "or",
            SyntaxKind::REPEAT_KW => "repeat",
            SyntaxKind::RETURN_KW => "return",
            SyntaxKind::THEN_KW => "then",
            SyntaxKind::TRUE_KW => "true",
            SyntaxKind::TYPE_KW => "type",
            SyntaxKind::TYPEOF_KW => "typeof",
            SyntaxKind::UNTIL_KW => "until",
            SyntaxKind::WHILE_KW => "while",
            SyntaxKind::LPAREN => "(",
            SyntaxKind::RPAREN => ")",
            SyntaxKind::LSQUARE => "[",
            SyntaxKind::RSQUARE => "]",
            SyntaxKind::LCURLY => "{",
            SyntaxKind::RCURLY => "}",
            SyntaxKind::COMMA => ",",
            SyntaxKind::SEMI => ";",
            SyntaxKind::COLON => ":",
            SyntaxKind::DOUBLE_COLON => "::",
            SyntaxKind::DOT => ".",
            SyntaxKind::DOT2 => "..",
            SyntaxKind::DOT3 => "...",
            SyntaxKind::QUESTION => "?",
            SyntaxKind::PIPE => "|",
            SyntaxKind::AMPER => "&",
            SyntaxKind::LANGLE => "<",
            SyntaxKind::LANGLE_EQUAL => "<=",
            SyntaxKind::RANGLE => ">",
            SyntaxKind::RANGLE_EQUAL => ">=",
            SyntaxKind::EQUAL => "=",
            SyntaxKind::EQUAL2 => "==",
            SyntaxKind::TILDE_EQUAL => "~=",
            SyntaxKind::PLUS => "+",
            SyntaxKind::PLUS_EQUAL => "+=",
            SyntaxKind::MINUS => "-",
            SyntaxKind::MINUS_EQUAL => "-=",
            SyntaxKind::STAR => "*",
            SyntaxKind::STAR_EQUAL => "*=",
            SyntaxKind::SLASH => "/",
            SyntaxKind::SLASH_EQUAL => "/=",
            SyntaxKind::SLASH2 => "//",
            SyntaxKind::SLASH2_EQUAL => "//=",
            SyntaxKind::PERCENT => "%",
            SyntaxKind::PERCENT_EQUAL => "%=",
            SyntaxKind::CARET => "^",
            SyntaxKind::CARET_EQUAL => "^=",
            SyntaxKind::DOT2_EQUAL => "..=",
            SyntaxKind::HASH => "#",
            SyntaxKind::AT => "@",
            SyntaxKind::ARROW => "->",
            _ => return None,
        };
        Some(text)
    }

    /// Maps an identifier's text to its keyword kind, if it is one.
    pub fn from_identifier(text: &str) -> Option<SyntaxKind> {
        let kind = match text {
            "and" => SyntaxKind::AND_KW,
            "break" => SyntaxKind::BREAK_KW,
            "continue" => SyntaxKind::CONTINUE_KW,
            "do" => SyntaxKind::DO_KW,
            "else" => SyntaxKind::ELSE_KW,
            "elseif" => SyntaxKind::ELSEIF_KW,
            "end" => SyntaxKind::END_KW,
            "export" => SyntaxKind::EXPORT_KW,
            "false" => SyntaxKind::FALSE_KW,
            "for" => SyntaxKind::FOR_KW,
            "function" => SyntaxKind::FUNCTION_KW,
            "if" => SyntaxKind::IF_KW,
            "in" => SyntaxKind::IN_KW,
            "local" => SyntaxKind::LOCAL_KW,
            "nil" => SyntaxKind::NIL_KW,
            "not" => SyntaxKind::NOT_KW,
            "or" => SyntaxKind::OR_KW,
            "repeat" => SyntaxKind::REPEAT_KW,
            "return" => SyntaxKind::RETURN_KW,
            "then" => SyntaxKind::THEN_KW,
            "true" => SyntaxKind::TRUE_KW,
            "type" => SyntaxKind::TYPE_KW,
            "typeof" => SyntaxKind::TYPEOF_KW,
            "until" => SyntaxKind::UNTIL_KW,
            "while" => SyntaxKind::WHILE_KW,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::AND_KW
                | SyntaxKind::BREAK_KW
                | SyntaxKind::CONTINUE_KW
                | SyntaxKind::DO_KW
                | SyntaxKind::ELSE_KW
                | SyntaxKind::ELSEIF_KW
                | SyntaxKind::END_KW
                | SyntaxKind::EXPORT_KW
                | SyntaxKind::FALSE_KW
                | SyntaxKind::FOR_KW
                | SyntaxKind::FUNCTION_KW
                | SyntaxKind::IF_KW
                | SyntaxKind::IN_KW
                | SyntaxKind::LOCAL_KW
                | SyntaxKind::NIL_KW
                | SyntaxKind::NOT_KW
                | SyntaxKind::OR_KW
                | SyntaxKind::REPEAT_KW
                | SyntaxKind::RETURN_KW
                | SyntaxKind::THEN_KW
                | SyntaxKind::TRUE_KW
                | SyntaxKind::TYPE_KW
                | SyntaxKind::TYPEOF_KW
                | SyntaxKind::UNTIL_KW
                | SyntaxKind::WHILE_KW
        )
    }

    /// Keywords that are only keywords in certain positions and are otherwise
    /// accepted wherever a plain name is expected.
    pub fn is_contextual_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::CONTINUE_KW
                | SyntaxKind::EXPORT_KW
                | SyntaxKind::TYPE_KW
                | SyntaxKind::TYPEOF_KW
        )
    }

    /// True for any token that can serve as a name: identifiers and the
    /// contextual keywords.
    pub fn is_name(self) -> bool {
        self == SyntaxKind::IDENT || self.is_contextual_keyword()
    }

    /// A short human-readable description of this kind, used when building
    /// "expected X, found Y" messages.
    pub fn describe(self) -> &'static str {
        match self {
            SyntaxKind::EOF => "<eof>",
            SyntaxKind::IDENT => "identifier",
            SyntaxKind::NUMBER => "number literal",
            SyntaxKind::STRING | SyntaxKind::LONG_STRING => "string literal",
            SyntaxKind::INTERP_STRING_SIMPLE
            | SyntaxKind::INTERP_STRING_BEGIN
            | SyntaxKind::INTERP_STRING_MID
            | SyntaxKind::INTERP_STRING_END => "interpolated string",
            other => other.fixed_text().unwrap_or("token"),
        }
    }
}
