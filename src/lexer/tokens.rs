//! Token types for the SwoftLang lexer.
//!
//! Tokens carry their kind, the raw lexeme, and a 1-based line/column position.
//! String literal tokens store the *decoded* value (escapes resolved) as their
//! lexeme; positions refer to the opening quote.

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
///
/// ## Notes
/// - `Less`/`Greater` are deliberately ambiguous between comparison operators and
///   the angle brackets of `either<...>` union types; the parser decides from context.
/// - `Unknown` marks an unrecognized character or unterminated construct. It never
///   escapes [`crate::lexer::Lexer::tokenize`] — the final stream is filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Identifiers and literals ==========
    Identifier,
    StringLit,
    Number,

    // ========== Keywords ==========
    Command,
    Event,
    If,
    Else,
    Halt,
    Send,
    Teleport,
    To,
    Is,
    Not,
    Either,
    Cancel,
    Set,
    Contains,

    // ========== Operators ==========
    Colon,         // :
    Equals,        // =
    DoubleEquals,  // ==
    NotEquals,     // !=
    Less,          // <   (comparison or union bracket)
    Greater,       // >   (comparison or union bracket)
    LessEquals,    // <=
    GreaterEquals, // >=
    And,           // &&
    Or,            // ||
    Plus,          // +
    Dot,           // .
    Dollar,        // $

    // ========== Punctuation ==========
    LeftBrace,  // {
    RightBrace, // }
    LeftParen,  // (
    RightParen, // )
    Pipe,       // |
    Comma,      // ,

    // ========== Special ==========
    Unknown,
    Eof,
}

impl TokenKind {
    /// Return `true` for token kinds that may serve as a property-path component.
    ///
    /// Keywords are legal property names (`event.message`, `args.to`), so every
    /// keyword kind qualifies alongside plain identifiers.
    pub fn is_identifier_like(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Command
                | TokenKind::Event
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Halt
                | TokenKind::Send
                | TokenKind::Teleport
                | TokenKind::To
                | TokenKind::Is
                | TokenKind::Not
                | TokenKind::Either
                | TokenKind::Cancel
                | TokenKind::Set
                | TokenKind::Contains
        )
    }
}

/// A token with its kind, raw text, and source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based source line.
    pub line: usize,
    /// 1-based source column of the token's first character.
    pub column: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// Synthetic end-of-input token, used to pad sub-spans handed to sub-parsers.
    pub fn eof(line: usize, column: usize) -> Self {
        Self::new(TokenKind::Eof, "", line, column)
    }
}

/// Resolve an identifier spelling to a keyword kind, if reserved.
///
/// The table is fixed and case-sensitive: `Command`, `SEND`, etc. stay identifiers.
pub fn keyword_kind(spelling: &str) -> Option<TokenKind> {
    let kind = match spelling {
        "command" => TokenKind::Command,
        "event" => TokenKind::Event,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "halt" => TokenKind::Halt,
        "send" => TokenKind::Send,
        "teleport" => TokenKind::Teleport,
        "to" => TokenKind::To,
        "is" => TokenKind::Is,
        "not" => TokenKind::Not,
        "either" => TokenKind::Either,
        "cancel" => TokenKind::Cancel,
        "set" => TokenKind::Set,
        "contains" => TokenKind::Contains,
        _ => return None,
    };
    Some(kind)
}
