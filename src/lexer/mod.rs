//! Lexer for SwoftLang source text.
//!
//! Handles tokenization including:
//! - Keywords (`command`, `event`, `if`, `send`, `either`, ...)
//! - Identifiers, string literals (with escapes), and numbers
//! - One- and two-character operators (`:`, `==`, `<=`, `&&`, ...)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, keyword table)
//!
//! ## Notes
//! - Tokenization never fails. Unrecognized characters become internal
//!   error-marker tokens that are filtered from the final stream, so scanning
//!   always completes and the stream always ends with [`TokenKind::Eof`].
//! - Newlines update the position counters but are not emitted as tokens;
//!   the parser recovers line boundaries from token positions where needed.

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_kind};

/// Lexer for SwoftLang source code.
///
/// Converts source text into a stream of tokens, tracking 1-based line/column
/// positions for every token. `//` comments are discarded; spaces, tabs and
/// carriage returns are skipped.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The returned stream contains no error-marker tokens and always ends
    /// with a single `Eof` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.scan_token();
        }

        let dropped = self.tokens.iter().filter(|t| t.kind == TokenKind::Unknown).count();
        if dropped > 0 {
            tracing::warn!(dropped, "dropped unrecognized characters during lexing");
        }
        self.tokens.retain(|t| t.kind != TokenKind::Unknown);

        self.tokens.push(Token::eof(self.line, self.column));
        self.tokens
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, lexeme: &str, line: usize, column: usize) {
        self.tokens.push(Token::new(kind, lexeme, line, column));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;
        let line = self.line;
        let column = self.column;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Whitespace: newlines advance the position counters inside advance()
            ' ' | '\t' | '\r' | '\n' => {}

            // Comments (a lone '/' is not part of the grammar)
            '/' => {
                if self.match_char('/') {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Unknown, "/", line, column);
                }
            }

            // Operators and punctuation
            ':' => self.add_token(TokenKind::Colon, ":", line, column),
            '=' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::DoubleEquals, "==", line, column);
                } else {
                    self.add_token(TokenKind::Equals, "=", line, column);
                }
            }
            '!' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::NotEquals, "!=", line, column);
                } else {
                    self.add_token(TokenKind::Unknown, "!", line, column);
                }
            }
            '<' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::LessEquals, "<=", line, column);
                } else {
                    self.add_token(TokenKind::Less, "<", line, column);
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::GreaterEquals, ">=", line, column);
                } else {
                    self.add_token(TokenKind::Greater, ">", line, column);
                }
            }
            '&' => {
                if self.match_char('&') {
                    self.add_token(TokenKind::And, "&&", line, column);
                } else {
                    self.add_token(TokenKind::Unknown, "&", line, column);
                }
            }
            '|' => {
                if self.match_char('|') {
                    self.add_token(TokenKind::Or, "||", line, column);
                } else {
                    self.add_token(TokenKind::Pipe, "|", line, column);
                }
            }
            '{' => self.add_token(TokenKind::LeftBrace, "{", line, column),
            '}' => self.add_token(TokenKind::RightBrace, "}", line, column),
            '(' => self.add_token(TokenKind::LeftParen, "(", line, column),
            ')' => self.add_token(TokenKind::RightParen, ")", line, column),
            ',' => self.add_token(TokenKind::Comma, ",", line, column),
            '.' => self.add_token(TokenKind::Dot, ".", line, column),
            '+' => self.add_token(TokenKind::Plus, "+", line, column),
            '$' => self.add_token(TokenKind::Dollar, "$", line, column),

            // Strings
            '"' => self.scan_string(line, column),

            // Numbers
            '0'..='9' => self.scan_number(start, line, column),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start, line, column),

            _ => {
                let lexeme = self.source[start..self.current_pos].to_string();
                self.tokens.push(Token::new(TokenKind::Unknown, lexeme, line, column));
            }
        }
    }

    // ========================================================================
    // Literal scanning
    // ========================================================================

    /// Scan a double-quoted string literal, resolving `\n \t \r \" \\` escapes.
    ///
    /// An unterminated literal at end of input yields the partial value rather
    /// than an error; the enclosing declaration will fail to parse instead.
    fn scan_string(&mut self, line: usize, column: usize) {
        let mut value = String::new();

        loop {
            match self.peek() {
                None => break,
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') if self.peek_next().is_some() => {
                    self.advance(); // backslash
                    // Safe: peek_next was Some, so there is a character to consume
                    let escaped = self.advance().expect("escape character after peek check");
                    match escaped {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        'r' => value.push('\r'),
                        '"' => value.push('"'),
                        '\\' => value.push('\\'),
                        other => value.push(other),
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }

        self.tokens.push(Token::new(TokenKind::StringLit, value, line, column));
    }

    /// Scan a number: a digit run, optionally followed by `.` and another digit
    /// run. No sign, no exponent.
    fn scan_number(&mut self, start: usize, line: usize, column: usize) {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && matches!(self.peek_next(), Some(c) if c.is_ascii_digit()) {
            self.advance(); // consume '.'
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme = self.source[start..self.current_pos].to_string();
        self.tokens.push(Token::new(TokenKind::Number, lexeme, line, column));
    }

    fn scan_identifier(&mut self, start: usize, line: usize, column: usize) {
        while matches!(self.peek(), Some(c) if is_ident_continue(c)) {
            self.advance();
        }

        let spelling = &self.source[start..self.current_pos];
        let kind = keyword_kind(spelling).unwrap_or(TokenKind::Identifier);
        let lexeme = spelling.to_string();
        self.tokens.push(Token::new(kind, lexeme, line, column));
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
