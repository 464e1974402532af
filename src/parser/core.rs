/// Parser core types and the top-level script driver.
///
/// This chunk defines the [`Parser`] type and its `parse()` entrypoint, which
/// scans the whole token stream for `command`/`event` declarations, dispatches
/// to the declaration parsers, and performs per-declaration error recovery.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single god file.

/// Maximum nesting depth across parenthesized expressions, `either<>` subtypes,
/// nested blocks, and `else if` chains. Exceeding it raises a syntax error
/// instead of risking stack exhaustion on hostile input.
const MAX_NESTING_DEPTH: usize = 64;

/// Hard cap on tokens consumed by a single argument declaration, guaranteeing
/// forward progress through a malformed `arguments { ... }` block.
const MAX_ARGUMENT_TOKENS: usize = 24;

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and recovers from errors at declaration
///   boundaries; one malformed declaration never halts the file.
/// - Each parse call owns a private cursor over a borrowed token slice, so
///   concurrent parses on separate threads are safe when each has its own tokens.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    /// Fallback token returned by `peek()` past the end of a sub-span that does
    /// not carry its own Eof.
    eof: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `swoft_syntax::lexer`, or a sub-span
    ///   of one (sub-spans need not end with an Eof token).
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            eof: Token::eof(0, 0),
        }
    }

    /// Parse the entire token stream into a [`Script`].
    ///
    /// Never fails: declarations that do not parse are dropped, recorded in
    /// [`Script::errors`], and logged. Tokens outside any declaration are
    /// skipped.
    pub fn parse(mut self) -> Script {
        let mut script = Script::default();

        while !self.is_at_end() {
            match self.peek().kind {
                TokenKind::Command => match self.command_declaration() {
                    Ok(commands) => script.commands.extend(commands),
                    Err(error) => {
                        tracing::warn!(%error, "dropping malformed command declaration");
                        script.errors.push(error);
                        self.recover_to_next_declaration();
                    }
                },
                TokenKind::Event => match self.event_declaration() {
                    Ok(event) => script.events.push(event),
                    Err(error) => {
                        tracing::warn!(%error, "dropping malformed event declaration");
                        script.errors.push(error);
                        self.recover_to_next_declaration();
                    }
                },
                // Anything between declarations is ignored.
                _ => {
                    self.advance();
                }
            }
        }

        script
    }
}
