//! Diagnostics for SwoftLang parsing.
//!
//! Parsing is best-effort: errors raised while parsing one declaration are
//! caught by the script driver, recorded, and never abort the overall parse.
//! Lexical problems are not represented here at all — the lexer degrades by
//! dropping error-marker tokens instead of failing.

use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::Token;

/// An error raised while parsing a SwoftLang declaration.
///
/// Positions are 1-based line/column, taken from the token that disappointed
/// the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// An expected token or structure was absent.
    #[error("{message} at line {line}, column {column}")]
    #[diagnostic(code(swoft::syntax_error))]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },

    /// An unknown property name appeared in a `command` or `event` body.
    ///
    /// This is a hard failure for the enclosing declaration: property names
    /// form a closed set, and a typo here would otherwise silently drop the
    /// property's entire payload.
    #[error("unknown {context} property '{property}' at line {line}, column {column}")]
    #[diagnostic(code(swoft::unknown_property))]
    UnknownProperty {
        property: String,
        context: &'static str,
        line: usize,
        column: usize,
    },
}

impl ParseError {
    /// Syntax error positioned at `token`.
    pub fn syntax(message: impl Into<String>, token: &Token) -> Self {
        ParseError::Syntax {
            message: message.into(),
            line: token.line,
            column: token.column,
        }
    }

    /// Unknown-property error positioned at the property name token.
    pub fn unknown_property(property: impl Into<String>, context: &'static str, token: &Token) -> Self {
        ParseError::UnknownProperty {
            property: property.into(),
            context,
            line: token.line,
            column: token.column,
        }
    }

    /// Source line the error points at.
    pub fn line(&self) -> usize {
        match self {
            ParseError::Syntax { line, .. } | ParseError::UnknownProperty { line, .. } => *line,
        }
    }
}
