//! Parsers for SwoftLang declarations.
//!
//! Converts a token stream into [`crate::ast`] nodes. The grammar layers several
//! sub-languages: command/event declarations with alias lists, typed variable
//! declarations with recursive `either<>` union types, an operator-precedence
//! expression grammar with `${...}` interpolation and dotted property paths, and
//! a statement grammar with per-statement recovery.
//!
//! Parsing is best-effort: a malformed declaration never aborts the rest of the
//! file. See [`crate::diagnostics`] for the error discipline.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use swoft_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("event PlayerJoin { execute { send \"welcome\" } }");
//! let script = parser::parse(&tokens);
//! assert_eq!(script.events.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::ParseError;
use crate::lexer::{Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/command.rs");
include!("parser/event.rs");
include!("parser/vars.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/raw.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
