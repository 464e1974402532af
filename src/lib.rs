//! Syntax frontend for the SwoftLang scripting language: lexer, parser, AST, diagnostics.
//!
//! SwoftLang scripts declare game commands and event handlers:
//!
//! ```text
//! command "heal", "h" {
//!     permission: "game.heal"
//!     arguments {
//!         target: Player
//!         amount: either<Integer|Double> = 20
//!     }
//!     execute {
//!         send "Healed ${target.name}" to sender
//!     }
//! }
//! ```
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it recognizes type names but does no
//!   type checking, and it never executes parsed statements. A bridging layer consumes
//!   the AST (or its JSON form) and marshals it into the host runtime.
//! - Parsing is best-effort: a malformed declaration is dropped and recorded as a
//!   diagnostic, and scanning resumes at the next declaration. The top-level API has
//!   no failure return.
//!
//! ## Examples
//! ```rust,no_run
//! use swoft_syntax::parser;
//!
//! let script = parser::parse_source("command \"ping\" { execute { send \"pong\" } }");
//! assert_eq!(script.commands.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
