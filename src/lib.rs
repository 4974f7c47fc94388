#![forbid(unsafe_code)]
//! TINY scanner and parser
//!
//! TINY is a small imperative teaching language (`if`/`repeat`/`read`/`write`, assignment,
//! integer arithmetic and one comparison). This crate ties the syntax frontend together into a
//! pipeline and a command-line tool; the scanner, parser and AST live in `tiny_syntax`.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **User input**: Malformed programs are never a panic. Lexical and syntax problems are collected as diagnostics and
//!   reported alongside whatever tree could be built.

pub mod cli;
pub mod pipeline;

pub use tiny_syntax::ast;
pub use tiny_syntax::diagnostics;
pub use tiny_syntax::interchange;
pub use tiny_syntax::lexer;
pub use tiny_syntax::parser;

pub use pipeline::{SourceParse, TokenTextParse, parse_source, parse_token_text};
