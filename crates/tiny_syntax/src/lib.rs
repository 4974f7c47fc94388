//! Syntax frontend for the TINY teaching language: scanner, parser, AST, diagnostics.
//!
//! Data flows one way: source text → [`lexer::scan`] → tokens → [`parser::parse`] → [`ast::Program`]
//! plus an ordered list of diagnostics. Neither stage aborts on the first error.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: no semantic analysis, type checking or code generation.
//! - Vocabulary identity (keywords/symbols) comes from `tiny_core::lang` registries.
//! - [`interchange`] holds the two external contracts: the `lexeme,KIND` token file and the JSON parse record.
//!
//! ## Examples
//! ```rust
//! use tiny_syntax::{lexer, parser};
//!
//! let scanned = lexer::scan("read x; { comment } write x * 2");
//! let result = parser::parse(&scanned.into_tokens());
//! assert!(result.is_accepted());
//! assert_eq!(result.program.unwrap().statement_count(), 2);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod interchange;
pub mod lexer;
pub mod parser;
