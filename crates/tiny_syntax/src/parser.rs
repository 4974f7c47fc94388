//! Parser for the TINY teaching language
//!
//! Single-token-lookahead recursive descent over the flat token sequence, with panic-mode error
//! recovery. Diagnostics accumulate; the (possibly partial) tree is always returned.
//!
//! ## Grammar
//!
//! ```text
//! program       -> stmt-sequence
//! stmt-sequence -> statement { ';' statement }
//! statement     -> if-stmt | repeat-stmt | assign-stmt | read-stmt | write-stmt
//! if-stmt       -> 'if' exp 'then' stmt-sequence [ 'else' stmt-sequence ] 'end'
//! repeat-stmt   -> 'repeat' stmt-sequence 'until' exp
//! assign-stmt   -> identifier ':=' exp
//! read-stmt     -> 'read' identifier
//! write-stmt    -> 'write' exp
//! exp           -> simple-exp [ ('<'|'=') simple-exp ]
//! simple-exp    -> term { ('+'|'-') term }
//! term          -> factor { ('*'|'/') factor }
//! factor        -> '(' exp ')' | number | identifier
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use tiny_syntax::{lexer, parser};
//!
//! let tokens = lexer::scan("x := 8 - 3 - 2").into_tokens();
//! let result = parser::parse(&tokens);
//! assert!(result.is_accepted());
//! ```

use serde::{Deserialize, Serialize};

use crate::ast::*;
use crate::diagnostics::{Expectation, SyntaxError};
use crate::lexer::{Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
