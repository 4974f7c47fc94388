//! External contracts shared with tooling outside this crate.
//!
//! - [`token_file`]: the persisted token stream, one `lexeme,KIND` per line.
//! - [`record`]: the JSON parse record `{status, root, errors}` with nested `{id, type, value,
//!   children, sibling}` nodes.
//!
//! Consumers of either format treat the tree as read-only.

pub mod record;
pub mod token_file;

pub use record::{NodeRecord, ParseRecord, RecordError};
pub use token_file::{MalformedLine, TokenFile, read_tokens, write_tokens};
