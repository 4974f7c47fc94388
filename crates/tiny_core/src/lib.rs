//! Canonical language vocabulary for the TINY teaching language.
//!
//! ## Notes
//!
//! - This is a pure crate: **no IO**, no global state, and no syntax-tree types.
//! - The scanner and parser in `tiny_syntax` resolve spellings through these registries instead of
//!   hard-coding string literals.

pub mod lang;
