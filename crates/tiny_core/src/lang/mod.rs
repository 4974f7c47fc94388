//! Registries for the reserved words and special symbols of TINY.
//!
//! Each registry pairs a stable identifier enum with a const metadata table. Lookups are
//! case-sensitive and expect the lowercase spelling; case folding belongs to the scanner.

pub mod keywords;
pub mod symbols;
