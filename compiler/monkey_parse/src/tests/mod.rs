//! Parser tests.
//!
//! - `parser`: statements, expressions and operator precedence
//! - `recovery`: diagnostics and resynchronization after errors
//! - `properties`: printed expressions re-parse to the same tree
