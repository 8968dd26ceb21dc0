//! # Inline Compilation
//!
//! Marker-driven compilation of one block's text into inline nodes.
//!
//! ## Architecture
//!
//! The parser looks for the next character in [`parser::MARKERS`] and
//! tries the rules registered for that marker in a fixed order. Each rule
//! sees an [`Excerpt`] and either declines or returns an [`InlineMatch`].
//! Text between matches is kept as literal text, after line break
//! handling.
//!
//! ## Modules
//!
//! - **`types`**: `Excerpt`, `InlineMatch`, `InlineNode`, `InlineContext`
//! - **`kinds`**: One module per rule family and the marker dispatch table
//! - **`cursor`**: `Cursor` for the hand-written delimiter scanners
//! - **`parser`**: `parse_inline()` main entry point and the literal text pass
//!
//! ## Precedence
//!
//! Code spans are raw: `` `*not em*` `` compiles to a single code node.
//! Element content (emphasis, link text) is compiled again when the node
//! is serialized.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{Excerpt, InlineContext, InlineMatch, InlineNode};
