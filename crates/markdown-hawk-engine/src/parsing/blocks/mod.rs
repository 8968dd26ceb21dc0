//! # Block Scanning
//!
//! Splits a document's lines into blocks.
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockKind`, `BlockOutput` and the shared `BlockContext`
//! - **`kinds`**: One type per block kind with its open, continue and render rules
//! - **`open`**: Marker dispatch table and `try_open`
//! - **`builder`**: `BlockBuilder`, the line-at-a-time state machine
//!
//! ## Key Invariants
//!
//! - At most one block is open at a time; nesting happens by re-scanning
//!   the lines of quotes and list items as documents of their own
//! - A block that absorbs the open one (set-text header, table) replaces it
//!   instead of following it
//! - Reference definitions are recorded while scanning, so links anywhere
//!   in the document can use them

pub mod builder;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use open::{BlockType, try_open};
pub use types::{Block, BlockContext, BlockKind, BlockOutput};
