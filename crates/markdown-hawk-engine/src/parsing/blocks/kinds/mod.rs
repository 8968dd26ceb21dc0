//! One module per block kind. Each kind knows how to open itself from a
//! line, how (and whether) later lines extend it and what node it renders.

pub mod block_quote;
pub mod code_fence;
pub mod comment;
pub mod header;
pub mod html_block;
pub mod indented_code;
pub mod list;
pub mod paragraph;
pub mod reference;
pub mod rule;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind};
pub use comment::Comment;
pub use header::{Header, SetTextHeader};
pub use html_block::HtmlBlock;
pub use indented_code::IndentedCode;
pub use list::{Bullet, List, ListItem};
pub use paragraph::Paragraph;
pub use reference::Reference;
pub use rule::Rule;
pub use table::{Alignment, Table};
