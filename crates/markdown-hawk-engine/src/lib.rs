//! Markdown to HTML rendering for wikis.
//!
//! A document is scanned line by line into blocks; block text is then
//! compiled into inline markup while the blocks are serialized. Besides
//! the usual markdown constructs the engine understands tables,
//! strikethrough, bare URL autolinks and `%Page Name%` internal links.
//!
//! ```
//! use markdown_hawk_engine::{Hawk, RenderOptions};
//!
//! let hawk = Hawk::new(RenderOptions::default().with_internal_link_base_url("/wiki/"));
//! assert_eq!(
//!     hawk.render("See %Main Page%."),
//!     r#"<p>See <a href="/wiki/Main_Page">Main Page</a>.</p>"#
//! );
//! ```

pub mod hawk;
pub mod options;
pub mod parsing;
pub mod render;

pub use hawk::{Hawk, render};
pub use options::RenderOptions;
