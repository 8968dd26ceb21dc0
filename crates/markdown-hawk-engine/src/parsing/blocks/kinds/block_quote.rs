use crate::{
    parsing::lines::Line,
    render::{Content, RenderNode},
};

use super::super::types::{Block, BlockKind};

/// A blockquote. Its lines, with the `>` prefixes removed, are scanned as
/// a nested document when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockQuote {
    pub lines: Vec<String>,
}

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one `>` and at most one following space.
    ///
    /// Nested quotes (`> > x`) keep their inner prefix; the nested scan
    /// handles it.
    pub fn strip_prefix(text: &str) -> Option<&str> {
        let rest = text.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }

    pub fn open(line: &Line) -> Option<Block> {
        let content = Self::strip_prefix(&line.text)?;
        Some(Block::new(BlockKind::Quote(BlockQuote {
            lines: vec![content.to_string()],
        })))
    }

    /// Quoted lines always continue; unquoted ones only lazily, before any
    /// blank line.
    pub fn continue_with(&mut self, line: &Line, interrupted: &mut bool) -> bool {
        if let Some(content) = Self::strip_prefix(&line.text) {
            if *interrupted {
                self.lines.push(String::new());
                *interrupted = false;
            }
            self.lines.push(content.to_string());
            return true;
        }

        if *interrupted {
            return false;
        }
        self.lines.push(line.text.clone());
        true
    }

    pub fn into_node(self) -> RenderNode {
        RenderNode::new("blockquote", Content::BlockLines(self.lines))
    }
}
