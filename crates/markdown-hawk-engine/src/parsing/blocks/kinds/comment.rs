use crate::parsing::lines::Line;

use super::super::types::{Block, BlockKind};

/// An HTML comment block, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub markup: String,
    pub closed: bool,
}

impl Comment {
    pub const OPEN: &'static str = "<!--";
    pub const CLOSE: &'static str = "-->";

    pub fn open(line: &Line) -> Option<Block> {
        if !line.text.starts_with(Self::OPEN) {
            return None;
        }

        Some(Block::new(BlockKind::Comment(Comment {
            markup: line.body.clone(),
            closed: line.text.ends_with(Self::CLOSE),
        })))
    }

    pub fn continue_with(&mut self, line: &Line) -> bool {
        if self.closed {
            return false;
        }

        self.markup.push('\n');
        self.markup.push_str(&line.body);
        self.closed = line.text.ends_with(Self::CLOSE);
        true
    }
}
