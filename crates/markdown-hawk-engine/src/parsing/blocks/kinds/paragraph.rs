use crate::{parsing::lines::Line, render::RenderNode};

use super::super::types::{Block, BlockKind};

/// The default leaf block when no other block opener matches.
///
/// Paragraphs have no delimiters and no continuation rule of their own:
/// the scanner appends lazy continuation lines to them directly. Their
/// text goes through the inline compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
}

impl Paragraph {
    pub fn open(line: &Line) -> Block {
        Block::new(BlockKind::Paragraph(Paragraph {
            text: line.text.clone(),
        }))
        .identified()
    }

    /// Joins another line onto the paragraph.
    pub fn append(&mut self, text: &str) {
        self.text.push('\n');
        self.text.push_str(text);
    }

    pub fn into_node(self) -> RenderNode {
        RenderNode::inline("p", self.text)
    }
}
