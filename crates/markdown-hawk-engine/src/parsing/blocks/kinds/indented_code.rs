use crate::{
    parsing::lines::Line,
    render::{Content, RenderNode},
};

use super::super::types::{Block, BlockKind};

/// A code block made of lines indented by four or more columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentedCode {
    pub text: String,
}

impl IndentedCode {
    pub const INDENT: usize = 4;

    /// Cannot interrupt an open paragraph; those lines continue it lazily.
    pub fn open(line: &Line, current: Option<&Block>) -> Option<Block> {
        if Block::open_paragraph(current).is_some() || line.indent < Self::INDENT {
            return None;
        }

        Some(Block::new(BlockKind::Code(IndentedCode {
            text: line.body[Self::INDENT..].to_string(),
        })))
    }

    pub fn continue_with(&mut self, line: &Line, interrupted: &mut bool) -> bool {
        if line.indent < Self::INDENT {
            return false;
        }

        if *interrupted {
            self.text.push('\n');
            *interrupted = false;
        }
        self.text.push('\n');
        self.text.push_str(&line.body[Self::INDENT..]);
        true
    }

    pub fn complete(&mut self) {
        self.text = html_escape::encode_text(&self.text).into_owned();
    }

    pub fn into_node(self) -> RenderNode {
        RenderNode::new(
            "pre",
            Content::Element(Box::new(RenderNode::verbatim("code", self.text))),
        )
    }
}
