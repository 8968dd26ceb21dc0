use crate::{parsing::lines::Line, render::RenderNode};

use super::super::types::{Block, BlockKind};

const TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// An ATX (`## Title`) or set-text (underlined) header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// 1 through 6.
    pub level: usize,
    pub text: String,
}

impl Header {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// `#` through `######` followed by the header text. `#title` with no
    /// space still counts; seven or more `#` do not.
    pub fn open(line: &Line) -> Option<Block> {
        let text = line.text.as_str();
        if text.len() < 2 {
            return None;
        }

        let level = text.chars().take_while(|&c| c == Self::MARKER).count();
        if level > Self::MAX_LEVEL {
            return None;
        }

        let text = text.trim_matches(|c| c == Self::MARKER || c == ' ');
        Some(Block::new(BlockKind::Header(Header {
            level,
            text: text.to_string(),
        })))
    }

    pub fn tag(&self) -> &'static str {
        TAGS[self.level.clamp(1, Self::MAX_LEVEL) - 1]
    }

    pub fn into_node(self) -> RenderNode {
        RenderNode::inline(self.tag(), self.text)
    }
}

/// Turns the open paragraph into a header when the line under it is made
/// only of `=` (level 1) or `-` (level 2).
pub struct SetTextHeader;

impl SetTextHeader {
    pub fn open(line: &Line, current: Option<&Block>) -> Option<Block> {
        let paragraph = Block::open_paragraph(current)?;
        let underline = line.marker()?;
        if !line.text.chars().all(|c| c == underline) {
            return None;
        }

        let level = match underline {
            '=' => 1,
            '-' => 2,
            _ => return None,
        };

        Some(
            Block::new(BlockKind::SetTextHeader(Header {
                level,
                text: paragraph.text.clone(),
            }))
            .identified(),
        )
    }
}
