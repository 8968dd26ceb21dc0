use crate::parsing::lines::Line;

use super::super::types::{Block, BlockKind};

/// A thematic break: three or more of the same `*`, `-` or `_`, optionally
/// separated by spaces.
pub struct Rule;

impl Rule {
    pub const MIN_MARKERS: usize = 3;

    pub fn open(line: &Line) -> Option<Block> {
        Self::matches(&line.text).then(|| Block::new(BlockKind::Rule))
    }

    pub fn matches(text: &str) -> bool {
        let Some(marker) = text.chars().next() else {
            return false;
        };
        if !matches!(marker, '*' | '-' | '_') {
            return false;
        }

        let mut count = 0;
        for c in text.chars() {
            match c {
                ' ' => {}
                c if c == marker => count += 1,
                _ => return false,
            }
        }
        count >= Self::MIN_MARKERS
    }
}
