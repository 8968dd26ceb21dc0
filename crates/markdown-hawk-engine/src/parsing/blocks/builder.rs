use crate::parsing::lines::{Line, is_blank};

use super::{
    kinds::Paragraph,
    open::{block_types, try_open},
    types::{Block, BlockContext, BlockKind},
};

/// Line-at-a-time block scanner.
///
/// Holds at most one open block. Each line first tries to extend it; if
/// that fails the open block is completed and the line tries every
/// candidate opener, falling back to a paragraph.
pub struct BlockBuilder<'a> {
    ctx: BlockContext<'a>,
    current: Option<Block>,
    blocks: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(ctx: BlockContext<'a>) -> Self {
        Self {
            ctx,
            current: None,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, raw: &str) {
        if is_blank(raw) {
            if let Some(current) = &mut self.current {
                current.interrupted = true;
            }
            return;
        }

        let line = Line::new(raw);

        if let Some(current) = &mut self.current
            && current.continuable()
        {
            if current.continue_with(&line, &mut self.ctx) {
                return;
            }
            current.complete();
        }

        for ty in block_types(&line) {
            if let Some(block) = try_open(ty, &line, self.current.as_ref(), &mut self.ctx) {
                log::trace!("opened {} block", block.kind_name());
                if block.identified {
                    // The new block absorbed the open one.
                    self.current = Some(block);
                } else {
                    self.start(block);
                }
                return;
            }
        }

        match &mut self.current {
            Some(Block {
                kind: BlockKind::Paragraph(paragraph),
                interrupted: false,
                ..
            }) => paragraph.append(&line.text),
            _ => self.start(Paragraph::open(&line)),
        }
    }

    /// Finishes the open block and returns every block in document order,
    /// hidden ones included.
    pub fn finish(mut self) -> Vec<Block> {
        if let Some(mut current) = self.current.take() {
            if current.continuable() {
                current.complete();
            }
            self.blocks.push(current);
        }
        self.blocks
    }

    fn start(&mut self, block: Block) {
        if let Some(previous) = self.current.replace(block) {
            self.blocks.push(previous);
        }
    }
}
