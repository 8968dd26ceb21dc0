pub mod blocks;
pub mod inline;
pub mod invariants;
pub mod lines;
pub mod references;

#[cfg(test)]
mod tests;

use crate::options::RenderOptions;

use blocks::{Block, BlockBuilder, BlockContext};
use lines::split_document;
use references::ReferenceTable;

/// The top-level blocks of a document and the references they define.
///
/// Quote and list bodies are left unscanned; they are scanned when the
/// blocks are rendered.
#[derive(Debug)]
pub struct ScannedDoc {
    pub lines: Vec<String>,
    pub blocks: Vec<Block>,
    pub references: ReferenceTable,
}

pub fn scan_document(document: &str, options: &RenderOptions) -> ScannedDoc {
    let lines = split_document(document);
    let mut references = ReferenceTable::new();
    let mut builder = BlockBuilder::new(BlockContext {
        options,
        references: &mut references,
    });

    for line in &lines {
        builder.push(line);
    }

    let blocks = builder.finish();
    ScannedDoc {
        lines,
        blocks,
        references,
    }
}
