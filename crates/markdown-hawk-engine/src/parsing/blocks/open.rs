use crate::parsing::lines::Line;

use super::{
    kinds::{
        BlockQuote, CodeFence, Comment, Header, HtmlBlock, IndentedCode, List, Reference, Rule,
        SetTextHeader, Table,
    },
    types::{Block, BlockContext},
};

/// Every block kind that can open on a line. Paragraphs are the fallback
/// and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Header,
    SetTextHeader,
    Rule,
    List,
    Quote,
    Table,
    Code,
    FencedCode,
    Comment,
    Markup,
    Reference,
}

/// Tried on every line, ahead of the marker-specific candidates.
const UNMARKED: &[BlockType] = &[BlockType::Code];

/// Candidate kinds for a line whose unindented text starts with `marker`,
/// in the order they are tried.
pub fn candidates(marker: char) -> &'static [BlockType] {
    use BlockType::*;

    match marker {
        '#' => &[Header],
        '*' => &[Rule, List],
        '+' => &[List],
        '-' => &[SetTextHeader, Table, Rule, List],
        '0'..='9' => &[List],
        ':' => &[Table],
        '<' => &[Comment, Markup],
        '=' => &[SetTextHeader],
        '>' => &[Quote],
        '[' => &[Reference],
        '_' => &[Rule],
        '`' | '~' => &[FencedCode],
        '|' => &[Table],
        _ => &[],
    }
}

/// All kinds worth trying for `line`, unmarked ones first.
pub fn block_types(line: &Line) -> impl Iterator<Item = BlockType> {
    let marked = line.marker().map(candidates).unwrap_or_default();
    UNMARKED.iter().chain(marked).copied()
}

/// Attempts to open a block of type `ty` on `line`. `current` is the block
/// that was open before this line; some kinds fold it in.
pub fn try_open(
    ty: BlockType,
    line: &Line,
    current: Option<&Block>,
    ctx: &mut BlockContext<'_>,
) -> Option<Block> {
    match ty {
        BlockType::Header => Header::open(line),
        BlockType::SetTextHeader => SetTextHeader::open(line, current),
        BlockType::Rule => Rule::open(line),
        BlockType::List => List::open(line),
        BlockType::Quote => BlockQuote::open(line),
        BlockType::Table => Table::open(line, current),
        BlockType::Code => IndentedCode::open(line, current),
        BlockType::FencedCode => CodeFence::open(line),
        BlockType::Comment if ctx.options.raw_html_allowed => Comment::open(line),
        BlockType::Markup if ctx.options.raw_html_allowed => HtmlBlock::open(line),
        BlockType::Comment | BlockType::Markup => None,
        BlockType::Reference => Reference::open(line, ctx.references),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn code_is_always_tried_first() {
        let types: Vec<_> = block_types(&Line::new("- item")).collect();
        assert_eq!(
            types,
            vec![
                BlockType::Code,
                BlockType::SetTextHeader,
                BlockType::Table,
                BlockType::Rule,
                BlockType::List
            ]
        );
    }

    #[test]
    fn plain_text_only_tries_code() {
        let types: Vec<_> = block_types(&Line::new("hello")).collect();
        assert_eq!(types, vec![BlockType::Code]);
    }

    #[test]
    fn digits_open_lists() {
        for marker in '0'..='9' {
            assert_eq!(candidates(marker), &[BlockType::List]);
        }
    }
}
