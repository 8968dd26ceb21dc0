use crate::{
    options::RenderOptions,
    parsing::{lines::Line, references::ReferenceTable},
    render::RenderNode,
};

use super::kinds::{
    BlockQuote, CodeFence, Comment, Header, HtmlBlock, IndentedCode, List, Paragraph, Table,
};

/// Shared state the block rules read from and write to while scanning.
pub struct BlockContext<'a> {
    pub options: &'a RenderOptions,
    pub references: &'a mut ReferenceTable,
}

/// The kind of a block together with its kind-specific state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// The fallback block; the only kind that absorbs lazy continuation lines.
    Paragraph(Paragraph),
    Header(Header),
    /// A paragraph underlined with `=` or `-`.
    SetTextHeader(Header),
    Rule,
    List(List),
    Quote(BlockQuote),
    Table(Table),
    Code(IndentedCode),
    FencedCode(CodeFence),
    Comment(Comment),
    Markup(HtmlBlock),
    /// A `[id]: url` definition; it only feeds the reference table.
    Reference,
}

/// A block being scanned or already finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// A blank line was seen while this block was open.
    pub interrupted: bool,
    /// Set on a freshly opened block that takes over the open block instead
    /// of following it (tables and set-text headers fold in the paragraph
    /// above them).
    pub identified: bool,
    /// Produces no output.
    pub hidden: bool,
}

/// What a finished block contributes to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOutput {
    /// Raw markup, emitted as is.
    Markup(String),
    /// A node for the serializer.
    Element(RenderNode),
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            interrupted: false,
            identified: false,
            hidden: false,
        }
    }

    #[must_use]
    pub fn identified(mut self) -> Self {
        self.identified = true;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// A plain paragraph: no type of its own yet.
    pub fn is_untyped(&self) -> bool {
        matches!(self.kind, BlockKind::Paragraph(_))
    }

    /// The open paragraph, if it may still be extended or folded into a
    /// header or table.
    pub fn open_paragraph(block: Option<&Block>) -> Option<&Paragraph> {
        match block {
            Some(Block {
                kind: BlockKind::Paragraph(paragraph),
                interrupted: false,
                ..
            }) => Some(paragraph),
            _ => None,
        }
    }

    /// Whether this kind has a continuation rule.
    pub fn continuable(&self) -> bool {
        matches!(
            self.kind,
            BlockKind::List(_)
                | BlockKind::Quote(_)
                | BlockKind::Table(_)
                | BlockKind::Code(_)
                | BlockKind::FencedCode(_)
                | BlockKind::Comment(_)
                | BlockKind::Markup(_)
        )
    }

    /// Tries to extend the block with `line`. Returns `false`, leaving the
    /// block untouched, when the line belongs elsewhere.
    pub fn continue_with(&mut self, line: &Line, ctx: &mut BlockContext<'_>) -> bool {
        let interrupted = &mut self.interrupted;
        match &mut self.kind {
            BlockKind::List(list) => list.continue_with(line, interrupted, ctx),
            BlockKind::Quote(quote) => quote.continue_with(line, interrupted),
            BlockKind::Table(table) => table.continue_with(line, *interrupted),
            BlockKind::Code(code) => code.continue_with(line, interrupted),
            BlockKind::FencedCode(fence) => fence.continue_with(line, interrupted),
            BlockKind::Comment(comment) => comment.continue_with(line),
            BlockKind::Markup(markup) => markup.continue_with(line, interrupted),
            _ => false,
        }
    }

    /// Seals the block once no further line can extend it.
    pub fn complete(&mut self) {
        match &mut self.kind {
            BlockKind::Code(code) => code.complete(),
            BlockKind::FencedCode(fence) => fence.complete(),
            _ => {}
        }
    }

    pub fn into_output(self) -> BlockOutput {
        match self.kind {
            BlockKind::Paragraph(paragraph) => BlockOutput::Element(paragraph.into_node()),
            BlockKind::Header(header) | BlockKind::SetTextHeader(header) => {
                BlockOutput::Element(header.into_node())
            }
            BlockKind::Rule => BlockOutput::Element(RenderNode::void("hr")),
            BlockKind::List(list) => BlockOutput::Element(list.into_node()),
            BlockKind::Quote(quote) => BlockOutput::Element(quote.into_node()),
            BlockKind::Table(table) => BlockOutput::Element(table.into_node()),
            BlockKind::Code(code) => BlockOutput::Element(code.into_node()),
            BlockKind::FencedCode(fence) => BlockOutput::Element(fence.into_node()),
            BlockKind::Comment(comment) => BlockOutput::Markup(comment.markup),
            BlockKind::Markup(markup) => BlockOutput::Markup(markup.markup),
            BlockKind::Reference => BlockOutput::Markup(String::new()),
        }
    }

    /// Short name used in logs and invariant messages.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            BlockKind::Paragraph(_) => "Paragraph",
            BlockKind::Header(_) => "Header",
            BlockKind::SetTextHeader(_) => "SetTextHeader",
            BlockKind::Rule => "Rule",
            BlockKind::List(_) => "List",
            BlockKind::Quote(_) => "Quote",
            BlockKind::Table(_) => "Table",
            BlockKind::Code(_) => "Code",
            BlockKind::FencedCode(_) => "FencedCode",
            BlockKind::Comment(_) => "Comment",
            BlockKind::Markup(_) => "Markup",
            BlockKind::Reference => "Reference",
        }
    }
}
