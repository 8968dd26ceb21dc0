use crate::{options::RenderOptions, parsing::references::ReferenceTable, render::RenderNode};

/// What the inline rules may consult: the switches and the references
/// collected by the block scan.
#[derive(Clone, Copy)]
pub struct InlineContext<'a> {
    pub options: &'a RenderOptions,
    pub references: &'a ReferenceTable,
}

/// The text a rule examines.
#[derive(Debug, Clone, Copy)]
pub struct Excerpt<'a> {
    /// The remaining text starting at the dispatch marker.
    pub text: &'a str,
    /// The whole remaining text, for rules that may match before the marker.
    pub context: &'a str,
}

impl Excerpt<'_> {
    /// Byte at `index` into `text`.
    pub fn byte(&self, index: usize) -> Option<u8> {
        self.text.as_bytes().get(index).copied()
    }
}

/// A compiled piece of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Literal text, break handling already applied.
    Text(String),
    /// Markup emitted as is (escapes, entities, raw tags).
    Markup(String),
    /// A node for the serializer.
    Element(RenderNode),
}

/// A successful rule match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    /// Bytes consumed, counted from `position`.
    pub extent: usize,
    /// Start of the match within the excerpt's context. `None` means the
    /// dispatch marker.
    pub position: Option<usize>,
    pub node: InlineNode,
}

impl InlineMatch {
    pub fn markup(extent: usize, markup: impl Into<String>) -> Self {
        Self {
            extent,
            position: None,
            node: InlineNode::Markup(markup.into()),
        }
    }

    pub fn element(extent: usize, node: RenderNode) -> Self {
        Self {
            extent,
            position: None,
            node: InlineNode::Element(node),
        }
    }

    #[must_use]
    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}
