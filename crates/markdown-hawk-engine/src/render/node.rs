/// How a [`RenderNode`]'s content is turned into markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Already-escaped text copied through as is.
    Verbatim(String),
    /// A single line of text run through the inline compiler.
    Inline(String),
    /// One wrapped child, emitted with no separators (`<pre><code>`).
    Element(Box<RenderNode>),
    /// Children emitted one per line.
    Children(Vec<RenderNode>),
    /// Lines scanned again as a nested document (blockquote bodies).
    BlockLines(Vec<String>),
    /// Lines of a list item; a tight item drops its leading paragraph tags.
    ListItem { lines: Vec<String>, tight: bool },
}

/// A tag with ordered attributes and optional content.
///
/// Attributes whose value is `None` are left out of the markup entirely.
/// A node without content serializes as a void tag (`<hr />`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderNode {
    pub name: &'static str,
    pub attributes: Vec<(&'static str, Option<String>)>,
    pub content: Option<Content>,
}

impl RenderNode {
    /// A void node: no content, self-closing.
    pub fn void(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            content: None,
        }
    }

    pub fn new(name: &'static str, content: Content) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            content: Some(content),
        }
    }

    /// A node whose text goes through the inline compiler.
    pub fn inline(name: &'static str, text: impl Into<String>) -> Self {
        Self::new(name, Content::Inline(text.into()))
    }

    /// A node whose text is emitted untouched.
    pub fn verbatim(name: &'static str, text: impl Into<String>) -> Self {
        Self::new(name, Content::Verbatim(text.into()))
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, Some(value.into())));
        self
    }

    #[must_use]
    pub fn with_optional_attribute(mut self, name: &'static str, value: Option<String>) -> Self {
        self.attributes.push((name, value));
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.as_deref())
    }
}
