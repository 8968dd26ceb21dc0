//! # Render Tree Serialization
//!
//! Turns block and inline nodes into markup. Content modes decide what
//! happens to a node's body: inline text goes back through the inline
//! compiler, block lines are scanned again as a nested document.

pub mod node;

pub use node::{Content, RenderNode};

use crate::{
    options::RenderOptions,
    parsing::{
        blocks::{Block, BlockBuilder, BlockContext, BlockOutput},
        inline::{InlineContext, InlineNode, parse_inline},
        lines::{WHITESPACE, split_document},
        references::ReferenceTable,
    },
};

const PARAGRAPH_OPEN: &str = "<p>";
const PARAGRAPH_CLOSE: &str = "</p>";

/// One rendering session. Owns the references collected from a single
/// document; never reuse it for another one.
pub struct Renderer<'a> {
    options: &'a RenderOptions,
    references: ReferenceTable,
    depth: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            references: ReferenceTable::new(),
            depth: 0,
        }
    }

    /// Renders a whole document, without surrounding line breaks.
    pub fn document(&mut self, document: &str) -> String {
        let lines = split_document(document);
        log::debug!("rendering document of {} lines", lines.len());

        let markup = self.lines(&lines);
        log::debug!(
            "rendered {} bytes with {} reference definitions",
            markup.len(),
            self.references.len()
        );
        markup.trim_matches('\n').to_string()
    }

    /// Scans `lines` into blocks and renders the visible ones, each on a
    /// line of its own.
    pub fn lines<S: AsRef<str>>(&mut self, lines: &[S]) -> String {
        let blocks = self.scan(lines);

        let mut markup = String::new();
        for block in blocks.into_iter().filter(|block| !block.hidden) {
            markup.push('\n');
            match block.into_output() {
                BlockOutput::Markup(raw) => markup.push_str(&raw),
                BlockOutput::Element(node) => markup.push_str(&self.element(&node)),
            }
        }
        markup.push('\n');
        markup
    }

    /// Compiles one piece of inline text.
    pub fn line(&mut self, text: &str) -> String {
        let nodes = parse_inline(
            text,
            &InlineContext {
                options: self.options,
                references: &self.references,
            },
        );

        let mut markup = String::new();
        for node in nodes {
            match node {
                InlineNode::Text(text) | InlineNode::Markup(text) => markup.push_str(&text),
                InlineNode::Element(node) => markup.push_str(&self.element(&node)),
            }
        }
        markup
    }

    /// Serializes one node. Attributes without a value are left out; a node
    /// without content closes itself.
    pub fn element(&mut self, node: &RenderNode) -> String {
        let mut markup = format!("<{}", node.name);
        for (name, value) in &node.attributes {
            if let Some(value) = value {
                markup.push_str(&format!(" {name}=\"{value}\""));
            }
        }

        match &node.content {
            None => markup.push_str(" />"),
            Some(content) => {
                markup.push('>');
                markup.push_str(&self.content(content));
                markup.push_str(&format!("</{}>", node.name));
            }
        }
        markup
    }

    fn content(&mut self, content: &Content) -> String {
        match content {
            Content::Verbatim(text) => text.clone(),
            Content::Inline(text) => self
                .nested(|renderer| renderer.line(text))
                .unwrap_or_else(|| escape(text)),
            Content::Element(child) => self.element(child),
            Content::Children(children) => {
                let mut markup = String::new();
                for child in children {
                    markup.push('\n');
                    markup.push_str(&self.element(child));
                }
                markup.push('\n');
                markup
            }
            Content::BlockLines(lines) => self
                .nested(|renderer| renderer.lines(lines))
                .unwrap_or_else(|| escaped_paragraph(lines)),
            Content::ListItem { lines, tight } => self
                .nested(|renderer| renderer.list_item(lines, *tight))
                .unwrap_or_else(|| escaped_paragraph(lines)),
        }
    }

    /// A tight item whose body starts with a paragraph loses that
    /// paragraph's tags, so short items render inline.
    fn list_item(&mut self, lines: &[String], tight: bool) -> String {
        let markup = self.lines(lines);
        if !tight {
            return markup;
        }

        let Some(body) = markup.trim_matches(WHITESPACE).strip_prefix(PARAGRAPH_OPEN) else {
            return markup;
        };
        match body.find(PARAGRAPH_CLOSE) {
            Some(close) => format!("{}{}", &body[..close], &body[close + PARAGRAPH_CLOSE.len()..]),
            None => body.to_string(),
        }
    }

    /// Runs `render` one level deeper, or returns `None` once the nesting
    /// limit is reached.
    fn nested(&mut self, render: impl FnOnce(&mut Self) -> String) -> Option<String> {
        if self.depth >= self.options.max_nesting_depth {
            log::warn!(
                "nesting deeper than {} levels, emitting the rest as text",
                self.options.max_nesting_depth
            );
            return None;
        }

        self.depth += 1;
        let markup = render(self);
        self.depth -= 1;
        Some(markup)
    }

    fn scan<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<Block> {
        let mut builder = BlockBuilder::new(BlockContext {
            options: self.options,
            references: &mut self.references,
        });
        for line in lines {
            builder.push(line.as_ref());
        }
        builder.finish()
    }
}

fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

fn escaped_paragraph(lines: &[String]) -> String {
    format!("\n{PARAGRAPH_OPEN}{}{PARAGRAPH_CLOSE}\n", escape(&lines.join("\n")))
}
