use crate::{
    parsing::lines::Line,
    render::{Content, RenderNode},
};

use super::{
    super::types::{Block, BlockContext, BlockKind},
    Reference,
};

/// Bullet family of a list. Items of one list may mix bullets within a
/// family (`-` then `*`) but not across families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bullet {
    /// `*`, `+` or `-`.
    Unordered,
    /// Digits followed by `.`.
    Ordered,
}

impl Bullet {
    fn for_marker(marker: char) -> Self {
        if marker.is_ascii_digit() {
            Bullet::Ordered
        } else {
            Bullet::Unordered
        }
    }

    /// Byte length of the bullet at the start of `text`.
    fn len(self, text: &str) -> Option<usize> {
        match self {
            Bullet::Unordered => text.starts_with(['*', '+', '-']).then_some(1),
            Bullet::Ordered => {
                let digits = text.bytes().take_while(u8::is_ascii_digit).count();
                (digits > 0 && text.as_bytes().get(digits) == Some(&b'.')).then_some(digits + 1)
            }
        }
    }

    /// Splits `text` into bullet and item text. The bullet must be followed
    /// by at least one space.
    fn split(self, text: &str) -> Option<(&str, &str)> {
        let len = self.len(text)?;
        let rest = &text[len..];
        let content = rest.trim_start_matches(' ');
        (content.len() < rest.len()).then(|| (&text[..len], content))
    }

    /// Like [`Bullet::split`] but a bare bullet with nothing after it also
    /// counts, yielding an empty item.
    fn split_continuation(self, text: &str) -> Option<&str> {
        let len = self.len(text)?;
        let rest = &text[len..];
        if rest.is_empty() {
            return Some(rest);
        }
        let content = rest.trim_start_matches(' ');
        (content.len() < rest.len()).then_some(content)
    }

    fn tag(self) -> &'static str {
        match self {
            Bullet::Unordered => "ul",
            Bullet::Ordered => "ol",
        }
    }
}

/// One list item: the lines that will be scanned as its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub lines: Vec<String>,
}

impl ListItem {
    fn new(text: &str) -> Self {
        Self {
            lines: vec![text.to_string()],
        }
    }
}

/// An ordered or unordered list.
///
/// The open item is always the last one in `items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub bullet: Bullet,
    /// Indent of the first bullet; only bullets at this indent start items.
    pub indent: usize,
    /// Number of the first item of an ordered list, when it is not `1`.
    pub start: Option<String>,
    pub items: Vec<ListItem>,
    /// A blank line separated parts of the list.
    pub loose: bool,
}

impl List {
    /// Spaces stripped from the front of an item's continuation lines.
    pub const CONTINUATION_INDENT: usize = 4;

    pub fn open(line: &Line) -> Option<Block> {
        let bullet = Bullet::for_marker(line.marker()?);
        let (marker, content) = bullet.split(&line.text)?;

        let start = match bullet {
            Bullet::Ordered => Some(marker.trim_end_matches('.'))
                .filter(|number| *number != "1")
                .map(str::to_string),
            Bullet::Unordered => None,
        };

        Some(Block::new(BlockKind::List(List {
            bullet,
            indent: line.indent,
            start,
            items: vec![ListItem::new(content)],
            loose: false,
        })))
    }

    pub fn continue_with(
        &mut self,
        line: &Line,
        interrupted: &mut bool,
        ctx: &mut BlockContext<'_>,
    ) -> bool {
        if line.indent == self.indent
            && let Some(content) = self.bullet.split_continuation(&line.text)
        {
            if *interrupted {
                self.separate();
                *interrupted = false;
            }
            self.items.push(ListItem::new(content));
            return true;
        }

        if line.marker() == Some('[') && Reference::define(&line.text, ctx.references) {
            return true;
        }

        if !*interrupted {
            self.push_line(line.dedent(Self::CONTINUATION_INDENT));
            return true;
        }

        if line.indent > 0 {
            self.separate();
            self.push_line(line.dedent(Self::CONTINUATION_INDENT));
            *interrupted = false;
            return true;
        }

        false
    }

    /// The item lines are still being added to.
    pub fn open_item(&self) -> Option<&ListItem> {
        self.items.last()
    }

    fn push_line(&mut self, text: &str) {
        if let Some(item) = self.items.last_mut() {
            item.lines.push(text.to_string());
        }
    }

    /// Records a blank line in the open item and marks the list loose.
    fn separate(&mut self) {
        self.push_line("");
        self.loose = true;
    }

    pub fn into_node(self) -> RenderNode {
        let tight = !self.loose;
        let items = self
            .items
            .into_iter()
            .map(|item| {
                RenderNode::new(
                    "li",
                    Content::ListItem {
                        lines: item.lines,
                        tight,
                    },
                )
            })
            .collect();

        RenderNode::new(self.bullet.tag(), Content::Children(items))
            .with_optional_attribute("start", self.start)
    }
}
