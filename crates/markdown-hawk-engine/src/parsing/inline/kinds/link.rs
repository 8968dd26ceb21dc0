use std::sync::LazyLock;

use regex::Regex;

use crate::{
    parsing::{
        inline::{
            cursor::Cursor,
            types::{Excerpt, InlineMatch},
        },
        references::ReferenceTable,
    },
    render::RenderNode,
};

use super::autolink::escape_href;

/// `(url "title")`. The url may hold one level of parentheses; the groups
/// are atomic so whitespace is never handed back to the url.
static DESTINATION: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(
        r#"^\((?>\s*)((?>(?:(?>[^ ()]+)|\([^ )]+\))+))(?:[ ]+("[^"]*"|'[^']*'))?\s*\)"#,
    )
    .expect("valid link destination pattern")
});

/// `[id]` or `[]` after the link text.
static REFERENCE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[(.*?)\]").expect("valid reference id pattern"));

/// A resolved link: its bracket text and where it points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    /// Escaped for use as an attribute value.
    pub href: String,
    pub title: Option<String>,
    pub extent: usize,
}

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';

    pub fn parse(excerpt: &Excerpt<'_>, references: &ReferenceTable) -> Option<InlineMatch> {
        let link = Self::scan(excerpt.text, references)?;
        let node = RenderNode::inline("a", link.text)
            .with_attribute("href", link.href)
            .with_optional_attribute("title", link.title);
        Some(InlineMatch::element(link.extent, node))
    }

    /// Reads `[text](url "title")`, `[text][id]`, `[text][]` or `[text]`
    /// from the start of `text`. The reference forms decline when the id
    /// is not defined.
    pub fn scan(text: &str, references: &ReferenceTable) -> Option<Link> {
        let (label, mut extent) = bracketed(text)?;
        let remainder = &text[extent..];

        let (href, title) = if let Some(caps) = DESTINATION.captures(remainder).ok().flatten() {
            extent += caps.get(0)?.end();
            let title = caps.get(2).map(|t| {
                let quoted = t.as_str();
                quoted[1..quoted.len() - 1].to_string()
            });
            (caps.get(1)?.as_str().to_string(), title)
        } else {
            let id = match REFERENCE_ID.captures(remainder) {
                Some(caps) => {
                    extent += caps[0].len();
                    caps.get(1)
                        .map(|id| id.as_str())
                        .filter(|id| !id.is_empty())
                        .unwrap_or(label)
                }
                None => label,
            };
            let definition = references.get(id)?;
            (definition.url.clone(), definition.title.clone())
        };

        Some(Link {
            text: label.to_string(),
            href: escape_href(&href),
            title,
            extent,
        })
    }
}

/// Bracketed text at the start of `text`, with nested brackets balanced.
/// Returns the inner text and the length including both brackets.
pub fn bracketed(text: &str) -> Option<(&str, usize)> {
    let mut cur = Cursor::new(text);
    if cur.bump()? != Link::OPEN {
        return None;
    }

    let mut depth = 0usize;
    while let Some(b) = cur.bump() {
        match b {
            Link::OPEN => depth += 1,
            Link::CLOSE if depth == 0 => return Some((&text[1..cur.i - 1], cur.i)),
            Link::CLOSE => depth -= 1,
            _ => {}
        }
    }
    None
}

/// `![alt](src "title")` and its reference forms.
pub struct Image;

impl Image {
    pub const MARKER: char = '!';

    pub fn parse(excerpt: &Excerpt<'_>, references: &ReferenceTable) -> Option<InlineMatch> {
        let rest = excerpt.text.strip_prefix(Self::MARKER)?;
        if !rest.starts_with(char::from(Link::OPEN)) {
            return None;
        }

        let link = Link::scan(rest, references)?;
        let node = RenderNode::void("img")
            .with_attribute("src", link.href)
            .with_attribute("alt", link.text)
            .with_optional_attribute("title", link.title);
        Some(InlineMatch::element(link.extent + 1, node))
    }
}
