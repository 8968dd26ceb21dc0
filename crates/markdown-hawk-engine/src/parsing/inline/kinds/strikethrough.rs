use std::sync::LazyLock;

use fancy_regex::Regex;

use crate::{
    parsing::inline::types::{Excerpt, InlineMatch},
    render::RenderNode,
};

static STRIKETHROUGH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^~~(?=\S)(.+?)(?<=\S)~~").expect("valid strikethrough pattern")
});

/// `~~deleted~~`, on a single line, not padded with whitespace inside.
pub struct Strikethrough;

impl Strikethrough {
    pub fn parse(excerpt: &Excerpt<'_>) -> Option<InlineMatch> {
        if excerpt.byte(1) != Some(b'~') {
            return None;
        }

        let caps = STRIKETHROUGH.captures(excerpt.text).ok().flatten()?;
        let whole = caps.get(0)?;
        let inner = caps.get(1)?;
        Some(InlineMatch::element(
            whole.end(),
            RenderNode::inline("del", inner.as_str()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strike(text: &str) -> Option<InlineMatch> {
        Strikethrough::parse(&Excerpt {
            text,
            context: text,
        })
    }

    #[test]
    fn strikes_through() {
        let m = strike("~~gone~~ kept").expect("strikethrough");
        assert_eq!(m.extent, 8);
        assert_eq!(
            m.node,
            crate::parsing::inline::InlineNode::Element(RenderNode::inline("del", "gone"))
        );
    }

    #[test]
    fn inner_whitespace_edges_decline() {
        assert!(strike("~~ gone~~").is_none());
        assert!(strike("~~gone ~~").is_none());
    }

    #[test]
    fn does_not_cross_lines() {
        assert!(strike("~~one\ntwo~~").is_none());
    }

    #[test]
    fn single_tilde_declines() {
        assert!(strike("~x~").is_none());
    }
}
