use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::{
    blocks::kinds::html_block::ATTRIBUTE,
    inline::types::{Excerpt, InlineMatch},
};

static CLOSE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</\w*[ ]*>").expect("valid closing tag pattern"));

static COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<!---?[^>-](?:-?[^-])*-->").expect("valid inline comment pattern")
});

static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^<\w*(?:[ ]*{ATTRIBUTE})*[ ]*/?>")).expect("valid inline tag pattern")
});

/// Raw inline HTML: closing tags, comments and opening tags pass through
/// verbatim. Only reached when raw HTML is allowed.
pub struct InlineMarkup;

impl InlineMarkup {
    pub fn parse(excerpt: &Excerpt<'_>) -> Option<InlineMatch> {
        let text = excerpt.text;
        if !text.contains('>') {
            return None;
        }

        let second = excerpt.byte(1);
        let found = (second == Some(b'/'))
            .then(|| CLOSE_TAG.find(text))
            .flatten()
            .or_else(|| (second == Some(b'!')).then(|| COMMENT.find(text)).flatten())
            .or_else(|| (second != Some(b' ')).then(|| OPEN_TAG.find(text)).flatten())?;

        Some(InlineMatch::markup(found.end(), found.as_str()))
    }
}
