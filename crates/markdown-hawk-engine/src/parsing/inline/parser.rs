use std::sync::LazyLock;

use regex::Regex;

use super::{
    kinds::{candidates, try_match},
    types::{Excerpt, InlineContext, InlineNode},
};

/// Characters that may start an inline construct.
pub const MARKERS: [char; 13] = ['%', '!', '"', '*', '_', '&', '[', ':', '<', '>', '`', '~', '\\'];

static ANY_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]*\n").expect("valid line break pattern"));

static HARD_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[ ][ ]+|[ ]*\\)\n").expect("valid hard line break pattern")
});

/// Compiles one block's text into inline nodes.
///
/// Scans for the next marker, tries the rules registered for it in order
/// and emits the first match. A marker no rule accepts stays part of the
/// surrounding literal text.
pub fn parse_inline(text: &str, ctx: &InlineContext<'_>) -> Vec<InlineNode> {
    let breaks = ctx.options.breaks_enabled;
    let mut out = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(marker_position) = rest.find(MARKERS) {
        let marker = char::from(rest.as_bytes()[marker_position]);
        let excerpt = Excerpt {
            text: &rest[marker_position..],
            context: rest,
        };

        let found = candidates(marker).iter().find_map(|&ty| {
            try_match(ty, &excerpt, ctx)
                // A match that starts after the marker belongs to a later one.
                .filter(|m| m.position.is_none_or(|p| p <= marker_position))
        });

        match found {
            Some(m) => {
                let position = m.position.unwrap_or(marker_position);
                literal.push_str(&rest[..position]);
                flush_literal(&mut literal, &mut out, breaks);
                out.push(m.node);
                rest = &rest[position + m.extent..];
            }
            None => {
                literal.push_str(&rest[..=marker_position]);
                rest = &rest[marker_position + 1..];
            }
        }
    }

    literal.push_str(rest);
    flush_literal(&mut literal, &mut out, breaks);
    out
}

fn flush_literal(literal: &mut String, out: &mut Vec<InlineNode>, breaks: bool) {
    if !literal.is_empty() {
        out.push(InlineNode::Text(unmarked_text(literal, breaks)));
        literal.clear();
    }
}

/// Applies line break handling to literal text.
///
/// With `breaks` every line break becomes `<br />`. Otherwise only breaks
/// after two spaces or a backslash do, and a single trailing space is
/// dropped.
pub fn unmarked_text(text: &str, breaks: bool) -> String {
    if breaks {
        ANY_BREAK.replace_all(text, "<br />\n").into_owned()
    } else {
        HARD_BREAK
            .replace_all(text, "<br />\n")
            .replace(" \n", "\n")
    }
}
