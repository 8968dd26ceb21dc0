use std::sync::LazyLock;

use regex::Regex;

use crate::{
    parsing::inline::{
        cursor::Cursor,
        types::{Excerpt, InlineMatch},
    },
    render::RenderNode,
};

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ ]*\n").expect("valid code span break pattern"));

/// A code span: a run of backticks, then content up to the next run of
/// exactly the same length.
///
/// Code spans are raw: their content is escaped but never compiled.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';

    pub fn parse(excerpt: &Excerpt<'_>) -> Option<InlineMatch> {
        let mut cur = Cursor::new(excerpt.text);
        let run = cur.eat_run(Self::TICK);
        if run == 0 {
            return None;
        }
        let content_start = cur.i;

        let content = loop {
            if !cur.skip_to(Self::TICK) {
                return None;
            }
            let content = cur.since(content_start);
            if cur.eat_run(Self::TICK) == run {
                break content;
            }
        };

        let content = match content.trim_matches(' ') {
            "" => " ",
            trimmed => trimmed,
        };
        let escaped = html_escape::encode_text(content);
        let code = LINE_BREAK.replace_all(&escaped, " ").into_owned();

        Some(InlineMatch::element(cur.i, RenderNode::verbatim("code", code)))
    }
}
