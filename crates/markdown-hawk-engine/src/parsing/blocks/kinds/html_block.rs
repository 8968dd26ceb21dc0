use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::lines::Line;

use super::super::types::{Block, BlockKind};

/// One HTML attribute: name plus an optional quoted or bare value.
pub const ATTRIBUTE: &str = r#"[a-zA-Z_:][\w:.-]*(?:\s*=\s*(?:[^"'=<>`\s]+|"[^"]*"|'[^']*'))?"#;

static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^<(\w+)(?:[ ]*{ATTRIBUTE})*[ ]*(/)?>"))
        .expect("valid opening tag pattern")
});

/// Elements that never carry content or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "link", "meta",
    "param", "source",
];

/// Inline-level elements; a line starting with one of these is a paragraph.
pub const TEXT_LEVEL_ELEMENTS: &[&str] = &[
    "a", "br", "bdo", "abbr", "blink", "nextid", "acronym", "basefont", "b", "em", "big", "cite",
    "small", "spacer", "listing", "i", "rp", "del", "code", "strike", "marquee", "q", "rt", "ins",
    "font", "strong", "s", "tt", "kbd", "mark", "u", "xm", "sub", "nobr", "sup", "ruby", "var",
    "span", "wbr", "time",
];

/// A block of raw HTML, passed through untouched.
///
/// Tracks nested open tags of the same name so that the block only ends
/// at the closing tag matching the one that opened it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlBlock {
    /// Lowercased element name.
    pub name: String,
    pub depth: usize,
    pub markup: String,
    pub closed: bool,
}

impl HtmlBlock {
    pub fn open(line: &Line) -> Option<Block> {
        let caps = OPEN_TAG.captures(&line.text)?;
        let name = caps[1].to_ascii_lowercase();
        if TEXT_LEVEL_ELEMENTS.contains(&name.as_str()) {
            return None;
        }

        let self_closing = caps.get(2).is_some() || VOID_ELEMENTS.contains(&name.as_str());
        let remainder = &line.text[caps[0].len()..];

        let closed = if remainder.trim().is_empty() {
            self_closing
        } else if self_closing {
            return None;
        } else {
            ends_with_close_tag(remainder, &name)
        };

        Some(Block::new(BlockKind::Markup(HtmlBlock {
            name,
            depth: 0,
            markup: line.text.clone(),
            closed,
        })))
    }

    pub fn continue_with(&mut self, line: &Line, interrupted: &mut bool) -> bool {
        if self.closed {
            return false;
        }

        if OPEN_TAG
            .captures(&line.text)
            .is_some_and(|caps| caps.get(2).is_none() && caps[1].eq_ignore_ascii_case(&self.name))
        {
            self.depth += 1;
        }

        if ends_with_close_tag(&line.text, &self.name) {
            if self.depth > 0 {
                self.depth -= 1;
            } else {
                self.closed = true;
            }
        }

        if *interrupted {
            self.markup.push('\n');
            *interrupted = false;
        }
        self.markup.push('\n');
        self.markup.push_str(&line.body);
        true
    }
}

/// `</name>` at the end of `text`, ignoring trailing spaces and case.
fn ends_with_close_tag(text: &str, name: &str) -> bool {
    let close = format!("</{name}>");
    let text = text.trim_end_matches(' ');
    text.len()
        .checked_sub(close.len())
        .and_then(|start| text.get(start..))
        .is_some_and(|tail| tail.eq_ignore_ascii_case(&close))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(raw: &str) -> Option<HtmlBlock> {
        match HtmlBlock::open(&Line::new(raw))?.kind {
            BlockKind::Markup(m) => Some(m),
            _ => None,
        }
    }

    #[test]
    fn opens_on_block_level_tag() {
        let m = html(r#"<div class="box">"#).expect("markup");
        assert_eq!(m.name, "div");
        assert!(!m.closed);
    }

    #[test]
    fn inline_level_tags_are_paragraphs() {
        assert!(html("<span>text</span>").is_none());
        assert!(html("<em>x</em>").is_none());
    }

    #[test]
    fn void_element_alone_closes_immediately() {
        assert!(html("<hr>").expect("markup").closed);
        assert!(html("<section />").expect("markup").closed);
    }

    #[test]
    fn void_element_with_trailing_text_is_not_a_block() {
        assert!(html("<hr> more").is_none());
    }

    #[test]
    fn close_tag_on_opening_line() {
        assert!(html("<div>content</DIV>  ").expect("markup").closed);
    }

    #[test]
    fn nested_same_name_tags_track_depth() {
        let mut m = html("<div>").expect("markup");
        let mut interrupted = false;
        assert!(m.continue_with(&Line::new("<div>"), &mut interrupted));
        assert_eq!(m.depth, 1);
        assert!(m.continue_with(&Line::new("inner</div>"), &mut interrupted));
        assert_eq!(m.depth, 0);
        assert!(!m.closed);
        assert!(m.continue_with(&Line::new("</div>"), &mut interrupted));
        assert!(m.closed);
        assert!(!m.continue_with(&Line::new("after"), &mut interrupted));
        assert_eq!(m.markup, "<div>\n<div>\ninner</div>\n</div>");
    }

    #[test]
    fn blank_lines_inside_are_kept() {
        let mut m = html("<div>").expect("markup");
        let mut interrupted = true;
        m.continue_with(&Line::new("</div>"), &mut interrupted);
        assert_eq!(m.markup, "<div>\n\n</div>");
    }

    #[test]
    fn close_tag_detection() {
        assert!(ends_with_close_tag("x</p>", "p"));
        assert!(ends_with_close_tag("</P>   ", "p"));
        assert!(!ends_with_close_tag("</p> x", "p"));
        assert!(!ends_with_close_tag("p>", "p"));
    }
}
