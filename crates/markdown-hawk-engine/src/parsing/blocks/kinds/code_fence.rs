use crate::{
    parsing::lines::Line,
    render::{Content, RenderNode},
};

use super::super::types::{Block, BlockKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '`' => Some(FenceKind::Backticks),
            '~' => Some(FenceKind::Tildes),
            _ => None,
        }
    }

    pub fn char(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// A fenced code block (```` ``` ```` or `~~~`) with an optional language word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFence {
    pub kind: FenceKind,
    pub language: Option<String>,
    pub text: String,
    /// The closing fence has been seen.
    pub closed: bool,
}

impl CodeFence {
    pub const MIN_FENCE: usize = 3;

    pub fn open(line: &Line) -> Option<Block> {
        let kind = FenceKind::from_char(line.marker()?)?;
        let info = Self::after_fence(&line.text, kind)?.trim_matches(' ');

        let language = if info.is_empty() {
            None
        } else if info
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            Some(info.to_string())
        } else {
            return None;
        };

        Some(Block::new(BlockKind::FencedCode(CodeFence {
            kind,
            language,
            text: String::new(),
            closed: false,
        })))
    }

    /// Everything until a closing fence of the same character belongs to
    /// the block, blank lines included.
    pub fn continue_with(&mut self, line: &Line, interrupted: &mut bool) -> bool {
        if self.closed {
            return false;
        }

        if *interrupted {
            self.text.push('\n');
            *interrupted = false;
        }

        if Self::closes(&line.text, self.kind) {
            self.closed = true;
            return true;
        }

        self.text.push('\n');
        self.text.push_str(&line.body);
        true
    }

    /// Drops the line break left by the opening fence and escapes the text.
    pub fn complete(&mut self) {
        let text = self.text.strip_prefix('\n').unwrap_or(&self.text);
        self.text = html_escape::encode_text(text).into_owned();
    }

    pub fn into_node(self) -> RenderNode {
        let code = RenderNode::verbatim("code", self.text).with_optional_attribute(
            "class",
            self.language.map(|language| format!("language-{language}")),
        );
        RenderNode::new("pre", Content::Element(Box::new(code)))
    }

    /// The rest of the line after a run of at least three fence characters.
    fn after_fence(text: &str, kind: FenceKind) -> Option<&str> {
        let run = text.chars().take_while(|&c| c == kind.char()).count();
        (run >= Self::MIN_FENCE).then(|| &text[run..])
    }

    fn closes(text: &str, kind: FenceKind) -> bool {
        Self::after_fence(text, kind).is_some_and(|rest| rest.chars().all(|c| c == ' '))
    }
}
