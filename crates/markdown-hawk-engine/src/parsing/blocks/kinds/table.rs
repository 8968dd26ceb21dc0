use std::sync::LazyLock;

use regex::Regex;

use crate::{
    parsing::lines::{Line, WHITESPACE},
    render::{Content, RenderNode},
};

use super::super::types::{Block, BlockKind};

/// Splits a row into cells. Pipes inside code spans or escaped with a
/// backslash do not separate cells.
static CELL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\\[|]|[^|`]|`[^`]+`|`)+").expect("valid table cell pattern")
});

const DIVIDER_CHARS: [char; 4] = [' ', '-', ':', '|'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// `:--` is left, `--:` is right, `:-:` is center and `---` is none.
    fn parse(cell: &str) -> Option<Self> {
        match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => Some(Alignment::Center),
            (true, false) => Some(Alignment::Left),
            (false, true) => Some(Alignment::Right),
            (false, false) => None,
        }
    }

    fn style(self) -> String {
        let name = match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        };
        format!("text-align: {name};")
    }
}

/// A pipe table. The header row is the paragraph right above the divider
/// line, which the table takes over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// One entry per non-empty divider cell, matched to columns by index.
    pub alignments: Vec<Option<Alignment>>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn open(line: &Line, current: Option<&Block>) -> Option<Block> {
        let paragraph = Block::open_paragraph(current)?;
        if !paragraph.text.contains('|') || !line.text.chars().all(|c| DIVIDER_CHARS.contains(&c))
        {
            return None;
        }

        let alignments = strip_pipes(&line.text)
            .split('|')
            .map(|cell| cell.trim_matches(WHITESPACE))
            .filter(|cell| !cell.is_empty())
            .map(Alignment::parse)
            .collect();

        let header = strip_pipes(&paragraph.text)
            .split('|')
            .map(|cell| cell.trim_matches(WHITESPACE).to_string())
            .collect();

        Some(
            Block::new(BlockKind::Table(Table {
                alignments,
                header,
                rows: Vec::new(),
            }))
            .identified(),
        )
    }

    /// Rows continue until a blank line or a line without any pipe.
    pub fn continue_with(&mut self, line: &Line, interrupted: bool) -> bool {
        if interrupted || !line.text.contains('|') {
            return false;
        }

        let row = CELL
            .find_iter(strip_pipes(&line.text))
            .map(|cell| cell.as_str().trim_matches(WHITESPACE).to_string())
            .collect();
        self.rows.push(row);
        true
    }

    fn cell(&self, name: &'static str, index: usize, text: String) -> RenderNode {
        let style = self
            .alignments
            .get(index)
            .copied()
            .flatten()
            .map(Alignment::style);
        RenderNode::inline(name, text).with_optional_attribute("style", style)
    }

    fn row(&self, name: &'static str, cells: Vec<String>) -> RenderNode {
        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(index, text)| self.cell(name, index, text))
            .collect();
        RenderNode::new("tr", Content::Children(cells))
    }

    pub fn into_node(mut self) -> RenderNode {
        let header = std::mem::take(&mut self.header);
        let rows = std::mem::take(&mut self.rows);

        let head = RenderNode::new("thead", Content::Children(vec![self.row("th", header)]));
        let body = RenderNode::new(
            "tbody",
            Content::Children(rows.into_iter().map(|row| self.row("td", row)).collect()),
        );
        RenderNode::new("table", Content::Children(vec![head, body]))
    }
}

fn strip_pipes(text: &str) -> &str {
    text.trim_matches(WHITESPACE).trim_matches('|')
}
