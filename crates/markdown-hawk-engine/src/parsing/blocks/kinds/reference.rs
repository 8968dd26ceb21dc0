use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::{
    lines::Line,
    references::{Definition, ReferenceTable},
};

use super::super::types::{Block, BlockKind};

static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\[(.+?)\]:[ ]*<?(\S+?)>?(?:[ ]+["'(](.+)["')])?[ ]*$"#)
        .expect("valid reference definition pattern")
});

/// A `[id]: url "title"` line. It renders nothing; it only records the
/// definition for links and images anywhere in the document.
pub struct Reference;

impl Reference {
    pub fn open(line: &Line, references: &mut ReferenceTable) -> Option<Block> {
        Self::define(&line.text, references).then(|| Block::new(BlockKind::Reference).hidden())
    }

    /// Records the definition on `text`, if it is one.
    pub fn define(text: &str, references: &mut ReferenceTable) -> bool {
        let Some(caps) = DEFINITION.captures(text) else {
            return false;
        };

        references.insert(
            &caps[1],
            Definition {
                url: caps[2].to_string(),
                title: caps.get(3).map(|m| m.as_str().to_string()),
            },
        );
        true
    }
}
