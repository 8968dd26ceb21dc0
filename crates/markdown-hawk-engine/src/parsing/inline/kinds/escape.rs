use crate::parsing::inline::types::{Excerpt, InlineMatch};

/// `\` followed by punctuation emits the punctuation literally.
pub struct EscapeSequence;

impl EscapeSequence {
    pub const ESCAPABLE: [char; 17] = [
        '\\', '`', '*', '_', '{', '}', '[', ']', '(', ')', '>', '#', '+', '-', '.', '!', '|',
    ];

    pub fn parse(excerpt: &Excerpt<'_>) -> Option<InlineMatch> {
        let escaped = excerpt.text.get(1..)?.chars().next()?;
        Self::ESCAPABLE
            .contains(&escaped)
            .then(|| InlineMatch::markup(2, escaped))
    }
}
