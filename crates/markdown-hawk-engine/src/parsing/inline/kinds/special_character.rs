use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::inline::types::{Excerpt, InlineMatch};

static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^&#?\w+;").expect("valid entity pattern"));

/// Escapes `&`, `<`, `>` and `"` in text. An `&` that already starts an
/// entity is left for the literal pass.
pub struct SpecialCharacter;

impl SpecialCharacter {
    pub fn parse(excerpt: &Excerpt<'_>) -> Option<InlineMatch> {
        let entity = match excerpt.byte(0)? {
            b'&' if ENTITY.is_match(excerpt.text) => return None,
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            _ => return None,
        };
        Some(InlineMatch::markup(1, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::InlineNode;
    use rstest::rstest;

    fn special(text: &str) -> Option<InlineNode> {
        SpecialCharacter::parse(&Excerpt {
            text,
            context: text,
        })
        .map(|m| m.node)
    }

    #[rstest]
    #[case("& x", "&amp;")]
    #[case("<3", "&lt;")]
    #[case("> quote", "&gt;")]
    #[case("\"hi\"", "&quot;")]
    fn escapes(#[case] text: &str, #[case] entity: &str) {
        assert_eq!(special(text), Some(InlineNode::Markup(entity.into())));
    }

    #[rstest]
    #[case("&amp;")]
    #[case("&#169;")]
    #[case("&copy; 2024")]
    fn existing_entities_are_kept(#[case] text: &str) {
        assert_eq!(special(text), None);
    }
}
