use super::{
    blocks::{Block, BlockKind},
    lines::is_blank,
};

/// Validates scanner output invariants.
///
/// Asserts that:
/// - Every block comes from at least one non-blank line
/// - Reference blocks, and only they, are hidden
/// - Every list has items, each with at least one line, and a list is
///   loose exactly when one of its items records a blank separator
/// - Header levels stay within 1..=6
/// - Paragraph text is never empty
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check<S: AsRef<str>>(lines: &[S], blocks: &[Block]) {
    let content_lines = lines.iter().filter(|line| !is_blank(line.as_ref())).count();
    assert!(
        blocks.len() <= content_lines,
        "{} blocks from {} non-blank lines",
        blocks.len(),
        content_lines
    );

    for (index, block) in blocks.iter().enumerate() {
        let is_reference = matches!(block.kind, BlockKind::Reference);
        assert_eq!(
            block.hidden,
            is_reference,
            "block {index} ({}) hidden: {}",
            block.kind_name(),
            block.hidden
        );

        match &block.kind {
            BlockKind::List(list) => {
                assert!(!list.items.is_empty(), "block {index}: list without items");
                assert!(
                    list.items.iter().all(|item| !item.lines.is_empty()),
                    "block {index}: list item without lines"
                );
                let separated = list
                    .items
                    .iter()
                    .any(|item| item.lines.iter().skip(1).any(String::is_empty));
                assert_eq!(
                    list.loose, separated,
                    "block {index}: loose flag disagrees with recorded separators"
                );
            }
            BlockKind::Header(header) | BlockKind::SetTextHeader(header) => assert!(
                (1..=6).contains(&header.level),
                "block {index}: header level {}",
                header.level
            ),
            BlockKind::Paragraph(paragraph) => {
                assert!(!paragraph.text.is_empty(), "block {index}: empty paragraph")
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::kinds::{Bullet, List, ListItem};

    fn list(loose: bool, items: &[&[&str]]) -> Block {
        let items = items
            .iter()
            .map(|lines| ListItem {
                lines: lines.iter().map(|line| line.to_string()).collect(),
            })
            .collect();
        Block::new(BlockKind::List(List {
            bullet: Bullet::Unordered,
            indent: 0,
            start: None,
            items,
            loose,
        }))
    }

    #[test]
    fn separated_loose_list_passes() {
        check(&["- a", "", "  b"], &[list(true, &[&["a", "", "b"]])]);
    }

    #[test]
    fn bare_bullet_item_is_not_a_separator() {
        check(&["-", "- b"], &[list(false, &[&[""], &["b"]])]);
    }

    #[test]
    #[should_panic(expected = "loose flag disagrees")]
    fn loose_list_without_separator_fails() {
        check(&["- a", "- b"], &[list(true, &[&["a"], &["b"]])]);
    }
}
