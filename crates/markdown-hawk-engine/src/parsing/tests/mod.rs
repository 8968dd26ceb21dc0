//! Scanner-level tests over whole documents.
//!
//! Every document is checked against the scanner invariants before the
//! test looks at the block kinds.

use rstest::rstest;

use crate::{
    options::RenderOptions,
    parsing::{ScannedDoc, blocks::BlockKind, invariants, scan_document},
};

fn scan(document: &str) -> ScannedDoc {
    let doc = scan_document(document, &RenderOptions::default());
    invariants::check(&doc.lines, &doc.blocks);
    doc
}

fn kinds(doc: &ScannedDoc) -> Vec<&'static str> {
    doc.blocks.iter().map(|block| block.kind_name()).collect()
}

#[rstest]
#[case("", vec![])]
#[case("\n\n\n", vec![])]
#[case("plain text", vec!["Paragraph"])]
#[case("# Title\ntext", vec!["Header", "Paragraph"])]
#[case("Title\n---", vec!["SetTextHeader"])]
#[case("text\n\n---", vec!["Paragraph", "Rule"])]
#[case("- a\n- b\n\nafter", vec!["List", "Paragraph"])]
#[case("> quote\nlazy\n\nafter", vec!["Quote", "Paragraph"])]
#[case("a | b\n--|--\n1 | 2\n\nafter", vec!["Table", "Paragraph"])]
#[case("    code\n\n    more", vec!["Code"])]
#[case("```\n# not a header\n```\ntext", vec!["FencedCode", "Paragraph"])]
#[case("<!--\nnote\n-->", vec!["Comment"])]
#[case("<div>\n*raw*\n</div>", vec!["Markup"])]
#[case("[id]: /url\ntext", vec!["Reference", "Paragraph"])]
fn block_sequences(#[case] document: &str, #[case] expected: Vec<&str>) {
    assert_eq!(kinds(&scan(document)), expected);
}

#[test]
fn forward_references_are_collected_before_rendering() {
    let doc = scan("[x][a]\n\n[a]: http://e.org");
    assert_eq!(
        doc.references.get("A").map(|d| d.url.as_str()),
        Some("http://e.org")
    );
}

#[test]
fn references_inside_lists_are_collected() {
    let doc = scan("- item [x]\n[x]: /x");
    assert_eq!(kinds(&doc), vec!["List"]);
    assert!(doc.references.get("x").is_some());
}

#[test]
fn list_items_nest_by_indent() {
    let doc = scan("- a\n  - b\n- c");
    let BlockKind::List(list) = &doc.blocks[0].kind else {
        panic!("list");
    };
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[0].lines, vec!["a", "- b"]);
}

#[test]
fn fenced_code_keeps_blank_lines() {
    let doc = scan("```\na\n\nb\n```");
    let BlockKind::FencedCode(fence) = &doc.blocks[0].kind else {
        panic!("fence");
    };
    assert_eq!(fence.text, "a\n\nb");
}

#[test]
fn markup_block_tracks_nested_tags() {
    let doc = scan("<div>\n<div>\ninner\n</div>\nstill outer\n</div>\nafter");
    assert_eq!(kinds(&doc), vec!["Markup", "Paragraph"]);
}

#[test]
fn text_level_tags_start_paragraphs() {
    assert_eq!(kinds(&scan("<span>x</span>")), vec!["Paragraph"]);
}

#[test]
fn tabs_count_toward_indent() {
    let doc = scan("\tcode");
    assert_eq!(kinds(&doc), vec!["Code"]);
}
