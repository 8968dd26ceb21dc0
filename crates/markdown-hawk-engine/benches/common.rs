// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and a [link](http://e.org).\n\n- Bullet point\n  - Nested item\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        content.push_str(&generate_nested_content(depth, 2));
        content.push_str(&format!("[ref{section}]: http://e.org/{section}\n\n"));
    }

    content
}

#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize, current_level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let mut content = String::new();
    let header_prefix = "#".repeat(current_level);

    content.push_str(&format!(
        "{header_prefix} Subsection Level {current_level}\n\n"
    ));
    content.push_str("Some paragraph with `code`, ~~struck~~ text, a %Wiki Page% link and http://e.org/bare.\nA second line with _emphasis_ & an <span>inline tag</span>.\n\n");

    for i in 0..3 {
        let indent = "  ".repeat((current_level - 2).min(3));
        content.push_str(&format!("{indent}* Item {i} at level {current_level}\n"));
    }
    content.push('\n');

    content.push_str(&"> ".repeat(current_level - 1));
    content.push_str("Quoted [reference][ref0] text\n\n");

    if current_level % 3 == 0 {
        content.push_str("| a | b |\n|:--|--:|\n| 1 | 2 |\n| 3 | 4 |\n\n");
        content.push_str("```rust\nfn benchmark_function() {\n    let value = 42;\n}\n```\n\n");
    }

    if remaining_depth > 1 && current_level < 6 {
        content.push_str(&generate_nested_content(
            remaining_depth - 1,
            current_level + 1,
        ));
    }

    content
}

#[allow(dead_code)]
pub fn generate_large_document() -> String {
    generate_complex_markdown(50, 4)
}
