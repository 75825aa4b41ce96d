// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* **content** and `code`.\n\n- Bullet point\n  - Nested item\n- Another item\n\n> Quoted [link](https://example.com)\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_deep_outline(sections: usize) -> String {
    let mut content = String::new();
    for section in 0..sections {
        for level in 1..=6 {
            content.push_str(&format!(
                "{} Section {section} level {level}\n\n",
                "#".repeat(level)
            ));
            content.push_str(&format!("{}1. Step\n", "  ".repeat(level - 1)));
        }
        content.push('\n');
    }
    content
}
