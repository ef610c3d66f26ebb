// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_milestone_document(milestones: usize) -> String {
    let categories = ["work", "education", "achievement", "personal"];
    let mut content = String::new();

    for i in 0..milestones {
        content.push_str(&format!("# Category : {}\n", categories[i % categories.len()]));
        content.push_str(&format!("## Milestone {i} at [Org](https://org{i}.test)\n"));
        content.push_str(&format!(
            "- Time period : {} - {}-{:02}\n",
            1990 + i % 30,
            1991 + i % 30,
            1 + i % 12
        ));
        content.push_str("- icon : ⭐\n- Bullet points\n");
        content.push_str(&generate_nested_bullets(3, 0));
        content.push_str(&format!("- Logo : https://org{i}.test/logo.png\n\n"));
    }

    content
}

#[allow(dead_code)]
pub fn generate_nested_bullets(depth: usize, level: usize) -> String {
    if depth == 0 {
        return String::new();
    }

    let mut content = String::new();
    let indent = "  ".repeat(level);
    for i in 0..2 {
        content.push_str(&format!(
            "{indent}- Bullet {i} at level {level} with <a href=\"https://x.test\">a link</a>\n"
        ));
        content.push_str(&generate_nested_bullets(depth - 1, level + 1));
    }
    content
}
