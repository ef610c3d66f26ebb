//! Fixture tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/`; every fixture is also run through the
//! output invariants in `invariants`.


use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use crate::models::{BulletPoint, Milestone};
use crate::parsing::{parse_document, parse_milestones, sort::sort_milestones_at};

fn load_fixture(name: &str) -> Vec<Milestone> {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let mut milestones = parse_milestones(&md);
    sort_milestones_at(&mut milestones, now);
    invariants::check(&milestones, now);
    milestones
}

fn bullets(points: &[(&str, usize)]) -> Vec<BulletPoint> {
    points
        .iter()
        .map(|&(text, level)| BulletPoint::new(text, level))
        .collect()
}

#[test]
fn fixture_full_resume() {
    let milestones = load_fixture("full_resume");

    let titles: Vec<&str> = milestones.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            r#"Engineer at <a href="https://acme.test">Acme</a>"#,
            "Marathon finisher",
            "Intern at Widgets",
            "BSc Computer Science, [Uni](https://uni.test)",
        ]
    );

    let engineer = &milestones[0];
    assert_eq!(engineer.category.as_deref(), Some("work"));
    assert_eq!(engineer.time_period, "2019 - Present");
    assert_eq!(engineer.icon.as_deref(), Some("🚀"));
    assert_eq!(engineer.logo, None);
    assert_eq!(
        engineer.bullet_points,
        bullets(&[
            ("Led the platform team", 0),
            ("Hired four engineers", 1),
            ("Ran the on-call rotation", 1),
            ("Shipped the billing rewrite", 0),
        ])
    );

    let marathon = &milestones[1];
    assert_eq!(marathon.category.as_deref(), Some("achievement"));
    assert!(marathon.bullet_points.is_empty());

    let intern = &milestones[2];
    assert_eq!(intern.category.as_deref(), Some("work"));
    assert_eq!(intern.time_period, "2016-06 - 2016-09");
    assert_eq!(intern.logo.as_deref(), Some("/img/widgets.png"));
    assert_eq!(intern.bullet_points, bullets(&[("Wrote tests", 0)]));

    let degree = &milestones[3];
    assert_eq!(degree.category.as_deref(), Some("education"));
    assert_eq!(degree.logo.as_deref(), Some("https://uni.test/logo.png"));
    assert_eq!(
        degree.bullet_points,
        bullets(&[("First class honours", 0), ("Dissertation on parsers", 1)])
    );
}

#[test]
fn fixture_malformed() {
    let milestones = load_fixture("malformed");
    assert_eq!(milestones.len(), 2);

    let first = &milestones[0];
    assert_eq!(first.title, "No period at all");
    assert_eq!(first.category, None);
    // The period line after the broken heading still belongs to the open milestone.
    assert_eq!(first.time_period, "2030");
    assert_eq!(
        first.bullet_points,
        bullets(&[
            ("starts deep", 4),
            ("shallowest", 1),
            ("reopened section still counts", 0),
        ])
    );

    let odd = &milestones[1];
    assert_eq!(odd.title, "Odd directives");
    assert_eq!(odd.time_period, "2011");
    assert_eq!(odd.icon.as_deref(), Some("🧪"));
    assert_eq!(odd.logo.as_deref(), Some("http://a.test:8080/x.png"));
    assert!(odd.bullet_points.is_empty());
}

// Properties from the document format

#[test]
fn category_inherited_and_sorted_newest_first() {
    let doc = "# Category : work\n## Job A\n- Time period : 2020 - 2022\n## Job B\n- Time period : 2023 - Present";

    let milestones = parse_document(doc);

    let titles: Vec<&str> = milestones.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Job B", "Job A"]);
    assert!(
        milestones
            .iter()
            .all(|m| m.category.as_deref() == Some("work"))
    );
}

#[test]
fn milestone_without_category_header_has_none() {
    let milestones = parse_document("## Lonely\n- Time period : 2001");
    assert_eq!(milestones.len(), 1);
    assert_eq!(milestones[0].category, None);
}

#[test]
fn logo_keeps_url_scheme_colon() {
    let milestones = parse_document("## A\n- Logo : https://x.com/a.png");
    assert_eq!(milestones[0].logo.as_deref(), Some("https://x.com/a.png"));
}

/// Regression: text after a second colon in the period line is dropped,
/// unlike the logo line which keeps everything after the first colon.
#[test]
fn time_period_truncated_at_second_colon() {
    let milestones = parse_document("## A\n- Time period : 2020 - 2022 : extra");
    assert_eq!(milestones[0].time_period, "2020 - 2022");
}

#[test]
fn empty_and_whitespace_documents_have_no_milestones() {
    assert!(parse_document("").is_empty());
    assert!(parse_document("\n\n   \n").is_empty());
    assert!(parse_document("# Category : work\n- Bullet points\n- x").is_empty());
}

#[test]
fn crlf_line_endings() {
    let milestones = parse_document("## A\r\n- Bullet points\r\n- one\r\n  - two\r\n");
    assert_eq!(milestones[0].bullet_points, bullets(&[("one", 0), ("two", 1)]));
}

#[test]
fn leading_byte_order_mark_is_ignored() {
    let milestones = parse_document("\u{FEFF}# Category : work\n## Job\n- Time period : 2020\n");
    assert_eq!(milestones.len(), 1);
    assert_eq!(milestones[0].category.as_deref(), Some("work"));

    let milestones = parse_document("\u{FEFF}## First\n- Time period : 2021\n");
    assert_eq!(milestones.len(), 1);
    assert_eq!(milestones[0].title, "First");
}

#[test]
fn directive_order_is_free() {
    let doc = "## A\n- Bullet points\n- x\n- Time period : 2020\n- y\n- icon : ✨";
    let milestones = parse_document(doc);

    assert_eq!(milestones[0].time_period, "2020");
    assert_eq!(milestones[0].icon.as_deref(), Some("✨"));
    assert_eq!(milestones[0].bullet_points, bullets(&[("x", 0), ("y", 0)]));
}
