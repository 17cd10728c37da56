//! Integration tests for region parsing.

use pretty_assertions::assert_eq;
use readme_blocks::{Sentinels, find_regions, has_region, region_body};

const README: &str = "\
# deepmr

Intro paragraph.

<!-- _README:START -->
## Installation

pip install deepmr
<!-- _README:END -->
";

#[test]
fn test_find_region_in_readme() {
    let regions = find_regions(README, &Sentinels::default());

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].start_line, 5);
    assert_eq!(regions[0].end_line, 9);
    assert_eq!(regions[0].body, "## Installation\n\npip install deepmr\n");
}

#[test]
fn test_has_region() {
    assert!(has_region(README, &Sentinels::default()));
    assert!(!has_region("# deepmr\n", &Sentinels::default()));
}

#[test]
fn test_multiple_regions_found_in_order() {
    let content = "\
<!-- _README:START -->
one
<!-- _README:END -->
middle
<!-- _README:START -->
two
<!-- _README:END -->
";
    let regions = find_regions(content, &Sentinels::default());

    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].body, "one\n");
    assert_eq!(regions[1].body, "two\n");
    assert!(regions[0].span.end <= regions[1].span.start);
}

#[test]
fn test_sentinel_embedded_in_text_counts() {
    let content = "see <!-- _README:START --> here\nbody\nand <!-- _README:END --> there\n";
    let regions = find_regions(content, &Sentinels::default());

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].body, "body\n");
}

#[test]
fn test_orphan_end_sentinel_ignored() {
    let content = "<!-- _README:END -->\ntext\n";
    assert!(find_regions(content, &Sentinels::default()).is_empty());
}

#[test]
fn test_crlf_body_keeps_line_endings() {
    let content = "<!-- _README:START -->\r\nline\r\n<!-- _README:END -->\r\n";
    let regions = find_regions(content, &Sentinels::default());

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].body, "line\r\n");
}

#[test]
fn test_custom_sentinels() {
    let sentinels = Sentinels::new("<!-- BEGIN DOCS -->", "<!-- END DOCS -->").unwrap();
    let content = "<!-- BEGIN DOCS -->\ndocs\n<!-- END DOCS -->\n";

    assert_eq!(region_body(content, &sentinels).as_deref(), Some("docs\n"));
    assert_eq!(region_body(content, &Sentinels::default()), None);
}

#[test]
fn test_region_body_ignores_unterminated() {
    let content = "<!-- _README:START -->\ndangling\n";
    assert_eq!(region_body(content, &Sentinels::default()), None);
}
