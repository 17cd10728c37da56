//! Region writing: strip existing regions, append the fragment.

use crate::parser::find_regions;
use crate::sentinel::Sentinels;

/// Removes every region from the content, sentinel lines included.
///
/// Content outside regions is kept byte-for-byte. Content without regions is
/// returned unchanged.
///
/// # Example
/// ```
/// use readme_blocks::{Sentinels, strip_regions};
///
/// let content = "# Title\n<!-- _README:START -->\nold\n<!-- _README:END -->\n";
/// assert_eq!(strip_regions(content, &Sentinels::default()), "# Title\n");
/// ```
pub fn strip_regions(content: &str, sentinels: &Sentinels) -> String {
    let regions = find_regions(content, sentinels);
    if regions.is_empty() {
        return content.to_string();
    }

    let mut result = String::with_capacity(content.len());
    let mut cursor = 0;
    for region in &regions {
        if !region.terminated {
            tracing::warn!(
                line = region.start_line,
                "Start sentinel has no matching end sentinel; removing through end of file"
            );
        }
        result.push_str(&content[cursor..region.span.start]);
        cursor = region.span.end;
    }
    result.push_str(&content[cursor..]);

    tracing::debug!(removed = regions.len(), "Stripped managed regions");
    result
}

/// Returns the fragment as it appears inside a region: verbatim, with a
/// trailing newline added when a non-empty fragment lacks one.
pub fn normalize_fragment(fragment: &str) -> String {
    if fragment.is_empty() || fragment.ends_with('\n') {
        fragment.to_string()
    } else {
        format!("{fragment}\n")
    }
}

/// Appends a region holding `fragment` to the end of the content.
///
/// Each sentinel always occupies a line of its own: a newline is inserted
/// before the start sentinel when the content does not end with one.
pub fn append_region(content: &str, sentinels: &Sentinels, fragment: &str) -> String {
    let body = normalize_fragment(fragment);
    let capacity =
        content.len() + body.len() + sentinels.start.len() + sentinels.end.len() + 3;
    let mut result = String::with_capacity(capacity);

    result.push_str(content);
    if !result.is_empty() && !result.ends_with('\n') {
        result.push('\n');
    }
    result.push_str(&sentinels.start);
    result.push('\n');
    result.push_str(&body);
    result.push_str(&sentinels.end);
    result.push('\n');
    result
}

/// Strips every existing region, then appends a fresh one holding `fragment`.
///
/// # Example
/// ```
/// use readme_blocks::{Sentinels, splice};
///
/// let readme = "# Title\n<!-- _README:START -->\nold\n<!-- _README:END -->\n";
/// assert_eq!(
///     splice(readme, &Sentinels::default(), "Hello world"),
///     "# Title\n<!-- _README:START -->\nHello world\n<!-- _README:END -->\n"
/// );
/// ```
pub fn splice(content: &str, sentinels: &Sentinels, fragment: &str) -> String {
    let stripped = strip_regions(content, sentinels);
    append_region(&stripped, sentinels, fragment)
}
