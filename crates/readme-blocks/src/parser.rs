//! Region parsing for sentinel-delimited blocks.

use std::ops::Range;

use crate::sentinel::Sentinels;

/// A managed region located in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// The 1-based line number of the line holding the start sentinel.
    pub start_line: usize,
    /// The 1-based line number of the line holding the end sentinel, or the
    /// last line of the document when the region is unterminated.
    pub end_line: usize,
    /// The lines strictly between the sentinel lines, line endings included.
    pub body: String,
    /// Whether an end sentinel closed this region.
    pub terminated: bool,
    /// Byte range covering the whole region, sentinel lines included.
    pub span: Range<usize>,
}

/// Parses all regions from the given content, in order of appearance.
///
/// A region opens on a line containing the start sentinel. Only lines after
/// it are tested for the end sentinel, so a line carrying both markers opens
/// a region without closing it.
///
/// # Example
/// ```
/// use readme_blocks::{Sentinels, find_regions};
///
/// let content = "# Title\n<!-- _README:START -->\nold\n<!-- _README:END -->\n";
/// let regions = find_regions(content, &Sentinels::default());
/// assert_eq!(regions.len(), 1);
/// assert_eq!(regions[0].body, "old\n");
/// assert_eq!(regions[0].start_line, 2);
/// ```
pub fn find_regions(content: &str, sentinels: &Sentinels) -> Vec<Region> {
    let mut regions = Vec::new();
    // (start line, byte offset of start line, body)
    let mut open: Option<(usize, usize, String)> = None;
    let mut offset = 0;
    let mut last_line = 0;

    for (idx, line) in content.split_inclusive('\n').enumerate() {
        let line_no = idx + 1;
        let line_end = offset + line.len();
        last_line = line_no;

        match open.take() {
            None => {
                if sentinels.opens(line) {
                    open = Some((line_no, offset, String::new()));
                }
            }
            Some((start_line, start_offset, mut body)) => {
                if sentinels.closes(line) {
                    regions.push(Region {
                        start_line,
                        end_line: line_no,
                        body,
                        terminated: true,
                        span: start_offset..line_end,
                    });
                } else {
                    body.push_str(line);
                    open = Some((start_line, start_offset, body));
                }
            }
        }

        offset = line_end;
    }

    if let Some((start_line, start_offset, body)) = open {
        regions.push(Region {
            start_line,
            end_line: last_line,
            body,
            terminated: false,
            span: start_offset..content.len(),
        });
    }

    regions
}

/// Checks whether the content holds at least one region.
pub fn has_region(content: &str, sentinels: &Sentinels) -> bool {
    !find_regions(content, sentinels).is_empty()
}

/// Returns the body of the last terminated region, if any.
///
/// After a sync the managed region is the final one in the file, so this is
/// the content a reader sees as the mirrored fragment.
pub fn region_body(content: &str, sentinels: &Sentinels) -> Option<String> {
    find_regions(content, sentinels)
        .into_iter()
        .rev()
        .find(|region| region.terminated)
        .map(|region| region.body)
}
