//! Byte-offset to line/column mapping over source text

use crate::types::Point;

/// Precomputed line-break index over one source text.
///
/// Stores the byte offset of every newline plus the total length, which is
/// enough to answer offset → point lookups in O(log n) over the number of
/// lines without keeping the text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceIndex {
    /// Byte offsets of each newline character in the text
    line_breaks: Vec<usize>,

    /// Total length of the text in bytes
    total_length: usize,
}

impl SourceIndex {
    /// Build an index by scanning the text once.
    pub fn new(source: &str) -> Self {
        let line_breaks: Vec<usize> = source
            .char_indices()
            .filter_map(|(idx, ch)| if ch == '\n' { Some(idx) } else { None })
            .collect();

        SourceIndex {
            line_breaks,
            total_length: source.len(),
        }
    }

    /// Convert a byte offset to a [`Point`].
    ///
    /// A newline belongs to the line it terminates. Offsets may point one
    /// past the end of the text (the conventional end-of-input position);
    /// anything beyond that returns `None`.
    pub fn point_at(&self, offset: usize) -> Option<Point> {
        if offset > self.total_length {
            return None;
        }

        // line_breaks[i] is the offset of the newline ending line i, so an
        // offset at or before it still belongs to line i.
        let line_index = match self.line_breaks.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx,
        };

        let line_start = if line_index == 0 {
            0
        } else {
            self.line_breaks[line_index - 1] + 1
        };

        Some(Point {
            line: line_index + 1,
            column: offset - line_start + 1,
            offset,
        })
    }

    /// Convert a 1-based line/column pair back to a byte offset.
    ///
    /// Columns may point one past the last byte of the line. Returns `None`
    /// for line 0 or column 0, lines past the end of the text, or columns
    /// running past the end of their line.
    pub fn offset_at(&self, line: usize, column: usize) -> Option<usize> {
        if line == 0 || column == 0 {
            return None;
        }

        let line_index = line - 1;
        if line_index > self.line_breaks.len() {
            return None;
        }

        let line_start = if line_index == 0 {
            0
        } else {
            self.line_breaks[line_index - 1] + 1
        };
        let line_end = self
            .line_breaks
            .get(line_index)
            .copied()
            .unwrap_or(self.total_length);

        let offset = line_start + (column - 1);
        if offset > line_end {
            return None;
        }

        Some(offset)
    }

    /// Total length of the indexed text in bytes.
    pub fn len(&self) -> usize {
        self.total_length
    }

    /// Whether the indexed text is empty.
    pub fn is_empty(&self) -> bool {
        self.total_length == 0
    }

    /// Number of lines in the indexed text.
    pub fn line_count(&self) -> usize {
        // n newlines terminate n lines; the text after the last newline (or
        // the whole text, without any) is one more.
        self.line_breaks.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let index = SourceIndex::new("");
        assert_eq!(index.len(), 0);
        assert!(index.is_empty());
        assert_eq!(index.line_count(), 1);

        let point = index.point_at(0).unwrap();
        assert_eq!(point, Point::new(1, 1, 0));
        assert!(index.point_at(1).is_none());
    }

    #[test]
    fn test_single_line() {
        let index = SourceIndex::new("hello world");
        assert_eq!(index.len(), 11);
        assert_eq!(index.line_count(), 1);

        assert_eq!(index.point_at(0).unwrap(), Point::new(1, 1, 0));
        assert_eq!(index.point_at(6).unwrap(), Point::new(1, 7, 6));

        // One past the last byte is the end-of-input position.
        assert_eq!(index.point_at(11).unwrap(), Point::new(1, 12, 11));
    }

    #[test]
    fn test_multiple_lines() {
        let source = "line 1\nline 2\nline 3";
        let index = SourceIndex::new(source);
        assert_eq!(index.line_count(), 3);

        assert_eq!(index.point_at(0).unwrap(), Point::new(1, 1, 0));

        // At the first newline (offset 6): still line 1.
        assert_eq!(index.point_at(6).unwrap(), Point::new(1, 7, 6));

        // Start of the second line.
        assert_eq!(index.point_at(7).unwrap(), Point::new(2, 1, 7));

        // Start of the third line.
        assert_eq!(index.point_at(14).unwrap(), Point::new(3, 1, 14));

        // End of text.
        assert_eq!(index.point_at(20).unwrap(), Point::new(3, 7, 20));
    }

    #[test]
    fn test_out_of_bounds() {
        let index = SourceIndex::new("hello");
        assert!(index.point_at(100).is_none());
    }

    #[test]
    fn test_unicode_content() {
        // "café" is 5 bytes: c(1) a(1) f(1) é(2); the second line starts at
        // byte offset 6.
        let index = SourceIndex::new("café\nwörld");
        assert_eq!(index.point_at(6).unwrap(), Point::new(2, 1, 6));
    }

    #[test]
    fn test_text_ending_with_newline() {
        let index = SourceIndex::new("line 1\nline 2\n");
        assert_eq!(index.line_count(), 3); // empty third line

        assert_eq!(index.point_at(13).unwrap(), Point::new(2, 7, 13));
        assert_eq!(index.point_at(14).unwrap(), Point::new(3, 1, 14));
    }

    #[test]
    fn test_consecutive_newlines() {
        let index = SourceIndex::new("a\n\n\nb");
        assert_eq!(index.line_count(), 4);

        assert_eq!(index.point_at(0).unwrap(), Point::new(1, 1, 0));
        assert_eq!(index.point_at(1).unwrap(), Point::new(1, 2, 1));
        assert_eq!(index.point_at(2).unwrap(), Point::new(2, 1, 2));
        assert_eq!(index.point_at(3).unwrap(), Point::new(3, 1, 3));
        assert_eq!(index.point_at(4).unwrap(), Point::new(4, 1, 4));
    }

    #[test]
    fn test_offset_at_simple() {
        let index = SourceIndex::new("hello\nworld");

        assert_eq!(index.offset_at(1, 1), Some(0));
        assert_eq!(index.offset_at(1, 4), Some(3));
        assert_eq!(index.offset_at(2, 1), Some(6));
        assert_eq!(index.offset_at(2, 4), Some(9));

        // One past the end of the text.
        assert_eq!(index.offset_at(2, 6), Some(11));
    }

    #[test]
    fn test_offset_at_out_of_bounds() {
        let index = SourceIndex::new("hello\nworld");
        assert_eq!(index.offset_at(0, 1), None);
        assert_eq!(index.offset_at(1, 0), None);
        assert_eq!(index.offset_at(10, 1), None);
        assert_eq!(index.offset_at(1, 100), None);
    }

    #[test]
    fn test_offset_at_interior_line_limit() {
        let index = SourceIndex::new("ab\ncd");

        // Column 3 points at the newline ending line 1; column 4 would run
        // into line 2 and is rejected.
        assert_eq!(index.offset_at(1, 3), Some(2));
        assert_eq!(index.offset_at(1, 4), None);
    }

    #[test]
    fn test_round_trip() {
        let source = "hello\nworld\ntest";
        let index = SourceIndex::new(source);

        for offset in [0, 3, 6, 10, 16] {
            let point = index.point_at(offset).unwrap();
            assert_eq!(index.offset_at(point.line, point.column), Some(offset));
        }
    }
}
