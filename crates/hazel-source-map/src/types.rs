//! Core position types

use serde::{Deserialize, Serialize};

/// A place in source text.
///
/// Lines and columns are 1-based; columns count bytes from the start of the
/// line. Offsets are 0-based byte offsets from the start of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, in bytes from the line start)
    pub column: usize,
    /// Byte offset from the start of the text (0-based)
    pub offset: usize,
}

impl Point {
    /// Create a point from its three coordinates.
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Point {
            line,
            column,
            offset,
        }
    }
}

/// A span between two points.
///
/// Either side may be absent (an unclosed element has no usable end, for
/// example), but never both: [`Position::new`] normalizes the all-absent
/// case away, so a `Position` that exists always carries at least one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Start point (inclusive), if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Point>,
    /// End point (exclusive), if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Point>,
}

impl Position {
    /// Build a span from two optional points.
    ///
    /// Returns `None` when both sides are absent, so callers never attach a
    /// position that carries no information.
    pub fn new(start: Option<Point>, end: Option<Point>) -> Option<Position> {
        if start.is_none() && end.is_none() {
            None
        } else {
            Some(Position { start, end })
        }
    }

    /// Build a span with both sides present.
    pub fn spanning(start: Point, end: Point) -> Position {
        Position {
            start: Some(start),
            end: Some(end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_ordering() {
        let first = Point::new(1, 1, 0);
        let second = Point::new(1, 6, 5);
        let third = Point::new(2, 1, 10);

        assert!(first < second);
        assert!(second < third);
        assert!(first < third);
    }

    #[test]
    fn test_position_new_normalizes_empty() {
        assert!(Position::new(None, None).is_none());
    }

    #[test]
    fn test_position_new_keeps_half_spans() {
        let start = Point::new(1, 1, 0);
        let position = Position::new(Some(start), None).unwrap();
        assert_eq!(position.start, Some(start));
        assert_eq!(position.end, None);

        let end = Point::new(1, 6, 5);
        let position = Position::new(None, Some(end)).unwrap();
        assert_eq!(position.start, None);
        assert_eq!(position.end, Some(end));
    }

    #[test]
    fn test_serialization_point() {
        let point = Point::new(5, 10, 100);
        let json = serde_json::to_string(&point).unwrap();
        let deserialized: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(point, deserialized);
    }

    #[test]
    fn test_serialization_position_skips_absent_sides() {
        let position = Position::new(Some(Point::new(1, 1, 0)), None).unwrap();
        let value = serde_json::to_value(position).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"start": {"line": 1, "column": 1, "offset": 0}})
        );
    }

    #[test]
    fn test_serialization_position_round_trip() {
        let position = Position::spanning(Point::new(1, 1, 0), Point::new(2, 4, 9));
        let json = serde_json::to_string(&position).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(position, deserialized);
    }
}
