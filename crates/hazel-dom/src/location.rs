/*
 * location.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Raw source locations as a parser reports them.
//!
//! These are deliberately loose: every coordinate is optional, because
//! parsers emit partial records for synthesized or unclosed constructs.
//! Cleaning them into usable spans is downstream work, not this crate's.

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// Raw extents of one construct in source text.
///
/// Lines and columns are 1-based, offsets 0-based bytes. Any subset of the
/// six coordinates may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSpan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_column: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<usize>,
}

impl RawSpan {
    /// A fully specified span.
    pub fn at(
        start_line: usize,
        start_column: usize,
        start_offset: usize,
        end_line: usize,
        end_column: usize,
        end_offset: usize,
    ) -> Self {
        RawSpan {
            start_line: Some(start_line),
            start_column: Some(start_column),
            start_offset: Some(start_offset),
            end_line: Some(end_line),
            end_column: Some(end_column),
            end_offset: Some(end_offset),
        }
    }

    /// A span carrying byte offsets only (no line/column information).
    pub fn offsets(start_offset: usize, end_offset: usize) -> Self {
        RawSpan {
            start_offset: Some(start_offset),
            end_offset: Some(end_offset),
            ..RawSpan::default()
        }
    }

    /// Whether no coordinate at all is present.
    pub fn is_vacant(&self) -> bool {
        self.start_line.is_none()
            && self.start_column.is_none()
            && self.start_offset.is_none()
            && self.end_line.is_none()
            && self.end_column.is_none()
            && self.end_offset.is_none()
    }
}

/// Raw location record for one node.
///
/// The tag and attribute fields only ever apply to elements; `end_tag` is
/// absent when the element was never closed in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeLocation {
    /// The node's full extent
    pub span: RawSpan,

    /// Extent of the opening tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_tag: Option<RawSpan>,

    /// Extent of the closing tag; absent for unclosed elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_tag: Option<RawSpan>,

    /// Per-attribute extents, keyed like [`crate::DomAttribute::key`]
    #[serde(default, skip_serializing_if = "LinkedHashMap::is_empty")]
    pub attrs: LinkedHashMap<String, RawSpan>,
}

impl NodeLocation {
    /// A location with just a full extent.
    pub fn of(span: RawSpan) -> Self {
        NodeLocation {
            span,
            ..NodeLocation::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vacant_span() {
        assert!(RawSpan::default().is_vacant());
        assert!(!RawSpan::offsets(0, 4).is_vacant());
    }

    #[test]
    fn test_serialization_skips_absent_coordinates() {
        let value = serde_json::to_value(RawSpan::offsets(3, 9)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"startOffset": 3, "endOffset": 9})
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let location = NodeLocation {
            span: RawSpan::at(1, 1, 0, 1, 22, 21),
            start_tag: Some(RawSpan::at(1, 1, 0, 1, 8, 7)),
            end_tag: None,
            attrs: LinkedHashMap::new(),
        };
        let json = serde_json::to_string(&location).unwrap();
        let deserialized: NodeLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(location, deserialized);
    }
}
