//! Source positions for hazel
//!
//! This crate provides the position types attached to hazel syntax trees and
//! a byte-offset index over source text for deriving them. The index is built
//! once per text and answers offset → line/column lookups (and the inverse)
//! without re-scanning the source.
//!
//! # Overview
//!
//! The core types are:
//! - [`Point`]: a single place in source text (1-based line/column, 0-based
//!   byte offset)
//! - [`Position`]: a span between two optional points, normalized so a span
//!   with no information is never constructed
//! - [`SourceIndex`]: a precomputed line-break index over one source text
//!
//! # Example
//!
//! ```rust
//! use hazel_source_map::SourceIndex;
//!
//! let index = SourceIndex::new("<p>hi</p>\n<p>ho</p>");
//!
//! let point = index.point_at(13).unwrap();
//! assert_eq!((point.line, point.column, point.offset), (2, 4, 13));
//!
//! assert_eq!(index.offset_at(2, 4), Some(13));
//! ```

pub mod index;
pub mod types;

// Re-export main types
pub use index::SourceIndex;
pub use types::{Point, Position};
