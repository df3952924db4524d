/*
 * position.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Clean a parser's raw location record into a position span.
 */

use crate::Context;
use hashlink::LinkedHashMap;
use hazel_ast::{ElementData, Node, TagPositions};
use hazel_dom::{NodeLocation, RawSpan};
use hazel_source_map::{Point, Position, SourceIndex};

/// Resolve a node's position from its raw location record, and attach the
/// verbose tag/attribute detail to elements when requested.
///
/// Returns `None` when no coordinate of the record survives cleaning, or
/// when the run has no source index at all.
pub(crate) fn resolve(ctx: &Context, node: &mut Node, location: &NodeLocation) -> Option<Position> {
    let index = ctx.index.as_ref()?;

    let start = start_point(index, &location.span);
    let mut end = end_point(index, &location.span);

    if let Node::Element(element) = node {
        if location.end_tag.is_none() {
            // Parsers report a bogus extent for elements they had to close
            // themselves. The last child's end is the real one; a childless
            // element ends with its own start tag.
            end = element
                .children
                .last()
                .and_then(|child| child.position())
                .and_then(|position| position.end);

            if end.is_none() && element.children.is_empty() {
                end = location
                    .start_tag
                    .as_ref()
                    .and_then(|tag| end_point(index, tag));
            }
        }

        if ctx.verbose {
            element.data = Some(ElementData {
                position: verbose_positions(ctx, index, location),
            });
        }
    }

    Position::new(start, end)
}

/// Build the verbose opening/closing/attribute spans for an element.
fn verbose_positions(ctx: &Context, index: &SourceIndex, location: &NodeLocation) -> TagPositions {
    let mut properties = LinkedHashMap::new();

    for (key, span) in &location.attrs {
        let property = ctx.schema.find(key);
        properties.insert(property.name, span_position(index, span));
    }

    tracing::trace!(attributes = properties.len(), "collected verbose spans");

    TagPositions {
        opening: location
            .start_tag
            .as_ref()
            .and_then(|tag| span_position(index, tag)),
        closing: location
            .end_tag
            .as_ref()
            .and_then(|tag| span_position(index, tag)),
        properties,
    }
}

/// Clean a raw span into a position, if anything of it survives.
pub(crate) fn span_position(index: &SourceIndex, span: &RawSpan) -> Option<Position> {
    Position::new(start_point(index, span), end_point(index, span))
}

/// The start point of a raw span.
pub(crate) fn start_point(index: &SourceIndex, span: &RawSpan) -> Option<Point> {
    resolve_point(index, span.start_line, span.start_column, span.start_offset)
}

/// The end point of a raw span.
pub(crate) fn end_point(index: &SourceIndex, span: &RawSpan) -> Option<Point> {
    resolve_point(index, span.end_line, span.end_column, span.end_offset)
}

/// Derive one point from whatever coordinates are present.
///
/// Line/column pairs are taken as-is, with a missing offset recovered
/// through the index; a bare offset is mapped through the index to
/// line/column; anything less is no point at all.
fn resolve_point(
    index: &SourceIndex,
    line: Option<usize>,
    column: Option<usize>,
    offset: Option<usize>,
) -> Option<Point> {
    match (line, column) {
        (Some(line), Some(column)) => {
            let offset = offset.or_else(|| index.offset_at(line, column))?;
            Some(Point {
                line,
                column,
                offset,
            })
        }
        _ => offset.and_then(|offset| index.point_at(offset)),
    }
}
