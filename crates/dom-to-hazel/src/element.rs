/*
 * element.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Convert elements: attribute coercion through the active schema, and the
 * `template` content subtree.
 */

use crate::Context;
use crate::position;
use crate::transform::{transform, transform_children};
use hazel_ast::{self as ast, Node, Properties, PropertyValue};
use hazel_dom::Element;
use hazel_schema::ValueKind;
use hazel_source_map::Position;

/// Convert an element.
pub(crate) fn element_node(ctx: &mut Context, element: &Element) -> Node {
    let children = transform_children(ctx, &element.children);

    let mut properties = Properties::new();
    for attribute in &element.attrs {
        let property = ctx.schema.find(&attribute.key());
        properties.insert(property.name, coerce(property.kind, &attribute.value));
    }

    let mut result = ast::Element::new(element.tag_name.clone(), properties, children);

    if result.tag_name == "template" {
        if let Some(contents) = &element.template_contents {
            result.content = Some(Box::new(template_content(ctx, element, contents)));
        }
    }

    Node::Element(result)
}

/// Coerce an attribute value according to its schema kind.
fn coerce(kind: ValueKind, value: &str) -> PropertyValue {
    match kind {
        ValueKind::Boolean => PropertyValue::Boolean(true),
        ValueKind::SpaceSeparated => PropertyValue::List(
            value
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        ),
        ValueKind::CommaSeparated => PropertyValue::List(
            value
                .split(',')
                .map(|token| token.trim().to_string())
                .filter(|token| !token.is_empty())
                .collect(),
        ),
        ValueKind::Default => PropertyValue::String(value.to_string()),
    }
}

/// Convert a `template` element's fragment.
///
/// The content's span runs from the end of the opening tag to the start of
/// the closing tag; it is attached only when both points are derivable,
/// whether or not the element's own position is.
fn template_content(
    ctx: &mut Context,
    element: &Element,
    contents: &hazel_dom::DomNode,
) -> ast::Root {
    let mut content = match transform(ctx, contents) {
        Node::Root(root) => root,
        other => ast::Root::new(vec![other], false),
    };

    if let Some(index) = &ctx.index {
        let start = element
            .location
            .as_ref()
            .and_then(|location| location.start_tag.as_ref())
            .and_then(|tag| position::end_point(index, tag));
        let end = element
            .location
            .as_ref()
            .and_then(|location| location.end_tag.as_ref())
            .and_then(|tag| position::start_point(index, tag));

        if let (Some(start), Some(end)) = (start, end) {
            content.position = Some(Position::spanning(start, end));
        }
    }

    content
}
