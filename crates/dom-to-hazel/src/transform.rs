/*
 * transform.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The dispatcher and the simple kind handlers. Elements live in element.rs.
 */

use crate::Context;
use crate::element::element_node;
use crate::position;
use hazel_ast::{self as ast, Node};
use hazel_dom::{DocumentMode, DomNode, ns};
use hazel_source_map::Position;

/// Convert one node. Children convert before their parent so position
/// cleanup can inspect the last converted child.
pub(crate) fn transform(ctx: &mut Context, node: &DomNode) -> Node {
    let saved_schema = ctx.schema;

    if let DomNode::Element(element) = node {
        ctx.schema = if element.namespace == ns::SVG {
            hazel_schema::svg()
        } else {
            hazel_schema::html()
        };
    }

    let mut result = match node {
        DomNode::Document(document) => root_node(ctx, document.mode, &document.children),
        DomNode::Fragment(fragment) => root_node(ctx, DocumentMode::NoQuirks, &fragment.children),
        DomNode::Doctype(doctype) => doctype_node(doctype),
        DomNode::Text(text) => Node::Text(ast::Text::new(text.value.clone())),
        DomNode::Comment(comment) => Node::Comment(ast::Comment::new(comment.data.clone())),
        DomNode::Element(element) => element_node(ctx, element),
    };

    if let Some(location) = node.location() {
        if let Some(resolved) = position::resolve(ctx, &mut result, location) {
            ctx.located = true;
            set_position(&mut result, resolved);
        }
    }

    ctx.schema = saved_schema;

    result
}

/// Convert a node's children, in order.
pub(crate) fn transform_children(ctx: &mut Context, children: &[DomNode]) -> Vec<Node> {
    children.iter().map(|child| transform(ctx, child)).collect()
}

/// Convert a document or fragment.
///
/// When any descendant received a position, the root itself gets a span
/// covering the whole source text.
fn root_node(ctx: &mut Context, mode: DocumentMode, children: &[DomNode]) -> Node {
    let children = transform_children(ctx, children);

    let quirks_mode = matches!(mode, DocumentMode::Quirks | DocumentMode::LimitedQuirks);
    let mut root = ast::Root::new(children, quirks_mode);

    if ctx.located {
        if let Some(index) = &ctx.index {
            tracing::trace!(length = index.len(), "synthesizing root span");
            root.position = Position::new(index.point_at(0), index.point_at(index.len()));
        }
    }

    Node::Root(root)
}

/// Convert a doctype. Empty identifiers count as absent.
fn doctype_node(doctype: &hazel_dom::Doctype) -> Node {
    Node::Doctype(ast::Doctype {
        name: doctype.name.clone().unwrap_or_default(),
        public: doctype
            .public_id
            .clone()
            .filter(|value| !value.is_empty()),
        system: doctype
            .system_id
            .clone()
            .filter(|value| !value.is_empty()),
        position: None,
    })
}

/// Attach a cleaned position to a freshly built node.
fn set_position(node: &mut Node, position: Position) {
    match node {
        Node::Root(root) => root.position = Some(position),
        Node::Element(element) => element.position = Some(position),
        Node::Text(text) => text.position = Some(position),
        Node::Comment(comment) => comment.position = Some(position),
        Node::Doctype(doctype) => doctype.position = Some(position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;
    use crate::from_dom;
    use hazel_dom::{Comment, Doctype, Document, Element, Fragment, Text};

    #[test]
    fn test_text_is_copied_verbatim() {
        let tree = DomNode::Text(Text::new("a < b"));
        match from_dom(&tree) {
            Node::Text(text) => assert_eq!(text.value, "a < b"),
            _ => panic!("Expected Text"),
        }
    }

    #[test]
    fn test_comment_is_copied_verbatim() {
        let tree = DomNode::Comment(Comment::new(" todo "));
        match from_dom(&tree) {
            Node::Comment(comment) => assert_eq!(comment.value, " todo "),
            _ => panic!("Expected Comment"),
        }
    }

    #[test]
    fn test_doctype_defaults() {
        let tree = DomNode::Doctype(Doctype {
            name: None,
            public_id: None,
            system_id: None,
            location: None,
        });
        match from_dom(&tree) {
            Node::Doctype(doctype) => {
                assert_eq!(doctype.name, "");
                assert_eq!(doctype.public, None);
                assert_eq!(doctype.system, None);
            }
            _ => panic!("Expected Doctype"),
        }
    }

    #[test]
    fn test_doctype_empty_identifiers_become_absent() {
        let tree = DomNode::Doctype(Doctype {
            name: Some("html".to_string()),
            public_id: Some(String::new()),
            system_id: Some(String::new()),
            location: None,
        });
        match from_dom(&tree) {
            Node::Doctype(doctype) => {
                assert_eq!(doctype.name, "html");
                assert_eq!(doctype.public, None);
                assert_eq!(doctype.system, None);
            }
            _ => panic!("Expected Doctype"),
        }
    }

    #[test]
    fn test_document_modes() {
        for (mode, expected) in [
            (DocumentMode::NoQuirks, false),
            (DocumentMode::Quirks, true),
            (DocumentMode::LimitedQuirks, true),
        ] {
            let tree = DomNode::Document(Document::new(mode, vec![]));
            match from_dom(&tree) {
                Node::Root(root) => assert_eq!(root.data.quirks_mode, expected),
                _ => panic!("Expected Root"),
            }
        }
    }

    #[test]
    fn test_no_source_means_no_root_span() {
        let tree = DomNode::Fragment(Fragment::new(vec![DomNode::Element(Element::new(
            "p",
            vec![],
            vec![],
        ))]));
        let options = Options {
            source: None,
            ..Options::default()
        };
        match crate::from_dom_with_options(&tree, &options) {
            Node::Root(root) => assert!(root.position.is_none()),
            _ => panic!("Expected Root"),
        }
    }
}
