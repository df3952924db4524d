/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::property::Properties;
use hashlink::LinkedHashMap;
use hazel_source_map::Position;
use serde::{Deserialize, Serialize};

/// One node of a hazel syntax tree.
///
/// Serializes with a lowercase `type` tag, so trees round-trip through the
/// conventional JSON representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Root(Root),
    Element(Element),
    Text(Text),
    Comment(Comment),
    Doctype(Doctype),
}

impl Node {
    /// The node's position, if one was attached.
    pub fn position(&self) -> Option<&Position> {
        match self {
            Node::Root(root) => root.position.as_ref(),
            Node::Element(element) => element.position.as_ref(),
            Node::Text(text) => text.position.as_ref(),
            Node::Comment(comment) => comment.position.as_ref(),
            Node::Doctype(doctype) => doctype.position.as_ref(),
        }
    }

    /// The node's children, for the kinds that have any.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(root) => Some(&root.children),
            Node::Element(element) => Some(&element.children),
            Node::Text(_) | Node::Comment(_) | Node::Doctype(_) => None,
        }
    }
}

/// The root of a tree (a whole document or a fragment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Root {
    pub children: Vec<Node>,
    pub data: RootData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Root {
    pub fn new(children: Vec<Node>, quirks_mode: bool) -> Self {
        Root {
            children,
            data: RootData { quirks_mode },
            position: None,
        }
    }
}

/// Extra root information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootData {
    /// Whether the document was parsed in quirks or limited-quirks mode
    pub quirks_mode: bool,
}

/// An element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag_name: String,
    pub properties: Properties,
    pub children: Vec<Node>,
    /// Converted `template` contents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Box<Root>>,
    /// Verbose tag/attribute positions, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ElementData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Element {
    pub fn new(tag_name: impl Into<String>, properties: Properties, children: Vec<Node>) -> Self {
        Element {
            tag_name: tag_name.into(),
            properties,
            children,
            content: None,
            data: None,
            position: None,
        }
    }
}

/// Extra element information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    pub position: TagPositions,
}

/// Verbose positional detail for an element's tags and attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagPositions {
    /// Span of the opening tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening: Option<Position>,
    /// Span of the closing tag; absent for unclosed elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing: Option<Position>,
    /// Span of each attribute, keyed by canonical property name
    pub properties: LinkedHashMap<String, Option<Position>>,
}

/// A run of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Text {
            value: value.into(),
            position: None,
        }
    }
}

/// A comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Comment {
    pub fn new(value: impl Into<String>) -> Self {
        Comment {
            value: value.into(),
            position: None,
        }
    }
}

/// A doctype declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctype {
    /// Doctype name; an empty string when the source omitted one
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}
