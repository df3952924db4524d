/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The parser-produced node vocabulary.

use crate::location::NodeLocation;
use crate::ns;
use serde::{Deserialize, Serialize};

/// One node of a parsed document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DomNode {
    Document(Document),
    #[serde(rename = "document-fragment")]
    Fragment(Fragment),
    Doctype(Doctype),
    Text(Text),
    Comment(Comment),
    Element(Element),
}

impl DomNode {
    /// The node's raw location record, if the parser attached one.
    pub fn location(&self) -> Option<&NodeLocation> {
        match self {
            DomNode::Document(document) => document.location.as_ref(),
            DomNode::Fragment(fragment) => fragment.location.as_ref(),
            DomNode::Doctype(doctype) => doctype.location.as_ref(),
            DomNode::Text(text) => text.location.as_ref(),
            DomNode::Comment(comment) => comment.location.as_ref(),
            DomNode::Element(element) => element.location.as_ref(),
        }
    }
}

/// Document compatibility mode, as determined by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentMode {
    NoQuirks,
    Quirks,
    LimitedQuirks,
}

/// A full document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub mode: DocumentMode,
    pub children: Vec<DomNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<NodeLocation>,
}

impl Document {
    pub fn new(mode: DocumentMode, children: Vec<DomNode>) -> Self {
        Document {
            mode,
            children,
            location: None,
        }
    }
}

/// A document fragment (the result of fragment parsing, or the contents of
/// a `template` element).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub children: Vec<DomNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<NodeLocation>,
}

impl Fragment {
    pub fn new(children: Vec<DomNode>) -> Self {
        Fragment {
            children,
            location: None,
        }
    }
}

/// A doctype declaration. Parsers leave out whatever the source left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<NodeLocation>,
}

/// A run of character data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<NodeLocation>,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Text {
            value: value.into(),
            location: None,
        }
    }
}

/// A comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<NodeLocation>,
}

impl Comment {
    pub fn new(data: impl Into<String>) -> Self {
        Comment {
            data: data.into(),
            location: None,
        }
    }
}

/// An element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag_name: String,
    /// Namespace URI; see [`crate::ns`]
    pub namespace: String,
    pub attrs: Vec<DomAttribute>,
    pub children: Vec<DomNode>,
    /// The parsed fragment behind a `template` element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_contents: Option<Box<DomNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<NodeLocation>,
}

impl Element {
    /// An element in the HTML namespace.
    pub fn new(
        tag_name: impl Into<String>,
        attrs: Vec<DomAttribute>,
        children: Vec<DomNode>,
    ) -> Self {
        Element {
            tag_name: tag_name.into(),
            namespace: ns::HTML.to_string(),
            attrs,
            children,
            template_contents: None,
            location: None,
        }
    }

    /// An element in an explicit namespace.
    pub fn in_namespace(
        tag_name: impl Into<String>,
        namespace: impl Into<String>,
        attrs: Vec<DomAttribute>,
        children: Vec<DomNode>,
    ) -> Self {
        Element {
            namespace: namespace.into(),
            ..Element::new(tag_name, attrs, children)
        }
    }
}

/// One attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomAttribute {
    /// Namespace prefix (`xlink` in `xlink:href`), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub name: String,
    pub value: String,
}

impl DomAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        DomAttribute {
            prefix: None,
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn prefixed(
        prefix: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        DomAttribute {
            prefix: Some(prefix.into()),
            name: name.into(),
            value: value.into(),
        }
    }

    /// The attribute's key: `prefix:name` when a prefix is present, else the
    /// bare name.
    pub fn key(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}:{}", self.name),
            None => self.name.clone(),
        }
    }
}
