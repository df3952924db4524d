/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document tree model for hazel.
 *
 * This crate provides pure data type definitions for the document tree an
 * HTML/SVG parser produces: the node vocabulary (document, fragment,
 * doctype, text, comment, element), attributes, compatibility modes, raw
 * per-node source locations, and the web namespace URI constants. It has
 * minimal dependencies (serde, hashlink) and no parsing logic of its own;
 * parsers fill these structures in and downstream tooling consumes them.
 */

pub mod location;
pub mod node;
pub mod ns;

// Re-export commonly used types at the crate root
pub use location::{NodeLocation, RawSpan};
pub use node::{
    Comment, Doctype, Document, DocumentMode, DomAttribute, DomNode, Element, Fragment, Text,
};
