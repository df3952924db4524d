/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Syntax tree type definitions for hazel.
 *
 * This crate provides pure data type definitions for the normalized
 * HTML/SVG syntax tree: five node kinds (root, element, text, comment,
 * doctype), schema-aware element properties, and optional source positions
 * on every node. It has minimal dependencies (serde, hazel-source-map,
 * hashlink) and can be used by any crate that needs to work with hazel
 * trees.
 */

pub mod node;
pub mod property;

// Re-export commonly used types at the crate root
pub use node::{Comment, Doctype, Element, ElementData, Node, Root, RootData, TagPositions, Text};
pub use property::{Properties, PropertyValue};
