/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! # hazel-schema
//!
//! Attribute schemas for the HTML and SVG spaces: which attribute maps to
//! which canonical property name, and how its value wants to be interpreted
//! (plain string, boolean presence, space- or comma-separated list).
//!
//! The tables are compile-time data behind lazy statics; lookups normalize
//! the attribute name, so `viewBox`, `viewbox`, and `VIEWBOX` all resolve to
//! the `viewBox` property in the SVG schema. Names absent from a table fall
//! back to `data-*` camel-casing, then to the attribute name verbatim.

mod case;
mod html;
mod schema;
mod space;
mod svg;

pub use case::camel_case;
pub use schema::{Property, Schema, ValueKind, html, svg};
pub use space::{ParseSpaceError, Space};
