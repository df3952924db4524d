/*
 * property.rs
 * Copyright (c) 2025 Posit, PBC
 */

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// Element properties, keyed by canonical property name.
///
/// Insertion-ordered so trees serialize the way they were built; consumers
/// must not rely on any particular key order. Keys are ordinary map entries,
/// so attribute names that collide with well-known identifiers
/// (`constructor`, `toString`, …) behave like any other name.
pub type Properties = LinkedHashMap<String, PropertyValue>;

/// A coerced property value.
///
/// Which variant an attribute produces is decided by the schema: boolean
/// attributes coerce to `Boolean(true)` on presence, list-valued attributes
/// to `List`, everything else stays a verbatim `String`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Boolean(bool),
    String(String),
    List(Vec<String>),
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Boolean(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        PropertyValue::List(value)
    }
}
