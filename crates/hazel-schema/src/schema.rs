/*
 * schema.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::case::camel_case;
use crate::html::HTML_ENTRIES;
use crate::space::Space;
use crate::svg::SVG_ENTRIES;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How an attribute's value wants to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// Plain string value
    Default,
    /// Presence means true
    Boolean,
    /// Whitespace-separated token list
    SpaceSeparated,
    /// Comma-separated token list
    CommaSeparated,
}

/// A resolved attribute: its canonical property name and value kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub kind: ValueKind,
}

/// An attribute table for one space.
///
/// Keys are normalized (lowercased) attribute names; prefixed attributes
/// such as `xlink:href` are keyed with their prefix.
#[derive(Debug)]
pub struct Schema {
    space: Space,
    properties: HashMap<&'static str, (&'static str, ValueKind)>,
}

static HTML: Lazy<Schema> = Lazy::new(|| Schema::build(Space::Html, HTML_ENTRIES));
static SVG: Lazy<Schema> = Lazy::new(|| Schema::build(Space::Svg, SVG_ENTRIES));

/// The HTML attribute schema.
pub fn html() -> &'static Schema {
    &HTML
}

/// The SVG attribute schema.
pub fn svg() -> &'static Schema {
    &SVG
}

impl Schema {
    fn build(space: Space, entries: &'static [(&'static str, &'static str, ValueKind)]) -> Self {
        let properties = entries
            .iter()
            .map(|(attribute, name, kind)| (*attribute, (*name, *kind)))
            .collect();
        Schema { space, properties }
    }

    /// The space this schema describes.
    pub fn space(&self) -> Space {
        self.space
    }

    /// Resolve an attribute name to its canonical property.
    ///
    /// Lookup order: the schema table (against the lowercased name), then
    /// `data-*` camel-casing, then the attribute name verbatim with
    /// [`ValueKind::Default`].
    pub fn find(&self, attribute: &str) -> Property {
        let normal = attribute.to_ascii_lowercase();

        if let Some((name, kind)) = self.properties.get(normal.as_str()) {
            return Property {
                name: (*name).to_string(),
                kind: *kind,
            };
        }

        if normal.starts_with("data-") {
            return Property {
                name: camel_case(&normal),
                kind: ValueKind::Default,
            };
        }

        Property {
            name: attribute.to_string(),
            kind: ValueKind::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_case_mapped_names() {
        assert_eq!(
            html().find("class"),
            Property {
                name: "className".to_string(),
                kind: ValueKind::SpaceSeparated
            }
        );
        assert_eq!(html().find("for").name, "htmlFor");
        assert_eq!(html().find("http-equiv").name, "httpEquiv");
        assert_eq!(html().find("tabindex").name, "tabIndex");
    }

    #[test]
    fn test_html_booleans() {
        assert_eq!(html().find("disabled").kind, ValueKind::Boolean);
        assert_eq!(html().find("hidden").kind, ValueKind::Boolean);
        assert_eq!(html().find("allowfullscreen").name, "allowFullScreen");
    }

    #[test]
    fn test_html_comma_separated() {
        assert_eq!(html().find("accept").kind, ValueKind::CommaSeparated);
        assert_eq!(html().find("srcset").kind, ValueKind::CommaSeparated);
    }

    #[test]
    fn test_svg_camel_cased_names() {
        assert_eq!(svg().find("viewBox").name, "viewBox");
        assert_eq!(svg().find("viewbox").name, "viewBox");
        assert_eq!(svg().find("preserveaspectratio").name, "preserveAspectRatio");
        assert_eq!(svg().find("stroke-width").name, "strokeWidth");
    }

    #[test]
    fn test_svg_prefixed_names() {
        assert_eq!(svg().find("xlink:href").name, "xLinkHref");
        assert_eq!(svg().find("xmlns:xlink").name, "xmlnsXLink");
        assert_eq!(svg().find("xml:space").name, "xmlSpace");
    }

    #[test]
    fn test_svg_has_no_html_booleans() {
        // `hidden` is boolean in HTML; the SVG schema knows no such name and
        // must not coerce it.
        assert_eq!(svg().find("hidden").kind, ValueKind::Default);
        assert_eq!(html().find("hidden").kind, ValueKind::Boolean);
    }

    #[test]
    fn test_data_fallback() {
        assert_eq!(html().find("data-foo-bar").name, "dataFooBar");
        assert_eq!(html().find("data-foo-bar").kind, ValueKind::Default);
        assert_eq!(svg().find("data-x").name, "dataX");
    }

    #[test]
    fn test_unknown_passthrough() {
        let property = html().find("constructor");
        assert_eq!(property.name, "constructor");
        assert_eq!(property.kind, ValueKind::Default);

        // Unknown names keep their original casing.
        assert_eq!(html().find("unknownThing").name, "unknownThing");
    }

    #[test]
    fn test_spaces() {
        assert_eq!(html().space(), Space::Html);
        assert_eq!(svg().space(), Space::Svg);
    }
}
