/*
 * svg.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The SVG attribute table.
//!
//! SVG attribute names are camel- or dash-cased in source; keys here are
//! the lowercased forms, mapping back to the canonical casing. SVG has no
//! boolean attributes in the HTML sense, so no entry carries
//! [`ValueKind::Boolean`].

use crate::schema::ValueKind;
use crate::schema::ValueKind::{CommaSeparated, Default, SpaceSeparated};

pub(crate) static SVG_ENTRIES: &[(&str, &str, ValueKind)] = &[
    ("baseprofile", "baseProfile", Default),
    ("class", "className", SpaceSeparated),
    ("clip-path", "clipPath", Default),
    ("clip-rule", "clipRule", Default),
    ("cx", "cx", Default),
    ("cy", "cy", Default),
    ("d", "d", Default),
    ("dominant-baseline", "dominantBaseline", Default),
    ("externalresourcesrequired", "externalResourcesRequired", Default),
    ("fill", "fill", Default),
    ("fill-opacity", "fillOpacity", Default),
    ("fill-rule", "fillRule", Default),
    ("font-family", "fontFamily", Default),
    ("font-size", "fontSize", Default),
    ("gradienttransform", "gradientTransform", Default),
    ("gradientunits", "gradientUnits", Default),
    ("height", "height", Default),
    ("id", "id", Default),
    ("marker-end", "markerEnd", Default),
    ("marker-mid", "markerMid", Default),
    ("marker-start", "markerStart", Default),
    ("markerheight", "markerHeight", Default),
    ("markerunits", "markerUnits", Default),
    ("markerwidth", "markerWidth", Default),
    ("opacity", "opacity", Default),
    ("paint-order", "paintOrder", Default),
    ("pathlength", "pathLength", Default),
    ("patterncontentunits", "patternContentUnits", Default),
    ("patterntransform", "patternTransform", Default),
    ("patternunits", "patternUnits", Default),
    ("points", "points", Default),
    ("preserveaspectratio", "preserveAspectRatio", Default),
    ("r", "r", Default),
    ("refx", "refX", Default),
    ("refy", "refY", Default),
    ("requiredextensions", "requiredExtensions", SpaceSeparated),
    ("requiredfeatures", "requiredFeatures", SpaceSeparated),
    ("rx", "rx", Default),
    ("ry", "ry", Default),
    ("spreadmethod", "spreadMethod", Default),
    ("stop-color", "stopColor", Default),
    ("stop-opacity", "stopOpacity", Default),
    ("stroke", "stroke", Default),
    ("stroke-dasharray", "strokeDashArray", Default),
    ("stroke-dashoffset", "strokeDashOffset", Default),
    ("stroke-linecap", "strokeLineCap", Default),
    ("stroke-linejoin", "strokeLineJoin", Default),
    ("stroke-miterlimit", "strokeMiterLimit", Default),
    ("stroke-opacity", "strokeOpacity", Default),
    ("stroke-width", "strokeWidth", Default),
    ("systemlanguage", "systemLanguage", CommaSeparated),
    ("text-anchor", "textAnchor", Default),
    ("transform", "transform", Default),
    ("viewbox", "viewBox", Default),
    ("width", "width", Default),
    ("x", "x", Default),
    ("x1", "x1", Default),
    ("x2", "x2", Default),
    ("xlink:actuate", "xLinkActuate", Default),
    ("xlink:arcrole", "xLinkArcRole", Default),
    ("xlink:href", "xLinkHref", Default),
    ("xlink:role", "xLinkRole", Default),
    ("xlink:show", "xLinkShow", Default),
    ("xlink:title", "xLinkTitle", Default),
    ("xlink:type", "xLinkType", Default),
    ("xml:base", "xmlBase", Default),
    ("xml:lang", "xmlLang", Default),
    ("xml:space", "xmlSpace", Default),
    ("xmlns", "xmlns", Default),
    ("xmlns:xlink", "xmlnsXLink", Default),
    ("y", "y", Default),
    ("y1", "y1", Default),
    ("y2", "y2", Default),
];
