/*
 * html.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The HTML attribute table.
//!
//! Covers the attributes whose canonical property name or value kind
//! differs from the verbatim fallback. Names absent here resolve through
//! [`crate::Schema::find`]'s fallback chain.

use crate::schema::ValueKind;
use crate::schema::ValueKind::{Boolean, CommaSeparated, Default, SpaceSeparated};

pub(crate) static HTML_ENTRIES: &[(&str, &str, ValueKind)] = &[
    ("abbr", "abbr", Default),
    ("accept", "accept", CommaSeparated),
    ("accept-charset", "acceptCharset", SpaceSeparated),
    ("accesskey", "accessKey", SpaceSeparated),
    ("action", "action", Default),
    ("allowfullscreen", "allowFullScreen", Boolean),
    ("allowpaymentrequest", "allowPaymentRequest", Boolean),
    ("alt", "alt", Default),
    ("async", "async", Boolean),
    ("autocomplete", "autoComplete", SpaceSeparated),
    ("autofocus", "autoFocus", Boolean),
    ("autoplay", "autoPlay", Boolean),
    ("charset", "charSet", Default),
    ("checked", "checked", Boolean),
    ("cite", "cite", Default),
    ("class", "className", SpaceSeparated),
    ("cols", "cols", Default),
    ("colspan", "colSpan", Default),
    ("content", "content", Default),
    ("contenteditable", "contentEditable", Default),
    ("controls", "controls", Boolean),
    ("coords", "coords", CommaSeparated),
    ("crossorigin", "crossOrigin", Default),
    ("datetime", "dateTime", Default),
    ("default", "default", Boolean),
    ("defer", "defer", Boolean),
    ("dir", "dir", Default),
    ("disabled", "disabled", Boolean),
    ("download", "download", Default),
    ("draggable", "draggable", Default),
    ("enctype", "encType", Default),
    ("for", "htmlFor", SpaceSeparated),
    ("formaction", "formAction", Default),
    ("formenctype", "formEncType", Default),
    ("formmethod", "formMethod", Default),
    ("formnovalidate", "formNoValidate", Boolean),
    ("formtarget", "formTarget", Default),
    ("headers", "headers", SpaceSeparated),
    ("height", "height", Default),
    ("hidden", "hidden", Boolean),
    ("href", "href", Default),
    ("hreflang", "hrefLang", Default),
    ("http-equiv", "httpEquiv", SpaceSeparated),
    ("id", "id", Default),
    ("ismap", "isMap", Boolean),
    ("itemid", "itemId", Default),
    ("itemprop", "itemProp", SpaceSeparated),
    ("itemref", "itemRef", SpaceSeparated),
    ("itemscope", "itemScope", Boolean),
    ("itemtype", "itemType", SpaceSeparated),
    ("lang", "lang", Default),
    ("loop", "loop", Boolean),
    ("maxlength", "maxLength", Default),
    ("media", "media", Default),
    ("method", "method", Default),
    ("minlength", "minLength", Default),
    ("multiple", "multiple", Boolean),
    ("muted", "muted", Boolean),
    ("name", "name", Default),
    ("nomodule", "noModule", Boolean),
    ("novalidate", "noValidate", Boolean),
    ("open", "open", Boolean),
    ("ping", "ping", SpaceSeparated),
    ("placeholder", "placeholder", Default),
    ("playsinline", "playsInline", Boolean),
    ("poster", "poster", Default),
    ("readonly", "readOnly", Boolean),
    ("rel", "rel", SpaceSeparated),
    ("required", "required", Boolean),
    ("reversed", "reversed", Boolean),
    ("rows", "rows", Default),
    ("rowspan", "rowSpan", Default),
    ("sandbox", "sandbox", SpaceSeparated),
    ("selected", "selected", Boolean),
    ("sizes", "sizes", Default),
    ("spellcheck", "spellCheck", Default),
    ("src", "src", Default),
    ("srcdoc", "srcDoc", Default),
    ("srclang", "srcLang", Default),
    ("srcset", "srcSet", CommaSeparated),
    ("style", "style", Default),
    ("tabindex", "tabIndex", Default),
    ("target", "target", Default),
    ("title", "title", Default),
    ("translate", "translate", Default),
    ("type", "type", Default),
    ("usemap", "useMap", Default),
    ("value", "value", Default),
    ("width", "width", Default),
    ("wrap", "wrap", Default),
];
