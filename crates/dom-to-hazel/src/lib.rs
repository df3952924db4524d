/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Convert a parser-produced document tree (hazel-dom) to a hazel syntax
 * tree (hazel-ast).
 *
 * The conversion is a single depth-first pass: children convert before
 * their parent, the active attribute schema switches to SVG inside
 * SVG-namespaced elements and back out again, and source positions are
 * cleaned from the parser's raw location records when a source text is
 * supplied.
 */

mod element;
mod position;
mod transform;

pub use hazel_schema::Space;

use hazel_ast::Node;
use hazel_dom::DomNode;
use hazel_schema::Schema;
use hazel_source_map::SourceIndex;

/// Conversion options.
///
/// `source` enables position attachment: without it no node receives a
/// `position`, whatever location records the input carries. `verbose` adds
/// per-tag and per-attribute spans to elements and only has an effect when
/// `source` is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options<'a> {
    /// Attribute space at the root of the tree
    pub space: Space,
    /// The source text the input tree was parsed from
    pub source: Option<&'a str>,
    /// Attach per-tag and per-attribute position detail to elements
    pub verbose: bool,
}

/// Ambient conversion state: the active schema plus what position work has
/// happened so far. The schema field is saved and restored around every
/// element descent.
pub(crate) struct Context {
    pub(crate) schema: &'static Schema,
    pub(crate) index: Option<SourceIndex>,
    pub(crate) verbose: bool,
    /// Whether any node in this run received a position
    pub(crate) located: bool,
}

/// Convert a document tree with default options.
pub fn from_dom(tree: &DomNode) -> Node {
    from_dom_with_options(tree, &Options::default())
}

/// Convert a document tree.
pub fn from_dom_with_options(tree: &DomNode, options: &Options) -> Node {
    tracing::debug!(
        space = %options.space,
        located = options.source.is_some(),
        verbose = options.verbose,
        "converting document tree"
    );

    let mut ctx = Context {
        schema: match options.space {
            Space::Html => hazel_schema::html(),
            Space::Svg => hazel_schema::svg(),
        },
        index: options.source.map(SourceIndex::new),
        verbose: options.verbose,
        located: false,
    };

    transform::transform(&mut ctx, tree)
}
