//! Static shorthand data tables.
//!
//! These are compiled in so the core stays free of I/O. Three tables:
//!
//! - [`SHORTHAND_LONGHANDS`]: every longhand a shorthand subsumes, used by
//!   the Accept strategy to invalidate previously declared longhands.
//! - [`FLATTEN_RULES`]: how the Flatten strategy expands a shorthand's value.
//! - [`FORBIDDEN`]: the Forbid denylist with curated safe replacements.

use phf::phf_map;

/// How the Flatten strategy splits one shorthand's value list.
#[derive(Debug, Clone, Copy)]
pub enum FlattenRule {
    /// CSS 1/2/3/4-value box expansion onto four longhands (top, right,
    /// bottom, left order; corner order for radii).
    Box4(&'static [&'static str; 4]),
    /// 1/2-value expansion onto a first/second longhand pair.
    Pair2(&'static [&'static str; 2]),
    /// `border-radius` with its `/` horizontal/vertical split.
    Radius,
    /// The `list-style` keyword heuristic.
    ListStyle,
}

/// Longhands subsumed by each shorthand, in canonical order. The lists are
/// deliberately transitive: `border` covers the per-side and per-aspect
/// shorthands *and* their longhands, because declaring `border` invalidates
/// all of them.
pub static SHORTHAND_LONGHANDS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "animation" => &[
        "animation-name", "animation-duration", "animation-timing-function",
        "animation-delay", "animation-iteration-count", "animation-direction",
        "animation-fill-mode", "animation-play-state", "animation-timeline",
    ],
    "background" => &[
        "background-attachment", "background-clip", "background-color",
        "background-image", "background-origin", "background-position",
        "background-position-x", "background-position-y", "background-repeat",
        "background-size",
    ],
    "background-position" => &["background-position-x", "background-position-y"],
    "border" => &[
        "border-width", "border-style", "border-color",
        "border-top", "border-right", "border-bottom", "border-left",
        "border-top-width", "border-top-style", "border-top-color",
        "border-right-width", "border-right-style", "border-right-color",
        "border-bottom-width", "border-bottom-style", "border-bottom-color",
        "border-left-width", "border-left-style", "border-left-color",
        "border-block", "border-block-start", "border-block-end",
        "border-inline", "border-inline-start", "border-inline-end",
        "border-block-start-width", "border-block-start-style", "border-block-start-color",
        "border-block-end-width", "border-block-end-style", "border-block-end-color",
        "border-inline-start-width", "border-inline-start-style", "border-inline-start-color",
        "border-inline-end-width", "border-inline-end-style", "border-inline-end-color",
    ],
    "border-width" => &[
        "border-top-width", "border-right-width", "border-bottom-width",
        "border-left-width", "border-block-start-width", "border-block-end-width",
        "border-inline-start-width", "border-inline-end-width",
    ],
    "border-style" => &[
        "border-top-style", "border-right-style", "border-bottom-style",
        "border-left-style", "border-block-start-style", "border-block-end-style",
        "border-inline-start-style", "border-inline-end-style",
    ],
    "border-color" => &[
        "border-top-color", "border-right-color", "border-bottom-color",
        "border-left-color", "border-block-start-color", "border-block-end-color",
        "border-inline-start-color", "border-inline-end-color",
    ],
    "border-top" => &["border-top-width", "border-top-style", "border-top-color"],
    "border-right" => &["border-right-width", "border-right-style", "border-right-color"],
    "border-bottom" => &["border-bottom-width", "border-bottom-style", "border-bottom-color"],
    "border-left" => &["border-left-width", "border-left-style", "border-left-color"],
    "border-block" => &[
        "border-block-start", "border-block-end",
        "border-block-start-width", "border-block-start-style", "border-block-start-color",
        "border-block-end-width", "border-block-end-style", "border-block-end-color",
    ],
    "border-inline" => &[
        "border-inline-start", "border-inline-end",
        "border-inline-start-width", "border-inline-start-style", "border-inline-start-color",
        "border-inline-end-width", "border-inline-end-style", "border-inline-end-color",
    ],
    "border-block-start" => &[
        "border-block-start-width", "border-block-start-style", "border-block-start-color",
    ],
    "border-block-end" => &[
        "border-block-end-width", "border-block-end-style", "border-block-end-color",
    ],
    "border-inline-start" => &[
        "border-inline-start-width", "border-inline-start-style", "border-inline-start-color",
    ],
    "border-inline-end" => &[
        "border-inline-end-width", "border-inline-end-style", "border-inline-end-color",
    ],
    "border-image" => &[
        "border-image-source", "border-image-slice", "border-image-width",
        "border-image-outset", "border-image-repeat",
    ],
    "border-radius" => &[
        "border-top-left-radius", "border-top-right-radius",
        "border-bottom-right-radius", "border-bottom-left-radius",
        "border-start-start-radius", "border-start-end-radius",
        "border-end-start-radius", "border-end-end-radius",
    ],
    "column-rule" => &["column-rule-width", "column-rule-style", "column-rule-color"],
    "columns" => &["column-count", "column-width"],
    "contain-intrinsic-size" => &["contain-intrinsic-width", "contain-intrinsic-height"],
    "container" => &["container-name", "container-type"],
    "flex" => &["flex-grow", "flex-shrink", "flex-basis"],
    "flex-flow" => &["flex-direction", "flex-wrap"],
    "font" => &[
        "font-family", "font-size", "font-stretch", "font-style",
        "font-variant", "font-variant-caps", "font-variant-ligatures",
        "font-variant-numeric", "font-weight", "line-height",
    ],
    "font-variant" => &[
        "font-variant-alternates", "font-variant-caps", "font-variant-east-asian",
        "font-variant-ligatures", "font-variant-numeric", "font-variant-position",
    ],
    "gap" => &["row-gap", "column-gap"],
    "grid" => &[
        "grid-template", "grid-template-rows", "grid-template-columns",
        "grid-template-areas", "grid-auto-rows", "grid-auto-columns",
        "grid-auto-flow",
    ],
    "grid-area" => &[
        "grid-row", "grid-row-start", "grid-row-end",
        "grid-column", "grid-column-start", "grid-column-end",
    ],
    "grid-column" => &["grid-column-start", "grid-column-end"],
    "grid-row" => &["grid-row-start", "grid-row-end"],
    "grid-template" => &[
        "grid-template-rows", "grid-template-columns", "grid-template-areas",
    ],
    "inset" => &[
        "top", "right", "bottom", "left",
        "inset-block", "inset-block-start", "inset-block-end",
        "inset-inline", "inset-inline-start", "inset-inline-end",
    ],
    "inset-block" => &["inset-block-start", "inset-block-end"],
    "inset-inline" => &["inset-inline-start", "inset-inline-end"],
    "list-style" => &["list-style-image", "list-style-position", "list-style-type"],
    "margin" => &[
        "margin-top", "margin-right", "margin-bottom", "margin-left",
        "margin-block", "margin-block-start", "margin-block-end",
        "margin-inline", "margin-inline-start", "margin-inline-end",
    ],
    "margin-block" => &["margin-block-start", "margin-block-end"],
    "margin-inline" => &["margin-inline-start", "margin-inline-end"],
    "mask" => &[
        "mask-image", "mask-mode", "mask-position", "mask-size",
        "mask-repeat", "mask-origin", "mask-clip", "mask-composite",
    ],
    "offset" => &[
        "offset-position", "offset-path", "offset-distance",
        "offset-rotate", "offset-anchor",
    ],
    "outline" => &["outline-width", "outline-style", "outline-color"],
    "overflow" => &["overflow-x", "overflow-y"],
    "overscroll-behavior" => &["overscroll-behavior-x", "overscroll-behavior-y"],
    "padding" => &[
        "padding-top", "padding-right", "padding-bottom", "padding-left",
        "padding-block", "padding-block-start", "padding-block-end",
        "padding-inline", "padding-inline-start", "padding-inline-end",
    ],
    "padding-block" => &["padding-block-start", "padding-block-end"],
    "padding-inline" => &["padding-inline-start", "padding-inline-end"],
    "place-content" => &["align-content", "justify-content"],
    "place-items" => &["align-items", "justify-items"],
    "place-self" => &["align-self", "justify-self"],
    "scroll-margin" => &[
        "scroll-margin-top", "scroll-margin-right",
        "scroll-margin-bottom", "scroll-margin-left",
    ],
    "scroll-padding" => &[
        "scroll-padding-top", "scroll-padding-right",
        "scroll-padding-bottom", "scroll-padding-left",
    ],
    "text-decoration" => &[
        "text-decoration-line", "text-decoration-style",
        "text-decoration-color", "text-decoration-thickness",
    ],
    "text-emphasis" => &["text-emphasis-style", "text-emphasis-color"],
    "transition" => &[
        "transition-property", "transition-duration",
        "transition-timing-function", "transition-delay", "transition-behavior",
    ],
};

/// Flatten-strategy expansion rules. Shorthands absent from this table pass
/// through unchanged under Flatten.
pub static FLATTEN_RULES: phf::Map<&'static str, FlattenRule> = phf_map! {
    "margin" => FlattenRule::Box4(&["margin-top", "margin-right", "margin-bottom", "margin-left"]),
    "padding" => FlattenRule::Box4(&["padding-top", "padding-right", "padding-bottom", "padding-left"]),
    "inset" => FlattenRule::Box4(&["top", "right", "bottom", "left"]),
    "border-width" => FlattenRule::Box4(&["border-top-width", "border-right-width", "border-bottom-width", "border-left-width"]),
    "border-style" => FlattenRule::Box4(&["border-top-style", "border-right-style", "border-bottom-style", "border-left-style"]),
    "border-color" => FlattenRule::Box4(&["border-top-color", "border-right-color", "border-bottom-color", "border-left-color"]),
    "scroll-margin" => FlattenRule::Box4(&["scroll-margin-top", "scroll-margin-right", "scroll-margin-bottom", "scroll-margin-left"]),
    "scroll-padding" => FlattenRule::Box4(&["scroll-padding-top", "scroll-padding-right", "scroll-padding-bottom", "scroll-padding-left"]),
    "gap" => FlattenRule::Pair2(&["row-gap", "column-gap"]),
    "grid-gap" => FlattenRule::Pair2(&["row-gap", "column-gap"]),
    "overflow" => FlattenRule::Pair2(&["overflow-x", "overflow-y"]),
    "overscroll-behavior" => FlattenRule::Pair2(&["overscroll-behavior-x", "overscroll-behavior-y"]),
    "place-content" => FlattenRule::Pair2(&["align-content", "justify-content"]),
    "place-items" => FlattenRule::Pair2(&["align-items", "justify-items"]),
    "place-self" => FlattenRule::Pair2(&["align-self", "justify-self"]),
    "contain-intrinsic-size" => FlattenRule::Pair2(&["contain-intrinsic-width", "contain-intrinsic-height"]),
    "margin-block" => FlattenRule::Pair2(&["margin-block-start", "margin-block-end"]),
    "margin-inline" => FlattenRule::Pair2(&["margin-inline-start", "margin-inline-end"]),
    "padding-block" => FlattenRule::Pair2(&["padding-block-start", "padding-block-end"]),
    "padding-inline" => FlattenRule::Pair2(&["padding-inline-start", "padding-inline-end"]),
    "inset-block" => FlattenRule::Pair2(&["inset-block-start", "inset-block-end"]),
    "inset-inline" => FlattenRule::Pair2(&["inset-inline-start", "inset-inline-end"]),
    "border-radius" => FlattenRule::Radius,
    "list-style" => FlattenRule::ListStyle,
};

/// Corner order for radius expansion: top-left, top-right, bottom-right,
/// bottom-left.
pub static RADIUS_CORNERS: [&str; 4] = [
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-right-radius",
    "border-bottom-left-radius",
];

/// The Forbid denylist: shorthands whose multi-value grammar is ambiguous
/// enough that atomic splitting silently changes meaning. Values are the
/// curated safe replacements named in the error message.
pub static FORBIDDEN: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "animation" => &[
        "animation-name", "animation-duration", "animation-timing-function",
        "animation-delay", "animation-iteration-count",
    ],
    "background" => &[
        "background-color", "background-image", "background-position",
        "background-repeat", "background-size",
    ],
    "border" => &["border-width", "border-style", "border-color"],
    "border-top" => &["border-top-width", "border-top-style", "border-top-color"],
    "border-right" => &["border-right-width", "border-right-style", "border-right-color"],
    "border-bottom" => &["border-bottom-width", "border-bottom-style", "border-bottom-color"],
    "border-left" => &["border-left-width", "border-left-style", "border-left-color"],
    "border-block" => &["border-block-start", "border-block-end"],
    "border-inline" => &["border-inline-start", "border-inline-end"],
    "column-rule" => &["column-rule-width", "column-rule-style", "column-rule-color"],
    "flex-flow" => &["flex-direction", "flex-wrap"],
    "font" => &["font-family", "font-size", "font-style", "font-weight", "line-height"],
    "grid" => &["grid-template-rows", "grid-template-columns", "grid-template-areas"],
    "list-style" => &["list-style-image", "list-style-position", "list-style-type"],
    "mask" => &["mask-image", "mask-position", "mask-size", "mask-repeat"],
    "offset" => &["offset-path", "offset-distance", "offset-rotate"],
    "outline" => &["outline-width", "outline-style", "outline-color"],
    "text-decoration" => &[
        "text-decoration-line", "text-decoration-style", "text-decoration-color",
    ],
    "transition" => &[
        "transition-property", "transition-duration",
        "transition-timing-function", "transition-delay",
    ],
};
