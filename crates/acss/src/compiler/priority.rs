//! Priority assignment for atomic classes.
//!
//! Every class gets a total-ordering integer built from three parts: a base
//! for the property's category, a weight for each pseudo-class or
//! pseudo-element in its selector suffix, and a weight for its at-rule. A
//! downstream emitter sorts by this integer, so more specific or more
//! contextual rules land later in the stylesheet than less specific ones no
//! matter what order they were declared in. That is the entire "last wins"
//! mechanism; real cascade order never enters into it.

use phf::{phf_map, phf_set};

/// Custom properties (`--foo`) sort below everything.
const PRIORITY_CUSTOM_PROPERTY: u32 = 1;
/// Shorthands that expand to other shorthands (`border`, `font`, ...).
const PRIORITY_SHORTHAND_OF_SHORTHANDS: u32 = 1000;
/// Shorthands that expand directly to longhands (`margin`, `gap`, ...).
const PRIORITY_SHORTHAND_OF_LONGHANDS: u32 = 2000;
/// Logical longhands (`margin-inline-start`, `inset-block-end`, ...).
const PRIORITY_LOGICAL_LONGHAND: u32 = 3000;
/// Physical longhands (`margin-left`, `top`, ...). Most specific, wins last.
const PRIORITY_PHYSICAL_LONGHAND: u32 = 4000;

/// A pseudo-element pushes the rule past every plain-selector rule.
const PSEUDO_ELEMENT_WEIGHT: u32 = 5000;

/// Weight for pseudo-classes missing from the table (treated like the
/// low-specificity functional ones).
const DEFAULT_PSEUDO_CLASS_WEIGHT: u32 = 40;

/// Weight for unrecognized at-rules (treated like `@media`).
const DEFAULT_AT_RULE_WEIGHT: u32 = 200;

static SHORTHANDS_OF_SHORTHANDS: phf::Set<&'static str> = phf_set! {
    "all",
    "animation",
    "background",
    "border",
    "border-block",
    "border-block-end",
    "border-block-start",
    "border-bottom",
    "border-image",
    "border-inline",
    "border-inline-end",
    "border-inline-start",
    "border-left",
    "border-right",
    "border-top",
    "column-rule",
    "flex-flow",
    "font",
    "grid",
    "list-style",
    "mask",
    "offset",
    "outline",
    "text-decoration",
    "text-emphasis",
    "transition",
};

static SHORTHANDS_OF_LONGHANDS: phf::Set<&'static str> = phf_set! {
    "background-position",
    "border-color",
    "border-radius",
    "border-style",
    "border-width",
    "columns",
    "contain-intrinsic-size",
    "container",
    "flex",
    "font-variant",
    "gap",
    "grid-area",
    "grid-column",
    "grid-gap",
    "grid-row",
    "grid-template",
    "inset",
    "inset-block",
    "inset-inline",
    "margin",
    "margin-block",
    "margin-inline",
    "overflow",
    "overscroll-behavior",
    "padding",
    "padding-block",
    "padding-inline",
    "place-content",
    "place-items",
    "place-self",
    "scroll-margin",
    "scroll-padding",
};

/// Fixed weights per pseudo-class. Combined pseudo-classes sum their weights.
/// Interaction states sit at the top so `:active` beats `:focus` beats
/// `:hover` in the emitted order.
static PSEUDO_CLASS_WEIGHTS: phf::Map<&'static str, u32> = phf_map! {
    ":is" => 40,
    ":where" => 40,
    ":not" => 40,
    ":has" => 45,
    ":dir" => 50,
    ":lang" => 51,
    ":first-child" => 52,
    ":last-child" => 53,
    ":only-child" => 54,
    ":link" => 60,
    ":any-link" => 61,
    ":empty" => 70,
    ":blank" => 71,
    ":checked" => 80,
    ":indeterminate" => 81,
    ":default" => 82,
    ":optional" => 83,
    ":required" => 84,
    ":valid" => 85,
    ":invalid" => 86,
    ":in-range" => 87,
    ":out-of-range" => 88,
    ":read-only" => 89,
    ":read-write" => 90,
    ":enabled" => 91,
    ":disabled" => 92,
    ":placeholder-shown" => 95,
    ":autofill" => 100,
    ":visited" => 110,
    ":target-within" => 120,
    ":target" => 121,
    ":hover" => 130,
    ":focus-within" => 140,
    ":focus" => 150,
    ":focus-visible" => 160,
    ":active" => 170,
    ":fullscreen" => 180,
    ":picture-in-picture" => 181,
};

static AT_RULE_WEIGHTS: phf::Map<&'static str, u32> = phf_map! {
    "@supports" => 30,
    "@media" => 200,
    "@container" => 300,
};

/// Returns the category base for a property name.
pub fn property_base(property: &str) -> u32 {
    if property.starts_with("--") {
        PRIORITY_CUSTOM_PROPERTY
    } else if SHORTHANDS_OF_SHORTHANDS.contains(property) {
        PRIORITY_SHORTHAND_OF_SHORTHANDS
    } else if SHORTHANDS_OF_LONGHANDS.contains(property) {
        PRIORITY_SHORTHAND_OF_LONGHANDS
    } else if is_logical(property) {
        PRIORITY_LOGICAL_LONGHAND
    } else {
        PRIORITY_PHYSICAL_LONGHAND
    }
}

/// Logical longhands carry flow-relative direction segments in their name.
fn is_logical(property: &str) -> bool {
    property == "inline-size"
        || property == "block-size"
        || property.starts_with("min-inline-")
        || property.starts_with("max-inline-")
        || property.starts_with("min-block-")
        || property.starts_with("max-block-")
        || property.contains("-inline-")
        || property.contains("-block-")
        || property.contains("-start-")
        || property.contains("-end-")
        || property.ends_with("-start")
        || property.ends_with("-end")
}

/// Sums the table weights of every pseudo-class in a selector suffix.
///
/// Functional pseudo-classes (`:not(...)`, `:dir(rtl)`) weigh by their name
/// alone; their arguments carry no weight.
pub fn pseudo_class_weight(suffix: &str) -> u32 {
    split_pseudo_classes(suffix)
        .map(|name| {
            PSEUDO_CLASS_WEIGHTS
                .get(name)
                .copied()
                .unwrap_or(DEFAULT_PSEUDO_CLASS_WEIGHT)
        })
        .sum()
}

/// Iterates the pseudo-class names (without arguments) in a suffix like
/// `":hover:not(.x):active"`.
fn split_pseudo_classes(suffix: &str) -> impl Iterator<Item = &str> {
    let mut rest = suffix;
    std::iter::from_fn(move || {
        loop {
            if rest.is_empty() {
                return None;
            }
            let Some(stripped) = rest.strip_prefix(':') else {
                // Skip stray characters so a malformed suffix cannot loop.
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
                continue;
            };
            let name_len = stripped
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
                .unwrap_or(stripped.len());
            let name = &rest[..name_len + 1];
            let mut after = &stripped[name_len..];
            if after.starts_with('(') {
                after = skip_balanced_parens(after);
            }
            rest = after;
            return Some(name);
        }
    })
}

fn skip_balanced_parens(input: &str) -> &str {
    let mut depth = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return &input[i + 1..];
                }
            }
            _ => {}
        }
    }
    ""
}

/// Returns the weight of an at-rule string by its rule name.
pub fn at_rule_weight(at_rule: &str) -> u32 {
    let name = at_rule
        .split_whitespace()
        .next()
        .unwrap_or(at_rule)
        .trim_end_matches('(');
    AT_RULE_WEIGHTS
        .get(name)
        .copied()
        .unwrap_or(DEFAULT_AT_RULE_WEIGHT)
}

/// Computes the total priority for a `(property, pseudo, at-rule)` combination.
pub fn priority(
    property: &str,
    selector_suffix: Option<&str>,
    pseudo_element: Option<&str>,
    at_rule: Option<&str>,
) -> u32 {
    let mut total = property_base(property);
    if pseudo_element.is_some() {
        total += PSEUDO_ELEMENT_WEIGHT;
    }
    if let Some(suffix) = selector_suffix {
        total += pseudo_class_weight(suffix);
    }
    if let Some(rule) = at_rule {
        total += at_rule_weight(rule);
    }
    total
}
