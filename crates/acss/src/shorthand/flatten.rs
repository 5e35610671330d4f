//! The Flatten strategy: full shorthand expansion via value parsing.
//!
//! Expansion is table-driven ([`FLATTEN_RULES`]): box-model shorthands use
//! the CSS 1/2/3/4-value rules, pair shorthands use 1/2-value rules,
//! `border-radius` splits on `/` into horizontal and vertical halves, and
//! `list-style` uses a keyword heuristic. All value splitting is top-level
//! only: separators inside parentheses or quotes never split, so
//! `rgb(0, 0, 0)` stays one token. A trailing `!important` is stripped before
//! expansion and re-applied to every expanded output.
//!
//! Shorthands whose grammar cannot be expanded confidently (too many tokens,
//! duplicate claims in `list-style`) pass through unchanged rather than
//! guessing.

use super::tables::{FLATTEN_RULES, FlattenRule, RADIUS_CORNERS};
use super::{Expanded, Expansion, group_by_property};
use crate::error::AcssError;
use crate::types::Value;

const IMPORTANT: &str = "!important";

/// Expands one plain declaration per the flatten tables.
pub fn expand(property: &str, value: &str) -> Vec<(String, Expansion)> {
    let (body, important) = split_important(value);
    let expanded = match FLATTEN_RULES.get(property) {
        Some(FlattenRule::Box4(names)) => expand_box(names, body),
        Some(FlattenRule::Pair2(names)) => expand_pair(names, body),
        Some(FlattenRule::Radius) => expand_radius(body),
        Some(FlattenRule::ListStyle) => expand_list_style(body),
        None => None,
    };
    match expanded {
        Some(pairs) => pairs
            .into_iter()
            .map(|(prop, val)| {
                let val = if important {
                    format!("{} {}", val, IMPORTANT)
                } else {
                    val
                };
                (prop, Expansion::Value(val))
            })
            .collect(),
        None => vec![(property.to_string(), Expansion::Value(value.to_string()))],
    }
}

/// Expands each condition's value independently and re-groups by resulting
/// property. Nested condition sets recurse, so a branch that is itself
/// conditional expands branch by branch.
pub fn expand_conditions(
    property: &str,
    branches: &[(String, Value)],
) -> Result<Vec<(String, Vec<(String, Expanded)>)>, AcssError> {
    let mut triples: Vec<(String, String, Expanded)> = Vec::new();
    for (condition, value) in branches {
        for (prop, expanded) in expand_value(property, value)? {
            triples.push((prop, condition.clone(), expanded));
        }
    }
    Ok(group_by_property(triples))
}

fn expand_value(property: &str, value: &Value) -> Result<Vec<(String, Expanded)>, AcssError> {
    match value {
        Value::Literal(s) => Ok(expand(property, s)
            .into_iter()
            .map(|(prop, expansion)| {
                let expanded = match expansion {
                    Expansion::Value(v) => Expanded::Value(Value::Literal(v)),
                    Expansion::Unset => Expanded::Unset,
                };
                (prop, expanded)
            })
            .collect()),
        // Fallback chains have no per-token grammar to flatten; the property
        // passes through whole.
        Value::Fallbacks(_) => Ok(vec![(
            property.to_string(),
            Expanded::Value(value.clone()),
        )]),
        Value::Conditional(nested) => {
            let grouped = expand_conditions(property, nested)?;
            Ok(grouped
                .into_iter()
                .map(|(prop, conds)| {
                    let rebuilt = Value::Conditional(
                        conds
                            .into_iter()
                            .map(|(cond, expanded)| {
                                let value = match expanded {
                                    Expanded::Value(v) => v,
                                    // Flatten never produces unsets.
                                    Expanded::Unset => Value::Literal(String::new()),
                                };
                                (cond, value)
                            })
                            .collect(),
                    );
                    (prop, Expanded::Value(rebuilt))
                })
                .collect())
        }
    }
}

/// Strips a trailing importance marker, reporting whether one was present.
fn split_important(value: &str) -> (&str, bool) {
    let trimmed = value.trim_end();
    if trimmed.len() >= IMPORTANT.len()
        && trimmed[trimmed.len() - IMPORTANT.len()..].eq_ignore_ascii_case(IMPORTANT)
    {
        (trimmed[..trimmed.len() - IMPORTANT.len()].trim_end(), true)
    } else {
        (value, false)
    }
}

/// Splits a value on top-level whitespace, keeping parenthesized groups and
/// quoted strings intact.
pub fn split_top_level(value: &str) -> Vec<String> {
    split_by(value, |c| c.is_whitespace())
}

/// Splits a value on a top-level separator character.
pub fn split_top_level_on(value: &str, sep: char) -> Vec<String> {
    split_by(value, |c| c == sep)
}

fn split_by(value: &str, is_sep: impl Fn(char) -> bool) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for c in value.chars() {
        if let Some(q) = quote {
            current.push(c);
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => {
                quote = Some(c);
                current.push(c);
            }
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            c if depth == 0 && is_sep(c) => {
                if !current.trim().is_empty() {
                    parts.push(current.trim().to_string());
                }
                current.clear();
            }
            _ => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        parts.push(current.trim().to_string());
    }
    parts
}

/// CSS n-value expansion onto four longhands.
/// 1 value: all sides; 2: vertical/horizontal; 3: top, horizontal, bottom;
/// 4: top, right, bottom, left.
fn expand_box(
    names: &[&'static str; 4],
    value: &str,
) -> Option<Vec<(String, String)>> {
    let parts = split_top_level(value);
    let [top, right, bottom, left] = match parts.as_slice() {
        [a] => [a, a, a, a],
        [a, b] => [a, b, a, b],
        [a, b, c] => [a, b, c, b],
        [a, b, c, d] => [a, b, c, d],
        _ => return None,
    };
    Some(vec![
        (names[0].to_string(), top.clone()),
        (names[1].to_string(), right.clone()),
        (names[2].to_string(), bottom.clone()),
        (names[3].to_string(), left.clone()),
    ])
}

/// 1/2-value expansion onto a first/second pair.
fn expand_pair(
    names: &[&'static str; 2],
    value: &str,
) -> Option<Vec<(String, String)>> {
    let parts = split_top_level(value);
    let [first, second] = match parts.as_slice() {
        [a] => [a, a],
        [a, b] => [a, b],
        _ => return None,
    };
    Some(vec![
        (names[0].to_string(), first.clone()),
        (names[1].to_string(), second.clone()),
    ])
}

/// `border-radius` expansion: an optional top-level `/` separates the
/// horizontal and vertical radii; each half expands corner-wise on its own.
fn expand_radius(value: &str) -> Option<Vec<(String, String)>> {
    let halves = split_top_level_on(value, '/');
    let (horizontal, vertical) = match halves.as_slice() {
        [h] => (h.clone(), None),
        [h, v] => (h.clone(), Some(v.clone())),
        _ => return None,
    };
    let h = expand_corners(&horizontal)?;
    let v = match vertical {
        Some(v) => Some(expand_corners(&v)?),
        None => None,
    };
    Some(
        RADIUS_CORNERS
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let radius = match &v {
                    Some(v) => format!("{} {}", h[i], v[i]),
                    None => h[i].clone(),
                };
                (name.to_string(), radius)
            })
            .collect(),
    )
}

/// Corner-order n-value expansion (top-left, top-right, bottom-right,
/// bottom-left); the index pattern matches the box rules.
fn expand_corners(value: &str) -> Option<[String; 4]> {
    let parts = split_top_level(value);
    let corners = match parts.as_slice() {
        [a] => [a.clone(), a.clone(), a.clone(), a.clone()],
        [a, b] => [a.clone(), b.clone(), a.clone(), b.clone()],
        [a, b, c] => [a.clone(), b.clone(), c.clone(), b.clone()],
        [a, b, c, d] => [a.clone(), b.clone(), c.clone(), d.clone()],
        _ => return None,
    };
    Some(corners)
}

/// The `list-style` keyword heuristic: a `url(...)` token is the image, an
/// unclaimed `none` is the image, `inside`/`outside` is the position,
/// anything else is the type. Duplicate claims abort the expansion.
fn expand_list_style(value: &str) -> Option<Vec<(String, String)>> {
    let mut image: Option<String> = None;
    let mut position: Option<String> = None;
    let mut list_type: Option<String> = None;
    let mut nones: usize = 0;

    for token in split_top_level(value) {
        if token.starts_with("url(") {
            if image.replace(token).is_some() {
                return None;
            }
        } else if token == "inside" || token == "outside" {
            if position.replace(token).is_some() {
                return None;
            }
        } else if token == "none" {
            nones += 1;
        } else if list_type.replace(token).is_some() {
            return None;
        }
    }
    for _ in 0..nones {
        if image.is_none() {
            image = Some("none".to_string());
        } else if list_type.is_none() {
            list_type = Some("none".to_string());
        } else {
            return None;
        }
    }

    let mut out = Vec::new();
    if let Some(image) = image {
        out.push(("list-style-image".to_string(), image));
    }
    if let Some(position) = position {
        out.push(("list-style-position".to_string(), position));
    }
    if let Some(list_type) = list_type {
        out.push(("list-style-type".to_string(), list_type));
    }
    if out.is_empty() { None } else { Some(out) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(out: &[(String, Expansion)]) -> Vec<(&str, &str)> {
        out.iter()
            .map(|(p, e)| match e {
                Expansion::Value(v) => (p.as_str(), v.as_str()),
                Expansion::Unset => (p.as_str(), "<unset>"),
            })
            .collect()
    }

    #[test]
    fn two_value_margin_expands_to_four_sides() {
        let out = expand("margin", "10px 20px");
        assert_eq!(
            values(&out),
            vec![
                ("margin-top", "10px"),
                ("margin-right", "20px"),
                ("margin-bottom", "10px"),
                ("margin-left", "20px"),
            ]
        );
    }

    #[test]
    fn one_and_three_value_expansions() {
        assert_eq!(
            values(&expand("padding", "5px")),
            vec![
                ("padding-top", "5px"),
                ("padding-right", "5px"),
                ("padding-bottom", "5px"),
                ("padding-left", "5px"),
            ]
        );
        assert_eq!(
            values(&expand("margin", "1px 2px 3px")),
            vec![
                ("margin-top", "1px"),
                ("margin-right", "2px"),
                ("margin-bottom", "3px"),
                ("margin-left", "2px"),
            ]
        );
    }

    #[test]
    fn function_calls_do_not_split() {
        let out = expand("margin", "calc(1px + 2px) 10px");
        assert_eq!(
            values(&out),
            vec![
                ("margin-top", "calc(1px + 2px)"),
                ("margin-right", "10px"),
                ("margin-bottom", "calc(1px + 2px)"),
                ("margin-left", "10px"),
            ]
        );
    }

    #[test]
    fn importance_propagates_to_every_output() {
        let out = expand("gap", "10px 20px !important");
        assert_eq!(
            values(&out),
            vec![
                ("row-gap", "10px !important"),
                ("column-gap", "20px !important"),
            ]
        );
    }

    #[test]
    fn pair_shorthands_duplicate_single_values() {
        assert_eq!(
            values(&expand("overflow", "hidden")),
            vec![("overflow-x", "hidden"), ("overflow-y", "hidden")]
        );
    }

    #[test]
    fn radius_without_slash_expands_corner_wise() {
        let out = expand("border-radius", "1px 2px");
        assert_eq!(
            values(&out),
            vec![
                ("border-top-left-radius", "1px"),
                ("border-top-right-radius", "2px"),
                ("border-bottom-right-radius", "1px"),
                ("border-bottom-left-radius", "2px"),
            ]
        );
    }

    #[test]
    fn radius_slash_joins_horizontal_and_vertical_halves() {
        let out = expand("border-radius", "10px 20px / 5px");
        assert_eq!(
            values(&out),
            vec![
                ("border-top-left-radius", "10px 5px"),
                ("border-top-right-radius", "20px 5px"),
                ("border-bottom-right-radius", "10px 5px"),
                ("border-bottom-left-radius", "20px 5px"),
            ]
        );
    }

    #[test]
    fn list_style_heuristic_claims_tokens() {
        let out = expand("list-style", "square inside url(bullet.png)");
        assert_eq!(
            values(&out),
            vec![
                ("list-style-image", "url(bullet.png)"),
                ("list-style-position", "inside"),
                ("list-style-type", "square"),
            ]
        );
    }

    #[test]
    fn unclaimed_none_becomes_the_image() {
        let out = expand("list-style", "none");
        assert_eq!(values(&out), vec![("list-style-image", "none")]);

        let out = expand("list-style", "url(dot.svg) none");
        assert_eq!(
            values(&out),
            vec![
                ("list-style-image", "url(dot.svg)"),
                ("list-style-type", "none"),
            ]
        );
    }

    #[test]
    fn unknown_properties_pass_through() {
        let out = expand("color", "red");
        assert_eq!(values(&out), vec![("color", "red")]);
    }

    #[test]
    fn oversized_value_lists_pass_through() {
        let out = expand("margin", "1px 2px 3px 4px 5px");
        assert_eq!(values(&out), vec![("margin", "1px 2px 3px 4px 5px")]);
    }

    #[test]
    fn conditions_regroup_by_resulting_property() {
        let branches = vec![
            ("default".to_string(), Value::literal("10px 20px")),
            (":hover".to_string(), Value::literal("5px")),
        ];
        let grouped = expand_conditions("margin", &branches).unwrap();
        let props: Vec<&str> = grouped.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(
            props,
            vec!["margin-top", "margin-right", "margin-bottom", "margin-left"]
        );
        for (prop, conds) in &grouped {
            assert_eq!(conds.len(), 2, "{prop} should carry both conditions");
            assert_eq!(conds[0].0, "default");
            assert_eq!(conds[1].0, ":hover");
        }
        assert_eq!(
            grouped[1].1[0].1,
            Expanded::Value(Value::literal("20px"))
        );
        assert_eq!(
            grouped[1].1[1].1,
            Expanded::Value(Value::literal("5px"))
        );
    }
}
