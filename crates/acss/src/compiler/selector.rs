//! Splitting flat condition strings into their selector parts.
//!
//! Flattening concatenates condition keys left to right, so a leaf can carry
//! a combined string like `":hover@media (min-width: 1000px)"` or
//! `"@media (max-width: 600px)::before"`. The compiler needs the parts
//! separated: pseudo-classes go into the selector suffix, at most one
//! pseudo-element is recorded on its own, and at-rules collapse into a single
//! enclosing rule string.

use nom::{IResult, bytes::complete::take_while1};

/// The decomposed form of a flat condition string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlatSelector {
    /// Concatenated pseudo-class tokens in source order, e.g. `":hover:active"`.
    pub pseudo_classes: Option<String>,
    /// The pseudo-element, e.g. `"::before"`. Only the first one is kept.
    pub pseudo_element: Option<String>,
    /// The enclosing at-rule. Nested at-rules of the same name merge their
    /// conditions with `and`; differently-named rules keep outermost first,
    /// space-joined, for the emitter to nest.
    pub at_rule: Option<String>,
}

/// Parses a pseudo-class or pseudo-element name (letters, digits, dashes).
fn pseudo_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-')(input)
}

/// Consumes a balanced parenthesized group, returning the text including the
/// parentheses.
fn balanced_parens(input: &str) -> (&str, &str) {
    let mut depth = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return (&input[..i + 1], &input[i + 1..]);
                }
            }
            _ => {}
        }
    }
    (input, "")
}

/// Scans an at-rule body (starting at its `@`) up to the next top-level `:`
/// or `@`.
fn at_rule_body(input: &str) -> (&str, &str) {
    let mut depth = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ':' | '@' if depth == 0 && i > 0 => {
                return (input[..i].trim_end(), &input[i..]);
            }
            _ => {}
        }
    }
    (input.trim_end(), "")
}

/// Splits a flat condition string into pseudo-classes, pseudo-element, and
/// at-rule. Unrecognized leading characters are skipped so a malformed
/// fragment degrades instead of looping.
pub fn split_flat_selector(selector: &str) -> FlatSelector {
    let mut pseudo_classes = String::new();
    let mut pseudo_element: Option<String> = None;
    let mut at_rules: Vec<String> = Vec::new();

    let mut rest = selector;
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("::") {
            let (name, mut tail) = match pseudo_name(after) {
                Ok((tail, name)) => (name, tail),
                Err(_) => {
                    rest = after;
                    continue;
                }
            };
            let mut token = format!("::{}", name);
            if tail.starts_with('(') {
                let (group, remaining) = balanced_parens(tail);
                token.push_str(group);
                tail = remaining;
            }
            if pseudo_element.is_none() {
                pseudo_element = Some(token);
            }
            rest = tail;
        } else if let Some(after) = rest.strip_prefix(':') {
            let (name, mut tail) = match pseudo_name(after) {
                Ok((tail, name)) => (name, tail),
                Err(_) => {
                    rest = after;
                    continue;
                }
            };
            pseudo_classes.push(':');
            pseudo_classes.push_str(name);
            if tail.starts_with('(') {
                let (group, remaining) = balanced_parens(tail);
                pseudo_classes.push_str(group);
                tail = remaining;
            }
            rest = tail;
        } else if rest.starts_with('@') {
            let (body, tail) = at_rule_body(rest);
            at_rules.push(body.to_string());
            rest = tail;
        } else {
            let mut chars = rest.chars();
            chars.next();
            rest = chars.as_str();
        }
    }

    FlatSelector {
        pseudo_classes: if pseudo_classes.is_empty() {
            None
        } else {
            Some(pseudo_classes)
        },
        pseudo_element,
        at_rule: combine_at_rules(at_rules),
    }
}

fn combine_at_rules(rules: Vec<String>) -> Option<String> {
    let mut iter = rules.into_iter();
    let first = iter.next()?;
    let mut combined = first;
    for rule in iter {
        let name = rule.split_whitespace().next().unwrap_or("");
        if !name.is_empty() && combined.starts_with(name) {
            // Same rule kind: conjoin the conditions.
            let condition = rule[name.len()..].trim_start();
            combined.push_str(" and ");
            combined.push_str(condition);
        } else {
            combined.push(' ');
            combined.push_str(&rule);
        }
    }
    Some(combined)
}
