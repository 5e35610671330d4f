//! Condition classification and recursive flattening.
//!
//! A conditional value is an ordered set of `(condition key, value)` branches.
//! Flattening walks that structure depth-first and produces a flat list of
//! `(selector-or-none, leaf value)` pairs: the `default` key inherits the
//! parent selector unchanged, any other key appends to it by plain
//! left-to-right concatenation, so nesting order in the declaration becomes
//! token order in the flat selector.
//!
//! Two rewrites happen on the way down:
//!
//! - Overlapping width media-query keys are made mutually exclusive
//!   ([`crate::compiler::media::enforce_exclusive_ranges`]).
//! - Under an entry-transition at-rule (`@starting-style`), a `default`
//!   branch sharing a set with width queries is confined to the complement
//!   query so it cannot leak across all viewport widths.

use crate::compiler::media;
use crate::error::AcssError;
use crate::types::CssValue;
use crate::types::value::{DEFAULT_KEY, Value};

/// The at-rule that scopes a style block to element-insertion time.
const ENTRY_TRANSITION_AT_RULE: &str = "@starting-style";

/// One flattened branch: an optional flat selector string and a concrete
/// leaf value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry {
    pub selector: Option<String>,
    pub value: CssValue,
}

/// Returns whether a condition key is selector-shaped (`:` or `@` prefixed).
fn is_condition_key(key: &str) -> bool {
    key.starts_with(':') || key.starts_with('@')
}

/// Decides whether a condition set is well-formed: either one key is the
/// default marker, or every key is a selector token. Anything else cannot be
/// read as a condition set (and, with the keys present, cannot be read as a
/// fallback list either), so it is a classification error.
pub fn is_conditional(value: &Value) -> bool {
    match value {
        Value::Conditional(branches) => {
            branches.iter().any(|(k, _)| k == DEFAULT_KEY)
                || branches.iter().all(|(k, _)| is_condition_key(k))
        }
        _ => false,
    }
}

/// Validates a condition set's key shapes, naming the property on failure.
/// Every key must be the default marker or a selector token; anything else
/// cannot be classified.
pub fn check_condition_keys(
    property: &str,
    branches: &[(String, Value)],
) -> Result<(), AcssError> {
    let well_formed = branches
        .iter()
        .all(|(k, _)| k == DEFAULT_KEY || is_condition_key(k));
    if well_formed {
        Ok(())
    } else {
        Err(AcssError::AmbiguousValueShape {
            property: property.to_string(),
        })
    }
}

/// Recursively flattens `value` under `parent_selector` into ordered
/// `(selector, leaf)` pairs.
pub fn flatten(
    property: &str,
    value: &Value,
    parent_selector: Option<&str>,
) -> Result<Vec<FlatEntry>, AcssError> {
    let mut out = Vec::new();
    flatten_into(property, value, parent_selector, &mut out)?;
    Ok(out)
}

fn flatten_into(
    property: &str,
    value: &Value,
    parent_selector: Option<&str>,
    out: &mut Vec<FlatEntry>,
) -> Result<(), AcssError> {
    match value {
        Value::Literal(s) => {
            out.push(FlatEntry {
                selector: parent_selector.map(str::to_string),
                value: CssValue::Single(s.clone()),
            });
            Ok(())
        }
        Value::Fallbacks(list) => {
            out.push(FlatEntry {
                selector: parent_selector.map(str::to_string),
                value: CssValue::Fallbacks(list.clone()),
            });
            Ok(())
        }
        Value::Conditional(branches) => {
            check_condition_keys(property, branches)?;

            let keys: Vec<String> = branches.iter().map(|(k, _)| k.clone()).collect();
            let rewritten = media::enforce_exclusive_ranges(&keys);

            // Confine the default branch when this set lives under an
            // entry-transition at-rule and declares uniform width
            // breakpoints; otherwise it would apply at every width.
            let default_suffix = if parent_selector
                .is_some_and(|p| p.contains(ENTRY_TRANSITION_AT_RULE))
            {
                let width_keys: Vec<String> = keys
                    .iter()
                    .filter(|k| media::parse_width_query(k).is_some())
                    .cloned()
                    .collect();
                if width_keys.is_empty() {
                    None
                } else {
                    media::complement_query(&width_keys)
                }
            } else {
                None
            };

            for (i, (key, sub)) in branches.iter().enumerate() {
                let child_selector = if key == DEFAULT_KEY {
                    match (&default_suffix, parent_selector) {
                        (Some(complement), Some(parent)) => {
                            Some(format!("{}{}", parent, complement))
                        }
                        (Some(complement), None) => Some(complement.clone()),
                        (None, parent) => parent.map(str::to_string),
                    }
                } else {
                    let key = &rewritten[i];
                    match parent_selector {
                        Some(parent) => Some(format!("{}{}", parent, key)),
                        None => Some(key.clone()),
                    }
                };
                flatten_into(property, sub, child_selector.as_deref(), out)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_and_fallback_values_are_not_conditional() {
        assert!(!is_conditional(&Value::literal("red")));
        assert!(!is_conditional(&Value::fallbacks(["sticky", "fixed"])));
    }

    #[test]
    fn default_marker_makes_a_condition_set() {
        let v = Value::conditional([
            ("default", Value::literal("red")),
            (":hover", Value::literal("blue")),
        ]);
        assert!(is_conditional(&v));
    }

    #[test]
    fn all_selector_keys_make_a_condition_set() {
        let v = Value::conditional([
            (":hover", Value::literal("blue")),
            ("@media (min-width: 600px)", Value::literal("green")),
        ]);
        assert!(is_conditional(&v));
    }

    #[test]
    fn mixed_keys_fail_classification() {
        let branches = vec![
            ("default".to_string(), Value::literal("red")),
            ("oops".to_string(), Value::literal("blue")),
            (":hover".to_string(), Value::literal("green")),
        ];
        let err = check_condition_keys("color", &branches).unwrap_err();
        assert!(matches!(
            err,
            AcssError::AmbiguousValueShape { property } if property == "color"
        ));
    }

    #[test]
    fn flatten_inherits_parent_for_default() {
        let v = Value::conditional([
            ("default", Value::literal("red")),
            (":hover", Value::literal("blue")),
        ]);
        let flat = flatten("color", &v, None).unwrap();
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].selector, None);
        assert_eq!(flat[0].value, CssValue::Single("red".into()));
        assert_eq!(flat[1].selector.as_deref(), Some(":hover"));
    }

    #[test]
    fn flatten_concatenates_nested_keys_in_insertion_order() {
        let v = Value::conditional([(
            "@media (min-width: 600px)",
            Value::conditional([
                ("default", Value::literal("1rem")),
                (":hover", Value::literal("2rem")),
            ]),
        )]);
        let flat = flatten("font-size", &v, None).unwrap();
        assert_eq!(
            flat[0].selector.as_deref(),
            Some("@media (min-width: 600px)")
        );
        assert_eq!(
            flat[1].selector.as_deref(),
            Some("@media (min-width: 600px):hover")
        );
    }

    #[test]
    fn flatten_rewrites_overlapping_breakpoints() {
        let v = Value::conditional([
            ("default", Value::literal("red")),
            ("@media (min-width: 1000px)", Value::literal("blue")),
            ("@media (min-width: 2000px)", Value::literal("purple")),
        ]);
        let flat = flatten("color", &v, None).unwrap();
        assert_eq!(flat[0].selector, None);
        assert_eq!(
            flat[1].selector.as_deref(),
            Some("@media (min-width: 1000px) and (max-width: 1999.99px)")
        );
        assert_eq!(
            flat[2].selector.as_deref(),
            Some("@media (min-width: 2000px)")
        );
    }

    #[test]
    fn default_is_confined_under_entry_transition() {
        let v = Value::conditional([
            ("default", Value::literal("0")),
            ("@media (min-width: 1000px)", Value::literal("10px")),
            ("@media (min-width: 2000px)", Value::literal("20px")),
        ]);
        let flat = flatten("margin-top", &v, Some("@starting-style")).unwrap();
        assert_eq!(
            flat[0].selector.as_deref(),
            Some("@starting-style@media (max-width: 999.99px)")
        );
    }

    #[test]
    fn mixed_breakpoint_shapes_leave_default_unconditional() {
        let v = Value::conditional([
            ("default", Value::literal("0")),
            ("@media (min-width: 1000px)", Value::literal("10px")),
            ("@media (max-width: 400px)", Value::literal("20px")),
        ]);
        let flat = flatten("margin-top", &v, Some("@starting-style")).unwrap();
        assert_eq!(flat[0].selector.as_deref(), Some("@starting-style"));
    }

    #[test]
    fn default_stays_unconditional_without_entry_transition() {
        let v = Value::conditional([
            ("default", Value::literal("0")),
            ("@media (min-width: 1000px)", Value::literal("10px")),
            ("@media (min-width: 2000px)", Value::literal("20px")),
        ]);
        let flat = flatten("margin-top", &v, None).unwrap();
        assert_eq!(flat[0].selector, None);
    }
}
