//! Strategy behavior through the full compile pipeline: one declaration in,
//! classes and removed keys out, per strategy.

use acss::compiler::{Compiler, CompilerOptions};
use acss::error::AcssError;
use acss::shorthand::Strategy;
use acss::types::{CssValue, Declaration, PropEntry, Value};

fn compiler(strategy: Strategy) -> Compiler {
    Compiler::new(CompilerOptions {
        strategy,
        ..CompilerOptions::default()
    })
}

#[test]
fn accept_keeps_the_shorthand_and_removes_its_longhands() {
    let mut declaration = Declaration::new();
    declaration.push("margin", "10px 20px");
    let compiled = compiler(Strategy::Accept).compile(&declaration).unwrap();

    assert_eq!(compiled.classes.len(), 1);
    assert_eq!(compiled.classes[0].property, "margin");
    assert!(matches!(
        compiled.props.get("margin"),
        Some(PropEntry::Present(_))
    ));
    for longhand in [
        "margin-top",
        "margin-left",
        "margin-inline-start",
        "margin-block",
    ] {
        assert_eq!(
            compiled.props.get(longhand),
            Some(&PropEntry::Removed),
            "{longhand} should be removed"
        );
    }
}

#[test]
fn accept_unsets_longhands_for_fallback_chain_shorthands() {
    let mut declaration = Declaration::new();
    declaration
        .push("margin-top", "10px")
        .push("margin", Value::fallbacks(["10px", "1rem"]));
    let compiled = compiler(Strategy::Accept).compile(&declaration).unwrap();

    assert!(matches!(
        compiled.props.get("margin"),
        Some(PropEntry::Present(_))
    ));
    // The earlier longhand must stop applying, exactly as with a literal
    // shorthand value.
    assert_eq!(compiled.props.get("margin-top"), Some(&PropEntry::Removed));
    assert_eq!(
        compiled.props.get("margin-inline-start"),
        Some(&PropEntry::Removed)
    );
    assert_eq!(compiled.classes.len(), 2);
}

#[test]
fn fallback_chain_shorthands_pass_through_whole_under_flatten() {
    let mut declaration = Declaration::new();
    declaration.push("margin", Value::fallbacks(["10px", "1rem"]));
    let compiled = compiler(Strategy::Flatten).compile(&declaration).unwrap();

    assert_eq!(compiled.classes.len(), 1);
    assert_eq!(compiled.classes[0].property, "margin");
    assert!(!compiled.props.contains_key("margin-top"));
}

#[test]
fn accept_invalidation_is_one_directional() {
    // A longhand never unsets its shorthand.
    let mut declaration = Declaration::new();
    declaration.push("margin-top", "10px");
    let compiled = compiler(Strategy::Accept).compile(&declaration).unwrap();

    assert_eq!(compiled.classes.len(), 1);
    assert_eq!(compiled.props.len(), 1);
    assert!(!compiled.props.contains_key("margin"));
}

#[test]
fn accept_conditional_shorthand_unsets_longhands_unconditionally() {
    let mut declaration = Declaration::new();
    declaration.push(
        "margin",
        Value::conditional([
            ("default", Value::literal("10px")),
            (":hover", Value::literal("20px")),
        ]),
    );
    let compiled = compiler(Strategy::Accept).compile(&declaration).unwrap();

    assert!(compiled.props.contains_key("margin"));
    assert!(compiled.props.contains_key("margin:hover"));
    assert_eq!(compiled.props.get("margin-top"), Some(&PropEntry::Removed));
    assert!(!compiled.props.contains_key("margin-top:hover"));
}

#[test]
fn flatten_expands_two_value_margin_to_four_longhands() {
    let mut declaration = Declaration::new();
    declaration.push("margin", "10px 20px");
    let compiled = compiler(Strategy::Flatten).compile(&declaration).unwrap();

    let pairs: Vec<(&str, &CssValue)> = compiled
        .classes
        .iter()
        .map(|c| (c.property.as_str(), &c.value))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("margin-top", &CssValue::Single("10px".to_string())),
            ("margin-right", &CssValue::Single("20px".to_string())),
            ("margin-bottom", &CssValue::Single("10px".to_string())),
            ("margin-left", &CssValue::Single("20px".to_string())),
        ]
    );
    assert!(!compiled.props.contains_key("margin"));
}

#[test]
fn flatten_propagates_important_to_every_longhand() {
    let mut declaration = Declaration::new();
    declaration.push("padding", "1px 2px !important");
    let compiled = compiler(Strategy::Flatten).compile(&declaration).unwrap();

    assert_eq!(compiled.classes.len(), 4);
    for class in &compiled.classes {
        assert!(
            class.value.canonical().ends_with("!important"),
            "{} lost its flag",
            class.property
        );
    }
}

#[test]
fn flatten_splits_border_radius_on_the_slash() {
    let mut declaration = Declaration::new();
    declaration.push("border-radius", "10px / 20px");
    let compiled = compiler(Strategy::Flatten).compile(&declaration).unwrap();

    assert_eq!(compiled.classes.len(), 4);
    assert_eq!(compiled.classes[0].property, "border-top-left-radius");
    for class in &compiled.classes {
        assert_eq!(class.value, CssValue::Single("10px 20px".to_string()));
    }
}

#[test]
fn flatten_respects_functions_when_splitting() {
    let mut declaration = Declaration::new();
    declaration.push("margin", "calc(1px + 2px) 4px");
    let compiled = compiler(Strategy::Flatten).compile(&declaration).unwrap();

    assert_eq!(compiled.classes.len(), 4);
    assert_eq!(
        compiled.classes[0].value,
        CssValue::Single("calc(1px + 2px)".to_string())
    );
    assert_eq!(
        compiled.classes[1].value,
        CssValue::Single("4px".to_string())
    );
}

#[test]
fn flatten_assigns_list_style_tokens_by_kind() {
    let mut declaration = Declaration::new();
    declaration.push("list-style", "inside square");
    let compiled = compiler(Strategy::Flatten).compile(&declaration).unwrap();

    let find = |property: &str| {
        compiled
            .classes
            .iter()
            .find(|c| c.property == property)
            .map(|c| c.value.canonical())
    };
    assert_eq!(find("list-style-position").as_deref(), Some("inside"));
    assert_eq!(find("list-style-type").as_deref(), Some("square"));
    assert_eq!(find("list-style-image"), None);
}

#[test]
fn flatten_leaves_untabled_shorthands_alone() {
    let mut declaration = Declaration::new();
    declaration.push("flex", "1 1 auto");
    let compiled = compiler(Strategy::Flatten).compile(&declaration).unwrap();

    assert_eq!(compiled.classes.len(), 1);
    assert_eq!(compiled.classes[0].property, "flex");
}

#[test]
fn flatten_conditional_shorthand_regroups_by_longhand() {
    let mut declaration = Declaration::new();
    declaration.push(
        "margin",
        Value::conditional([
            ("default", Value::literal("10px 20px")),
            (":hover", Value::literal("30px")),
        ]),
    );
    let compiled = compiler(Strategy::Flatten).compile(&declaration).unwrap();

    assert!(compiled.props.contains_key("margin-top"));
    assert!(compiled.props.contains_key("margin-top:hover"));
    assert!(!compiled.props.contains_key("margin"));
    // 4 longhands x 2 branches, but hover's one-value box collapses the
    // per-side values to the same rule.
    let hover_values: Vec<String> = compiled
        .classes
        .iter()
        .filter(|c| c.selector_suffix.as_deref() == Some(":hover"))
        .map(|c| c.value.canonical())
        .collect();
    assert!(hover_values.iter().all(|v| v == "30px"));
}

#[test]
fn forbid_rejects_border_and_names_replacements() {
    let mut declaration = Declaration::new();
    declaration.push("border", "1px solid red");
    let err = compiler(Strategy::Forbid).compile(&declaration).unwrap_err();

    match err {
        AcssError::ShorthandForbidden {
            property,
            replacements,
        } => {
            assert_eq!(property, "border");
            assert_eq!(
                replacements,
                vec!["border-width", "border-style", "border-color"]
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    let message = compiler(Strategy::Forbid)
        .compile(&declaration)
        .unwrap_err()
        .to_string();
    assert!(message.contains("border-width"));
    assert!(message.contains("border-style"));
    assert!(message.contains("border-color"));
}

#[test]
fn forbid_rejects_denylisted_fallback_and_conditional_values() {
    let mut fallback = Declaration::new();
    fallback.push("transition", Value::fallbacks(["all 0.2s", "all 1s"]));
    assert!(compiler(Strategy::Forbid).compile(&fallback).is_err());

    let mut conditional = Declaration::new();
    conditional.push(
        "font",
        Value::conditional([("default", Value::literal("16px serif"))]),
    );
    assert!(compiler(Strategy::Forbid).compile(&conditional).is_err());
}

#[test]
fn forbid_passes_longhands_untouched() {
    let mut declaration = Declaration::new();
    declaration
        .push("border-top-width", "1px")
        .push("margin", "10px");
    let compiled = compiler(Strategy::Forbid).compile(&declaration).unwrap();

    // `margin` is not on the denylist; it passes through as itself.
    assert_eq!(compiled.classes.len(), 2);
    assert!(compiled.props.contains_key("margin"));
}
