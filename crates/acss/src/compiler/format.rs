//! Leaf-value normalization.
//!
//! The formatter is an injected pure function so hosts can swap in their own
//! numeric conventions; the default keeps the canonical form that identities
//! hash over stable: whitespace collapsed outside parentheses and quotes,
//! numeric tokens reduced to their shortest form (`.5` -> `0.5`, `1.0` ->
//! `1`, `+3px` -> `3px`). Function-call internals and quoted strings pass
//! through untouched.

/// A pure value-normalization function: `(property, raw value) -> normalized`.
pub type ValueFormatter = fn(&str, &str) -> String;

/// The default formatter. The property name is unused here but part of the
/// signature so injected formatters can special-case properties.
pub fn default_formatter(_property: &str, value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut token = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut pending_space = false;

    let flush = |token: &mut String, out: &mut String, pending_space: &mut bool| {
        if token.is_empty() {
            return;
        }
        if *pending_space && !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&normalize_token(token));
        token.clear();
        *pending_space = false;
    };

    for c in value.chars() {
        if let Some(q) = quote {
            token.push(c);
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => {
                quote = Some(c);
                token.push(c);
            }
            '(' => {
                depth += 1;
                token.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                token.push(c);
            }
            c if c.is_whitespace() && depth == 0 => {
                flush(&mut token, &mut out, &mut pending_space);
                pending_space = true;
            }
            ',' if depth == 0 => {
                flush(&mut token, &mut out, &mut pending_space);
                out.push(',');
                pending_space = true;
            }
            _ => token.push(c),
        }
    }
    flush(&mut token, &mut out, &mut pending_space);
    out
}

/// Normalizes one top-level token. Tokens that are not a plain number with an
/// optional unit suffix come back unchanged.
fn normalize_token(token: &str) -> String {
    if token.contains('(') {
        return token.to_string();
    }
    let (number, unit) = split_number(token);
    let Some(number) = number else {
        return token.to_string();
    };
    match number.parse::<f64>() {
        // f64 Display already renders the shortest round-trip form.
        Ok(n) if n.is_finite() => format!("{}{}", n, unit),
        _ => token.to_string(),
    }
}

/// Splits a token into a numeric part and a trailing unit, if the token has
/// that shape. Accepts an optional sign and a decimal point with or without
/// a leading digit.
fn split_number(token: &str) -> (Option<&str>, &str) {
    let rest = token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token);
    let digits = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len());
    if digits == 0 {
        return (None, token);
    }
    let numeric = &rest[..digits];
    if numeric.chars().filter(|&c| c == '.').count() > 1 || numeric == "." {
        return (None, token);
    }
    let unit = &rest[digits..];
    if !unit.is_empty() && !unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%') {
        return (None, token);
    }
    let offset = token.len() - rest.len() + digits;
    // Keep the sign with the number; Rust's parse handles "+.5" poorly so we
    // re-split on the original slice only when it parses as-is.
    (Some(&token[..offset]), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: &str) -> String {
        default_formatter("width", value)
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(fmt("  10px   20px "), "10px 20px");
    }

    #[test]
    fn normalizes_numbers() {
        assert_eq!(fmt("0.50em"), "0.5em");
        assert_eq!(fmt(".5"), "0.5");
        assert_eq!(fmt("1.0"), "1");
        assert_eq!(fmt("+3px"), "3px");
        assert_eq!(fmt("-0.25rem"), "-0.25rem");
    }

    #[test]
    fn leaves_function_calls_alone() {
        assert_eq!(fmt("calc(100% -  20px)"), "calc(100% -  20px)");
        assert_eq!(fmt("url( image.png )"), "url( image.png )");
        assert_eq!(fmt("rgb(0, 0, 0)"), "rgb(0, 0, 0)");
    }

    #[test]
    fn leaves_keywords_alone() {
        assert_eq!(fmt("inherit"), "inherit");
        assert_eq!(fmt("1fr auto"), "1fr auto");
    }

    #[test]
    fn top_level_commas_keep_list_shape() {
        assert_eq!(fmt("Georgia,  serif"), "Georgia, serif");
    }

    #[test]
    fn quoted_strings_pass_through() {
        assert_eq!(fmt("\"a  b\""), "\"a  b\"");
    }
}
