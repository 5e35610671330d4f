//! The Forbid strategy: ambiguous shorthands are compile errors.
//!
//! Everything not on the denylist passes through unchanged; a denylisted
//! property raises [`AcssError::ShorthandForbidden`] carrying the safe
//! longhand replacements, so the error message is directly actionable.

use super::Expansion;
use super::tables::FORBIDDEN;
use crate::error::AcssError;

/// Fails iff `property` is on the denylist.
pub fn check(property: &str) -> Result<(), AcssError> {
    match FORBIDDEN.get(property) {
        Some(replacements) => Err(AcssError::ShorthandForbidden {
            property: property.to_string(),
            replacements: replacements.to_vec(),
        }),
        None => Ok(()),
    }
}

/// Passes the declaration through unchanged after the denylist check.
pub fn expand(property: &str, value: &str) -> Result<Vec<(String, Expansion)>, AcssError> {
    check(property)?;
    Ok(vec![(
        property.to_string(),
        Expansion::Value(value.to_string()),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_is_forbidden_and_names_replacements() {
        let err = expand("border", "1px solid red").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("border-width"));
        assert!(message.contains("border-style"));
        assert!(message.contains("border-color"));
        assert!(message.contains("`border`"));
    }

    #[test]
    fn unlisted_properties_pass_through() {
        let out = expand("margin", "10px 20px").unwrap();
        assert_eq!(
            out,
            vec![(
                "margin".to_string(),
                Expansion::Value("10px 20px".to_string())
            )]
        );
    }
}
