//! The Accept strategy: shorthand passes through, subsumed longhands unset.
//!
//! Accepting a shorthand as one atomic class is only sound if a previously
//! declared longhand of the same box stops applying. The static
//! [`SHORTHAND_LONGHANDS`] table lists what each shorthand subsumes; every
//! listed longhand is emitted as an explicit unset alongside the shorthand.
//! Invalidation runs in one direction only (shorthand unsets longhand); a
//! longhand never unsets a shorthand.

use super::tables::SHORTHAND_LONGHANDS;
use super::{Expanded, Expansion};
use crate::types::Value;
use crate::types::value::DEFAULT_KEY;

/// The longhands `property` subsumes, or an empty slice for a non-shorthand.
pub fn subsumed_longhands(property: &str) -> &'static [&'static str] {
    SHORTHAND_LONGHANDS.get(property).copied().unwrap_or(&[])
}

/// Expands one plain declaration: the shorthand itself, then one unset per
/// subsumed longhand.
pub fn expand(property: &str, value: &str) -> Vec<(String, Expansion)> {
    let mut out = vec![(property.to_string(), Expansion::Value(value.to_string()))];
    out.extend(
        subsumed_longhands(property)
            .iter()
            .map(|longhand| (longhand.to_string(), Expansion::Unset)),
    );
    out
}

/// Expands a condition set. The shorthand keeps its full condition structure;
/// the subsumed longhands are unset unconditionally, because the shorthand
/// class exists no matter which branch matches at runtime.
pub fn expand_conditions(
    property: &str,
    branches: &[(String, Value)],
) -> Vec<(String, Vec<(String, Expanded)>)> {
    let mut out = vec![(
        property.to_string(),
        branches
            .iter()
            .map(|(cond, value)| (cond.clone(), Expanded::Value(value.clone())))
            .collect::<Vec<_>>(),
    )];
    out.extend(subsumed_longhands(property).iter().map(|longhand| {
        (
            longhand.to_string(),
            vec![(DEFAULT_KEY.to_string(), Expanded::Unset)],
        )
    }));
    out
}
